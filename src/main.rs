pub mod config;
pub mod health;
pub mod modules;
pub mod shared;

pub use modules::{auth, cart, category, order, product};

use std::sync::Arc;
use std::time::Duration;

use actix_web::{web, App, HttpServer};
use sea_orm::{ConnectOptions, Database};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::auth::adapter::outgoing::{
    jwt::JwtTokenService, security::Argon2Hasher, UserQueryPostgres, UserRepositoryPostgres,
};
use crate::auth::application::auth_use_cases::AuthUseCases;
use crate::auth::application::ports::outgoing::{PasswordHasher, TokenProvider};
use crate::auth::application::services::{
    AdminDeleteUserService, AdminUpdateUserService, ChangePasswordService, ForgotPasswordService,
    LoginUserService, RegisterUserService, ResetPasswordService, UpdateProfileService,
};
use crate::cart::adapter::outgoing::{CartQueryPostgres, CartRepositoryPostgres};
use crate::cart::application::cart_use_cases::CartUseCases;
use crate::cart::application::services::{
    CreateCartService, DeleteCartService, GetCartService, GetCartsService, GetMyCartService,
    UpdateCartService,
};
use crate::category::adapter::outgoing::{CategoryQueryPostgres, CategoryRepositoryPostgres};
use crate::category::application::category_use_cases::CategoryUseCases;
use crate::category::application::services::{
    CreateCategoryService, DeleteCategoryService, GetCategoriesService, GetCategoryService,
    UpdateCategoryService,
};
use crate::config::AppConfig;
use crate::order::adapter::outgoing::{OrderQueryPostgres, OrderRepositoryPostgres};
use crate::order::application::order_use_cases::OrderUseCases;
use crate::order::application::services::{
    CancelOrderService, CreateOrderService, DeleteOrderService, GetOrderService,
    GetOrdersService, UpdateOrderService,
};
use crate::product::adapter::outgoing::{ProductQueryPostgres, ProductRepositoryPostgres};
use crate::product::application::product_use_cases::ProductUseCases;
use crate::product::application::services::{
    CreateProductService, DeleteProductService, GetProductService, GetProductsService,
    UpdateProductService,
};
use crate::shared::api::{custom_json_config, custom_path_config};

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub auth: AuthUseCases,
    pub category: CategoryUseCases,
    pub product: ProductUseCases,
    pub cart: CartUseCases,
    pub order: OrderUseCases,
}

fn startup_error(e: impl std::fmt::Display) -> std::io::Error {
    std::io::Error::new(std::io::ErrorKind::Other, e.to_string())
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> std::io::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info,sqlx=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::from_env().map_err(startup_error)?;
    info!(environment = %config.environment, "Starting storefront API");

    let mut opt = ConnectOptions::new(config.database_url.clone());
    opt.max_connections(50)
        .min_connections(5)
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(false);

    let db = Arc::new(Database::connect(opt).await.map_err(startup_error)?);

    let hasher: Arc<dyn PasswordHasher + Send + Sync> =
        Arc::new(Argon2Hasher::from_settings(config.argon2).map_err(startup_error)?);
    let tokens: Arc<dyn TokenProvider + Send + Sync> =
        Arc::new(JwtTokenService::new(config.jwt.clone()));

    let user_repo = UserRepositoryPostgres::new(Arc::clone(&db));
    let user_query = UserQueryPostgres::new(Arc::clone(&db));
    let category_repo = CategoryRepositoryPostgres::new(Arc::clone(&db));
    let category_query = CategoryQueryPostgres::new(Arc::clone(&db));
    let product_repo = ProductRepositoryPostgres::new(Arc::clone(&db));
    let product_query = ProductQueryPostgres::new(Arc::clone(&db));
    let cart_repo = CartRepositoryPostgres::new(Arc::clone(&db));
    let cart_query = CartQueryPostgres::new(Arc::clone(&db));
    let order_repo = OrderRepositoryPostgres::new(Arc::clone(&db));
    let order_query = OrderQueryPostgres::new(Arc::clone(&db));

    let auth = AuthUseCases {
        register: Arc::new(RegisterUserService::new(
            user_query.clone(),
            user_repo.clone(),
            hasher.clone(),
            tokens.clone(),
        )),
        login: Arc::new(LoginUserService::new(
            user_query.clone(),
            hasher.clone(),
            tokens.clone(),
        )),
        update_profile: Arc::new(UpdateProfileService::new(
            user_query.clone(),
            user_repo.clone(),
        )),
        change_password: Arc::new(ChangePasswordService::new(
            user_query.clone(),
            user_repo.clone(),
            hasher.clone(),
        )),
        forgot_password: Arc::new(ForgotPasswordService::new(
            user_query.clone(),
            user_repo.clone(),
            chrono::Duration::seconds(config.reset_token_ttl_secs),
        )),
        reset_password: Arc::new(ResetPasswordService::new(
            user_query.clone(),
            user_repo.clone(),
            hasher,
        )),
        admin_update_user: Arc::new(AdminUpdateUserService::new(
            user_query,
            user_repo.clone(),
        )),
        admin_delete_user: Arc::new(AdminDeleteUserService::new(user_repo)),
    };

    let category = CategoryUseCases {
        create: Arc::new(CreateCategoryService::new(category_repo.clone())),
        update: Arc::new(UpdateCategoryService::new(category_repo.clone())),
        delete: Arc::new(DeleteCategoryService::new(category_repo)),
        get_list: Arc::new(GetCategoriesService::new(category_query.clone())),
        get_single: Arc::new(GetCategoryService::new(category_query.clone())),
    };

    let product = ProductUseCases {
        create: Arc::new(CreateProductService::new(
            product_repo.clone(),
            category_query.clone(),
        )),
        update: Arc::new(UpdateProductService::new(
            product_repo.clone(),
            category_query,
        )),
        delete: Arc::new(DeleteProductService::new(product_repo)),
        get_list: Arc::new(GetProductsService::new(product_query.clone())),
        get_single: Arc::new(GetProductService::new(product_query.clone())),
    };

    let cart = CartUseCases {
        get_mine: Arc::new(GetMyCartService::new(cart_repo.clone(), cart_query.clone())),
        create: Arc::new(CreateCartService::new(cart_repo.clone())),
        get_single: Arc::new(GetCartService::new(cart_query.clone())),
        get_list: Arc::new(GetCartsService::new(cart_query.clone())),
        update: Arc::new(UpdateCartService::new(cart_repo.clone(), cart_query.clone())),
        delete: Arc::new(DeleteCartService::new(cart_repo.clone(), cart_query.clone())),
    };

    let order = OrderUseCases {
        create: Arc::new(CreateOrderService::new(
            order_repo.clone(),
            cart_repo,
            cart_query,
            product_query,
        )),
        get_single: Arc::new(GetOrderService::new(order_query.clone())),
        get_list: Arc::new(GetOrdersService::new(order_query.clone())),
        update: Arc::new(UpdateOrderService::new(order_repo.clone(), order_query.clone())),
        cancel: Arc::new(CancelOrderService::new(order_repo.clone(), order_query.clone())),
        delete: Arc::new(DeleteOrderService::new(order_repo, order_query)),
    };

    let state = AppState {
        auth,
        category,
        product,
        cart,
        order,
    };

    let server_url = config.server_url();
    info!("Server listening on {}", server_url);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&tokens)))
            .app_data(web::Data::new(Arc::clone(&db)))
            .app_data(custom_json_config())
            .app_data(custom_path_config())
            .configure(init_routes)
    })
    .bind(server_url)?
    .run()
    .await
}

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    use crate::auth::adapter::incoming::web::routes as auth_routes;
    use crate::cart::adapter::incoming::web::routes as cart_routes;
    use crate::category::adapter::incoming::web::routes as category_routes;
    use crate::order::adapter::incoming::web::routes as order_routes;
    use crate::product::adapter::incoming::web::routes as product_routes;

    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Auth
    cfg.service(auth_routes::register_user_handler);
    cfg.service(auth_routes::login_user_handler);
    cfg.service(auth_routes::logout_user_handler);
    cfg.service(auth_routes::get_me_handler);
    cfg.service(auth_routes::update_profile_handler);
    cfg.service(auth_routes::change_password_handler);
    cfg.service(auth_routes::forgot_password_handler);
    cfg.service(auth_routes::reset_password_handler);
    cfg.service(auth_routes::admin_update_user_handler);
    cfg.service(auth_routes::admin_delete_user_handler);
    // Categories
    cfg.service(category_routes::get_categories_handler);
    cfg.service(category_routes::get_category_handler);
    cfg.service(category_routes::create_category_handler);
    cfg.service(category_routes::update_category_handler);
    cfg.service(category_routes::delete_category_handler);
    // Products
    cfg.service(product_routes::get_products_handler);
    cfg.service(product_routes::get_product_handler);
    cfg.service(product_routes::create_product_handler);
    cfg.service(product_routes::update_product_handler);
    cfg.service(product_routes::delete_product_handler);
    // Carts: `/carts/me` must be matched before `/carts/{id}`
    cfg.service(cart_routes::get_my_cart_handler);
    cfg.service(cart_routes::get_carts_handler);
    cfg.service(cart_routes::get_cart_handler);
    cfg.service(cart_routes::create_cart_handler);
    cfg.service(cart_routes::update_cart_handler);
    cfg.service(cart_routes::delete_cart_handler);
    // Orders
    cfg.service(order_routes::get_orders_handler);
    cfg.service(order_routes::get_order_handler);
    cfg.service(order_routes::create_order_handler);
    cfg.service(order_routes::update_order_handler);
    cfg.service(order_routes::cancel_order_handler);
    cfg.service(order_routes::delete_order_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e}");
    }
}
