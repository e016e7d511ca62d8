use std::sync::Arc;

use actix_web::web;
use chrono::Duration;

use crate::auth::application::auth_use_cases::AuthUseCases;
use crate::auth::application::ports::incoming::use_cases::AdminDeleteUserUseCase;
use crate::auth::application::ports::outgoing::{PasswordHasher, TokenProvider};
use crate::auth::application::services::{
    AdminDeleteUserService, AdminUpdateUserService, ChangePasswordService, ForgotPasswordService,
    LoginUserService, RegisterUserService, ResetPasswordService, UpdateProfileService,
};
use crate::cart::application::cart_use_cases::CartUseCases;
use crate::cart::application::services::{
    CreateCartService, DeleteCartService, GetCartService, GetCartsService, GetMyCartService,
    UpdateCartService,
};
use crate::category::application::category_use_cases::CategoryUseCases;
use crate::category::application::services::{
    CreateCategoryService, DeleteCategoryService, GetCategoriesService, GetCategoryService,
    UpdateCategoryService,
};
use crate::order::application::order_use_cases::OrderUseCases;
use crate::order::application::ports::incoming::use_cases::CreateOrderUseCase;
use crate::order::application::services::{
    CancelOrderService, CreateOrderService, DeleteOrderService, GetOrderService,
    GetOrdersService, UpdateOrderService,
};
use crate::product::application::product_use_cases::ProductUseCases;
use crate::product::application::services::{
    CreateProductService, DeleteProductService, GetProductService, GetProductsService,
    UpdateProductService,
};
use crate::tests::support::{
    auth_helper::test_token_service, fakes::PlainTextHasher, in_memory::InMemoryStore,
};
use crate::AppState;

/// Real services over an [`InMemoryStore`], with hooks to swap single use cases.
#[derive(Default)]
pub struct TestAppStateBuilder {
    store: InMemoryStore,
    admin_delete_user: Option<Arc<dyn AdminDeleteUserUseCase + Send + Sync>>,
    create_order: Option<Arc<dyn CreateOrderUseCase + Send + Sync>>,
}

impl TestAppStateBuilder {
    pub fn with_store(mut self, store: InMemoryStore) -> Self {
        self.store = store;
        self
    }

    pub fn with_admin_delete_user(
        mut self,
        uc: impl AdminDeleteUserUseCase + Send + Sync + 'static,
    ) -> Self {
        self.admin_delete_user = Some(Arc::new(uc));
        self
    }

    pub fn with_create_order(
        mut self,
        uc: impl CreateOrderUseCase + Send + Sync + 'static,
    ) -> Self {
        self.create_order = Some(Arc::new(uc));
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        let store = self.store;
        let hasher: Arc<dyn PasswordHasher + Send + Sync> = Arc::new(PlainTextHasher);
        let tokens: Arc<dyn TokenProvider + Send + Sync> = Arc::new(test_token_service());

        let auth = AuthUseCases {
            register: Arc::new(RegisterUserService::new(
                store.clone(),
                store.clone(),
                hasher.clone(),
                tokens.clone(),
            )),
            login: Arc::new(LoginUserService::new(store.clone(), hasher.clone(), tokens)),
            update_profile: Arc::new(UpdateProfileService::new(store.clone(), store.clone())),
            change_password: Arc::new(ChangePasswordService::new(
                store.clone(),
                store.clone(),
                hasher.clone(),
            )),
            forgot_password: Arc::new(ForgotPasswordService::new(
                store.clone(),
                store.clone(),
                Duration::minutes(10),
            )),
            reset_password: Arc::new(ResetPasswordService::new(
                store.clone(),
                store.clone(),
                hasher,
            )),
            admin_update_user: Arc::new(AdminUpdateUserService::new(store.clone(), store.clone())),
            admin_delete_user: self
                .admin_delete_user
                .unwrap_or_else(|| Arc::new(AdminDeleteUserService::new(store.clone()))),
        };

        let category = CategoryUseCases {
            create: Arc::new(CreateCategoryService::new(store.clone())),
            update: Arc::new(UpdateCategoryService::new(store.clone())),
            delete: Arc::new(DeleteCategoryService::new(store.clone())),
            get_list: Arc::new(GetCategoriesService::new(store.clone())),
            get_single: Arc::new(GetCategoryService::new(store.clone())),
        };

        let product = ProductUseCases {
            create: Arc::new(CreateProductService::new(store.clone(), store.clone())),
            update: Arc::new(UpdateProductService::new(store.clone(), store.clone())),
            delete: Arc::new(DeleteProductService::new(store.clone())),
            get_list: Arc::new(GetProductsService::new(store.clone())),
            get_single: Arc::new(GetProductService::new(store.clone())),
        };

        let cart = CartUseCases {
            get_mine: Arc::new(GetMyCartService::new(store.clone(), store.clone())),
            create: Arc::new(CreateCartService::new(store.clone())),
            get_single: Arc::new(GetCartService::new(store.clone())),
            get_list: Arc::new(GetCartsService::new(store.clone())),
            update: Arc::new(UpdateCartService::new(store.clone(), store.clone())),
            delete: Arc::new(DeleteCartService::new(store.clone(), store.clone())),
        };

        let order = OrderUseCases {
            create: self.create_order.unwrap_or_else(|| {
                Arc::new(CreateOrderService::new(
                    store.clone(),
                    store.clone(),
                    store.clone(),
                    store.clone(),
                ))
            }),
            get_single: Arc::new(GetOrderService::new(store.clone())),
            get_list: Arc::new(GetOrdersService::new(store.clone())),
            update: Arc::new(UpdateOrderService::new(store.clone(), store.clone())),
            cancel: Arc::new(CancelOrderService::new(store.clone(), store.clone())),
            delete: Arc::new(DeleteOrderService::new(store.clone(), store)),
        };

        web::Data::new(AppState {
            auth,
            category,
            product,
            cart,
            order,
        })
    }
}
