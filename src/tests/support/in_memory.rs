//! One store that implements every outgoing port, so services and handlers
//! can be exercised end to end without a database.

use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::auth::application::domain::{User, UserId};
use crate::auth::application::ports::outgoing::{
    CreateUserData, UpdateUserData, UserQuery, UserQueryError, UserRepository,
    UserRepositoryError,
};
use crate::cart::application::domain::{Cart, CartItem};
use crate::cart::application::ports::outgoing::{
    CartQuery, CartQueryError, CartRepository, CartRepositoryError,
};
use crate::category::application::domain::Category;
use crate::category::application::ports::outgoing::{
    CategoryQuery, CategoryQueryError, CategoryRepository, CategoryRepositoryError,
    CreateCategoryData, UpdateCategoryData,
};
use crate::order::application::domain::{
    NewOrder, Order, OrderId, OrderState, OrderStatus,
};
use crate::order::application::ports::outgoing::{
    OrderQuery, OrderQueryError, OrderRepository, OrderRepositoryError,
};
use crate::product::application::domain::Product;
use crate::product::application::ports::outgoing::{
    CreateProductData, ProductQuery, ProductQueryError, ProductRepository,
    ProductRepositoryError, UpdateProductData,
};

#[derive(Default)]
struct Inner {
    users: Vec<User>,
    categories: Vec<Category>,
    products: Vec<Product>,
    carts: Vec<Cart>,
    orders: Vec<Order>,
}

#[derive(Clone, Default)]
pub struct InMemoryStore {
    inner: Arc<Mutex<Inner>>,
}

fn newest_first<T: Clone>(items: &[T], created_at: impl Fn(&T) -> DateTime<Utc>) -> Vec<T> {
    let mut items = items.to_vec();
    items.sort_by_key(|item| std::cmp::Reverse(created_at(item)));
    items
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap()
    }

    pub fn insert_user(&self, user: User) {
        let mut inner = self.lock();
        inner.users.retain(|u| u.id != user.id);
        inner.users.push(user);
    }

    pub fn user(&self, user_id: UserId) -> Option<User> {
        self.lock().users.iter().find(|u| u.id == user_id).cloned()
    }

    pub fn user_by_email(&self, email: &str) -> Option<User> {
        self.lock().users.iter().find(|u| u.email == email).cloned()
    }

    pub fn insert_category(&self, category: Category) {
        let mut inner = self.lock();
        inner.categories.retain(|c| c.id != category.id);
        inner.categories.push(category);
    }

    pub fn category(&self, category_id: Uuid) -> Option<Category> {
        self.lock()
            .categories
            .iter()
            .find(|c| c.id == category_id)
            .cloned()
    }

    pub fn insert_product(&self, product: Product) {
        let mut inner = self.lock();
        inner.products.retain(|p| p.id != product.id);
        inner.products.push(product.with_derived_fields());
    }

    pub fn product(&self, product_id: Uuid) -> Option<Product> {
        self.lock()
            .products
            .iter()
            .find(|p| p.id == product_id)
            .cloned()
    }

    /// Replaces any cart with the same id or owner.
    pub fn insert_cart(&self, cart: Cart) {
        let mut inner = self.lock();
        inner
            .carts
            .retain(|c| c.id != cart.id && c.user_id != cart.user_id);
        inner.carts.push(cart);
    }

    pub fn cart(&self, cart_id: Uuid) -> Option<Cart> {
        self.lock().carts.iter().find(|c| c.id == cart_id).cloned()
    }

    pub fn cart_for_user(&self, user_id: UserId) -> Option<Cart> {
        self.lock()
            .carts
            .iter()
            .find(|c| c.user_id == user_id)
            .cloned()
    }

    pub fn insert_order(&self, order: Order) {
        let mut inner = self.lock();
        inner.orders.retain(|o| o.id != order.id);
        inner.orders.push(order);
    }

    pub fn order(&self, order_id: OrderId) -> Option<Order> {
        self.lock().orders.iter().find(|o| o.id == order_id).cloned()
    }
}

//
// ──────────────────────────────────────────────────────────
// Users
// ──────────────────────────────────────────────────────────
//

impl InMemoryStore {
    fn modify_user<F>(&self, user_id: UserId, f: F) -> Result<User, UserRepositoryError>
    where
        F: FnOnce(&mut User),
    {
        let mut inner = self.lock();
        let user = inner
            .users
            .iter_mut()
            .find(|u| u.id == user_id)
            .ok_or(UserRepositoryError::UserNotFound)?;
        f(user);
        user.updated_at = Utc::now();
        Ok(user.clone())
    }
}

#[async_trait]
impl UserRepository for InMemoryStore {
    async fn create_user(&self, data: CreateUserData) -> Result<User, UserRepositoryError> {
        let mut inner = self.lock();
        if inner.users.iter().any(|u| u.email == data.email) {
            return Err(UserRepositoryError::UserAlreadyExists);
        }

        let now = Utc::now();
        let user = User {
            id: UserId::from(Uuid::new_v4()),
            name: data.name,
            email: data.email,
            password_hash: data.password_hash,
            role: data.role,
            is_active: true,
            reset_token_hash: None,
            reset_token_expires_at: None,
            created_at: now,
            updated_at: now,
        };
        inner.users.push(user.clone());
        Ok(user)
    }

    async fn update_user(
        &self,
        user_id: UserId,
        data: UpdateUserData,
    ) -> Result<User, UserRepositoryError> {
        if let Some(email) = &data.email {
            let taken = self
                .lock()
                .users
                .iter()
                .any(|u| u.id != user_id && &u.email == email);
            if taken {
                return Err(UserRepositoryError::UserAlreadyExists);
            }
        }

        self.modify_user(user_id, |user| {
            if let Some(name) = data.name {
                user.name = name;
            }
            if let Some(email) = data.email {
                user.email = email;
            }
            if let Some(role) = data.role {
                user.role = role;
            }
            if let Some(is_active) = data.is_active {
                user.is_active = is_active;
            }
        })
    }

    async fn update_password(
        &self,
        user_id: UserId,
        password_hash: String,
    ) -> Result<(), UserRepositoryError> {
        self.modify_user(user_id, |user| user.password_hash = password_hash)
            .map(|_| ())
    }

    async fn store_reset_token(
        &self,
        user_id: UserId,
        token_hash: String,
        expires_at: DateTime<Utc>,
    ) -> Result<(), UserRepositoryError> {
        self.modify_user(user_id, |user| {
            user.reset_token_hash = Some(token_hash);
            user.reset_token_expires_at = Some(expires_at);
        })
        .map(|_| ())
    }

    async fn complete_password_reset(
        &self,
        user_id: UserId,
        password_hash: String,
    ) -> Result<(), UserRepositoryError> {
        self.modify_user(user_id, |user| {
            user.password_hash = password_hash;
            user.reset_token_hash = None;
            user.reset_token_expires_at = None;
        })
        .map(|_| ())
    }

    async fn clear_reset_token(&self, user_id: UserId) -> Result<(), UserRepositoryError> {
        self.modify_user(user_id, |user| {
            user.reset_token_hash = None;
            user.reset_token_expires_at = None;
        })
        .map(|_| ())
    }

    async fn delete_user(&self, user_id: UserId) -> Result<(), UserRepositoryError> {
        let mut inner = self.lock();
        if !inner.users.iter().any(|u| u.id == user_id) {
            return Err(UserRepositoryError::UserNotFound);
        }
        if inner.orders.iter().any(|o| o.user_id == user_id) {
            return Err(UserRepositoryError::UserHasOrders);
        }
        inner.users.retain(|u| u.id != user_id);
        inner.carts.retain(|c| c.user_id != user_id);
        Ok(())
    }
}

#[async_trait]
impl UserQuery for InMemoryStore {
    async fn find_by_id(&self, user_id: UserId) -> Result<Option<User>, UserQueryError> {
        Ok(self.user(user_id))
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserQueryError> {
        Ok(self.user_by_email(email))
    }

    async fn find_by_reset_token_hash(
        &self,
        token_hash: &str,
    ) -> Result<Option<User>, UserQueryError> {
        Ok(self
            .lock()
            .users
            .iter()
            .find(|u| u.reset_token_hash.as_deref() == Some(token_hash))
            .cloned())
    }
}

//
// ──────────────────────────────────────────────────────────
// Catalog
// ──────────────────────────────────────────────────────────
//

#[async_trait]
impl CategoryRepository for InMemoryStore {
    async fn create_category(
        &self,
        data: CreateCategoryData,
    ) -> Result<Category, CategoryRepositoryError> {
        let mut inner = self.lock();
        if inner.categories.iter().any(|c| c.name == data.name) {
            return Err(CategoryRepositoryError::CategoryAlreadyExists);
        }

        let now = Utc::now();
        let category = Category {
            id: Uuid::new_v4(),
            name: data.name,
            description: data.description,
            created_at: now,
            updated_at: now,
        };
        inner.categories.push(category.clone());
        Ok(category)
    }

    async fn update_category(
        &self,
        category_id: Uuid,
        data: UpdateCategoryData,
    ) -> Result<Category, CategoryRepositoryError> {
        let mut inner = self.lock();
        if let Some(name) = &data.name {
            if inner
                .categories
                .iter()
                .any(|c| c.id != category_id && &c.name == name)
            {
                return Err(CategoryRepositoryError::CategoryAlreadyExists);
            }
        }

        let category = inner
            .categories
            .iter_mut()
            .find(|c| c.id == category_id)
            .ok_or(CategoryRepositoryError::CategoryNotFound)?;
        if let Some(name) = data.name {
            category.name = name;
        }
        if let Some(description) = data.description {
            category.description = Some(description);
        }
        category.updated_at = Utc::now();
        Ok(category.clone())
    }

    async fn delete_category(&self, category_id: Uuid) -> Result<(), CategoryRepositoryError> {
        let mut inner = self.lock();
        let before = inner.categories.len();
        inner.categories.retain(|c| c.id != category_id);
        if inner.categories.len() == before {
            return Err(CategoryRepositoryError::CategoryNotFound);
        }
        Ok(())
    }
}

#[async_trait]
impl CategoryQuery for InMemoryStore {
    async fn list_categories(&self) -> Result<Vec<Category>, CategoryQueryError> {
        Ok(newest_first(&self.lock().categories, |c| c.created_at))
    }

    async fn find_by_id(&self, category_id: Uuid) -> Result<Option<Category>, CategoryQueryError> {
        Ok(self.category(category_id))
    }
}

#[async_trait]
impl ProductRepository for InMemoryStore {
    async fn create_product(
        &self,
        data: CreateProductData,
    ) -> Result<Product, ProductRepositoryError> {
        let now = Utc::now();
        let product = Product {
            id: Uuid::new_v4(),
            name: data.name,
            category_id: data.category_id,
            category_name: data.category_name,
            description: data.description,
            price_cents: data.price_cents,
            stock: data.stock,
            in_stock: false,
            images: data.images,
            created_at: now,
            updated_at: now,
        }
        .with_derived_fields();

        self.lock().products.push(product.clone());
        Ok(product)
    }

    async fn update_product(
        &self,
        product_id: Uuid,
        data: UpdateProductData,
    ) -> Result<Product, ProductRepositoryError> {
        let mut inner = self.lock();
        let product = inner
            .products
            .iter_mut()
            .find(|p| p.id == product_id)
            .ok_or(ProductRepositoryError::ProductNotFound)?;

        if let Some(name) = data.name {
            product.name = name;
        }
        if let Some((category_id, category_name)) = data.category {
            product.category_id = category_id;
            product.category_name = category_name;
        }
        if let Some(description) = data.description {
            product.description = description;
        }
        if let Some(price_cents) = data.price_cents {
            product.price_cents = price_cents;
        }
        if let Some(stock) = data.stock {
            product.stock = stock;
        }
        if let Some(images) = data.images {
            product.images = images;
        }
        product.in_stock = product.stock > 0;
        product.updated_at = Utc::now();
        Ok(product.clone())
    }

    async fn delete_product(&self, product_id: Uuid) -> Result<(), ProductRepositoryError> {
        let mut inner = self.lock();
        let before = inner.products.len();
        inner.products.retain(|p| p.id != product_id);
        if inner.products.len() == before {
            return Err(ProductRepositoryError::ProductNotFound);
        }
        Ok(())
    }
}

#[async_trait]
impl ProductQuery for InMemoryStore {
    async fn list_products(&self) -> Result<Vec<Product>, ProductQueryError> {
        Ok(newest_first(&self.lock().products, |p| p.created_at))
    }

    async fn find_by_id(&self, product_id: Uuid) -> Result<Option<Product>, ProductQueryError> {
        Ok(self.product(product_id))
    }

    async fn find_by_ids(&self, product_ids: &[Uuid]) -> Result<Vec<Product>, ProductQueryError> {
        Ok(self
            .lock()
            .products
            .iter()
            .filter(|p| product_ids.contains(&p.id))
            .cloned()
            .collect())
    }
}

//
// ──────────────────────────────────────────────────────────
// Carts and orders
// ──────────────────────────────────────────────────────────
//

#[async_trait]
impl CartRepository for InMemoryStore {
    async fn create_cart(
        &self,
        user_id: UserId,
        items: Vec<CartItem>,
    ) -> Result<Cart, CartRepositoryError> {
        let mut inner = self.lock();
        if inner.carts.iter().any(|c| c.user_id == user_id) {
            return Err(CartRepositoryError::CartAlreadyExists);
        }

        let now = Utc::now();
        let cart = Cart {
            id: Uuid::new_v4(),
            user_id,
            items,
            created_at: now,
            updated_at: now,
        };
        inner.carts.push(cart.clone());
        Ok(cart)
    }

    async fn replace_items(
        &self,
        cart_id: Uuid,
        items: Vec<CartItem>,
    ) -> Result<Cart, CartRepositoryError> {
        let mut inner = self.lock();
        let cart = inner
            .carts
            .iter_mut()
            .find(|c| c.id == cart_id)
            .ok_or(CartRepositoryError::CartNotFound)?;
        cart.items = items;
        cart.updated_at = Utc::now();
        Ok(cart.clone())
    }

    async fn delete_cart(&self, cart_id: Uuid) -> Result<(), CartRepositoryError> {
        let mut inner = self.lock();
        let before = inner.carts.len();
        inner.carts.retain(|c| c.id != cart_id);
        if inner.carts.len() == before {
            return Err(CartRepositoryError::CartNotFound);
        }
        Ok(())
    }
}

#[async_trait]
impl CartQuery for InMemoryStore {
    async fn find_by_id(&self, cart_id: Uuid) -> Result<Option<Cart>, CartQueryError> {
        Ok(self.cart(cart_id))
    }

    async fn find_by_user(&self, user_id: UserId) -> Result<Option<Cart>, CartQueryError> {
        Ok(self.cart_for_user(user_id))
    }

    async fn list_carts(&self) -> Result<Vec<Cart>, CartQueryError> {
        Ok(newest_first(&self.lock().carts, |c| c.updated_at))
    }
}

#[async_trait]
impl OrderRepository for InMemoryStore {
    async fn create_order(&self, order: NewOrder) -> Result<Order, OrderRepositoryError> {
        let mut inner = self.lock();
        let id = inner.orders.iter().map(|o| o.id).max().unwrap_or(0) + 1;

        let now = Utc::now();
        let order = Order {
            id,
            user_id: order.user_id,
            items: order.items,
            total_cents: order.total_cents,
            payment_method: order.payment_method,
            status: OrderStatus::Pending,
            is_paid: false,
            paid_at: None,
            created_at: now,
            updated_at: now,
        };
        inner.orders.push(order.clone());
        Ok(order)
    }

    async fn update_state(
        &self,
        order_id: OrderId,
        state: OrderState,
    ) -> Result<Order, OrderRepositoryError> {
        let mut inner = self.lock();
        let order = inner
            .orders
            .iter_mut()
            .find(|o| o.id == order_id)
            .ok_or(OrderRepositoryError::OrderNotFound)?;
        order.status = state.status;
        order.is_paid = state.is_paid;
        order.paid_at = state.paid_at;
        order.updated_at = Utc::now();
        Ok(order.clone())
    }
}

#[async_trait]
impl OrderQuery for InMemoryStore {
    async fn find_by_id(&self, order_id: OrderId) -> Result<Option<Order>, OrderQueryError> {
        Ok(self.order(order_id))
    }

    async fn list_orders(&self) -> Result<Vec<Order>, OrderQueryError> {
        let mut orders = self.lock().orders.clone();
        orders.sort_by_key(|o| std::cmp::Reverse((o.created_at, o.id)));
        Ok(orders)
    }
}
