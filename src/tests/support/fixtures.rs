use std::sync::atomic::{AtomicI64, Ordering};

use chrono::Utc;
use uuid::Uuid;

use crate::auth::application::domain::{Actor, Role, User, UserId};
use crate::cart::application::domain::{Cart, CartItem};
use crate::category::application::domain::Category;
use crate::order::application::domain::{Order, OrderItem, OrderStatus, PaymentMethod};
use crate::product::application::domain::Product;

static NEXT_ORDER_ID: AtomicI64 = AtomicI64::new(1);

pub fn user_fixture(email: &str, password_hash: &str, role: Role) -> User {
    let now = Utc::now();
    User {
        id: UserId::from(Uuid::new_v4()),
        name: "Ada Lovelace".to_string(),
        email: email.to_string(),
        password_hash: password_hash.to_string(),
        role,
        is_active: true,
        reset_token_hash: None,
        reset_token_expires_at: None,
        created_at: now,
        updated_at: now,
    }
}

pub fn admin_actor() -> Actor {
    Actor::new(UserId::from(Uuid::new_v4()), Role::Admin)
}

pub fn customer_actor() -> Actor {
    Actor::new(UserId::from(Uuid::new_v4()), Role::Customer)
}

pub fn category_fixture(name: &str) -> Category {
    let now = Utc::now();
    Category {
        id: Uuid::new_v4(),
        name: name.to_string(),
        description: None,
        created_at: now,
        updated_at: now,
    }
}

pub fn product_fixture(name: &str, price_cents: i64, stock: i32) -> Product {
    let now = Utc::now();
    Product {
        id: Uuid::new_v4(),
        name: name.to_string(),
        category_id: Uuid::new_v4(),
        category_name: "General".to_string(),
        description: String::new(),
        price_cents,
        stock,
        in_stock: false,
        images: vec![],
        created_at: now,
        updated_at: now,
    }
    .with_derived_fields()
}

pub fn cart_fixture(user_id: UserId, items: Vec<CartItem>) -> Cart {
    let now = Utc::now();
    Cart {
        id: Uuid::new_v4(),
        user_id,
        items,
        created_at: now,
        updated_at: now,
    }
}

/// A one-line order. Ids are unique across the test binary.
pub fn order_fixture(user_id: UserId, status: OrderStatus, is_paid: bool) -> Order {
    let now = Utc::now();
    Order {
        id: NEXT_ORDER_ID.fetch_add(1, Ordering::Relaxed),
        user_id,
        items: vec![OrderItem {
            product_id: Uuid::new_v4(),
            name: "Desk".to_string(),
            price_cents: 2500,
            quantity: 2,
        }],
        total_cents: 5000,
        payment_method: PaymentMethod::Cash,
        status,
        is_paid,
        paid_at: is_paid.then_some(now),
        created_at: now,
        updated_at: now,
    }
}
