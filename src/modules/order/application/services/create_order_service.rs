use async_trait::async_trait;

use crate::cart::application::ports::outgoing::{CartQuery, CartRepository};
use crate::order::application::{
    domain::{NewOrder, Order, OrderBuildError},
    ports::{
        incoming::use_cases::{CreateOrderCommand, CreateOrderError, CreateOrderUseCase},
        outgoing::OrderRepository,
    },
};
use crate::product::application::ports::outgoing::ProductQuery;

/// Turns the caller's cart into a pending order, then empties the cart.
#[derive(Debug, Clone)]
pub struct CreateOrderService<O, C, CQ, P>
where
    O: OrderRepository + Send + Sync,
    C: CartRepository + Send + Sync,
    CQ: CartQuery + Send + Sync,
    P: ProductQuery + Send + Sync,
{
    orders: O,
    carts: C,
    cart_query: CQ,
    products: P,
}

impl<O, C, CQ, P> CreateOrderService<O, C, CQ, P>
where
    O: OrderRepository + Send + Sync,
    C: CartRepository + Send + Sync,
    CQ: CartQuery + Send + Sync,
    P: ProductQuery + Send + Sync,
{
    pub fn new(orders: O, carts: C, cart_query: CQ, products: P) -> Self {
        Self {
            orders,
            carts,
            cart_query,
            products,
        }
    }
}

#[async_trait]
impl<O, C, CQ, P> CreateOrderUseCase for CreateOrderService<O, C, CQ, P>
where
    O: OrderRepository + Send + Sync,
    C: CartRepository + Send + Sync,
    CQ: CartQuery + Send + Sync,
    P: ProductQuery + Send + Sync,
{
    async fn execute(&self, command: CreateOrderCommand) -> Result<Order, CreateOrderError> {
        let user_id = command.actor().user_id;

        let cart = self
            .cart_query
            .find_by_user(user_id)
            .await
            .map_err(|e| CreateOrderError::RepositoryError(e.to_string()))?
            .filter(|cart| !cart.is_empty())
            .ok_or(CreateOrderError::CartEmpty)?;

        let product_ids: Vec<_> = cart.items.iter().map(|i| i.product_id).collect();
        let products = self
            .products
            .find_by_ids(&product_ids)
            .await
            .map_err(|e| CreateOrderError::RepositoryError(e.to_string()))?;

        let new_order =
            NewOrder::from_cart(user_id, &cart.items, &products, command.payment_method())
                .map_err(|e| match e {
                    OrderBuildError::EmptyCart => CreateOrderError::CartEmpty,
                    OrderBuildError::ProductUnavailable(id) => {
                        CreateOrderError::ProductUnavailable(id)
                    }
                    OrderBuildError::TotalOverflow => CreateOrderError::TotalTooLarge,
                })?;

        let order = self
            .orders
            .create_order(new_order)
            .await
            .map_err(|e| CreateOrderError::RepositoryError(e.to_string()))?;

        // Not atomic with the insert above; a failure here leaves the order in place
        if let Err(e) = self.carts.replace_items(cart.id, Vec::new()).await {
            tracing::error!(
                order_id = order.id,
                cart_id = %cart.id,
                "Order stored but cart could not be emptied: {}",
                e
            );
            return Err(CreateOrderError::RepositoryError(e.to_string()));
        }

        tracing::info!(order_id = order.id, user_id = %user_id, total_cents = order.total_cents, "Order placed");
        Ok(order)
    }
}
