use async_trait::async_trait;

use crate::auth::application::domain::{Actor, Capability};
use crate::order::application::{
    domain::{Order, OrderId},
    ports::{
        incoming::use_cases::{DeleteOrderError, DeleteOrderUseCase},
        outgoing::{OrderQuery, OrderRepository, OrderRepositoryError},
    },
};

#[derive(Debug, Clone)]
pub struct DeleteOrderService<R, Q>
where
    R: OrderRepository + Send + Sync,
    Q: OrderQuery + Send + Sync,
{
    repository: R,
    query: Q,
}

impl<R, Q> DeleteOrderService<R, Q>
where
    R: OrderRepository + Send + Sync,
    Q: OrderQuery + Send + Sync,
{
    pub fn new(repository: R, query: Q) -> Self {
        Self { repository, query }
    }
}

#[async_trait]
impl<R, Q> DeleteOrderUseCase for DeleteOrderService<R, Q>
where
    R: OrderRepository + Send + Sync,
    Q: OrderQuery + Send + Sync,
{
    async fn execute(&self, actor: Actor, order_id: OrderId) -> Result<Order, DeleteOrderError> {
        if !actor.can(Capability::ManageOrders) {
            return Err(DeleteOrderError::Forbidden);
        }

        let order = self
            .query
            .find_by_id(order_id)
            .await
            .map_err(|e| DeleteOrderError::RepositoryError(e.to_string()))?
            .ok_or(DeleteOrderError::OrderNotFound)?;

        let next = order.state().cancel_by_admin();
        if next == order.state() {
            return Ok(order);
        }

        self.repository
            .update_state(order.id, next)
            .await
            .map_err(|e| match e {
                OrderRepositoryError::OrderNotFound => DeleteOrderError::OrderNotFound,
                other => DeleteOrderError::RepositoryError(other.to_string()),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::order::application::domain::OrderStatus;
    use crate::tests::support::{
        fixtures::{admin_actor, customer_actor, order_fixture},
        in_memory::InMemoryStore,
    };

    #[tokio::test]
    async fn admin_soft_deletes_and_repeat_is_harmless() {
        let store = InMemoryStore::new();
        let order = order_fixture(customer_actor().user_id, OrderStatus::Shipped, true);
        let id = order.id;
        store.insert_order(order);
        let service = DeleteOrderService::new(store.clone(), store.clone());

        let first = service.execute(admin_actor(), id).await.unwrap();
        let second = service.execute(admin_actor(), id).await.unwrap();

        assert_eq!(first.status, OrderStatus::Cancelled);
        assert_eq!(second, first);
        assert!(store.order(id).is_some());
    }

    #[tokio::test]
    async fn customer_is_forbidden() {
        let store = InMemoryStore::new();
        let owner = customer_actor();
        let order = order_fixture(owner.user_id, OrderStatus::Pending, false);
        let id = order.id;
        store.insert_order(order);
        let service = DeleteOrderService::new(store.clone(), store);

        assert!(matches!(
            service.execute(owner, id).await,
            Err(DeleteOrderError::Forbidden)
        ));
    }

    #[tokio::test]
    async fn unknown_order_is_not_found() {
        let store = InMemoryStore::new();
        let service = DeleteOrderService::new(store.clone(), store);

        assert!(matches!(
            service.execute(admin_actor(), 404).await,
            Err(DeleteOrderError::OrderNotFound)
        ));
    }
}
