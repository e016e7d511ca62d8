use super::entities::{Role, UserId};

/// Privileged actions guarded by the access policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capability {
    ManageUsers,
    ManageCatalog,
    ManageOrders,
    ViewAllOrders,
    ViewAllCarts,
    ManageAnyCart,
}

pub trait AccessPolicy: Send + Sync {
    fn permits(&self, role: Role, capability: Capability) -> bool;
}

/// Admins hold every capability, customers hold none.
#[derive(Debug, Clone, Copy, Default)]
pub struct RoleAccessPolicy;

impl AccessPolicy for RoleAccessPolicy {
    fn permits(&self, role: Role, _capability: Capability) -> bool {
        match role {
            Role::Admin => true,
            Role::Customer => false,
        }
    }
}

/// The authenticated caller of a use case.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Actor {
    pub user_id: UserId,
    pub role: Role,
}

impl Actor {
    pub fn new(user_id: UserId, role: Role) -> Self {
        Self { user_id, role }
    }

    pub fn can(&self, capability: Capability) -> bool {
        RoleAccessPolicy.permits(self.role, capability)
    }

    pub fn owns(&self, owner: &UserId) -> bool {
        self.user_id == *owner
    }

    pub fn owns_or_can(&self, owner: &UserId, capability: Capability) -> bool {
        self.owns(owner) || self.can(capability)
    }
}
