pub mod entities;
pub mod policy;

pub use entities::{AuthSession, Role, User, UserId, UserProfile};
pub use policy::{AccessPolicy, Actor, Capability, RoleAccessPolicy};
