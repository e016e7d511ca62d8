pub mod auth;

pub use auth::{AdminOnly, AllowedRoles, AuthenticatedUser, Authorized};
