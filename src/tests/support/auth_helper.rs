use std::sync::Arc;

use actix_web::web;
use uuid::Uuid;

use crate::auth::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};
use crate::auth::application::domain::Role;
use crate::auth::application::ports::outgoing::TokenProvider;

pub fn test_token_service() -> JwtTokenService {
    JwtTokenService::new(JwtConfig {
        secret_key: "test_secret_key_for_testing_only_0123456789".to_string(),
        issuer: "storefront-test".to_string(),
        access_token_expiry: 3600,
    })
}

/// What the auth extractors look up in app data.
pub fn token_provider_data() -> web::Data<Arc<dyn TokenProvider + Send + Sync>> {
    let provider: Arc<dyn TokenProvider + Send + Sync> = Arc::new(test_token_service());
    web::Data::new(provider)
}

/// `Authorization` header value for a freshly signed token.
pub fn bearer(user_id: Uuid, role: Role) -> String {
    let token = test_token_service()
        .generate_access_token(user_id, role)
        .unwrap();
    format!("Bearer {}", token)
}
