use actix_web::{dev::Payload, Error as ActixError, FromRequest, HttpRequest, HttpResponse};
use std::{
    future::{ready, Ready},
    marker::PhantomData,
    sync::Arc,
};
use uuid::Uuid;

use crate::auth::application::domain::{Actor, Role, UserId};
use crate::auth::application::ports::outgoing::TokenProvider;
use crate::shared::api::ApiResponse;

/// Identity decoded from a valid bearer token.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub user_id: Uuid,
    pub role: Role,
}

impl AuthenticatedUser {
    pub fn actor(&self) -> Actor {
        Actor::new(UserId::from(self.user_id), self.role)
    }
}

fn create_api_error(response: HttpResponse) -> ActixError {
    actix_web::error::InternalError::from_response("", response).into()
}

impl FromRequest for AuthenticatedUser {
    type Error = ActixError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let jwt_service =
            match req.app_data::<actix_web::web::Data<Arc<dyn TokenProvider + Send + Sync>>>() {
                Some(service) => service,
                None => {
                    tracing::error!("Token provider is not registered as app data");
                    return ready(Err(create_api_error(ApiResponse::internal_error())));
                }
            };

        let token = match extract_token_from_header(req) {
            Some(t) => t,
            None => {
                return ready(Err(create_api_error(ApiResponse::unauthorized(
                    "MISSING_AUTH_HEADER",
                    "Missing or invalid authorization header",
                ))));
            }
        };

        // Expired and tampered tokens are reported the same way
        match jwt_service.verify_token(&token) {
            Ok(claims) => ready(Ok(AuthenticatedUser {
                user_id: claims.sub,
                role: claims.role,
            })),
            Err(_) => ready(Err(create_api_error(ApiResponse::unauthorized(
                "INVALID_TOKEN",
                "Invalid or expired token",
            )))),
        }
    }
}

fn extract_token_from_header(req: &HttpRequest) -> Option<String> {
    req.headers()
        .get("Authorization")?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(|s| s.to_string())
}

//
// ──────────────────────────────────────────────────────────
// Role gate
// ──────────────────────────────────────────────────────────
//

/// A set of roles admitted by [`Authorized`].
pub trait AllowedRoles {
    const ROLES: &'static [Role];
}

#[derive(Debug, Clone, Copy)]
pub struct AdminOnly;

impl AllowedRoles for AdminOnly {
    const ROLES: &'static [Role] = &[Role::Admin];
}

/// An authenticated caller whose role is a member of `R::ROLES`.
#[derive(Debug, Clone)]
pub struct Authorized<R: AllowedRoles> {
    pub actor: Actor,
    _roles: PhantomData<R>,
}

impl<R: AllowedRoles> FromRequest for Authorized<R> {
    type Error = ActixError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let user = match AuthenticatedUser::from_request(req, payload).into_inner() {
            Ok(user) => user,
            Err(e) => return ready(Err(e)),
        };

        if !R::ROLES.contains(&user.role) {
            tracing::warn!(
                user_id = %user.user_id,
                role = %user.role,
                path = %req.path(),
                "Role not permitted"
            );
            return ready(Err(create_api_error(ApiResponse::forbidden(
                "FORBIDDEN",
                "You do not have permission to perform this action",
            ))));
        }

        ready(Ok(Authorized {
            actor: user.actor(),
            _roles: PhantomData,
        }))
    }
}
