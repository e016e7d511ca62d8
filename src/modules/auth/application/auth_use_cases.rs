use std::sync::Arc;

use crate::auth::application::ports::incoming::use_cases::{
    AdminDeleteUserUseCase, AdminUpdateUserUseCase, ChangePasswordUseCase, ForgotPasswordUseCase,
    LoginUserUseCase, RegisterUserUseCase, ResetPasswordUseCase, UpdateProfileUseCase,
};

#[derive(Clone)]
pub struct AuthUseCases {
    pub register: Arc<dyn RegisterUserUseCase + Send + Sync>,
    pub login: Arc<dyn LoginUserUseCase + Send + Sync>,
    pub update_profile: Arc<dyn UpdateProfileUseCase + Send + Sync>,
    pub change_password: Arc<dyn ChangePasswordUseCase + Send + Sync>,
    pub forgot_password: Arc<dyn ForgotPasswordUseCase + Send + Sync>,
    pub reset_password: Arc<dyn ResetPasswordUseCase + Send + Sync>,
    pub admin_update_user: Arc<dyn AdminUpdateUserUseCase + Send + Sync>,
    pub admin_delete_user: Arc<dyn AdminDeleteUserUseCase + Send + Sync>,
}
