mod admin_delete_user_service;
mod admin_update_user_service;
mod change_password_service;
mod forgot_password_service;
mod login_user_service;
mod register_user_service;
mod reset_password_service;
mod update_profile_service;

pub mod reset_token;

pub use admin_delete_user_service::AdminDeleteUserService;
pub use admin_update_user_service::AdminUpdateUserService;
pub use change_password_service::ChangePasswordService;
pub use forgot_password_service::ForgotPasswordService;
pub use login_user_service::LoginUserService;
pub use register_user_service::RegisterUserService;
pub use reset_password_service::ResetPasswordService;
pub use update_profile_service::UpdateProfileService;
