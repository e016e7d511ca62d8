mod admin_delete_user;
mod admin_update_user;
mod change_password;
mod forgot_password;
mod login_user;
mod register_user;
mod reset_password;
mod update_profile;

pub use admin_delete_user::{AdminDeleteUserError, AdminDeleteUserUseCase};
pub use admin_update_user::{
    AdminUpdateUserCommand, AdminUpdateUserCommandError, AdminUpdateUserError,
    AdminUpdateUserUseCase,
};
pub use change_password::{
    ChangePasswordCommand, ChangePasswordCommandError, ChangePasswordError,
    ChangePasswordUseCase,
};
pub use forgot_password::{
    ForgotPasswordCommand, ForgotPasswordCommandError, ForgotPasswordError,
    ForgotPasswordUseCase, IssuedResetToken,
};
pub use login_user::{LoginUserCommand, LoginUserCommandError, LoginUserError, LoginUserUseCase};
pub use register_user::{
    RegisterUserCommand, RegisterUserCommandError, RegisterUserError, RegisterUserUseCase,
};
pub use reset_password::{
    ResetPasswordCommand, ResetPasswordCommandError, ResetPasswordError, ResetPasswordUseCase,
};
pub use update_profile::{
    UpdateProfileCommand, UpdateProfileCommandError, UpdateProfileError, UpdateProfileUseCase,
};
