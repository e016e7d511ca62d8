mod admin_delete_user;
mod admin_update_user;
mod change_password;
mod forgot_password;
mod get_me;
mod login_user;
mod logout_user;
mod register_user;
mod reset_password;
mod update_profile;

pub use admin_delete_user::admin_delete_user_handler;
pub use admin_update_user::admin_update_user_handler;
pub use change_password::change_password_handler;
pub use forgot_password::forgot_password_handler;
pub use get_me::get_me_handler;
pub use login_user::login_user_handler;
pub use logout_user::logout_user_handler;
pub use register_user::register_user_handler;
pub use reset_password::reset_password_handler;
pub use update_profile::update_profile_handler;
