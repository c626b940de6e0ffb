pub mod admin_handler;
pub mod auth_handler;
pub mod calendar_handler;
pub mod cup_handler;
pub mod highlights_handler;
pub mod registration_handler;
pub mod standings_handler;
