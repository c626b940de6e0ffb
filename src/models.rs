pub mod auth;
pub mod category;
pub mod cup;
pub mod fixture;
pub mod highlight;
pub mod standings;
pub mod user;
