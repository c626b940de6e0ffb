pub mod bracket;
pub mod groups;
pub mod service;

pub use service::CupService;
