pub mod service;

pub use service::HighlightsService;
