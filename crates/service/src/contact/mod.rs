pub mod repository;
pub mod service;

pub use repository::{ContactRepository, SeaOrmContactRepository};
pub use service::{ContactService, MIN_QUERY_CHARS, UPCOMING_WINDOW_DAYS};
