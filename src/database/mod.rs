pub mod manager;
pub mod models;
pub mod repository;

pub use manager::{connect, health_check, DatabaseError};
pub use models::{DbUser, Role};
pub use repository::UserRepository;
