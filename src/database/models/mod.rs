pub mod user;

pub use user::{DbUser, Role};
