pub mod auth;
pub mod error_responder;
pub mod logger;

pub use auth::{jwt_auth_middleware, AuthUser};
pub use error_responder::{handle_panic, respond_with_envelope};
pub use logger::request_logger;
