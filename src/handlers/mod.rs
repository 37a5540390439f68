// handlers/mod.rs - Route handlers, grouped by backing resource
//
// users:    file-backed CRUD over the JSON document
// db_users: read-only listing from Postgres
// profile:  requires a bearer token (see middleware::auth)
// system:   service info, health, and the error-responder probe

pub mod db_users;
pub mod profile;
pub mod system;
pub mod users;
