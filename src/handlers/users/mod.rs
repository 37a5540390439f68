// handlers/users/mod.rs - File-backed user CRUD
//
// Every mutating handler runs the same sequence against the backing document:
// read whole file -> validate -> mutate in memory -> write whole file -> respond.
// Nothing is locked, so concurrent writers race and the last write wins.

pub mod create;
pub mod delete;
pub mod list;
pub mod show;
pub mod update;
pub mod utils;

pub use create::create;
pub use delete::delete;
pub use list::list;
pub use show::show;
pub use update::update;
