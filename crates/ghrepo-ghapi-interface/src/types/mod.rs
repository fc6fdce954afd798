//! GitHub types.

mod repository;
mod user;

pub use repository::GhRepository;
pub use user::GhUser;
