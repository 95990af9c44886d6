//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument. Every flashcard and to-do
//! query is scoped to an owner; a row owned by someone else is
//! indistinguishable from a missing one.

pub mod flashcard_repo;
pub mod stats_repo;
pub mod todo_repo;
pub mod user_repo;

pub use flashcard_repo::FlashcardRepo;
pub use stats_repo::StatsRepo;
pub use todo_repo::TodoRepo;
pub use user_repo::UserRepo;
