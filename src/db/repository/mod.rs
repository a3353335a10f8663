//! Repository trait definitions and error types.
//!
//! The repository pattern gives the service and HTTP layers an explicit
//! capability set (create, get-by-id, list-by-owner) independent of the
//! storage backend.

pub mod error;
pub mod items;
pub mod users;

pub use error::{ErrorContext, RepositoryError, RepositoryResult};
pub use items::ItemRepository;
pub use users::UserRepository;

/// Combined repository interface covering all entity types.
///
/// Storage backends implement [`UserRepository`] and [`ItemRepository`];
/// this supertrait is what the application layers hold (`Arc<dyn
/// FullRepository>`).
pub trait FullRepository: UserRepository + ItemRepository {}

impl<T: UserRepository + ItemRepository> FullRepository for T {}
