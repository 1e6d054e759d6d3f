//! Book domain: record types, id assignment and the in-memory store.

pub mod fixtures;
pub mod id;
pub mod model;
pub mod repository;
pub mod store;

pub use id::{IdGenerator, TimestampIdGenerator};
pub use model::{Book, NewBook};
pub use repository::BookRepository;
pub use store::BookStore;
