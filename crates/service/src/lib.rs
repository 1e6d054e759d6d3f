//! Service layer for the bookstore.
//! - `storage` holds the generic lock-guarded map used as the only persistence.
//! - `books` defines the domain record, id generation and the repository contract.

pub mod errors;
pub mod storage;
pub mod books;
