use async_trait::async_trait;

use super::model::{Book, NewBook};
use crate::errors::ServiceError;

/// Trait abstraction for book storage.
/// Handlers depend on this rather than on a concrete store.
#[async_trait]
pub trait BookRepository: Send + Sync {
    /// All books, in no particular order.
    async fn list(&self) -> Vec<Book>;
    async fn get(&self, id: &str) -> Option<Book>;
    /// Assign a fresh id, store the record and return it.
    async fn create(&self, input: NewBook) -> Result<Book, ServiceError>;
    async fn count(&self) -> usize;

    /// Like `get`, but a missing id is an error.
    async fn find(&self, id: &str) -> Result<Book, ServiceError> {
        self.get(id).await.ok_or_else(|| ServiceError::not_found("book"))
    }
}
