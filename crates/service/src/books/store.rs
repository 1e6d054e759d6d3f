use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, warn};

use super::fixtures::seed_books;
use super::id::{IdGenerator, TimestampIdGenerator};
use super::model::{Book, NewBook};
use super::repository::BookRepository;
use crate::errors::ServiceError;
use crate::storage::memory_map_store::MemoryMapStore;

/// In-memory book store keyed by id.
#[derive(Clone)]
pub struct BookStore {
    books: MemoryMapStore<String, Book>,
    ids: Arc<dyn IdGenerator>,
}

impl Default for BookStore {
    fn default() -> Self {
        Self::new()
    }
}

impl BookStore {
    /// Empty store with timestamp ids.
    pub fn new() -> Self {
        Self::with_id_generator(Arc::new(TimestampIdGenerator::new()))
    }

    pub fn with_id_generator(ids: Arc<dyn IdGenerator>) -> Self {
        Self { books: MemoryMapStore::new(), ids }
    }

    /// Store pre-loaded with the fixture books `"1"`, `"2"` and `"3"`.
    pub fn seeded() -> Self {
        Self {
            books: MemoryMapStore::with_entries(seed_books().into_iter().map(|b| (b.id.clone(), b))),
            ids: Arc::new(TimestampIdGenerator::new()),
        }
    }

    pub fn from_config(seed_fixtures: bool) -> Self {
        if seed_fixtures { Self::seeded() } else { Self::new() }
    }
}

#[async_trait]
impl BookRepository for BookStore {
    async fn list(&self) -> Vec<Book> {
        self.books.values().await
    }

    async fn get(&self, id: &str) -> Option<Book> {
        self.books.get(&id.to_string()).await
    }

    async fn create(&self, input: NewBook) -> Result<Book, ServiceError> {
        let book = input.into_book(self.ids.next_id());
        if !self.books.insert_new(book.id.clone(), book.clone()).await {
            warn!(id = %book.id, "generated book id already in use");
            return Err(ServiceError::conflict("book", &book.id));
        }
        debug!(id = %book.id, "book created");
        Ok(book)
    }

    async fn count(&self) -> usize {
        self.books.len().await
    }
}
