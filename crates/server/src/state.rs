use std::sync::Arc;

use service::books::{BookRepository, BookStore};

/// Shared handler state; cloned per request, the repository itself is shared.
#[derive(Clone)]
pub struct AppState {
    pub books: Arc<dyn BookRepository>,
}

impl AppState {
    pub fn new(books: Arc<dyn BookRepository>) -> Self {
        Self { books }
    }

    pub fn in_memory(seed_fixtures: bool) -> Self {
        Self::new(Arc::new(BookStore::from_config(seed_fixtures)))
    }
}
