use serde::{Deserialize, Serialize};

/// Stored book. `id` is assigned by the server and never changes.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Book {
    pub id: String,
    pub title: String,
    pub author: String,
    pub price: i64,
}

/// Create payload. Unknown fields, including a client-supplied `id`, are ignored.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewBook {
    pub title: String,
    pub author: String,
    pub price: i64,
}

impl NewBook {
    pub fn into_book(self, id: String) -> Book {
        Book { id, title: self.title, author: self.author, price: self.price }
    }
}
