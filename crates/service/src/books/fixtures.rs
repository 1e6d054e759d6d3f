use super::model::Book;

/// The three books pre-loaded when seeding is enabled.
pub fn seed_books() -> Vec<Book> {
    vec![
        Book {
            id: "1".into(),
            title: "The Hitchhiker's Guide to the Galaxy".into(),
            author: "Daglas Adams".into(),
            price: 40,
        },
        Book {
            id: "2".into(),
            title: "To Kill a Mockingbird".into(),
            author: "Harper Lee".into(),
            price: 20,
        },
        Book {
            id: "3".into(),
            title: "Don Quixote".into(),
            author: "Miguel de Cervantes".into(),
            price: 35,
        },
    ]
}
