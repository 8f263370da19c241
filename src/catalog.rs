//! In-memory storage for the authors and books served by the API.
//!
//! Both sequences are append-only and keep insertion order. A [`Catalog`] is a
//! cheap handle: clones share the same underlying collections.

use std::borrow::Cow;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use tracing::{debug, info};

use crate::datamodel::{ALL_AUTHORS, ALL_BOOKS, Author, Book};
use crate::error::{Error, Result};

#[derive(Debug, Default)]
struct Collections {
    authors: Vec<Author>,
    books: Vec<Book>,
}

#[derive(Clone, Debug, Default)]
pub struct Catalog {
    inner: Arc<RwLock<Collections>>,
}

impl Catalog {
    pub fn new(authors: Vec<Author>, books: Vec<Book>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(Collections { authors, books })),
        }
    }

    /// A catalog holding a fresh copy of the static seed dataset.
    pub fn seeded() -> Self {
        Self::new(ALL_AUTHORS.to_vec(), ALL_BOOKS.to_vec())
    }

    // Appends never leave a half-written entry behind, so a poisoned lock is
    // still safe to read through.
    fn read(&self) -> RwLockReadGuard<'_, Collections> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Collections> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn book(&self, id: i32) -> Option<Book> {
        let book = self.read().books.iter().find(|book| book.id == id).cloned();
        debug!(id, found = book.is_some(), "looked up book");
        book
    }

    pub fn books(&self) -> Vec<Book> {
        self.read().books.clone()
    }

    pub fn author(&self, id: i32) -> Option<Author> {
        let author = self
            .read()
            .authors
            .iter()
            .find(|author| author.id == id)
            .cloned();
        debug!(id, found = author.is_some(), "looked up author");
        author
    }

    pub fn authors(&self) -> Vec<Author> {
        self.read().authors.clone()
    }

    /// All books referencing `author_id`, in book order.
    pub fn books_by(&self, author_id: i32) -> Vec<Book> {
        self.read()
            .books
            .iter()
            .filter(|book| book.author_id == author_id)
            .cloned()
            .collect()
    }

    /// Appends a new book. `author_id` is not checked against known authors.
    pub fn add_book(&self, name: impl Into<Cow<'static, str>>, author_id: i32) -> Result<Book> {
        let mut collections = self.write();
        let book = Book {
            id: next_id(collections.books.len(), "book")?,
            name: name.into(),
            author_id,
        };
        collections.books.push(book.clone());
        drop(collections);

        info!(id = book.id, name = %book.name, author_id, "added book");
        Ok(book)
    }

    pub fn add_author(&self, name: impl Into<Cow<'static, str>>) -> Result<Author> {
        let mut collections = self.write();
        let author = Author {
            id: next_id(collections.authors.len(), "author")?,
            name: name.into(),
        };
        collections.authors.push(author.clone());
        drop(collections);

        info!(id = author.id, name = %author.name, "added author");
        Ok(author)
    }
}

/// Ids are the 1-based position of the new entry.
fn next_id(len: usize, kind: &'static str) -> Result<i32> {
    len.checked_add(1)
        .and_then(|id| i32::try_from(id).ok())
        .ok_or(Error::IdSpaceExhausted(kind))
}
