pub mod json_backend;

use crate::{credit::CreditBook, errors::BookError};

pub type Result<T> = std::result::Result<T, BookError>;

/// Abstraction over persistence backends capable of storing the credit book.
pub trait StorageBackend: Send + Sync {
    fn save(&self, book: &CreditBook) -> Result<()>;
    fn load(&self) -> Result<CreditBook>;
}

pub use json_backend::JsonStorage;
