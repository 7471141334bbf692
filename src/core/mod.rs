pub mod book_manager;
pub mod services;
pub mod utils;

pub use book_manager::BookManager;
