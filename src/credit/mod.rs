//! Loan domain models, persistence-friendly types, and helpers.

pub mod book;
pub mod loan;
pub mod payment;

pub use book::CreditBook;
pub use loan::{Frequency, Loan, Status};
pub use payment::Payment;
