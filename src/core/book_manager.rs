use chrono::NaiveDate;

use crate::core::services::{LoanService, PaymentService, ServiceError, ServiceResult};
use crate::credit::{CreditBook, Loan};
use crate::errors::BookError;
use crate::storage::StorageBackend;

/// Facade that owns the in-memory credit book and its storage backend. Every
/// mutation routes through it and ends with a wholesale save, preserving the
/// write-after-mutate invariant.
pub struct BookManager {
    book: CreditBook,
    storage: Box<dyn StorageBackend>,
}

impl BookManager {
    /// Loads the persisted book into memory.
    pub fn open(storage: Box<dyn StorageBackend>) -> ServiceResult<Self> {
        let book = storage.load()?;
        tracing::debug!(loans = book.len(), "credit book loaded");
        Ok(Self { book, storage })
    }

    pub fn book(&self) -> &CreditBook {
        &self.book
    }

    pub fn loan(&self, id: i64) -> ServiceResult<&Loan> {
        self.book
            .loan(id)
            .ok_or_else(|| BookError::NotFound(id).into())
    }

    /// Applies a payment and persists the whole book.
    pub fn apply_payment(
        &mut self,
        id: i64,
        amount: f64,
        date: NaiveDate,
        receipt: &str,
    ) -> ServiceResult<i64> {
        let loan = self
            .book
            .loan_mut(id)
            .ok_or(BookError::NotFound(id))?;
        let payment_id = PaymentService::apply(loan, amount, date, receipt)?;
        self.persist()?;
        Ok(payment_id)
    }

    /// Reverses a payment and persists. An unknown payment id leaves both the
    /// book and the stored blob untouched.
    pub fn reverse_payment(&mut self, id: i64, payment_id: i64) -> ServiceResult<bool> {
        let loan = self
            .book
            .loan_mut(id)
            .ok_or(BookError::NotFound(id))?;
        let reversed = PaymentService::reverse(loan, payment_id);
        if reversed {
            self.persist()?;
        }
        Ok(reversed)
    }

    /// Deletes a loan wholesale and persists.
    pub fn delete_loan(&mut self, id: i64) -> ServiceResult<Loan> {
        let removed = LoanService::remove(&mut self.book, id)?;
        self.persist()?;
        Ok(removed)
    }

    /// Replaces the book contents (used by seeding) and persists.
    pub fn replace(&mut self, book: CreditBook) -> ServiceResult<()> {
        self.book = book;
        self.persist()
    }

    fn persist(&self) -> ServiceResult<()> {
        self.storage.save(&self.book).map_err(ServiceError::Book)?;
        tracing::debug!(loans = self.book.len(), "credit book persisted");
        Ok(())
    }
}
