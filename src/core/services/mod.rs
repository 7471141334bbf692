pub mod loan_service;
pub mod payment_service;

pub use loan_service::LoanService;
pub use payment_service::PaymentService;

use crate::errors::BookError;

pub type ServiceResult<T> = Result<T, ServiceError>;

#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error(transparent)]
    Book(#[from] BookError),
    #[error("{0}")]
    Invalid(String),
}
