//! Business logic helpers for the loan payment ledger.

use chrono::NaiveDate;

use crate::core::services::{ServiceError, ServiceResult};
use crate::credit::{Loan, Payment, Status};

/// Provides validated bookkeeping operations on a loan's payment ledger.
pub struct PaymentService;

impl PaymentService {
    /// Applies a payment against the loan balance and returns the new
    /// payment's identifier. The caller persists the updated book afterward.
    pub fn apply(
        loan: &mut Loan,
        amount: f64,
        date: NaiveDate,
        receipt: impl Into<String>,
    ) -> ServiceResult<i64> {
        if amount <= 0.0 {
            return Err(ServiceError::Invalid(
                "El monto debe ser mayor a cero".into(),
            ));
        }
        if amount > loan.balance {
            return Err(ServiceError::Invalid(
                "El monto no puede ser mayor al saldo pendiente".into(),
            ));
        }

        let payment = Payment::new(date, amount, receipt);
        let id = payment.id;
        loan.payments.push(payment);
        loan.balance -= amount;
        if loan.balance <= 0.0 {
            loan.balance = 0.0;
            loan.status = Status::Paid;
        }
        Ok(id)
    }

    /// Reverses a payment by id, restoring the balance and removing the
    /// entry. Unknown ids are a silent no-op; returns whether a payment was
    /// removed.
    ///
    /// Only a `Pagado` status flips back to `Activo`. A `Vencido` status that
    /// was cleared by a full payment is not restored on reversal.
    pub fn reverse(loan: &mut Loan, payment_id: i64) -> bool {
        let Some(index) = loan
            .payments
            .iter()
            .position(|payment| payment.id == payment_id)
        else {
            return false;
        };
        let payment = loan.payments.remove(index);
        loan.balance += payment.amount;
        if loan.status == Status::Paid {
            loan.status = Status::Active;
        }
        true
    }
}
