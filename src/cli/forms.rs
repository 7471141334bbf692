//! Field validation for the payment entry form.

use std::fmt;

use chrono::NaiveDate;

/// Field-level validation failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub message: String,
}

impl ValidationError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ValidationError {}

/// Validated payment form input.
#[derive(Debug, Clone, PartialEq)]
pub struct PaymentForm {
    pub date: NaiveDate,
    pub amount: f64,
    pub receipt: String,
}

impl PaymentForm {
    /// Parses the raw form fields, mirroring the original modal validation:
    /// all fields required, ISO date, strictly positive amount. The
    /// balance-vs-amount check stays in the payment service.
    pub fn parse(date: &str, amount: &str, receipt: &str) -> Result<Self, ValidationError> {
        if date.trim().is_empty() || amount.trim().is_empty() || receipt.trim().is_empty() {
            return Err(ValidationError::new("Por favor completa todos los campos"));
        }

        let date = NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d")
            .map_err(|_| ValidationError::new("Fecha inválida (formato AAAA-MM-DD)"))?;

        let amount: f64 = amount
            .trim()
            .parse()
            .map_err(|_| ValidationError::new("Monto inválido"))?;
        if amount <= 0.0 {
            return Err(ValidationError::new("El monto debe ser mayor a cero"));
        }

        Ok(Self {
            date,
            amount,
            receipt: receipt.trim().to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_valid_input() {
        let form = PaymentForm::parse("2024-07-01", "300.50", " COMP-001 ").unwrap();
        assert_eq!(form.date, NaiveDate::from_ymd_opt(2024, 7, 1).unwrap());
        assert_eq!(form.amount, 300.5);
        assert_eq!(form.receipt, "COMP-001");
    }

    #[test]
    fn rejects_missing_fields() {
        let err = PaymentForm::parse("2024-07-01", "300", "  ").unwrap_err();
        assert_eq!(err.message, "Por favor completa todos los campos");
    }

    #[test]
    fn rejects_bad_date() {
        let err = PaymentForm::parse("01/07/2024", "300", "COMP-001").unwrap_err();
        assert!(err.message.contains("Fecha inválida"));
    }

    #[test]
    fn rejects_non_positive_amount() {
        let err = PaymentForm::parse("2024-07-01", "0", "COMP-001").unwrap_err();
        assert_eq!(err.message, "El monto debe ser mayor a cero");
        let err = PaymentForm::parse("2024-07-01", "abc", "COMP-001").unwrap_err();
        assert_eq!(err.message, "Monto inválido");
    }
}
