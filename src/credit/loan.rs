use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::payment::Payment;

/// A loan record. Serialized field names match the original exported blob so
/// an existing file loads unmodified.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Loan {
    pub id: i64,
    #[serde(rename = "contacto")]
    pub contact: String,
    #[serde(rename = "monto")]
    pub amount: f64,
    #[serde(rename = "cuotaCredito")]
    pub loan_installment: f64,
    #[serde(rename = "cuotaSeguro")]
    pub insurance_installment: f64,
    #[serde(rename = "saldo")]
    pub balance: f64,
    #[serde(rename = "estado")]
    pub status: Status,
    #[serde(rename = "frecuencia")]
    pub frequency: Frequency,
    #[serde(rename = "fechaInicio")]
    pub start_date: NaiveDate,
    #[serde(rename = "plazo")]
    pub term: u32,
    #[serde(rename = "pagosRealizados", default)]
    pub payments: Vec<Payment>,
}

impl Loan {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: i64,
        contact: impl Into<String>,
        amount: f64,
        loan_installment: f64,
        insurance_installment: f64,
        frequency: Frequency,
        start_date: NaiveDate,
        term: u32,
    ) -> Self {
        Self {
            id,
            contact: contact.into(),
            amount,
            loan_installment,
            insurance_installment,
            balance: amount,
            status: Status::Active,
            frequency,
            start_date,
            term,
            payments: Vec::new(),
        }
    }

    /// Scheduled installment: loan portion plus insurance portion.
    pub fn total_installment(&self) -> f64 {
        self.loan_installment + self.insurance_installment
    }

    /// Amount repaid so far, derived from principal and remaining balance.
    pub fn paid_amount(&self) -> f64 {
        self.amount - self.balance
    }

    /// Repayment progress in percent.
    pub fn progress_percent(&self) -> f64 {
        if self.amount <= 0.0 {
            return 0.0;
        }
        self.paid_amount() / self.amount * 100.0
    }

    pub fn payment(&self, id: i64) -> Option<&Payment> {
        self.payments.iter().find(|payment| payment.id == id)
    }
}

/// Loan lifecycle status, serialized with the original Spanish labels.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Status {
    #[serde(rename = "Activo")]
    Active,
    #[serde(rename = "Pagado")]
    Paid,
    #[serde(rename = "Vencido")]
    Overdue,
}

impl Status {
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Active => "Activo",
            Status::Paid => "Pagado",
            Status::Overdue => "Vencido",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Status {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "Activo" => Ok(Status::Active),
            "Pagado" => Ok(Status::Paid),
            "Vencido" => Ok(Status::Overdue),
            other => Err(format!("estado desconocido: {other}")),
        }
    }
}

/// Payment cadence, serialized with the original Spanish labels.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Frequency {
    #[serde(rename = "Mensual")]
    Monthly,
    #[serde(rename = "Quincenal")]
    Biweekly,
    #[serde(rename = "Semanal")]
    Weekly,
}

impl Frequency {
    pub fn as_str(&self) -> &'static str {
        match self {
            Frequency::Monthly => "Mensual",
            Frequency::Biweekly => "Quincenal",
            Frequency::Weekly => "Semanal",
        }
    }

    /// Unit label used when rendering the term length.
    pub fn term_unit(&self) -> &'static str {
        match self {
            Frequency::Monthly => "meses",
            Frequency::Biweekly => "quincenas",
            Frequency::Weekly => "semanas",
        }
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Frequency {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "Mensual" => Ok(Frequency::Monthly),
            "Quincenal" => Ok(Frequency::Biweekly),
            "Semanal" => Ok(Frequency::Weekly),
            other => Err(format!("frecuencia desconocida: {other}")),
        }
    }
}
