use serde::{Deserialize, Serialize};

use super::loan::Loan;

/// The whole loan collection. Serializes transparently as the bare array the
/// original blob stores under its single key.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CreditBook {
    pub loans: Vec<Loan>,
}

impl CreditBook {
    pub fn new(loans: Vec<Loan>) -> Self {
        Self { loans }
    }

    pub fn len(&self) -> usize {
        self.loans.len()
    }

    pub fn is_empty(&self) -> bool {
        self.loans.is_empty()
    }

    pub fn loan(&self, id: i64) -> Option<&Loan> {
        self.loans.iter().find(|loan| loan.id == id)
    }

    pub fn loan_mut(&mut self, id: i64) -> Option<&mut Loan> {
        self.loans.iter_mut().find(|loan| loan.id == id)
    }

    pub fn add_loan(&mut self, loan: Loan) -> i64 {
        let id = loan.id;
        self.loans.push(loan);
        id
    }

    pub fn remove_loan(&mut self, id: i64) -> Option<Loan> {
        let index = self.loans.iter().position(|loan| loan.id == id)?;
        Some(self.loans.remove(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::credit::Frequency;
    use chrono::NaiveDate;

    fn loan(id: i64) -> Loan {
        Loan::new(
            id,
            format!("Contacto {id}"),
            1000.0,
            100.0,
            10.0,
            Frequency::Monthly,
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            12,
        )
    }

    #[test]
    fn lookup_and_removal_by_id() {
        let mut book = CreditBook::default();
        book.add_loan(loan(1));
        book.add_loan(loan(2));

        assert_eq!(book.loan(2).unwrap().contact, "Contacto 2");
        assert!(book.loan(9).is_none());

        let removed = book.remove_loan(1).unwrap();
        assert_eq!(removed.id, 1);
        assert_eq!(book.len(), 1);
        assert!(book.remove_loan(1).is_none());
    }

    #[test]
    fn serializes_as_bare_array() {
        let mut book = CreditBook::default();
        book.add_loan(loan(1));
        let json = serde_json::to_string(&book).unwrap();
        assert!(json.starts_with('['), "expected bare array, got {json}");
        let parsed: CreditBook = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.len(), 1);
    }
}
