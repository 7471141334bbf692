//! Listing helpers: filtering, pagination, and wholesale removal.

use crate::core::services::ServiceResult;
use crate::credit::{CreditBook, Frequency, Loan, Status};
use crate::errors::BookError;

/// Page size used by the credit listing view.
pub const PAGE_SIZE: usize = 10;

pub struct LoanService;

impl LoanService {
    /// Returns the loans matching both optional equality filters, preserving
    /// relative order. An absent filter matches everything.
    pub fn filter<'a>(
        loans: &'a [Loan],
        status: Option<Status>,
        frequency: Option<Frequency>,
    ) -> Vec<&'a Loan> {
        loans
            .iter()
            .filter(|loan| {
                status.map_or(true, |wanted| loan.status == wanted)
                    && frequency.map_or(true, |wanted| loan.frequency == wanted)
            })
            .collect()
    }

    /// Total number of pages for `count` records.
    pub fn page_count(count: usize, page_size: usize) -> usize {
        count.div_ceil(page_size.max(1))
    }

    /// Returns the 1-indexed page, or `None` when the page number is out of
    /// range. Page 1 of an empty collection is the empty page.
    pub fn paginate<'a>(
        loans: &[&'a Loan],
        page_size: usize,
        page: usize,
    ) -> Option<Vec<&'a Loan>> {
        if page == 0 {
            return None;
        }
        if loans.is_empty() {
            return (page == 1).then(Vec::new);
        }
        if page > Self::page_count(loans.len(), page_size) {
            return None;
        }
        let start = (page - 1) * page_size;
        let end = (start + page_size).min(loans.len());
        Some(loans[start..end].to_vec())
    }

    /// Removes the loan wholesale, returning the removed record.
    pub fn remove(book: &mut CreditBook, id: i64) -> ServiceResult<Loan> {
        book.remove_loan(id)
            .ok_or_else(|| BookError::NotFound(id).into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn loan(id: i64, status: Status, frequency: Frequency) -> Loan {
        let mut loan = Loan::new(
            id,
            format!("Contacto {id}"),
            1000.0,
            100.0,
            10.0,
            frequency,
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            12,
        );
        loan.status = status;
        loan
    }

    fn mixed_loans() -> Vec<Loan> {
        vec![
            loan(1, Status::Active, Frequency::Monthly),
            loan(2, Status::Paid, Frequency::Biweekly),
            loan(3, Status::Overdue, Frequency::Monthly),
            loan(4, Status::Active, Frequency::Weekly),
        ]
    }

    #[test]
    fn empty_filter_returns_all_in_order() {
        let loans = mixed_loans();
        let filtered = LoanService::filter(&loans, None, None);
        let ids: Vec<i64> = filtered.iter().map(|l| l.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);
    }

    #[test]
    fn status_filter_matches_exactly() {
        let loans = mixed_loans();
        let filtered = LoanService::filter(&loans, Some(Status::Active), None);
        assert!(filtered.iter().all(|l| l.status == Status::Active));
        assert_eq!(filtered.len(), 2);
    }

    #[test]
    fn combined_filters_intersect() {
        let loans = mixed_loans();
        let filtered =
            LoanService::filter(&loans, Some(Status::Active), Some(Frequency::Weekly));
        let ids: Vec<i64> = filtered.iter().map(|l| l.id).collect();
        assert_eq!(ids, vec![4]);
    }

    #[test]
    fn pagination_of_23_items_yields_10_10_3() {
        let loans: Vec<Loan> = (1..=23)
            .map(|id| loan(id, Status::Active, Frequency::Monthly))
            .collect();
        let refs = LoanService::filter(&loans, None, None);

        assert_eq!(LoanService::page_count(refs.len(), 10), 3);
        assert_eq!(LoanService::paginate(&refs, 10, 1).unwrap().len(), 10);
        assert_eq!(LoanService::paginate(&refs, 10, 2).unwrap().len(), 10);
        let last = LoanService::paginate(&refs, 10, 3).unwrap();
        assert_eq!(last.len(), 3);
        assert_eq!(last[0].id, 21);

        assert!(LoanService::paginate(&refs, 10, 0).is_none());
        assert!(LoanService::paginate(&refs, 10, 4).is_none());
    }

    #[test]
    fn empty_collection_has_a_single_empty_page() {
        let refs: Vec<&Loan> = Vec::new();
        assert_eq!(LoanService::paginate(&refs, 10, 1).unwrap().len(), 0);
        assert!(LoanService::paginate(&refs, 10, 2).is_none());
    }

    #[test]
    fn remove_unknown_loan_fails() {
        let mut book = CreditBook::default();
        let err = LoanService::remove(&mut book, 7).expect_err("remove must fail");
        assert!(err.to_string().contains("id 7"));
    }
}
