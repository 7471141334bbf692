use chrono::NaiveDate;
use credito_core::{
    core::services::{LoanService, PaymentService, ServiceError},
    credit::{Frequency, Loan, Status},
};

fn sample_loan() -> Loan {
    let mut loan = Loan::new(
        1,
        "Juan Pérez",
        5000.0,
        250.0,
        50.0,
        Frequency::Monthly,
        NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
        24,
    );
    loan.balance = 3500.0;
    loan
}

fn date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 7, 1).unwrap()
}

#[test]
fn full_payment_and_reversal_follow_the_documented_cycle() {
    // Balance 3500.00, pay 3500.00 -> balance 0.00, "Pagado"; reverse the
    // payment -> balance 3500.00, "Activo".
    let mut loan = sample_loan();

    let payment_id = PaymentService::apply(&mut loan, 3500.0, date(), "COMP-100").unwrap();
    assert_eq!(loan.balance, 0.0);
    assert_eq!(loan.status, Status::Paid);
    assert_eq!(loan.status.as_str(), "Pagado");

    assert!(PaymentService::reverse(&mut loan, payment_id));
    assert_eq!(loan.balance, 3500.0);
    assert_eq!(loan.status, Status::Active);
    assert_eq!(loan.status.as_str(), "Activo");
}

#[test]
fn reversal_restores_balance_but_not_a_prior_overdue_status() {
    let mut loan = sample_loan();
    loan.status = Status::Overdue;

    let payment_id = PaymentService::apply(&mut loan, 3500.0, date(), "COMP-101").unwrap();
    assert_eq!(loan.status, Status::Paid);

    // The prior Vencido is lost: reversal always lands on Activo.
    assert!(PaymentService::reverse(&mut loan, payment_id));
    assert_eq!(loan.balance, 3500.0);
    assert_eq!(loan.status, Status::Active);
}

#[test]
fn apply_validation_rejects_bad_amounts_without_mutating() {
    let mut loan = sample_loan();
    for amount in [0.0, -1.0, 3500.01] {
        let err = PaymentService::apply(&mut loan, amount, date(), "COMP-102")
            .expect_err("invalid amount must fail");
        assert!(matches!(err, ServiceError::Invalid(_)));
    }
    assert_eq!(loan.balance, 3500.0);
    assert!(loan.payments.is_empty());
}

#[test]
fn filtering_and_pagination_compose() {
    let mut loans = Vec::new();
    for id in 1..=23 {
        let mut loan = sample_loan();
        loan.id = id;
        loan.status = if id % 2 == 0 {
            Status::Paid
        } else {
            Status::Active
        };
        loans.push(loan);
    }

    let all = LoanService::filter(&loans, None, None);
    assert_eq!(all.len(), 23);
    assert_eq!(LoanService::paginate(&all, 10, 3).unwrap().len(), 3);
    assert!(LoanService::paginate(&all, 10, 4).is_none());

    let paid = LoanService::filter(&loans, Some(Status::Paid), None);
    assert_eq!(paid.len(), 11);
    assert!(paid.iter().all(|loan| loan.status == Status::Paid));

    let monthly_paid =
        LoanService::filter(&loans, Some(Status::Paid), Some(Frequency::Monthly));
    assert_eq!(monthly_paid.len(), 11);
    let weekly = LoanService::filter(&loans, None, Some(Frequency::Weekly));
    assert!(weekly.is_empty());
}
