//! Renders the credit detail: general info, repayment summary, progress, and
//! the payment table.

use std::cmp;

use crate::cli::list_view::styled_status;
use crate::cli::table::{Alignment, Table, TableColumn};
use crate::credit::Loan;
use crate::utils::format::{format_amount, format_date, format_percent};

const RULE_WIDTH: usize = 46;
const BAR_WIDTH: usize = 30;

pub fn render(loan: &Loan) -> String {
    let mut out = String::new();

    out.push_str(&format!("Crédito #{}  {}\n", loan.id, styled_status(loan.status)));
    out.push_str(&rule());
    push_field(&mut out, "Contacto", &loan.contact);
    push_field(&mut out, "Monto", &format!("${}", format_amount(loan.amount)));
    push_field(&mut out, "Fecha inicio", &format_date(loan.start_date));
    push_field(
        &mut out,
        "Plazo",
        &format!("{} {}", loan.term, loan.frequency.term_unit()),
    );
    push_field(&mut out, "Frecuencia", loan.frequency.as_str());
    push_field(
        &mut out,
        "Cuota crédito",
        &format!("${}", format_amount(loan.loan_installment)),
    );
    push_field(
        &mut out,
        "Cuota seguro",
        &format!("${}", format_amount(loan.insurance_installment)),
    );
    push_field(
        &mut out,
        "Cuota total",
        &format!("${}", format_amount(loan.total_installment())),
    );

    out.push_str(&rule());
    push_field(&mut out, "Total", &format!("${}", format_amount(loan.amount)));
    push_field(
        &mut out,
        "Pagado",
        &format!("${}", format_amount(loan.paid_amount())),
    );
    push_field(&mut out, "Saldo", &format!("${}", format_amount(loan.balance)));
    push_field(
        &mut out,
        "Progreso",
        &format!(
            "{} {}",
            progress_bar(loan.progress_percent()),
            format_percent(loan.progress_percent())
        ),
    );

    out.push_str(&rule());
    out.push_str(&render_payments(loan));
    out
}

fn render_payments(loan: &Loan) -> String {
    if loan.payments.is_empty() {
        return String::from("No hay pagos registrados");
    }

    let table = Table {
        columns: vec![
            TableColumn::new("#", Alignment::Right),
            TableColumn::new("Fecha", Alignment::Left),
            TableColumn::new("Monto", Alignment::Right),
            TableColumn::new("Comprobante", Alignment::Left),
            TableColumn::new("Id", Alignment::Right),
        ],
        rows: loan
            .payments
            .iter()
            .enumerate()
            .map(|(index, payment)| {
                vec![
                    format!("#{}", index + 1),
                    format_date(payment.date),
                    format!("${}", format_amount(payment.amount)),
                    payment.receipt.clone(),
                    payment.id.to_string(),
                ]
            })
            .collect(),
        show_headers: true,
        padding: 1,
    };
    table.render()
}

fn progress_bar(percent: f64) -> String {
    let clamped = percent.clamp(0.0, 100.0);
    let filled = cmp::min(
        BAR_WIDTH,
        (clamped / 100.0 * BAR_WIDTH as f64).round() as usize,
    );
    format!("[{}{}]", "#".repeat(filled), "-".repeat(BAR_WIDTH - filled))
}

fn push_field(out: &mut String, key: &str, value: &str) {
    out.push_str(&format!("{key:<14} {value}\n"));
}

fn rule() -> String {
    format!("{}\n", "-".repeat(RULE_WIDTH))
}
