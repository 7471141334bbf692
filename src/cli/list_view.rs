//! Renders the filtered, paginated credit listing.

use colored::Colorize;

use crate::cli::table::{Alignment, Table, TableColumn};
use crate::credit::{Loan, Status};
use crate::utils::format::{format_amount, format_date, format_percent};

/// Renders one page of the listing plus a `página x / y` footer.
pub fn render_page(loans: &[&Loan], page: usize, total_pages: usize) -> String {
    if loans.is_empty() {
        return String::from("No hay créditos registrados");
    }

    let table = Table {
        columns: columns(),
        rows: loans.iter().map(|loan| row(loan)).collect(),
        show_headers: true,
        padding: 1,
    };

    let mut out = table.render();
    out.push('\n');
    out.push_str(&format!("página {} / {}", page, total_pages.max(1)));
    out
}

fn columns() -> Vec<TableColumn> {
    vec![
        TableColumn::new("Id", Alignment::Right),
        TableColumn::new("Contacto", Alignment::Left),
        TableColumn::new("Crédito", Alignment::Right),
        TableColumn::new("Cuota", Alignment::Right),
        TableColumn::new("Saldo", Alignment::Right),
        TableColumn::new("Estado", Alignment::Left),
        TableColumn::new("Inicio", Alignment::Left),
    ]
}

fn row(loan: &Loan) -> Vec<String> {
    vec![
        loan.id.to_string(),
        loan.contact.clone(),
        format!(
            "${} ({} {})",
            format_amount(loan.amount),
            loan.term,
            loan.frequency.term_unit()
        ),
        format!("${}", format_amount(loan.total_installment())),
        format!(
            "${} ({} pagado)",
            format_amount(loan.balance),
            format_percent(loan.progress_percent())
        ),
        styled_status(loan.status),
        format_date(loan.start_date),
    ]
}

pub(crate) fn styled_status(status: Status) -> String {
    let label = status.as_str();
    match status {
        Status::Active => label.bright_green().to_string(),
        Status::Paid => label.bright_blue().to_string(),
        Status::Overdue => label.bright_red().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::credit::Frequency;
    use chrono::NaiveDate;

    fn loan() -> Loan {
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

    #[test]
    fn empty_page_shows_placeholder() {
        assert_eq!(render_page(&[], 1, 0), "No hay créditos registrados");
    }

    #[test]
    fn page_includes_rows_and_footer() {
        let loan = loan();
        let rendered = render_page(&[&loan], 1, 3);
        assert!(rendered.contains("Juan Pérez"));
        assert!(rendered.contains("$5.000,00 (24 meses)"));
        assert!(rendered.contains("$3.500,00 (30.0% pagado)"));
        assert!(rendered.contains("15/01/2024"));
        assert!(rendered.ends_with("página 1 / 3"));
    }
}
