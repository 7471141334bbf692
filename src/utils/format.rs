//! Display helpers mirroring the original es-CO formatting.

use chrono::NaiveDate;

/// Formats an amount with `.` thousands separators, `,` decimals, and two
/// decimal places.
pub fn format_amount(value: f64) -> String {
    let negative = value < 0.0;
    let cents = (value.abs() * 100.0).round() as u64;
    let whole = (cents / 100).to_string();
    let frac = cents % 100;

    let mut grouped = String::new();
    for (idx, ch) in whole.chars().enumerate() {
        if idx > 0 && (whole.len() - idx) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }

    let sign = if negative { "-" } else { "" };
    format!("{sign}{grouped},{frac:02}")
}

/// Renders a calendar date as `dd/mm/yyyy`.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

/// One-decimal percentage, matching the original progress labels.
pub fn format_percent(value: f64) -> String {
    format!("{value:.1}%")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn amounts_use_es_co_separators() {
        assert_eq!(format_amount(5000.0), "5.000,00");
        assert_eq!(format_amount(300.5), "300,50");
        assert_eq!(format_amount(1234567.89), "1.234.567,89");
        assert_eq!(format_amount(0.0), "0,00");
        assert_eq!(format_amount(-42.0), "-42,00");
    }

    #[test]
    fn dates_render_day_first() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
        assert_eq!(format_date(date), "15/01/2024");
    }

    #[test]
    fn percent_keeps_one_decimal() {
        assert_eq!(format_percent(30.0), "30.0%");
        assert_eq!(format_percent(66.666), "66.7%");
    }
}
