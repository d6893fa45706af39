//! Display formatting for list cells

use chrono::{DateTime, Utc};

/// Format a timestamp as DD.MM.YYYY
pub fn format_date(value: &DateTime<Utc>) -> String {
    value.format("%d.%m.%Y").to_string()
}

/// Format a price in Brazilian reais: thousands separated by '.', decimals by ','
///
/// ```
/// use contracts::shared::format::format_money;
/// assert_eq!(format_money(1234.5), "R$ 1.234,50");
/// ```
pub fn format_money(value: f64) -> String {
    let formatted = format!("{:.2}", value.abs());
    let (integer_part, decimal_part) = formatted.split_once('.').unwrap_or((&formatted, "00"));

    let mut grouped = String::new();
    for (i, c) in integer_part.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(c);
    }
    let grouped: String = grouped.chars().rev().collect();

    let sign = if value < 0.0 && formatted != "0.00" { "-" } else { "" };
    format!("{}R$ {},{}", sign, grouped, decimal_part)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_date() {
        let value = Utc.with_ymd_and_hms(2024, 3, 15, 14, 2, 26).unwrap();
        assert_eq!(format_date(&value), "15.03.2024");
    }

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(19.99), "R$ 19,99");
        assert_eq!(format_money(1234567.891), "R$ 1.234.567,89");
        assert_eq!(format_money(0.0), "R$ 0,00");
        assert_eq!(format_money(-1234.5), "-R$ 1.234,50");
    }
}
