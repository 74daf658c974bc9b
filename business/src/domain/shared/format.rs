use bigdecimal::BigDecimal;
use bigdecimal::rounding::RoundingMode;
use chrono::{DateTime, Utc};

/// Formats a money amount in Brazilian Real, e.g. `R$ 1.234,56`.
pub fn format_brl(amount: &BigDecimal) -> String {
    let scaled = amount.with_scale_round(2, RoundingMode::HalfUp);
    let raw = scaled.to_string();
    let negative = raw.starts_with('-');
    let digits = raw.trim_start_matches('-');
    let (int_part, frac_part) = digits.split_once('.').unwrap_or((digits, "00"));

    let mut grouped = String::new();
    for (i, ch) in int_part.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }
    let int_grouped: String = grouped.chars().rev().collect();

    let sign = if negative { "-" } else { "" };
    format!("{}R$ {},{}", sign, int_grouped, frac_part)
}

/// Formats a timestamp the way the interface displays purchase dates,
/// e.g. `07/08/2026 14:30`.
pub fn format_date_br(date: &DateTime<Utc>) -> String {
    date.format("%d/%m/%Y %H:%M").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use std::str::FromStr;

    #[test]
    fn should_format_whole_amount_with_two_decimals() {
        let amount = BigDecimal::from_str("7").unwrap();
        assert_eq!(format_brl(&amount), "R$ 7,00");
    }

    #[test]
    fn should_group_thousands_with_dots() {
        let amount = BigDecimal::from_str("1234567.5").unwrap();
        assert_eq!(format_brl(&amount), "R$ 1.234.567,50");
    }

    #[test]
    fn should_format_negative_amounts() {
        let amount = BigDecimal::from_str("-2").unwrap();
        assert_eq!(format_brl(&amount), "-R$ 2,00");
    }

    #[test]
    fn should_round_half_up_to_cents() {
        let amount = BigDecimal::from_str("3.555").unwrap();
        assert_eq!(format_brl(&amount), "R$ 3,56");
    }

    #[test]
    fn should_format_date_as_day_month_year() {
        let date = Utc.with_ymd_and_hms(2026, 8, 7, 14, 30, 0).unwrap();
        assert_eq!(format_date_br(&date), "07/08/2026 14:30");
    }
}
