use crate::domain::errors::FormatError;
use crate::domain::formatting::value_objects::{CalendarDate, Money};

/// Non-breaking space, what browser locale data puts between symbol and amount
const CURRENCY_SPACER: char = '\u{a0}';

/// Domain service rendering amounts per Brazilian Real conventions:
/// `R$` symbol, `.` thousands grouping, `,` decimal separator, two
/// fraction digits.
pub struct CurrencyFormattingService {
    symbol: &'static str,
    group_separator: char,
    decimal_separator: char,
}

impl Default for CurrencyFormattingService {
    fn default() -> Self {
        Self::new()
    }
}

impl CurrencyFormattingService {
    pub fn new() -> Self {
        Self { symbol: "R$", group_separator: '.', decimal_separator: ',' }
    }

    /// Render an amount as currency text, e.g. `1000.0` -> `"R$ 1.000,00"`.
    ///
    /// Rounds half away from zero to two fraction digits. Non-finite
    /// amounts mirror what the browser formatter prints for them.
    pub fn format(&self, amount: Money) -> String {
        let value = amount.value();
        if value.is_nan() {
            return format!("{}{}NaN", self.symbol, CURRENCY_SPACER);
        }
        if value.is_infinite() {
            let sign = if value < 0.0 { "-" } else { "" };
            return format!("{}{}{}∞", sign, self.symbol, CURRENCY_SPACER);
        }

        let cents = (value.abs() * 100.0).round() as u128;
        let whole = cents / 100;
        let fraction = (cents % 100) as u32;
        // -0.004 rounds to zero cents and must not keep its sign
        let sign = if value < 0.0 && cents > 0 { "-" } else { "" };

        format!(
            "{}{}{}{}{}{:02}",
            sign,
            self.symbol,
            CURRENCY_SPACER,
            self.grouped(whole),
            self.decimal_separator,
            fraction
        )
    }

    fn grouped(&self, whole: u128) -> String {
        let digits = whole.to_string();
        let mut reversed = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, ch) in digits.chars().rev().enumerate() {
            if i != 0 && i % 3 == 0 {
                reversed.push(self.group_separator);
            }
            reversed.push(ch);
        }
        reversed.chars().rev().collect()
    }
}

/// Domain service parsing date strings and rendering them as Brazilian
/// localized dates (`DD/MM/YYYY`).
pub struct DateFormattingService;

impl Default for DateFormattingService {
    fn default() -> Self {
        Self::new()
    }
}

impl DateFormattingService {
    pub fn new() -> Self {
        Self
    }

    /// Parse an ISO-shaped date string: `YYYY-MM-DD`, optionally followed
    /// by `T` or a space and a time part, which is ignored.
    pub fn parse(&self, raw: &str) -> Result<CalendarDate, FormatError> {
        let unparseable = || FormatError::UnparseableDate(raw.to_string());

        let date_part = raw.trim().split(['T', ' ']).next().ok_or_else(unparseable)?;
        let mut parts = date_part.split('-');
        let (year, month, day) = match (parts.next(), parts.next(), parts.next(), parts.next()) {
            (Some(y), Some(m), Some(d), None) => (y, m, d),
            _ => return Err(unparseable()),
        };
        if year.len() != 4 {
            return Err(unparseable());
        }

        let year: i32 = year.parse().map_err(|_| unparseable())?;
        let month: u32 = month.parse().map_err(|_| unparseable())?;
        let day: u32 = day.parse().map_err(|_| unparseable())?;

        CalendarDate::new(year, month, day)
    }

    /// Render as `DD/MM/YYYY` with zero-padded day and month
    pub fn format(&self, date: &CalendarDate) -> String {
        format!("{:02}/{:02}/{}", date.day(), date.month(), date.year())
    }

    /// Parse-then-render convenience used by the wasm boundary
    pub fn reformat(&self, raw: &str) -> Result<String, FormatError> {
        Ok(self.format(&self.parse(raw)?))
    }
}

#[cfg(test)]
fn brl(value: f64) -> String {
    CurrencyFormattingService::new().format(Money::new(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_thousands_with_brazilian_separators() {
        assert_eq!(brl(1000.0), "R$\u{a0}1.000,00");
        assert_eq!(brl(1_234_567.89), "R$\u{a0}1.234.567,89");
        assert_eq!(brl(0.0), "R$\u{a0}0,00");
        assert_eq!(brl(999.0), "R$\u{a0}999,00");
    }

    #[test]
    fn rounds_half_away_from_zero() {
        assert_eq!(brl(0.005), "R$\u{a0}0,01");
        assert_eq!(brl(2.125), "R$\u{a0}2,13");
        assert_eq!(brl(-0.005), "-R$\u{a0}0,01");
    }

    #[test]
    fn negative_amounts_carry_a_leading_sign() {
        assert_eq!(brl(-1500.5), "-R$\u{a0}1.500,50");
        // rounds to zero cents, sign dropped
        assert_eq!(brl(-0.001), "R$\u{a0}0,00");
    }

    #[test]
    fn non_finite_amounts_mirror_the_browser_formatter() {
        assert_eq!(brl(f64::NAN), "R$\u{a0}NaN");
        assert_eq!(brl(f64::INFINITY), "R$\u{a0}∞");
        assert_eq!(brl(f64::NEG_INFINITY), "-R$\u{a0}∞");
    }

    #[test]
    fn formats_iso_dates_as_brazilian() {
        let svc = DateFormattingService::new();
        assert_eq!(svc.reformat("2024-01-15").unwrap(), "15/01/2024");
        assert_eq!(svc.reformat("2024-12-01").unwrap(), "01/12/2024");
        assert_eq!(svc.reformat("2024-2-5").unwrap(), "05/02/2024");
    }

    #[test]
    fn time_suffix_is_ignored() {
        let svc = DateFormattingService::new();
        assert_eq!(svc.reformat("2024-01-15T10:30:00").unwrap(), "15/01/2024");
        assert_eq!(svc.reformat("2024-01-15 23:59:59").unwrap(), "15/01/2024");
    }

    #[test]
    fn garbage_input_is_an_error() {
        let svc = DateFormattingService::new();
        assert!(svc.parse("").is_err());
        assert!(svc.parse("not-a-date").is_err());
        assert!(svc.parse("15/01/2024").is_err());
        assert!(svc.parse("2024-01").is_err());
        assert!(svc.parse("2024-01-15-03").is_err());
        assert!(svc.parse("24-01-15").is_err());
    }

    #[test]
    fn calendar_validity_is_enforced() {
        let svc = DateFormattingService::new();
        assert!(svc.parse("2024-02-30").is_err());
        assert!(svc.parse("2023-02-29").is_err());
        assert_eq!(svc.reformat("2024-02-29").unwrap(), "29/02/2024");
    }
}

// quickcheck pulls in rand, which has no wasm32-unknown-unknown support
// here; the properties run on the native test pass only
#[cfg(all(test, not(target_arch = "wasm32")))]
mod properties {
    use super::brl;
    use quickcheck_macros::quickcheck;

    #[quickcheck]
    fn formatted_digits_reconstruct_the_cents(cents: u32) -> bool {
        let formatted = brl(cents as f64 / 100.0);
        let digits: String = formatted.chars().filter(|c| c.is_ascii_digit()).collect();
        digits.parse::<u64>() == Ok(cents as u64)
    }

    #[quickcheck]
    fn thousands_groups_are_always_three_digits(cents: u32) -> bool {
        let formatted = brl(cents as f64 / 100.0);
        let whole = formatted
            .split('\u{a0}')
            .nth(1)
            .and_then(|amount| amount.split(',').next())
            .unwrap_or_default();
        let mut groups = whole.split('.');
        let head_ok = groups.next().is_some_and(|g| (1..=3).contains(&g.len()));
        head_ok && groups.all(|g| g.len() == 3)
    }
}
