//! Portuguese (Brazil) labels for the calendar.

use chrono::NaiveDate;

pub const MONTH_NAMES_PT_BR: [&str; 12] = [
    "Janeiro",
    "Fevereiro",
    "Março",
    "Abril",
    "Maio",
    "Junho",
    "Julho",
    "Agosto",
    "Setembro",
    "Outubro",
    "Novembro",
    "Dezembro",
];

/// Weekday column headers, Sunday first
pub const WEEKDAY_SHORT_PT_BR: [&str; 7] = ["dom", "seg", "ter", "qua", "qui", "sex", "sáb"];

/// Name for a 1-based month number
pub fn month_name(month: u32) -> &'static str {
    match month {
        1..=12 => MONTH_NAMES_PT_BR[(month - 1) as usize],
        _ => "",
    }
}

/// `dd/MM/yyyy`
pub fn format_date_br(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_month_names() {
        assert_eq!(month_name(1), "Janeiro");
        assert_eq!(month_name(3), "Março");
        assert_eq!(month_name(12), "Dezembro");
        assert_eq!(month_name(0), "");
        assert_eq!(month_name(13), "");
    }

    #[test]
    fn test_format_date_br() {
        let date = NaiveDate::from_ymd_opt(1990, 5, 10).unwrap();
        assert_eq!(format_date_br(date), "10/05/1990");
    }
}
