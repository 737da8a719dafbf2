//! Formatting helpers for tooltips, axis labels, and the data-info footer.

use time::Date;

/// Serialized payload size in kilobytes, matching the "Size: … KB" footer line.
pub fn format_kb(bytes: usize) -> String {
    format!("{:.2} KB", bytes as f64 / 1024.0)
}

pub fn format_billions(value: f64) -> String {
    format!("${value:.1} Billion")
}

pub fn format_celsius(value: f64) -> String {
    format!("{value:.1}\u{2103}")
}

pub fn format_percent(value: f64) -> String {
    format!("{value:.1}%")
}

/// `MM:SS` race-time label from a seconds count.
pub fn format_race_time(seconds: u32) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}

pub fn month_name(month: u8) -> &'static str {
    match month {
        1 => "January",
        2 => "February",
        3 => "March",
        4 => "April",
        5 => "May",
        6 => "June",
        7 => "July",
        8 => "August",
        9 => "September",
        10 => "October",
        11 => "November",
        12 => "December",
        _ => "Unknown",
    }
}

/// Calendar quarter label for a GDP observation date, e.g. `1947 Q3`.
pub fn format_quarter(date: Date) -> String {
    let quarter = (u8::from(date.month()) - 1) / 3 + 1;
    format!("{} Q{}", date.year(), quarter)
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    #[test]
    fn kilobytes_round_to_two_places() {
        assert_eq!(format_kb(1024), "1.00 KB");
        assert_eq!(format_kb(1536), "1.50 KB");
    }

    #[test]
    fn race_time_pads_seconds() {
        assert_eq!(format_race_time(2210), "36:50");
        assert_eq!(format_race_time(3661), "61:01");
    }

    #[test]
    fn quarters_follow_month() {
        assert_eq!(format_quarter(date!(1947 - 01 - 01)), "1947 Q1");
        assert_eq!(format_quarter(date!(1947 - 10 - 01)), "1947 Q4");
    }
}
