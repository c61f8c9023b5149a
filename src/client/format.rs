use chrono::{NaiveDateTime, Utc};

/// Rupee amount with thousands separators, e.g. `₹48,250.50`.
pub fn format_amount(amount: f64) -> String {
    let formatted = format!("{:.2}", amount.abs());
    let (whole, fraction) = formatted.split_once('.').unwrap_or((formatted.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if amount < 0.0 { "-" } else { "" };
    format!("{}₹{}.{}", sign, grouped, fraction)
}

pub fn format_relative_time(datetime: &NaiveDateTime) -> String {
    format_relative_to(datetime, &Utc::now().naive_utc())
}

fn format_relative_to(datetime: &NaiveDateTime, now: &NaiveDateTime) -> String {
    let duration = now.signed_duration_since(*datetime);

    let seconds = duration.num_seconds();
    let minutes = duration.num_minutes();
    let hours = duration.num_hours();
    let days = duration.num_days();

    if seconds < 60 {
        "just now".to_string()
    } else if minutes < 60 {
        format!("{} minute{} ago", minutes, plural(minutes))
    } else if hours < 24 {
        format!("{} hour{} ago", hours, plural(hours))
    } else if days < 30 {
        format!("{} day{} ago", days, plural(days))
    } else if days < 365 {
        let months = days / 30;
        format!("{} month{} ago", months, plural(months))
    } else {
        let years = days / 365;
        format!("{} year{} ago", years, plural(years))
    }
}

fn plural(count: i64) -> &'static str {
    if count == 1 {
        ""
    } else {
        "s"
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, NaiveDate};

    use super::*;

    fn at(hour: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 5, 12)
            .unwrap()
            .and_hms_opt(hour, 0, 0)
            .unwrap()
    }

    #[test]
    fn groups_thousands() {
        assert_eq!(format_amount(48250.5), "₹48,250.50");
        assert_eq!(format_amount(1234567.0), "₹1,234,567.00");
        assert_eq!(format_amount(800.0), "₹800.00");
        assert_eq!(format_amount(0.0), "₹0.00");
        assert_eq!(format_amount(-1500.0), "-₹1,500.00");
    }

    #[test]
    fn relative_time_buckets() {
        let now = at(12);

        assert_eq!(format_relative_to(&now, &now), "just now");
        assert_eq!(format_relative_to(&(now - Duration::minutes(1)), &now), "1 minute ago");
        assert_eq!(format_relative_to(&at(9), &now), "3 hours ago");
        assert_eq!(format_relative_to(&(now - Duration::days(45)), &now), "1 month ago");
        assert_eq!(format_relative_to(&(now - Duration::days(800)), &now), "2 years ago");
    }
}
