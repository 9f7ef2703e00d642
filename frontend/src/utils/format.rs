use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Compact view counter: `950`, `1.2k`, `3.4M`.
pub fn format_views(views: u64) -> String {
    match views {
        0..=999 => views.to_string(),
        1_000..=999_999 => format!("{:.1}k", views as f64 / 1_000.0),
        _ => format!("{:.1}M", views as f64 / 1_000_000.0),
    }
}

/// Whole-franc amount with thousands separators, e.g. `15,000 RWF`.
pub fn format_amount(amount: f64) -> String {
    let rounded = amount.round() as i64;
    let digits = rounded.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if rounded < 0 {
        format!("-{} RWF", grouped)
    } else {
        format!("{} RWF", grouped)
    }
}

/// Bid shown on auction cards: current bid, else starting bid, else `N/A`.
pub fn display_bid(current: Option<f64>, starting: Option<f64>) -> String {
    current
        .filter(|v| *v > 0.0)
        .or(starting)
        .map(format_amount)
        .unwrap_or_else(|| "N/A".to_string())
}

/// Parses the date shapes the backend emits (RFC 3339, SQL datetime, plain
/// date) into a calendar date.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.date_naive());
    }
    for pattern in ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M:%S%.f"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, pattern) {
            return Some(dt.date());
        }
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
}

/// `March 5, 2025`; unparsable input is shown as received.
pub fn format_date(raw: &str) -> String {
    parse_date(raw)
        .map(|d| d.format("%B %-d, %Y").to_string())
        .unwrap_or_else(|| raw.to_string())
}

pub fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let cut: String = text.chars().take(max_chars).collect();
    format!("{}…", cut.trim_end())
}
