use chrono::{DateTime, Local};

/// Format a metric count for display: `1.23B`, `4.56M`, `7.89K`, or the
/// plain number below a thousand. Negative values (possible after simulated
/// refreshes) pass through undecorated.
pub fn format_count(count: i64) -> String {
    if count >= 1_000_000_000 {
        format!("{:.2}B", count as f64 / 1_000_000_000.0)
    } else if count >= 1_000_000 {
        format!("{:.2}M", count as f64 / 1_000_000.0)
    } else if count >= 1_000 {
        format!("{:.2}K", count as f64 / 1_000.0)
    } else {
        count.to_string()
    }
}

/// Format an optional view count; absent view data renders as a dash.
pub fn format_optional_count(count: Option<i64>) -> String {
    match count {
        Some(value) => format_count(value),
        None => "-".to_string(),
    }
}

/// Format the last-refresh timestamp for display
pub fn format_timestamp(timestamp: &DateTime<Local>) -> String {
    timestamp.format("%Y-%m-%d %H:%M:%S").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_count_scales_with_two_decimals() {
        assert_eq!(format_count(639_000_000), "639.00M");
        assert_eq!(format_count(1_250_000_000), "1.25B");
        assert_eq!(format_count(95_400), "95.40K");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(0), "0");
    }

    #[test]
    fn format_count_passes_negatives_through() {
        assert_eq!(format_count(-412_317), "-412317");
    }

    #[test]
    fn format_optional_count_renders_absent_as_dash() {
        assert_eq!(format_optional_count(Some(2_000_000)), "2.00M");
        assert_eq!(format_optional_count(None), "-");
    }
}
