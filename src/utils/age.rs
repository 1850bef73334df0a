use time::OffsetDateTime;

/// Human label for how long ago `then` was, e.g. "5 min ago" or "3 days ago".
pub fn relative_time(then: OffsetDateTime, now: OffsetDateTime) -> String {
    let minutes = (now - then).as_seconds_f64() / 60.0;
    let hours = minutes / 60.0;

    if minutes < 1.0 {
        "just now".to_string()
    } else if minutes < 120.0 {
        format!("{:.0} min ago", minutes)
    } else if hours < 36.0 {
        format!("{:.0} hours ago", hours)
    } else if hours < 24.0 * 7.0 {
        format!("{:.0} days ago", hours / 24.0)
    } else if hours < 24.0 * 30.0 {
        format!("{:.0} weeks ago", hours / (24.0 * 7.0))
    } else {
        format!("{:.0} months ago", hours / (24.0 * 30.0))
    }
}
