use std::time::Duration;

/// Return the substring after the first occurrence of the pattern in the hay.
pub fn after<'a>(hay: &'a str, pattern: &str) -> Option<&'a str> {
    let start = hay.find(pattern)?;
    Some(&hay[start + pattern.len()..])
}

/// Parse a decimal amount of seconds such as `"125.5"`.
pub fn parse_seconds(input: &str) -> Option<Duration> {
    let secs = input.trim().parse::<f64>().ok()?;
    Duration::try_from_secs_f64(secs).ok()
}

/// Parse a clock style duration, `"4:13"` or `"1:02:03"`.
pub fn parse_clock(input: &str) -> Option<Duration> {
    let mut total: u64 = 0;
    let mut parts = 0;
    for part in input.trim().split(':') {
        let value = part.parse::<u64>().ok()?;
        total = total.checked_mul(60)?.checked_add(value)?;
        parts += 1;
    }
    if parts > 3 {
        return None;
    }
    Some(Duration::from_secs(total))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn after_returns_tail() {
        assert_eq!(after("var x = {}", "= "), Some("{}"));
        assert_eq!(after("var x = {}", "missing"), None);
    }

    #[test]
    fn seconds_accept_fractions() {
        assert_eq!(parse_seconds("125.5"), Some(Duration::from_millis(125_500)));
        assert_eq!(parse_seconds("abc"), None);
        assert_eq!(parse_seconds("-3"), None);
    }

    #[test]
    fn clock_durations() {
        assert_eq!(parse_clock("4:13"), Some(Duration::from_secs(253)));
        assert_eq!(parse_clock("1:02:03"), Some(Duration::from_secs(3723)));
        assert_eq!(parse_clock("1:2:3:4"), None);
        assert_eq!(parse_clock("LIVE"), None);
    }
}
