// ==========================================
// 橄榄球比赛统计系统 - 比赛时钟
// ==========================================
// 职责: mm:ss → 总秒数，为得分时间线提供全序
// 规则: 恰好一个 ':'，两侧均为 ASCII 数字，秒 < 60，分钟不设上限
// ==========================================

/// 解析 mm:ss，格式不合法返回 None
pub fn parse_clock(value: &str) -> Option<u32> {
    let (minutes, seconds) = value.trim().split_once(':')?;

    if !is_digits(minutes) || !is_digits(seconds) {
        return None;
    }

    let minutes: u32 = minutes.parse().ok()?;
    let seconds: u32 = seconds.parse().ok()?;
    if seconds >= 60 {
        return None;
    }

    minutes.checked_mul(60)?.checked_add(seconds)
}

/// 排序键：无法解析的时间视为 0（排在最前）
pub fn sort_key(value: &str) -> u32 {
    parse_clock(value).unwrap_or(0)
}

/// 总秒数 → m:ss
pub fn format_clock(total_seconds: u32) -> String {
    format!("{}:{:02}", total_seconds / 60, total_seconds % 60)
}

fn is_digits(part: &str) -> bool {
    !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_clock_valid() {
        assert_eq!(parse_clock("5:00"), Some(300));
        assert_eq!(parse_clock("2:10"), Some(130));
        assert_eq!(parse_clock("00:07"), Some(7));
        assert_eq!(parse_clock(" 85:30 "), Some(5130));
    }

    #[test]
    fn test_parse_clock_malformed() {
        assert_eq!(parse_clock(""), None);
        assert_eq!(parse_clock("5"), None);
        assert_eq!(parse_clock("5:"), None);
        assert_eq!(parse_clock(":30"), None);
        assert_eq!(parse_clock("1:2:3"), None);
        assert_eq!(parse_clock("-1:00"), None);
        assert_eq!(parse_clock("1:60"), None);
        assert_eq!(parse_clock("a:bc"), None);
        assert_eq!(parse_clock("99999999999:00"), None);
    }

    #[test]
    fn test_sort_key_treats_unparsable_as_zero() {
        assert_eq!(sort_key("garbage"), 0);
        assert_eq!(sort_key("0:01"), 1);
    }

    #[test]
    fn test_format_clock() {
        assert_eq!(format_clock(130), "2:10");
        assert_eq!(format_clock(5), "0:05");
        assert_eq!(format_clock(parse_clock("40:00").unwrap()), "40:00");
    }
}
