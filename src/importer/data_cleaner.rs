// ==========================================
// 橄榄球比赛统计系统 - 数据清洗器实现
// ==========================================
// 职责: TRIM / NULL 标准化 / 得分解析
// ==========================================

use crate::importer::importer_trait::DataCleaner as DataCleanerTrait;

pub struct DataCleaner;

impl DataCleanerTrait for DataCleaner {
    fn clean_text(&self, value: Option<&str>) -> String {
        value.map(str::trim).unwrap_or_default().to_string()
    }

    fn normalize_null(&self, value: Option<&str>) -> Option<String> {
        value.and_then(|v| {
            let trimmed = v.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_string())
            }
        })
    }

    fn parse_points(&self, value: Option<&str>) -> Option<i32> {
        let trimmed = match value.map(str::trim) {
            None | Some("") => return Some(0),
            Some(v) => v,
        };

        if let Ok(points) = trimmed.parse::<i32>() {
            return Some(points);
        }

        // 小数向零截断（"5.0" → 5）
        match trimmed.parse::<f64>() {
            Ok(v) if v.is_finite() && v.abs() <= i32::MAX as f64 => Some(v.trunc() as i32),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_text_basic() {
        let cleaner = DataCleaner;
        assert_eq!(cleaner.clean_text(Some("  Try  ")), "Try");
        assert_eq!(cleaner.clean_text(None), "");
    }

    #[test]
    fn test_normalize_null() {
        let cleaner = DataCleaner;
        assert_eq!(cleaner.normalize_null(Some("  ")), None);
        assert_eq!(cleaner.normalize_null(Some("")), None);
        assert_eq!(cleaner.normalize_null(None), None);
        assert_eq!(
            cleaner.normalize_null(Some("  Blues  ")),
            Some("Blues".to_string())
        );
    }

    #[test]
    fn test_parse_points() {
        let cleaner = DataCleaner;
        assert_eq!(cleaner.parse_points(Some("5")), Some(5));
        assert_eq!(cleaner.parse_points(Some(" 3 ")), Some(3));
        assert_eq!(cleaner.parse_points(Some("-2")), Some(-2));
        assert_eq!(cleaner.parse_points(Some("2.0")), Some(2));
        assert_eq!(cleaner.parse_points(Some("")), Some(0));
        assert_eq!(cleaner.parse_points(None), Some(0));
        assert_eq!(cleaner.parse_points(Some("five")), None);
        assert_eq!(cleaner.parse_points(Some("NaN")), None);
        assert_eq!(cleaner.parse_points(Some("1e12")), None);
    }
}
