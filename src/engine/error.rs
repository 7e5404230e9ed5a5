// ==========================================
// 橄榄球比赛统计系统 - 报表错误类型
// ==========================================
// 职责: 每个报表独立的结构化失败（配置错误）
// 红线: 一个报表失败不阻断其他报表；失败时不返回部分聚合
// ==========================================

use crate::domain::ReportKind;
use crate::importer::ImportError;
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "error")]
pub enum ReportError {
    #[error("{report} 缺少必需列: {}", .columns.join(", "))]
    MissingColumns {
        report: ReportKind,
        columns: Vec<String>,
    },

    #[error("{report} 无可用数据行")]
    EmptyBatch { report: ReportKind },

    #[error("{report} 至少需要 {required} 支球队，实际 {}: [{}]", .found.len(), .found.join(", "))]
    InsufficientTeams {
        report: ReportKind,
        required: usize,
        found: Vec<String>,
    },

    #[error("{report} 导入失败: {message}")]
    Import { report: ReportKind, message: String },
}

impl ReportError {
    /// 将导入错误归属到具体报表
    pub fn from_import(report: ReportKind, err: &ImportError) -> Self {
        match err {
            ImportError::MissingColumns { columns } => ReportError::MissingColumns {
                report,
                columns: columns.clone(),
            },
            ImportError::EmptyBatch => ReportError::EmptyBatch { report },
            other => ReportError::Import {
                report,
                message: other.to_string(),
            },
        }
    }

    pub fn report(&self) -> ReportKind {
        match self {
            ReportError::MissingColumns { report, .. }
            | ReportError::EmptyBatch { report }
            | ReportError::InsufficientTeams { report, .. }
            | ReportError::Import { report, .. } => *report,
        }
    }

    /// 缺失列名（非缺列错误返回空切片）
    pub fn missing_columns(&self) -> &[String] {
        match self {
            ReportError::MissingColumns { columns, .. } => columns,
            _ => &[],
        }
    }
}

/// Result 类型别名
pub type ReportResult<T> = Result<T, ReportError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_import_missing_columns() {
        let err = ImportError::MissingColumns {
            columns: vec!["Team".to_string()],
        };
        let report_err = ReportError::from_import(ReportKind::Kicks, &err);

        assert_eq!(report_err.report(), ReportKind::Kicks);
        assert_eq!(report_err.missing_columns(), ["Team"]);
        assert_eq!(report_err.to_string(), "Kicks 缺少必需列: Team");
    }

    #[test]
    fn test_from_import_other_keeps_message() {
        let err = ImportError::CsvParseError("bad quote".to_string());
        let report_err = ReportError::from_import(ReportKind::Scrums, &err);

        assert!(matches!(report_err, ReportError::Import { .. }));
        assert!(report_err.to_string().contains("bad quote"));
    }

    #[test]
    fn test_insufficient_teams_message() {
        let err = ReportError::InsufficientTeams {
            report: ReportKind::ScoringTimeline,
            required: 2,
            found: vec!["A".to_string()],
        };
        assert_eq!(
            err.to_string(),
            "ScoringTimeline 至少需要 2 支球队，实际 1: [A]"
        );
    }
}
