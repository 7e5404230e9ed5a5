// ==========================================
// 橄榄球比赛统计系统 - 导入模块错误类型
// ==========================================
// 工具: thiserror 派生宏
// 说明: 此处均为配置/输入层面的错误；数据质量问题走 DqWarning
// ==========================================

use thiserror::Error;

/// 导入模块错误类型
#[derive(Error, Debug)]
pub enum ImportError {
    // ===== 文件相关错误 =====
    #[error("文件不存在: {0}")]
    FileNotFound(String),

    #[error("文件格式不支持: {0}（仅支持 .xlsx/.xls/.csv）")]
    UnsupportedFormat(String),

    #[error("文件读取失败: {0}")]
    FileReadError(String),

    #[error("Excel 解析失败: {0}")]
    ExcelParseError(String),

    #[error("CSV 解析失败: {0}")]
    CsvParseError(String),

    // ===== 表结构错误 =====
    #[error("缺少必需列: {}", .columns.join(", "))]
    MissingColumns { columns: Vec<String> },

    #[error("无可用数据行")]
    EmptyBatch,

    // ===== 配置错误 =====
    #[error("配置读取失败 (key: {key}): {message}")]
    ConfigReadError { key: String, message: String },

    #[error("配置值格式错误 (key: {key}, value: {value}): {message}")]
    ConfigValueError {
        key: String,
        value: String,
        message: String,
    },

    // ===== 通用错误 =====
    #[error("内部错误: {0}")]
    InternalError(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ImportError {
    /// 缺失列名（非缺列错误返回空切片）
    pub fn missing_columns(&self) -> &[String] {
        match self {
            ImportError::MissingColumns { columns } => columns,
            _ => &[],
        }
    }
}

// 实现 From<std::io::Error>
impl From<std::io::Error> for ImportError {
    fn from(err: std::io::Error) -> Self {
        ImportError::FileReadError(err.to_string())
    }
}

// 实现 From<csv::Error>
impl From<csv::Error> for ImportError {
    fn from(err: csv::Error) -> Self {
        ImportError::CsvParseError(err.to_string())
    }
}

// 实现 From<calamine::Error>
impl From<calamine::Error> for ImportError {
    fn from(err: calamine::Error) -> Self {
        ImportError::ExcelParseError(err.to_string())
    }
}

/// Result 类型别名
pub type ImportResult<T> = Result<T, ImportError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_columns_message_names_columns() {
        let err = ImportError::MissingColumns {
            columns: vec!["Team".to_string(), "Type".to_string()],
        };
        assert_eq!(err.to_string(), "缺少必需列: Team, Type");
        assert_eq!(err.missing_columns(), ["Team", "Type"]);
        assert!(ImportError::EmptyBatch.missing_columns().is_empty());
    }
}
