// ==========================================
// 橄榄球比赛统计系统 - 配置层
// ==========================================
// 职责: 列名映射与动作集合配置，支持 JSON 覆写
// ==========================================

pub mod config_manager;
pub mod report_config;
pub mod report_config_trait;

// 重导出核心配置管理器
pub use config_manager::{ConfigManager, CONFIG_PATH_ENV};
pub use report_config::{ColumnMap, ReportConfig, DEFAULT_SCORING_ACTIONS};
pub use report_config_trait::ReportConfigReader;
