// ==========================================
// 橄榄球比赛统计系统 - 核心库
// ==========================================
// 输入: 比赛事件日志（CSV / Excel / 内存表格）
// 输出: 得分时间线、失误犯规、拉克、定位球、踢球 等分队报表
// 渲染由调用方负责，本库只产出可序列化的聚合
// ==========================================

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 事件与报表结构
pub mod domain;

// 导入层 - 外部表格与行归一化
pub mod importer;

// 引擎层 - 分类归约
pub mod engine;

// 配置层 - 列映射与动作集合
pub mod config;

// 日志系统
pub mod logging;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::types::{EventField, KickType, ReportKind, SetPiece};

// 领域实体
pub use domain::{
    ActionCountReport, DqWarning, Event, KickReport, KickStats, ReportOutput, ScoringTimeline,
    SetPieceReport, SetPieceStats, TeamTotals, WarningKind,
};

// 导入
pub use importer::{ImportError, ImportResult, RawTable, UniversalFileParser};

// 引擎
pub use engine::{MatchReport, ReportError, ReportOrchestrator, ReportResult};

// 配置
pub use config::{ConfigManager, ReportConfig, ReportConfigReader};

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "橄榄球比赛统计系统";
