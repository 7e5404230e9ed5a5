// ==========================================
// 橄榄球比赛统计系统 - 领域模型层
// ==========================================
// 职责: 定义比赛事件、报表聚合、数据质量警告
// 红线: 不含解析逻辑，不含归约逻辑
// ==========================================

pub mod event;
pub mod quality;
pub mod report;
pub mod types;

// 重导出核心类型
pub use event::{Event, UNKNOWN_PLAYER};
pub use quality::{DqWarning, WarningKind};
pub use report::{
    percent_of, ActionCountReport, CountRow, KickBreakdownRow, KickReport, KickStats,
    ReportOutput, ScoreProgressionPoint, ScoringEvent, ScoringTimeline, SetPieceReport,
    SetPieceStats, TeamEntry, TeamTotals,
};
pub use types::{EventField, KickType, ReportKind, SetPiece};
