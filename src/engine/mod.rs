// ==========================================
// 橄榄球比赛统计系统 - 引擎层
// ==========================================
// 职责: 归一化事件 → 各报表的分队聚合
// 红线: 分类器为纯函数，每次返回全新聚合；报表互相独立
// ==========================================

pub mod classifier;
pub mod discipline;
pub mod error;
pub mod kicks;
pub mod match_clock;
pub mod orchestrator;
pub mod run_gate;
pub mod scoring;
pub mod set_piece;
pub mod team_resolver;

// 重导出核心引擎
pub use classifier::classify;
pub use discipline::{count_action, count_actions, DisciplineEngine};
pub use error::{ReportError, ReportResult};
pub use kicks::KickEngine;
pub use match_clock::{format_clock, parse_clock, sort_key};
pub use orchestrator::{MatchReport, ReportOrchestrator};
pub use run_gate::RunGate;
pub use scoring::ScoringEngine;
pub use set_piece::{set_piece_stats, SetPieceEngine};
pub use team_resolver::{TeamResolver, PROGRESSION_TEAM_COUNT};
