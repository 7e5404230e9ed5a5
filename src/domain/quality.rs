// ==========================================
// 橄榄球比赛统计系统 - 数据质量警告
// ==========================================
// 职责: 记录可恢复的数据质量问题（非致命）
// 说明: 值按默认策略回落后继续计算，警告随结果返回并写入日志
// ==========================================

use serde::{Deserialize, Serialize};

// ==========================================
// WarningKind - 警告类型
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WarningKind {
    UnparsableTime,         // 比赛时间无法解析，排序时视为 0
    NonNumericPoints,       // 得分非数字，记 0
    UnknownKickType,        // 踢球子类型不在固定枚举内，仅计入总数
    MissingTeam,            // 球队为空，整行跳过
    TeamOutsideProgression, // 第三支及以后的球队，不进入比分走势
}

// ==========================================
// DqWarning - 数据质量警告
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DqWarning {
    pub kind: WarningKind,
    pub row_number: Option<usize>, // 原始文件行号（按球队汇总的警告为空）
    pub team: Option<String>,
    pub field: String,             // 相关字段
    pub value: Option<String>,     // 原始值
    pub message: String,
}

impl DqWarning {
    pub fn unparsable_time(row_number: usize, team: &str, value: &str) -> Self {
        Self {
            kind: WarningKind::UnparsableTime,
            row_number: Some(row_number),
            team: Some(team.to_string()),
            field: "Time".to_string(),
            value: Some(value.to_string()),
            message: format!("比赛时间无法解析: '{}'，按 0:00 排序", value),
        }
    }

    pub fn non_numeric_points(row_number: usize, field: &str, value: &str) -> Self {
        Self {
            kind: WarningKind::NonNumericPoints,
            row_number: Some(row_number),
            team: None,
            field: field.to_string(),
            value: Some(value.to_string()),
            message: format!("得分无法解析为整数: '{}'，记为 0", value),
        }
    }

    pub fn unknown_kick_type(row_number: usize, team: &str, value: Option<&str>) -> Self {
        Self {
            kind: WarningKind::UnknownKickType,
            row_number: Some(row_number),
            team: Some(team.to_string()),
            field: "Type".to_string(),
            value: value.map(str::to_string),
            message: format!(
                "未知踢球类型: '{}' (球队 {})，仅计入总数",
                value.unwrap_or(""),
                team
            ),
        }
    }

    pub fn missing_team(row_number: usize, field: &str) -> Self {
        Self {
            kind: WarningKind::MissingTeam,
            row_number: Some(row_number),
            team: None,
            field: field.to_string(),
            value: None,
            message: "球队为空，跳过该行".to_string(),
        }
    }

    pub fn team_outside_progression(team: &str, tracked: &[String]) -> Self {
        Self {
            kind: WarningKind::TeamOutsideProgression,
            row_number: None,
            team: Some(team.to_string()),
            field: "Team".to_string(),
            value: Some(team.to_string()),
            message: format!(
                "比分走势仅跟踪前两支球队 [{}]，球队 {} 的得分未计入",
                tracked.join(", "),
                team
            ),
        }
    }

    /// 写入日志（warn 级别）
    pub fn log(&self) {
        tracing::warn!(
            kind = ?self.kind,
            row = ?self.row_number,
            team = ?self.team,
            field = %self.field,
            "{}",
            self.message
        );
    }
}
