// ==========================================
// 橄榄球比赛统计系统 - 报表配置
// ==========================================
// 职责: 列名映射 + 各报表动作集合
// 说明: 所有字段带默认值，JSON 中缺省的键取标准值
// ==========================================

use crate::domain::{EventField, UNKNOWN_PLAYER};
use serde::{Deserialize, Serialize};

/// 默认得分动作
pub const DEFAULT_SCORING_ACTIONS: [&str; 5] =
    ["Try", "Conversion", "Penalty Try", "Penalty Goal", "Field Goal"];

// ==========================================
// ColumnMap - 字段 → 可接受的表头名（别名）
// ==========================================
// 每个字段可配置多个表头名，按顺序取第一个存在的
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColumnMap {
    pub time: Vec<String>,
    pub team: Vec<String>,
    pub player: Vec<String>,
    pub action: Vec<String>,
    pub points_added: Vec<String>,
    #[serde(rename = "type")]
    pub outcome_type: Vec<String>,
}

impl Default for ColumnMap {
    fn default() -> Self {
        let header = |field: EventField| vec![field.default_header().to_string()];
        Self {
            time: header(EventField::Time),
            team: header(EventField::Team),
            player: header(EventField::Player),
            action: header(EventField::Action),
            points_added: header(EventField::PointsAdded),
            outcome_type: header(EventField::Type),
        }
    }
}

impl ColumnMap {
    /// 字段的全部候选表头
    pub fn aliases(&self, field: EventField) -> &[String] {
        match field {
            EventField::Time => &self.time,
            EventField::Team => &self.team,
            EventField::Player => &self.player,
            EventField::Action => &self.action,
            EventField::PointsAdded => &self.points_added,
            EventField::Type => &self.outcome_type,
        }
    }

    /// 主表头名（用于缺列报错）
    pub fn primary(&self, field: EventField) -> &str {
        self.aliases(field)
            .first()
            .map(String::as_str)
            .unwrap_or_else(|| field.default_header())
    }
}

// ==========================================
// ReportConfig - 报表配置
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    pub columns: ColumnMap,
    pub scoring_actions: Vec<String>,
    pub error_actions: Vec<String>,
    pub penalty_actions: Vec<String>,
    pub ruck_action: String,
    pub scrum_action: String,
    pub lineout_action: String,
    pub kick_action: String,
    pub set_piece_won_label: String,
    pub unknown_player_label: String,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            columns: ColumnMap::default(),
            scoring_actions: DEFAULT_SCORING_ACTIONS.iter().map(|s| s.to_string()).collect(),
            error_actions: vec!["Error".to_string()],
            penalty_actions: vec!["Penalty".to_string()],
            ruck_action: "Ruck".to_string(),
            scrum_action: "Scrum".to_string(),
            lineout_action: "Lineout".to_string(),
            kick_action: "Kick".to_string(),
            set_piece_won_label: "WON".to_string(),
            unknown_player_label: UNKNOWN_PLAYER.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_keeps_defaults() {
        let json = r#"{ "columns": { "points_added": ["Points", "Points Added"] }, "kick_action": "Kicks" }"#;
        let config: ReportConfig = serde_json::from_str(json).unwrap();

        assert_eq!(config.kick_action, "Kicks");
        assert_eq!(config.scrum_action, "Scrum");
        assert_eq!(config.columns.primary(EventField::PointsAdded), "Points");
        assert_eq!(config.columns.primary(EventField::Team), "Team");
        assert_eq!(config.scoring_actions.len(), 5);
    }

    #[test]
    fn test_type_column_uses_serde_rename() {
        let config: ColumnMap = serde_json::from_str(r#"{ "type": ["Outcome"] }"#).unwrap();
        assert_eq!(config.aliases(EventField::Type), ["Outcome".to_string()]);
    }

    #[test]
    fn test_empty_alias_list_falls_back_to_default_header() {
        let map = ColumnMap {
            time: vec![],
            ..ColumnMap::default()
        };
        assert_eq!(map.primary(EventField::Time), "Time");
    }
}
