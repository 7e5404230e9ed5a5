// ==========================================
// 橄榄球比赛统计系统 - 领域类型定义
// ==========================================
// 职责: 报表种类 / 字段种类 / 踢球类型 / 定位球种类
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// EventField - 事件字段
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum EventField {
    Time,
    Team,
    Player,
    Action,
    PointsAdded,
    Type,
}

impl EventField {
    pub const ALL: [EventField; 6] = [
        EventField::Time,
        EventField::Team,
        EventField::Player,
        EventField::Action,
        EventField::PointsAdded,
        EventField::Type,
    ];

    /// 标准表头名
    pub fn default_header(&self) -> &'static str {
        match self {
            EventField::Time => "Time",
            EventField::Team => "Team",
            EventField::Player => "Player",
            EventField::Action => "Action",
            EventField::PointsAdded => "Points Added",
            EventField::Type => "Type",
        }
    }
}

impl fmt::Display for EventField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.default_header())
    }
}

// ==========================================
// ReportKind - 报表种类
// ==========================================
// 每种报表相互独立，各自声明所需列
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReportKind {
    ScoringTimeline,
    ErrorsAndPenalties,
    Errors,
    Penalties,
    Rucks,
    Scrums,
    Lineouts,
    Kicks,
}

impl ReportKind {
    pub const ALL: [ReportKind; 8] = [
        ReportKind::ScoringTimeline,
        ReportKind::ErrorsAndPenalties,
        ReportKind::Errors,
        ReportKind::Penalties,
        ReportKind::Rucks,
        ReportKind::Scrums,
        ReportKind::Lineouts,
        ReportKind::Kicks,
    ];

    /// 转换为字符串标识
    pub fn as_str(&self) -> &'static str {
        match self {
            ReportKind::ScoringTimeline => "ScoringTimeline",
            ReportKind::ErrorsAndPenalties => "ErrorsAndPenalties",
            ReportKind::Errors => "Errors",
            ReportKind::Penalties => "Penalties",
            ReportKind::Rucks => "Rucks",
            ReportKind::Scrums => "Scrums",
            ReportKind::Lineouts => "Lineouts",
            ReportKind::Kicks => "Kicks",
        }
    }

    /// 报表所需列
    ///
    /// Player 不在必需列中：缺失时统一回落为未知球员
    pub fn required_fields(&self) -> &'static [EventField] {
        match self {
            ReportKind::ScoringTimeline => &[
                EventField::Time,
                EventField::Team,
                EventField::Action,
                EventField::PointsAdded,
            ],
            ReportKind::ErrorsAndPenalties
            | ReportKind::Errors
            | ReportKind::Penalties
            | ReportKind::Rucks => &[EventField::Team, EventField::Action],
            ReportKind::Scrums | ReportKind::Lineouts | ReportKind::Kicks => {
                &[EventField::Team, EventField::Action, EventField::Type]
            }
        }
    }
}

impl fmt::Display for ReportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ==========================================
// KickType - 踢球类型（固定枚举）
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KickType {
    Drop,
    Bomb,
    Off,
    Grubber,
    Out,
    Cross,
    Clearing,
}

impl KickType {
    pub const ALL: [KickType; 7] = [
        KickType::Drop,
        KickType::Bomb,
        KickType::Off,
        KickType::Grubber,
        KickType::Out,
        KickType::Cross,
        KickType::Clearing,
    ];

    /// 按小写标签识别，未知类型返回 None
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim().to_lowercase().as_str() {
            "drop" => Some(KickType::Drop),
            "bomb" => Some(KickType::Bomb),
            "off" => Some(KickType::Off),
            "grubber" => Some(KickType::Grubber),
            "out" => Some(KickType::Out),
            "cross" => Some(KickType::Cross),
            "clearing" => Some(KickType::Clearing),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            KickType::Drop => "drop",
            KickType::Bomb => "bomb",
            KickType::Off => "off",
            KickType::Grubber => "grubber",
            KickType::Out => "out",
            KickType::Cross => "cross",
            KickType::Clearing => "clearing",
        }
    }

    /// 展示用标签（首字母大写）
    pub fn display_label(&self) -> &'static str {
        match self {
            KickType::Drop => "Drop",
            KickType::Bomb => "Bomb",
            KickType::Off => "Off",
            KickType::Grubber => "Grubber",
            KickType::Out => "Out",
            KickType::Cross => "Cross",
            KickType::Clearing => "Clearing",
        }
    }
}

// ==========================================
// SetPiece - 定位球种类
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SetPiece {
    Scrum,
    Lineout,
}

impl SetPiece {
    pub fn report_kind(&self) -> ReportKind {
        match self {
            SetPiece::Scrum => ReportKind::Scrums,
            SetPiece::Lineout => ReportKind::Lineouts,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kick_type_from_label_case_insensitive() {
        assert_eq!(KickType::from_label("Grubber"), Some(KickType::Grubber));
        assert_eq!(KickType::from_label("  BOMB "), Some(KickType::Bomb));
        assert_eq!(KickType::from_label("Torpedo"), None);
        assert_eq!(KickType::from_label(""), None);
    }

    #[test]
    fn test_required_fields_always_include_team_and_action() {
        for kind in ReportKind::ALL {
            let fields = kind.required_fields();
            assert!(fields.contains(&EventField::Team), "{kind}");
            assert!(fields.contains(&EventField::Action), "{kind}");
        }
        assert!(!ReportKind::ScoringTimeline
            .required_fields()
            .contains(&EventField::Player));
    }

    #[test]
    fn test_event_field_default_headers() {
        assert_eq!(EventField::PointsAdded.default_header(), "Points Added");
        assert_eq!(EventField::Type.to_string(), "Type");
    }
}
