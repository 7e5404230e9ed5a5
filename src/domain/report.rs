// ==========================================
// 橄榄球比赛统计系统 - 报表聚合结构
// ==========================================
// 红线: 聚合结果对本批次球队集合是"全量"的，未命中的球队取零基线
// 用途: 引擎层输出，展示层只读
// ==========================================

use crate::domain::quality::DqWarning;
use crate::domain::types::{KickType, SetPiece};
use serde::ser::{SerializeMap, SerializeStruct};
use serde::{Serialize, Serializer};

/// 百分比，保留一位小数；分母为 0 时记 0
pub fn percent_of(count: u32, total: u32) -> f64 {
    if total == 0 {
        return 0.0;
    }
    let pct = count as f64 / total as f64 * 100.0;
    (pct * 10.0).round() / 10.0
}

// ==========================================
// TeamTotals - 按球队键控的聚合
// ==========================================
// 顺序 = 球队首次出现顺序；序列化为有序 JSON 对象 {team: value}
#[derive(Debug, Clone, PartialEq)]
pub struct TeamTotals<T> {
    entries: Vec<TeamEntry<T>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TeamEntry<T> {
    pub team: String,
    pub value: T,
}

impl<T: Clone> TeamTotals<T> {
    /// 以零基线为每支球队建立条目
    pub fn seeded(teams: &[String], baseline: T) -> Self {
        Self {
            entries: teams
                .iter()
                .map(|team| TeamEntry {
                    team: team.clone(),
                    value: baseline.clone(),
                })
                .collect(),
        }
    }
}

impl<T> TeamTotals<T> {
    pub fn get(&self, team: &str) -> Option<&T> {
        self.entries.iter().find(|e| e.team == team).map(|e| &e.value)
    }

    pub(crate) fn get_mut(&mut self, team: &str) -> Option<&mut T> {
        self.entries
            .iter_mut()
            .find(|e| e.team == team)
            .map(|e| &mut e.value)
    }

    pub fn iter(&self) -> impl Iterator<Item = &TeamEntry<T>> {
        self.entries.iter()
    }

    pub fn teams(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.team.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<T: Serialize> Serialize for TeamTotals<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for entry in &self.entries {
            map.serialize_entry(&entry.team, &entry.value)?;
        }
        map.end()
    }
}

// ==========================================
// 得分时间线
// ==========================================

/// 得分事件（标记点/悬浮提示用）
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoringEvent {
    pub row_number: usize,
    pub time: String,
    pub clock_seconds: u32, // 排序键，无法解析的时间为 0
    pub team: String,
    pub player: String,
    pub action: String,
    pub points: i32,
}

/// 比分走势点：该时刻两队的累计得分
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreProgressionPoint {
    pub time: String,
    pub clock_seconds: u32,
    pub scores: TeamTotals<i32>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoringTimeline {
    pub teams: Vec<String>,                       // 跟踪的两支球队（首次出现顺序）
    pub ordered: Vec<ScoringEvent>,               // 按时间稳定排序
    pub progression: Vec<ScoreProgressionPoint>,  // 与 ordered 一一对应
    pub markers: Vec<ScoringEvent>,               // 原始输入顺序
}

impl ScoringTimeline {
    /// 终场比分（无得分事件时为零基线）
    pub fn final_score(&self) -> TeamTotals<i32> {
        self.progression
            .last()
            .map(|p| p.scores.clone())
            .unwrap_or_else(|| TeamTotals::seeded(&self.teams, 0))
    }
}

// ==========================================
// 计数明细行（失误表）
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CountRow {
    pub team: String,
    pub total: u32,
}

// ==========================================
// SetPieceStats - 定位球统计
// ==========================================
// 红线: lost 永远由 total - won 推导，不单独累计
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SetPieceStats {
    pub total: u32,
    pub won: u32,
}

impl SetPieceStats {
    pub fn lost(&self) -> u32 {
        self.total - self.won
    }

    /// 赢球率（%）
    pub fn win_rate(&self) -> f64 {
        percent_of(self.won, self.total)
    }
}

impl Serialize for SetPieceStats {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("SetPieceStats", 4)?;
        state.serialize_field("total", &self.total)?;
        state.serialize_field("won", &self.won)?;
        state.serialize_field("lost", &self.lost())?;
        state.serialize_field("win_rate", &self.win_rate())?;
        state.end()
    }
}

// ==========================================
// KickStats - 踢球统计
// ==========================================
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct KickStats {
    pub total: u32,
    pub drop: u32,
    pub bomb: u32,
    pub off: u32,
    pub grubber: u32,
    pub out: u32,
    pub cross: u32,
    pub clearing: u32,
}

/// 踢球明细表的一行
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KickBreakdownRow {
    pub label: String,
    pub count: u32,
    pub percentage: f64,
}

impl KickStats {
    pub fn count(&self, kind: KickType) -> u32 {
        match kind {
            KickType::Drop => self.drop,
            KickType::Bomb => self.bomb,
            KickType::Off => self.off,
            KickType::Grubber => self.grubber,
            KickType::Out => self.out,
            KickType::Cross => self.cross,
            KickType::Clearing => self.clearing,
        }
    }

    pub(crate) fn record(&mut self, kind: Option<KickType>) {
        self.total += 1;
        let slot = match kind {
            Some(KickType::Drop) => &mut self.drop,
            Some(KickType::Bomb) => &mut self.bomb,
            Some(KickType::Off) => &mut self.off,
            Some(KickType::Grubber) => &mut self.grubber,
            Some(KickType::Out) => &mut self.out,
            Some(KickType::Cross) => &mut self.cross,
            Some(KickType::Clearing) => &mut self.clearing,
            None => return,
        };
        *slot += 1;
    }

    /// 已识别类型合计
    pub fn named_total(&self) -> u32 {
        KickType::ALL.iter().map(|k| self.count(*k)).sum()
    }

    /// 未识别类型数量（只计入 total）
    pub fn unrecognized(&self) -> u32 {
        self.total - self.named_total()
    }

    pub fn percentage(&self, kind: KickType) -> f64 {
        percent_of(self.count(kind), self.total)
    }

    pub fn unrecognized_percentage(&self) -> f64 {
        percent_of(self.unrecognized(), self.total)
    }

    /// 明细表: Total + 各类型 + (存在时) Unrecognized
    pub fn breakdown(&self) -> Vec<KickBreakdownRow> {
        let mut rows = Vec::with_capacity(KickType::ALL.len() + 2);
        rows.push(KickBreakdownRow {
            label: "Total".to_string(),
            count: self.total,
            percentage: percent_of(self.total, self.total),
        });
        for kind in KickType::ALL {
            rows.push(KickBreakdownRow {
                label: kind.display_label().to_string(),
                count: self.count(kind),
                percentage: self.percentage(kind),
            });
        }
        if self.unrecognized() > 0 {
            rows.push(KickBreakdownRow {
                label: "Unrecognized".to_string(),
                count: self.unrecognized(),
                percentage: self.unrecognized_percentage(),
            });
        }
        rows
    }
}

// ==========================================
// ReportOutput - 报表输出 + 本报表产生的数据质量警告
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportOutput<T> {
    pub data: T,
    pub warnings: Vec<DqWarning>,
}

impl<T> ReportOutput<T> {
    pub fn new(data: T, warnings: Vec<DqWarning>) -> Self {
        Self { data, warnings }
    }
}

// ==========================================
// ActionCountReport - 动作计数（失误 / 犯规 / 拉克）
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActionCountReport {
    pub actions: Vec<String>,    // 计入的动作集合
    pub totals: TeamTotals<u32>,
}

impl ActionCountReport {
    /// 明细表（球队, 合计），顺序同 totals
    pub fn detail_rows(&self) -> Vec<CountRow> {
        self.totals
            .iter()
            .map(|e| CountRow {
                team: e.team.clone(),
                total: e.value,
            })
            .collect()
    }

    pub fn grand_total(&self) -> u32 {
        self.totals.iter().map(|e| e.value).sum()
    }
}

// ==========================================
// SetPieceReport - 定位球报表
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SetPieceReport {
    pub set_piece: SetPiece,
    pub action: String,
    pub stats: TeamTotals<SetPieceStats>,
}

// ==========================================
// KickReport - 踢球报表
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KickReport {
    pub stats: TeamTotals<KickStats>,
}

impl KickReport {
    /// 按踢球总数降序（稳定排序，同数保持首次出现顺序）
    pub fn ranked(&self) -> Vec<&TeamEntry<KickStats>> {
        let mut entries: Vec<&TeamEntry<KickStats>> = self.stats.iter().collect();
        entries.sort_by(|a, b| b.value.total.cmp(&a.value.total));
        entries
    }
}
