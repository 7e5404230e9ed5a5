// ==========================================
// 橄榄球比赛统计系统 - 比赛事件领域模型
// ==========================================
// 红线: Event 构造后不可变，归一化器不修改源数据行
// 用途: 导入层写入，引擎层只读
// ==========================================

use serde::{Deserialize, Serialize};

/// 缺省球员名
pub const UNKNOWN_PLAYER: &str = "Unknown Player";

// ==========================================
// Event - 已分类的比赛事件
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    row_number: usize,            // 原始文件行号（表头为第 1 行）
    time: String,                 // 原始 mm:ss，保持原样用于展示
    team: String,                 // 球队标识（非空）
    player: String,               // 球员（缺省为 Unknown Player）
    action: String,               // 动作类别（Try / Error / Scrum / Kick ...）
    outcome_type: Option<String>, // 次级分类（WON/LOST 或踢球子类型）
    points: i32,                  // 得分（缺失或非数字记 0）
}

impl Event {
    /// 创建事件，球员取缺省值、得分为 0
    pub fn new(
        row_number: usize,
        time: impl Into<String>,
        team: impl Into<String>,
        action: impl Into<String>,
    ) -> Self {
        Self {
            row_number,
            time: time.into(),
            team: team.into(),
            player: UNKNOWN_PLAYER.to_string(),
            action: action.into(),
            outcome_type: None,
            points: 0,
        }
    }

    pub fn with_player(mut self, player: impl Into<String>) -> Self {
        self.player = player.into();
        self
    }

    pub fn with_outcome_type(mut self, outcome_type: Option<String>) -> Self {
        self.outcome_type = outcome_type;
        self
    }

    pub fn with_points(mut self, points: i32) -> Self {
        self.points = points;
        self
    }

    pub fn row_number(&self) -> usize {
        self.row_number
    }

    pub fn time(&self) -> &str {
        &self.time
    }

    pub fn team(&self) -> &str {
        &self.team
    }

    pub fn player(&self) -> &str {
        &self.player
    }

    pub fn action(&self) -> &str {
        &self.action
    }

    pub fn outcome_type(&self) -> Option<&str> {
        self.outcome_type.as_deref()
    }

    pub fn points(&self) -> i32 {
        self.points
    }

    /// 动作是否属于给定集合（精确匹配）
    pub fn action_in(&self, actions: &[String]) -> bool {
        actions.iter().any(|a| a == &self.action)
    }
}
