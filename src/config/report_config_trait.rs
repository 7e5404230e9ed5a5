// ==========================================
// 橄榄球比赛统计系统 - 报表配置读取 Trait
// ==========================================
// 职责: 定义分类器所需的配置读取接口（不包含实现）
// 红线: 不包含配置写入、不包含业务逻辑
// ==========================================

use crate::config::report_config::ColumnMap;

// ==========================================
// ReportConfigReader Trait
// ==========================================
// 实现者: ConfigManager（JSON 文件 / 默认值）
pub trait ReportConfigReader: Send + Sync {
    // ===== 列映射 =====

    /// 字段 → 表头名映射
    ///
    /// # 默认值
    /// - Time / Team / Player / Action / Points Added / Type
    fn column_map(&self) -> ColumnMap;

    /// 缺省球员名
    ///
    /// # 默认值
    /// - "Unknown Player"
    fn unknown_player_label(&self) -> String;

    // ===== 动作集合 =====

    /// 得分动作
    ///
    /// # 默认值
    /// - ["Try", "Conversion", "Penalty Try", "Penalty Goal", "Field Goal"]
    fn scoring_actions(&self) -> Vec<String>;

    /// 失误动作
    ///
    /// # 默认值
    /// - ["Error"]
    fn error_actions(&self) -> Vec<String>;

    /// 犯规动作
    ///
    /// # 默认值
    /// - ["Penalty"]
    fn penalty_actions(&self) -> Vec<String>;

    /// 拉克动作名（默认 "Ruck"）
    fn ruck_action(&self) -> String;

    /// 争球动作名（默认 "Scrum"）
    fn scrum_action(&self) -> String;

    /// 边线球动作名（默认 "Lineout"）
    fn lineout_action(&self) -> String;

    /// 踢球动作名（默认 "Kick"）
    fn kick_action(&self) -> String;

    // ===== 定位球 =====

    /// 定位球"赢球"结果标签
    ///
    /// # 默认值
    /// - "WON"（去空白后不区分大小写比较）
    fn set_piece_won_label(&self) -> String;
}
