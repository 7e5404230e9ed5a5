// ==========================================
// 橄榄球比赛统计系统 - 动作计数引擎
// ==========================================
// 职责: 失误+犯规 / 仅失误 / 仅犯规 / 拉克 的按队计数
// 红线: 每支球队都有条目，未命中记 0
// ==========================================

use crate::domain::{ActionCountReport, Event, TeamTotals};
use crate::engine::classifier::classify;
use crate::engine::team_resolver::TeamResolver;
use tracing::debug;

/// 统计命中任一动作的事件数
pub fn count_actions(events: &[Event], teams: &[String], actions: &[String]) -> TeamTotals<u32> {
    classify(events, teams, |e| e.action_in(actions), |n: &mut u32, _| *n += 1)
}

/// 单一动作计数（如 "Ruck"）
pub fn count_action(events: &[Event], teams: &[String], action: &str) -> TeamTotals<u32> {
    classify(events, teams, |e| e.action() == action, |n: &mut u32, _| *n += 1)
}

pub struct DisciplineEngine {
    resolver: TeamResolver,
}

impl DisciplineEngine {
    pub fn new() -> Self {
        Self {
            resolver: TeamResolver::new(),
        }
    }

    /// 按动作集合计数
    ///
    /// # 参数
    /// - events: 本批次全部事件
    /// - actions: 计入的动作（如 ["Error", "Penalty"]）
    pub fn report(&self, events: &[Event], actions: &[String]) -> ActionCountReport {
        let teams = self.resolver.resolve_teams(events);
        let totals = count_actions(events, &teams, actions);

        debug!(actions = ?actions, teams = teams.len(), "动作计数完成");

        ActionCountReport {
            actions: actions.to_vec(),
            totals,
        }
    }

    /// 单一动作报表
    pub fn report_single(&self, events: &[Event], action: &str) -> ActionCountReport {
        self.report(events, &[action.to_string()])
    }
}

impl Default for DisciplineEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Event> {
        vec![
            Event::new(2, "1:00", "A", "Error"),
            Event::new(3, "2:00", "B", "Penalty"),
            Event::new(4, "3:00", "A", "Penalty"),
            Event::new(5, "4:00", "A", "Ruck"),
            Event::new(6, "5:00", "C", "Try"),
        ]
    }

    fn actions(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_errors_and_penalties_combined() {
        let report = DisciplineEngine::new().report(&sample(), &actions(&["Error", "Penalty"]));

        assert_eq!(report.totals.get("A"), Some(&2));
        assert_eq!(report.totals.get("B"), Some(&1));
        assert_eq!(report.totals.get("C"), Some(&0));
        assert_eq!(report.grand_total(), 3);
    }

    #[test]
    fn test_detail_rows_follow_first_appearance() {
        let report = DisciplineEngine::new().report(&sample(), &actions(&["Error"]));
        let rows = report.detail_rows();

        let teams: Vec<&str> = rows.iter().map(|r| r.team.as_str()).collect();
        assert_eq!(teams, vec!["A", "B", "C"]);
        assert_eq!(rows[0].total, 1);
        assert_eq!(rows[1].total, 0);
    }

    #[test]
    fn test_single_action_is_exact_match() {
        let events = vec![
            Event::new(2, "1:00", "A", "Ruck"),
            Event::new(3, "1:10", "A", "ruck"),
            Event::new(4, "1:20", "B", "Ruck "),
        ];
        let report = DisciplineEngine::new().report_single(&events, "Ruck");

        assert_eq!(report.totals.get("A"), Some(&1));
        assert_eq!(report.totals.get("B"), Some(&0));
    }

    #[test]
    fn test_count_action_matches_count_actions() {
        let events = sample();
        let teams = TeamResolver::new().resolve_teams(&events);
        assert_eq!(
            count_action(&events, &teams, "Ruck"),
            count_actions(&events, &teams, &actions(&["Ruck"]))
        );
    }
}
