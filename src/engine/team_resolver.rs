// ==========================================
// 橄榄球比赛统计系统 - 球队解析器
// ==========================================
// 职责: 求本批次出现过的球队（首次出现顺序）
// 用途: 为每个聚合建立零基线，保证聚合对球队集合是全量的
// ==========================================

use crate::domain::Event;
use std::collections::HashSet;

/// 比分走势跟踪的球队数
pub const PROGRESSION_TEAM_COUNT: usize = 2;

pub struct TeamResolver;

impl TeamResolver {
    pub fn new() -> Self {
        Self
    }

    /// 去重后的球队列表，顺序 = 首次出现顺序
    pub fn resolve_teams(&self, events: &[Event]) -> Vec<String> {
        let mut seen = HashSet::new();
        events
            .iter()
            .filter(|e| seen.insert(e.team()))
            .map(|e| e.team().to_string())
            .collect()
    }

    /// 前两支球队
    ///
    /// 不足两支时返回已有的 0 或 1 支，由调用方决定是否继续
    pub fn first_two_teams(&self, events: &[Event]) -> Vec<String> {
        let mut teams = self.resolve_teams(events);
        teams.truncate(PROGRESSION_TEAM_COUNT);
        teams
    }
}

impl Default for TeamResolver {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn events(teams: &[&str]) -> Vec<Event> {
        teams
            .iter()
            .enumerate()
            .map(|(i, t)| Event::new(i + 2, "0:00", *t, "Ruck"))
            .collect()
    }

    #[test]
    fn test_resolve_teams_first_appearance_order() {
        let resolver = TeamResolver::new();
        let teams = resolver.resolve_teams(&events(&["B", "A", "B", "C", "A"]));
        assert_eq!(teams, vec!["B", "A", "C"]);
    }

    #[test]
    fn test_first_two_teams() {
        let resolver = TeamResolver::new();
        assert_eq!(
            resolver.first_two_teams(&events(&["B", "A", "C"])),
            vec!["B", "A"]
        );
        assert_eq!(resolver.first_two_teams(&events(&["A", "A"])), vec!["A"]);
        assert!(resolver.first_two_teams(&[]).is_empty());
    }
}
