// ==========================================
// 橄榄球比赛统计系统 - 通用分类归约
// ==========================================
// 职责: 过滤事件 → 按球队折叠进零基线聚合
// 红线: 纯函数，单遍，无跨调用状态；每次调用返回新的聚合
// ==========================================

use crate::domain::{Event, TeamTotals};
use tracing::trace;

/// 通用分类器
///
/// # 参数
/// - events: 归一化后的事件（输入顺序）
/// - teams: 本批次全部球队（零基线种子）
/// - predicate: 报表的动作谓词
/// - reducer: 将命中事件折叠进该球队的聚合值
///
/// # 返回
/// 对 teams 全量的聚合；未命中任何事件的球队保持 T::default()
pub fn classify<T, P, F>(
    events: &[Event],
    teams: &[String],
    predicate: P,
    mut reducer: F,
) -> TeamTotals<T>
where
    T: Default + Clone,
    P: Fn(&Event) -> bool,
    F: FnMut(&mut T, &Event),
{
    let mut totals = TeamTotals::seeded(teams, T::default());

    for event in events.iter().filter(|e| predicate(*e)) {
        match totals.get_mut(event.team()) {
            Some(value) => reducer(value, event),
            None => trace!(team = event.team(), row = event.row_number(), "球队不在种子集合中，忽略"),
        }
    }

    totals
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_seeds_every_team() {
        let events = vec![
            Event::new(2, "1:00", "A", "Error"),
            Event::new(3, "2:00", "B", "Ruck"),
            Event::new(4, "3:00", "A", "Error"),
        ];
        let teams = vec!["A".to_string(), "B".to_string(), "C".to_string()];

        let totals = classify(&events, &teams, |e| e.action() == "Error", |n: &mut u32, _| *n += 1);

        assert_eq!(totals.get("A"), Some(&2));
        assert_eq!(totals.get("B"), Some(&0));
        assert_eq!(totals.get("C"), Some(&0));
        assert_eq!(totals.len(), 3);
    }

    #[test]
    fn test_classify_is_repeatable() {
        let events = vec![Event::new(2, "1:00", "A", "Try").with_points(5)];
        let teams = vec!["A".to_string()];

        let sum = |t: &mut i32, e: &Event| *t += e.points();
        let first = classify(&events, &teams, |_| true, sum);
        let second = classify(&events, &teams, |_| true, sum);

        assert_eq!(first, second);
        assert_eq!(first.get("A"), Some(&5));
    }
}
