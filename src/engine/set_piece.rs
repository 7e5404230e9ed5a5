// ==========================================
// 橄榄球比赛统计系统 - 定位球引擎
// ==========================================
// 职责: 司克兰 / 边线球 的按队 总数 / 赢球数
// 红线: won 仅当结果类型 == 赢球标签（去空白、忽略大小写）；lost 由 total - won 推导
// ==========================================

use crate::domain::{Event, SetPiece, SetPieceReport, SetPieceStats, TeamTotals};
use crate::engine::classifier::classify;
use crate::engine::team_resolver::TeamResolver;
use tracing::debug;

/// 单一定位球动作的统计
pub fn set_piece_stats(
    events: &[Event],
    teams: &[String],
    action: &str,
    won_label: &str,
) -> TeamTotals<SetPieceStats> {
    classify(
        events,
        teams,
        |e| e.action() == action,
        |stats: &mut SetPieceStats, e| {
            stats.total += 1;
            if is_won(e.outcome_type(), won_label) {
                stats.won += 1;
            }
        },
    )
}

fn is_won(outcome: Option<&str>, won_label: &str) -> bool {
    outcome
        .map(|o| o.trim().eq_ignore_ascii_case(won_label.trim()))
        .unwrap_or(false)
}

pub struct SetPieceEngine {
    won_label: String,
    resolver: TeamResolver,
}

impl SetPieceEngine {
    /// # 参数
    /// - won_label: 结果类型中表示赢球的标签（默认 "WON"）
    pub fn new(won_label: impl Into<String>) -> Self {
        Self {
            won_label: won_label.into(),
            resolver: TeamResolver::new(),
        }
    }

    /// # 参数
    /// - events: 本批次全部事件
    /// - set_piece: 定位球种类
    /// - action: 该定位球在 Action 列中的取值
    pub fn report(&self, events: &[Event], set_piece: SetPiece, action: &str) -> SetPieceReport {
        let teams = self.resolver.resolve_teams(events);
        let stats = set_piece_stats(events, &teams, action, &self.won_label);

        debug!(set_piece = ?set_piece, action, teams = teams.len(), "定位球统计完成");

        SetPieceReport {
            set_piece,
            action: action.to_string(),
            stats,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scrum(row: usize, team: &str, outcome: Option<&str>) -> Event {
        Event::new(row, "1:00", team, "Scrum").with_outcome_type(outcome.map(str::to_string))
    }

    #[test]
    fn test_scrum_won_and_lost() {
        let events = vec![
            scrum(2, "A", Some("WON")),
            scrum(3, "A", Some("LOST")),
            scrum(4, "B", Some("WON")),
        ];

        let report = SetPieceEngine::new("WON").report(&events, SetPiece::Scrum, "Scrum");
        let a = report.stats.get("A").unwrap();
        let b = report.stats.get("B").unwrap();

        assert_eq!((a.total, a.won, a.lost()), (2, 1, 1));
        assert_eq!((b.total, b.won, b.lost()), (1, 1, 0));
        assert_eq!(a.win_rate(), 50.0);
    }

    #[test]
    fn test_won_label_tolerates_case_and_whitespace() {
        let events = vec![
            scrum(2, "A", Some(" won ")),
            scrum(3, "A", Some("Won")),
            scrum(4, "A", None),
            scrum(5, "A", Some("WONDERFUL")),
        ];

        let report = SetPieceEngine::new("WON").report(&events, SetPiece::Scrum, "Scrum");
        let a = report.stats.get("A").unwrap();
        assert_eq!((a.total, a.won, a.lost()), (4, 2, 2));
    }

    #[test]
    fn test_lineout_report_seeds_teams_without_lineouts() {
        let events = vec![
            Event::new(2, "1:00", "A", "Lineout").with_outcome_type(Some("WON".to_string())),
            Event::new(3, "2:00", "B", "Ruck"),
        ];

        let report = SetPieceEngine::new("WON").report(&events, SetPiece::Lineout, "Lineout");
        assert_eq!(report.stats.get("B"), Some(&SetPieceStats::default()));
        assert_eq!(report.stats.get("B").unwrap().win_rate(), 0.0);
        assert_eq!(report.set_piece.report_kind(), crate::domain::ReportKind::Lineouts);
    }
}
