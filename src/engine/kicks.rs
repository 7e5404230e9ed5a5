// ==========================================
// 橄榄球比赛统计系统 - 踢球引擎
// ==========================================
// 职责: 按队统计踢球总数与七种子类型
// 红线: 未识别 / 缺失的子类型只计入 total，并产生警告
// ==========================================

use crate::domain::{DqWarning, Event, KickReport, KickStats, KickType, ReportOutput};
use crate::engine::classifier::classify;
use crate::engine::team_resolver::TeamResolver;
use tracing::{debug, instrument};

pub struct KickEngine {
    kick_action: String,
    resolver: TeamResolver,
}

impl KickEngine {
    pub fn new(kick_action: impl Into<String>) -> Self {
        Self {
            kick_action: kick_action.into(),
            resolver: TeamResolver::new(),
        }
    }

    /// 踢球统计
    ///
    /// # 返回
    /// 每支球队的 KickStats + 子类型无法识别的警告
    #[instrument(skip(self, events), fields(events = events.len()))]
    pub fn report(&self, events: &[Event]) -> ReportOutput<KickReport> {
        let teams = self.resolver.resolve_teams(events);
        let mut warnings = Vec::new();

        let stats = classify(
            events,
            &teams,
            |e| e.action() == self.kick_action,
            |stats: &mut KickStats, e| {
                let kind = e.outcome_type().and_then(KickType::from_label);
                if kind.is_none() {
                    warnings.push(DqWarning::unknown_kick_type(
                        e.row_number(),
                        e.team(),
                        e.outcome_type(),
                    ));
                }
                stats.record(kind);
            },
        );

        for warning in &warnings {
            warning.log();
        }
        debug!(teams = teams.len(), warnings = warnings.len(), "踢球统计完成");

        ReportOutput::new(KickReport { stats }, warnings)
    }
}
