// ==========================================
// 橄榄球比赛统计系统 - 得分时间线引擎
// ==========================================
// 职责: 得分事件 → 时间有序序列 + 两队比分走势 + 原始顺序标记点
// 红线: 走势只跟踪本批次前两支球队；第三支球队的得分只进入标记点，不改变比分
// 红线: 排序为稳定排序，同一时刻保持输入顺序
// 红线: 累计比分饱和到 i32 上限，不溢出
// ==========================================

use crate::domain::{
    DqWarning, Event, ReportKind, ReportOutput, ScoreProgressionPoint, ScoringEvent,
    ScoringTimeline, TeamTotals,
};
use crate::engine::error::{ReportError, ReportResult};
use crate::engine::match_clock::{parse_clock, sort_key};
use crate::engine::team_resolver::{TeamResolver, PROGRESSION_TEAM_COUNT};
use tracing::{debug, instrument};

pub struct ScoringEngine {
    scoring_actions: Vec<String>,
    resolver: TeamResolver,
}

impl ScoringEngine {
    /// # 参数
    /// - scoring_actions: 计为得分的动作集合
    pub fn new(scoring_actions: Vec<String>) -> Self {
        Self {
            scoring_actions,
            resolver: TeamResolver::new(),
        }
    }

    /// 构建得分时间线
    ///
    /// # 参数
    /// - events: 本批次全部事件（输入顺序）
    ///
    /// # 返回
    /// - Ok: 时间线 + 时间无法解析 / 球队超出走势范围的警告
    /// - Err(InsufficientTeams): 本批次不足两支球队
    #[instrument(skip(self, events), fields(events = events.len()))]
    pub fn build_timeline(&self, events: &[Event]) -> ReportResult<ReportOutput<ScoringTimeline>> {
        let teams = self.resolver.first_two_teams(events);
        if teams.len() < PROGRESSION_TEAM_COUNT {
            return Err(ReportError::InsufficientTeams {
                report: ReportKind::ScoringTimeline,
                required: PROGRESSION_TEAM_COUNT,
                found: teams,
            });
        }

        let mut warnings = Vec::new();

        // 标记点: 原始输入顺序
        let mut markers = Vec::new();
        for event in events.iter().filter(|e| e.action_in(&self.scoring_actions)) {
            if parse_clock(event.time()).is_none() {
                warnings.push(DqWarning::unparsable_time(
                    event.row_number(),
                    event.team(),
                    event.time(),
                ));
            }
            markers.push(ScoringEvent {
                row_number: event.row_number(),
                time: event.time().to_string(),
                clock_seconds: sort_key(event.time()),
                team: event.team().to_string(),
                player: event.player().to_string(),
                action: event.action().to_string(),
                points: event.points(),
            });
        }

        // sort_by_key 为稳定排序
        let mut ordered = markers.clone();
        ordered.sort_by_key(|e| e.clock_seconds);

        let mut running = TeamTotals::seeded(&teams, 0i32);
        let mut outside: Vec<String> = Vec::new();
        let mut progression = Vec::with_capacity(ordered.len());
        for scoring in &ordered {
            match running.get_mut(&scoring.team) {
                Some(score) => *score = score.saturating_add(scoring.points),
                None => {
                    if !outside.contains(&scoring.team) {
                        outside.push(scoring.team.clone());
                    }
                }
            }
            progression.push(ScoreProgressionPoint {
                time: scoring.time.clone(),
                clock_seconds: scoring.clock_seconds,
                scores: running.clone(),
            });
        }

        warnings.extend(
            outside
                .iter()
                .map(|team| DqWarning::team_outside_progression(team, &teams)),
        );
        for warning in &warnings {
            warning.log();
        }

        debug!(
            scoring_events = ordered.len(),
            warnings = warnings.len(),
            "得分时间线构建完成"
        );

        Ok(ReportOutput::new(
            ScoringTimeline {
                teams,
                ordered,
                progression,
                markers,
            },
            warnings,
        ))
    }
}
