// ==========================================
// 橄榄球比赛统计系统 - 报表编排器
// ==========================================
// 用途: 原始表格 → 归一化一次 → 各报表独立计算 → MatchReport
// 红线: 报表之间互不阻断；每次运行都是全新聚合，不跨运行累计
// ==========================================

use crate::config::ReportConfigReader;
use crate::domain::{
    ActionCountReport, DqWarning, EventField, KickReport, ReportKind, ReportOutput,
    ScoringTimeline, SetPiece, SetPieceReport,
};
use crate::engine::discipline::DisciplineEngine;
use crate::engine::error::{ReportError, ReportResult};
use crate::engine::kicks::KickEngine;
use crate::engine::run_gate::RunGate;
use crate::engine::scoring::ScoringEngine;
use crate::engine::set_piece::SetPieceEngine;
use crate::engine::team_resolver::TeamResolver;
use crate::importer::{
    FieldMapper, FieldMapperImpl, FileParser, ImportError, ImportResult, NormalizedBatch,
    RawTable, UniversalFileParser,
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, info, warn};
use uuid::Uuid;

/// 归一化阶段所有报表共同需要的字段
const BASE_FIELDS: [EventField; 2] = [EventField::Team, EventField::Action];

// ==========================================
// MatchReport - 一次运行的全部报表
// ==========================================
#[derive(Debug, Clone, Serialize)]
pub struct MatchReport {
    pub generation: u64,
    pub batch_id: String,
    pub generated_at: DateTime<Utc>,

    // 归一化输出
    pub teams: Vec<String>,
    pub total_rows: usize,
    pub skipped_rows: usize,
    pub normalize_warnings: Vec<DqWarning>,

    // 各报表（互相独立）
    pub scoring: ReportResult<ReportOutput<ScoringTimeline>>,
    pub errors_and_penalties: ReportResult<ActionCountReport>,
    pub errors: ReportResult<ActionCountReport>,
    pub penalties: ReportResult<ActionCountReport>,
    pub rucks: ReportResult<ActionCountReport>,
    pub scrums: ReportResult<SetPieceReport>,
    pub lineouts: ReportResult<SetPieceReport>,
    pub kicks: ReportResult<ReportOutput<KickReport>>,
}

impl MatchReport {
    /// 失败的报表
    pub fn failures(&self) -> Vec<&ReportError> {
        let mut failures = Vec::new();
        if let Err(e) = &self.scoring {
            failures.push(e);
        }
        for result in [
            &self.errors_and_penalties,
            &self.errors,
            &self.penalties,
            &self.rucks,
        ] {
            if let Err(e) = result {
                failures.push(e);
            }
        }
        for result in [&self.scrums, &self.lineouts] {
            if let Err(e) = result {
                failures.push(e);
            }
        }
        if let Err(e) = &self.kicks {
            failures.push(e);
        }
        failures
    }

    /// 全部数据质量警告（归一化 + 得分 + 踢球）
    pub fn all_warnings(&self) -> Vec<&DqWarning> {
        let mut warnings: Vec<&DqWarning> = self.normalize_warnings.iter().collect();
        if let Ok(output) = &self.scoring {
            warnings.extend(output.warnings.iter());
        }
        if let Ok(output) = &self.kicks {
            warnings.extend(output.warnings.iter());
        }
        warnings
    }
}

// ==========================================
// ReportOrchestrator - 报表编排器
// ==========================================
pub struct ReportOrchestrator<C>
where
    C: ReportConfigReader,
{
    config: Arc<C>,
    mapper: FieldMapperImpl,
    gate: RunGate,
}

impl<C> ReportOrchestrator<C>
where
    C: ReportConfigReader,
{
    /// 创建新的编排器实例
    ///
    /// # 参数
    /// - config: 配置读取器
    pub fn new(config: Arc<C>) -> Self {
        Self {
            mapper: FieldMapperImpl::from_config(config.as_ref()),
            gate: RunGate::new(),
            config,
        }
    }

    /// 该代次是否仍是最新运行（过期结果应丢弃）
    pub fn is_current(&self, generation: u64) -> bool {
        self.gate.is_current(generation)
    }

    /// 归一化（所有报表共享的单遍行处理）
    pub fn normalize(&self, table: &RawTable) -> ImportResult<NormalizedBatch> {
        self.mapper.normalize(table, &BASE_FIELDS)
    }

    /// 执行完整报表流程
    ///
    /// # 参数
    /// - table: 原始表格（二维数组或键控记录）
    ///
    /// # 返回
    /// MatchReport；归一化失败时每个报表都携带同一原因
    pub fn run(&self, table: &RawTable) -> MatchReport {
        let generation = self.gate.begin();
        let batch_id = Uuid::new_v4().to_string();

        info!(
            generation,
            batch_id = %batch_id,
            data_rows = table.data_row_count(),
            "开始生成比赛报表"
        );

        let report = match self.normalize(table) {
            Ok(batch) => self.build_reports(generation, batch_id, &batch),
            Err(err) => {
                warn!(generation, error = %err, "归一化失败，所有报表标记为失败");
                Self::failed_reports(generation, batch_id, table.data_row_count(), &err)
            }
        };

        info!(
            generation,
            teams = report.teams.len(),
            failures = report.failures().len(),
            warnings = report.all_warnings().len(),
            "比赛报表生成完成"
        );

        report
    }

    /// 从文件执行（CSV / Excel）
    pub fn run_file<P: AsRef<Path>>(&self, file_path: P) -> ImportResult<MatchReport> {
        let table = UniversalFileParser::new().parse_table(file_path.as_ref())?;
        Ok(self.run(&table))
    }

    fn build_reports(
        &self,
        generation: u64,
        batch_id: String,
        batch: &NormalizedBatch,
    ) -> MatchReport {
        let teams = TeamResolver::new().resolve_teams(batch.events());
        debug!(teams = ?teams, events = batch.events().len(), "归一化完成");

        MatchReport {
            generation,
            batch_id,
            generated_at: Utc::now(),
            teams,
            total_rows: batch.total_rows(),
            skipped_rows: batch.skipped_rows(),
            normalize_warnings: batch.warnings().to_vec(),
            scoring: self.scoring_timeline(batch),
            errors_and_penalties: self.errors_and_penalties(batch),
            errors: self.errors(batch),
            penalties: self.penalties(batch),
            rucks: self.rucks(batch),
            scrums: self.set_piece(batch, SetPiece::Scrum),
            lineouts: self.set_piece(batch, SetPiece::Lineout),
            kicks: self.kicks(batch),
        }
    }

    fn failed_reports(
        generation: u64,
        batch_id: String,
        total_rows: usize,
        err: &ImportError,
    ) -> MatchReport {
        let fail = |kind: ReportKind| ReportError::from_import(kind, err);

        MatchReport {
            generation,
            batch_id,
            generated_at: Utc::now(),
            teams: Vec::new(),
            total_rows,
            skipped_rows: 0,
            normalize_warnings: Vec::new(),
            scoring: Err(fail(ReportKind::ScoringTimeline)),
            errors_and_penalties: Err(fail(ReportKind::ErrorsAndPenalties)),
            errors: Err(fail(ReportKind::Errors)),
            penalties: Err(fail(ReportKind::Penalties)),
            rucks: Err(fail(ReportKind::Rucks)),
            scrums: Err(fail(ReportKind::Scrums)),
            lineouts: Err(fail(ReportKind::Lineouts)),
            kicks: Err(fail(ReportKind::Kicks)),
        }
    }

    /// 报表级列检查：缺列只影响本报表
    fn require(batch: &NormalizedBatch, kind: ReportKind) -> ReportResult<()> {
        batch.require(kind.required_fields()).map_err(|err| {
            let report_err = ReportError::from_import(kind, &err);
            warn!(report = %kind, error = %report_err, "报表配置错误");
            report_err
        })
    }

    // ==========================================
    // 单报表入口
    // ==========================================

    pub fn scoring_timeline(
        &self,
        batch: &NormalizedBatch,
    ) -> ReportResult<ReportOutput<ScoringTimeline>> {
        Self::require(batch, ReportKind::ScoringTimeline)?;
        ScoringEngine::new(self.config.scoring_actions()).build_timeline(batch.events())
    }

    pub fn errors_and_penalties(&self, batch: &NormalizedBatch) -> ReportResult<ActionCountReport> {
        Self::require(batch, ReportKind::ErrorsAndPenalties)?;
        let mut actions = self.config.error_actions();
        actions.extend(self.config.penalty_actions());
        Ok(DisciplineEngine::new().report(batch.events(), &actions))
    }

    pub fn errors(&self, batch: &NormalizedBatch) -> ReportResult<ActionCountReport> {
        Self::require(batch, ReportKind::Errors)?;
        Ok(DisciplineEngine::new().report(batch.events(), &self.config.error_actions()))
    }

    pub fn penalties(&self, batch: &NormalizedBatch) -> ReportResult<ActionCountReport> {
        Self::require(batch, ReportKind::Penalties)?;
        Ok(DisciplineEngine::new().report(batch.events(), &self.config.penalty_actions()))
    }

    pub fn rucks(&self, batch: &NormalizedBatch) -> ReportResult<ActionCountReport> {
        Self::require(batch, ReportKind::Rucks)?;
        Ok(DisciplineEngine::new().report_single(batch.events(), &self.config.ruck_action()))
    }

    pub fn set_piece(
        &self,
        batch: &NormalizedBatch,
        set_piece: SetPiece,
    ) -> ReportResult<SetPieceReport> {
        Self::require(batch, set_piece.report_kind())?;
        let action = match set_piece {
            SetPiece::Scrum => self.config.scrum_action(),
            SetPiece::Lineout => self.config.lineout_action(),
        };
        Ok(SetPieceEngine::new(self.config.set_piece_won_label()).report(
            batch.events(),
            set_piece,
            &action,
        ))
    }

    pub fn kicks(&self, batch: &NormalizedBatch) -> ReportResult<ReportOutput<KickReport>> {
        Self::require(batch, ReportKind::Kicks)?;
        Ok(KickEngine::new(self.config.kick_action()).report(batch.events()))
    }
}
