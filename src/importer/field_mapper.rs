// ==========================================
// 橄榄球比赛统计系统 - 行归一化器（字段映射）
// ==========================================
// 职责: 原始表格 → 有序 Event 序列
// 红线: 缺必需列整体失败，不做部分处理；输出顺序 = 输入顺序
// ==========================================

use crate::config::{ColumnMap, ReportConfigReader};
use crate::domain::{DqWarning, Event, EventField, UNKNOWN_PLAYER};
use crate::importer::data_cleaner::DataCleaner;
use crate::importer::error::{ImportError, ImportResult};
use crate::importer::importer_trait::{
    DataCleaner as DataCleanerTrait, FieldMapper as FieldMapperTrait,
};
use crate::importer::raw_table::{ColumnLayout, RawTable};
use std::collections::BTreeMap;
use tracing::{debug, instrument, warn};

// ==========================================
// NormalizedBatch - 归一化结果
// ==========================================
#[derive(Debug, Clone)]
pub struct NormalizedBatch {
    events: Vec<Event>,
    warnings: Vec<DqWarning>,
    total_rows: usize,
    skipped_rows: usize,
    resolved: BTreeMap<EventField, String>,   // 字段 → 实际命中的表头
    unresolved: BTreeMap<EventField, String>, // 字段 → 配置的主表头（未命中）
}

impl NormalizedBatch {
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn warnings(&self) -> &[DqWarning] {
        &self.warnings
    }

    /// 原始数据行数（不含表头）
    pub fn total_rows(&self) -> usize {
        self.total_rows
    }

    /// 跳过的行数（空白行 + 球队为空的行）
    pub fn skipped_rows(&self) -> usize {
        self.skipped_rows
    }

    pub fn has_field(&self, field: EventField) -> bool {
        self.resolved.contains_key(&field)
    }

    /// 字段实际对应的表头
    pub fn column_for(&self, field: EventField) -> Option<&str> {
        self.resolved.get(&field).map(String::as_str)
    }

    /// 校验报表所需字段，缺失时返回缺列错误
    pub fn require(&self, fields: &[EventField]) -> ImportResult<()> {
        let mut missing: Vec<String> = Vec::new();
        for field in fields {
            if self.has_field(*field) {
                continue;
            }
            let name = self
                .unresolved
                .get(field)
                .cloned()
                .unwrap_or_else(|| field.default_header().to_string());
            if !missing.contains(&name) {
                missing.push(name);
            }
        }

        if missing.is_empty() {
            Ok(())
        } else {
            Err(ImportError::MissingColumns { columns: missing })
        }
    }
}

// ==========================================
// FieldMapper - 行归一化器
// ==========================================
pub struct FieldMapper {
    columns: ColumnMap,
    unknown_player: String,
    cleaner: DataCleaner,
}

impl Default for FieldMapper {
    fn default() -> Self {
        Self::new(ColumnMap::default(), UNKNOWN_PLAYER)
    }
}

impl FieldMapper {
    pub fn new(columns: ColumnMap, unknown_player: impl Into<String>) -> Self {
        Self {
            columns,
            unknown_player: unknown_player.into(),
            cleaner: DataCleaner,
        }
    }

    pub fn from_config<C: ReportConfigReader + ?Sized>(config: &C) -> Self {
        Self::new(config.column_map(), config.unknown_player_label())
    }

    /// 按别名顺序解析每个字段的实际表头
    fn resolve_columns(
        &self,
        layout: &ColumnLayout,
    ) -> (BTreeMap<EventField, String>, BTreeMap<EventField, String>) {
        let mut resolved = BTreeMap::new();
        let mut unresolved = BTreeMap::new();

        for field in EventField::ALL {
            match self
                .columns
                .aliases(field)
                .iter()
                .map(|alias| alias.trim())
                .find(|alias| layout.contains(alias))
            {
                Some(header) => {
                    resolved.insert(field, header.to_string());
                }
                None => {
                    unresolved.insert(field, self.columns.primary(field).to_string());
                }
            }
        }

        (resolved, unresolved)
    }
}

impl FieldMapperTrait for FieldMapper {
    #[instrument(skip(self, table), fields(rows = table.data_row_count()))]
    fn normalize(
        &self,
        table: &RawTable,
        required: &[EventField],
    ) -> ImportResult<NormalizedBatch> {
        if !table.has_header() {
            return Err(ImportError::EmptyBatch);
        }

        let layout = table.layout();
        let (resolved, unresolved) = self.resolve_columns(&layout);

        // 必需列校验（Team 作为身份键总是必需）
        let mut missing: Vec<String> = Vec::new();
        for field in std::iter::once(&EventField::Team).chain(required.iter()) {
            if resolved.contains_key(field) {
                continue;
            }
            let name = self.columns.primary(*field).to_string();
            if !missing.contains(&name) {
                missing.push(name);
            }
        }
        if !missing.is_empty() {
            warn!(missing = ?missing, available = ?layout.columns(), "缺少必需列");
            return Err(ImportError::MissingColumns { columns: missing });
        }

        let mut events = Vec::with_capacity(table.data_row_count());
        let mut warnings = Vec::new();
        let mut skipped_rows = 0usize;

        for row in table.rows(&layout) {
            if row.is_blank() {
                skipped_rows += 1;
                continue;
            }

            let read = |field: EventField| resolved.get(&field).and_then(|c| row.get(c));

            // 球队为空：无法归属，跳过整行
            let team = match self.cleaner.normalize_null(read(EventField::Team)) {
                Some(team) => team,
                None => {
                    let warning =
                        DqWarning::missing_team(row.row_number(), self.columns.primary(EventField::Team));
                    warning.log();
                    warnings.push(warning);
                    skipped_rows += 1;
                    continue;
                }
            };

            let points = match self.cleaner.parse_points(read(EventField::PointsAdded)) {
                Some(points) => points,
                None => {
                    let warning = DqWarning::non_numeric_points(
                        row.row_number(),
                        self.columns.primary(EventField::PointsAdded),
                        read(EventField::PointsAdded).unwrap_or_default(),
                    );
                    warning.log();
                    warnings.push(warning);
                    0
                }
            };

            let player = self
                .cleaner
                .normalize_null(read(EventField::Player))
                .unwrap_or_else(|| self.unknown_player.clone());

            let event = Event::new(
                row.row_number(),
                self.cleaner.clean_text(read(EventField::Time)),
                team,
                self.cleaner.clean_text(read(EventField::Action)),
            )
            .with_player(player)
            .with_outcome_type(self.cleaner.normalize_null(read(EventField::Type)))
            .with_points(points);

            events.push(event);
        }

        if events.is_empty() {
            warn!(skipped_rows, "归一化后无有效事件");
            return Err(ImportError::EmptyBatch);
        }

        debug!(
            events = events.len(),
            skipped_rows,
            warnings = warnings.len(),
            "行归一化完成"
        );

        Ok(NormalizedBatch {
            events,
            warnings,
            total_rows: table.data_row_count(),
            skipped_rows,
            resolved,
            unresolved,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::WarningKind;

    fn standard_grid(rows: Vec<Vec<&str>>) -> RawTable {
        let mut all = vec![vec!["Time", "Team", "Player", "Action", "Points Added", "Type"]];
        all.extend(rows);
        RawTable::grid(all)
    }

    #[test]
    fn test_normalize_grid_basic() {
        let table = standard_grid(vec![
            vec!["5:00", "A", "Smith", "Try", "5", ""],
            vec!["2:10", "B", "", "Penalty Goal", "3", ""],
        ]);

        let batch = FieldMapper::default()
            .normalize(&table, &[EventField::Action])
            .unwrap();

        let events = batch.events();
        assert_eq!(events.len(), 2);
        // 输出顺序 = 输入顺序
        assert_eq!(events[0].team(), "A");
        assert_eq!(events[0].player(), "Smith");
        assert_eq!(events[0].points(), 5);
        assert_eq!(events[1].player(), "Unknown Player");
        assert_eq!(events[1].outcome_type(), None);
        assert!(batch.warnings().is_empty());
    }

    #[test]
    fn test_normalize_keyed_matches_grid() {
        let grid = standard_grid(vec![vec!["1:00", "A", "Jones", "Kick", "0", "Bomb"]]);
        let keyed = RawTable::keyed(vec![vec![
            ("Time", "1:00"),
            ("Team", "A"),
            ("Player", "Jones"),
            ("Action", "Kick"),
            ("Points Added", "0"),
            ("Type", "Bomb"),
        ]]);

        let mapper = FieldMapper::default();
        let from_grid = mapper.normalize(&grid, &[]).unwrap();
        let from_keyed = mapper.normalize(&keyed, &[]).unwrap();

        assert_eq!(from_grid.events(), from_keyed.events());
    }

    #[test]
    fn test_missing_required_columns_fail_fast() {
        let table = RawTable::grid(vec![vec!["Time", "Action"], vec!["1:00", "Try"]]);

        let result = FieldMapper::default().normalize(&table, &[EventField::Action, EventField::Type]);

        match result {
            Err(ImportError::MissingColumns { columns }) => {
                assert_eq!(columns, vec!["Team".to_string(), "Type".to_string()]);
            }
            other => panic!("expected MissingColumns, got {:?}", other),
        }
    }

    #[test]
    fn test_non_numeric_points_default_to_zero_with_warning() {
        let table = standard_grid(vec![vec!["1:00", "A", "P", "Try", "five", ""]]);

        let batch = FieldMapper::default().normalize(&table, &[]).unwrap();

        assert_eq!(batch.events()[0].points(), 0);
        assert_eq!(batch.warnings().len(), 1);
        assert_eq!(batch.warnings()[0].kind, WarningKind::NonNumericPoints);
        assert_eq!(batch.warnings()[0].value.as_deref(), Some("five"));
    }

    #[test]
    fn test_blank_rows_and_missing_team_are_skipped() {
        let table = standard_grid(vec![
            vec!["1:00", "A", "P", "Try", "5", ""],
            vec!["", "", "", "", "", ""],
            vec!["2:00", "", "Q", "Error", "", ""],
        ]);

        let batch = FieldMapper::default().normalize(&table, &[]).unwrap();

        assert_eq!(batch.events().len(), 1);
        assert_eq!(batch.total_rows(), 3);
        assert_eq!(batch.skipped_rows(), 2);
        assert_eq!(batch.warnings().len(), 1);
        assert_eq!(batch.warnings()[0].kind, WarningKind::MissingTeam);
        assert_eq!(batch.warnings()[0].row_number, Some(4));
    }

    #[test]
    fn test_header_only_is_empty_batch() {
        let table = standard_grid(vec![]);
        let result = FieldMapper::default().normalize(&table, &[]);
        assert!(matches!(result, Err(ImportError::EmptyBatch)));

        let result = FieldMapper::default().normalize(&RawTable::Grid(vec![]), &[]);
        assert!(matches!(result, Err(ImportError::EmptyBatch)));
    }

    #[test]
    fn test_column_aliases() {
        let columns = ColumnMap {
            points_added: vec!["Points Added".to_string(), "Pts".to_string()],
            ..ColumnMap::default()
        };
        let table = RawTable::grid(vec![vec!["Team", "Action", "Pts"], vec!["A", "Try", "5"]]);

        let batch = FieldMapper::new(columns, UNKNOWN_PLAYER)
            .normalize(&table, &[EventField::PointsAdded])
            .unwrap();

        assert_eq!(batch.column_for(EventField::PointsAdded), Some("Pts"));
        assert_eq!(batch.events()[0].points(), 5);
    }

    #[test]
    fn test_require_reports_missing_per_call() {
        let table = RawTable::grid(vec![vec!["Team", "Action"], vec!["A", "Try"]]);
        let batch = FieldMapper::default()
            .normalize(&table, &[EventField::Action])
            .unwrap();

        assert!(batch.require(&[EventField::Team, EventField::Action]).is_ok());
        let err = batch
            .require(&[EventField::Time, EventField::Team, EventField::PointsAdded])
            .unwrap_err();
        assert_eq!(err.missing_columns(), ["Time", "Points Added"]);
    }

    #[test]
    fn test_source_rows_not_mutated() {
        let table = standard_grid(vec![vec![" 1:00 ", " A ", "", "Try", " 5 ", ""]]);
        let before = table.clone();

        let _ = FieldMapper::default().normalize(&table, &[]).unwrap();

        assert_eq!(table, before);
    }
}
