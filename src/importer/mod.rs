// ==========================================
// 橄榄球比赛统计系统 - 导入层
// ==========================================
// 职责: 外部表格 → 有序事件序列
// 支持: CSV, Excel, 内存二维数组 / 键控记录
// ==========================================

// 模块声明
pub mod data_cleaner;
pub mod error;
pub mod field_mapper;
pub mod file_parser;
pub mod importer_trait;
pub mod raw_table;

// 重导出核心类型
pub use data_cleaner::DataCleaner as DataCleanerImpl;
pub use error::{ImportError, ImportResult};
pub use field_mapper::{FieldMapper as FieldMapperImpl, NormalizedBatch};
pub use file_parser::{CsvParser, ExcelParser, UniversalFileParser};
pub use raw_table::{ColumnLayout, RawTable, RowView};

// 重导出 Trait 接口
pub use importer_trait::{DataCleaner, FieldMapper, FileParser};
