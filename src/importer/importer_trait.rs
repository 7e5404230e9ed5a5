// ==========================================
// 橄榄球比赛统计系统 - 导入管道 Trait
// ==========================================
// 职责: 定义导入各阶段接口（不包含实现）
// 流程: 文件解析 → 字段映射(归一化) → 清洗
// ==========================================

use crate::domain::EventField;
use crate::importer::error::ImportResult;
use crate::importer::field_mapper::NormalizedBatch;
use crate::importer::raw_table::RawTable;
use std::path::Path;

// ==========================================
// FileParser Trait
// ==========================================
// 用途: 文件解析接口（阶段 0）
// 实现者: CsvParser, ExcelParser
pub trait FileParser: Send + Sync {
    /// 解析文件为原始表格
    ///
    /// # 参数
    /// - file_path: 文件路径
    ///
    /// # 返回
    /// - Ok(RawTable): Grid 或 Keyed 形态
    /// - Err: 文件读取错误、格式错误
    fn parse_table(&self, file_path: &Path) -> ImportResult<RawTable>;
}

// ==========================================
// FieldMapper Trait
// ==========================================
// 用途: 行归一化接口（阶段 1）
// 实现者: FieldMapper
pub trait FieldMapper: Send + Sync {
    /// 将原始表格归一化为有序事件序列
    ///
    /// # 参数
    /// - table: 原始表格
    /// - required: 本次调用要求存在的字段（Team 总是必需）
    ///
    /// # 返回
    /// - Ok(NormalizedBatch): 事件序列 + 数据质量警告
    /// - Err(MissingColumns): 缺列时整体失败，不做部分处理
    /// - Err(EmptyBatch): 无表头或无有效数据行
    fn normalize(&self, table: &RawTable, required: &[EventField])
        -> ImportResult<NormalizedBatch>;
}

// ==========================================
// DataCleaner Trait
// ==========================================
// 用途: 字段清洗接口（阶段 2）
// 实现者: DataCleaner
pub trait DataCleaner: Send + Sync {
    /// 清洗文本字段（TRIM）
    fn clean_text(&self, value: Option<&str>) -> String;

    /// 标准化 NULL 值（缺失/空白 → None）
    fn normalize_null(&self, value: Option<&str>) -> Option<String>;

    /// 解析得分
    ///
    /// # 返回
    /// - Some(0): 缺失或空白
    /// - Some(n): 整数，或小数向零截断
    /// - None: 非数字（调用方记 0 并发出警告）
    fn parse_points(&self, value: Option<&str>) -> Option<i32>;
}
