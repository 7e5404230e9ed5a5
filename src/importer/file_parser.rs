// ==========================================
// 橄榄球比赛统计系统 - 文件解析器实现
// ==========================================
// 支持: CSV (.csv) / Excel (.xlsx/.xls)
// 输出: RawTable（CSV 可选 Grid 或 Keyed，Excel 固定 Grid）
// ==========================================

use crate::importer::error::{ImportError, ImportResult};
use crate::importer::importer_trait::FileParser;
use crate::importer::raw_table::RawTable;
use calamine::{open_workbook_auto, Data, Reader};
use chrono::{NaiveTime, Timelike};
use csv::ReaderBuilder;
use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::debug;

fn ensure_exists(path: &Path) -> ImportResult<()> {
    if !path.exists() {
        return Err(ImportError::FileNotFound(path.display().to_string()));
    }
    Ok(())
}

fn extension_of(path: &Path) -> String {
    path.extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase()
}

// ==========================================
// CSV Parser 实现
// ==========================================
#[derive(Debug, Clone, Copy, Default)]
pub struct CsvParser {
    keyed: bool, // true: 按表头键控；false: 首行为表头的二维数组
}

impl CsvParser {
    /// 二维数组形态（表头保留在第 0 行）
    pub fn grid() -> Self {
        Self { keyed: false }
    }

    /// 按表头键控形态（空白行保留，保证行号一致）
    pub fn keyed() -> Self {
        Self { keyed: true }
    }

    /// 从任意读取源解析
    pub fn parse_reader<R: Read>(&self, source: R) -> ImportResult<RawTable> {
        if self.keyed {
            self.parse_keyed(source)
        } else {
            self.parse_grid(source)
        }
    }

    fn parse_grid<R: Read>(&self, source: R) -> ImportResult<RawTable> {
        let mut reader = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true) // 允许行长度不一致
            .from_reader(source);

        let mut rows = Vec::new();
        for result in reader.records() {
            let record = result?;
            rows.push(record.iter().map(|v| v.trim().to_string()).collect());
        }

        Ok(RawTable::Grid(rows))
    }

    fn parse_keyed<R: Read>(&self, source: R) -> ImportResult<RawTable> {
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(source);

        let headers: Vec<String> = reader
            .headers()?
            .iter()
            .map(|h| h.trim().to_string())
            .collect();

        let mut records = Vec::new();
        for result in reader.records() {
            let record = result?;
            let mut row_map = HashMap::new();

            for (col_idx, value) in record.iter().enumerate() {
                if let Some(header) = headers.get(col_idx) {
                    row_map.insert(header.clone(), value.trim().to_string());
                }
            }

            // 空白行保留，保证行号与文件一致；由归一化阶段跳过
            records.push(row_map);
        }

        Ok(RawTable::Keyed(records))
    }
}

impl FileParser for CsvParser {
    fn parse_table(&self, file_path: &Path) -> ImportResult<RawTable> {
        ensure_exists(file_path)?;

        let ext = extension_of(file_path);
        if ext != "csv" {
            return Err(ImportError::UnsupportedFormat(ext));
        }

        let file = File::open(file_path)?;
        let table = self.parse_reader(file)?;
        debug!(path = %file_path.display(), rows = table.data_row_count(), "CSV 解析完成");
        Ok(table)
    }
}

// ==========================================
// Excel Parser 实现
// ==========================================
// 读取第一个工作表，输出 Grid
pub struct ExcelParser;

impl FileParser for ExcelParser {
    fn parse_table(&self, file_path: &Path) -> ImportResult<RawTable> {
        ensure_exists(file_path)?;

        let ext = extension_of(file_path);
        if ext != "xlsx" && ext != "xls" {
            return Err(ImportError::UnsupportedFormat(ext));
        }

        let mut workbook = open_workbook_auto(file_path)?;

        let sheet_name = workbook
            .sheet_names()
            .first()
            .cloned()
            .ok_or_else(|| ImportError::ExcelParseError("Excel 文件无工作表".to_string()))?;

        let range = workbook.worksheet_range(&sheet_name)?;

        let rows: Vec<Vec<String>> = range
            .rows()
            .map(|row| row.iter().map(cell_text).collect())
            .collect();

        debug!(path = %file_path.display(), sheet = %sheet_name, rows = rows.len(), "Excel 解析完成");
        Ok(RawTable::Grid(rows))
    }
}

const SECONDS_PER_DAY: f64 = 86_400.0;

/// 单元格 → 文本
///
/// 时间单元格按 Excel 的显示文本还原（"5:00" 而非序列值 0.2083…）
fn cell_text(cell: &Data) -> String {
    let clock = match cell {
        Data::DateTime(dt) => {
            // 时长格式保留整段；日期时间只取当天时刻
            let days = if dt.is_duration() {
                dt.as_f64()
            } else {
                dt.as_f64().fract()
            };
            if days.is_finite() && days >= 0.0 {
                Some((days * SECONDS_PER_DAY).round() as u64)
            } else {
                None
            }
        }
        Data::DateTimeIso(raw) => iso_time_seconds(raw),
        Data::DurationIso(raw) => iso_duration_seconds(raw),
        _ => None,
    };

    match clock {
        Some(seconds) => clock_text(seconds),
        None => cell.to_string().trim().to_string(),
    }
}

/// 在 Excel 中键入的 "5:00" 被识别为 h:mm，秒为 0 时按显示文本还原为 "5:00"；
/// 带秒的时间按 分:秒 输出
fn clock_text(seconds: u64) -> String {
    if seconds % 60 == 0 {
        let minutes = seconds / 60;
        format!("{}:{:02}", minutes / 60, minutes % 60)
    } else {
        format!("{}:{:02}", seconds / 60, seconds % 60)
    }
}

/// "2024-01-01T05:00:00" / "05:00:00"
fn iso_time_seconds(raw: &str) -> Option<u64> {
    let time = raw.trim().rsplit('T').next()?;
    NaiveTime::parse_from_str(time, "%H:%M:%S%.f")
        .or_else(|_| NaiveTime::parse_from_str(time, "%H:%M:%S"))
        .ok()
        .map(|t| u64::from(t.num_seconds_from_midnight()))
}

/// "PT5H0M0S"
fn iso_duration_seconds(raw: &str) -> Option<u64> {
    let body = raw.trim().strip_prefix("PT")?;
    let mut total: f64 = 0.0;
    let mut number = String::new();
    for ch in body.chars() {
        match ch {
            '0'..='9' | '.' => number.push(ch),
            'H' | 'M' | 'S' => {
                let value: f64 = number.parse().ok()?;
                number.clear();
                total += value
                    * match ch {
                        'H' => 3600.0,
                        'M' => 60.0,
                        _ => 1.0,
                    };
            }
            _ => return None,
        }
    }
    if !number.is_empty() {
        return None;
    }
    Some(total.round() as u64)
}

// ==========================================
// 通用文件解析器（根据扩展名自动选择）
// ==========================================
#[derive(Debug, Clone, Copy, Default)]
pub struct UniversalFileParser {
    keyed_csv: bool,
}

impl UniversalFileParser {
    pub fn new() -> Self {
        Self::default()
    }

    /// CSV 按表头键控解析
    pub fn with_keyed_csv(mut self, keyed: bool) -> Self {
        self.keyed_csv = keyed;
        self
    }

    pub fn parse<P: AsRef<Path>>(&self, file_path: P) -> ImportResult<RawTable> {
        let path = file_path.as_ref();
        match extension_of(path).as_str() {
            "csv" => {
                let parser = if self.keyed_csv {
                    CsvParser::keyed()
                } else {
                    CsvParser::grid()
                };
                parser.parse_table(path)
            }
            "xlsx" | "xls" => ExcelParser.parse_table(path),
            other => Err(ImportError::UnsupportedFormat(other.to_string())),
        }
    }
}

impl FileParser for UniversalFileParser {
    fn parse_table(&self, file_path: &Path) -> ImportResult<RawTable> {
        self.parse(file_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use calamine::{ExcelDateTime, ExcelDateTimeType};
    use std::io::Write;
    use tempfile::Builder;

    fn csv_file(lines: &[&str]) -> tempfile::NamedTempFile {
        let mut temp_file = Builder::new().suffix(".csv").tempfile().unwrap();
        for line in lines {
            writeln!(temp_file, "{}", line).unwrap();
        }
        temp_file
    }

    #[test]
    fn test_csv_grid_keeps_header_row() {
        let file = csv_file(&["Time,Team,Action", "5:00,A,Try", "2:10,B"]);

        let table = CsvParser::grid().parse_table(file.path()).unwrap();

        match table {
            RawTable::Grid(rows) => {
                assert_eq!(rows.len(), 3);
                assert_eq!(rows[0], vec!["Time", "Team", "Action"]);
                assert_eq!(rows[2], vec!["2:10", "B"]);
            }
            other => panic!("expected grid, got {:?}", other),
        }
    }

    #[test]
    fn test_csv_keyed_keeps_row_numbers() {
        let file = csv_file(&["Team,Action", "A,Kick", ",", "B,Scrum"]);

        let table = CsvParser::keyed().parse_table(file.path()).unwrap();
        let layout = table.layout();
        let rows = table.rows(&layout);

        assert_eq!(table.data_row_count(), 3);
        assert!(rows[1].is_blank());
        assert_eq!(rows[2].row_number(), 4);
        assert_eq!(rows[2].get("Team"), Some("B"));
    }

    #[test]
    fn test_csv_parser_file_not_found() {
        let result = CsvParser::grid().parse_table(Path::new("non_existent.csv"));
        assert!(matches!(result, Err(ImportError::FileNotFound(_))));
    }

    #[test]
    fn test_universal_parser_rejects_unknown_extension() {
        let file = Builder::new().suffix(".txt").tempfile().unwrap();
        let result = UniversalFileParser::new().parse(file.path());
        assert!(matches!(result, Err(ImportError::UnsupportedFormat(_))));
    }

    #[test]
    fn test_parse_reader_in_memory() {
        let data = "Team,Action,Type\nA,Scrum,WON\n";
        let table = CsvParser::keyed().parse_reader(data.as_bytes()).unwrap();
        let layout = table.layout();
        let rows = table.rows(&layout);
        assert_eq!(rows[0].get("Type"), Some("WON"));
    }

    fn excel_time(days: f64) -> Data {
        Data::DateTime(ExcelDateTime::new(days, ExcelDateTimeType::DateTime, false))
    }

    #[test]
    fn test_excel_time_cells_render_as_clock_text() {
        // Excel 把键入的 "5:00" 存为 5/24 天
        assert_eq!(cell_text(&excel_time(5.0 / 24.0)), "5:00");
        assert_eq!(cell_text(&excel_time(130.0 / 1440.0)), "2:10");
        assert_eq!(cell_text(&excel_time(45_000.25)), "6:00");
        assert_eq!(cell_text(&excel_time(75.0 / 86_400.0)), "1:15");

        let duration = Data::DateTime(ExcelDateTime::new(
            5130.0 / 1440.0,
            ExcelDateTimeType::TimeDelta,
            false,
        ));
        assert_eq!(cell_text(&duration), "85:30");
    }

    #[test]
    fn test_iso_time_cells_render_as_clock_text() {
        assert_eq!(cell_text(&Data::DateTimeIso("2024-05-01T05:00:00".to_string())), "5:00");
        assert_eq!(cell_text(&Data::DateTimeIso("02:10:00".to_string())), "2:10");
        assert_eq!(cell_text(&Data::DurationIso("PT2H10M0S".to_string())), "2:10");
        assert_eq!(cell_text(&Data::DurationIso("P1D".to_string())), "P1D");
    }

    #[test]
    fn test_plain_cells_render_as_text() {
        assert_eq!(cell_text(&Data::Float(5.0)), "5");
        assert_eq!(cell_text(&Data::Int(3)), "3");
        assert_eq!(cell_text(&Data::String(" Lions ".to_string())), "Lions");
        assert_eq!(cell_text(&Data::Empty), "");
    }
}
