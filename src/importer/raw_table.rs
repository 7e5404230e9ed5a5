// ==========================================
// 橄榄球比赛统计系统 - 原始表格与行访问
// ==========================================
// 职责: 统一两种原始输入形态
//   - Grid: 二维数组，第 0 行为表头
//   - Keyed: 已按表头键控的记录
// 说明: 列布局每批次解析一次，所有分类器经同一个 RowView::get 取值
// ==========================================

use std::collections::HashMap;

// ==========================================
// RawTable - 原始表格
// ==========================================
#[derive(Debug, Clone, PartialEq)]
pub enum RawTable {
    Grid(Vec<Vec<String>>),
    Keyed(Vec<HashMap<String, String>>),
}

impl RawTable {
    /// 由任意字符串二维数组构造 Grid（第 0 行为表头）
    pub fn grid<R, C, S>(rows: R) -> Self
    where
        R: IntoIterator<Item = C>,
        C: IntoIterator<Item = S>,
        S: Into<String>,
    {
        RawTable::Grid(
            rows.into_iter()
                .map(|row| row.into_iter().map(Into::into).collect())
                .collect(),
        )
    }

    /// 由 (列名, 值) 列表构造 Keyed
    pub fn keyed<R, C, K, V>(records: R) -> Self
    where
        R: IntoIterator<Item = C>,
        C: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        RawTable::Keyed(
            records
                .into_iter()
                .map(|rec| rec.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
                .collect(),
        )
    }

    /// 是否存在表头（Grid 至少一行 / Keyed 至少一条记录）
    pub fn has_header(&self) -> bool {
        match self {
            RawTable::Grid(rows) => !rows.is_empty(),
            RawTable::Keyed(records) => !records.is_empty(),
        }
    }

    /// 数据行数（不含表头）
    pub fn data_row_count(&self) -> usize {
        match self {
            RawTable::Grid(rows) => rows.len().saturating_sub(1),
            RawTable::Keyed(records) => records.len(),
        }
    }

    /// 解析列布局
    ///
    /// - Grid: 表头去空白后按名称定位，重名取首次出现
    /// - Keyed: 以首条记录的键作为表头集合
    pub fn layout(&self) -> ColumnLayout {
        let mut slots = HashMap::new();
        match self {
            RawTable::Grid(rows) => {
                if let Some(header) = rows.first() {
                    for (idx, name) in header.iter().enumerate() {
                        let name = name.trim();
                        if !name.is_empty() {
                            slots
                                .entry(name.to_string())
                                .or_insert(ColumnSlot::Index(idx));
                        }
                    }
                }
            }
            RawTable::Keyed(records) => {
                if let Some(first) = records.first() {
                    // 去空白后重名时：原样无空白的键优先，其次按字典序
                    let mut keys: Vec<&String> = first.keys().collect();
                    keys.sort_by(|a, b| {
                        (a.trim() != a.as_str(), a.as_str())
                            .cmp(&(b.trim() != b.as_str(), b.as_str()))
                    });
                    for key in keys {
                        let name = key.trim();
                        if !name.is_empty() {
                            slots
                                .entry(name.to_string())
                                .or_insert_with(|| ColumnSlot::Key(key.clone()));
                        }
                    }
                }
            }
        }
        ColumnLayout { slots }
    }

    /// 数据行视图（保持输入顺序）
    pub fn rows<'a>(&'a self, layout: &'a ColumnLayout) -> Vec<RowView<'a>> {
        match self {
            RawTable::Grid(rows) => rows
                .iter()
                .skip(1)
                .enumerate()
                .map(|(idx, cells)| RowView {
                    layout,
                    cells: RowCells::Positional(cells),
                    row_number: idx + 2,
                })
                .collect(),
            RawTable::Keyed(records) => records
                .iter()
                .enumerate()
                .map(|(idx, record)| RowView {
                    layout,
                    cells: RowCells::Keyed(record),
                    row_number: idx + 2,
                })
                .collect(),
        }
    }
}

// ==========================================
// ColumnLayout - 列名 → 访问方式
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq)]
enum ColumnSlot {
    Index(usize),
    Key(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnLayout {
    slots: HashMap<String, ColumnSlot>,
}

impl ColumnLayout {
    pub fn contains(&self, column: &str) -> bool {
        self.slots.contains_key(column)
    }

    /// 已知列名（排序后）
    pub fn columns(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.slots.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

// ==========================================
// RowView - 单行只读视图
// ==========================================
#[derive(Debug, Clone, Copy)]
enum RowCells<'a> {
    Positional(&'a [String]),
    Keyed(&'a HashMap<String, String>),
}

#[derive(Debug, Clone, Copy)]
pub struct RowView<'a> {
    layout: &'a ColumnLayout,
    cells: RowCells<'a>,
    row_number: usize,
}

impl<'a> RowView<'a> {
    /// 原始文件行号（表头为第 1 行）
    pub fn row_number(&self) -> usize {
        self.row_number
    }

    /// 按列名取值（已去首尾空白）；列不存在或行过短返回 None
    pub fn get(&self, column: &str) -> Option<&'a str> {
        let raw = match (self.layout.slots.get(column)?, self.cells) {
            (ColumnSlot::Index(idx), RowCells::Positional(cells)) => cells.get(*idx)?,
            (ColumnSlot::Key(key), RowCells::Keyed(record)) => record.get(key)?,
            _ => return None,
        };
        Some(raw.trim())
    }

    /// 整行是否为空白
    pub fn is_blank(&self) -> bool {
        match self.cells {
            RowCells::Positional(cells) => cells.iter().all(|v| v.trim().is_empty()),
            RowCells::Keyed(record) => record.values().all(|v| v.trim().is_empty()),
        }
    }
}
