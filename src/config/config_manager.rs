// ==========================================
// 橄榄球比赛统计系统 - 配置管理器
// ==========================================
// 职责: 配置加载、查询、快照
// 来源: JSON 文件 / JSON 字符串 / 环境变量指定路径 / 默认值
// ==========================================

use crate::config::report_config::{ColumnMap, ReportConfig};
use crate::config::report_config_trait::ReportConfigReader;
use crate::importer::error::{ImportError, ImportResult};
use std::path::Path;
use tracing::{debug, info};

/// 配置文件路径环境变量
pub const CONFIG_PATH_ENV: &str = "RUGBY_MATCH_STATS_CONFIG";

// ==========================================
// ConfigManager - 配置管理器
// ==========================================
#[derive(Debug, Clone, Default)]
pub struct ConfigManager {
    config: ReportConfig,
}

impl ConfigManager {
    /// 使用默认配置
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: ReportConfig) -> Self {
        Self { config }
    }

    /// 从 JSON 字符串加载（缺省键取默认值）
    pub fn from_json_str(raw: &str) -> ImportResult<Self> {
        let config: ReportConfig =
            serde_json::from_str(raw).map_err(|e| ImportError::ConfigValueError {
                key: "report_config".to_string(),
                value: truncate(raw, 80),
                message: e.to_string(),
            })?;
        Ok(Self { config })
    }

    /// 从 JSON 文件加载
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> ImportResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ImportError::FileNotFound(path.display().to_string()));
        }

        let raw = std::fs::read_to_string(path).map_err(|e| ImportError::ConfigReadError {
            key: path.display().to_string(),
            message: e.to_string(),
        })?;

        let manager = Self::from_json_str(&raw)?;
        info!(path = %path.display(), "已加载报表配置");
        Ok(manager)
    }

    /// 从环境变量指定的路径加载，未设置时使用默认配置
    pub fn from_env() -> ImportResult<Self> {
        match std::env::var(CONFIG_PATH_ENV) {
            Ok(path) if !path.trim().is_empty() => Self::load_from_file(path.trim()),
            _ => {
                debug!("{} 未设置，使用默认报表配置", CONFIG_PATH_ENV);
                Ok(Self::new())
            }
        }
    }

    pub fn config(&self) -> &ReportConfig {
        &self.config
    }

    /// 获取配置快照（JSON格式）
    ///
    /// # 用途
    /// - 随报表结果记录，便于复现统计口径
    pub fn get_config_snapshot(&self) -> ImportResult<String> {
        serde_json::to_string(&self.config)
            .map_err(|e| ImportError::InternalError(format!("配置快照序列化失败: {}", e)))
    }
}

fn truncate(raw: &str, max_chars: usize) -> String {
    let s = raw.trim().replace('\n', " ");
    if s.chars().count() <= max_chars {
        return s;
    }
    let head: String = s.chars().take(max_chars).collect();
    format!("{}…", head)
}

impl ReportConfigReader for ConfigManager {
    fn column_map(&self) -> ColumnMap {
        self.config.columns.clone()
    }

    fn unknown_player_label(&self) -> String {
        self.config.unknown_player_label.clone()
    }

    fn scoring_actions(&self) -> Vec<String> {
        self.config.scoring_actions.clone()
    }

    fn error_actions(&self) -> Vec<String> {
        self.config.error_actions.clone()
    }

    fn penalty_actions(&self) -> Vec<String> {
        self.config.penalty_actions.clone()
    }

    fn ruck_action(&self) -> String {
        self.config.ruck_action.clone()
    }

    fn scrum_action(&self) -> String {
        self.config.scrum_action.clone()
    }

    fn lineout_action(&self) -> String {
        self.config.lineout_action.clone()
    }

    fn kick_action(&self) -> String {
        self.config.kick_action.clone()
    }

    fn set_piece_won_label(&self) -> String {
        self.config.set_piece_won_label.clone()
    }
}
