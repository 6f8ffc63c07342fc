// ==========================================
// 学生优先队列 - 队列配置
// ==========================================
// 优先级: 默认值 < JSON 配置文件 < 环境变量
// ==========================================

use crate::engine::error::EngineError;
use crate::engine::strategy::PriorityStrategy;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// 环境变量键
pub mod config_keys {
    /// 配置文件路径
    pub const CONFIG_PATH: &str = "STUDENT_PQ_CONFIG";
    /// 排序策略 (weighted_score / gpa_first)
    pub const STRATEGY: &str = "STUDENT_PQ_STRATEGY";
    /// 日志过滤器 (同 RUST_LOG 语法)
    pub const LOG_FILTER: &str = "STUDENT_PQ_LOG_FILTER";
}

// ==========================================
// ConfigError - 配置错误
// ==========================================
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("读取配置文件失败: {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("配置解析失败: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("配置值无效 (key={key}): {message}")]
    InvalidValue { key: String, message: String },

    #[error(transparent)]
    Engine(#[from] EngineError),
}

/// Result 类型别名
pub type ConfigResult<T> = Result<T, ConfigError>;

// ==========================================
// LogFormat - 日志输出格式
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

// ==========================================
// QueueConfig - 队列配置
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueueConfig {
    /// 排序策略
    #[serde(default)]
    pub strategy: PriorityStrategy,

    /// 堆数组初始容量
    #[serde(default = "default_initial_capacity")]
    pub initial_capacity: usize,

    /// 日志过滤器 (为空时使用 RUST_LOG, 再退化为 info)
    #[serde(default)]
    pub log_filter: Option<String>,

    /// 日志输出格式
    #[serde(default)]
    pub log_format: LogFormat,
}

fn default_initial_capacity() -> usize {
    16
}

/// 初始容量上限 (预分配超过此值视为配置错误)
pub const MAX_INITIAL_CAPACITY: usize = 1 << 16;

impl Default for QueueConfig {
    fn default() -> Self {
        Self {
            strategy: PriorityStrategy::default(),
            initial_capacity: default_initial_capacity(),
            log_filter: None,
            log_format: LogFormat::default(),
        }
    }
}

impl QueueConfig {
    /// 从 JSON 字符串解析,缺省字段取默认值
    pub fn from_json_str(json: &str) -> ConfigResult<Self> {
        let config: QueueConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// 从 JSON 文件加载
    pub fn load_from_file(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        tracing::debug!("加载配置文件: {}", path.display());
        Self::from_json_str(&content)
    }

    /// 按 默认值 < 配置文件 < 环境变量 的顺序解析配置
    ///
    /// 配置文件路径取自 `STUDENT_PQ_CONFIG`, 未设置时跳过。
    pub fn resolve() -> ConfigResult<Self> {
        Self::resolve_with(|key| std::env::var(key).ok())
    }

    /// 同 `resolve`, 但由调用方提供变量来源 (便于测试)
    pub fn resolve_with<F>(lookup: F) -> ConfigResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = match lookup(config_keys::CONFIG_PATH) {
            Some(path) if !path.trim().is_empty() => Self::load_from_file(path.trim())?,
            _ => Self::default(),
        };
        config.apply_overrides(lookup)?;
        Ok(config)
    }

    /// 应用环境变量覆写
    pub fn apply_overrides<F>(&mut self, lookup: F) -> ConfigResult<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(value) = lookup(config_keys::STRATEGY) {
            self.strategy = value.parse()?;
            tracing::debug!("环境变量覆写策略: {}", self.strategy);
        }

        if let Some(value) = lookup(config_keys::LOG_FILTER) {
            if value.trim().is_empty() {
                return Err(ConfigError::InvalidValue {
                    key: config_keys::LOG_FILTER.to_string(),
                    message: "日志过滤器不能为空".to_string(),
                });
            }
            self.log_filter = Some(value);
        }

        Ok(())
    }

    fn validate(&self) -> ConfigResult<()> {
        if self.initial_capacity > MAX_INITIAL_CAPACITY {
            return Err(ConfigError::InvalidValue {
                key: "initial_capacity".to_string(),
                message: format!(
                    "初始容量不能超过 {}, 实际={}",
                    MAX_INITIAL_CAPACITY, self.initial_capacity
                ),
            });
        }
        if let Some(filter) = &self.log_filter {
            if filter.trim().is_empty() {
                return Err(ConfigError::InvalidValue {
                    key: "log_filter".to_string(),
                    message: "日志过滤器不能为空".to_string(),
                });
            }
        }
        Ok(())
    }
}
