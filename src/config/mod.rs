// ==========================================
// 学生优先队列 - 配置层
// ==========================================
// 职责: 队列与日志配置,支持文件与环境变量覆写
// 存储: JSON 文件 (可选)
// ==========================================

pub mod queue_config;

// 重导出核心配置
pub use queue_config::{
    config_keys, ConfigError, ConfigResult, LogFormat, QueueConfig, MAX_INITIAL_CAPACITY,
};
