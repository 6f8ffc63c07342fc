// ==========================================
// 日志系统初始化
// ==========================================
// 使用 tracing 和 tracing-subscriber
// 过滤器优先级: 配置 log_filter > RUST_LOG > info
// ==========================================

use crate::config::{LogFormat, QueueConfig};
use tracing_subscriber::{fmt, EnvFilter};

/// 日志初始化错误 (全局 subscriber 已被安装)
pub type InitError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// 按配置初始化日志系统
///
/// # 环境变量
/// - RUST_LOG: 配置未给出 `log_filter` 时使用（默认: info）
///   例如: RUST_LOG=debug 或 RUST_LOG=student_priority_queue=trace
///
/// # 返回
/// - Ok(()): 安装成功
/// - Err: 全局 subscriber 已存在 (重复初始化)
///
/// # 示例
/// ```no_run
/// use student_priority_queue::{logging, QueueConfig};
/// if let Err(e) = logging::init_with(&QueueConfig::default()) {
///     eprintln!("日志系统初始化失败: {}", e);
/// }
/// ```
pub fn init_with(config: &QueueConfig) -> Result<(), InitError> {
    let filter = match &config.log_filter {
        Some(directives) => EnvFilter::new(directives),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
    };

    let builder = fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_line_number(true);

    match config.log_format {
        LogFormat::Pretty => builder.try_init(),
        LogFormat::Json => builder.json().try_init(),
    }
}

/// 初始化测试环境的日志系统
///
/// 使用更详细的日志级别，便于调试
pub fn init_test() {
    let _ = fmt()
        .with_env_filter(EnvFilter::new("debug"))
        .with_test_writer()
        .try_init();
}
