// ==========================================
// 学生优先队列 - 核心库
// ==========================================
// 组成: 学生记录 + 可插拔排序策略 + 数组二叉堆 + 撤销命令层
// 定位: 单线程、同步、纯内存
// ==========================================

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 学生记录与校验
pub mod domain;

// 引擎层 - 排序规则、堆、有序视图、撤销
pub mod engine;

// 配置层 - 队列与日志配置
pub mod config;

// 日志系统
pub mod logging;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域实体
pub use domain::{DomainError, Student, StudentRecord, MAX_GPA, MAX_UNITS};

// 引擎
pub use engine::{
    CommandType, EngineError, EngineResult, ExecutedAction, PriorityStrategy, QueueCommand,
    SortedIter, StudentComparator, StudentPriorityQueue, UndoManager, UndoRecord,
};

// 配置
pub use config::{ConfigError, QueueConfig};

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "学生优先队列";
