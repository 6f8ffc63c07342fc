// ==========================================
// 学生优先队列 - 领域模型层
// ==========================================
// 职责: 定义领域实体与校验规则
// 红线: 不含排序逻辑,不含堆逻辑
// ==========================================

pub mod error;
pub mod student;

// 重导出核心类型
pub use error::{DomainError, DomainResult};
pub use student::{Student, StudentRecord, MAX_GPA, MAX_UNITS};
