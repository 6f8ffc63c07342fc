// ==========================================
// 学生优先队列 - 引擎层错误类型
// ==========================================
// 职责: 定义引擎层错误类型,包装领域层校验错误
// 说明: 空队列查询/未找到删除不属于错误,分别返回 None / false
// ==========================================

use crate::domain::error::DomainError;
use thiserror::Error;

/// 引擎层错误类型
#[derive(Error, Debug)]
pub enum EngineError {
    // ==========================================
    // 撤销栈错误
    // ==========================================
    /// 撤销栈为空仍请求撤销,属于调用方逻辑错误
    #[error("没有可撤销的操作")]
    NothingToUndo,

    // ==========================================
    // 排序视图错误
    // ==========================================
    #[error("排序视图已耗尽: 共{len}个元素")]
    SortedViewExhausted { len: usize },

    // ==========================================
    // 策略错误
    // ==========================================
    #[error("未知排序策略: {0}")]
    UnknownStrategy(String),

    // ==========================================
    // 领域校验错误
    // ==========================================
    #[error(transparent)]
    Domain(#[from] DomainError),
}

/// Result 类型别名
pub type EngineResult<T> = Result<T, EngineError>;
