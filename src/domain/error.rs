// ==========================================
// 学生优先队列 - 领域层错误类型
// ==========================================
// 工具: thiserror 派生宏
// 职责: 记录构造阶段的字段校验失败
// ==========================================

use thiserror::Error;

/// 领域层错误类型
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    // ===== 数据质量错误 =====
    #[error("字段值错误 (field={field}): {message}")]
    FieldValueError { field: String, message: String },
}

impl DomainError {
    /// 创建字段校验错误
    pub fn field(field: &str, message: impl Into<String>) -> Self {
        DomainError::FieldValueError {
            field: field.to_string(),
            message: message.into(),
        }
    }

    /// 出错的字段名
    pub fn field_name(&self) -> &str {
        match self {
            DomainError::FieldValueError { field, .. } => field,
        }
    }
}

/// Result 类型别名
pub type DomainResult<T> = Result<T, DomainError>;
