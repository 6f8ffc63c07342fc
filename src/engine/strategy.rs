// ==========================================
// 学生优先队列 - 策略定义
// ==========================================
// 用途：
// - 队列构造时注入排序策略,生命周期内不可变更；
// - 切换策略需新建队列并重新插入。

use crate::domain::student::Student;
use crate::engine::error::EngineError;
use crate::engine::priority::{compare_gpa_first, compare_weighted_score};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

// ==========================================
// StudentComparator - 排序策略注入点
// ==========================================

/// 学生全序比较能力
///
/// 约定: `Ordering::Less` 表示 a 优先于 b (排在更前)。
/// 闭包 `Fn(&Student, &Student) -> Ordering` 自动实现此 trait。
pub trait StudentComparator {
    /// 比较两个学生的优先级
    fn compare(&self, a: &Student, b: &Student) -> Ordering;

    /// 策略显示名称
    fn name(&self) -> &str {
        "custom"
    }
}

impl<F> StudentComparator for F
where
    F: Fn(&Student, &Student) -> Ordering,
{
    fn compare(&self, a: &Student, b: &Student) -> Ordering {
        self(a, b)
    }
}

// ==========================================
// PriorityStrategy - 内置排序策略
// ==========================================

/// 内置排序策略
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PriorityStrategy {
    /// 70% 学分 + 30% GPA
    WeightedScore,
    /// GPA 降序,其次学分
    GpaFirst,
}

impl PriorityStrategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            PriorityStrategy::WeightedScore => "weighted_score",
            PriorityStrategy::GpaFirst => "gpa_first",
        }
    }

    pub fn title_cn(&self) -> &'static str {
        match self {
            PriorityStrategy::WeightedScore => "加权评分 (70% 学分, 30% GPA)",
            PriorityStrategy::GpaFirst => "GPA 优先",
        }
    }
}

impl StudentComparator for PriorityStrategy {
    fn compare(&self, a: &Student, b: &Student) -> Ordering {
        match self {
            PriorityStrategy::WeightedScore => compare_weighted_score(a, b),
            PriorityStrategy::GpaFirst => compare_gpa_first(a, b),
        }
    }

    fn name(&self) -> &str {
        self.as_str()
    }
}

impl Default for PriorityStrategy {
    fn default() -> Self {
        PriorityStrategy::WeightedScore
    }
}

impl fmt::Display for PriorityStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for PriorityStrategy {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "weighted_score" | "weighted-score" | "default" => Ok(PriorityStrategy::WeightedScore),
            "gpa_first" | "gpa-first" => Ok(PriorityStrategy::GpaFirst),
            other => Err(EngineError::UnknownStrategy(other.to_string())),
        }
    }
}
