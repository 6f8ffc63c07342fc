// ==========================================
// 学生优先队列 - 排序规则
// ==========================================
// 职责: 两个学生之间的全序比较
// 约定: Ordering::Less 表示 a 优先于 b
// 红线: 浮点比较先按 epsilon 判等,再落入下一个比较键
// ==========================================

mod core;
mod scoring;


pub use self::core::{compare_gpa_first, compare_weighted_score};
pub use scoring::{compare_desc_with_epsilon, SCORE_EPSILON};
