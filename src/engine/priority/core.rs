use super::scoring::{compare_desc_with_epsilon, SCORE_EPSILON};
use crate::domain::student::Student;
use std::cmp::Ordering;

// ==========================================
// 加权评分策略 (默认)
// ==========================================

/// 比较两个学生的优先级 (加权评分策略)
///
/// 按4键排序规则依次比较：
/// 1. 加权评分 降序
/// 2. GPA 降序
/// 3. 姓名 升序
/// 4. 学号 升序
///
/// # 返回
/// Ordering::Less 表示 a 优先于 b
pub fn compare_weighted_score(a: &Student, b: &Student) -> Ordering {
    // 1. 加权评分 (降序，越大越优先)
    match compare_desc_with_epsilon(a.priority_score(), b.priority_score(), SCORE_EPSILON) {
        Ordering::Equal => {}
        other => return other,
    }

    // 2. GPA (降序)
    match compare_desc_with_epsilon(a.gpa(), b.gpa(), SCORE_EPSILON) {
        Ordering::Equal => {}
        other => return other,
    }

    compare_name_then_id(a, b)
}

// ==========================================
// GPA 优先策略
// ==========================================

/// 比较两个学生的优先级 (GPA 优先策略)
///
/// 1) GPA 降序
/// 2) 学分 降序
/// 3) 姓名 升序
/// 4) 学号 升序
pub fn compare_gpa_first(a: &Student, b: &Student) -> Ordering {
    match compare_desc_with_epsilon(a.gpa(), b.gpa(), SCORE_EPSILON) {
        Ordering::Equal => {}
        other => return other,
    }

    match b.units().cmp(&a.units()) {
        Ordering::Equal => {}
        other => return other,
    }

    compare_name_then_id(a, b)
}

// 共享兜底键: 姓名升序，再学号升序
fn compare_name_then_id(a: &Student, b: &Student) -> Ordering {
    match a.name().cmp(b.name()) {
        Ordering::Equal => {}
        other => return other,
    }

    a.red_id().cmp(b.red_id())
}
