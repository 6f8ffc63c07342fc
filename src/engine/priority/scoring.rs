use std::cmp::Ordering;

/// 浮点判等容差,避免舍入误差造成排序抖动
pub const SCORE_EPSILON: f64 = 1e-9;

/// 按降序比较两个浮点值 (大者优先)
///
/// # 返回
/// - `Ordering::Less`: a 比 b 大出 epsilon 以上
/// - `Ordering::Greater`: b 比 a 大出 epsilon 以上
/// - `Ordering::Equal`: 差值在 epsilon 以内,继续比较下一个键
pub fn compare_desc_with_epsilon(a: f64, b: f64, epsilon: f64) -> Ordering {
    if (a - b).abs() > epsilon {
        b.total_cmp(&a)
    } else {
        Ordering::Equal
    }
}
