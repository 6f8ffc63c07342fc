// 数组堆的下标运算与上浮/下沉
//
// `above(a, b)` 为真表示 a 应位于 b 之上 (更靠近堆顶)。
// 队列与排序视图共用这组函数,只是 `above` 的方向不同。

#[inline]
fn parent(i: usize) -> usize {
    (i - 1) / 2
}

#[inline]
fn left_child(i: usize) -> usize {
    2 * i + 1
}

#[inline]
fn right_child(i: usize) -> usize {
    2 * i + 2
}

/// 上浮: 当元素严格位于父节点之上时与父节点交换
///
/// # 返回
/// 元素最终所在下标
pub(super) fn sift_up_by<T, F>(items: &mut [T], mut pos: usize, above: &F) -> usize
where
    F: Fn(&T, &T) -> bool,
{
    while pos > 0 {
        let p = parent(pos);
        if above(&items[pos], &items[p]) {
            items.swap(pos, p);
            pos = p;
        } else {
            break;
        }
    }
    pos
}

/// 下沉: 与更靠上的子节点交换,直到没有子节点位于其上
///
/// 只考虑 `[0, len)` 范围,供堆排序缩小有效堆时使用。
///
/// # 返回
/// 元素最终所在下标
pub(super) fn sift_down_by<T, F>(items: &mut [T], mut pos: usize, len: usize, above: &F) -> usize
where
    F: Fn(&T, &T) -> bool,
{
    loop {
        let left = left_child(pos);
        let right = right_child(pos);
        let mut top = pos;

        if left < len && above(&items[left], &items[top]) {
            top = left;
        }
        if right < len && above(&items[right], &items[top]) {
            top = right;
        }

        if top == pos {
            return pos;
        }

        items.swap(pos, top);
        pos = top;
    }
}

/// 原地堆排序
///
/// 建堆后反复把堆顶换到末尾并缩小有效堆,
/// 结果中 `above` 意义下最"低"的元素排在最前。
pub(super) fn heap_sort_by<T, F>(items: &mut [T], above: &F)
where
    F: Fn(&T, &T) -> bool,
{
    let n = items.len();
    if n < 2 {
        return;
    }

    for i in (0..n / 2).rev() {
        sift_down_by(items, i, n, above);
    }

    for end in (1..n).rev() {
        items.swap(0, end);
        sift_down_by(items, 0, end, above);
    }
}
