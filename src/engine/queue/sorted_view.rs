use super::sift::heap_sort_by;
use crate::domain::student::Student;
use crate::engine::error::{EngineError, EngineResult};
use crate::engine::strategy::StudentComparator;
use std::cmp::Ordering;
use std::iter::FusedIterator;

// ==========================================
// SortedIter - 非破坏性优先级视图
// ==========================================
// 红线: 构造时即复制堆数组,之后不再读取源队列
// 输出: 按当前策略从高到低的学生序列

/// 按优先级从高到低遍历队列快照
///
/// 每次 `StudentPriorityQueue::iter()` 都会生成新的快照,
/// 源队列之后的修改不会反映到已有视图中,多个视图互不干扰。
#[derive(Debug, Clone)]
pub struct SortedIter {
    sorted: Vec<Student>,
    cursor: usize,
}

impl SortedIter {
    /// 复制堆数组并用同一策略原地堆排序
    pub(super) fn from_heap<S: StudentComparator>(heap: &[Student], strategy: &S) -> Self {
        let mut sorted = heap.to_vec();

        // 排序堆的堆顶是优先级最低者,换到末尾后数组即为从高到低
        let lower_ranked = |a: &Student, b: &Student| strategy.compare(a, b) == Ordering::Greater;
        heap_sort_by(&mut sorted, &lower_ranked);

        Self { sorted, cursor: 0 }
    }

    /// 取下一个学生,已耗尽时返回错误
    ///
    /// # 返回
    /// - Ok(Student): 下一个学生
    /// - Err(EngineError::SortedViewExhausted): 越界访问
    pub fn try_next(&mut self) -> EngineResult<Student> {
        self.next().ok_or(EngineError::SortedViewExhausted {
            len: self.sorted.len(),
        })
    }

    /// 是否还有未遍历的学生
    pub fn has_next(&self) -> bool {
        self.cursor < self.sorted.len()
    }

    /// 剩余数量
    pub fn remaining(&self) -> usize {
        self.sorted.len() - self.cursor
    }

    /// 回到快照开头重新遍历
    pub fn rewind(&mut self) {
        self.cursor = 0;
    }

    /// 完整的有序快照 (不受游标影响)
    pub fn as_slice(&self) -> &[Student] {
        &self.sorted
    }
}

impl Iterator for SortedIter {
    type Item = Student;

    fn next(&mut self) -> Option<Self::Item> {
        let student = self.sorted.get(self.cursor)?.clone();
        self.cursor += 1;
        Some(student)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining();
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for SortedIter {}

impl FusedIterator for SortedIter {}
