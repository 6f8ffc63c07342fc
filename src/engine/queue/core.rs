use super::sift::{sift_down_by, sift_up_by};
use super::sorted_view::SortedIter;
use crate::config::{QueueConfig, MAX_INITIAL_CAPACITY};
use crate::domain::student::Student;
use crate::engine::strategy::{PriorityStrategy, StudentComparator};
use std::cmp::Ordering;
use std::fmt;

// ==========================================
// StudentPriorityQueue - 学生优先队列 (数组二叉堆)
// ==========================================
// 红线: 任意非根位置 i, 策略不会把 heap[i] 排在 heap[(i-1)/2] 之前
// 红线: 策略在构造时绑定,生命周期内不可变
// ==========================================
#[derive(Debug, Clone)]
pub struct StudentPriorityQueue<S = PriorityStrategy> {
    heap: Vec<Student>,
    strategy: S,
}

impl StudentPriorityQueue<PriorityStrategy> {
    /// 使用默认策略 (加权评分) 创建空队列
    pub fn new() -> Self {
        Self::with_strategy(PriorityStrategy::default())
    }

    /// 按配置创建空队列 (策略 + 初始容量)
    ///
    /// 直接构造、未经校验的配置,初始容量按 `MAX_INITIAL_CAPACITY` 截断。
    pub fn from_config(config: &QueueConfig) -> Self {
        let capacity = config.initial_capacity.min(MAX_INITIAL_CAPACITY);
        tracing::debug!(
            "按配置创建队列: strategy={}, initial_capacity={}",
            config.strategy,
            capacity
        );
        Self::with_capacity(config.strategy, capacity)
    }
}

impl Default for StudentPriorityQueue<PriorityStrategy> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: StudentComparator> StudentPriorityQueue<S> {
    /// 使用指定策略创建空队列
    ///
    /// # 参数
    /// - `strategy`: 排序策略,之后不可更换
    pub fn with_strategy(strategy: S) -> Self {
        Self {
            heap: Vec::new(),
            strategy,
        }
    }

    /// 使用指定策略与初始容量创建空队列
    pub fn with_capacity(strategy: S, capacity: usize) -> Self {
        Self {
            heap: Vec::with_capacity(capacity),
            strategy,
        }
    }

    // ==========================================
    // 查询方法
    // ==========================================

    /// 元素数量, O(1)
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// 查看优先级最高的学生但不移除, O(1)
    ///
    /// # 返回
    /// 队列为空时返回 None
    pub fn peek(&self) -> Option<&Student> {
        self.heap.first()
    }

    /// 按身份 (red_id) 查找
    pub fn contains(&self, student: &Student) -> bool {
        self.heap.iter().any(|s| s == student)
    }

    /// 当前绑定的策略
    pub fn strategy(&self) -> &S {
        &self.strategy
    }

    /// 堆序数组的借用视图 (非排序顺序)
    pub fn as_slice(&self) -> &[Student] {
        &self.heap
    }

    /// 复制当前堆序数组 (非排序顺序), 不修改队列
    pub fn to_snapshot(&self) -> Vec<Student> {
        self.heap.clone()
    }

    /// 按优先级从高到低的非破坏性视图
    ///
    /// 每次调用都会复制一份快照,遍历期间修改队列不会影响已生成的视图。
    pub fn iter(&self) -> SortedIter {
        SortedIter::from_heap(&self.heap, &self.strategy)
    }

    // ==========================================
    // 修改方法
    // ==========================================

    /// 插入学生, O(log n)
    ///
    /// 追加到数组末尾后上浮,直到不再严格优先于父节点。
    pub fn insert(&mut self, student: Student) {
        tracing::debug!("插入学生: {} ({})", student.name(), student.red_id());

        self.heap.push(student);
        let last = self.heap.len() - 1;
        self.sift_up(last);
    }

    /// 移除并返回优先级最高的学生, O(log n)
    ///
    /// # 返回
    /// 队列为空时返回 None
    pub fn extract_max(&mut self) -> Option<Student> {
        if self.heap.is_empty() {
            return None;
        }

        // 末尾元素换到堆顶后下沉
        let top = self.heap.swap_remove(0);
        if !self.heap.is_empty() {
            self.sift_down(0);
        }

        tracing::debug!(
            "取出堆顶: {} ({}), 剩余={}",
            top.name(),
            top.red_id(),
            self.heap.len()
        );
        Some(top)
    }

    /// 按身份移除指定学生
    ///
    /// 线性查找 O(n), 与末尾元素交换后缩短数组,再从空出的位置修复堆。
    ///
    /// # 返回
    /// - true: 找到并移除
    /// - false: 队列中不存在该学生
    pub fn remove(&mut self, student: &Student) -> bool {
        let pos = match self.heap.iter().position(|s| s == student) {
            Some(pos) => pos,
            None => {
                tracing::debug!("移除未命中: {}", student.red_id());
                return false;
            }
        };

        self.heap.swap_remove(pos);

        // 换入的元素只可能朝一个方向移动: 先尝试上浮,未移动再下沉
        if pos < self.heap.len() && self.sift_up(pos) == pos {
            self.sift_down(pos);
        }

        tracing::debug!("已移除学生: {}, 剩余={}", student.red_id(), self.heap.len());
        true
    }

    /// 清空队列
    pub fn clear(&mut self) {
        self.heap.clear();
    }

    // ==========================================
    // 堆维护
    // ==========================================

    fn sift_up(&mut self, pos: usize) -> usize {
        let strategy = &self.strategy;
        let outranks = |a: &Student, b: &Student| strategy.compare(a, b) == Ordering::Less;
        sift_up_by(&mut self.heap, pos, &outranks)
    }

    fn sift_down(&mut self, pos: usize) -> usize {
        let len = self.heap.len();
        let strategy = &self.strategy;
        let outranks = |a: &Student, b: &Student| strategy.compare(a, b) == Ordering::Less;
        sift_down_by(&mut self.heap, pos, len, &outranks)
    }
}

// ==========================================
// 集合集成
// ==========================================

impl<S: StudentComparator> Extend<Student> for StudentPriorityQueue<S> {
    fn extend<I: IntoIterator<Item = Student>>(&mut self, iter: I) {
        for student in iter {
            self.insert(student);
        }
    }
}

impl<'a, S: StudentComparator> IntoIterator for &'a StudentPriorityQueue<S> {
    type Item = Student;
    type IntoIter = SortedIter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// 堆序渲染: `[Student{..}, Student{..}]`
impl<S> fmt::Display for StudentPriorityQueue<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, student) in self.heap.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", student)?;
        }
        write!(f, "]")
    }
}
