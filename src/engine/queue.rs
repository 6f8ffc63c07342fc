// ==========================================
// 学生优先队列 - 堆引擎
// ==========================================
// 职责: 插入、查看堆顶、取出堆顶、按身份删除、非破坏性有序遍历
// 存储: Vec 数组堆, parent=(i-1)/2, children=2i+1/2i+2
// 并发: 无内部同步,多线程访问需由调用方串行化
// ==========================================

mod core;
mod sift;
mod sorted_view;


pub use self::core::StudentPriorityQueue;
pub use sorted_view::SortedIter;
