// ==========================================
// 学生优先队列 - 引擎层
// ==========================================
// 职责: 排序规则、堆引擎、有序视图、命令撤销
// 红线: 引擎不做 I/O, 所有操作同步完成
// ==========================================

pub mod error;
pub mod priority;
pub mod queue;
pub mod strategy;
pub mod undo;

// 重导出核心引擎
pub use error::{EngineError, EngineResult};
pub use queue::{SortedIter, StudentPriorityQueue};
pub use strategy::{PriorityStrategy, StudentComparator};
pub use undo::{CommandType, ExecutedAction, QueueCommand, UndoManager, UndoRecord};
