// ==========================================
// 学生优先队列 - 命令与撤销
// ==========================================
// 职责: 把队列修改封装为可撤销命令,按 LIFO 撤销
// 命令: Insert(插入/按身份删除) 与 ExtractTop(取出堆顶/插回)
// ==========================================

mod command;
mod manager;


pub use command::{CommandType, QueueCommand};
pub use manager::{ExecutedAction, UndoManager, UndoRecord};
