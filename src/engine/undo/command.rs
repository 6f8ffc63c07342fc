use crate::domain::student::Student;
use crate::engine::queue::StudentPriorityQueue;
use crate::engine::strategy::StudentComparator;
use serde::{Deserialize, Serialize};

// ==========================================
// CommandType - 命令类型
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CommandType {
    Insert,     // 插入学生
    ExtractTop, // 取出堆顶
}

impl CommandType {
    pub fn as_str(&self) -> &'static str {
        match self {
            CommandType::Insert => "insert",
            CommandType::ExtractTop => "extract_top",
        }
    }
}

// ==========================================
// QueueCommand - 可撤销的队列命令
// ==========================================
// 状态: 创建 -> 已执行 -> (可选) 已撤销
// 撤销会消耗命令本身,因此每次执行最多撤销一次
#[derive(Debug, Clone)]
pub enum QueueCommand {
    /// 执行: insert(student); 撤销: remove(student)
    Insert { student: Student },
    /// 执行: extract_max() 并记住结果; 撤销: 把记住的学生插回
    ExtractTop { removed: Option<Student> },
}

impl QueueCommand {
    /// 插入命令
    pub fn insert(student: Student) -> Self {
        QueueCommand::Insert { student }
    }

    /// 取出堆顶命令
    pub fn extract_top() -> Self {
        QueueCommand::ExtractTop { removed: None }
    }

    pub fn command_type(&self) -> CommandType {
        match self {
            QueueCommand::Insert { .. } => CommandType::Insert,
            QueueCommand::ExtractTop { .. } => CommandType::ExtractTop,
        }
    }

    /// 操作描述 (用于历史展示)
    pub fn description(&self) -> String {
        match self {
            QueueCommand::Insert { student } => {
                format!("添加学生: {} ({})", student.name(), student.red_id())
            }
            QueueCommand::ExtractTop { removed: Some(student) } => {
                format!("移除队首: {} ({})", student.name(), student.red_id())
            }
            QueueCommand::ExtractTop { removed: None } => "移除队首: 无".to_string(),
        }
    }

    /// ExtractTop 执行后取出的学生
    pub fn removed(&self) -> Option<&Student> {
        match self {
            QueueCommand::ExtractTop { removed } => removed.as_ref(),
            QueueCommand::Insert { .. } => None,
        }
    }

    pub(super) fn execute<S: StudentComparator>(&mut self, queue: &mut StudentPriorityQueue<S>) {
        match self {
            QueueCommand::Insert { student } => queue.insert(student.clone()),
            QueueCommand::ExtractTop { removed } => *removed = queue.extract_max(),
        }
    }

    pub(super) fn undo<S: StudentComparator>(self, queue: &mut StudentPriorityQueue<S>) {
        match self {
            QueueCommand::Insert { student } => {
                if !queue.remove(&student) {
                    tracing::warn!("撤销插入时未找到学生: {}", student.red_id());
                }
            }
            QueueCommand::ExtractTop { removed: Some(student) } => queue.insert(student),
            // 执行时队列为空,无需恢复
            QueueCommand::ExtractTop { removed: None } => {}
        }
    }
}
