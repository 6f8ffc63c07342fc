use super::command::{CommandType, QueueCommand};
use crate::domain::student::Student;
use crate::engine::error::{EngineError, EngineResult};
use crate::engine::queue::StudentPriorityQueue;
use crate::engine::strategy::StudentComparator;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::instrument;
use uuid::Uuid;

// ==========================================
// HistoryEntry - 撤销栈条目
// ==========================================
#[derive(Debug, Clone)]
struct HistoryEntry {
    action_id: String,
    executed_at: DateTime<Utc>,
    command: QueueCommand,
}

// ==========================================
// UndoRecord - 撤销结果
// ==========================================
// 用途: 返回给调用方做展示/审计
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UndoRecord {
    pub action_id: String,         // 执行时分配的ID (UUID)
    pub command_type: CommandType, // 命令类型
    pub description: String,       // 操作描述
    pub executed_at: DateTime<Utc>,
    pub undone_at: DateTime<Utc>,
}

// ==========================================
// ExecutedAction - 执行结果
// ==========================================
#[derive(Debug, Clone, PartialEq)]
pub struct ExecutedAction {
    pub action_id: String, // 撤销时据此对应 UndoRecord
    pub command_type: CommandType,
    pub description: String,
    pub removed: Option<Student>, // 仅 ExtractTop 且队列非空时有值
}

// ==========================================
// UndoManager - 命令执行与撤销栈
// ==========================================
/// 命令执行与撤销栈 (LIFO)
///
/// 不持有队列,执行/撤销时由调用方传入目标队列。
/// 不支持重做。
#[derive(Debug, Default)]
pub struct UndoManager {
    undo_stack: Vec<HistoryEntry>,
}

impl UndoManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// 执行命令并压入撤销栈
    ///
    /// # 参数
    /// - `queue`: 目标队列
    /// - `command`: 待执行命令
    ///
    /// # 返回
    /// 本次操作的 action_id、描述,以及 ExtractTop 取出的学生
    #[instrument(skip(self, queue, command), fields(command_type = command.command_type().as_str()))]
    pub fn execute<S: StudentComparator>(
        &mut self,
        queue: &mut StudentPriorityQueue<S>,
        mut command: QueueCommand,
    ) -> ExecutedAction {
        command.execute(queue);

        let action = ExecutedAction {
            action_id: Uuid::new_v4().to_string(),
            command_type: command.command_type(),
            description: command.description(),
            removed: command.removed().cloned(),
        };
        tracing::info!(
            "已执行命令: {}, action_id={}, 历史深度={}",
            action.description,
            action.action_id,
            self.undo_stack.len() + 1
        );

        self.undo_stack.push(HistoryEntry {
            action_id: action.action_id.clone(),
            executed_at: Utc::now(),
            command,
        });
        action
    }

    /// 撤销最近一次命令
    ///
    /// # 返回
    /// - Ok(UndoRecord): 撤销成功
    /// - Err(EngineError::NothingToUndo): 撤销栈为空
    #[instrument(skip(self, queue))]
    pub fn undo<S: StudentComparator>(
        &mut self,
        queue: &mut StudentPriorityQueue<S>,
    ) -> EngineResult<UndoRecord> {
        let entry = self.undo_stack.pop().ok_or(EngineError::NothingToUndo)?;

        let record = UndoRecord {
            action_id: entry.action_id,
            command_type: entry.command.command_type(),
            description: entry.command.description(),
            executed_at: entry.executed_at,
            undone_at: Utc::now(),
        };

        entry.command.undo(queue);

        tracing::info!(
            "已撤销命令: {}, action_id={}, 剩余历史={}",
            record.description,
            record.action_id,
            self.undo_stack.len()
        );
        Ok(record)
    }

    /// 是否有可撤销的操作
    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    /// 撤销栈深度
    pub fn history_depth(&self) -> usize {
        self.undo_stack.len()
    }

    /// 操作描述列表,最近的在前
    pub fn history(&self) -> Vec<String> {
        self.undo_stack
            .iter()
            .rev()
            .map(|entry| entry.command.description())
            .collect()
    }
}
