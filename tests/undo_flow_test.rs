// ==========================================
// 命令撤销集成测试
// ==========================================
// 测试目标: 插入/取出命令的撤销正确性, 空栈撤销报错
// ==========================================

mod test_helpers;

use student_priority_queue::{
    CommandType, EngineError, PriorityStrategy, QueueCommand, StudentPriorityQueue, UndoManager,
};
use test_helpers::{assert_heap_invariant, create_student, random_students, red_ids, Lcg};

#[test]
fn test_undo_insert_restores_size_and_removes_record() {
    let mut rng = Lcg::new(11);
    let mut queue = StudentPriorityQueue::new();
    queue.extend(random_students(&mut rng, 20));
    let mut undo = UndoManager::new();

    let size_before = queue.len();
    let newcomer = create_student(150, 4.0, "NEW001");
    undo.execute(&mut queue, QueueCommand::insert(newcomer.clone()));
    assert_eq!(queue.len(), size_before + 1);
    assert_eq!(queue.peek(), Some(&newcomer));

    undo.undo(&mut queue).expect("撤销插入应成功");
    assert_eq!(queue.len(), size_before);
    assert!(!queue.remove(&newcomer));
    assert_heap_invariant(&queue);
}

#[test]
fn test_undo_extract_restores_peek() {
    let mut rng = Lcg::new(12);
    let mut queue = StudentPriorityQueue::with_strategy(PriorityStrategy::GpaFirst);
    queue.extend(random_students(&mut rng, 20));
    let mut undo = UndoManager::new();

    let peek_before = queue.peek().cloned();
    let action = undo.execute(&mut queue, QueueCommand::extract_top());
    assert_eq!(action.removed, peek_before);
    assert_ne!(queue.peek().cloned(), peek_before);

    let record = undo.undo(&mut queue).expect("撤销取出应成功");
    assert_eq!(record.command_type, CommandType::ExtractTop);
    assert_eq!(queue.peek().cloned(), peek_before);
    assert_eq!(queue.len(), 20);
    assert_heap_invariant(&queue);
}

#[test]
fn test_mixed_history_unwinds_to_initial_state() {
    let mut queue = StudentPriorityQueue::new();
    let mut undo = UndoManager::new();

    undo.execute(&mut queue, QueueCommand::insert(create_student(128, 3.7, "R1234567")));
    undo.execute(&mut queue, QueueCommand::insert(create_student(96, 3.2, "R2000001")));
    undo.execute(&mut queue, QueueCommand::extract_top());
    undo.execute(&mut queue, QueueCommand::insert(create_student(150, 4.0, "R103")));
    undo.execute(&mut queue, QueueCommand::extract_top());
    assert_eq!(undo.history_depth(), 5);
    assert_eq!(red_ids(queue.as_slice()), vec!["R2000001"]);

    // 逐步撤销并核对中间状态
    undo.undo(&mut queue).unwrap();
    assert_eq!(queue.peek().map(|s| s.red_id()), Some("R103"));
    undo.undo(&mut queue).unwrap();
    assert_eq!(queue.peek().map(|s| s.red_id()), Some("R2000001"));
    undo.undo(&mut queue).unwrap();
    assert_eq!(queue.peek().map(|s| s.red_id()), Some("R1234567"));
    assert_eq!(queue.len(), 2);
    undo.undo(&mut queue).unwrap();
    undo.undo(&mut queue).unwrap();

    assert!(queue.is_empty());
    assert!(!undo.can_undo());
    assert!(matches!(undo.undo(&mut queue), Err(EngineError::NothingToUndo)));
}
