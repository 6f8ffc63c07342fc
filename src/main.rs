// ==========================================
// 学生优先队列 - 演示入口
// ==========================================
// 演示: 默认策略、集合操作、撤销、GPA优先策略、破坏性取出、非破坏性遍历
// 配置: STUDENT_PQ_CONFIG / STUDENT_PQ_STRATEGY / STUDENT_PQ_LOG_FILTER
// ==========================================

use anyhow::{Context, Result};
use student_priority_queue::{
    logging, PriorityStrategy, QueueCommand, QueueConfig, Student, StudentComparator,
    StudentPriorityQueue, UndoManager,
};

fn main() -> Result<()> {
    let config = QueueConfig::resolve().context("加载配置失败")?;
    if let Err(e) = logging::init_with(&config) {
        eprintln!("日志系统初始化失败: {}", e);
    }

    tracing::info!("==================================================");
    tracing::info!("{}", student_priority_queue::APP_NAME);
    tracing::info!("系统版本: {}", student_priority_queue::VERSION);
    tracing::info!("排序策略: {}", config.strategy.title_cn());
    tracing::info!("==================================================");

    demo_configured_strategy(&config)?;
    demo_collection_integration(&config)?;
    demo_undo()?;
    demo_gpa_first()?;
    demo_destructive_popping()?;
    demo_iteration()?;

    println!("\n=== 演示结束 ===");
    Ok(())
}

fn student(name: &str, red_id: &str, email: &str, gpa: f64, units: i32) -> Result<Student> {
    Student::new(name, red_id, email, gpa, units)
        .with_context(|| format!("无效的学生记录: {}", red_id))
}

/// 常规 + 边界 + 同分样例
fn roster() -> Result<Vec<Student>> {
    Ok(vec![
        student("Ivy Huynh", "R1234567", "ivy.huynh@university.edu", 3.7, 128)?,
        student("Alex Kim", "R2000001", "alex.kim@university.edu", 3.2, 96)?,
        student("Jordan Lee", "R2000002", "jordan.lee@university.edu", 2.9, 72)?,
        student("Priya Patel", "R2000003", "priya.patel@university.edu", 3.95, 110)?,
        student("Sam Rivera", "R2000004", "sam.rivera@university.edu", 3.4, 140)?,
        student("Casey Nguyen", "R2000005", "casey.nguyen@university.edu", 3.8, 100)?,
        student("Taylor Brooks", "R2000006", "taylor.brooks@university.edu", 3.1, 145)?,
        // 边界值
        student("ZeroZero", "R100", "zero.zero@university.edu", 0.0, 0)?,
        student("MaxGPA", "R101", "max.gpa@university.edu", 4.0, 0)?,
        student("MaxUnits", "R102", "max.units@university.edu", 0.0, 150)?,
        student("MaxBoth", "R103", "max.both@university.edu", 4.0, 150)?,
        // 同分: 期望 Adam Xiong, Adam Young, Bella Young
        student("Adam Young", "R010", "adam.young@university.edu", 3.0, 100)?,
        student("Bella Young", "R009", "bella.young@university.edu", 3.0, 100)?,
        student("Adam Xiong", "R008", "adam.xiong@university.edu", 3.0, 100)?,
    ])
}

fn small_roster() -> Result<Vec<Student>> {
    Ok(vec![
        student("Ivy Huynh", "R1234567", "ivy.huynh@university.edu", 3.7, 128)?,
        student("Alex Kim", "R2000001", "alex.kim@university.edu", 3.2, 96)?,
        student("MaxBoth", "R103", "max.both@university.edu", 4.0, 150)?,
    ])
}

fn print_priority_order<S: StudentComparator>(queue: &StudentPriorityQueue<S>) {
    println!("优先级顺序 (从高到低):");
    for (rank, student) in queue.iter().enumerate() {
        println!("{:2}. {}  -  {}", rank + 1, student.red_id(), student.name());
    }
}

fn demo_configured_strategy(config: &QueueConfig) -> Result<()> {
    println!("1. 配置策略演示 ({})", config.strategy.title_cn());
    let mut queue = StudentPriorityQueue::from_config(config);
    queue.extend(roster()?);

    match queue.peek() {
        Some(top) => println!("堆顶 (peek): {}", top),
        None => println!("堆顶 (peek): 空"),
    }
    println!();
    print_priority_order(&queue);
    Ok(())
}

fn demo_collection_integration(config: &QueueConfig) -> Result<()> {
    println!("\n2. 集合操作演示");
    let mut queue = StudentPriorityQueue::from_config(config);
    queue.extend(roster()?);

    println!("队列大小: {}", queue.len());
    println!("堆序内容: {}", queue);
    println!("快照长度: {}", queue.to_snapshot().len());

    let probe = student("Jordan Lee", "R2000002", "jordan.lee@university.edu", 2.9, 72)?;
    println!("移除 {}: {}", probe.red_id(), queue.remove(&probe));
    println!("再次移除 {}: {}", probe.red_id(), queue.remove(&probe));
    println!("移除后大小: {}", queue.len());
    Ok(())
}

fn demo_undo() -> Result<()> {
    println!("\n3. 命令撤销演示");
    let mut queue = StudentPriorityQueue::new();
    let mut undo = UndoManager::new();

    for s in small_roster()?.into_iter().take(2) {
        undo.execute(&mut queue, QueueCommand::insert(s));
    }
    println!("添加2名学生后:");
    print_priority_order(&queue);

    let action = undo.execute(&mut queue, QueueCommand::extract_top());
    match &action.removed {
        Some(student) => println!("移除堆顶后 (取出 {}):", student),
        None => println!("移除堆顶后 (队列为空):"),
    }
    print_priority_order(&queue);

    let record = undo.undo(&mut queue).context("撤销失败")?;
    println!("撤销 [{}] 后:", record.description);
    print_priority_order(&queue);
    println!("历史深度: {}", undo.history_depth());
    Ok(())
}

fn demo_gpa_first() -> Result<()> {
    println!("\n4. GPA 优先策略");
    let mut queue = StudentPriorityQueue::with_strategy(PriorityStrategy::GpaFirst);
    queue.extend(small_roster()?);
    queue.insert(student("MaxGPA", "R101", "max.gpa@university.edu", 4.0, 0)?);

    print_priority_order(&queue);
    if let Some(top) = queue.peek() {
        println!("GPA 优先下的堆顶: {}", top);
    }
    Ok(())
}

fn demo_destructive_popping() -> Result<()> {
    println!("\n5. 破坏性取出");
    let mut queue = StudentPriorityQueue::new();
    queue.extend(small_roster()?);

    while let Some(s) = queue.extract_max() {
        println!(
            "{}  -  {}  (score={:.5})",
            s.red_id(),
            s.name(),
            s.priority_score()
        );
    }
    Ok(())
}

fn demo_iteration() -> Result<()> {
    println!("\n6. 非破坏性遍历");
    let mut queue = StudentPriorityQueue::new();
    queue.extend(small_roster()?);

    for s in &queue {
        println!(
            "  - {}: {} (Units: {}, GPA: {}, Score: {:.5})",
            s.red_id(),
            s.name(),
            s.units(),
            s.gpa(),
            s.priority_score()
        );
    }

    println!("\n遍历后队列大小: {}", queue.len());
    if let Some(top) = queue.peek() {
        println!("遍历后堆顶: {}", top);
    }
    Ok(())
}
