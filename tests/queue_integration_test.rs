// ==========================================
// 堆引擎集成测试
// ==========================================
// 测试目标: 堆性质、排序正确性、同分确定性、非破坏性遍历、取出/插回互逆
// ==========================================

mod test_helpers;

use std::cmp::Ordering;
use student_priority_queue::engine::priority::SCORE_EPSILON;
use student_priority_queue::{PriorityStrategy, Student, StudentComparator, StudentPriorityQueue};
use test_helpers::{
    assert_heap_invariant, create_named_student, create_student, random_students, red_ids, Lcg,
};

fn drain<S: StudentComparator>(queue: &mut StudentPriorityQueue<S>) -> Vec<Student> {
    std::iter::from_fn(|| queue.extract_max()).collect()
}

#[test]
fn test_heap_invariant_under_random_operations() {
    student_priority_queue::logging::init_test();

    let mut rng = Lcg::new(20240917);
    let mut queue = StudentPriorityQueue::new();
    let mut present: Vec<Student> = Vec::new();
    let mut next_id = 0;

    for _ in 0..600 {
        match rng.below(4) {
            0 | 1 => {
                let units = rng.below(151) as i32;
                let gpa = f64::from(rng.below(401)) / 100.0;
                let s = create_student(units, gpa, &format!("X{:05}", next_id));
                next_id += 1;
                present.push(s.clone());
                queue.insert(s);
            }
            2 => {
                let extracted = queue.extract_max();
                if let Some(s) = &extracted {
                    let pos = present.iter().position(|p| p == s).expect("取出的学生必须存在");
                    present.swap_remove(pos);
                } else {
                    assert!(present.is_empty());
                }
            }
            _ => {
                if present.is_empty() {
                    assert!(!queue.remove(&create_student(1, 1.0, "ABSENT")));
                } else {
                    let idx = rng.below(present.len() as u32) as usize;
                    let target = present.swap_remove(idx);
                    assert!(queue.remove(&target));
                    assert!(!queue.remove(&target));
                }
            }
        }

        assert_eq!(queue.len(), present.len());
        assert_heap_invariant(&queue);
    }
}

#[test]
fn test_extraction_order_follows_strategy() {
    for strategy in [PriorityStrategy::WeightedScore, PriorityStrategy::GpaFirst] {
        let mut rng = Lcg::new(7);
        let mut queue = StudentPriorityQueue::with_strategy(strategy);
        queue.extend(random_students(&mut rng, 200));

        let drained = drain(&mut queue);
        assert_eq!(drained.len(), 200);
        for pair in drained.windows(2) {
            assert_ne!(
                strategy.compare(&pair[0], &pair[1]),
                Ordering::Greater,
                "strategy={} {} 不应排在 {} 之前",
                strategy,
                pair[0],
                pair[1]
            );
        }
    }
}

#[test]
fn test_distinct_scores_extract_strictly_descending() {
    // 固定 GPA, 学分各不相同 -> 评分各不相同
    let mut queue = StudentPriorityQueue::new();
    for units in [15, 140, 3, 77, 150, 0, 99, 64, 128, 31] {
        queue.insert(create_student(units, 3.0, &format!("U{:03}", units)));
    }

    let scores: Vec<f64> = drain(&mut queue).iter().map(|s| s.priority_score()).collect();
    for pair in scores.windows(2) {
        assert!(pair[0] - pair[1] > SCORE_EPSILON, "{:?}", scores);
    }
}

#[test]
fn test_default_strategy_example() {
    let mut queue = StudentPriorityQueue::new();
    queue.insert(create_student(80, 3.2, "R003"));
    queue.insert(create_student(140, 3.6, "R001"));
    queue.insert(create_student(100, 3.9, "R002"));

    assert_eq!(red_ids(&drain(&mut queue)), vec!["R001", "R002", "R003"]);
}

#[test]
fn test_gpa_first_example() {
    let mut queue = StudentPriorityQueue::with_strategy(PriorityStrategy::GpaFirst);
    queue.insert(create_student(140, 3.6, "R001"));
    queue.insert(create_student(100, 3.9, "R002"));

    assert_eq!(queue.extract_max().map(|s| s.red_id().to_string()), Some("R002".to_string()));
}

#[test]
fn test_tie_break_determinism() {
    let expected = vec!["Adam Xiong", "Adam Young", "Bella Young"];

    // 不同插入顺序得到相同结果
    let orders: [[usize; 3]; 3] = [[0, 1, 2], [2, 1, 0], [1, 2, 0]];
    for order in orders {
        let students = [
            create_named_student("Adam Young", 100, 3.0, "R010"),
            create_named_student("Bella Young", 100, 3.0, "R009"),
            create_named_student("Adam Xiong", 100, 3.0, "R008"),
        ];
        let mut queue = StudentPriorityQueue::new();
        for i in order {
            queue.insert(students[i].clone());
        }

        let viewed: Vec<String> = queue.iter().map(|s| s.name().to_string()).collect();
        let names: Vec<String> = drain(&mut queue).iter().map(|s| s.name().to_string()).collect();
        assert_eq!(names, expected);
        assert_eq!(viewed, expected);
    }

    // 姓名也相同 -> 学号升序
    let mut queue = StudentPriorityQueue::new();
    queue.insert(create_named_student("Same Name", 100, 3.0, "R2"));
    queue.insert(create_named_student("Same Name", 100, 3.0, "R1"));
    assert_eq!(red_ids(&drain(&mut queue)), vec!["R1", "R2"]);
}

#[test]
fn test_iteration_is_non_destructive() {
    let mut rng = Lcg::new(99);
    let mut queue = StudentPriorityQueue::new();
    queue.extend(random_students(&mut rng, 50));

    let len_before = queue.len();
    let peek_before = queue.peek().cloned();
    let snapshot_before = red_ids(&queue.to_snapshot());

    let viewed: Vec<Student> = queue.iter().collect();
    let viewed_again: Vec<Student> = (&queue).into_iter().collect();

    assert_eq!(viewed.len(), len_before);
    assert_eq!(red_ids(&viewed), red_ids(&viewed_again));
    assert_eq!(queue.len(), len_before);
    assert_eq!(queue.peek().cloned(), peek_before);
    assert_eq!(red_ids(&queue.to_snapshot()), snapshot_before);

    // 视图顺序与破坏性取出一致
    assert_eq!(red_ids(&viewed), red_ids(&drain(&mut queue)));
}

#[test]
fn test_extract_insert_inverse() {
    let mut rng = Lcg::new(3);
    let mut queue = StudentPriorityQueue::new();
    queue.extend(random_students(&mut rng, 30));

    for _ in 0..10 {
        let len_before = queue.len();
        let peek_before = queue.peek().cloned();

        let top = queue.extract_max().expect("队列非空");
        queue.insert(top);

        assert_eq!(queue.len(), len_before);
        assert_eq!(queue.peek().cloned(), peek_before);
        assert_heap_invariant(&queue);
    }
}

#[test]
fn test_queue_from_config() {
    let config = student_priority_queue::QueueConfig {
        strategy: PriorityStrategy::GpaFirst,
        initial_capacity: 4,
        ..Default::default()
    };
    let mut queue = StudentPriorityQueue::from_config(&config);
    assert_eq!(*queue.strategy(), PriorityStrategy::GpaFirst);

    queue.insert(create_student(150, 3.0, "A"));
    queue.insert(create_student(0, 3.5, "B"));
    assert_eq!(queue.peek().map(|s| s.red_id()), Some("B"));
}
