// ==========================================
// 测试辅助函数
// ==========================================
// 职责: 提供测试学生数据、堆性质断言、确定性伪随机序列
// ==========================================

#![allow(dead_code)]

use std::cmp::Ordering;
use student_priority_queue::{Student, StudentComparator, StudentPriorityQueue};

/// 创建测试学生 (姓名 = "Name" + 学号)
pub fn create_student(units: i32, gpa: f64, red_id: &str) -> Student {
    create_named_student(&format!("Name{}", red_id), units, gpa, red_id)
}

/// 创建指定姓名的测试学生
pub fn create_named_student(name: &str, units: i32, gpa: f64, red_id: &str) -> Student {
    Student::new(name, red_id, format!("{}@university.edu", red_id), gpa, units)
        .expect("测试数据必须合法")
}

/// 断言堆性质: 任一非根元素都不排在父节点之前
pub fn assert_heap_invariant<S: StudentComparator>(queue: &StudentPriorityQueue<S>) {
    let heap = queue.as_slice();
    for i in 1..heap.len() {
        let parent = (i - 1) / 2;
        assert_ne!(
            queue.strategy().compare(&heap[i], &heap[parent]),
            Ordering::Less,
            "堆性质被破坏: index={}({}) parent={}({})",
            i,
            heap[i].red_id(),
            parent,
            heap[parent].red_id()
        );
    }
}

/// 学号列表
pub fn red_ids(students: &[Student]) -> Vec<String> {
    students.iter().map(|s| s.red_id().to_string()).collect()
}

/// 确定性伪随机数 (线性同余),保证测试可复现
pub struct Lcg(u64);

impl Lcg {
    pub fn new(seed: u64) -> Self {
        Lcg(seed)
    }

    pub fn next_u32(&mut self) -> u32 {
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        (self.0 >> 33) as u32
    }

    pub fn below(&mut self, bound: u32) -> u32 {
        self.next_u32() % bound
    }
}

/// 生成 n 个字段随机但合法的学生,学号唯一
pub fn random_students(rng: &mut Lcg, n: usize) -> Vec<Student> {
    (0..n)
        .map(|i| {
            let units = rng.below(151) as i32;
            // GPA 取 0.00 ~ 4.00, 两位小数
            let gpa = f64::from(rng.below(401)) / 100.0;
            create_student(units, gpa, &format!("R{:04}", i))
        })
        .collect()
}
