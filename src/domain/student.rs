// ==========================================
// 学生优先队列 - 学生领域模型
// ==========================================
// 红线: 构造即校验,构造后不可变
// 红线: 身份(相等/哈希)只由 red_id 决定
// ==========================================

use crate::domain::error::{DomainError, DomainResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};

/// 学分上限
pub const MAX_UNITS: i32 = 150;

/// GPA 上限
pub const MAX_GPA: f64 = 4.0;

// 默认评分权重: 70% 学分 + 30% GPA
const UNITS_WEIGHT: f64 = 0.7;
const GPA_WEIGHT: f64 = 0.3;

// ==========================================
// StudentRecord - 未校验的原始记录
// ==========================================
// 用途: 反序列化入口,经 TryFrom 进入 Student
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentRecord {
    pub name: String,
    pub red_id: String,
    pub email: String,
    pub gpa: f64,
    pub units: i32,
}

// ==========================================
// Student - 学生记录
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "StudentRecord")]
pub struct Student {
    name: String,
    red_id: String,
    email: String,
    gpa: f64,   // [0.0, 4.0]
    units: i32, // [0, 150]
}

impl Student {
    /// 构造并校验学生记录
    ///
    /// # 参数
    /// - `name`: 姓名,去除空白后不能为空
    /// - `red_id`: 学号,去除空白后不能为空
    /// - `email`: 邮箱,必须包含 '@'
    /// - `gpa`: 取值 [0.0, 4.0]
    /// - `units`: 取值 [0, 150]
    ///
    /// # 返回
    /// - Ok(Student): 校验通过
    /// - Err(DomainError::FieldValueError): 指明出错字段
    pub fn new(
        name: impl Into<String>,
        red_id: impl Into<String>,
        email: impl Into<String>,
        gpa: f64,
        units: i32,
    ) -> DomainResult<Self> {
        let name = name.into();
        let red_id = red_id.into();
        let email = email.into();

        if name.trim().is_empty() {
            return Err(DomainError::field("name", "姓名不能为空"));
        }
        if red_id.trim().is_empty() {
            return Err(DomainError::field("red_id", "学号不能为空"));
        }
        if !email.contains('@') {
            return Err(DomainError::field("email", "邮箱必须包含 '@'"));
        }
        // NaN 也落在区间外
        if !(0.0..=MAX_GPA).contains(&gpa) {
            return Err(DomainError::field(
                "gpa",
                format!("GPA 必须位于 [0.0, {}], 实际={}", MAX_GPA, gpa),
            ));
        }
        if !(0..=MAX_UNITS).contains(&units) {
            return Err(DomainError::field(
                "units",
                format!("学分必须位于 [0, {}], 实际={}", MAX_UNITS, units),
            ));
        }

        Ok(Self {
            name,
            red_id,
            email,
            gpa,
            units,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn red_id(&self) -> &str {
        &self.red_id
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn gpa(&self) -> f64 {
        self.gpa
    }

    pub fn units(&self) -> i32 {
        self.units
    }

    /// 默认策略的加权评分
    ///
    /// 公式: 0.7 × (units / 150) + 0.3 × (gpa / 4.0)
    ///
    /// # 返回
    /// [0.0, 1.0] 之间的评分
    pub fn priority_score(&self) -> f64 {
        let normalized_units = f64::from(self.units) / f64::from(MAX_UNITS);
        let normalized_gpa = self.gpa / MAX_GPA;
        UNITS_WEIGHT * normalized_units + GPA_WEIGHT * normalized_gpa
    }

    /// 转换为原始记录 (用于导出)
    pub fn to_record(&self) -> StudentRecord {
        StudentRecord {
            name: self.name.clone(),
            red_id: self.red_id.clone(),
            email: self.email.clone(),
            gpa: self.gpa,
            units: self.units,
        }
    }
}

impl TryFrom<StudentRecord> for Student {
    type Error = DomainError;

    fn try_from(record: StudentRecord) -> Result<Self, Self::Error> {
        Student::new(
            record.name,
            record.red_id,
            record.email,
            record.gpa,
            record.units,
        )
    }
}

// ==========================================
// 身份语义: 仅比较 red_id
// ==========================================
impl PartialEq for Student {
    fn eq(&self, other: &Self) -> bool {
        self.red_id == other.red_id
    }
}

impl Eq for Student {}

impl Hash for Student {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.red_id.hash(state);
    }
}

impl fmt::Display for Student {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Student{{{}, {}, gpa={}, units={}}}",
            self.red_id, self.name, self.gpa, self.units
        )
    }
}
