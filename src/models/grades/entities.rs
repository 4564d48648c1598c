use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// 年级名称最大字符数
pub const GRADE_NAME_MAX_LENGTH: usize = 2;
/// 年级等级下限（学前班）
pub const GRADE_LEVEL_MIN: i32 = -1;
/// 年级等级上限（12 年级）
pub const GRADE_LEVEL_MAX: i32 = 12;

/// 年级，例如 "K"、"1"、"12"
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/grade.ts")]
pub struct Grade {
    pub id: i64,
    // 显示名称
    pub name: String,
    // 数值等级，用于排序
    pub level: i32,
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// 年级列表排序方式
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export, export_to = "../frontend/src/types/generated/grade.ts")]
pub enum GradeOrdering {
    /// 按等级升序
    #[default]
    Level,
    /// 按名称字典序
    Name,
}
