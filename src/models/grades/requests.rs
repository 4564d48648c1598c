use serde::Deserialize;
use ts_rs::TS;

use super::entities::GradeOrdering;
use crate::models::common::PaginationQuery;

// 年级查询参数（来自HTTP请求）
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/grade.ts")]
pub struct GradeQueryParams {
    #[serde(flatten)]
    #[ts(flatten)]
    pub pagination: PaginationQuery,
    pub ordering: Option<GradeOrdering>,
    pub search: Option<String>,
}

// 创建年级请求
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/grade.ts")]
pub struct CreateGradeRequest {
    pub name: String,
    pub level: i32,
}

// 更新年级请求，未提供的字段保持不变
#[derive(Debug, Clone, Default, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/grade.ts")]
pub struct UpdateGradeRequest {
    pub name: Option<String>,
    pub level: Option<i32>,
}

// 年级列表查询参数（用于存储层）
#[derive(Debug, Clone, Default)]
pub struct GradeListQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub ordering: GradeOrdering,
    pub search: Option<String>,
}
