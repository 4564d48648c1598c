use std::sync::Arc;

use crate::models::grades::{
    entities::Grade,
    requests::{CreateGradeRequest, GradeListQuery, UpdateGradeRequest},
    responses::GradeListResponse,
};

use crate::errors::Result;

pub mod sea_orm_storage;

/// 持久化协作者：只负责读写，字段校验由服务层完成
#[async_trait::async_trait]
pub trait Storage: Send + Sync {
    /// 年级管理方法
    // 创建年级
    async fn create_grade(&self, grade: CreateGradeRequest) -> Result<Grade>;
    // 通过ID获取年级
    async fn get_grade_by_id(&self, grade_id: i64) -> Result<Option<Grade>>;
    // 列出年级
    async fn list_grades_with_pagination(
        &self,
        query: GradeListQuery,
    ) -> Result<GradeListResponse>;
    // 更新年级
    async fn update_grade(
        &self,
        grade_id: i64,
        update: UpdateGradeRequest,
    ) -> Result<Option<Grade>>;
    // 删除年级
    async fn delete_grade(&self, grade_id: i64) -> Result<bool>;
    // 统计年级数量
    async fn count_grades(&self) -> Result<u64>;
}

pub async fn create_storage() -> Result<Arc<dyn Storage>> {
    let storage = sea_orm_storage::SeaOrmStorage::new_async().await?;
    Ok(Arc::new(storage))
}
