//! 年级存储操作

use super::SeaOrmStorage;
use crate::entity::grades::{ActiveModel, Column, Entity as Grades};
use crate::errors::{AccountsError, Result};
use crate::models::{
    PaginationInfo,
    common::normalize_page,
    grades::{
        entities::{Grade, GradeOrdering},
        requests::{CreateGradeRequest, GradeListQuery, UpdateGradeRequest},
        responses::GradeListResponse,
    },
};
use crate::utils::escape_like_pattern;
use sea_orm::sea_query::LikeExpr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    Select, Set,
};

impl SeaOrmStorage {
    /// 创建年级
    pub async fn create_grade_impl(&self, req: CreateGradeRequest) -> Result<Grade> {
        let model = ActiveModel {
            name: Set(req.name),
            level: Set(req.level),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| AccountsError::database_operation(format!("创建年级失败: {e}")))?;

        Ok(result.into_grade())
    }

    /// 通过 ID 获取年级
    pub async fn get_grade_by_id_impl(&self, grade_id: i64) -> Result<Option<Grade>> {
        let result = Grades::find_by_id(grade_id)
            .one(&self.db)
            .await
            .map_err(|e| AccountsError::database_operation(format!("查询年级失败: {e}")))?;

        Ok(result.map(|m| m.into_grade()))
    }

    /// 分页列出年级
    pub async fn list_grades_with_pagination_impl(
        &self,
        query: GradeListQuery,
    ) -> Result<GradeListResponse> {
        let (page, size) = normalize_page(query.page, query.size);

        let mut select = Grades::find();

        // 名称搜索
        if let Some(ref search) = query.search
            && !search.trim().is_empty()
        {
            let pattern = format!("%{}%", escape_like_pattern(search.trim()));
            select = select.filter(Column::Name.like(LikeExpr::new(pattern).escape('\\')));
        }

        select = apply_ordering(select, query.ordering);

        // 分页查询
        let paginator = select.paginate(&self.db, size);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| AccountsError::database_operation(format!("查询年级总数失败: {e}")))?;

        let pages = paginator
            .num_pages()
            .await
            .map_err(|e| AccountsError::database_operation(format!("查询年级页数失败: {e}")))?;

        let grades = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| AccountsError::database_operation(format!("查询年级列表失败: {e}")))?;

        Ok(GradeListResponse {
            items: grades.into_iter().map(|m| m.into_grade()).collect(),
            pagination: PaginationInfo {
                page: page as i64,
                page_size: size as i64,
                total: total as i64,
                total_pages: pages as i64,
            },
        })
    }

    /// 更新年级
    pub async fn update_grade_impl(
        &self,
        grade_id: i64,
        update: UpdateGradeRequest,
    ) -> Result<Option<Grade>> {
        // 未提供任何字段时直接返回当前记录
        if update.name.is_none() && update.level.is_none() {
            return self.get_grade_by_id_impl(grade_id).await;
        }

        let mut model = ActiveModel {
            id: Set(grade_id),
            ..Default::default()
        };

        if let Some(name) = update.name {
            model.name = Set(name);
        }

        if let Some(level) = update.level {
            model.level = Set(level);
        }

        // 记录不存在（或已被并发删除）时返回 None
        match model.update(&self.db).await {
            Ok(updated) => Ok(Some(updated.into_grade())),
            Err(DbErr::RecordNotUpdated) => Ok(None),
            Err(e) => Err(AccountsError::database_operation(format!(
                "更新年级失败: {e}"
            ))),
        }
    }

    /// 删除年级
    pub async fn delete_grade_impl(&self, grade_id: i64) -> Result<bool> {
        let result = Grades::delete_by_id(grade_id)
            .exec(&self.db)
            .await
            .map_err(|e| AccountsError::database_operation(format!("删除年级失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    /// 统计年级数量
    pub async fn count_grades_impl(&self) -> Result<u64> {
        Grades::find()
            .count(&self.db)
            .await
            .map_err(|e| AccountsError::database_operation(format!("统计年级数量失败: {e}")))
    }
}

/// 排序，id 作为最后的稳定键
fn apply_ordering(select: Select<Grades>, ordering: GradeOrdering) -> Select<Grades> {
    match ordering {
        GradeOrdering::Level => select
            .order_by_asc(Column::Level)
            .order_by_asc(Column::Name)
            .order_by_asc(Column::Id),
        GradeOrdering::Name => select.order_by_asc(Column::Name).order_by_asc(Column::Id),
    }
}
