pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use std::sync::Arc;

use crate::models::grades::entities::GradeOrdering;
use crate::models::grades::requests::{CreateGradeRequest, GradeQueryParams, UpdateGradeRequest};
use crate::storage::Storage;

pub struct GradeService {
    storage: Option<Arc<dyn Storage>>,
}

impl GradeService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        if let Some(storage) = &self.storage {
            storage.clone()
        } else {
            request
                .app_data::<web::Data<Arc<dyn Storage>>>()
                .expect("Storage not found in app data")
                .get_ref()
                .clone()
        }
    }

    // 未在 app data 中配置时按等级排序
    pub(crate) fn default_ordering(&self, request: &HttpRequest) -> GradeOrdering {
        request
            .app_data::<web::Data<GradeOrdering>>()
            .map(|ordering| *ordering.get_ref())
            .unwrap_or_default()
    }

    // 获取年级列表
    pub async fn list_grades(
        &self,
        request: &HttpRequest,
        query: GradeQueryParams,
    ) -> ActixResult<HttpResponse> {
        list::list_grades(self, request, query).await
    }

    // 创建年级
    pub async fn create_grade(
        &self,
        request: &HttpRequest,
        grade_data: CreateGradeRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_grade(self, request, grade_data).await
    }

    // 根据年级 ID 获取年级信息
    pub async fn get_grade(
        &self,
        request: &HttpRequest,
        grade_id: i64,
    ) -> ActixResult<HttpResponse> {
        get::get_grade(self, request, grade_id).await
    }

    // 更新年级信息
    pub async fn update_grade(
        &self,
        request: &HttpRequest,
        grade_id: i64,
        update_data: UpdateGradeRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_grade(self, request, grade_id, update_data).await
    }

    // 根据年级 ID 删除年级
    pub async fn delete_grade(
        &self,
        request: &HttpRequest,
        grade_id: i64,
    ) -> ActixResult<HttpResponse> {
        delete::delete_grade(self, request, grade_id).await
    }
}
