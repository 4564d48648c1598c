use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::GradeService;
use crate::models::{
    ApiResponse, ErrorCode,
    grades::requests::{GradeListQuery, GradeQueryParams},
};

pub async fn list_grades(
    service: &GradeService,
    request: &HttpRequest,
    query: GradeQueryParams,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let list_query = GradeListQuery {
        page: Some(query.pagination.page),
        size: Some(query.pagination.size),
        ordering: query
            .ordering
            .unwrap_or_else(|| service.default_ordering(request)),
        search: query.search,
    };

    match storage.list_grades_with_pagination(list_query).await {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            response,
            "Grade list retrieved successfully",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to retrieve grade list: {e}"),
            )),
        ),
    }
}
