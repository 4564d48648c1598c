use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::GradeService;
use crate::models::{ApiResponse, ErrorCode, grades::requests::UpdateGradeRequest};
use crate::utils::validate::{validate_grade_level, validate_grade_name};

pub async fn update_grade(
    service: &GradeService,
    request: &HttpRequest,
    grade_id: i64,
    update_data: UpdateGradeRequest,
) -> ActixResult<HttpResponse> {
    // 只校验提供的字段
    if let Some(name) = &update_data.name
        && let Err(e) = validate_grade_name(name)
    {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::GradeNameInvalid, e.message())));
    }

    if let Some(level) = update_data.level
        && let Err(e) = validate_grade_level(level)
    {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::GradeLevelInvalid, e.message())));
    }

    let storage = service.get_storage(request);

    match storage.update_grade(grade_id, update_data).await {
        Ok(Some(grade)) => {
            info!("Grade {} updated: {} (level {})", grade_id, grade, grade.level);
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                grade,
                "Grade information updated successfully",
            )))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::GradeNotFound,
            "Grade not found",
        ))),
        Err(e) => {
            let msg = format!("Grade update failed: {e}");
            error!("{}", msg);
            Ok(HttpResponse::InternalServerError()
                .json(ApiResponse::error_empty(ErrorCode::GradeUpdateFailed, msg)))
        }
    }
}
