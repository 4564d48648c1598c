use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::GradeService;
use crate::models::grades::requests::CreateGradeRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::utils::validate::{validate_grade_level, validate_grade_name};

pub async fn create_grade(
    service: &GradeService,
    request: &HttpRequest,
    grade_data: CreateGradeRequest,
) -> ActixResult<HttpResponse> {
    // 验证名称
    if let Err(e) = validate_grade_name(&grade_data.name) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::GradeNameInvalid, e.message())));
    }

    // 验证等级
    if let Err(e) = validate_grade_level(grade_data.level) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::GradeLevelInvalid, e.message())));
    }

    let storage = service.get_storage(request);

    match storage.create_grade(grade_data).await {
        Ok(grade) => {
            info!("Grade {} (level {}) created", grade, grade.level);
            Ok(HttpResponse::Created()
                .json(ApiResponse::success(grade, "Grade created successfully")))
        }
        Err(e) => {
            let msg = format!("Grade creation failed: {e}");
            error!("{}", msg);
            Ok(HttpResponse::InternalServerError()
                .json(ApiResponse::error_empty(ErrorCode::GradeCreationFailed, msg)))
        }
    }
}
