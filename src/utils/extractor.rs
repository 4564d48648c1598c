//! 路径参数提取器
//!
//! 将路径中的 ID 解析为正整数，失败时直接返回 400 统一响应。

use std::future::{Ready, ready};

use actix_web::error::InternalError;
use actix_web::{Error, FromRequest, HttpRequest, HttpResponse, dev::Payload};

use crate::models::{ApiResponse, ErrorCode};

fn parse_positive_id(req: &HttpRequest, name: &str) -> Result<i64, Error> {
    let raw = req.match_info().get(name).unwrap_or_default();

    match raw.parse::<i64>() {
        Ok(id) if id > 0 => Ok(id),
        _ => {
            let response = HttpResponse::BadRequest().json(ApiResponse::error_empty(
                ErrorCode::BadRequest,
                format!("Invalid {name}: {raw}"),
            ));
            Err(InternalError::from_response(format!("invalid {name}"), response).into())
        }
    }
}

/// `{grade_id}` 路径参数
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SafeGradeIdI64(pub i64);

impl FromRequest for SafeGradeIdI64 {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(parse_positive_id(req, "grade_id").map(SafeGradeIdI64))
    }
}
