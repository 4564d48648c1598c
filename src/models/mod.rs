pub mod common;
pub mod grades;

pub use common::{ApiResponse, PaginationInfo, PaginationQuery};

/// 应用启动时间
#[derive(Debug, Clone)]
pub struct AppStartTime {
    pub start_datetime: chrono::DateTime<chrono::Utc>,
}

/// API 业务错误码
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ErrorCode {
    Success = 0,

    // 通用错误
    BadRequest = 1000,
    InternalServerError = 1005,

    // 年级相关错误
    GradeNotFound = 3000,
    GradeNameInvalid = 3001,
    GradeLevelInvalid = 3002,
    GradeCreationFailed = 3003,
    GradeUpdateFailed = 3004,
    GradeDeleteFailed = 3005,
}
