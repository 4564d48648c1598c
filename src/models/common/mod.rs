pub mod pagination;
pub mod response;

pub use pagination::{MAX_PAGE_SIZE, PaginationInfo, PaginationQuery, normalize_page};
pub use response::ApiResponse;
