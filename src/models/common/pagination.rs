use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 分页查询参数
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/pagination.ts")]
pub struct PaginationQuery {
    #[serde(
        default = "default_page",
        deserialize_with = "deserialize_string_to_i64"
    )]
    pub page: i64,
    #[serde(
        default = "default_size",
        deserialize_with = "deserialize_string_to_i64"
    )]
    pub size: i64,
}

// 分页响应信息
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/pagination.ts")]
pub struct PaginationInfo {
    pub page: i64,
    pub page_size: i64,
    pub total: i64,
    pub total_pages: i64,
}

/// 单页最大条数
pub const MAX_PAGE_SIZE: i64 = 100;
/// 页码上限，保证 offset = size * (page - 1) 不溢出
pub const MAX_PAGE: i64 = i64::MAX / MAX_PAGE_SIZE;

/// 规范化分页参数，返回 (page, size)，page 从 1 开始
pub fn normalize_page(page: Option<i64>, size: Option<i64>) -> (u64, u64) {
    let page = page.unwrap_or(1).clamp(1, MAX_PAGE) as u64;
    let size = size.unwrap_or(default_size()).clamp(1, MAX_PAGE_SIZE) as u64;
    (page, size)
}

// 自定义反序列化函数，支持字符串到i64的转换
fn deserialize_string_to_i64<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::{Error, Unexpected, Visitor};
    use std::fmt;

    struct I64Visitor;

    impl<'de> Visitor<'de> for I64Visitor {
        type Value = i64;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("an integer or a string containing an integer")
        }

        fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E>
        where
            E: Error,
        {
            Ok(value)
        }

        fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E>
        where
            E: Error,
        {
            if value <= i64::MAX as u64 {
                Ok(value as i64)
            } else {
                Err(Error::invalid_value(Unexpected::Unsigned(value), &self))
            }
        }

        fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
        where
            E: Error,
        {
            value
                .parse()
                .map_err(|_| Error::invalid_value(Unexpected::Str(value), &self))
        }
    }

    deserializer.deserialize_any(I64Visitor)
}

fn default_page() -> i64 {
    1
}

fn default_size() -> i64 {
    10
}

impl Default for PaginationQuery {
    fn default() -> Self {
        Self { page: 1, size: 10 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize)]
    struct Wrapper {
        #[serde(flatten)]
        pagination: PaginationQuery,
    }

    #[test]
    fn test_query_string_numbers() {
        let parsed = actix_web::web::Query::<Wrapper>::from_query("page=3&size=25")
            .unwrap()
            .into_inner();
        assert_eq!(parsed.pagination.page, 3);
        assert_eq!(parsed.pagination.size, 25);
    }

    #[test]
    fn test_defaults_when_missing() {
        let parsed: Wrapper = serde_json::from_str("{}").unwrap();
        assert_eq!(parsed.pagination.page, 1);
        assert_eq!(parsed.pagination.size, 10);
    }

    #[test]
    fn test_normalize_page() {
        assert_eq!(normalize_page(None, None), (1, 10));
        assert_eq!(normalize_page(Some(0), Some(0)), (1, 1));
        assert_eq!(normalize_page(Some(-5), Some(1000)), (1, 100));
        assert_eq!(normalize_page(Some(4), Some(20)), (4, 20));
    }

    #[test]
    fn test_normalize_page_caps_huge_page() {
        let (page, size) = normalize_page(Some(i64::MAX), Some(MAX_PAGE_SIZE));
        assert_eq!(page, MAX_PAGE as u64);
        assert!((page - 1).checked_mul(size).is_some_and(|offset| offset <= i64::MAX as u64));
    }
}
