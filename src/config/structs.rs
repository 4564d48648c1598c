use serde::{Deserialize, Serialize};

use crate::models::grades::entities::GradeOrdering;

/// 应用配置结构体
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub app: AppSettings,
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub cors: CorsConfig,
    #[serde(default)]
    pub grades: GradesConfig,
}

/// 应用设置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppSettings {
    pub system_name: String,
    pub environment: String,
    pub log_level: String,
}

/// 服务器配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub unix_socket_path: String,
    pub workers: usize,
    pub max_workers: usize,
    pub timeouts: TimeoutConfig,
    pub limits: LimitConfig,
}

/// 超时配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimeoutConfig {
    pub client_request: u64,
    pub client_disconnect: u64,
    pub keep_alive: u64,
}

/// 限制配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LimitConfig {
    pub max_payload_size: usize,
}

/// 数据库配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,    // 数据库连接 URL（从 scheme 自动推断类型）
    pub pool_size: u32, // 连接池大小
    pub timeout: u64,   // 连接超时 (秒)
}

/// CORS 配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
    pub max_age: usize,
}

/// 年级配置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GradesConfig {
    /// 列表未指定排序时使用的默认排序
    pub default_ordering: GradeOrdering,
    /// 空表时是否写入 PK/K/1..12 默认年级
    pub seed_defaults: bool,
}

impl Default for GradesConfig {
    fn default() -> Self {
        Self {
            default_ordering: GradeOrdering::Level,
            seed_defaults: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grades_config_partial_table() {
        let config: GradesConfig =
            serde_json::from_str(r#"{"default_ordering":"name"}"#).unwrap();
        assert_eq!(config.default_ordering, GradeOrdering::Name);
        assert!(config.seed_defaults);

        let config: GradesConfig = serde_json::from_str(r#"{"seed_defaults":false}"#).unwrap();
        assert_eq!(config.default_ordering, GradeOrdering::Level);
        assert!(!config.seed_defaults);
    }
}
