use crate::config::AppConfig;
use crate::models::grades::entities::GradeOrdering;
use crate::models::grades::requests::CreateGradeRequest;
use crate::storage::Storage;
use std::sync::Arc;
use tracing::{debug, info, warn};

pub struct StartupContext {
    pub storage: Arc<dyn Storage>,
    pub default_ordering: GradeOrdering,
}

/// 标准年级：PK(-1)、K(0)、1..12
fn default_grade_requests() -> Vec<CreateGradeRequest> {
    let mut grades = vec![
        CreateGradeRequest {
            name: "PK".to_string(),
            level: -1,
        },
        CreateGradeRequest {
            name: "K".to_string(),
            level: 0,
        },
    ];
    grades.extend((1..=12).map(|level| CreateGradeRequest {
        name: level.to_string(),
        level,
    }));
    grades
}

/// 初始化默认年级
/// 如果数据库中没有任何年级，则写入标准年级，返回写入数量
pub(crate) async fn seed_default_grades(storage: &Arc<dyn Storage>) -> usize {
    match storage.count_grades().await {
        Ok(count) if count > 0 => {
            debug!(
                "Database already has {} grade(s), skipping grade seed",
                count
            );
            return 0;
        }
        Ok(_) => {
            info!("No grades found in database, creating default grades...");
        }
        Err(e) => {
            warn!("Failed to count grades: {}, skipping grade seed", e);
            return 0;
        }
    }

    let mut created = 0;
    for request in default_grade_requests() {
        let name = request.name.clone();
        match storage.create_grade(request).await {
            Ok(_) => created += 1,
            Err(e) => warn!("Failed to create default grade {}: {}", name, e),
        }
    }

    info!("Default grades created: {}", created);
    created
}

/// 准备服务器启动的上下文
/// 包括存储、迁移和默认数据
pub async fn prepare_server_startup() -> StartupContext {
    let config = AppConfig::get();

    let storage = crate::storage::create_storage()
        .await
        .expect("Failed to create storage backend");
    warn!("Storage backend initialized and migrations completed");

    // 初始化默认年级（如果需要）
    if config.grades.seed_defaults {
        seed_default_grades(&storage).await;
    }

    debug!(
        "Default grade ordering: {:?}",
        config.grades.default_ordering
    );

    StartupContext {
        storage,
        default_ordering: config.grades.default_ordering,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::grades::entities::{GRADE_LEVEL_MAX, GRADE_LEVEL_MIN};
    use crate::models::grades::requests::GradeListQuery;
    use crate::storage::sea_orm_storage::test_support::memory_storage;
    use crate::utils::validate::{validate_grade_level, validate_grade_name};

    #[test]
    fn test_default_grades_are_valid() {
        let grades = default_grade_requests();
        assert_eq!(grades.len(), 14);
        assert_eq!(grades.first().map(|g| g.level), Some(GRADE_LEVEL_MIN));
        assert_eq!(grades.last().map(|g| g.level), Some(GRADE_LEVEL_MAX));
        for grade in &grades {
            assert!(validate_grade_name(&grade.name).is_ok());
            assert!(validate_grade_level(grade.level).is_ok());
        }
    }

    #[tokio::test]
    async fn test_seed_only_into_empty_table() {
        let storage: Arc<dyn Storage> = Arc::new(memory_storage().await);

        assert_eq!(seed_default_grades(&storage).await, 14);
        assert_eq!(seed_default_grades(&storage).await, 0);

        let listed = storage
            .list_grades_with_pagination(GradeListQuery {
                size: Some(100),
                ..Default::default()
            })
            .await
            .unwrap();
        let names: Vec<String> = listed.items.iter().map(ToString::to_string).collect();
        assert_eq!(names[..3], ["PK", "K", "1"]);
        assert_eq!(names.last().map(String::as_str), Some("12"));
    }
}
