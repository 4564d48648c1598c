use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::models::grades::requests::{CreateGradeRequest, GradeQueryParams, UpdateGradeRequest};
use crate::services::GradeService;
use crate::utils::SafeGradeIdI64;

// 懒加载的全局 GRADE_SERVICE 实例
static GRADE_SERVICE: Lazy<GradeService> = Lazy::new(GradeService::new_lazy);

// HTTP处理程序
pub async fn list_grades(
    req: HttpRequest,
    query: web::Query<GradeQueryParams>,
) -> ActixResult<HttpResponse> {
    GRADE_SERVICE.list_grades(&req, query.into_inner()).await
}

pub async fn create_grade(
    req: HttpRequest,
    grade_data: web::Json<CreateGradeRequest>,
) -> ActixResult<HttpResponse> {
    GRADE_SERVICE
        .create_grade(&req, grade_data.into_inner())
        .await
}

pub async fn get_grade(req: HttpRequest, grade_id: SafeGradeIdI64) -> ActixResult<HttpResponse> {
    GRADE_SERVICE.get_grade(&req, grade_id.0).await
}

pub async fn update_grade(
    req: HttpRequest,
    grade_id: SafeGradeIdI64,
    update_data: web::Json<UpdateGradeRequest>,
) -> ActixResult<HttpResponse> {
    GRADE_SERVICE
        .update_grade(&req, grade_id.0, update_data.into_inner())
        .await
}

pub async fn delete_grade(req: HttpRequest, grade_id: SafeGradeIdI64) -> ActixResult<HttpResponse> {
    GRADE_SERVICE.delete_grade(&req, grade_id.0).await
}

// 配置路由
pub fn configure_grades_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/grades")
            .service(
                web::resource("")
                    .route(web::get().to(list_grades))
                    .route(web::post().to(create_grade)),
            )
            .service(
                web::resource("/{grade_id}")
                    .route(web::get().to(get_grade))
                    .route(web::put().to(update_grade))
                    .route(web::delete().to(delete_grade)),
            ),
    );
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use actix_web::{App, http::StatusCode, test};
    use serde_json::{Value, json};

    use super::*;
    use crate::models::ErrorCode;
    use crate::models::grades::entities::GradeOrdering;
    use crate::storage::Storage;
    use crate::storage::sea_orm_storage::test_support::memory_storage;
    use crate::utils::{json_error_handler, query_error_handler};

    macro_rules! grade_app {
        ($ordering:expr) => {{
            let storage: Arc<dyn Storage> = Arc::new(memory_storage().await);
            test::init_service(
                App::new()
                    .app_data(web::QueryConfig::default().error_handler(query_error_handler))
                    .app_data(web::JsonConfig::default().error_handler(json_error_handler))
                    .app_data(web::Data::new(storage))
                    .app_data(web::Data::new($ordering))
                    .configure(configure_grades_routes),
            )
            .await
        }};
    }

    macro_rules! post_grade {
        ($app:expr, $body:expr) => {{
            let req = test::TestRequest::post()
                .uri("/api/v1/grades")
                .set_json($body)
                .to_request();
            let resp = test::call_service(&$app, req).await;
            let status = resp.status();
            let body: Value = test::read_body_json(resp).await;
            (status, body)
        }};
    }

    #[actix_web::test]
    async fn test_create_valid_grade() {
        let app = grade_app!(GradeOrdering::Level);

        let (status, body) = post_grade!(app, json!({ "name": "5", "level": 5 }));
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["code"], 0);
        assert_eq!(body["data"]["name"], "5");
        assert_eq!(body["data"]["level"], 5);
    }

    #[actix_web::test]
    async fn test_create_rejects_out_of_range_level() {
        let app = grade_app!(GradeOrdering::Level);

        for level in [-2, 13] {
            let (status, body) = post_grade!(app, json!({ "name": "X", "level": level }));
            assert_eq!(status, StatusCode::BAD_REQUEST);
            assert_eq!(body["code"], ErrorCode::GradeLevelInvalid as i32);
        }

        let list = test::TestRequest::get().uri("/api/v1/grades").to_request();
        let body: Value = test::call_and_read_body_json(&app, list).await;
        assert_eq!(body["data"]["pagination"]["total"], 0);
    }

    #[actix_web::test]
    async fn test_create_rejects_long_name() {
        let app = grade_app!(GradeOrdering::Level);

        let (status, body) = post_grade!(app, json!({ "name": "123", "level": 3 }));
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], ErrorCode::GradeNameInvalid as i32);
    }

    #[actix_web::test]
    async fn test_malformed_json_uses_api_envelope() {
        let app = grade_app!(GradeOrdering::Level);

        let (status, body) = post_grade!(app, json!({ "name": "5" }));
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], ErrorCode::BadRequest as i32);
    }

    #[actix_web::test]
    async fn test_list_uses_configured_and_requested_ordering() {
        let app = grade_app!(GradeOrdering::Name);
        for (name, level) in [("2", 2), ("K", 0), ("12", 12), ("PK", -1)] {
            let (status, _) = post_grade!(app, json!({ "name": name, "level": level }));
            assert_eq!(status, StatusCode::CREATED);
        }

        let req = test::TestRequest::get().uri("/api/v1/grades").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        let names: Vec<&str> = body["data"]["items"]
            .as_array()
            .unwrap()
            .iter()
            .map(|g| g["name"].as_str().unwrap())
            .collect();
        assert_eq!(names, vec!["12", "2", "K", "PK"]);

        let req = test::TestRequest::get()
            .uri("/api/v1/grades?ordering=level&page=1&size=10")
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        let levels: Vec<i64> = body["data"]["items"]
            .as_array()
            .unwrap()
            .iter()
            .map(|g| g["level"].as_i64().unwrap())
            .collect();
        assert_eq!(levels, vec![-1, 0, 2, 12]);
    }

    #[actix_web::test]
    async fn test_invalid_ordering_is_bad_request() {
        let app = grade_app!(GradeOrdering::Level);

        let req = test::TestRequest::get()
            .uri("/api/v1/grades?ordering=age")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_get_update_delete() {
        let app = grade_app!(GradeOrdering::Level);
        let (_, body) = post_grade!(app, json!({ "name": "K", "level": 0 }));
        let id = body["data"]["id"].as_i64().unwrap();
        let uri = format!("/api/v1/grades/{id}");

        let req = test::TestRequest::get().uri(&uri).to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["data"]["name"], "K");

        let req = test::TestRequest::put()
            .uri(&uri)
            .set_json(json!({ "level": 13 }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let req = test::TestRequest::put()
            .uri(&uri)
            .set_json(json!({ "name": "PK", "level": -1 }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["name"], "PK");
        assert_eq!(body["data"]["level"], -1);

        let req = test::TestRequest::delete().uri(&uri).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let req = test::TestRequest::get().uri(&uri).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["code"], ErrorCode::GradeNotFound as i32);
    }

    #[actix_web::test]
    async fn test_update_rejects_invalid_name() {
        let app = grade_app!(GradeOrdering::Level);
        let (_, body) = post_grade!(app, json!({ "name": "1", "level": 1 }));
        let id = body["data"]["id"].as_i64().unwrap();
        let uri = format!("/api/v1/grades/{id}");

        for name in ["123", ""] {
            let req = test::TestRequest::put()
                .uri(&uri)
                .set_json(json!({ "name": name }))
                .to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "name {name:?}");
            let body: Value = test::read_body_json(resp).await;
            assert_eq!(body["code"], ErrorCode::GradeNameInvalid as i32);
        }

        let req = test::TestRequest::get().uri(&uri).to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["data"]["name"], "1");
    }

    #[actix_web::test]
    async fn test_create_rejects_empty_name() {
        let app = grade_app!(GradeOrdering::Level);

        let (status, body) = post_grade!(app, json!({ "name": "", "level": 0 }));
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], ErrorCode::GradeNameInvalid as i32);
    }

    #[actix_web::test]
    async fn test_update_missing_grade_is_not_found() {
        let app = grade_app!(GradeOrdering::Level);

        let req = test::TestRequest::put()
            .uri("/api/v1/grades/4242")
            .set_json(json!({ "level": 4 }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["code"], ErrorCode::GradeNotFound as i32);
    }

    #[actix_web::test]
    async fn test_list_with_huge_page() {
        let app = grade_app!(GradeOrdering::Level);
        post_grade!(app, json!({ "name": "K", "level": 0 }));

        let req = test::TestRequest::get()
            .uri("/api/v1/grades?page=9223372036854775807")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["items"].as_array().map(Vec::len), Some(0));
    }

    #[actix_web::test]
    async fn test_invalid_grade_id() {
        let app = grade_app!(GradeOrdering::Level);

        let req = test::TestRequest::get().uri("/api/v1/grades/abc").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }
}
