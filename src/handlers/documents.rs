//! # Document HTTP Handlers
//!
//! 문서 CRUD façade를 JSON으로 노출하는 핸들러 함수들입니다.
//! 모든 핸들러는 `/api/v1/collections/{collection}` 스코프 아래에 등록됩니다.
//!
//! | 메서드 | 경로 | 동작 | 상태 코드 |
//! |--------|------|------|-----------|
//! | `POST` | `/find-one` | 첫 매칭 문서 조회 | 200 / 404 |
//! | `POST` | `/find` | 매칭 문서 전체 조회 | 200 |
//! | `POST` | `/documents` | 단건 삽입 | 201 |
//! | `POST` | `/documents/batch` | 다건 삽입 | 201 |
//! | `POST` | `/delete-one` | 첫 매칭 문서 삭제 | 200 |
//! | `PUT` | `/documents` | 본문의 `_id`로 교체 | 200 |
//! | `GET` | `/documents/{id}` | ID로 조회 | 200 / 404 |
//! | `PUT` | `/documents/{id}` | ID로 교체 | 200 |
//! | `DELETE` | `/documents/{id}` | ID로 삭제 | 200 / 404 |
//!
//! ```bash
//! curl -X POST http://localhost:8080/api/v1/collections/orders/find \
//!   -H "Content-Type: application/json" \
//!   -d '{"filter": {"status": "open"}, "projection": {"number": 1}}'
//! ```

use actix_web::{delete, get, post, put, web, HttpResponse};
use validator::Validate;

use crate::domain::dto::documents::{
    DeleteRequest, DocumentListResponse, FindRequest, InsertManyRequest, InsertOneRequest,
    ProjectionQuery, ReplaceRequest,
};
use crate::errors::AppError;
use crate::services::documents::DocumentService;

#[post("/find-one")]
pub async fn find_one(
    service: web::Data<DocumentService>,
    collection: web::Path<String>,
    payload: web::Json<FindRequest>,
) -> Result<HttpResponse, AppError> {
    let FindRequest { filter, projection } = payload.into_inner();

    match service.find_one(&collection, filter, projection).await? {
        Some(document) => Ok(HttpResponse::Ok().json(document)),
        None => Err(AppError::NotFound(format!("{}: 매칭되는 문서가 없습니다", collection))),
    }
}

#[post("/find")]
pub async fn find_many(
    service: web::Data<DocumentService>,
    collection: web::Path<String>,
    payload: web::Json<FindRequest>,
) -> Result<HttpResponse, AppError> {
    let FindRequest { filter, projection } = payload.into_inner();
    let documents = service.find_many(&collection, filter, projection).await?;

    Ok(HttpResponse::Ok().json(DocumentListResponse::from(documents)))
}

#[post("/documents")]
pub async fn insert_one(
    service: web::Data<DocumentService>,
    collection: web::Path<String>,
    payload: web::Json<InsertOneRequest>,
) -> Result<HttpResponse, AppError> {
    let outcome = service
        .insert_one(&collection, payload.into_inner().document)
        .await?;

    Ok(HttpResponse::Created().json(outcome))
}

#[post("/documents/batch")]
pub async fn insert_many(
    service: web::Data<DocumentService>,
    collection: web::Path<String>,
    payload: web::Json<InsertManyRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()?;

    let outcome = service
        .insert_many(&collection, payload.into_inner().documents)
        .await?;

    Ok(HttpResponse::Created().json(outcome))
}

#[post("/delete-one")]
pub async fn delete_one(
    service: web::Data<DocumentService>,
    collection: web::Path<String>,
    payload: web::Json<DeleteRequest>,
) -> Result<HttpResponse, AppError> {
    let outcome = service
        .delete_one(&collection, payload.into_inner().filter)
        .await?;

    Ok(HttpResponse::Ok().json(outcome))
}

#[put("/documents")]
pub async fn replace_one(
    service: web::Data<DocumentService>,
    collection: web::Path<String>,
    payload: web::Json<ReplaceRequest>,
) -> Result<HttpResponse, AppError> {
    let outcome = service
        .replace_one(&collection, payload.into_inner().document)
        .await?;

    Ok(HttpResponse::Ok().json(outcome))
}

/// ID로 문서 조회
///
/// `?fields=name,price`로 반환 필드를 제한할 수 있습니다.
#[get("/documents/{id}")]
pub async fn get_by_id(
    service: web::Data<DocumentService>,
    path: web::Path<(String, String)>,
    query: web::Query<ProjectionQuery>,
) -> Result<HttpResponse, AppError> {
    let (collection, id) = path.into_inner();

    match service.get_by_id(&collection, &id, query.to_projection()).await? {
        Some(document) => Ok(HttpResponse::Ok().json(document)),
        None => Err(AppError::NotFound(format!("{}/{}", collection, id))),
    }
}

#[put("/documents/{id}")]
pub async fn replace_by_id(
    service: web::Data<DocumentService>,
    path: web::Path<(String, String)>,
    payload: web::Json<ReplaceRequest>,
) -> Result<HttpResponse, AppError> {
    let (collection, id) = path.into_inner();
    let outcome = service
        .replace_by_id(&collection, &id, payload.into_inner().document)
        .await?;

    Ok(HttpResponse::Ok().json(outcome))
}

/// ID로 문서 삭제
///
/// 삭제된 문서가 없으면 404를 반환합니다.
#[delete("/documents/{id}")]
pub async fn delete_by_id(
    service: web::Data<DocumentService>,
    path: web::Path<(String, String)>,
) -> Result<HttpResponse, AppError> {
    let (collection, id) = path.into_inner();
    let outcome = service.delete_by_id(&collection, &id).await?;

    if outcome.deleted_count == 0 {
        return Err(AppError::NotFound(format!("{}/{}", collection, id)));
    }

    Ok(HttpResponse::Ok().json(outcome))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use actix_web::http::StatusCode;
    use actix_web::{test, App};
    use mongodb::bson::{doc, oid::ObjectId};
    use serde_json::{json, Value};

    use crate::routes::configure_all_routes;
    use crate::services::documents::testing::{DriverCall, RecordingDriver};
    use crate::services::documents::DocumentService;
    use actix_web::web;

    const HEX_ID: &str = "507f1f77bcf86cd799439011";

    async fn send(driver: Arc<RecordingDriver>, request: test::TestRequest) -> (StatusCode, Value) {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(DocumentService::new(driver)))
                .configure(configure_all_routes),
        )
        .await;

        let response = test::call_service(&app, request.to_request()).await;
        let status = response.status();
        let body: Value = test::read_body_json(response).await;
        (status, body)
    }

    #[actix_web::test]
    async fn test_find_one_returns_document() {
        let driver = Arc::new(RecordingDriver::new().returning(vec![doc! { "name": "widget" }]));

        let (status, body) = send(
            driver.clone(),
            test::TestRequest::post()
                .uri("/api/v1/collections/items/find-one")
                .set_json(json!({ "filter": { "name": "widget" } })),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["name"], "widget");
        assert_eq!(
            driver.calls(),
            vec![DriverCall::FindOne {
                collection: "items".to_string(),
                filter: doc! { "name": "widget" },
                projection: None,
            }]
        );
    }

    #[actix_web::test]
    async fn test_find_one_missing_is_404() {
        let (status, body) = send(
            Arc::new(RecordingDriver::new()),
            test::TestRequest::post()
                .uri("/api/v1/collections/items/find-one")
                .set_json(json!({})),
        )
        .await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body["error"].as_str().unwrap().starts_with("Not found"));
    }

    #[actix_web::test]
    async fn test_find_many_wraps_documents() {
        let driver = Arc::new(
            RecordingDriver::new().returning(vec![doc! { "n": "a" }, doc! { "n": "b" }]),
        );

        let (status, body) = send(
            driver,
            test::TestRequest::post()
                .uri("/api/v1/collections/items/find")
                .set_json(json!({ "filter": {} })),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["count"], 2);
        assert_eq!(body["documents"][1]["n"], "b");
    }

    #[actix_web::test]
    async fn test_insert_one_is_created() {
        let driver = Arc::new(RecordingDriver::new());

        let (status, body) = send(
            driver.clone(),
            test::TestRequest::post()
                .uri("/api/v1/collections/items/documents")
                .set_json(json!({ "document": { "_id": "sku-1", "name": "bolt" } })),
        )
        .await;

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["inserted_id"], "sku-1");
        assert_eq!(driver.calls().len(), 1);
    }

    #[actix_web::test]
    async fn test_insert_many_rejects_empty_batch() {
        let driver = Arc::new(RecordingDriver::new());

        let (status, _) = send(
            driver.clone(),
            test::TestRequest::post()
                .uri("/api/v1/collections/items/documents/batch")
                .set_json(json!({ "documents": [] })),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(driver.calls().is_empty());
    }

    #[actix_web::test]
    async fn test_get_by_id_with_projection() {
        let driver = Arc::new(RecordingDriver::new().returning(vec![doc! { "name": "widget" }]));

        let (status, body) = send(
            driver.clone(),
            test::TestRequest::get()
                .uri(&format!("/api/v1/collections/items/documents/{}?fields=name", HEX_ID)),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["name"], "widget");
        assert_eq!(
            driver.calls(),
            vec![DriverCall::FindOne {
                collection: "items".to_string(),
                filter: doc! { "_id": ObjectId::parse_str(HEX_ID).unwrap() },
                projection: Some(doc! { "name": 1 }),
            }]
        );
    }

    #[actix_web::test]
    async fn test_get_by_id_malformed_id_is_400() {
        let (status, _) = send(
            Arc::new(RecordingDriver::new()),
            test::TestRequest::get().uri("/api/v1/collections/items/documents/xyz"),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_replace_by_id_strips_body_id() {
        let driver = Arc::new(RecordingDriver::new());

        let (status, body) = send(
            driver.clone(),
            test::TestRequest::put()
                .uri(&format!("/api/v1/collections/items/documents/{}", HEX_ID))
                .set_json(json!({ "document": { "_id": "ignored", "name": "gear" } })),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["matched_count"], 1);
        assert_eq!(
            driver.calls(),
            vec![DriverCall::ReplaceOne {
                collection: "items".to_string(),
                filter: doc! { "_id": ObjectId::parse_str(HEX_ID).unwrap() },
                replacement: doc! { "name": "gear" },
            }]
        );
    }

    #[actix_web::test]
    async fn test_replace_one_without_id_is_400() {
        let (status, _) = send(
            Arc::new(RecordingDriver::new()),
            test::TestRequest::put()
                .uri("/api/v1/collections/items/documents")
                .set_json(json!({ "document": { "name": "gear" } })),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_delete_by_id_missing_is_404() {
        let (status, _) = send(
            Arc::new(RecordingDriver::new().matching(0)),
            test::TestRequest::delete()
                .uri(&format!("/api/v1/collections/items/documents/{}", HEX_ID)),
        )
        .await;

        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn test_delete_one_reports_count() {
        let (status, body) = send(
            Arc::new(RecordingDriver::new()),
            test::TestRequest::post()
                .uri("/api/v1/collections/items/delete-one")
                .set_json(json!({ "filter": { "name": "gear" } })),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["deleted_count"], 1);
    }

    #[actix_web::test]
    async fn test_malformed_json_is_400_with_error_body() {
        let (status, body) = send(
            Arc::new(RecordingDriver::new()),
            test::TestRequest::post()
                .uri("/api/v1/collections/items/delete-one")
                .set_json(json!({ "nope": true })),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].as_str().is_some());
    }

    #[actix_web::test]
    async fn test_driver_failure_is_500() {
        let (status, body) = send(
            Arc::new(RecordingDriver::new().failing("boom")),
            test::TestRequest::post()
                .uri("/api/v1/collections/items/find")
                .set_json(json!({})),
        )
        .await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "Database error: boom");
    }
}
