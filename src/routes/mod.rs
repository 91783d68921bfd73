//! API 라우트 설정 모듈
//!
//! 문서 CRUD 엔드포인트와 헬스체크 엔드포인트를 등록합니다.
//! 컬렉션 이름은 경로 세그먼트로 받기 때문에 컬렉션마다 라우트를 따로 만들 필요가 없습니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use actix_web::{web, App};
//!
//! let app = App::new()
//!     .app_data(web::Data::new(document_service))
//!     .configure(configure_all_routes);
//! ```

use actix_web::{error, web, HttpResponse};
use serde_json::json;

use crate::errors::AppError;
use crate::handlers;

/// 모든 라우트를 설정합니다
///
/// JSON 본문 파싱 실패도 [`AppError::ValidationError`]로 바꿔
/// 다른 에러와 같은 `{"error": ...}` 형태로 응답합니다.
pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(
        web::JsonConfig::default().error_handler(|err, _req| {
            error::Error::from(AppError::ValidationError(err.to_string()))
        }),
    );
    cfg.app_data(
        web::QueryConfig::default().error_handler(|err, _req| {
            error::Error::from(AppError::ValidationError(err.to_string()))
        }),
    );

    // Health check endpoint
    cfg.service(health_check);

    configure_document_routes(cfg);
}

/// 문서 관련 라우트를 설정합니다
///
/// # Available Routes
///
/// - `POST /api/v1/collections/{collection}/find-one`
/// - `POST /api/v1/collections/{collection}/find`
/// - `POST /api/v1/collections/{collection}/documents`
/// - `POST /api/v1/collections/{collection}/documents/batch`
/// - `POST /api/v1/collections/{collection}/delete-one`
/// - `PUT /api/v1/collections/{collection}/documents`
/// - `GET /api/v1/collections/{collection}/documents/{id}`
/// - `PUT /api/v1/collections/{collection}/documents/{id}`
/// - `DELETE /api/v1/collections/{collection}/documents/{id}`
///
/// # Examples
///
/// ```bash
/// curl -X POST http://localhost:8080/api/v1/collections/orders/documents \
///   -H "Content-Type: application/json" \
///   -d '{"document": {"number": 42, "status": "open"}}'
/// ```
fn configure_document_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/collections/{collection}")
            .service(handlers::documents::find_one)
            .service(handlers::documents::find_many)
            // batch가 documents보다 먼저 와야 함
            .service(handlers::documents::insert_many)
            .service(handlers::documents::insert_one)
            .service(handlers::documents::delete_one)
            .service(handlers::documents::replace_one)
            .service(handlers::documents::get_by_id)
            .service(handlers::documents::replace_by_id)
            .service(handlers::documents::delete_by_id),
    );
}

/// 서비스 상태를 확인하는 헬스체크 엔드포인트
///
/// ```bash
/// curl http://localhost:8080/health
/// ```
///
/// Response:
/// ```json
/// {
///   "status": "healthy",
///   "service": "document_gateway",
///   "version": "0.1.0",
///   "timestamp": "2026-01-01T00:00:00Z"
/// }
/// ```
#[actix_web::get("/health")]
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "features": {
            "database": "MongoDB"
        }
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{test, App};

    #[actix_web::test]
    async fn test_health_check() {
        let app = test::init_service(App::new().configure(configure_all_routes)).await;

        let request = test::TestRequest::get().uri("/health").to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, request).await;

        assert_eq!(body["status"], "healthy");
        assert_eq!(body["service"], "document_gateway");
    }
}
