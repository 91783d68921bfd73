//! # 문서 CRUD façade
//!
//! 드라이버의 CRUD 호출을 그대로 노출하고, 식별자 기반 편의 메서드
//! (`get_by_id`, `delete_by_id`, `replace_by_id`)를 더합니다.
//!
//! ## 처리 흐름
//!
//! ```text
//! DocumentService::get_by_id("orders", "507f...")
//!   ├─ validate_collection_name("orders")
//!   ├─ id_filter("507f...")         → { _id: ObjectId("507f...") }
//!   └─ driver.find_one("orders", { _id: ... }, projection)
//! ```
//!
//! 서비스는 결과를 가공하지 않습니다. 드라이버의 성공 값과 에러가 그대로 전달됩니다.

use std::sync::Arc;

use log::info;
use mongodb::bson::{doc, Document};

use crate::domain::documents::{
    document_id, id_filter, strip_id, DeleteOutcome, InsertManyOutcome, InsertOneOutcome,
    ReplaceOutcome,
};
use crate::errors::{AppError, AppResult};
use crate::repositories::documents::DocumentDriver;
use crate::utils::string_utils::validate_collection_name;

/// 문서 CRUD 서비스
///
/// 드라이버 구현에 무관하게 동작하도록 `Arc<dyn DocumentDriver>`를 받습니다.
/// 운영에서는 [`MongoDocumentRepository`](crate::repositories::documents::MongoDocumentRepository)가,
/// 테스트에서는 호출을 기록하는 가짜 드라이버가 주입됩니다.
///
/// ## 사용 예제
///
/// ```rust,ignore
/// let service = DocumentService::new(Arc::new(MongoDocumentRepository::new(db)));
///
/// let created = service.insert_one("orders", doc! { "number": 42 }).await?;
/// let order = service.find_one("orders", doc! { "number": 42 }, None).await?;
/// service.delete_by_id("orders", "507f1f77bcf86cd799439011").await?;
/// ```
#[derive(Clone)]
pub struct DocumentService {
    driver: Arc<dyn DocumentDriver>,
}

impl DocumentService {
    pub fn new(driver: Arc<dyn DocumentDriver>) -> Self {
        Self { driver }
    }

    /// 필터에 맞는 첫 문서를 조회합니다.
    ///
    /// # 반환값
    ///
    /// * `Ok(Some(Document))` - 문서를 찾은 경우
    /// * `Ok(None)` - 매칭되는 문서가 없는 경우
    /// * `Err(AppError::ValidationError)` - 잘못된 컬렉션 이름
    /// * `Err(AppError::DatabaseError)` - 드라이버 에러
    pub async fn find_one(
        &self,
        collection: &str,
        filter: Document,
        projection: Option<Document>,
    ) -> AppResult<Option<Document>> {
        let collection = validate_collection_name(collection)?;
        self.driver.find_one(&collection, filter, projection).await
    }

    /// 필터에 맞는 모든 문서를 조회합니다.
    pub async fn find_many(
        &self,
        collection: &str,
        filter: Document,
        projection: Option<Document>,
    ) -> AppResult<Vec<Document>> {
        let collection = validate_collection_name(collection)?;
        self.driver.find_many(&collection, filter, projection).await
    }

    /// 문서 하나를 삽입합니다.
    pub async fn insert_one(&self, collection: &str, document: Document) -> AppResult<InsertOneOutcome> {
        let collection = validate_collection_name(collection)?;
        self.driver.insert_one(&collection, document).await
    }

    /// 문서 여러 개를 삽입합니다.
    ///
    /// 빈 목록은 드라이버가 거부하므로 호출 전에 `ValidationError`로 돌려보냅니다.
    pub async fn insert_many(
        &self,
        collection: &str,
        documents: Vec<Document>,
    ) -> AppResult<InsertManyOutcome> {
        let collection = validate_collection_name(collection)?;

        if documents.is_empty() {
            return Err(AppError::ValidationError(
                "삽입할 문서가 최소 1개 필요합니다".to_string(),
            ));
        }

        self.driver.insert_many(&collection, documents).await
    }

    /// 필터에 맞는 첫 문서를 삭제합니다.
    pub async fn delete_one(&self, collection: &str, filter: Document) -> AppResult<DeleteOutcome> {
        let collection = validate_collection_name(collection)?;
        let outcome = self.driver.delete_one(&collection, filter).await?;

        info!("🗑️ {} 문서 삭제: {}건", collection, outcome.deleted_count);
        Ok(outcome)
    }

    /// 문서를 `_id` 기준으로 교체합니다.
    ///
    /// 필터는 `{ _id: document._id }`이고, 교체 내용은 `_id`를 뺀 얕은 복사본입니다.
    ///
    /// # Errors
    ///
    /// * `AppError::ValidationError` - 문서에 `_id`가 없는 경우
    pub async fn replace_one(&self, collection: &str, document: Document) -> AppResult<ReplaceOutcome> {
        let collection = validate_collection_name(collection)?;

        let id = document_id(&document).cloned().ok_or_else(|| {
            AppError::ValidationError("교체할 문서에 _id 필드가 없습니다".to_string())
        })?;

        self.driver
            .replace_one(&collection, doc! { "_id": id }, strip_id(&document))
            .await
    }

    /// 주어진 ID의 문서를 교체합니다. 본문에 `_id`가 있어도 무시됩니다.
    pub async fn replace_by_id(
        &self,
        collection: &str,
        id: &str,
        document: Document,
    ) -> AppResult<ReplaceOutcome> {
        let collection = validate_collection_name(collection)?;
        let filter = id_filter(id)?;

        self.driver
            .replace_one(&collection, filter, strip_id(&document))
            .await
    }

    /// ObjectId 문자열로 문서를 조회합니다.
    pub async fn get_by_id(
        &self,
        collection: &str,
        id: &str,
        projection: Option<Document>,
    ) -> AppResult<Option<Document>> {
        let filter = id_filter(id)?;
        self.find_one(collection, filter, projection).await
    }

    /// ObjectId 문자열로 문서를 삭제합니다.
    pub async fn delete_by_id(&self, collection: &str, id: &str) -> AppResult<DeleteOutcome> {
        let filter = id_filter(id)?;
        self.delete_one(collection, filter).await
    }
}
