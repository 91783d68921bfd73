//! 드라이버 호출 추상화

use async_trait::async_trait;
use mongodb::bson::Document;

use crate::domain::documents::{DeleteOutcome, InsertManyOutcome, InsertOneOutcome, ReplaceOutcome};
use crate::errors::AppResult;

/// 문서 데이터베이스 드라이버의 CRUD 호출
///
/// 각 메서드는 드라이버의 같은 이름 호출과 일대일로 대응하며,
/// 인자를 가공하지 않고 그대로 전달해야 합니다.
#[async_trait]
pub trait DocumentDriver: Send + Sync {
    async fn find_one(
        &self,
        collection: &str,
        filter: Document,
        projection: Option<Document>,
    ) -> AppResult<Option<Document>>;

    async fn find_many(
        &self,
        collection: &str,
        filter: Document,
        projection: Option<Document>,
    ) -> AppResult<Vec<Document>>;

    async fn insert_one(&self, collection: &str, document: Document) -> AppResult<InsertOneOutcome>;

    async fn insert_many(
        &self,
        collection: &str,
        documents: Vec<Document>,
    ) -> AppResult<InsertManyOutcome>;

    async fn delete_one(&self, collection: &str, filter: Document) -> AppResult<DeleteOutcome>;

    async fn replace_one(
        &self,
        collection: &str,
        filter: Document,
        replacement: Document,
    ) -> AppResult<ReplaceOutcome>;
}
