//! # MongoDB 문서 리포지토리 구현
//!
//! [`DocumentDriver`]의 MongoDB 구현입니다.
//! 모든 메서드는 세션을 얻고, 드라이버의 같은 이름 호출에 인자를 그대로 넘기고,
//! 세션을 반납하는 세 단계로만 이루어집니다.
//!
//! ## 연결 수명 주기
//!
//! - **상시 연결**: 공유 클라이언트 핸들을 빌려 쓰고 반납 시 아무 일도 하지 않음
//! - **호출마다 연결**: 새 클라이언트로 작업한 뒤 반납 시 종료
//!
//! 드라이버 호출이 실패해도 세션은 반납된 뒤 에러가 전파됩니다.

use std::future::Future;
use std::sync::Arc;

use async_trait::async_trait;
use futures_util::TryStreamExt;
use log::debug;
use mongodb::bson::Document;
use mongodb::Collection;

use crate::db::Database;
use crate::domain::documents::{DeleteOutcome, InsertManyOutcome, InsertOneOutcome, ReplaceOutcome};
use crate::errors::AppResult;
use crate::repositories::documents::DocumentDriver;

/// MongoDB 문서 리포지토리
///
/// 컬렉션 이름을 호출마다 받기 때문에 하나의 인스턴스로 모든 컬렉션을 다룹니다.
///
/// ```rust,ignore
/// let repo = MongoDocumentRepository::new(Arc::new(database));
///
/// repo.insert_one("orders", doc! { "number": 42 }).await?;
/// let open = repo
///     .find_many("orders", doc! { "status": "open" }, Some(doc! { "number": 1 }))
///     .await?;
/// ```
pub struct MongoDocumentRepository {
    db: Arc<Database>,
}

impl MongoDocumentRepository {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    /// 세션을 얻어 컬렉션 작업을 실행하고, 결과와 관계없이 세션을 반납합니다.
    async fn with_collection<T, F, Fut>(&self, name: &str, op: F) -> AppResult<T>
    where
        T: Send,
        F: FnOnce(Collection<Document>) -> Fut + Send,
        Fut: Future<Output = AppResult<T>> + Send,
    {
        let session = self.db.acquire().await?;
        let result = op(session.collection(name)).await;
        session.release().await;
        result
    }
}

#[async_trait]
impl DocumentDriver for MongoDocumentRepository {
    async fn find_one(
        &self,
        collection: &str,
        filter: Document,
        projection: Option<Document>,
    ) -> AppResult<Option<Document>> {
        debug!("findOne {} {}", collection, filter);

        self.with_collection(collection, |coll| async move {
            let mut action = coll.find_one(filter);
            if let Some(projection) = projection {
                action = action.projection(projection);
            }
            Ok(action.await?)
        })
        .await
    }

    async fn find_many(
        &self,
        collection: &str,
        filter: Document,
        projection: Option<Document>,
    ) -> AppResult<Vec<Document>> {
        debug!("find {} {}", collection, filter);

        self.with_collection(collection, |coll| async move {
            let mut action = coll.find(filter);
            if let Some(projection) = projection {
                action = action.projection(projection);
            }
            let cursor = action.await?;
            Ok(cursor.try_collect::<Vec<Document>>().await?)
        })
        .await
    }

    async fn insert_one(&self, collection: &str, document: Document) -> AppResult<InsertOneOutcome> {
        debug!("insertOne {}", collection);

        self.with_collection(collection, |coll| async move {
            let result = coll.insert_one(document).await?;
            Ok(InsertOneOutcome::from(result))
        })
        .await
    }

    async fn insert_many(
        &self,
        collection: &str,
        documents: Vec<Document>,
    ) -> AppResult<InsertManyOutcome> {
        debug!("insertMany {} ({} documents)", collection, documents.len());

        self.with_collection(collection, |coll| async move {
            let result = coll.insert_many(documents).await?;
            Ok(InsertManyOutcome::from(result))
        })
        .await
    }

    async fn delete_one(&self, collection: &str, filter: Document) -> AppResult<DeleteOutcome> {
        debug!("deleteOne {} {}", collection, filter);

        self.with_collection(collection, |coll| async move {
            let result = coll.delete_one(filter).await?;
            Ok(DeleteOutcome::from(result))
        })
        .await
    }

    async fn replace_one(
        &self,
        collection: &str,
        filter: Document,
        replacement: Document,
    ) -> AppResult<ReplaceOutcome> {
        debug!("replaceOne {} {}", collection, filter);

        self.with_collection(collection, |coll| async move {
            let result = coll.replace_one(filter, replacement).await?;
            Ok(ReplaceOutcome::from(result))
        })
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ConnectionMode, DatabaseConfig};
    use crate::errors::AppError;
    use mongodb::bson::doc;

    // 아무것도 listen하지 않는 포트라 서버 선택이 빠르게 실패함
    const UNREACHABLE: &str = "mongodb://127.0.0.1:1/app?serverSelectionTimeoutMS=200";

    async fn unreachable_repo() -> (MongoDocumentRepository, Arc<Database>) {
        let config = DatabaseConfig::from_url(UNREACHABLE).with_mode(ConnectionMode::PerCall);
        let database = Arc::new(Database::connect(config).await.unwrap());
        (MongoDocumentRepository::new(database.clone()), database)
    }

    #[actix_web::test]
    async fn test_driver_failure_is_database_error_and_session_released() {
        let (repo, database) = unreachable_repo().await;

        let result = repo.find_one("items", doc! {}, None).await;

        assert!(matches!(result, Err(AppError::DatabaseError(_))));
        assert_eq!(database.open_clients(), 0);
    }

    #[actix_web::test]
    async fn test_every_operation_releases_on_failure() {
        let (repo, database) = unreachable_repo().await;

        assert!(repo.find_many("items", doc! {}, Some(doc! { "name": 1 })).await.is_err());
        assert!(repo.insert_one("items", doc! { "name": "bolt" }).await.is_err());
        assert!(repo.insert_many("items", vec![doc! { "name": "nut" }]).await.is_err());
        assert!(repo.delete_one("items", doc! { "name": "bolt" }).await.is_err());
        assert!(repo
            .replace_one("items", doc! { "name": "bolt" }, doc! { "name": "gear" })
            .await
            .is_err());

        assert_eq!(database.open_clients(), 0);
    }
}
