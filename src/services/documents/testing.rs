//! 호출을 기록하는 테스트용 드라이버

use std::sync::Mutex;

use async_trait::async_trait;
use mongodb::bson::{oid::ObjectId, Bson, Document};

use crate::domain::documents::{
    document_id, DeleteOutcome, InsertManyOutcome, InsertOneOutcome, ReplaceOutcome,
};
use crate::errors::{AppError, AppResult};
use crate::repositories::documents::DocumentDriver;

/// 드라이버가 받은 호출
#[derive(Debug, Clone, PartialEq)]
pub enum DriverCall {
    FindOne { collection: String, filter: Document, projection: Option<Document> },
    FindMany { collection: String, filter: Document, projection: Option<Document> },
    InsertOne { collection: String, document: Document },
    InsertMany { collection: String, documents: Vec<Document> },
    DeleteOne { collection: String, filter: Document },
    ReplaceOne { collection: String, filter: Document, replacement: Document },
}

/// 받은 호출을 기록하고 미리 정해 둔 결과를 돌려주는 드라이버
pub struct RecordingDriver {
    calls: Mutex<Vec<DriverCall>>,
    found: Vec<Document>,
    matched: u64,
    failure: Option<String>,
}

impl RecordingDriver {
    pub fn new() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            found: Vec::new(),
            matched: 1,
            failure: None,
        }
    }

    /// find 계열 호출이 돌려줄 문서
    pub fn returning(mut self, documents: Vec<Document>) -> Self {
        self.found = documents;
        self
    }

    /// delete/replace 호출이 보고할 매칭 건수
    pub fn matching(mut self, matched: u64) -> Self {
        self.matched = matched;
        self
    }

    /// 모든 호출을 `DatabaseError`로 실패시킵니다.
    pub fn failing(mut self, message: &str) -> Self {
        self.failure = Some(message.to_string());
        self
    }

    pub fn calls(&self) -> Vec<DriverCall> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: DriverCall) -> AppResult<()> {
        self.calls.lock().unwrap().push(call);
        match &self.failure {
            Some(message) => Err(AppError::DatabaseError(message.clone())),
            None => Ok(()),
        }
    }
}

fn assigned_id(document: &Document) -> Bson {
    document_id(document)
        .cloned()
        .unwrap_or_else(|| Bson::ObjectId(ObjectId::new()))
}

#[async_trait]
impl DocumentDriver for RecordingDriver {
    async fn find_one(
        &self,
        collection: &str,
        filter: Document,
        projection: Option<Document>,
    ) -> AppResult<Option<Document>> {
        self.record(DriverCall::FindOne { collection: collection.to_string(), filter, projection })?;
        Ok(self.found.first().cloned())
    }

    async fn find_many(
        &self,
        collection: &str,
        filter: Document,
        projection: Option<Document>,
    ) -> AppResult<Vec<Document>> {
        self.record(DriverCall::FindMany { collection: collection.to_string(), filter, projection })?;
        Ok(self.found.clone())
    }

    async fn insert_one(&self, collection: &str, document: Document) -> AppResult<InsertOneOutcome> {
        let inserted_id = assigned_id(&document);
        self.record(DriverCall::InsertOne { collection: collection.to_string(), document })?;
        Ok(InsertOneOutcome { inserted_id })
    }

    async fn insert_many(
        &self,
        collection: &str,
        documents: Vec<Document>,
    ) -> AppResult<InsertManyOutcome> {
        let inserted_ids = documents.iter().map(assigned_id).collect();
        self.record(DriverCall::InsertMany { collection: collection.to_string(), documents })?;
        Ok(InsertManyOutcome { inserted_ids })
    }

    async fn delete_one(&self, collection: &str, filter: Document) -> AppResult<DeleteOutcome> {
        self.record(DriverCall::DeleteOne { collection: collection.to_string(), filter })?;
        Ok(DeleteOutcome { deleted_count: self.matched })
    }

    async fn replace_one(
        &self,
        collection: &str,
        filter: Document,
        replacement: Document,
    ) -> AppResult<ReplaceOutcome> {
        self.record(DriverCall::ReplaceOne {
            collection: collection.to_string(),
            filter,
            replacement,
        })?;
        Ok(ReplaceOutcome {
            matched_count: self.matched,
            modified_count: self.matched,
            upserted_id: None,
        })
    }
}
