//! 문서 API 응답 DTO

use mongodb::bson::Document;
use serde::Serialize;

/// `find` 응답
#[derive(Debug, Clone, Serialize)]
pub struct DocumentListResponse {
    pub count: usize,
    pub documents: Vec<Document>,
}

impl From<Vec<Document>> for DocumentListResponse {
    fn from(documents: Vec<Document>) -> Self {
        Self {
            count: documents.len(),
            documents,
        }
    }
}
