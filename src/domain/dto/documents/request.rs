//! 문서 API 요청 DTO
//!
//! 필터, 프로젝션, 문서 본문은 모두 BSON 문서로 그대로 역직렬화되어
//! 서비스 계층에 전달됩니다.

use mongodb::bson::{Bson, Document};
use serde::Deserialize;
use validator::Validate;

/// `find-one`, `find` 요청
///
/// `filter`를 생략하면 빈 필터(전체 매칭)가 사용됩니다.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FindRequest {
    #[serde(default)]
    pub filter: Document,

    #[serde(default)]
    pub projection: Option<Document>,
}

/// 단건 조회 시 선택적 프로젝션
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProjectionQuery {
    /// 쉼표로 구분된 포함 필드 목록 (예: `?fields=name,price`)
    pub fields: Option<String>,
}

impl ProjectionQuery {
    /// `fields` 목록을 `{ field: 1, ... }` 프로젝션으로 바꿉니다.
    pub fn to_projection(&self) -> Option<Document> {
        let projection: Document = self
            .fields
            .as_deref()?
            .split(',')
            .map(str::trim)
            .filter(|field| !field.is_empty())
            .map(|field| (field.to_string(), Bson::Int32(1)))
            .collect();

        if projection.is_empty() { None } else { Some(projection) }
    }
}

/// 단건 삽입 요청
#[derive(Debug, Clone, Deserialize)]
pub struct InsertOneRequest {
    pub document: Document,
}

/// 다건 삽입 요청
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct InsertManyRequest {
    #[validate(length(min = 1, message = "삽입할 문서가 최소 1개 필요합니다"))]
    pub documents: Vec<Document>,
}

/// 단건 삭제 요청
///
/// 빈 필터로 임의의 문서가 지워지지 않도록 `filter`는 생략할 수 없습니다.
#[derive(Debug, Clone, Deserialize)]
pub struct DeleteRequest {
    pub filter: Document,
}

/// 교체 요청
#[derive(Debug, Clone, Deserialize)]
pub struct ReplaceRequest {
    pub document: Document,
}
