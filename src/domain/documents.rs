//! 문서 식별자 헬퍼와 작업 결과 타입
//!
//! `_id` 필터 생성, 교체 전 `_id` 제거 같은 한 줄짜리 변환과
//! 드라이버 결과를 감싸는 결과 타입을 제공합니다.

use mongodb::bson::{doc, oid::ObjectId, Bson, Document};
use mongodb::results::{DeleteResult, InsertManyResult, InsertOneResult, UpdateResult};
use serde::Serialize;

use crate::errors::{AppError, AppResult};

/// 문서 식별자 필드 이름
pub const ID_FIELD: &str = "_id";

/// 24자리 16진수 문자열을 ObjectId로 파싱합니다.
///
/// # Errors
///
/// * `AppError::ValidationError` - ObjectId 형식이 아닌 경우
pub fn parse_object_id(id: &str) -> AppResult<ObjectId> {
    ObjectId::parse_str(id.trim())
        .map_err(|_| AppError::ValidationError(format!("유효하지 않은 ID 형식입니다: {}", id)))
}

/// `{ "_id": ObjectId(id) }` 필터를 만듭니다.
pub fn id_filter(id: &str) -> AppResult<Document> {
    Ok(doc! { "_id": parse_object_id(id)? })
}

/// 문서의 `_id` 값을 꺼냅니다.
pub fn document_id(document: &Document) -> Option<&Bson> {
    document.get(ID_FIELD)
}

/// `_id`를 제외한 얕은 복사본을 반환합니다. 원본은 그대로 둡니다.
pub fn strip_id(document: &Document) -> Document {
    document
        .iter()
        .filter(|(key, _)| key.as_str() != ID_FIELD)
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect()
}

/// `insert_one` 결과
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InsertOneOutcome {
    pub inserted_id: Bson,
}

impl From<InsertOneResult> for InsertOneOutcome {
    fn from(result: InsertOneResult) -> Self {
        Self { inserted_id: result.inserted_id }
    }
}

/// `insert_many` 결과. 식별자는 입력 순서대로 정렬됩니다.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InsertManyOutcome {
    pub inserted_ids: Vec<Bson>,
}

impl From<InsertManyResult> for InsertManyOutcome {
    fn from(result: InsertManyResult) -> Self {
        let mut indexed: Vec<(usize, Bson)> = result.inserted_ids.into_iter().collect();
        indexed.sort_by_key(|(index, _)| *index);

        Self {
            inserted_ids: indexed.into_iter().map(|(_, id)| id).collect(),
        }
    }
}

/// `delete_one` 결과
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DeleteOutcome {
    pub deleted_count: u64,
}

impl From<DeleteResult> for DeleteOutcome {
    fn from(result: DeleteResult) -> Self {
        Self { deleted_count: result.deleted_count }
    }
}

/// `replace_one` 결과
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReplaceOutcome {
    pub matched_count: u64,
    pub modified_count: u64,
    pub upserted_id: Option<Bson>,
}

impl From<UpdateResult> for ReplaceOutcome {
    fn from(result: UpdateResult) -> Self {
        Self {
            matched_count: result.matched_count,
            modified_count: result.modified_count,
            upserted_id: result.upserted_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEX_ID: &str = "507f1f77bcf86cd799439011";

    #[test]
    fn test_id_filter_uses_object_id() {
        let filter = id_filter(HEX_ID).unwrap();

        assert_eq!(filter, doc! { "_id": ObjectId::parse_str(HEX_ID).unwrap() });
    }

    #[test]
    fn test_id_filter_rejects_malformed_ids() {
        assert!(matches!(id_filter("not-an-id"), Err(AppError::ValidationError(_))));
        assert!(matches!(id_filter(""), Err(AppError::ValidationError(_))));
        assert!(matches!(id_filter("507f1f77bcf86cd79943901"), Err(AppError::ValidationError(_))));
    }

    #[test]
    fn test_strip_id_is_shallow_and_leaves_original() {
        let original = doc! {
            "_id": ObjectId::parse_str(HEX_ID).unwrap(),
            "name": "widget",
            "tags": ["a", "b"],
            "nested": { "_id": 7 },
        };

        let stripped = strip_id(&original);

        assert_eq!(stripped, doc! { "name": "widget", "tags": ["a", "b"], "nested": { "_id": 7 } });
        assert!(document_id(&original).is_some());
        assert_eq!(original.len(), 4);
    }

    #[test]
    fn test_strip_id_without_id_is_identity() {
        let original = doc! { "b": 2, "a": 1 };

        assert_eq!(strip_id(&original), original);
        assert_eq!(document_id(&original), None);
    }
}
