//! # Domain Layer Module
//!
//! ```text
//! Domain Layer (이 모듈)
//! ├── documents  - `_id` 처리와 작업 결과 타입
//! └── dto        - HTTP 요청/응답 객체
//! ```
//!
//! 문서 자체는 스키마가 없으므로 엔티티 대신 `bson::Document`를 그대로 사용합니다.

pub mod documents;
pub mod dto;
