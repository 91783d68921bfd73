//! 문서 게이트웨이
//!
//! MongoDB 컬렉션에 대한 얇은 CRUD façade입니다.
//! 조회, 삽입, 삭제, 교체와 ObjectId 기반 편의 메서드를 제공하며,
//! 같은 기능을 JSON HTTP API로도 노출합니다.
//!
//! # Features
//!
//! - **CRUD façade**: `find_one`, `find_many`, `insert_one`, `insert_many`,
//!   `delete_one`, `replace_one`, `get_by_id`, `delete_by_id`
//! - **연결 수명 주기**: 호출마다 연결 또는 상시 연결
//! - **설정**: 연결 URL, 호스트/포트/자격 증명 필드, JSON 설정 파일
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← REST API 엔드포인트
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청/응답 처리
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ DocumentService │ ← CRUD façade
//! └─────────────────┘
//!          │ DocumentDriver
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← 세션 획득/반납 + 드라이버 호출
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │     MongoDB     │
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use document_gateway::config::DatabaseConfig;
//! use document_gateway::db::Database;
//! use document_gateway::repositories::documents::MongoDocumentRepository;
//! use document_gateway::services::documents::DocumentService;
//!
//! let config = DatabaseConfig::from_url("mongodb://localhost:27017/inventory");
//! let database = Arc::new(Database::connect(config).await?);
//! let service = DocumentService::new(Arc::new(MongoDocumentRepository::new(database)));
//!
//! let created = service.insert_one("items", doc! { "name": "bolt" }).await?;
//! ```

pub mod config;
pub mod db;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod utils;
pub mod routes;
pub mod handlers;
pub mod errors;
