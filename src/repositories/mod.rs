//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! 서비스 계층은 [`documents::DocumentDriver`] trait에만 의존하며,
//! 실제 MongoDB 호출은 [`documents::MongoDocumentRepository`]가 담당합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use crate::repositories::documents::MongoDocumentRepository;
//!
//! let repo = MongoDocumentRepository::new(Arc::new(database));
//! let order = repo.find_one("orders", doc! { "number": 42 }, None).await?;
//! ```

pub mod documents;
