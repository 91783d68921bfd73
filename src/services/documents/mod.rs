//! 문서 CRUD 서비스 모듈
//!
//! [`DocumentService`]는 드라이버 호출 앞에 컬렉션 이름 검증,
//! 식별자 필터 생성, `_id` 제거만 덧붙인 얇은 façade입니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::documents::DocumentService;
//!
//! let service = DocumentService::new(Arc::new(repo));
//! let order = service.get_by_id("orders", "507f1f77bcf86cd799439011", None).await?;
//! ```

pub mod document_service;

#[cfg(test)]
pub(crate) mod testing;

pub use document_service::DocumentService;
