//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! [`documents::DocumentService`]가 애플리케이션의 공개 CRUD 표면입니다.
//! 서비스는 `web::Data`로 핸들러에 주입되고, 드라이버는 `Arc<dyn DocumentDriver>`로 주입됩니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::documents::DocumentService;
//!
//! let service = DocumentService::new(Arc::new(repository));
//! let order = service.get_by_id("orders", "507f1f77bcf86cd799439011", None).await?;
//! ```

pub mod documents;
