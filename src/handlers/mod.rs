//! # HTTP Request Handlers Module
//!
//! HTTP 요청을 처리하는 핸들러 함수들을 정의하는 모듈입니다.
//!
//! ```text
//! Handlers (이 모듈)   ← Web Layer
//!     │ web::Data<DocumentService>
//! Services             ← Service Layer
//!     │ Arc<dyn DocumentDriver>
//! Repositories         ← Repository Layer
//! ```
//!
//! 핸들러는 요청 DTO를 풀어 서비스에 넘기고, 결과를 JSON으로 돌려주는 일만 합니다.
//! 에러는 [`crate::errors::AppError`]가 HTTP 응답으로 변환합니다.

pub mod documents;
