//! # Data Transfer Objects (DTO) Module
//!
//! API 경계에서 주고받는 요청/응답 객체입니다.
//! 입력 검증은 `validator` crate로 수행합니다.

pub mod documents;
