//! 공통 유틸리티 함수 모듈
//!
//! # Modules
//!
//! - [`string_utils`] - 문자열 검증, 정리, 컬렉션 이름 검사
//! - [`display_terminal`] - 서버 시작 시 터미널 출력
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::utils::string_utils::validate_collection_name;
//! use crate::utils::display_terminal::print_boxed_title;
//!
//! let collection = validate_collection_name(" orders ")?;
//! print_boxed_title("DOCUMENT GATEWAY");
//! ```

pub mod string_utils;
pub mod display_terminal;
