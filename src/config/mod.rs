//! # Configuration Module
//!
//! 게이트웨이의 설정 관리를 담당하는 모듈입니다.
//! 환경 변수와 JSON 설정 파일에서 값을 읽어 타입이 있는 구조체로 만듭니다.
//!
//! ## 모듈 구성
//!
//! - [`data_config`] - 서버 바인딩, 실행 환경, Rate Limiting 설정
//! - [`database_config`] - MongoDB 연결 대상과 연결 수명 주기 설정
//!
//! ## 환경 변수 설정 가이드
//!
//! ```bash
//! # 1) 설정 파일 (가장 우선)
//! export DATABASE_CONFIG_FILE="config/database.json"
//!
//! # 2) 구조화된 필드 (DB_HOST가 있으면 이 방식을 사용하며 host/port/name은 필수)
//! export DB_HOST="localhost"
//! export DB_PORT="27017"
//! export DB_USER="gateway"
//! export DB_PASSWORD="secret"
//! export DB_NAME="documents"
//! export DB_AUTH_SOURCE="admin"
//!
//! # 3) 연결 URL (기본값: mongodb://localhost:27017)
//! export MONGODB_URI="mongodb://localhost:27017/documents"
//! export DATABASE_NAME="documents"
//!
//! # 공통
//! export DB_CONNECTION_MODE="persistent"   # persistent | per_call
//! export DB_APP_NAME="document_gateway"
//! ```

pub mod data_config;
pub mod database_config;

pub use data_config::*;
pub use database_config::*;
