//! 문서 컬렉션 리포지토리
//!
//! [`DocumentDriver`]는 드라이버 호출 단위를 정의하는 trait이고,
//! [`MongoDocumentRepository`]는 그 MongoDB 구현입니다.

pub mod driver;
pub mod document_repo;

pub use driver::DocumentDriver;
pub use document_repo::MongoDocumentRepository;
