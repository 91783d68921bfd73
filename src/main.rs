//! 문서 게이트웨이 메인 애플리케이션
//!
//! 설정을 읽어 MongoDB 연결을 준비하고, 문서 CRUD API를 제공하는
//! Actix-web HTTP 서버를 구동합니다.

use std::io;
use std::sync::Arc;

use actix_cors::Cors;
use actix_governor::{Governor, GovernorConfigBuilder};
use actix_web::http::header;
use actix_web::{middleware, web, App, HttpServer};
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info};

use document_gateway::config::{CorsConfig, DatabaseConfig, Environment, RateLimitConfig, ServerConfig};
use document_gateway::db::Database;
use document_gateway::repositories::documents::MongoDocumentRepository;
use document_gateway::routes::configure_all_routes;
use document_gateway::services::documents::DocumentService;
use document_gateway::utils::display_terminal::{
    print_boxed_title, print_startup_summary, print_step_complete, print_step_start, StartupSummary,
};

#[actix_web::main]
async fn main() -> io::Result<()> {
    // 환경 설정 및 로깅 초기화
    load_env_file();
    init_logging();

    print_boxed_title("DOCUMENT GATEWAY");
    info!("🚀 문서 게이트웨이 시작중... ({})", Environment::current().as_str());

    let (database, connection) = initialize_database().await?;
    let service = DocumentService::new(Arc::new(MongoDocumentRepository::new(database.clone())));

    let bind_address = ServerConfig::bind_address();
    print_startup_summary(&StartupSummary {
        connection: &connection,
        database: database.database_name(),
        mode: database.mode().as_str(),
        bind_address: &bind_address,
    });

    let result = start_http_server(service, &bind_address).await;

    database.close().await;
    info!("👋 문서 게이트웨이 종료");

    result
}

/// 설정을 읽고 데이터베이스 연결을 준비합니다
///
/// 설정 누락이나 연결 실패는 `io::Error`로 바꿔 프로세스를 종료시킵니다.
/// 자격 증명을 가린 연결 문자열을 함께 반환합니다.
async fn initialize_database() -> io::Result<(Arc<Database>, String)> {
    print_step_start(1, "Loading database configuration");
    let config = DatabaseConfig::from_env().map_err(|e| {
        error!("❌ 데이터베이스 설정 로드 실패: {}", e);
        io::Error::new(io::ErrorKind::InvalidInput, e.to_string())
    })?;
    print_step_complete(1, "Database configuration loaded");

    print_step_start(2, "Connecting to MongoDB");
    let connection = config.redacted_connection_string();
    info!("📡 데이터베이스 연결 중... {}", connection);

    let database = Database::connect(config).await.map_err(|e| {
        error!("❌ 데이터베이스 연결 실패: {}", e);
        io::Error::new(io::ErrorKind::ConnectionRefused, e.to_string())
    })?;

    print_step_complete(2, "MongoDB ready");
    Ok((Arc::new(database), connection))
}

/// HTTP 서버를 구성하고 실행합니다
///
/// CORS, 요청 빈도 제한, 로깅, 경로 정규화 미들웨어를 포함합니다.
///
/// # Errors
///
/// * `std::io::Error` - 포트 바인딩 실패 또는 서버 실행 오류
async fn start_http_server(service: DocumentService, bind_address: &str) -> io::Result<()> {
    info!("🌐 서버가 http://{} 에서 실행중입니다", bind_address);
    info!("📍 Health check: http://{}/health", bind_address);
    info!("📍 API: http://{}/api/v1/collections/{{collection}}", bind_address);

    let rate_limit_config = RateLimitConfig::from_env();
    let governor_conf = GovernorConfigBuilder::default()
        .requests_per_second(rate_limit_config.per_second)
        .burst_size(rate_limit_config.burst_size)
        .use_headers()
        .finish()
        .ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                "rate limit values must be greater than zero",
            )
        })?;

    info!(
        "🛡️ Rate Limiting 활성화: 초당 {}요청, 버스트 {}개",
        rate_limit_config.per_second, rate_limit_config.burst_size
    );

    let cors_config = CorsConfig::from_env();
    let service = web::Data::new(service);

    HttpServer::new(move || {
        App::new()
            // Rate Limiting 미들웨어 (가장 먼저 적용)
            .wrap(Governor::new(&governor_conf))
            .wrap(configure_cors(&cors_config))
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())
            .app_data(service.clone())
            .configure(configure_all_routes)
    })
    .bind(bind_address)?
    .run()
    .await
}

/// 환경별 설정 파일을 로드합니다
///
/// * `PROFILE=dev` - .env.dev 파일 로드 (기본값)
/// * `PROFILE=prod` - .env.prod 파일 로드
/// * 기타 - 기본 .env 파일 로드
fn load_env_file() {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());

    let loaded = match profile.as_str() {
        "prod" => dotenv::from_filename(".env.prod").map(|_| ".env.prod"),
        "dev" => dotenv::from_filename(".env.dev").map(|_| ".env.dev"),
        _ => dotenv().map(|_| ".env"),
    };

    // 로거 초기화 전이라 결과는 표준 출력으로 남김
    match loaded {
        Ok(file) => println!("Current profile: {} ({} 로드 됨)", profile, file),
        Err(e) => eprintln!("Current profile: {} (환경 파일 로드 실패: {})", profile, e),
    }
}

/// 로깅 시스템을 초기화합니다
///
/// * `RUST_LOG` - 로깅 레벨 설정 (기본값: "info,actix_web=info")
///
/// ```bash
/// RUST_LOG=document_gateway::repositories=debug cargo run
/// ```
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=info"));
}

/// CORS 설정을 구성합니다
fn configure_cors(config: &CorsConfig) -> Cors {
    let cors = config
        .allowed_origins
        .iter()
        .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin));

    cors.allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "OPTIONS"])
        .allowed_headers(vec![header::ACCEPT, header::CONTENT_TYPE])
        .max_age(3600)
}
