//! 데이터베이스 연결 설정 모듈
//!
//! MongoDB 연결 대상(URL 또는 구조화된 host/port/계정 필드)과
//! 연결 수명 주기 방식(호출마다 연결 / 상시 연결)을 관리합니다.
//!
//! ## 설정 파일 형식
//!
//! ```json
//! { "url": "mongodb://localhost:27017/documents", "mode": "persistent" }
//! ```
//!
//! ```json
//! {
//!   "host": "db.internal",
//!   "port": 27017,
//!   "user": "gateway",
//!   "password": "secret",
//!   "database": "documents",
//!   "auth_source": "admin",
//!   "mode": "per_call"
//! }
//! ```

use std::env;
use std::fs;
use std::path::Path;

use log::info;
use serde::Deserialize;
use validator::Validate;

use crate::errors::{AppError, AppResult};
use crate::utils::string_utils::{
    clean_optional_string, deserialize_non_empty_string, deserialize_optional_string, non_empty_string,
};

/// 아무 설정도 없을 때 사용하는 연결 URL
pub const DEFAULT_MONGODB_URI: &str = "mongodb://localhost:27017";

/// 설정과 연결 URL 어디에도 데이터베이스 이름이 없을 때 사용하는 이름
pub const DEFAULT_DATABASE_NAME: &str = "test";

/// MongoDB 서버에 보고되는 기본 애플리케이션 이름
pub const DEFAULT_APP_NAME: &str = "document_gateway";

/// 연결 수명 주기 방식
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConnectionMode {
    /// 작업마다 새 클라이언트를 열고 작업이 끝나면 닫습니다.
    PerCall,
    /// 프로세스 전체에서 하나의 클라이언트를 공유합니다.
    #[default]
    Persistent,
}

impl ConnectionMode {
    /// 문자열에서 연결 방식을 파싱합니다. 대소문자는 구분하지 않습니다.
    ///
    /// # Errors
    ///
    /// * `AppError::ConfigError` - 알 수 없는 값
    pub fn parse(value: &str) -> AppResult<Self> {
        match value.trim().to_lowercase().as_str() {
            "per_call" | "per-call" | "percall" => Ok(ConnectionMode::PerCall),
            "persistent" | "shared" => Ok(ConnectionMode::Persistent),
            other => Err(AppError::ConfigError(format!(
                "unknown connection mode: {}",
                other
            ))),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ConnectionMode::PerCall => "per_call",
            ConnectionMode::Persistent => "persistent",
        }
    }
}

/// 구조화된 연결 필드
///
/// 연결 URL을 직접 받는 대신 host/port/계정 정보를 따로 받아
/// [`ConnectionFields::connection_string`]으로 URL을 조립합니다.
#[derive(Debug, Clone, PartialEq, Validate)]
pub struct ConnectionFields {
    #[validate(length(min = 1, message = "host must not be empty"))]
    pub host: String,

    #[validate(range(min = 1, message = "port must be between 1 and 65535"))]
    pub port: u16,

    pub user: Option<String>,

    pub password: Option<String>,

    #[validate(length(min = 1, message = "database must not be empty"))]
    pub database: String,

    pub auth_source: Option<String>,
}

impl ConnectionFields {
    /// `mongodb://[user[:password]@]host:port/database[?authSource=..]` 형태의 URL을 만듭니다.
    ///
    /// 계정 정보와 authSource는 퍼센트 인코딩됩니다.
    /// 비밀번호는 사용자 이름이 있을 때만 포함됩니다.
    pub fn connection_string(&self) -> String {
        self.build(self.password.as_deref().map(|p| urlencoding::encode(p).into_owned()))
    }

    /// 비밀번호를 가린 URL (로그 출력용)
    pub fn redacted_connection_string(&self) -> String {
        self.build(self.password.as_ref().map(|_| "****".to_string()))
    }

    fn build(&self, password: Option<String>) -> String {
        let mut uri = String::from("mongodb://");

        if let Some(user) = &self.user {
            uri.push_str(&urlencoding::encode(user));
            if let Some(password) = password {
                uri.push(':');
                uri.push_str(&password);
            }
            uri.push('@');
        }

        // IPv6 리터럴은 대괄호로 감싸야 포트와 구분됨
        if self.host.contains(':') && !self.host.starts_with('[') {
            uri.push_str(&format!("[{}]:{}/{}", self.host, self.port, self.database));
        } else {
            uri.push_str(&format!("{}:{}/{}", self.host, self.port, self.database));
        }

        if let Some(source) = &self.auth_source {
            uri.push_str("?authSource=");
            uri.push_str(&urlencoding::encode(source));
        }

        uri
    }
}

/// 연결 대상
#[derive(Debug, Clone, PartialEq)]
pub enum ConnectionTarget {
    /// 완성된 연결 URL
    Url(String),
    /// 구조화된 필드
    Fields(ConnectionFields),
}

/// 데이터베이스 연결 설정
///
/// ## 사용 예제
///
/// ```rust,ignore
/// use crate::config::{ConnectionMode, DatabaseConfig};
///
/// let config = DatabaseConfig::from_url("mongodb://localhost:27017")
///     .with_database("documents")
///     .with_mode(ConnectionMode::PerCall);
///
/// let database = Database::connect(config).await?;
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct DatabaseConfig {
    pub target: ConnectionTarget,
    /// 명시적으로 지정한 데이터베이스 이름
    pub database: Option<String>,
    pub mode: ConnectionMode,
    pub app_name: String,
}

impl DatabaseConfig {
    /// 연결 URL로 설정을 만듭니다.
    pub fn from_url(url: impl Into<String>) -> Self {
        Self {
            target: ConnectionTarget::Url(url.into()),
            database: None,
            mode: ConnectionMode::default(),
            app_name: DEFAULT_APP_NAME.to_string(),
        }
    }

    /// 구조화된 필드로 설정을 만듭니다.
    ///
    /// # Errors
    ///
    /// * `AppError::ConfigError` - 필드 검증 실패 (빈 host/database, 0번 포트)
    pub fn from_fields(fields: ConnectionFields) -> AppResult<Self> {
        fields
            .validate()
            .map_err(|e| AppError::ConfigError(e.to_string()))?;

        Ok(Self {
            target: ConnectionTarget::Fields(fields),
            database: None,
            mode: ConnectionMode::default(),
            app_name: DEFAULT_APP_NAME.to_string(),
        })
    }

    pub fn with_database(mut self, database: impl Into<String>) -> Self {
        self.database = Some(database.into());
        self
    }

    pub fn with_mode(mut self, mode: ConnectionMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_app_name(mut self, app_name: impl Into<String>) -> Self {
        self.app_name = app_name.into();
        self
    }

    /// 드라이버에 넘길 연결 URL
    pub fn connection_string(&self) -> String {
        match &self.target {
            ConnectionTarget::Url(url) => url.clone(),
            ConnectionTarget::Fields(fields) => fields.connection_string(),
        }
    }

    /// 계정 정보를 가린 연결 URL
    pub fn redacted_connection_string(&self) -> String {
        match &self.target {
            ConnectionTarget::Url(url) => redact_credentials(url),
            ConnectionTarget::Fields(fields) => fields.redacted_connection_string(),
        }
    }

    /// 사용할 데이터베이스 이름
    ///
    /// 명시적인 이름이 우선이고, 그다음 구조화된 필드의 database입니다.
    /// `None`이면 연결 URL의 기본 데이터베이스, 그마저 없으면
    /// [`DEFAULT_DATABASE_NAME`]을 사용합니다.
    pub fn database_name(&self) -> Option<&str> {
        self.database.as_deref().or(match &self.target {
            ConnectionTarget::Fields(fields) => Some(fields.database.as_str()),
            ConnectionTarget::Url(_) => None,
        })
    }

    /// JSON 문자열에서 설정을 읽습니다.
    ///
    /// `url`이 있으면 URL 방식, 없으면 `host`, `port`, `database`가 모두 필요합니다.
    pub fn from_json_str(json: &str) -> AppResult<Self> {
        let raw: RawDatabaseConfig = serde_json::from_str(json)
            .map_err(|e| AppError::ConfigError(format!("invalid database config: {}", e)))?;

        raw.into_config()
    }

    /// JSON 설정 파일을 읽습니다.
    pub fn from_file(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|e| {
            AppError::ConfigError(format!("failed to read {}: {}", path.display(), e))
        })?;

        info!("데이터베이스 설정 파일 로드: {}", path.display());
        Self::from_json_str(&contents)
    }

    /// 프로세스 환경 변수에서 설정을 읽습니다.
    pub fn from_env() -> AppResult<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// 키 조회 함수로 설정을 구성합니다.
    ///
    /// 우선순위: `DATABASE_CONFIG_FILE` → `DB_HOST`가 있으면 구조화된 필드 →
    /// `MONGODB_URI` (없으면 [`DEFAULT_MONGODB_URI`]).
    /// `DB_CONNECTION_MODE`, `DB_APP_NAME`은 파일 설정 위에 덮어씁니다.
    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| clean_optional_string(lookup(key));
        // 계정 정보는 공백도 값의 일부
        let get_raw = |key: &str| non_empty_string(lookup(key));

        let mut config = if let Some(path) = get("DATABASE_CONFIG_FILE") {
            Self::from_file(path)?
        } else if get("DB_HOST").is_some() {
            let port = match get("DB_PORT") {
                Some(raw) => Some(raw.parse::<u16>().map_err(|e| {
                    AppError::ConfigError(format!("invalid DB_PORT '{}': {}", raw, e))
                })?),
                None => None,
            };

            RawDatabaseConfig {
                host: get("DB_HOST"),
                port,
                user: get_raw("DB_USER"),
                password: get_raw("DB_PASSWORD"),
                database: get("DB_NAME"),
                auth_source: get("DB_AUTH_SOURCE"),
                ..Default::default()
            }
            .into_config()?
        } else {
            let url = get("MONGODB_URI").unwrap_or_else(|| DEFAULT_MONGODB_URI.to_string());
            let config = Self::from_url(url);
            match get("DATABASE_NAME") {
                Some(name) => config.with_database(name),
                None => config,
            }
        };

        if let Some(mode) = get("DB_CONNECTION_MODE") {
            config = config.with_mode(ConnectionMode::parse(&mode)?);
        }
        if let Some(app_name) = get("DB_APP_NAME") {
            config = config.with_app_name(app_name);
        }

        Ok(config)
    }
}

/// 설정 파일/환경 변수의 원본 형태
#[derive(Debug, Default, Deserialize)]
struct RawDatabaseConfig {
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    url: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    host: Option<String>,
    #[serde(default)]
    port: Option<u16>,
    #[serde(default, deserialize_with = "deserialize_non_empty_string")]
    user: Option<String>,
    #[serde(default, deserialize_with = "deserialize_non_empty_string")]
    password: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    database: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    auth_source: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    mode: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    app_name: Option<String>,
}

impl RawDatabaseConfig {
    fn into_config(self) -> AppResult<DatabaseConfig> {
        let mode = match self.mode.as_deref() {
            Some(mode) => ConnectionMode::parse(mode)?,
            None => ConnectionMode::default(),
        };

        let mut config = match self.url {
            Some(url) => {
                let config = DatabaseConfig::from_url(url);
                match self.database {
                    Some(name) => config.with_database(name),
                    None => config,
                }
            }
            None => DatabaseConfig::from_fields(ConnectionFields {
                host: self.host.ok_or_else(|| missing_field("host"))?,
                port: self.port.ok_or_else(|| missing_field("port"))?,
                user: self.user,
                password: self.password,
                database: self.database.ok_or_else(|| missing_field("database"))?,
                auth_source: self.auth_source,
            })?,
        };

        config = config.with_mode(mode);
        if let Some(app_name) = self.app_name {
            config = config.with_app_name(app_name);
        }

        Ok(config)
    }
}

fn missing_field(field: &str) -> AppError {
    AppError::ConfigError(format!("missing required field: {}", field))
}

/// URL의 `user:password@` 부분을 `****@`로 바꿉니다.
fn redact_credentials(uri: &str) -> String {
    let Some(scheme_end) = uri.find("://") else {
        return uri.to_string();
    };

    let (scheme, rest) = uri.split_at(scheme_end + 3);
    let authority_end = rest.find(|c: char| c == '/' || c == '?').unwrap_or(rest.len());

    match rest[..authority_end].rfind('@') {
        Some(at) => format!("{}****@{}", scheme, &rest[at + 1..]),
        None => uri.to_string(),
    }
}
