//! Database Connection Management Module
//!
//! MongoDB 연결 수명 주기를 담당하는 모듈입니다.
//! 두 가지 방식을 지원합니다.
//!
//! - [`ConnectionMode::Persistent`]: 시작 시 클라이언트 하나를 만들고 ping으로 검증한 뒤
//!   모든 작업이 그 클라이언트를 공유합니다.
//! - [`ConnectionMode::PerCall`]: 작업마다 새 클라이언트를 열고, 작업이 끝나면
//!   성공/실패와 관계없이 닫습니다.
//!
//! # 기본 사용법
//!
//! ```rust,ignore
//! use crate::config::DatabaseConfig;
//! use crate::db::Database;
//!
//! let database = Database::connect(DatabaseConfig::from_env()?).await?;
//!
//! let session = database.acquire().await?;
//! let orders = session.collection("orders");
//! let count = orders.count_documents(doc! {}).await;
//! session.release().await;
//! ```

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use log::{debug, info, warn};
use mongodb::bson::{doc, Document};
use mongodb::options::ClientOptions;
use mongodb::{Client, Collection};

use crate::config::{ConnectionMode, DatabaseConfig, DEFAULT_DATABASE_NAME};
use crate::errors::AppResult;

/// MongoDB 연결 관리자
///
/// 연결 옵션은 [`Database::connect`]에서 한 번만 파싱되고,
/// 호출마다 연결하는 방식에서도 재사용됩니다.
pub struct Database {
    options: ClientOptions,
    database_name: String,
    mode: ConnectionMode,
    /// 상시 연결 방식일 때만 존재하는 공유 클라이언트
    shared: Option<Client>,
    /// 아직 반납되지 않은 호출별 클라이언트 수
    open_clients: Arc<AtomicUsize>,
}

impl Database {
    /// 설정으로 연결 관리자를 만듭니다.
    ///
    /// 데이터베이스 이름은 설정, 연결 URL, [`DEFAULT_DATABASE_NAME`] 순으로 정해집니다.
    /// 상시 연결 방식이면 공유 클라이언트를 만들고 ping으로 연결을 검증하며,
    /// ping이 실패하면 클라이언트를 종료한 뒤 에러를 돌려줍니다.
    /// 호출마다 연결하는 방식이면 연결 옵션만 검증합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::DatabaseError` - URL 파싱 실패, 클라이언트 생성 실패, ping 실패
    pub async fn connect(config: DatabaseConfig) -> AppResult<Self> {
        let mut options = ClientOptions::parse(config.connection_string()).await?;
        options.app_name = Some(config.app_name.clone());

        let database_name = resolve_database_name(&config, &options);

        let mut database = Self {
            options,
            database_name,
            mode: config.mode,
            shared: None,
            open_clients: Arc::new(AtomicUsize::new(0)),
        };

        if database.mode == ConnectionMode::Persistent {
            database.shared = Some(database.open_client()?);

            if let Err(e) = database.ping().await {
                database.close().await;
                return Err(e);
            }
        }

        info!(
            "✅ MongoDB 연결 준비 완료: {} / {} ({})",
            config.redacted_connection_string(),
            database.database_name,
            database.mode.as_str()
        );

        Ok(database)
    }

    fn open_client(&self) -> AppResult<Client> {
        Ok(Client::with_options(self.options.clone())?)
    }

    /// 한 작업 동안 사용할 세션을 얻습니다.
    ///
    /// 상시 연결 방식은 공유 클라이언트 핸들을 복제하고,
    /// 호출마다 연결하는 방식은 새 클라이언트를 엽니다.
    pub async fn acquire(&self) -> AppResult<DatabaseSession> {
        let (client, owned) = match &self.shared {
            Some(client) => (client.clone(), false),
            None => {
                debug!("새 MongoDB 클라이언트 연결");
                let client = self.open_client()?;
                self.open_clients.fetch_add(1, Ordering::SeqCst);
                (client, true)
            }
        };

        Ok(DatabaseSession {
            client,
            database_name: self.database_name.clone(),
            owned,
            open_clients: self.open_clients.clone(),
        })
    }

    /// `ping` 명령으로 연결 상태를 확인합니다.
    pub async fn ping(&self) -> AppResult<()> {
        let session = self.acquire().await?;
        let result = session
            .database()
            .run_command(doc! { "ping": 1 })
            .await;
        session.release().await;

        result?;
        Ok(())
    }

    /// 공유 클라이언트를 종료합니다. 호출마다 연결하는 방식에서는 아무 일도 하지 않습니다.
    pub async fn close(&self) {
        if let Some(client) = &self.shared {
            info!("MongoDB 공유 클라이언트 종료");
            client.clone().shutdown().await;
        }
    }

    pub fn mode(&self) -> ConnectionMode {
        self.mode
    }

    /// 사용할 데이터베이스 이름
    pub fn database_name(&self) -> &str {
        &self.database_name
    }

    /// 얻은 뒤 아직 반납되지 않은 호출별 클라이언트 수
    pub fn open_clients(&self) -> usize {
        self.open_clients.load(Ordering::SeqCst)
    }
}

fn resolve_database_name(config: &DatabaseConfig, options: &ClientOptions) -> String {
    if let Some(name) = config.database_name() {
        return name.to_string();
    }

    options.default_database.clone().unwrap_or_else(|| {
        warn!(
            "데이터베이스 이름이 지정되지 않아 기본값 '{}'을 사용합니다",
            DEFAULT_DATABASE_NAME
        );
        DEFAULT_DATABASE_NAME.to_string()
    })
}

/// 한 작업 동안 유지되는 클라이언트 핸들
///
/// 반드시 [`DatabaseSession::release`]로 반납해야 합니다.
/// 호출마다 연결하는 방식에서는 반납 시 클라이언트가 종료됩니다.
pub struct DatabaseSession {
    client: Client,
    database_name: String,
    owned: bool,
    open_clients: Arc<AtomicUsize>,
}

impl DatabaseSession {
    /// 설정된 데이터베이스 핸들
    pub fn database(&self) -> mongodb::Database {
        self.client.database(&self.database_name)
    }

    /// 스키마 없는 문서 컬렉션 핸들
    pub fn collection(&self, name: &str) -> Collection<Document> {
        self.database().collection::<Document>(name)
    }

    /// 세션을 반납합니다.
    pub async fn release(self) {
        if self.owned {
            debug!("MongoDB 클라이언트 연결 종료");
            self.client.shutdown().await;
            self.open_clients.fetch_sub(1, Ordering::SeqCst);
        }
    }
}
