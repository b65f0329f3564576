//! MongoDB 연결 관리
//!
//! 튜터, 대학, 예약, 학생 컬렉션이 모두 하나의 데이터베이스에 있으며
//! 리포지토리들은 [`Database`] 하나를 공유합니다.
//!
//! ```rust,ignore
//! let database = Arc::new(Database::new().await?);
//! ServiceLocator::set(database);
//! ServiceLocator::initialize_all().await?;
//! ```

use mongodb::{Client, bson::doc, options::ClientOptions};
use log::info;

use crate::config::DatabaseConfig;

/// MongoDB 데이터베이스 연결 래퍼
#[derive(Clone)]
pub struct Database {
    client: Client,
    database_name: String,
}

impl Database {
    /// `MONGODB_URI`/`DATABASE_NAME` 설정으로 연결하고 ping으로 연결 상태를 확인합니다.
    pub async fn new() -> Result<Self, mongodb::error::Error> {
        Self::connect(&DatabaseConfig::uri(), DatabaseConfig::database_name()).await
    }

    pub async fn connect(uri: &str, database_name: String) -> Result<Self, mongodb::error::Error> {
        let mut client_options = ClientOptions::parse(uri).await?;
        client_options.app_name = Some("tutor_service".to_string());

        let client = Client::with_options(client_options)?;

        client
            .database(&database_name)
            .run_command(doc! { "ping": 1 })
            .await?;

        info!("✅ MongoDB 연결 성공: {}", database_name);

        Ok(Self {
            client,
            database_name,
        })
    }

    /// 리포지토리가 컬렉션에 접근할 때 사용하는 `mongodb::Database` 핸들
    pub fn get_database(&self) -> mongodb::Database {
        self.client.database(&self.database_name)
    }

    pub fn database_name(&self) -> &str {
        &self.database_name
    }
}
