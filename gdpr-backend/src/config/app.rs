use std::env;

/// ハブセッション（JWT）の設定
#[derive(Clone, Debug)]
pub struct SessionConfig {
    pub secret_key: String,
    pub cookie_name: String,
    pub issuer: String,
    pub expiry_minutes: i64,
    /// 未認証アクセス時のリダイレクト先
    pub login_url: String,
}

#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub body_limit: usize,
}

#[derive(Clone, Debug)]
pub struct DatabaseConfig {
    pub max_connections: u32,
    /// PostgreSQLのsearch_path（任意）
    pub schema: Option<String>,
}

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub environment: String,
    pub host: String,
    pub port: u16,
    pub database_url: String,
    pub database: DatabaseConfig,
    pub session: SessionConfig,
    pub server: ServerConfig,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, String> {
        dotenvy::dotenv().ok(); // .env ファイルを読み込む (存在しなくてもエラーにしない)

        let environment = env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string());

        let secret_key = env::var("SESSION_SECRET").map_err(|_| "SESSION_SECRET must be set")?;
        if secret_key.len() < 32 {
            return Err("SESSION_SECRET must be at least 32 characters".to_string());
        }

        Ok(Self {
            environment,
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "5000".to_string())
                .parse()
                .map_err(|_| "Invalid PORT value")?,
            database_url: env::var("DATABASE_URL").map_err(|_| "DATABASE_URL must be set")?,
            database: DatabaseConfig {
                max_connections: env::var("DB_MAX_CONNECTIONS")
                    .unwrap_or_else(|_| "20".to_string())
                    .parse()
                    .map_err(|_| "Invalid DB_MAX_CONNECTIONS value")?,
                schema: env::var("DB_SCHEMA").ok().filter(|s| !s.trim().is_empty()),
            },
            session: SessionConfig {
                secret_key,
                cookie_name: env::var("SESSION_COOKIE_NAME")
                    .unwrap_or_else(|_| "hub_session".to_string()),
                issuer: env::var("SESSION_ISSUER").unwrap_or_else(|_| "erplora-hub".to_string()),
                expiry_minutes: env::var("SESSION_EXPIRY_MINUTES")
                    .unwrap_or_else(|_| "480".to_string())
                    .parse()
                    .map_err(|_| "Invalid SESSION_EXPIRY_MINUTES value")?,
                login_url: env::var("LOGIN_URL")
                    .unwrap_or_else(|_| "/accounts/login/".to_string()),
            },
            server: ServerConfig {
                body_limit: 2 * 1024 * 1024, // 2MB
            },
        })
    }

    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// テスト用の設定を作成
    pub fn for_testing() -> Self {
        Self {
            environment: "test".to_string(),
            host: "127.0.0.1".to_string(),
            port: 5000,
            database_url: "sqlite::memory:".to_string(),
            database: DatabaseConfig {
                max_connections: 1,
                schema: None,
            },
            session: SessionConfig {
                secret_key: "test-session-secret-that-is-at-least-32-characters".to_string(),
                cookie_name: "hub_session".to_string(),
                issuer: "erplora-hub".to_string(),
                expiry_minutes: 60,
                login_url: "/accounts/login/".to_string(),
            },
            server: ServerConfig {
                body_limit: 2 * 1024 * 1024,
            },
        }
    }
}
