// src/main.rs
use gdpr_backend::api::{build_app, AppState};
use gdpr_backend::config::Config;
use gdpr_backend::db::{create_base_db_pool, create_db_pool, create_schema, schema_exists};
use gdpr_backend::logging::init_tracing;
use migration::{Migrator, MigratorTrait};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // トレーシングの設定
    init_tracing();

    tracing::info!("Starting GDPR backend server...");

    // 設定を読み込む
    let app_config = Config::from_env()?;
    tracing::info!(
        environment = %app_config.environment,
        addr = %app_config.server_addr(),
        "Configuration loaded"
    );

    // スキーマ指定があれば、存在を確認し、なければ作成
    if let Some(schema) = &app_config.database.schema {
        tracing::info!("Using schema: {}", schema);

        let base_pool = create_base_db_pool(&app_config).await?;
        if !schema_exists(&base_pool, schema).await? {
            tracing::info!("Schema does not exist, creating it: {}", schema);
            create_schema(&base_pool, schema).await?;
        }
        base_pool.close().await?;
    }

    let db_pool = create_db_pool(&app_config).await?;
    tracing::info!("Database pool created successfully.");

    // マイグレーション
    Migrator::up(&db_pool, None).await?;
    tracing::info!("Migrations applied.");

    let server_addr = app_config.server_addr();
    let app_state = AppState::new(db_pool, app_config)?;
    let app = build_app(app_state);

    let listener = TcpListener::bind(&server_addr).await?;
    tracing::info!("Listening on {}", server_addr);
    axum::serve(listener, app).await?;

    Ok(())
}
