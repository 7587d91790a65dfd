use mimalloc::MiMalloc;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let cfg = &cyberclash::config::CONFIG;

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cfg.loglevel.clone()));
    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_level(true)
                .with_target(false),
        )
        .init();

    info!(
        database_url = %cfg.database_url,
        environment = %cfg.environment,
        loglevel = %cfg.loglevel,
        port = cfg.port
    );

    let storage = cyberclash::db::BlogStorage::connect(&cfg.database_url).await?;
    storage.init_schema().await?;
    if storage.count_accounts().await? == 0 {
        storage
            .seed_accounts(cyberclash::db::SEED_ACCOUNTS)
            .await?;
        info!(count = cyberclash::db::SEED_ACCOUNTS.len(), "seeded accounts");
    }

    let sessions = cyberclash::session::spawn(cyberclash::session::session_ttl()).await;

    let state = cyberclash::router::AppState::new(storage, sessions, &cfg.session_secret);
    let app = cyberclash::router::app_router(state);

    let addr = format!("0.0.0.0:{}", cfg.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("HTTP server listening on {} in {} mode", addr, cfg.environment);
    axum::serve(listener, app).await?;
    Ok(())
}
