use capitolwatch_api::{app, config, database, seed, AppState};

#[tokio::main]
async fn main() {
    // Load .env if present so cargo run picks up DATABASE_PATH, PORT, etc.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt::init();

    let config = config::config();

    let pool = match database::pool::connect(&config.database).await {
        Ok(pool) => pool,
        Err(e) => panic!("failed to open record store at {}: {}", config.database.path, e),
    };

    // One-shot bulk load; the same loaders back /admin/reseed
    match seed::load(&pool, seed::SeedSource::All).await {
        Ok(counts) => {
            for (name, n) in counts {
                tracing::info!("loaded {} {} rows", n, name);
            }
        }
        Err(e) => tracing::error!("initial bulk load failed: {}", e),
    }

    let app = app(AppState { pool });

    let bind_addr = format!("0.0.0.0:{}", config.server.port);
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .unwrap_or_else(|e| panic!("failed to bind {}: {}", bind_addr, e));

    tracing::info!("CapitolWatch API listening on http://{}", bind_addr);

    axum::serve(listener, app).await.expect("server");
}
