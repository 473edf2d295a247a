#![recursion_limit = "256"]

mod config;
mod routes;
mod state;

use config::{ConfigError, ServerConfig};

#[derive(Debug, thiserror::Error)]
enum StartupError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("{0}")]
    Leptos(String),
    #[error("server io: {0}")]
    Io(#[from] std::io::Error),
}

#[tokio::main]
async fn main() -> Result<(), StartupError> {
    // A missing .env file is normal outside local development.
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let config = ServerConfig::from_env()?;
    let port = config.port;
    match &config.session_user {
        Some(user) => tracing::info!(user_id = %user.id, role = user.role.as_str(), "session user configured"),
        None => tracing::warn!("auth disabled; /api/auth/me will answer 401"),
    }

    let app = routes::leptos_app(state::AppState::new(config)).map_err(StartupError::Leptos)?;
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}")).await?;

    tracing::info!(%port, "nexus listening");
    axum::serve(listener, app).await?;
    Ok(())
}
