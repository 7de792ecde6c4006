//! vitalcalc server binary.
//!
//! - `POST /bmi`, `POST /bmr` on `server.listen` (default `0.0.0.0:5000`)
//! - Config from `$VITALCALC_CONFIG` or `vitalcalc.yaml`
//! - Graceful shutdown on Ctrl+C / SIGTERM

use tokio::net::TcpListener;
use tracing_subscriber::{fmt, EnvFilter};

use vitalcalc_core::error::{Result, VitalError};
use vitalcalc_server::{app_state::AppState, config, router};

#[tokio::main]
async fn main() -> Result<()> {
    fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let path = std::env::var("VITALCALC_CONFIG").unwrap_or_else(|_| config::DEFAULT_PATH.into());
    let cfg = config::load_or_default(&path)?;
    let listen = cfg.server.listen_addr()?;

    let state = AppState::new(cfg);
    let app = router::build_router(state.clone());

    tracing::info!(%listen, "vitalcalc-server starting");
    let listener = TcpListener::bind(listen)
        .await
        .map_err(|e| VitalError::Internal(format!("bind {listen} failed: {e}")))?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(state))
        .await
        .map_err(|e| VitalError::Internal(format!("server failed: {e}")))?;

    tracing::info!("vitalcalc-server stopped");
    Ok(())
}

async fn shutdown_signal(state: AppState) {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!(error = %e, "failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    state.start_draining();
    tracing::info!("signal received, starting graceful shutdown");
}
