use crate::{
    config::AuthConfig,
    error, info,
    management::{SessionManager, VerifierManager},
    server::{self, AppState},
    warning,
};

/// Runs the local web app until Ctrl-C.
pub async fn serve(open: bool) {
    let config = match AuthConfig::from_env() {
        Ok(config) => config,
        Err(e) => error!("Cannot load configuration: {}", e),
    };

    let addr = config.server_addr;
    let state = AppState::new(config, SessionManager::default(), VerifierManager::default());

    let home = format!("http://{}/", addr);
    info!("Serving discogrify on {}", home);

    if open && webbrowser::open(&home).is_err() {
        warning!("Failed to open browser. Please navigate to {}", home);
    }

    tokio::select! {
        res = server::start_api_server(state) => {
            if let Err(e) = res {
                error!("Cannot serve on {}: {}", addr, e);
            }
        }
        _ = tokio::signal::ctrl_c() => info!("Shutting down."),
    }
}
