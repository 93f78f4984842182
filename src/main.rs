use std::sync::Arc;

use anyhow::{Context, Result};
use enquiry_admin::{
    build_router,
    config::AppConfig,
    model::{NewDemoEnquiry, NewEnquiry},
    state::AppState,
    store::{MemoryStore, RecordStore},
};
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    let config = AppConfig::from_env().context("failed to load application configuration")?;

    // Single store handle for the lifetime of the process, shared by every
    // request. Connection lifecycle lives here, not in the services.
    let store: Arc<dyn RecordStore> = Arc::new(MemoryStore::new());

    if config.seed {
        seed_fixtures(store.as_ref())
            .await
            .context("failed to seed fixture records")?;
    }

    let app = build_router(AppState::new(store));

    let addr = config.address();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind to {addr}"))?;

    info!(address = %addr, "enquiry admin backend started");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    Ok(())
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("enquiry_admin=debug,tower_http=info")),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

async fn seed_fixtures(store: &dyn RecordStore) -> enquiry_admin::AppResult<()> {
    store
        .insert_enquiry(NewEnquiry {
            name: "Asha Verma".to_string(),
            email: "asha@example.com".to_string(),
            mobile: Some("+91 9000000001".to_string()),
            message: "Please share the fee structure.".to_string(),
        })
        .await?;
    store
        .insert_enquiry(NewEnquiry {
            name: "Karan Mehta".to_string(),
            email: "karan@example.com".to_string(),
            mobile: None,
            message: "Do you offer weekend batches?".to_string(),
        })
        .await?;
    store
        .insert_demo_enquiry(NewDemoEnquiry {
            name: "Ravi Iyer".to_string(),
            email: "ravi@example.com".to_string(),
            mobile: Some("+91 9000000002".to_string()),
            college: Some("IIT Delhi".to_string()),
            course: "Data Structures".to_string(),
        })
        .await?;

    info!("seeded fixture records");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            error!(error = %err, "unable to install Ctrl+C signal handler");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{SignalKind, signal};

        match signal(SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                error!(error = %err, "unable to install SIGTERM handler");
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
}
