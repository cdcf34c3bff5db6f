// Folio - local development harness

use tracing::{error, info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .pretty()
        .init();

    info!("Starting Folio local harness");

    let app = folio_app::create_app().map_err(|e| {
        error!("Failed to create application: {}", e);
        e
    })?;

    info!(
        site_owner = %app.config.site_owner,
        contact_email = %app.config.contact_email,
        "Application assembled"
    );

    app.projects.load().await;
    let snapshot = app.projects.snapshot();
    match snapshot.error {
        None => {
            info!(count = snapshot.projects.len(), "Project collection loaded");
            for project in &snapshot.projects {
                info!(id = %project.id, order = project.order, title = %project.title, "Project");
            }
        }
        Some(message) => warn!(%message, "Project load failed"),
    }

    // Only exercise the send path when it cannot reach a real relay
    if std::env::var("EMAIL_PROVIDER").as_deref() == Ok("mock") {
        let result = app.mailer.send_test_email().await;
        info!(success = result.success, message = %result.message, "Test email result");
    }

    let banner = app.alert.current();
    info!(is_open = banner.is_open, severity = %banner.severity, "Final banner state");

    info!("Folio local harness finished");
    Ok(())
}
