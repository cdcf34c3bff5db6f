//! Folio application composition root
//!
//! Builds every service from environment configuration and wires them
//! together: one alert channel shared by all collaborators, a contact
//! mailer (relay or fallback path), a contact form bound to the mailer,
//! and a projects loader bound to the document store.

use std::sync::Arc;

use folio_alert::AlertChannel;
use folio_common::Config;
use folio_contact::ContactForm;
use folio_email::{ContactMailer, ContactMailerFactory, EmailConfig};
use folio_projects::{FirestoreConfig, ProjectStoreFactory, ProjectsLoader};

/// Assembled page session: one form, one loader, one shared alert banner
pub struct App {
    pub config: Config,
    pub alert: AlertChannel,
    pub mailer: Arc<ContactMailer>,
    pub contact_form: ContactForm,
    pub projects: ProjectsLoader,
}

/// Create the application with all services wired from the environment
pub fn create_app() -> Result<App, anyhow::Error> {
    let config = Config::from_env()?;

    let alert = AlertChannel::new();

    let email_config = EmailConfig::from_env()?;
    let mailer = Arc::new(ContactMailerFactory::create(email_config, alert.clone())?);

    let store_config = FirestoreConfig::from_env()?;
    let store = ProjectStoreFactory::create(store_config)?;

    let contact_form = ContactForm::new(Arc::clone(&mailer), alert.clone());
    let projects = ProjectsLoader::new(store);

    Ok(App {
        config,
        alert,
        mailer,
        contact_form,
        projects,
    })
}
