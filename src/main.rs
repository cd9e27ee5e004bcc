use std::sync::Arc;

use color_eyre::eyre::{eyre, Result};
use cross_jungle_site::{
    app_state::AppState,
    services::{
        data_stores::StaticContentStore, mock_authenticator::MockAuthenticator,
        mock_payment_gateway::MockPaymentGateway,
    },
    utils::{
        constants::{APP_ADDRESS, MOCK_LOGIN_EMAIL, MOCK_LOGIN_PASSWORD},
        tracing::init_tracing,
    },
    Application,
};
use secrecy::Secret;

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    init_tracing()?;

    let content_store = Arc::new(StaticContentStore::bundled()?);
    let authenticator = Arc::new(MockAuthenticator::new(
        MOCK_LOGIN_EMAIL,
        Secret::new(MOCK_LOGIN_PASSWORD.to_owned()),
    ));
    let payment_gateway = Arc::new(MockPaymentGateway);

    let app_state =
        AppState::new(content_store, authenticator, payment_gateway);

    let app = Application::build(app_state, &APP_ADDRESS)
        .await
        .map_err(|e| eyre!("Failed to build app: {e}"))?;

    app.run().await?;
    Ok(())
}
