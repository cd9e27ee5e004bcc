use std::sync::Arc;

use crate::domain::{Authenticator, ContentStore, PaymentGateway};

pub type ContentStoreType = Arc<dyn ContentStore + Send + Sync>;
pub type AuthenticatorType = Arc<dyn Authenticator + Send + Sync>;
pub type PaymentGatewayType = Arc<dyn PaymentGateway + Send + Sync>;

#[derive(Clone)]
pub struct AppState {
    pub content_store: ContentStoreType,
    pub authenticator: AuthenticatorType,
    pub payment_gateway: PaymentGatewayType,
}

impl AppState {
    pub fn new(
        content_store: ContentStoreType,
        authenticator: AuthenticatorType,
        payment_gateway: PaymentGatewayType,
    ) -> Self {
        Self {
            content_store,
            authenticator,
            payment_gateway,
        }
    }
}
