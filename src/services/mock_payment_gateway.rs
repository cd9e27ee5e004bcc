use color_eyre::eyre::Result;

use crate::domain::{Checkout, PaymentGateway, PaymentMethod};

/// Approves every payment without contacting anyone.
#[derive(Default)]
pub struct MockPaymentGateway;

#[async_trait::async_trait]
impl PaymentGateway for MockPaymentGateway {
    #[tracing::instrument(name = "Approving mocked payment", skip_all)]
    async fn approve(
        &self,
        checkout: Checkout,
        method: PaymentMethod,
    ) -> Result<()> {
        tracing::info!(
            "approved {:?} payment via {}",
            checkout,
            method.as_str()
        );
        Ok(())
    }
}

#[tokio::test]
async fn test_every_method_is_approved() {
    let gateway = MockPaymentGateway;
    for method in PaymentMethod::ALL {
        assert!(gateway.approve(Checkout::GymMembership, method).await.is_ok());
    }
}
