use secrecy::{ExposeSecret, Secret};

use crate::domain::{Authenticator, AuthenticatorError, Credentials};

/// Accepts exactly one hardcoded account. No lookup, no hashing.
pub struct MockAuthenticator {
    email: String,
    password: Secret<String>,
}

impl MockAuthenticator {
    pub fn new(email: &str, password: Secret<String>) -> Self {
        Self {
            email: email.to_owned(),
            password,
        }
    }
}

#[async_trait::async_trait]
impl Authenticator for MockAuthenticator {
    #[tracing::instrument(name = "Checking mocked credentials", skip_all)]
    async fn authenticate(
        &self,
        credentials: &Credentials,
    ) -> Result<(), AuthenticatorError> {
        if credentials.email == self.email
            && credentials.password.expose_secret()
                == self.password.expose_secret()
        {
            Ok(())
        } else {
            Err(AuthenticatorError::InvalidCredentials)
        }
    }
}
