use color_eyre::eyre::Report;
use secrecy::Secret;
use thiserror::Error;

use super::{Accepted, DelayedRedirect, Notice, Route};
use crate::utils::constants::delays;

#[derive(Debug, Clone)]
pub struct Credentials {
    pub email: String,
    pub password: Secret<String>,
}

impl Credentials {
    pub fn new(email: &str, password: Secret<String>) -> Self {
        Self {
            email: email.to_owned(),
            password,
        }
    }

    pub fn accepted() -> Accepted {
        Accepted {
            notice: Notice::success(
                "Login realizado com sucesso! 🏆",
                "Bem-vindo à selva do CrossFit! Redirecionando para sua área do participante...",
            ),
            redirect: DelayedRedirect::new(Route::Participant, delays::LOGIN),
        }
    }

    pub fn signed_out() -> Notice {
        Notice::success(
            "Logout realizado! 👋",
            "Obrigado por participar da Cross Jungle Inside!",
        )
    }
}

#[async_trait::async_trait]
pub trait Authenticator {
    async fn authenticate(
        &self,
        credentials: &Credentials,
    ) -> Result<(), AuthenticatorError>;
}

#[derive(Debug, Error)]
pub enum AuthenticatorError {
    #[error("Invalid credentials")]
    InvalidCredentials,
    #[error("Unexpected error")]
    UnexpectedError(#[source] Report),
}

impl PartialEq for AuthenticatorError {
    fn eq(&self, other: &Self) -> bool {
        matches!(
            (self, other),
            (Self::InvalidCredentials, Self::InvalidCredentials)
                | (Self::UnexpectedError(_), Self::UnexpectedError(_))
        )
    }
}
