use color_eyre::eyre::Report;
use thiserror::Error;

use super::Notice;

/// A form submission that was turned away. Each variant carries the notice
/// the page shows in response.
#[derive(Debug, Error)]
pub enum FormError {
    #[error("Invalid credentials")]
    IncorrectCredentials,
    #[error("Team details are incomplete")]
    IncompleteTeam,
    #[error("Entry details are incomplete")]
    IncompleteEntry,
    #[error("Malformed form")]
    Malformed(#[from] ValidationError),
    #[error("Payment method missing")]
    MissingPaymentMethod,
    #[error("Terms not accepted")]
    TermsNotAccepted,
}

impl FormError {
    pub fn notice(&self) -> Notice {
        match self {
            FormError::IncorrectCredentials => Notice::destructive(
                "Credenciais inválidas! ⚠️",
                "Email ou senha incorretos. Tente novamente.",
            ),
            FormError::IncompleteTeam => Notice::destructive(
                "Dados incompletos! ⚠️",
                "Preencha todos os dados da equipe para continuar.",
            ),
            FormError::IncompleteEntry => Notice::destructive(
                "Dados incompletos! ⚠️",
                "Preencha todos os dados obrigatórios para continuar.",
            ),
            FormError::Malformed(e) => Notice::destructive(
                "Dados inválidos! ⚠️",
                &e.to_string(),
            ),
            FormError::MissingPaymentMethod => Notice::destructive(
                "Método de pagamento obrigatório! ⚠️",
                "Selecione uma forma de pagamento para continuar.",
            ),
            FormError::TermsNotAccepted => Notice::destructive(
                "Termos obrigatórios! ⚠️",
                "Você deve aceitar os termos e condições para continuar.",
            ),
        }
    }
}

#[derive(Debug, Error)]
pub enum SiteError {
    #[error("Failed to render template")]
    TemplateError(#[from] askama::Error),
    #[error("Unexpected error")]
    UnexpectedError(#[source] Report),
}

#[derive(Debug, Clone, PartialEq, Error)]
#[error("Validation error: {0}")]
pub struct ValidationError(String);

impl ValidationError {
    pub fn new(message: String) -> Self {
        Self(message)
    }

    pub fn as_ref(&self) -> &String {
        &self.0
    }
}
