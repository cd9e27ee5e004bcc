use color_eyre::eyre::Result;
use std::str::FromStr;

use super::{
    Accepted, DelayedRedirect, FormError, Notice, Route, ValidationError,
};
use crate::utils::constants::delays;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentMethod {
    CreditCard,
    Pix,
    BankSlip,
}

impl PaymentMethod {
    pub const ALL: [PaymentMethod; 3] = [
        PaymentMethod::CreditCard,
        PaymentMethod::Pix,
        PaymentMethod::BankSlip,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentMethod::CreditCard => "credit",
            PaymentMethod::Pix => "pix",
            PaymentMethod::BankSlip => "bank",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PaymentMethod::CreditCard => "Cartão de Crédito",
            PaymentMethod::Pix => "PIX",
            PaymentMethod::BankSlip => "Boleto Bancário",
        }
    }

    pub fn parse_optional(
        value: &str,
    ) -> Result<Option<PaymentMethod>, ValidationError> {
        match value.trim() {
            "" => Ok(None),
            value => value.parse().map(Some),
        }
    }
}

impl FromStr for PaymentMethod {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PaymentMethod::ALL
            .into_iter()
            .find(|method| method.as_str() == s)
            .ok_or_else(|| {
                ValidationError::new(format!("Unknown payment method: {s}"))
            })
    }
}

/// Which payment page the form belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Checkout {
    GymMembership,
    TournamentEntry,
}

impl Checkout {
    pub fn route(&self) -> Route {
        match self {
            Checkout::GymMembership => Route::PaymentGym,
            Checkout::TournamentEntry => Route::PaymentTournament,
        }
    }

    pub fn approved(&self) -> Accepted {
        match self {
            Checkout::GymMembership => Accepted {
                notice: Notice::success(
                    "Pagamento aprovado! 🎉",
                    "Bem-vindo à Cross Jungle Inside! Sua matrícula foi confirmada!",
                ),
                redirect: DelayedRedirect::new(Route::Home, delays::PAYMENT),
            },
            Checkout::TournamentEntry => Accepted {
                notice: Notice::success(
                    "Pagamento aprovado! 🏆",
                    "Sua inscrição no torneio foi confirmada! Prepare-se para o desafio da selva!",
                ),
                redirect: DelayedRedirect::new(
                    Route::Participant,
                    delays::PAYMENT,
                ),
            },
        }
    }
}

/// Contents of a payment form. Card and PIX fields are only rendered for
/// their method and are never checked.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PaymentDetails {
    pub method: Option<PaymentMethod>,
    pub card_number: String,
    pub card_name: String,
    pub expiry_date: String,
    pub cvv: String,
    pub pix_key: String,
    pub agree_terms: bool,
}

impl PaymentDetails {
    /// Method first, then terms. Returns the method to charge.
    pub fn validate(&self) -> Result<PaymentMethod, FormError> {
        let method = self.method.ok_or(FormError::MissingPaymentMethod)?;
        if !self.agree_terms {
            return Err(FormError::TermsNotAccepted);
        }
        Ok(method)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentAction {
    SelectMethod(PaymentMethod),
    Submit,
}

impl FromStr for PaymentAction {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "submit" => Ok(PaymentAction::Submit),
            other => match other.strip_prefix("method-") {
                Some(method) => method.parse().map(PaymentAction::SelectMethod),
                None => Err(ValidationError::new(format!(
                    "Unknown action: {other}"
                ))),
            },
        }
    }
}

#[async_trait::async_trait]
pub trait PaymentGateway {
    async fn approve(
        &self,
        checkout: Checkout,
        method: PaymentMethod,
    ) -> Result<()>;
}
