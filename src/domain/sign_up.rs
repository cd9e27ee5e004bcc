use super::{
    Accepted, DelayedRedirect, Experience, FormError, Notice, Route,
};
use crate::utils::constants::delays;

/// Personal data collected by the gym sign-up page and the landing page
/// teaser.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PersonalDetails {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub birth_date: String,
    pub address: String,
    pub experience: Option<Experience>,
    pub goals: String,
    pub medical_conditions: String,
    pub agree_terms: bool,
    pub agree_marketing: bool,
}

impl PersonalDetails {
    /// Gym sign-up: only the terms checkbox is enforced.
    pub fn submit(&self) -> Result<Accepted, FormError> {
        self.check_terms()?;
        Ok(Accepted {
            notice: Notice::success(
                "Cadastro realizado com sucesso! 🎉",
                "Você ganhou uma aula experimental gratuita! Redirecionando para o pagamento da matrícula...",
            ),
            redirect: DelayedRedirect::new(Route::PaymentGym, delays::SIGN_UP),
        })
    }

    /// Landing page teaser: goes straight on to the tournament sign-up.
    pub fn submit_teaser(&self) -> Result<Route, FormError> {
        self.check_terms()?;
        Ok(Route::TournamentSignUp)
    }

    fn check_terms(&self) -> Result<(), FormError> {
        if self.agree_terms {
            Ok(())
        } else {
            Err(FormError::TermsNotAccepted)
        }
    }
}
