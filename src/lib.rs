use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::{get, post},
    serve::Serve,
    Router,
};

use std::error::Error;
use tokio::signal;
use tower_http::{services::ServeDir, trace::TraceLayer};
use tracing::Level;

use domain::{Route, SiteError};
pub mod routes;
use crate::utils::{constants::ASSETS_DIR, tracing::*};
use routes::{
    edit_team, edit_team_page, index, index_teaser, login, login_page, logout,
    not_found, participant_page, payment_gym, payment_gym_page,
    payment_tournament, payment_tournament_page, sign_up, sign_up_page,
    tournament_sign_up, tournament_sign_up_page,
};
pub mod app_state;
pub mod domain;
pub mod services;
use app_state::AppState;
pub mod utils;

const ERROR_PAGE: &str = "<!DOCTYPE html>\n<html lang=\"pt-BR\"><head><meta charset=\"utf-8\"><title>Cross Jungle Inside</title></head>\n<body><h1>Algo deu errado na selva!</h1><p>Tente novamente em instantes.</p><a href=\"/\">Voltar ao início</a></body></html>\n";

impl IntoResponse for SiteError {
    fn into_response(self) -> Response {
        log_error_chain(&self, Level::ERROR);
        (StatusCode::INTERNAL_SERVER_ERROR, Html(ERROR_PAGE)).into_response()
    }
}

pub(crate) fn log_error_chain(e: &(dyn Error + 'static), debug_level: Level) {
    let separator =
        "\n-----------------------------------------------------------------------------------\n";
    let mut report = format!("{}{:?}\n", separator, e);
    let mut current = e.source();
    while let Some(cause) = current {
        let str = format!("Caused by:\n\n{:?}", cause);
        report = format!("{}\n{}", report, str);
        current = cause.source();
    }
    report = format!("{}\n{}", report, separator);
    match debug_level {
        Level::ERROR => tracing::error!("{}", report),
        Level::WARN => tracing::warn!("{}", report),
        Level::INFO => tracing::info!("{}", report),
        Level::DEBUG => tracing::debug!("{}", report),
        Level::TRACE => tracing::trace!("{}", report),
    }
}

pub struct Application {
    server: Serve<Router, Router>,
    pub address: String,
}

impl Application {
    pub async fn build(
        app_state: AppState,
        address: &str,
    ) -> Result<Self, Box<dyn Error>> {
        let router = Router::new()
            .route(Route::Home.path(), get(index).post(index_teaser))
            .route(Route::Login.path(), get(login_page).post(login))
            .route(Route::SignUp.path(), get(sign_up_page).post(sign_up))
            .route(
                Route::TournamentSignUp.path(),
                get(tournament_sign_up_page).post(tournament_sign_up),
            )
            .route(
                Route::PaymentGym.path(),
                get(payment_gym_page).post(payment_gym),
            )
            .route(
                Route::PaymentTournament.path(),
                get(payment_tournament_page).post(payment_tournament),
            )
            .route(Route::Participant.path(), get(participant_page))
            .route(Route::EditTeam.path(), get(edit_team_page).post(edit_team))
            .route("/logout", post(logout))
            .nest_service("/assets", ServeDir::new(ASSETS_DIR.as_str()))
            .fallback(not_found)
            .with_state(app_state)
            .layer(
                TraceLayer::new_for_http()
                    .make_span_with(make_span_with_request_id)
                    .on_request(on_request)
                    .on_response(on_response),
            );

        let listener = tokio::net::TcpListener::bind(address).await?;
        let address = listener.local_addr()?.to_string();
        let server = axum::serve(listener, router);

        Ok(Application { server, address })
    }

    pub async fn run(self) -> Result<(), std::io::Error> {
        tracing::info!("listening on {}", &self.address);
        self.server.with_graceful_shutdown(shutdown_signal()).await
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("failed to install Ctrl+C handler: {e}");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                tracing::error!("failed to install signal handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
