use askama::Template;
use axum::{
    extract::{Query, State},
    response::{Html, IntoResponse, Redirect, Response},
};
use axum_extra::extract::Form;
use serde::Deserialize;

use super::{
    sign_up::{PersonalDetailsView, SignUpForm},
    views::{render, Feedback, NoticeView, RedirectView},
};
use crate::{
    domain::{long_date, Carousel, Credentials, PersonalDetails, SiteError},
    AppState,
};

/// Gallery cards shown side by side.
pub const GALLERY_WINDOW: usize = 3;

#[derive(Debug, Default, Clone, Copy, Deserialize)]
pub struct CarouselQuery {
    #[serde(default)]
    pub tournament: usize,
    #[serde(default)]
    pub gallery: usize,
    #[serde(default)]
    pub logout: bool,
}

impl CarouselQuery {
    fn href(tournament: usize, gallery: usize, anchor: &str) -> String {
        format!("/?tournament={tournament}&gallery={gallery}#{anchor}")
    }
}

pub struct TournamentCard {
    pub icon: String,
    pub name: String,
    pub date: String,
    pub description: String,
    pub category: String,
    pub participants: u32,
    pub prize: String,
    pub status: String,
    pub open: bool,
    pub call_to_action: &'static str,
}

pub struct GalleryCard {
    pub title: String,
    pub description: String,
    pub category: &'static str,
    pub likes: u32,
    pub image: String,
    pub featured: bool,
}

pub struct Indicator {
    pub href: String,
    pub active: bool,
}

#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub notice: Option<NoticeView>,
    pub redirect: Option<RedirectView>,
    pub tournament: Option<TournamentCard>,
    pub tournament_prev: String,
    pub tournament_next: String,
    pub tournament_indicators: Vec<Indicator>,
    pub gallery: Vec<GalleryCard>,
    pub gallery_prev: String,
    pub gallery_next: String,
    pub gallery_indicators: Vec<Indicator>,
    pub details: PersonalDetailsView,
}

impl IndexTemplate {
    fn new(
        state: &AppState,
        query: CarouselQuery,
        details: &PersonalDetails,
        feedback: Feedback,
    ) -> Self {
        let tournaments = state.content_store.tournaments();
        let items = state.content_store.gallery();
        let slides = Carousel::new(tournaments.len(), query.tournament);
        let photos = Carousel::new(items.len(), query.gallery);

        let tournament =
            tournaments.get(slides.current()).map(|t| TournamentCard {
                icon: t.icon.clone(),
                name: t.name.clone(),
                date: long_date(&t.date),
                description: t.description.clone(),
                category: t.category.clone(),
                participants: t.participants,
                prize: t.prize.to_string(),
                status: t.status.clone(),
                open: t.registrations_open(),
                call_to_action: t.call_to_action(),
            });

        // The middle card of the window is highlighted.
        let gallery = photos
            .visible(GALLERY_WINDOW)
            .into_iter()
            .enumerate()
            .filter_map(|(position, index)| {
                items.get(index).map(|item| GalleryCard {
                    title: item.title.clone(),
                    description: item.description.clone(),
                    category: item.category.label(),
                    likes: item.likes,
                    image: item.image.clone(),
                    featured: position == 1,
                })
            })
            .collect();

        Self {
            notice: feedback.notice,
            redirect: feedback.redirect,
            tournament,
            tournament_prev: CarouselQuery::href(
                slides.prev(),
                photos.current(),
                "torneios",
            ),
            tournament_next: CarouselQuery::href(
                slides.next(),
                photos.current(),
                "torneios",
            ),
            tournament_indicators: (0..slides.len())
                .map(|index| Indicator {
                    href: CarouselQuery::href(
                        index,
                        photos.current(),
                        "torneios",
                    ),
                    active: index == slides.current(),
                })
                .collect(),
            gallery,
            gallery_prev: CarouselQuery::href(
                slides.current(),
                photos.prev(),
                "galeria",
            ),
            gallery_next: CarouselQuery::href(
                slides.current(),
                photos.next(),
                "galeria",
            ),
            gallery_indicators: (0..photos.len())
                .map(|index| Indicator {
                    href: CarouselQuery::href(
                        slides.current(),
                        index,
                        "galeria",
                    ),
                    active: index == photos.current(),
                })
                .collect(),
            details: PersonalDetailsView::from(details),
        }
    }
}

#[tracing::instrument(name = "Landing page", skip_all)]
pub async fn index(
    State(state): State<AppState>,
    Query(query): Query<CarouselQuery>,
) -> Result<Html<String>, SiteError> {
    let feedback = if query.logout {
        Feedback::notice(&Credentials::signed_out())
    } else {
        Feedback::none()
    };
    render(&IndexTemplate::new(
        &state,
        query,
        &PersonalDetails::default(),
        feedback,
    ))
}

/// The landing page teaser moves straight on to the tournament sign-up.
#[tracing::instrument(name = "Landing teaser route handler", skip_all)]
pub async fn index_teaser(
    State(state): State<AppState>,
    Form(form): Form<SignUpForm>,
) -> Result<Response, SiteError> {
    let (details, error) = match form.details() {
        Ok(details) => match details.submit_teaser() {
            Ok(route) => return Ok(Redirect::to(route.path()).into_response()),
            Err(error) => (details, error),
        },
        Err(error) => (PersonalDetails::default(), error),
    };

    let feedback = Feedback::rejected(&error);
    let status = feedback.status;
    let template = IndexTemplate::new(
        &state,
        CarouselQuery::default(),
        &details,
        feedback,
    );
    Ok((status, render(&template)?).into_response())
}
