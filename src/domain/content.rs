use chrono::{Datelike, NaiveDate, NaiveTime};
use serde::Deserialize;

use super::{Brl, Roster};

const MONTHS_PT_BR: [&str; 12] = [
    "Janeiro",
    "Fevereiro",
    "Março",
    "Abril",
    "Maio",
    "Junho",
    "Julho",
    "Agosto",
    "Setembro",
    "Outubro",
    "Novembro",
    "Dezembro",
];

/// "15 de Dezembro, 2024"
pub fn long_date(date: &NaiveDate) -> String {
    format!(
        "{} de {}, {}",
        date.day(),
        MONTHS_PT_BR[date.month0() as usize],
        date.year()
    )
}

/// "25/01/2025"
pub fn short_date(date: &NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

/// Card in the landing page tournament carousel.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Tournament {
    pub name: String,
    pub date: NaiveDate,
    pub category: String,
    pub participants: u32,
    pub prize: Brl,
    pub description: String,
    pub status: String,
    pub icon: String,
}

impl Tournament {
    pub fn registrations_open(&self) -> bool {
        self.status == "Inscrições Abertas"
    }

    /// Button label for the carousel card.
    pub fn call_to_action(&self) -> &'static str {
        match self.status.as_str() {
            "Inscrições Abertas" => "Inscrever-se Agora",
            "Em Breve" => "Notificar quando abrir",
            _ => "Em Planejamento",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum GalleryCategory {
    Academia,
    Torneio,
}

impl GalleryCategory {
    pub fn label(&self) -> &'static str {
        match self {
            GalleryCategory::Academia => "Academia",
            GalleryCategory::Torneio => "Torneio",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GalleryItem {
    pub title: String,
    pub description: String,
    pub category: GalleryCategory,
    pub likes: u32,
    pub image: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MembershipPlan {
    pub name: String,
    pub price: Brl,
    pub description: String,
    pub features: Vec<String>,
}

/// The tournament participants are signing up and paying for.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FeaturedTournament {
    pub name: String,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub location: String,
    pub address: String,
    pub price_per_person: Brl,
    pub team_size: u64,
    pub description: String,
    pub rules: Vec<String>,
}

impl FeaturedTournament {
    pub fn total_price(&self) -> Brl {
        self.price_per_person * self.team_size
    }

    pub fn time_label(&self) -> String {
        self.time.format("%H:%M").to_string()
    }
}

/// Team already registered for the featured tournament, shown in the
/// participant area and used to seed the team editor.
#[derive(Debug, Clone, PartialEq)]
pub struct RegisteredTeam {
    pub roster: Roster,
    pub category: String,
    pub registration_date: NaiveDate,
    pub status: String,
    pub payment_status: String,
}

impl RegisteredTeam {
    pub fn role_of(index: usize) -> &'static str {
        match index {
            0 => "Líder da Equipe",
            _ => "Membro",
        }
    }
}
