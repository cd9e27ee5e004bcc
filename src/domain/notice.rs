use std::time::Duration;

use super::Route;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeVariant {
    Default,
    Destructive,
}

/// Transient toast shown at the top of a page after a form action.
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub title: String,
    pub description: String,
    pub variant: NoticeVariant,
}

impl Notice {
    pub fn success(title: &str, description: &str) -> Self {
        Self {
            title: title.to_owned(),
            description: description.to_owned(),
            variant: NoticeVariant::Default,
        }
    }

    pub fn destructive(title: &str, description: &str) -> Self {
        Self {
            title: title.to_owned(),
            description: description.to_owned(),
            variant: NoticeVariant::Destructive,
        }
    }

    pub fn is_destructive(&self) -> bool {
        self.variant == NoticeVariant::Destructive
    }
}

/// Navigation that happens once the success notice has been on screen for
/// `delay`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DelayedRedirect {
    pub to: Route,
    pub delay: Duration,
}

impl DelayedRedirect {
    pub fn new(to: Route, delay: Duration) -> Self {
        Self { to, delay }
    }

    /// Delay in the seconds notation used by `<meta http-equiv="refresh">`.
    pub fn delay_seconds(&self) -> String {
        format!("{}", self.delay.as_secs_f32())
    }
}

/// Result of an accepted submission.
#[derive(Debug, Clone, PartialEq)]
pub struct Accepted {
    pub notice: Notice,
    pub redirect: DelayedRedirect,
}
