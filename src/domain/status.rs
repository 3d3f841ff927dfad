// src/domain/status.rs

use crate::domain::normalize::is_absent;
use serde::Serialize;

/// Badge category for a free-text workflow status cell.
///
/// The order of checks matters: a text that mentions both "SIN REGISTRAR" and a
/// verification word is treated as unregistered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "text", rename_all = "snake_case")]
pub enum StatusBadge {
    Verified,
    Unregistered,
    NoData,
    Other(String),
}

pub fn classify(raw: Option<&str>) -> StatusBadge {
    let text = match raw {
        Some(s) if !is_absent(raw) => s.trim(),
        _ => return StatusBadge::NoData,
    };

    let upper = text.to_uppercase();
    if upper.contains("SIN REGISTRAR") {
        StatusBadge::Unregistered
    } else if upper.contains("VERIFIC") {
        // VERIFICADA / VERIFICADO
        StatusBadge::Verified
    } else {
        StatusBadge::Other(text.to_string())
    }
}

pub fn is_verified(raw: Option<&str>) -> bool {
    classify(raw) == StatusBadge::Verified
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeTone {
    Red,
    Green,
    Yellow,
}

impl BadgeTone {
    pub fn css_class(self) -> &'static str {
        match self {
            BadgeTone::Red => "badge badge-red",
            BadgeTone::Green => "badge badge-green",
            BadgeTone::Yellow => "badge badge-yellow",
        }
    }
}

impl StatusBadge {
    pub fn is_verified(&self) -> bool {
        matches!(self, StatusBadge::Verified)
    }

    pub fn label(&self) -> &str {
        match self {
            StatusBadge::Verified => "VERIFICADA",
            StatusBadge::Unregistered => "SIN REGISTRAR",
            StatusBadge::NoData => "SIN DATO",
            StatusBadge::Other(text) => text.as_str(),
        }
    }

    pub fn tone(&self) -> BadgeTone {
        match self {
            StatusBadge::Verified => BadgeTone::Green,
            StatusBadge::Unregistered => BadgeTone::Red,
            StatusBadge::NoData | StatusBadge::Other(_) => BadgeTone::Yellow,
        }
    }
}
