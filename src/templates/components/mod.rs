use crate::domain::deadline::DeadlineAlert;
use crate::domain::normalize::{format_amount, format_calendar_date, MonetaryAmount, EM_DASH};
use crate::domain::status::StatusBadge;
use maud::{html, Markup};

pub mod error;

pub use error::error_page;

pub fn card(title: &str, body: Markup) -> Markup {
    html! {
        section class="card" {
            h3 { (title) }
            (body)
        }
    }
}

pub fn info_cell(label: &str, value: &str) -> Markup {
    html! {
        div {
            div class="small-label" { (label) }
            div class="small-value" { (value) }
        }
    }
}

pub fn money(label: &str, amount: MonetaryAmount) -> Markup {
    html! {
        div class="monto-label" { (label) }
        div class="monto-value" { (format_amount(amount)) }
    }
}

pub fn line(label: &str, value: &str) -> Markup {
    html! {
        p { strong { (label) ":" } " " (value) }
    }
}

pub fn badge(status: &StatusBadge) -> Markup {
    html! {
        span class=(status.tone().css_class()) { (status.label()) }
    }
}

/// `Plazo registro FAM: 29 - Abr - 2026 | Días al plazo: 12 🟡`
pub fn deadline_line(alert: &DeadlineAlert) -> Markup {
    let date = alert
        .status
        .date
        .map(format_calendar_date)
        .unwrap_or_else(|| EM_DASH.to_string());

    html! {
        p class="deadline" {
            strong { "Plazo " (alert.stage.label()) " " (alert.workflow.label()) ":" }
            " " (date) " | "
            strong { "Días al plazo:" }
            " "
            @if let Some(days) = alert.status.days_remaining {
                (days) " "
            }
            (alert.status.urgency.signal())
        }
    }
}
