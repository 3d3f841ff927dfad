use crate::domain::normalize::{format_date, ParsedDate};
use crate::domain::summary::{Amounts, Institution, ResponsiblePanel, WorkflowPanel};
use crate::domain::deadline::{Stage, Workflow};
use crate::domain::RecordSummary;
use crate::templates::components::{badge, card, deadline_line, info_cell, line, money};
use crate::templates::desktop_layout;
use maud::{html, Markup};

pub struct DashboardVm<'a> {
    pub codlocales: &'a [String],
    pub summary: Option<RecordSummary>,
}

pub fn dashboard_page(vm: &DashboardVm) -> Markup {
    let current = vm.summary.as_ref().map(|s| s.codlocal.as_str());

    desktop_layout(
        "Detalle por Código Local",
        html! {
            main class="container" {
                h1 { "Detalle de Ejecución por Código Local" }

                form action="/" method="get" {
                    label for="codlocal" { "Buscar Código Local" }
                    " "
                    select
                        name="codlocal"
                        id="codlocal"
                        hx-get="/record"
                        hx-target="#record-area"
                        hx-swap="innerHTML"
                        hx-trigger="change"
                        onchange="if (!window.htmx) this.form.submit()"
                    {
                        @for code in vm.codlocales {
                            option value=(code) selected[current == Some(code.as_str())] { (code) }
                        }
                    }
                }

                div id="record-area" {
                    @match &vm.summary {
                        Some(summary) => (record_panels(summary)),
                        None => p { "La hoja no tiene registros." },
                    }
                }
            }
        },
    )
}

/// Every panel for one facility. Also served alone as the htmx fragment.
pub fn record_panels(summary: &RecordSummary) -> Markup {
    html! {
        (institution_card(&summary.institution))
        (amounts_card(&summary.amounts))

        div class="grid grid-2" {
            (responsible_card(&summary.responsible))
            (workflow_card(&summary.fam))
        }
        div class="grid grid-2" {
            (workflow_card(&summary.pca))
            (workflow_card(&summary.dg))
        }
    }
}

fn institution_card(inst: &Institution) -> Markup {
    card(
        "🏫 Datos del local educativo",
        html! {
            div class="grid grid-6" {
                (info_cell("Sector", &inst.sector))
                (info_cell("Región educativa", &inst.region))
                (info_cell("Departamento", &inst.departamento))
                (info_cell("Provincia", &inst.provincia))
                (info_cell("Distrito", &inst.distrito))
                (info_cell("Centro poblado", &inst.centro_poblado))
            }
            div class="grid grid-2" style="grid-template-columns: 2.2fr 1fr; margin-top: 0.5rem;" {
                div {
                    (info_cell("IIEE", &inst.nombre_iiee))
                    (info_cell("DRE/UGEL", &inst.dre_ugel))
                }
                div {
                    (info_cell("Ruralidad", &inst.ruralidad))
                    (info_cell("Estudiantes", &inst.estudiantes))
                    (info_cell("Cod. Modular", &inst.cod_modular))
                }
            }
        },
    )
}

fn amounts_card(amounts: &Amounts) -> Markup {
    let pct = format!("{:.0}", amounts.progress_percent);

    card(
        "💰 Montos",
        html! {
            div class="grid grid-2" {
                div {
                    (money("Monto programado", amounts.programmed))
                    (money("Monto transferido", amounts.transferred))
                    (money("Monto retirado", amounts.withdrawn))
                }
                div {
                    div class="progress-label" { (pct) "%" }
                    div class="progress" role="progressbar" aria-valuemin="0" aria-valuemax="100" aria-valuenow=(pct) {
                        div class="progress-bar" style=(format!("width: {pct}%")) {}
                    }
                }
            }
        },
    )
}

fn responsible_card(resp: &ResponsiblePanel) -> Markup {
    let yes_no = |b: bool| if b { "SI" } else { "NO" };

    card(
        "👤 Responsable",
        html! {
            (line("Cuenta con responsable", yes_no(resp.has_responsible)))
            (line("Responsable con cuenta", resp.has_account.map(yes_no).unwrap_or("NO APLICA")))

            @if let Some(alert) = &resp.registration_alert {
                p class="alert alert-warning" {
                    "Alerta registro: "
                    @if let Some(days) = alert.status.days_remaining {
                        (days) " días "
                    }
                    (alert.status.urgency.signal())
                }
            }

            @if let Some(date) = &resp.registration_date {
                (line("Fecha de registro", date))
            }

            @if let Some(note) = &resp.note {
                p class="alert alert-info" { "Nota: " (note) }
            }
        },
    )
}

fn workflow_card(panel: &WorkflowPanel) -> Markup {
    let title = match panel.workflow {
        Workflow::Fam => "📄 Ficha de Acciones de Mantenimiento (FAM)",
        Workflow::Pca => "📑 Panel de Culminación de Acciones (PCA)",
        Workflow::Dg => "🧾 Declaración de Gastos (DG)",
        Workflow::Responsible => "👤 Responsable",
    };
    let name = panel.workflow.label();

    card(
        title,
        html! {
            p { strong { "Estado " (name) ":" } " " (badge(&panel.status)) }

            @if let Some(amount) = panel.amount {
                (money(&format!("Monto {name}"), amount))
            }

            @if panel.workflow == Workflow::Fam {
                (date_line("Fecha de primer envío", panel.first_sent.as_ref()))
                (date_line("Fecha de verificación", panel.verified_at.as_ref()))
                @for alert in &panel.deadlines {
                    (deadline_line(alert))
                }
            } @else {
                // Each deadline sits above the date it governs.
                (stage_lines(panel, Stage::Registration))
                (date_line("Fecha de primer envío", panel.first_sent.as_ref()))
                (stage_lines(panel, Stage::Approval))
                (date_line("Fecha de verificación", panel.verified_at.as_ref()))
            }
        },
    )
}

fn stage_lines(panel: &WorkflowPanel, stage: Stage) -> Markup {
    html! {
        @for alert in panel.deadlines.iter().filter(|a| a.stage == stage) {
            (deadline_line(alert))
        }
    }
}

fn date_line(label: &str, date: Option<&ParsedDate>) -> Markup {
    html! {
        @if let Some(date) = date {
            (line(label, &format_date(date)))
        }
    }
}
