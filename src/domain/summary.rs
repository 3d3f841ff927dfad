// src/domain/summary.rs

use crate::domain::deadline::{deadlines_for, DeadlineAlert, Workflow, RESPONSIBLE_REGISTRATION};
use crate::domain::normalize::{
    display_text, parse_amount, parse_date, parse_flag, progress_percent,
    MonetaryAmount, ParsedDate,
};
use crate::domain::record::{Field, Record};
use crate::domain::status::{classify, StatusBadge};
use chrono::NaiveDate;
use serde::Serialize;

/// Everything the dashboard shows for one facility, derived fresh per request.
#[derive(Debug, Clone, Serialize)]
pub struct RecordSummary {
    pub codlocal: String,
    pub today: NaiveDate,
    pub institution: Institution,
    pub amounts: Amounts,
    pub responsible: ResponsiblePanel,
    pub fam: WorkflowPanel,
    pub pca: WorkflowPanel,
    pub dg: WorkflowPanel,
}

#[derive(Debug, Clone, Serialize)]
pub struct Institution {
    pub sector: String,
    pub region: String,
    pub departamento: String,
    pub provincia: String,
    pub distrito: String,
    pub centro_poblado: String,
    pub nombre_iiee: String,
    pub dre_ugel: String,
    pub ruralidad: String,
    pub estudiantes: String,
    pub cod_modular: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct Amounts {
    pub programmed: MonetaryAmount,
    pub transferred: MonetaryAmount,
    pub withdrawn: MonetaryAmount,
    /// Withdrawn over programmed, always within `[0, 100]`.
    pub progress_percent: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct ResponsiblePanel {
    pub has_responsible: bool,
    /// `None` when there is no responsible party at all ("NO APLICA").
    pub has_account: Option<bool>,
    pub registration_date: Option<String>,
    pub registration_alert: Option<DeadlineAlert>,
    pub note: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct WorkflowPanel {
    pub workflow: Workflow,
    pub status: StatusBadge,
    /// Only FAM and DG publish an amount.
    pub amount: Option<MonetaryAmount>,
    /// `None` when the dates are hidden for this workflow state.
    pub first_sent: Option<ParsedDate>,
    pub verified_at: Option<ParsedDate>,
    /// Empty once the workflow is verified.
    pub deadlines: Vec<DeadlineAlert>,
}

impl RecordSummary {
    pub fn build(record: &Record, today: NaiveDate) -> Self {
        Self {
            codlocal: record.codlocal().to_string(),
            today,
            institution: Institution::from_record(record),
            amounts: Amounts::from_record(record),
            responsible: ResponsiblePanel::from_record(record, today),
            fam: WorkflowPanel::fam(record, today),
            pca: WorkflowPanel::pca(record, today),
            dg: WorkflowPanel::dg(record, today),
        }
    }
}

impl Institution {
    fn from_record(record: &Record) -> Self {
        let text = |field| display_text(record.field(field));
        Self {
            sector: text(Field::Sector),
            region: text(Field::Region),
            departamento: text(Field::Departamento),
            provincia: text(Field::Provincia),
            distrito: text(Field::Distrito),
            centro_poblado: text(Field::CentroPoblado),
            nombre_iiee: text(Field::NombreIiee),
            dre_ugel: text(Field::DreUgel),
            ruralidad: text(Field::Ruralidad),
            estudiantes: text(Field::Estudiantes),
            cod_modular: text(Field::CodModular),
        }
    }
}

impl Amounts {
    fn from_record(record: &Record) -> Self {
        let programmed = parse_amount(record.field(Field::MontoProgramado));
        let withdrawn = parse_amount(record.field(Field::MontoRetirado));
        Self {
            programmed,
            transferred: parse_amount(record.field(Field::MontoTransferido)),
            withdrawn,
            progress_percent: progress_percent(programmed, withdrawn),
        }
    }
}

impl ResponsiblePanel {
    fn from_record(record: &Record, today: NaiveDate) -> Self {
        let without_responsible = parse_flag(record.field(Field::SinResponsable));
        let with_account = parse_flag(record.field(Field::ConCuenta));

        // The registration date is shown as published, without reformatting.
        let registration_date =
            with_account.then(|| display_text(record.field(Field::FechaRegistro)));
        let note = record.field(Field::Nota).map(|n| n.trim().to_string());

        if without_responsible {
            Self {
                has_responsible: false,
                has_account: None,
                registration_date,
                registration_alert: Some(RESPONSIBLE_REGISTRATION.evaluate(today)),
                note,
            }
        } else {
            Self {
                has_responsible: true,
                has_account: Some(with_account),
                registration_date,
                registration_alert: None,
                note,
            }
        }
    }
}

impl WorkflowPanel {
    fn fam(record: &Record, today: NaiveDate) -> Self {
        let status = classify(record.field(Field::EstadoFam));
        let deadlines = pending_deadlines(Workflow::Fam, &status, today);
        Self {
            workflow: Workflow::Fam,
            amount: Some(parse_amount(record.field(Field::MontoFam))),
            first_sent: Some(parse_date(record.field(Field::FechaEnvioFam))),
            verified_at: Some(parse_date(record.field(Field::FechaVerifFam))),
            status,
            deadlines,
        }
    }

    fn pca(record: &Record, today: NaiveDate) -> Self {
        let status = classify(record.field(Field::EstadoPca));
        let pending = !status.is_verified();
        Self {
            workflow: Workflow::Pca,
            amount: None,
            first_sent: pending.then(|| parse_date(record.field(Field::FechaEnvioPca))),
            verified_at: pending.then(|| parse_date(record.field(Field::FechaVerifPca))),
            deadlines: pending_deadlines(Workflow::Pca, &status, today),
            status,
        }
    }

    fn dg(record: &Record, today: NaiveDate) -> Self {
        let status = classify(record.field(Field::EstadoDg));
        let pending = !status.is_verified();
        Self {
            workflow: Workflow::Dg,
            amount: Some(parse_amount(record.field(Field::MontoDg))),
            first_sent: pending.then(|| parse_date(record.field(Field::FechaEnvioDg))),
            verified_at: pending.then(|| parse_date(record.field(Field::FechaVerifDg))),
            deadlines: pending_deadlines(Workflow::Dg, &status, today),
            status,
        }
    }
}

/// Verified workflows carry no deadline alerts.
fn pending_deadlines(workflow: Workflow, status: &StatusBadge, today: NaiveDate) -> Vec<DeadlineAlert> {
    if status.is_verified() {
        return Vec::new();
    }
    deadlines_for(workflow)
        .iter()
        .map(|d| d.evaluate(today))
        .collect()
}
