// src/domain/deadline.rs

use chrono::NaiveDate;
use serde::Serialize;

/// Urgency tier for a deadline, derived only from the days left.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Urgency {
    Critical,
    Warning,
    Ok,
    NotApplicable,
}

impl Urgency {
    pub fn signal(self) -> &'static str {
        match self {
            Urgency::Critical => "🔴",
            Urgency::Warning => "🟡",
            Urgency::Ok => "🟢",
            Urgency::NotApplicable => "⚪ No aplica",
        }
    }
}

pub fn days_until(deadline: NaiveDate, today: NaiveDate) -> i64 {
    (deadline - today).num_days()
}

pub fn urgency(days: Option<i64>) -> Urgency {
    match days {
        None => Urgency::NotApplicable,
        Some(d) if d <= 7 => Urgency::Critical,
        Some(d) if d <= 21 => Urgency::Warning,
        Some(_) => Urgency::Ok,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Workflow {
    Responsible,
    Fam,
    Pca,
    Dg,
}

impl Workflow {
    pub fn label(self) -> &'static str {
        match self {
            Workflow::Responsible => "Responsable",
            Workflow::Fam => "FAM",
            Workflow::Pca => "PCA",
            Workflow::Dg => "DG",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    Registration,
    Approval,
}

impl Stage {
    pub fn label(self) -> &'static str {
        match self {
            Stage::Registration => "registro",
            Stage::Approval => "aprobación",
        }
    }
}

/// A fixed policy date. Stored as plain numbers so the table can be a `const`.
#[derive(Debug, Clone, Copy)]
pub struct Deadline {
    pub workflow: Workflow,
    pub stage: Stage,
    year: i32,
    month: u32,
    day: u32,
}

impl Deadline {
    const fn new(workflow: Workflow, stage: Stage, year: i32, month: u32, day: u32) -> Self {
        Self {
            workflow,
            stage,
            year,
            month,
            day,
        }
    }

    pub fn date(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, self.day)
    }

    pub fn evaluate(&self, today: NaiveDate) -> DeadlineAlert {
        DeadlineAlert {
            workflow: self.workflow,
            stage: self.stage,
            status: evaluate(self.date(), today),
        }
    }
}

pub const RESPONSIBLE_REGISTRATION: Deadline =
    Deadline::new(Workflow::Responsible, Stage::Registration, 2026, 4, 22);
pub const FAM_REGISTRATION: Deadline = Deadline::new(Workflow::Fam, Stage::Registration, 2026, 4, 29);
pub const FAM_APPROVAL: Deadline = Deadline::new(Workflow::Fam, Stage::Approval, 2026, 5, 20);
pub const PCA_REGISTRATION: Deadline = Deadline::new(Workflow::Pca, Stage::Registration, 2026, 8, 5);
pub const PCA_APPROVAL: Deadline = Deadline::new(Workflow::Pca, Stage::Approval, 2026, 8, 26);
pub const DG_REGISTRATION: Deadline = Deadline::new(Workflow::Dg, Stage::Registration, 2026, 8, 5);
pub const DG_APPROVAL: Deadline = Deadline::new(Workflow::Dg, Stage::Approval, 2026, 8, 26);

/// Registration and approval deadlines for a workflow, in that order.
pub fn deadlines_for(workflow: Workflow) -> &'static [Deadline] {
    const FAM: [Deadline; 2] = [FAM_REGISTRATION, FAM_APPROVAL];
    const PCA: [Deadline; 2] = [PCA_REGISTRATION, PCA_APPROVAL];
    const DG: [Deadline; 2] = [DG_REGISTRATION, DG_APPROVAL];
    const RESPONSIBLE: [Deadline; 1] = [RESPONSIBLE_REGISTRATION];

    match workflow {
        Workflow::Responsible => &RESPONSIBLE,
        Workflow::Fam => &FAM,
        Workflow::Pca => &PCA,
        Workflow::Dg => &DG,
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeadlineStatus {
    pub date: Option<NaiveDate>,
    pub days_remaining: Option<i64>,
    pub urgency: Urgency,
}

pub fn evaluate(deadline: Option<NaiveDate>, today: NaiveDate) -> DeadlineStatus {
    let days_remaining = deadline.map(|d| days_until(d, today));
    DeadlineStatus {
        date: deadline,
        days_remaining,
        urgency: urgency(days_remaining),
    }
}

/// A policy deadline evaluated against a given day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeadlineAlert {
    pub workflow: Workflow,
    pub stage: Stage,
    #[serde(flatten)]
    pub status: DeadlineStatus,
}
