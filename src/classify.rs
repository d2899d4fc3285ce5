//! Maps a work order and its installation onto the lifecycle label shown in
//! the report.
//!
//! Precedence, first match wins:
//!
//! 1. work order cancelled: [`LifecycleStatus::Cancelled`]
//! 2. work order aborted: [`LifecycleStatus::Aborted`]
//! 3. installation completed: [`LifecycleStatus::ActivatedOntDiscovered`]
//! 4. "ONT sending" module completed: [`LifecycleStatus::FinishedOntSent`]
//! 5. work order completed: [`LifecycleStatus::FinishedOntNotSent`]
//! 6. otherwise: [`LifecycleStatus::ProvidedToIkb`]
//!
//! Rules 3 to 6 never skip the module scan. The equipment-sent instant is
//! captured whenever the module is complete, even when rule 3 decides the
//! label.

use std::fmt;

use chrono::{DateTime, Utc};

use crate::model::{InstallationStatus, Module, ModuleName, WorkOrderStatus};

/// Human-readable summary of where a work order stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LifecycleStatus {
    Cancelled,
    Aborted,
    ProvidedToIkb,
    FinishedOntNotSent,
    FinishedOntSent,
    ActivatedOntDiscovered,
}

impl LifecycleStatus {
    /// Label written into the report.
    pub fn label(self) -> &'static str {
        match self {
            LifecycleStatus::Cancelled => "Cancelled",
            LifecycleStatus::Aborted => "Aborted",
            LifecycleStatus::ProvidedToIkb => "Provided to IKB",
            LifecycleStatus::FinishedOntNotSent => "Finished by IKB, ONT not sent",
            LifecycleStatus::FinishedOntSent => "Finished by IKB, ONT Sent",
            LifecycleStatus::ActivatedOntDiscovered => "Activated, ONT discovered",
        }
    }

    /// Whether the status ends enrichment of the record.
    pub fn is_terminal(self) -> bool {
        matches!(self, LifecycleStatus::Cancelled | LifecycleStatus::Aborted)
    }
}

impl fmt::Display for LifecycleStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Outcome of [`classify`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    pub status: LifecycleStatus,
    /// Set when the ONT was reported as sent.
    pub ont_sent: bool,
    /// Completion instant of the "ONT sending" module, when it has one.
    pub ont_sent_at: Option<DateTime<Utc>>,
}

impl Classification {
    fn terminal(status: LifecycleStatus) -> Self {
        Self {
            status,
            ont_sent: false,
            ont_sent_at: None,
        }
    }
}

/// Classifies a work order given its installation status and modules.
pub fn classify(
    work_order: WorkOrderStatus,
    installation: InstallationStatus,
    modules: &[Module],
) -> Classification {
    match work_order {
        WorkOrderStatus::Cancelled => return Classification::terminal(LifecycleStatus::Cancelled),
        WorkOrderStatus::Aborted => return Classification::terminal(LifecycleStatus::Aborted),
        _ => {}
    }

    let mut status = None;
    if installation == InstallationStatus::Completed {
        status = Some(LifecycleStatus::ActivatedOntDiscovered);
    }

    let (ont_sent, ont_sent_at) = scan_ont_sending(modules);
    if ont_sent && status.is_none() {
        status = Some(LifecycleStatus::FinishedOntSent);
    }

    if work_order == WorkOrderStatus::Completed && status.is_none() {
        status = Some(LifecycleStatus::FinishedOntNotSent);
    }

    Classification {
        status: status.unwrap_or(LifecycleStatus::ProvidedToIkb),
        ont_sent,
        ont_sent_at,
    }
}

// The last completed "ONT sending" module wins.
fn scan_ont_sending(modules: &[Module]) -> (bool, Option<DateTime<Utc>>) {
    let mut sent = false;
    let mut sent_at = None;
    for module in modules {
        if module.name == ModuleName::OntSending && module.completed {
            sent = true;
            sent_at = module.completed_at;
        }
    }
    (sent, sent_at)
}
