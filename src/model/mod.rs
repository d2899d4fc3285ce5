use chrono::{DateTime, Utc};

/// Identifier of a record in one of the backend services. The services hand
/// out opaque strings, so the plain representation is kept.
pub type RecordId = String;

/// Lifecycle of a work order as reported by the work-order service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WorkOrderStatus {
    /// Value not defined by the contract.
    Unspecified,
    Active,
    Completed,
    Cancelled,
    Aborted,
}

/// A unit of field work tied to one subscription and one installation.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkOrder {
    pub id: RecordId,
    /// Identifier of the subscription the work order fulfils.
    pub subscription_id: RecordId,
    pub installation_id: RecordId,
    pub status: WorkOrderStatus,
    /// When the work order reached its terminal state, if it did.
    pub ended_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Subscription {
    pub id: RecordId,
    /// Reference assigned by the service provider.
    pub external_id: String,
    pub access_point_id: RecordId,
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AccessPoint {
    pub id: RecordId,
    /// Reference assigned by the network owner.
    pub external_id: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InstallationStatus {
    Unspecified,
    Pending,
    InProgress,
    Completed,
    Cancelled,
}

/// Names of installation steps. Only the equipment dispatch step drives the
/// report; every other step is carried as its raw contract value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModuleName {
    OntSending,
    Other(i32),
}

/// A named step of an installation.
#[derive(Debug, Clone, PartialEq)]
pub struct Module {
    pub name: ModuleName,
    pub completed: bool,
    pub completed_at: Option<DateTime<Utc>>,
}

impl Module {
    /// Creates a module that has not been completed yet.
    pub fn pending(name: ModuleName) -> Self {
        Self {
            name,
            completed: false,
            completed_at: None,
        }
    }

    /// Creates a module completed at the given instant.
    pub fn completed(name: ModuleName, at: DateTime<Utc>) -> Self {
        Self {
            name,
            completed: true,
            completed_at: Some(at),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Installation {
    pub id: RecordId,
    pub status: InstallationStatus,
    /// Steps in the order the installation service lists them.
    pub modules: Vec<Module>,
}

/// Point-of-presence: an inventory aggregation point containing devices.
#[derive(Debug, Clone, PartialEq)]
pub struct Pop {
    pub id: RecordId,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Device {
    pub id: RecordId,
    pub name: String,
}
