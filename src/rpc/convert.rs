use chrono::{DateTime, Utc};
use prost_types::Timestamp;

use crate::error::{Result, ReportError};
use crate::model::{
    AccessPoint, Device, Installation, InstallationStatus, Module, ModuleName, Pop, Subscription,
    WorkOrder, WorkOrderStatus,
};
use crate::rpc::proto;

fn instant(field: &'static str, timestamp: Option<Timestamp>) -> Result<Option<DateTime<Utc>>> {
    let Some(timestamp) = timestamp else {
        return Ok(None);
    };
    let invalid = || ReportError::InvalidTimestamp {
        field,
        seconds: timestamp.seconds,
        nanos: timestamp.nanos,
    };
    let nanos = u32::try_from(timestamp.nanos).map_err(|_| invalid())?;
    DateTime::from_timestamp(timestamp.seconds, nanos)
        .map(Some)
        .ok_or_else(invalid)
}

impl From<proto::workorder::Status> for WorkOrderStatus {
    fn from(status: proto::workorder::Status) -> Self {
        use proto::workorder::Status;
        match status {
            Status::Unspecified => WorkOrderStatus::Unspecified,
            Status::Active => WorkOrderStatus::Active,
            Status::Completed => WorkOrderStatus::Completed,
            Status::Cancelled => WorkOrderStatus::Cancelled,
            Status::Aborted => WorkOrderStatus::Aborted,
        }
    }
}

impl From<proto::installation::Status> for InstallationStatus {
    fn from(status: proto::installation::Status) -> Self {
        use proto::installation::Status;
        match status {
            Status::Unspecified => InstallationStatus::Unspecified,
            Status::Pending => InstallationStatus::Pending,
            Status::InProgress => InstallationStatus::InProgress,
            Status::Completed => InstallationStatus::Completed,
            Status::Cancelled => InstallationStatus::Cancelled,
        }
    }
}

impl From<i32> for ModuleName {
    fn from(value: i32) -> Self {
        match proto::installation::ModuleName::try_from(value) {
            Ok(proto::installation::ModuleName::OntSending) => ModuleName::OntSending,
            _ => ModuleName::Other(value),
        }
    }
}

impl TryFrom<proto::workorder::WorkOrder> for WorkOrder {
    type Error = ReportError;

    fn try_from(message: proto::workorder::WorkOrder) -> Result<Self> {
        let status = message.status().into();
        Ok(Self {
            id: message.id,
            subscription_id: message.external_subscription_reference,
            installation_id: message.installation_id,
            status,
            ended_at: instant("work_order.ended_at", message.ended_at)?,
        })
    }
}

impl TryFrom<proto::subscription::Subscription> for Subscription {
    type Error = ReportError;

    fn try_from(message: proto::subscription::Subscription) -> Result<Self> {
        Ok(Self {
            id: message.id,
            external_id: message.external_id,
            access_point_id: message.accesspoint_id,
            created_at: instant("subscription.created_at", message.created_at)?,
        })
    }
}

impl From<proto::accesspoint::AccessPoint> for AccessPoint {
    fn from(message: proto::accesspoint::AccessPoint) -> Self {
        Self {
            id: message.id,
            external_id: message.external_id,
        }
    }
}

impl TryFrom<proto::installation::Module> for Module {
    type Error = ReportError;

    fn try_from(message: proto::installation::Module) -> Result<Self> {
        Ok(Self {
            name: ModuleName::from(message.name),
            completed: message.completed,
            completed_at: instant("module.completed_at", message.completed_at)?,
        })
    }
}

impl TryFrom<proto::installation::Installation> for Installation {
    type Error = ReportError;

    fn try_from(message: proto::installation::Installation) -> Result<Self> {
        let status = message.status().into();
        let modules = message
            .modules
            .into_iter()
            .map(Module::try_from)
            .collect::<Result<Vec<_>>>()?;
        Ok(Self {
            id: message.id,
            status,
            modules,
        })
    }
}

impl From<proto::inventory::Pop> for Pop {
    fn from(message: proto::inventory::Pop) -> Self {
        Self {
            id: message.id,
            name: message.name,
        }
    }
}

impl From<proto::inventory::Device> for Device {
    fn from(message: proto::inventory::Device) -> Self {
        Self {
            id: message.id,
            name: message.name,
        }
    }
}
