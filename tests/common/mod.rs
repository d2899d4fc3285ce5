#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use fiber_reports::model::{
    AccessPoint, Device, Installation, InstallationStatus, Module, Pop, Subscription, WorkOrder,
    WorkOrderStatus,
};
use fiber_reports::rpc::{BssDirectory, InventoryDirectory};
use fiber_reports::{ReportError, Result};

pub fn utc(year: i32, month: u32, day: u32, hour: u32, minute: u32, second: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, minute, second)
        .single()
        .expect("valid instant")
}

fn not_found(operation: &str) -> ReportError {
    ReportError::rpc(operation.to_string(), tonic::Status::not_found("no such record"))
}

/// In-memory stand-in for the business-support services.
#[derive(Default)]
pub struct FakeBss {
    pub work_orders: Vec<WorkOrder>,
    pub subscriptions: HashMap<String, Subscription>,
    pub access_points: HashMap<String, AccessPoint>,
    pub installations: HashMap<String, Installation>,
    pub calls: Mutex<Vec<String>>,
}

impl FakeBss {
    /// Registers a work order together with all the records it references.
    #[allow(clippy::too_many_arguments)]
    pub fn add(
        &mut self,
        key: &str,
        status: WorkOrderStatus,
        ended_at: Option<DateTime<Utc>>,
        created_at: Option<DateTime<Utc>>,
        installation_status: InstallationStatus,
        modules: Vec<Module>,
    ) {
        let subscription_id = format!("sub-{key}");
        let access_point_id = format!("ap-{key}");
        let installation_id = format!("in-{key}");
        self.work_orders.push(WorkOrder {
            id: format!("wo-{key}"),
            subscription_id: subscription_id.clone(),
            installation_id: installation_id.clone(),
            status,
            ended_at,
        });
        self.subscriptions.insert(
            subscription_id.clone(),
            Subscription {
                id: subscription_id,
                external_id: format!("SP-{key}"),
                access_point_id: access_point_id.clone(),
                created_at,
            },
        );
        self.access_points.insert(
            access_point_id.clone(),
            AccessPoint {
                id: access_point_id,
                external_id: format!("NO-{key}"),
            },
        );
        self.installations.insert(
            installation_id.clone(),
            Installation {
                id: installation_id,
                status: installation_status,
                modules,
            },
        );
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().expect("calls lock").clone()
    }

    fn record(&self, call: String) {
        self.calls.lock().expect("calls lock").push(call);
    }
}

#[async_trait]
impl BssDirectory for FakeBss {
    async fn work_orders(&self) -> Result<Vec<WorkOrder>> {
        self.record("work_orders".to_string());
        Ok(self.work_orders.clone())
    }

    async fn subscription(&self, id: &str) -> Result<Subscription> {
        self.record(format!("subscription {id}"));
        self.subscriptions
            .get(id)
            .cloned()
            .ok_or_else(|| not_found(&format!("get subscription by ID {id}")))
    }

    async fn access_point(&self, id: &str) -> Result<AccessPoint> {
        self.record(format!("access_point {id}"));
        self.access_points
            .get(id)
            .cloned()
            .ok_or_else(|| not_found(&format!("get access point by ID {id}")))
    }

    async fn installation(&self, id: &str) -> Result<Installation> {
        self.record(format!("installation {id}"));
        self.installations
            .get(id)
            .cloned()
            .ok_or_else(|| not_found(&format!("get installation by ID {id}")))
    }
}

/// In-memory stand-in for the inventory service.
#[derive(Default)]
pub struct FakeInventory {
    pub pops: Vec<Pop>,
    pub devices: HashMap<String, Vec<Device>>,
    pub failing_pop: Option<String>,
    pub visited: Mutex<Vec<String>>,
}

impl FakeInventory {
    pub fn with_pop(mut self, id: &str, device_count: usize) -> Self {
        self.pops.push(Pop {
            id: id.to_string(),
            name: format!("PoP {id}"),
        });
        let devices = (0..device_count)
            .map(|index| Device {
                id: format!("{id}-dev-{index}"),
                name: format!("device {index}"),
            })
            .collect();
        self.devices.insert(id.to_string(), devices);
        self
    }

    pub fn visited(&self) -> Vec<String> {
        self.visited.lock().expect("visited lock").clone()
    }
}

#[async_trait]
impl InventoryDirectory for FakeInventory {
    async fn pops(&self) -> Result<Vec<Pop>> {
        Ok(self.pops.clone())
    }

    async fn devices(&self, pop_id: &str) -> Result<Vec<Device>> {
        self.visited
            .lock()
            .expect("visited lock")
            .push(pop_id.to_string());
        if self.failing_pop.as_deref() == Some(pop_id) {
            return Err(ReportError::rpc(
                format!("list devices of point-of-presence {pop_id}"),
                tonic::Status::unavailable("inventory offline"),
            ));
        }
        Ok(self.devices.get(pop_id).cloned().unwrap_or_default())
    }
}
