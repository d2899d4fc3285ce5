//! Access to the backend services.
//!
//! The report and the inventory walk only see the [`BssDirectory`] and
//! [`InventoryDirectory`] traits; [`client`] implements them over gRPC.

pub mod auth;
pub mod client;
pub mod convert;
pub mod proto;

use async_trait::async_trait;

use crate::error::Result;
use crate::model::{AccessPoint, Device, Installation, Pop, Subscription, WorkOrder};

pub use auth::{Actor, ActorKind, AuthContext, AuthInterceptor};
pub use client::{BssEndpoints, GrpcBssDirectory, GrpcInventoryDirectory, RpcClient};

/// Work orders and the records they reference.
#[async_trait]
pub trait BssDirectory: Send + Sync {
    /// Lists all work orders, oldest first.
    async fn work_orders(&self) -> Result<Vec<WorkOrder>>;

    async fn subscription(&self, id: &str) -> Result<Subscription>;

    async fn access_point(&self, id: &str) -> Result<AccessPoint>;

    async fn installation(&self, id: &str) -> Result<Installation>;
}

/// Points-of-presence and the devices they contain.
#[async_trait]
pub trait InventoryDirectory: Send + Sync {
    async fn pops(&self) -> Result<Vec<Pop>>;

    async fn devices(&self, pop_id: &str) -> Result<Vec<Device>>;
}
