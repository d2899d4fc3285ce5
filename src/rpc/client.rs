use async_trait::async_trait;
use tonic::client::Grpc;
use tonic::codec::ProstCodec;
use tonic::codegen::InterceptedService;
use tonic::codegen::http::uri::PathAndQuery;
use tonic::transport::{Channel, Endpoint};
use tracing::debug;

use crate::error::{Result, ReportError};
use crate::model::{AccessPoint, Device, Installation, Pop, Subscription, WorkOrder};
use crate::rpc::auth::{AuthContext, AuthInterceptor};
use crate::rpc::proto::{accesspoint, installation, inventory, subscription, workorder};
use crate::rpc::{BssDirectory, InventoryDirectory};

type AuthChannel = InterceptedService<Channel, AuthInterceptor>;

/// Authenticated plaintext gRPC connection to one service endpoint.
///
/// The channel dials on first use and is shared by clones.
#[derive(Clone)]
pub struct RpcClient {
    endpoint: String,
    inner: AuthChannel,
}

impl RpcClient {
    pub fn connect_lazy(endpoint: &str, auth: &AuthContext) -> Result<Self> {
        let interceptor = AuthInterceptor::new(auth)?;
        let channel = Endpoint::from_shared(endpoint.to_string())
            .map_err(|source| ReportError::Transport {
                endpoint: endpoint.to_string(),
                source,
            })?
            .connect_lazy();
        Ok(Self {
            endpoint: endpoint.to_string(),
            inner: InterceptedService::new(channel, interceptor),
        })
    }

    /// Issues a single unary call against `path`.
    pub async fn unary<Req, Resp>(
        &self,
        path: &'static str,
        request: Req,
    ) -> std::result::Result<Resp, tonic::Status>
    where
        Req: prost::Message + Send + Sync + 'static,
        Resp: prost::Message + Default + Send + Sync + 'static,
    {
        debug!(endpoint = %self.endpoint, path, "issuing unary call");
        let mut grpc = Grpc::new(self.inner.clone());
        grpc.ready()
            .await
            .map_err(|e| tonic::Status::unknown(format!("service was not ready: {e}")))?;
        let codec = ProstCodec::<Req, Resp>::default();
        let response = grpc
            .unary(
                tonic::Request::new(request),
                PathAndQuery::from_static(path),
                codec,
            )
            .await?;
        Ok(response.into_inner())
    }
}

/// Addresses of the services the work-order report talks to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BssEndpoints {
    pub work_orders: String,
    pub subscriptions: String,
    pub access_points: String,
    pub installations: String,
}

/// [`BssDirectory`] backed by the gRPC services.
#[derive(Clone)]
pub struct GrpcBssDirectory {
    work_orders: RpcClient,
    subscriptions: RpcClient,
    access_points: RpcClient,
    installations: RpcClient,
}

impl GrpcBssDirectory {
    pub fn connect(endpoints: &BssEndpoints, auth: &AuthContext) -> Result<Self> {
        let work_orders = RpcClient::connect_lazy(&endpoints.work_orders, auth)?;
        let installations = if endpoints.installations == endpoints.work_orders {
            work_orders.clone()
        } else {
            RpcClient::connect_lazy(&endpoints.installations, auth)?
        };
        Ok(Self {
            work_orders,
            subscriptions: RpcClient::connect_lazy(&endpoints.subscriptions, auth)?,
            access_points: RpcClient::connect_lazy(&endpoints.access_points, auth)?,
            installations,
        })
    }
}

#[async_trait]
impl BssDirectory for GrpcBssDirectory {
    async fn work_orders(&self) -> Result<Vec<WorkOrder>> {
        let request = workorder::GetParameters {
            order_by: workorder::OrderBy::CreatedAt as i32,
            order_by_descending: false,
        };
        let response: workorder::GetResponse = self
            .work_orders
            .unary(workorder::GET, request)
            .await
            .map_err(|status| ReportError::rpc("list work orders", status))?;
        response
            .work_orders
            .into_iter()
            .map(WorkOrder::try_from)
            .collect()
    }

    async fn subscription(&self, id: &str) -> Result<Subscription> {
        let request = subscription::GetByIdParameters { id: id.to_string() };
        let response: subscription::Subscription = self
            .subscriptions
            .unary(subscription::GET_BY_ID, request)
            .await
            .map_err(|status| ReportError::rpc(format!("get subscription by ID {id}"), status))?;
        Subscription::try_from(response)
    }

    async fn access_point(&self, id: &str) -> Result<AccessPoint> {
        let operation = format!("get access point by ID {id}");
        let request = accesspoint::GetByIdParameters { id: id.to_string() };
        let response: accesspoint::GetByIdResponse = self
            .access_points
            .unary(accesspoint::GET_BY_ID, request)
            .await
            .map_err(|status| ReportError::rpc(operation.clone(), status))?;
        response
            .access_point
            .map(AccessPoint::from)
            .ok_or(ReportError::MissingField {
                operation,
                field: "access point",
            })
    }

    async fn installation(&self, id: &str) -> Result<Installation> {
        let operation = format!("get installation by ID {id}");
        let request = installation::GetByIdParameters { id: id.to_string() };
        let response: installation::GetByIdResponse = self
            .installations
            .unary(installation::GET_BY_ID, request)
            .await
            .map_err(|status| ReportError::rpc(operation.clone(), status))?;
        let installation = response.installation.ok_or(ReportError::MissingField {
            operation,
            field: "installation",
        })?;
        Installation::try_from(installation)
    }
}

/// [`InventoryDirectory`] backed by the inventory gRPC service.
#[derive(Clone)]
pub struct GrpcInventoryDirectory {
    inventory: RpcClient,
}

impl GrpcInventoryDirectory {
    pub fn connect(endpoint: &str, auth: &AuthContext) -> Result<Self> {
        Ok(Self {
            inventory: RpcClient::connect_lazy(endpoint, auth)?,
        })
    }
}

#[async_trait]
impl InventoryDirectory for GrpcInventoryDirectory {
    async fn pops(&self) -> Result<Vec<Pop>> {
        let response: inventory::GetPopsResponse = self
            .inventory
            .unary(inventory::GET_POPS, inventory::GetPopParameters {})
            .await
            .map_err(|status| ReportError::rpc("list points-of-presence", status))?;
        Ok(response.pops.into_iter().map(Pop::from).collect())
    }

    async fn devices(&self, pop_id: &str) -> Result<Vec<Device>> {
        let request = inventory::GetDevicesParameters {
            pop_id: Some(pop_id.to_string()),
        };
        let response: inventory::GetDevicesResponse = self
            .inventory
            .unary(inventory::GET_DEVICES, request)
            .await
            .map_err(|status| {
                ReportError::rpc(format!("list devices of point-of-presence {pop_id}"), status)
            })?;
        Ok(response.devices.into_iter().map(Device::from).collect())
    }
}
