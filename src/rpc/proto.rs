//! Wire messages of the backend services.
//!
//! The contract is owned by the upstream service definitions; these types
//! mirror the subset of fields this crate reads. Tags and method paths must
//! stay in sync with the upstream `.proto` files.

use prost_types::Timestamp;

pub mod workorder {
    use super::Timestamp;

    pub const GET: &str = "/netowner.workorder.WorkOrderService/Get";

    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, prost::Enumeration)]
    #[repr(i32)]
    pub enum Status {
        Unspecified = 0,
        Active = 1,
        Completed = 2,
        Cancelled = 3,
        Aborted = 4,
    }

    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, prost::Enumeration)]
    #[repr(i32)]
    pub enum OrderBy {
        Unspecified = 0,
        CreatedAt = 1,
    }

    #[derive(Clone, PartialEq, prost::Message)]
    pub struct WorkOrder {
        #[prost(string, tag = "1")]
        pub id: String,
        #[prost(string, tag = "2")]
        pub external_subscription_reference: String,
        #[prost(string, tag = "3")]
        pub installation_id: String,
        #[prost(enumeration = "Status", tag = "4")]
        pub status: i32,
        #[prost(message, optional, tag = "5")]
        pub ended_at: Option<Timestamp>,
    }

    #[derive(Clone, PartialEq, prost::Message)]
    pub struct GetParameters {
        #[prost(enumeration = "OrderBy", tag = "1")]
        pub order_by: i32,
        #[prost(bool, tag = "2")]
        pub order_by_descending: bool,
    }

    #[derive(Clone, PartialEq, prost::Message)]
    pub struct GetResponse {
        #[prost(message, repeated, tag = "1")]
        pub work_orders: Vec<WorkOrder>,
    }
}

pub mod subscription {
    use super::Timestamp;

    pub const GET_BY_ID: &str = "/bss.subscription.SubscriptionService/GetByID";

    #[derive(Clone, PartialEq, prost::Message)]
    pub struct GetByIdParameters {
        #[prost(string, tag = "1")]
        pub id: String,
    }

    #[derive(Clone, PartialEq, prost::Message)]
    pub struct Subscription {
        #[prost(string, tag = "1")]
        pub id: String,
        #[prost(string, tag = "2")]
        pub external_id: String,
        #[prost(string, tag = "3")]
        pub accesspoint_id: String,
        #[prost(message, optional, tag = "4")]
        pub created_at: Option<Timestamp>,
    }
}

pub mod accesspoint {
    pub const GET_BY_ID: &str = "/bss.accesspoint.AccessPointService/GetById";

    #[derive(Clone, PartialEq, prost::Message)]
    pub struct GetByIdParameters {
        #[prost(string, tag = "1")]
        pub id: String,
    }

    #[derive(Clone, PartialEq, prost::Message)]
    pub struct AccessPoint {
        #[prost(string, tag = "1")]
        pub id: String,
        #[prost(string, tag = "2")]
        pub external_id: String,
    }

    #[derive(Clone, PartialEq, prost::Message)]
    pub struct GetByIdResponse {
        #[prost(message, optional, tag = "1")]
        pub access_point: Option<AccessPoint>,
    }
}

pub mod installation {
    use super::Timestamp;

    pub const GET_BY_ID: &str = "/netowner.installation.InstallationService/GetByID";

    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, prost::Enumeration)]
    #[repr(i32)]
    pub enum Status {
        Unspecified = 0,
        Pending = 1,
        InProgress = 2,
        Completed = 3,
        Cancelled = 4,
    }

    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, prost::Enumeration)]
    #[repr(i32)]
    pub enum ModuleName {
        Unspecified = 0,
        OntSending = 1,
    }

    #[derive(Clone, PartialEq, prost::Message)]
    pub struct Module {
        #[prost(enumeration = "ModuleName", tag = "1")]
        pub name: i32,
        #[prost(bool, tag = "2")]
        pub completed: bool,
        #[prost(message, optional, tag = "3")]
        pub completed_at: Option<Timestamp>,
    }

    #[derive(Clone, PartialEq, prost::Message)]
    pub struct Installation {
        #[prost(string, tag = "1")]
        pub id: String,
        #[prost(enumeration = "Status", tag = "2")]
        pub status: i32,
        #[prost(message, repeated, tag = "3")]
        pub modules: Vec<Module>,
    }

    #[derive(Clone, PartialEq, prost::Message)]
    pub struct GetByIdParameters {
        #[prost(string, tag = "1")]
        pub id: String,
    }

    #[derive(Clone, PartialEq, prost::Message)]
    pub struct GetByIdResponse {
        #[prost(message, optional, tag = "1")]
        pub installation: Option<Installation>,
    }
}

pub mod inventory {
    pub const GET_POPS: &str = "/inventory.inventory.Service/GetPops";
    pub const GET_DEVICES: &str = "/inventory.inventory.Service/GetDevices";

    #[derive(Clone, PartialEq, prost::Message)]
    pub struct Pop {
        #[prost(string, tag = "1")]
        pub id: String,
        #[prost(string, tag = "2")]
        pub name: String,
    }

    #[derive(Clone, PartialEq, prost::Message)]
    pub struct GetPopParameters {}

    #[derive(Clone, PartialEq, prost::Message)]
    pub struct GetPopsResponse {
        #[prost(message, repeated, tag = "1")]
        pub pops: Vec<Pop>,
    }

    #[derive(Clone, PartialEq, prost::Message)]
    pub struct Device {
        #[prost(string, tag = "1")]
        pub id: String,
        #[prost(string, tag = "2")]
        pub name: String,
    }

    #[derive(Clone, PartialEq, prost::Message)]
    pub struct GetDevicesParameters {
        #[prost(string, optional, tag = "1")]
        pub pop_id: Option<String>,
    }

    #[derive(Clone, PartialEq, prost::Message)]
    pub struct GetDevicesResponse {
        #[prost(message, repeated, tag = "1")]
        pub devices: Vec<Device>,
    }
}
