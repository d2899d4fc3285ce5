use std::fmt;

use tonic::metadata::{Ascii, MetadataValue};
use tonic::service::Interceptor;
use tonic::{Request, Status};

use crate::error::{Result, ReportError};

pub const AUTHORIZATION_HEADER: &str = "authorization";
pub const ACTOR_TYPE_HEADER: &str = "x-actor-type";
pub const ACTOR_ID_HEADER: &str = "x-actor-id";

/// Kind of principal a call is made on behalf of.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActorKind {
    FiberOperator,
}

impl ActorKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ActorKind::FiberOperator => "fiber-operator",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Actor {
    pub kind: ActorKind,
    pub id: String,
}

/// Credential and identity attached to every outbound call.
#[derive(Clone, PartialEq, Eq)]
pub struct AuthContext {
    token: String,
    actor: Actor,
}

impl AuthContext {
    pub fn new(token: impl Into<String>, actor: Actor) -> Self {
        Self {
            token: token.into(),
            actor,
        }
    }

    /// Convenience constructor for the fiber-operator actor the reports run as.
    pub fn fiber_operator(token: impl Into<String>, operator_id: impl Into<String>) -> Self {
        Self::new(
            token,
            Actor {
                kind: ActorKind::FiberOperator,
                id: operator_id.into(),
            },
        )
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn actor(&self) -> &Actor {
        &self.actor
    }
}

// Keeps the token out of logs.
impl fmt::Debug for AuthContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthContext")
            .field("token", &"<redacted>")
            .field("actor", &self.actor)
            .finish()
    }
}

/// Interceptor stamping the auth metadata onto each request.
///
/// Metadata values are validated once when the interceptor is built, so the
/// per-call path cannot fail.
#[derive(Clone)]
pub struct AuthInterceptor {
    authorization: MetadataValue<Ascii>,
    actor_type: MetadataValue<Ascii>,
    actor_id: MetadataValue<Ascii>,
}

impl AuthInterceptor {
    pub fn new(context: &AuthContext) -> Result<Self> {
        let authorization = format!("Bearer {}", context.token)
            .parse()
            .map_err(|_| ReportError::InvalidCredential {
                key: "vault-token",
                reason: "not representable as request metadata".to_string(),
            })?;
        let actor_id = context
            .actor
            .id
            .parse()
            .map_err(|_| ReportError::InvalidCredential {
                key: "fiber-operator-id",
                reason: "not representable as request metadata".to_string(),
            })?;
        Ok(Self {
            authorization,
            actor_type: MetadataValue::from_static(context.actor.kind.as_str()),
            actor_id,
        })
    }
}

impl Interceptor for AuthInterceptor {
    fn call(&mut self, mut request: Request<()>) -> std::result::Result<Request<()>, Status> {
        let metadata = request.metadata_mut();
        metadata.insert(AUTHORIZATION_HEADER, self.authorization.clone());
        metadata.insert(ACTOR_TYPE_HEADER, self.actor_type.clone());
        metadata.insert(ACTOR_ID_HEADER, self.actor_id.clone());
        Ok(request)
    }
}
