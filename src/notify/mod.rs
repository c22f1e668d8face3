// ABOUTME: Notification pipeline tying resolution, derivation, rendering, and dispatch together
// ABOUTME: Exposes the Notifier entry point invoked once per triggering execution event

pub mod error;
pub mod payload;
pub mod templates;

use indexmap::IndexMap;
use serde_json::Value as JsonValue;
use tracing::{debug, info};

pub use error::{NotifyError, Result};
pub use payload::{BodyKind, DispatchAck, NotificationPayload, TransportMetadata};

use crate::context::{ContextBuilder, LinkResolver};
use crate::execution::{ExecutionLookup, ExecutionRef};
use crate::template::TemplateEngine;
use crate::transport::Transport;

/// One notification request: which execution, which template, what extra
/// context, and where the result goes.
#[derive(Debug, Clone)]
pub struct NotifyRequest {
    pub execution: ExecutionRef,
    pub template_ref: String,
    /// Caller-supplied entries for template variables beyond the derived
    /// facts. Reserved names are ignored here; the builder owns them.
    pub extra_context: IndexMap<String, JsonValue>,
    pub metadata: TransportMetadata,
    /// Variable scope for placeholder resolution in identifier references.
    pub scope: JsonValue,
    pub body_kind: BodyKind,
}

impl NotifyRequest {
    pub fn new(
        execution: impl Into<ExecutionRef>,
        template_ref: &str,
        metadata: TransportMetadata,
    ) -> Self {
        Self {
            execution: execution.into(),
            template_ref: template_ref.to_string(),
            extra_context: IndexMap::new(),
            metadata,
            scope: JsonValue::Object(serde_json::Map::new()),
            body_kind: BodyKind::Html,
        }
    }

    pub fn with_context_entry(mut self, key: &str, value: JsonValue) -> Self {
        self.extra_context.insert(key.to_string(), value);
        self
    }

    pub fn with_scope(mut self, scope: JsonValue) -> Self {
        self.scope = scope;
        self
    }

    pub fn with_body_kind(mut self, body_kind: BodyKind) -> Self {
        self.body_kind = body_kind;
        self
    }
}

/// Stateless request/response pipeline: resolve → derive → render →
/// dispatch. No retained state between invocations, so a `Notifier` can be
/// shared across concurrent dispatches.
pub struct Notifier<L, R, T>
where
    L: ExecutionLookup,
    R: LinkResolver,
    T: Transport,
{
    lookup: L,
    links: R,
    transport: T,
    engine: TemplateEngine,
}

impl<L, R, T> Notifier<L, R, T>
where
    L: ExecutionLookup,
    R: LinkResolver,
    T: Transport,
{
    /// Create a notifier with the built-in templates registered.
    pub fn new(lookup: L, links: R, transport: T) -> Result<Self> {
        let mut engine = TemplateEngine::new()?;
        templates::register_builtin(&mut engine)?;

        Ok(Self {
            lookup,
            links,
            transport,
            engine,
        })
    }

    /// Register an additional named template for later requests.
    pub fn register_template(&mut self, name: &str, source: &str) -> Result<()> {
        self.engine.register_template(name, source)?;
        Ok(())
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Run the full pipeline for one request. Rendering completes before
    /// dispatch begins; nothing is partially delivered on failure.
    pub async fn notify(&self, request: NotifyRequest) -> Result<DispatchAck> {
        let builder = ContextBuilder::new(self.engine.clone());

        let snapshot = builder
            .resolve(&request.execution, &request.scope, &self.lookup)
            .await?;

        debug!(
            execution_id = %snapshot.id,
            state = %snapshot.state,
            template = %request.template_ref,
            "deriving notification context"
        );

        let mut context = builder.derive(&snapshot, &self.links);
        for (key, value) in &request.extra_context {
            context.insert_if_absent(key, value.clone());
        }

        let body = self.engine.render(&request.template_ref, &context)?;

        // The subject line may itself carry placeholders; render it against
        // the same merged context as the body.
        let mut metadata = request.metadata;
        if self.engine.has_placeholders(&metadata.subject) {
            metadata.subject = self.engine.render_inline(&metadata.subject, &context)?;
        }

        let payload = NotificationPayload::new(
            &request.template_ref,
            context,
            body,
            request.body_kind,
            metadata,
        );

        info!(
            payload_id = %payload.id,
            execution_id = %snapshot.id,
            transport = self.transport.name(),
            "dispatching notification"
        );

        let ack = self.transport.dispatch(&payload).await?;
        Ok(ack)
    }
}
