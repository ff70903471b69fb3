//! STDIO transport implementation.
//!
//! Standard input/output transport for MCP - the only transport this server
//! speaks. Stdout carries protocol frames; all diagnostics go to stderr.

use std::future::Future;

use rmcp::{
    RoleServer, ServiceExt,
    service::QuitReason,
    transport::IntoTransport,
};
use tokio::task::JoinError;
use tracing::{error, info};

use super::{TransportError, TransportResult};
use crate::core::McpServer;
use crate::core::shutdown::{ShutdownHook, interrupted};

/// Why a served session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShutdownReason {
    /// The shutdown signal fired; the service was cancelled.
    Interrupted,
    /// The client closed its end of the stream.
    ClientClosed,
}

/// STDIO transport handler.
pub struct StdioTransport;

impl StdioTransport {
    /// Run the STDIO transport.
    ///
    /// Serves until the client closes the stream or an interrupt is received.
    /// The interrupt listener is active from before the initialize handshake.
    pub async fn run(server: McpServer) -> TransportResult<ShutdownReason> {
        Self::serve_until(server, rmcp::transport::stdio(), interrupted()).await
    }

    /// Serve `server` over `transport` until the client disconnects or
    /// `shutdown` resolves.
    ///
    /// When `shutdown` resolves during the handshake the pending session is
    /// dropped. Once serving, the running service is cancelled through its
    /// cancellation token, which closes the transport before this returns.
    pub async fn serve_until<T, E, A, F>(
        server: McpServer,
        transport: T,
        shutdown: F,
    ) -> TransportResult<ShutdownReason>
    where
        T: IntoTransport<RoleServer, E, A>,
        E: std::error::Error + Send + Sync + 'static,
        F: Future<Output = ()>,
    {
        tokio::pin!(shutdown);

        let service = tokio::select! {
            service = server.serve(transport) => {
                service.map_err(|e| TransportError::init(e.to_string()))?
            }
            _ = &mut shutdown => {
                info!("Shutdown requested before the client finished initializing");
                return Ok(ShutdownReason::Interrupted);
            }
        };

        info!("MCP Calculator server running on stdio");

        let token = service.cancellation_token();
        let hook = ShutdownHook::new(move || token.cancel());

        let waiting = service.waiting();
        tokio::pin!(waiting);

        tokio::select! {
            outcome = &mut waiting => quit_outcome(outcome),
            _ = &mut shutdown => {
                hook.trigger();
                quit_outcome((&mut waiting).await)
            }
        }
    }
}

/// Map the running service's exit onto a [`ShutdownReason`], logging
/// service-level failures.
fn quit_outcome(outcome: Result<QuitReason, JoinError>) -> TransportResult<ShutdownReason> {
    match outcome {
        Ok(QuitReason::Cancelled) => {
            info!("STDIO transport cancelled");
            Ok(ShutdownReason::Interrupted)
        }
        Ok(QuitReason::Closed) => {
            info!("STDIO transport closed by client");
            Ok(ShutdownReason::ClientClosed)
        }
        Ok(QuitReason::JoinError(e)) | Err(e) => {
            error!("MCP server error: {}", e);
            Err(TransportError::service(e.to_string()))
        }
    }
}
