//! Connectors turn a connect URL plus a driver property bag into a live
//! connection handle.
//!
//! Driver loading, pooling, and credential injection belong to the shared
//! [`ConnectionSource`] this crate receives from its host; a connector only
//! composes that source and post-processes the handle it returns. Handles
//! are owned by the caller, which is responsible for closing them —
//! connectors never retain or pool connections.

use crate::Result;
use crate::rows::NativeResultSet;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::error;

/// A live connection obtained from the driver layer.
///
/// The trait is deliberately narrow: the generic execution engine only
/// needs to run statements and control the commit mode.
#[async_trait]
pub trait ConnectionHandle: Send + Sync {
    /// Switches the handle between auto-commit and manual-commit mode.
    ///
    /// # Errors
    /// Returns a connection error when the driver rejects the mode change.
    async fn set_auto_commit(&mut self, enabled: bool) -> Result<()>;

    /// Current commit mode of the handle.
    fn auto_commit(&self) -> bool;

    /// Runs one statement and returns the driver-native result rows.
    async fn execute(&mut self, statement: &str) -> Result<NativeResultSet>;

    /// Releases the connection.
    async fn close(self: Box<Self>) -> Result<()>;
}

/// The shared base connector this adapter composes.
///
/// Implementations own driver loading, connection caching, and credential
/// injection; callers here pass the property bag through without
/// interpreting it.
#[async_trait]
pub trait ConnectionSource: Send + Sync {
    /// Obtains a live handle for the given URL.
    ///
    /// # Errors
    /// Returns a connection error when no handle can be produced.
    async fn obtain(
        &self,
        url: &str,
        properties: &HashMap<String, String>,
        driver_id: &str,
    ) -> Result<Box<dyn ConnectionHandle>>;
}

/// A dialect-specific connector the registry can instantiate.
#[async_trait]
pub trait Connector: Send + Sync {
    /// Obtains a connection, applying any dialect-specific post-processing.
    ///
    /// # Errors
    /// Returns a connection error when the underlying source fails.
    async fn obtain_connection(
        &self,
        url: &str,
        properties: &HashMap<String, String>,
        driver_id: &str,
    ) -> Result<Box<dyn ConnectionHandle>>;
}

/// Framework-default connector: hands the source's handle through
/// unchanged.
pub struct GenericConnector {
    source: Arc<dyn ConnectionSource>,
}

impl GenericConnector {
    /// Creates a connector over the shared source.
    pub fn new(source: Arc<dyn ConnectionSource>) -> Self {
        Self { source }
    }
}

#[async_trait]
impl Connector for GenericConnector {
    async fn obtain_connection(
        &self,
        url: &str,
        properties: &HashMap<String, String>,
        driver_id: &str,
    ) -> Result<Box<dyn ConnectionHandle>> {
        self.source.obtain(url, properties, driver_id).await
    }
}

/// Connector specialization for Neo4j.
///
/// Neo4j connections are switched to manual-commit mode before they are
/// handed to the caller. The switch is best-effort: a failure is logged and
/// swallowed, and the caller still receives the handle — possibly still in
/// auto-commit mode. Returning *a* usable connection takes priority over a
/// strict transaction-mode guarantee.
pub struct Neo4jConnector {
    source: Arc<dyn ConnectionSource>,
}

impl Neo4jConnector {
    /// Creates a connector over the shared source.
    pub fn new(source: Arc<dyn ConnectionSource>) -> Self {
        Self { source }
    }
}

#[async_trait]
impl Connector for Neo4jConnector {
    async fn obtain_connection(
        &self,
        url: &str,
        properties: &HashMap<String, String>,
        driver_id: &str,
    ) -> Result<Box<dyn ConnectionHandle>> {
        let mut connection = self.source.obtain(url, properties, driver_id).await?;

        if let Err(e) = connection.set_auto_commit(false).await {
            error!(error = %e, "failed to disable auto-commit; returning connection as-is");
        }

        Ok(connection)
    }
}
