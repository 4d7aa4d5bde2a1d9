//! Dialect and plugin registry.
//!
//! The host resolves a dialect by the implementor code it was configured
//! with, then uses the ids the dialect reports to instantiate its connector
//! and data-accessor specializations. Exactly one dialect may claim an
//! implementor code; matching is case-insensitive.

use crate::accessor::{DataAccessor, GenericDataAccessor, Neo4jDataAccessor};
use crate::connector::{ConnectionSource, Connector, GenericConnector, Neo4jConnector};
use crate::dialect::{Dialect, neo4j::Neo4jDialect};
use crate::error::GraphBridgeError;
use crate::profile::ConnectionProfile;
use crate::{Result, Value};
use std::collections::HashMap;
use std::sync::Arc;

type ConnectorFactory = Arc<dyn Fn(Arc<dyn ConnectionSource>) -> Box<dyn Connector> + Send + Sync>;
type AccessorFactory = Arc<dyn Fn() -> Box<dyn DataAccessor> + Send + Sync>;

/// Registry of dialect descriptors and their plugin factories.
pub struct DialectRegistry {
    dialects: Vec<Arc<dyn Dialect>>,
    connectors: HashMap<String, ConnectorFactory>,
    accessors: HashMap<String, AccessorFactory>,
}

impl Default for DialectRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl DialectRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self {
            dialects: Vec::new(),
            connectors: HashMap::new(),
            accessors: HashMap::new(),
        }
    }

    /// Creates a registry preloaded with the dialects this crate ships.
    ///
    /// # Errors
    /// Returns a configuration error if a built-in registration conflicts,
    /// which would indicate a packaging bug.
    pub fn with_builtins() -> Result<Self> {
        let mut registry = Self::new();

        registry.register_dialect(Arc::new(Neo4jDialect))?;
        registry.register_connector("neo4j", |source| Box::new(Neo4jConnector::new(source)));
        registry.register_accessor("neo4j", || Box::new(Neo4jDataAccessor));

        Ok(registry)
    }

    /// Registers a dialect descriptor.
    ///
    /// # Errors
    /// Returns a configuration error when another registered dialect
    /// already claims the same implementor code (case-insensitive).
    pub fn register_dialect(&mut self, dialect: Arc<dyn Dialect>) -> Result<()> {
        if let Some(existing) = self
            .dialects
            .iter()
            .find(|existing| existing.supports_implementor(dialect.implementor()))
        {
            return Err(GraphBridgeError::configuration(format!(
                "implementor {} is already registered by dialect {}",
                dialect.implementor(),
                existing.name()
            )));
        }

        self.dialects.push(dialect);
        self.dialects.sort_by_key(|dialect| dialect.priority());
        Ok(())
    }

    /// Registers a connector factory under an id dialects can report.
    pub fn register_connector<F>(&mut self, id: impl Into<String>, factory: F)
    where
        F: Fn(Arc<dyn ConnectionSource>) -> Box<dyn Connector> + Send + Sync + 'static,
    {
        self.connectors.insert(id.into(), Arc::new(factory));
    }

    /// Registers a data-accessor factory under an id dialects can report.
    pub fn register_accessor<F>(&mut self, id: impl Into<String>, factory: F)
    where
        F: Fn() -> Box<dyn DataAccessor> + Send + Sync + 'static,
    {
        self.accessors.insert(id.into(), Arc::new(factory));
    }

    /// Resolves the dialect handling an implementor code.
    ///
    /// Dialects are consulted in priority order; matching is
    /// case-insensitive.
    pub fn resolve(&self, implementor: &str) -> Option<Arc<dyn Dialect>> {
        self.dialects
            .iter()
            .find(|dialect| dialect.supports_implementor(implementor))
            .cloned()
    }

    /// All registered dialects in priority order.
    pub fn dialects(&self) -> &[Arc<dyn Dialect>] {
        &self.dialects
    }

    /// Instantiates the connector for a dialect.
    ///
    /// A dialect reporting no connector id gets the framework default,
    /// which passes the source's handle through unchanged.
    ///
    /// # Errors
    /// Returns a configuration error when the dialect names a connector id
    /// nothing was registered under.
    pub fn connector_for(
        &self,
        dialect: &dyn Dialect,
        profile: &ConnectionProfile,
        source: Arc<dyn ConnectionSource>,
    ) -> Result<Box<dyn Connector>> {
        match dialect.connector_id(profile) {
            None => Ok(Box::new(GenericConnector::new(source))),
            Some(id) => {
                let factory = self.connectors.get(id).ok_or_else(|| {
                    GraphBridgeError::configuration(format!(
                        "dialect {} names unknown connector id {}",
                        dialect.name(),
                        id
                    ))
                })?;
                Ok(factory(source))
            }
        }
    }

    /// Instantiates the data accessor for a dialect.
    ///
    /// # Errors
    /// Returns a configuration error when the dialect names an accessor id
    /// nothing was registered under.
    pub fn accessor_for(
        &self,
        dialect: &dyn Dialect,
        profile: &ConnectionProfile,
    ) -> Result<Box<dyn DataAccessor>> {
        match dialect.accessor_id(profile) {
            None => Ok(Box::new(GenericDataAccessor)),
            Some(id) => {
                let factory = self.accessors.get(id).ok_or_else(|| {
                    GraphBridgeError::configuration(format!(
                        "dialect {} names unknown accessor id {}",
                        dialect.name(),
                        id
                    ))
                })?;
                Ok(factory())
            }
        }
    }

    /// Runs a dialect's result converter over a value on behalf of the
    /// host, reporting an unsupported-capability error when the dialect has
    /// none.
    ///
    /// # Errors
    /// Returns an unsupported-capability error when the dialect declares no
    /// converter, or the converter's own error when it fails.
    pub fn convert_result(&self, dialect: &dyn Dialect, value: Value) -> Result<Value> {
        match dialect.result_converter() {
            Some(convert) => convert(value),
            None => Err(GraphBridgeError::unsupported_capability(
                "result conversion",
                dialect.name(),
            )),
        }
    }
}
