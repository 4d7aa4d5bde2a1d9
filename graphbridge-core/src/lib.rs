//! Core connectivity layer for graphbridge.
//!
//! This crate provides the pluggable pieces the discovery platform uses to
//! talk to databases: dialect descriptors that declare how a connection is
//! configured and which query templates a database supports, connectors that
//! turn a connect URL plus a property bag into a live connection handle, and
//! data accessors that translate driver-native result rows into the
//! platform's generic row representation.
//!
//! # Security Guarantees
//! - Credentials are never stored in logs, errors, or serialized output
//! - Connection URLs are redacted before reaching any log sink
//! - Passwords are zeroized in memory when profiles are dropped
//!
//! # Architecture
//! - Dialects are resolved through a registry by implementor code
//! - Connectors compose an injected [`connector::ConnectionSource`] rather
//!   than extending it
//! - Absent capabilities are expressed as `None`, never as errors

pub mod accessor;
pub mod connector;
pub mod dialect;
pub mod error;
pub mod logging;
pub mod profile;
pub mod registry;
pub mod rows;

// Re-export commonly used types
pub use accessor::{DataAccessor, GenericDataAccessor, Neo4jDataAccessor};
pub use connector::{ConnectionHandle, ConnectionSource, Connector, Neo4jConnector};
pub use dialect::{Dialect, InputMandatory, InputSpec, Page, Scope, neo4j::Neo4jDialect};
pub use error::{GraphBridgeError, Result};
pub use logging::init_logging;
pub use profile::{AuthenticationType, ConnectionProfile, Secret};
pub use registry::DialectRegistry;
pub use rows::{NativeResultSet, Row, Value};
