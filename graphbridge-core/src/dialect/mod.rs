//! Dialect descriptors for the pluggable connectivity layer.
//!
//! A [`Dialect`] declares everything the platform needs to talk to one
//! database family: how to prompt the user for connection inputs, how to
//! assemble a connect URL, and which query templates the generic execution
//! engine may use against it. Capabilities a database does not have are
//! reported as `None`; the host branches on that sentinel and never receives
//! an error for an absent capability.

pub mod neo4j;

use crate::profile::ConnectionProfile;
use crate::rows::Value;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Separator between a URL scheme prefix and the authority, shared by all
/// dialects.
pub const URL_SEPARATOR: &str = "//";

/// Converts one driver-native value into the platform representation.
///
/// Dialects that need result post-processing return one of these from
/// [`Dialect::result_converter`]; most return `None`.
pub type ValueConverter = fn(Value) -> crate::Result<Value>;

/// Whether the underlying engine runs in-process or behind an external
/// driver-accessed service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Scope {
    /// Engine runs in-process with the driver
    Embedded,
    /// Engine is an external service reached through a standalone driver
    Standalone,
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Embedded => write!(f, "EMBEDDED"),
            Self::Standalone => write!(f, "STANDALONE"),
        }
    }
}

/// Requirement level for one connection input field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InputMandatory {
    /// The field must be supplied
    Mandatory,
    /// The field may be supplied
    Optional,
    /// The field is not used by this dialect
    #[default]
    None,
}

impl fmt::Display for InputMandatory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Mandatory => write!(f, "MANDATORY"),
            Self::Optional => write!(f, "OPTIONAL"),
            Self::None => write!(f, "NONE"),
        }
    }
}

/// Requirement levels for every connection input the platform can prompt
/// for.
///
/// A dialect's spec is static: it describes the dialect, not any particular
/// profile.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputSpec {
    /// Requirement for the authentication-type selector
    pub authentication_type: InputMandatory,
    /// Requirement for the username field
    pub username: InputMandatory,
    /// Requirement for the password field
    pub password: InputMandatory,
    /// Requirement for the catalog field
    pub catalog: InputMandatory,
    /// Requirement for the SID field
    pub sid: InputMandatory,
    /// Requirement for the database field
    pub database: InputMandatory,
}

impl InputSpec {
    /// Creates a spec with every field set to [`InputMandatory::None`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the authentication-type requirement.
    pub fn with_authentication_type(mut self, level: InputMandatory) -> Self {
        self.authentication_type = level;
        self
    }

    /// Sets the username requirement.
    pub fn with_username(mut self, level: InputMandatory) -> Self {
        self.username = level;
        self
    }

    /// Sets the password requirement.
    pub fn with_password(mut self, level: InputMandatory) -> Self {
        self.password = level;
        self
    }

    /// Sets the catalog requirement.
    pub fn with_catalog(mut self, level: InputMandatory) -> Self {
        self.catalog = level;
        self
    }

    /// Sets the SID requirement.
    pub fn with_sid(mut self, level: InputMandatory) -> Self {
        self.sid = level;
        self
    }

    /// Sets the database requirement.
    pub fn with_database(mut self, level: InputMandatory) -> Self {
        self.database = level;
        self
    }
}

/// Offset/limit window for paged metadata queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
    /// Number of rows to skip
    pub offset: u64,
    /// Maximum number of rows to return
    pub limit: u64,
}

impl Page {
    /// Creates a page window.
    pub fn new(offset: u64, limit: u64) -> Self {
        Self { offset, limit }
    }
}

/// Descriptor for one database family.
///
/// The trait is object-safe so the registry can hold
/// `Arc<dyn Dialect>` values. Every query-template method has a `None`
/// default: a dialect only overrides what its database actually supports,
/// and the host treats `None` as "not supported by this connector", never
/// as an execution error.
pub trait Dialect: Send + Sync {
    /// Display name shown to users (e.g. "Neo4j").
    fn name(&self) -> &'static str;

    /// Implementor code the platform configures (e.g. "NEO4J").
    fn implementor(&self) -> &'static str;

    /// Whether the engine is embedded or reached through a standalone
    /// driver.
    fn scope(&self) -> Scope;

    /// Registry ordering priority; lower values are consulted first.
    fn priority(&self) -> u8 {
        100
    }

    /// Requirement levels for the platform's connection inputs.
    fn input_spec(&self) -> InputSpec;

    /// Reports whether this descriptor handles the given implementor code.
    ///
    /// Matching is ASCII-case-insensitive; anything else, including the
    /// empty string, is rejected.
    fn supports_implementor(&self, implementor: &str) -> bool {
        implementor.eq_ignore_ascii_case(self.implementor())
    }

    /// Identifier of the driver the connector should load, or `None` when
    /// the framework default applies.
    fn driver_id(&self, _profile: &ConnectionProfile) -> Option<&'static str> {
        None
    }

    /// Identifier of the registered connector specialization, or `None`
    /// for the framework default.
    fn connector_id(&self, _profile: &ConnectionProfile) -> Option<&'static str> {
        None
    }

    /// Identifier of the registered data-accessor specialization, or
    /// `None` for the framework default.
    fn accessor_id(&self, _profile: &ConnectionProfile) -> Option<&'static str> {
        None
    }

    /// Builds the connect URL for a profile.
    ///
    /// The profile's URL override, when non-empty, is returned verbatim.
    fn connect_url(&self, profile: &ConnectionProfile) -> String {
        self.make_connect_url(profile, profile.database.as_deref(), true)
    }

    /// Low-level URL builder.
    ///
    /// `database` is the database segment candidate (callers may substitute
    /// a database other than the profile's); it is appended only when
    /// `include_database` is true and the value is non-empty. The override
    /// rule applies here too.
    fn make_connect_url(
        &self,
        profile: &ConnectionProfile,
        database: Option<&str>,
        include_database: bool,
    ) -> String;

    /// Probe query used to test a fresh connection.
    fn test_query(&self, _profile: &ConnectionProfile) -> Option<String> {
        None
    }

    /// Query listing databases visible to the connection.
    fn database_list_query(
        &self,
        _profile: &ConnectionProfile,
        _name_pattern: Option<&str>,
        _excludes: &[String],
        _page: Option<Page>,
    ) -> Option<String> {
        None
    }

    /// Query counting databases visible to the connection.
    fn database_count_query(
        &self,
        _profile: &ConnectionProfile,
        _name_pattern: Option<&str>,
        _excludes: &[String],
    ) -> Option<String> {
        None
    }

    /// Statement switching the session to another database.
    fn use_database_statement(
        &self,
        _profile: &ConnectionProfile,
        _database: &str,
    ) -> Option<String> {
        None
    }

    /// Query listing tables in a schema.
    fn table_list_query(
        &self,
        _profile: &ConnectionProfile,
        _schema: Option<&str>,
        _name_pattern: Option<&str>,
        _excludes: &[String],
        _page: Option<Page>,
    ) -> Option<String> {
        None
    }

    /// Query listing only table names.
    fn table_name_query(
        &self,
        _profile: &ConnectionProfile,
        _schema: Option<&str>,
        _name_pattern: Option<&str>,
    ) -> Option<String> {
        None
    }

    /// Query counting tables in a schema.
    fn table_count_query(
        &self,
        _profile: &ConnectionProfile,
        _schema: Option<&str>,
        _name_pattern: Option<&str>,
        _excludes: &[String],
    ) -> Option<String> {
        None
    }

    /// Query describing one table.
    fn table_description_query(
        &self,
        _profile: &ConnectionProfile,
        _schema: Option<&str>,
        _table: &str,
    ) -> Option<String> {
        None
    }

    /// Query listing columns of one table.
    fn column_list_query(
        &self,
        _profile: &ConnectionProfile,
        _schema: Option<&str>,
        _table: &str,
        _name_pattern: Option<&str>,
        _page: Option<Page>,
    ) -> Option<String> {
        None
    }

    /// Query counting columns of one table.
    fn column_count_query(
        &self,
        _profile: &ConnectionProfile,
        _schema: Option<&str>,
        _table: &str,
        _name_pattern: Option<&str>,
    ) -> Option<String> {
        None
    }

    /// Fully-qualified table reference for use inside generated queries.
    fn table_name(
        &self,
        _profile: &ConnectionProfile,
        _catalog: Option<&str>,
        _schema: Option<&str>,
        _table: &str,
    ) -> Option<String> {
        None
    }

    /// Identifier quoted for safe interpolation.
    fn quoted_identifier(&self, _profile: &ConnectionProfile, _name: &str) -> Option<String> {
        None
    }

    /// Default date/time literal format for this database.
    fn default_time_format(&self, _profile: &ConnectionProfile) -> Option<&'static str> {
        None
    }

    /// Expression converting a character literal to a date.
    fn char_to_date_statement(
        &self,
        _profile: &ConnectionProfile,
        _value: &str,
        _format: &str,
    ) -> Option<String> {
        None
    }

    /// Expression converting a character literal to a unix timestamp.
    fn char_to_unix_time_statement(
        &self,
        _profile: &ConnectionProfile,
        _value: &str,
    ) -> Option<String> {
        None
    }

    /// Result post-processing hook applied by data accessors.
    fn result_converter(&self) -> Option<ValueConverter> {
        None
    }

    /// Schemas hidden from browsing by default.
    fn default_exclude_schemas(&self, _profile: &ConnectionProfile) -> &'static [&'static str] {
        &[]
    }

    /// Tables hidden from browsing by default.
    fn default_exclude_tables(&self, _profile: &ConnectionProfile) -> &'static [&'static str] {
        &[]
    }

    /// Table types requested from driver metadata, empty for the driver
    /// default.
    fn result_set_table_types(&self, _profile: &ConnectionProfile) -> &'static [&'static str] {
        &[]
    }
}
