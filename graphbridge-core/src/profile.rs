//! Connection profiles consumed by dialects and connectors.
//!
//! A [`ConnectionProfile`] is created and edited by the platform's
//! connection-management layer; this crate only reads it. Credentials are
//! held in a zeroize-on-drop [`Secret`] and never appear in `Debug`,
//! `Display`, serialized output, or error messages.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// How the user authenticates against the target database.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AuthenticationType {
    /// Username and password supplied by the user
    #[default]
    UserPassword,
    /// Credentials are managed by the dialect itself
    Dialect,
    /// No authentication
    None,
}

impl fmt::Display for AuthenticationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UserPassword => write!(f, "USERPASSWORD"),
            Self::Dialect => write!(f, "DIALECT"),
            Self::None => write!(f, "NONE"),
        }
    }
}

/// A password held in memory only as long as the profile lives.
///
/// The inner value is zeroized on drop and masked in `Debug` output. It can
/// only be read back through [`Secret::expose`], which keeps accidental
/// logging greppable.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct Secret(String);

impl Secret {
    /// Wraps a sensitive value.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Returns the protected value.
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Secret(****)")
    }
}

/// Connection parameters for one database target.
///
/// # Security
/// The password never leaves the profile except through
/// [`ConnectionProfile::driver_properties`], the opaque bag handed to the
/// driver layer. `Display` and `Debug` stay credential-free.
///
/// # Example
/// ```rust
/// use graphbridge_core::profile::ConnectionProfile;
///
/// let profile = ConnectionProfile::new("graphhost")
///     .with_port(7687)
///     .with_database("neo4j")
///     .with_username("reader");
///
/// assert!(profile.validate().is_ok());
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConnectionProfile {
    /// Database host address
    pub hostname: String,
    /// Optional port number
    pub port: Option<u16>,
    /// Optional database name
    pub database: Option<String>,
    /// Optional username
    pub username: Option<String>,
    /// Password, zeroized on drop and never serialized
    #[serde(skip)]
    password: Option<Secret>,
    /// Authentication mode the user selected
    pub authentication: AuthenticationType,
    /// Fully-specified URL that bypasses URL building when present
    pub url_override: Option<String>,
    /// Extra driver options forwarded opaquely to the driver layer
    pub properties: HashMap<String, String>,
}

impl fmt::Display for ConnectionProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ConnectionProfile({}{}{})",
            self.hostname,
            self.port.map_or_else(String::new, |p| format!(":{}", p)),
            self.database
                .as_ref()
                .map_or_else(String::new, |db| format!("/{}", db))
        )
        // Intentionally omit username and never include credentials
    }
}

impl ConnectionProfile {
    /// Creates a new profile for the given host.
    pub fn new(hostname: impl Into<String>) -> Self {
        Self {
            hostname: hostname.into(),
            ..Default::default()
        }
    }

    /// Builder method to set port.
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }

    /// Builder method to set database.
    pub fn with_database(mut self, database: impl Into<String>) -> Self {
        self.database = Some(database.into());
        self
    }

    /// Builder method to set username.
    pub fn with_username(mut self, username: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self
    }

    /// Builder method to set the password.
    pub fn with_password(mut self, password: impl Into<String>) -> Self {
        self.password = Some(Secret::new(password));
        self
    }

    /// Builder method to set the authentication mode.
    pub fn with_authentication(mut self, authentication: AuthenticationType) -> Self {
        self.authentication = authentication;
        self
    }

    /// Builder method to set a verbatim URL override.
    pub fn with_url_override(mut self, url: impl Into<String>) -> Self {
        self.url_override = Some(url.into());
        self
    }

    /// Builder method to add one extra driver property.
    pub fn with_property(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.properties.insert(key.into(), value.into());
        self
    }

    /// Returns the password, if one was configured.
    pub fn password(&self) -> Option<&str> {
        self.password.as_ref().map(Secret::expose)
    }

    /// Returns the URL override if it is present and non-empty.
    pub fn url_override(&self) -> Option<&str> {
        self.url_override.as_deref().filter(|url| !url.is_empty())
    }

    /// Validates the profile before it is handed to a dialect.
    ///
    /// A non-empty URL override replaces the structured fields, so in that
    /// case only the override itself is checked.
    ///
    /// # Errors
    /// Returns a configuration error if the profile cannot produce a
    /// usable connect URL.
    pub fn validate(&self) -> crate::Result<()> {
        if let Some(url) = self.url_override() {
            url::Url::parse(url).map_err(|e| {
                crate::error::GraphBridgeError::configuration(format!(
                    "Invalid connection URL override: {}",
                    e
                ))
            })?;
            return Ok(());
        }

        if self.hostname.is_empty() {
            return Err(crate::error::GraphBridgeError::configuration(
                "hostname cannot be empty",
            ));
        }

        if let Some(port) = self.port {
            if port == 0 {
                return Err(crate::error::GraphBridgeError::configuration(
                    "port must be greater than 0",
                ));
            }
        }

        Ok(())
    }

    /// Assembles the property bag forwarded verbatim to the driver layer.
    ///
    /// Extra options come first; `user` and `password` entries are filled
    /// from the profile fields when present. The bag is not interpreted by
    /// this crate beyond forwarding.
    pub fn driver_properties(&self) -> HashMap<String, String> {
        let mut properties = self.properties.clone();
        if let Some(username) = &self.username {
            properties.insert("user".to_string(), username.clone());
        }
        if let Some(password) = &self.password {
            properties.insert("password".to_string(), password.expose().to_string());
        }
        properties
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_builder() {
        let profile = ConnectionProfile::new("example.com")
            .with_port(7687)
            .with_database("movies")
            .with_username("reader")
            .with_password("hunter2");

        assert_eq!(profile.hostname, "example.com");
        assert_eq!(profile.port, Some(7687));
        assert_eq!(profile.database, Some("movies".to_string()));
        assert_eq!(profile.username, Some("reader".to_string()));
        assert_eq!(profile.password(), Some("hunter2"));
        assert_eq!(profile.authentication, AuthenticationType::UserPassword);

        let profile = profile.with_authentication(AuthenticationType::Dialect);
        assert_eq!(profile.authentication, AuthenticationType::Dialect);
    }

    #[test]
    fn test_profile_validation() {
        // Valid profile should pass
        let profile = ConnectionProfile::new("graphhost");
        assert!(profile.validate().is_ok());

        // Empty hostname should fail
        let profile = ConnectionProfile::new("");
        assert!(profile.validate().is_err());

        // Port zero should fail
        let profile = ConnectionProfile::new("graphhost").with_port(0);
        assert!(profile.validate().is_err());

        // A parseable override makes the structured fields irrelevant
        let profile = ConnectionProfile::new("").with_url_override("bolt://graphhost:7687/neo4j");
        assert!(profile.validate().is_ok());

        // A malformed override is rejected
        let profile = ConnectionProfile::new("graphhost").with_url_override("not a url");
        assert!(profile.validate().is_err());
    }

    #[test]
    fn test_empty_override_is_ignored() {
        let profile = ConnectionProfile::new("graphhost").with_url_override("");
        assert_eq!(profile.url_override(), None);
        assert!(profile.validate().is_ok());
    }

    #[test]
    fn test_display_no_credentials() {
        let profile = ConnectionProfile::new("example.com")
            .with_port(7687)
            .with_database("movies")
            .with_username("reader")
            .with_password("hunter2");

        let display = format!("{}", profile);

        assert!(display.contains("example.com"));
        assert!(display.contains("7687"));
        assert!(display.contains("movies"));

        // Should NOT contain username or password (security)
        assert!(!display.contains("reader"));
        assert!(!display.contains("hunter2"));
    }

    #[test]
    fn test_debug_masks_password() {
        let profile = ConnectionProfile::new("graphhost").with_password("hunter2");
        let debug = format!("{:?}", profile);

        assert!(debug.contains("Secret(****)"));
        assert!(!debug.contains("hunter2"));
    }

    #[test]
    fn test_serialization_skips_password() {
        let profile = ConnectionProfile::new("graphhost")
            .with_username("reader")
            .with_password("hunter2");

        let json = serde_json::to_string(&profile).expect("profile serializes");
        assert!(json.contains("reader"));
        assert!(!json.contains("hunter2"));
    }

    #[test]
    fn test_driver_properties() {
        let profile = ConnectionProfile::new("graphhost")
            .with_username("reader")
            .with_password("hunter2")
            .with_property("connection.timeout", "30");

        let properties = profile.driver_properties();
        assert_eq!(properties.get("user"), Some(&"reader".to_string()));
        assert_eq!(properties.get("password"), Some(&"hunter2".to_string()));
        assert_eq!(
            properties.get("connection.timeout"),
            Some(&"30".to_string())
        );
    }

    #[test]
    fn test_authentication_type_display() {
        assert_eq!(
            format!("{}", AuthenticationType::UserPassword),
            "USERPASSWORD"
        );
        assert_eq!(format!("{}", AuthenticationType::Dialect), "DIALECT");
        assert_eq!(format!("{}", AuthenticationType::None), "NONE");
    }
}
