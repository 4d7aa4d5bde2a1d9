//! Neo4j dialect descriptor.
//!
//! Neo4j speaks Cypher over the Bolt protocol, so almost none of the SQL
//! query templates apply; the descriptor declares connection inputs, builds
//! `bolt://` URLs, and offers a trivial graph probe as its test query.
//! Everything else inherits the `None` default, which the host reads as
//! "not supported by this connector".

use super::{Dialect, InputMandatory, InputSpec, Scope, URL_SEPARATOR};
use crate::profile::ConnectionProfile;

const BOLT_URL_PREFIX: &str = "bolt:";

/// Probe executed by the platform's connection test.
const TEST_QUERY: &str = "MATCH (n) RETURN n LIMIT 1";

/// Dialect descriptor for Neo4j graph databases.
#[derive(Debug, Clone, Copy, Default)]
pub struct Neo4jDialect;

impl Dialect for Neo4jDialect {
    fn name(&self) -> &'static str {
        "Neo4j"
    }

    fn implementor(&self) -> &'static str {
        "NEO4J"
    }

    fn scope(&self) -> Scope {
        Scope::Embedded
    }

    fn priority(&self) -> u8 {
        3
    }

    fn input_spec(&self) -> InputSpec {
        InputSpec::new()
            .with_authentication_type(InputMandatory::Mandatory)
            .with_username(InputMandatory::Mandatory)
            .with_password(InputMandatory::Mandatory)
            .with_catalog(InputMandatory::None)
            .with_sid(InputMandatory::None)
            .with_database(InputMandatory::None)
    }

    fn driver_id(&self, _profile: &ConnectionProfile) -> Option<&'static str> {
        Some("neo4j")
    }

    fn connector_id(&self, _profile: &ConnectionProfile) -> Option<&'static str> {
        Some("neo4j")
    }

    fn accessor_id(&self, _profile: &ConnectionProfile) -> Option<&'static str> {
        Some("neo4j")
    }

    fn make_connect_url(
        &self,
        profile: &ConnectionProfile,
        database: Option<&str>,
        include_database: bool,
    ) -> String {
        if let Some(url) = profile.url_override() {
            return url.to_string();
        }

        let mut url = String::new();
        url.push_str(BOLT_URL_PREFIX);

        // Set hostname
        url.push_str(URL_SEPARATOR);
        url.push_str(&profile.hostname);

        // Set port
        if let Some(port) = profile.port {
            url.push(':');
            url.push_str(&port.to_string());
        }

        url.push('/');

        // Set database
        if include_database {
            if let Some(database) = database {
                if !database.is_empty() {
                    url.push_str(database);
                }
            }
        }

        url
    }

    fn test_query(&self, _profile: &ConnectionProfile) -> Option<String> {
        Some(TEST_QUERY.to_string())
    }
}
