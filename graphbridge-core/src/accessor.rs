//! Data accessors translate driver-native result rows into the platform's
//! generic row representation.
//!
//! The default trait methods carry the whole translation; a dialect-specific
//! accessor only exists so the registry has a concrete type to hand out, and
//! overrides something only when its driver produces values the generic
//! translation cannot take as-is.

use crate::Result;
use crate::dialect::ValueConverter;
use crate::error::GraphBridgeError;
use crate::rows::{NativeResultSet, Row, Value};
use std::sync::Arc;

/// Translates [`NativeResultSet`]s into generic [`Row`]s.
pub trait DataAccessor: Send + Sync {
    /// Normalizes one driver-native value.
    ///
    /// The default is the identity; accessors override this when the driver
    /// hands back values the platform cannot consume directly.
    ///
    /// # Errors
    /// Returns a query-execution error when a value cannot be normalized.
    fn convert_value(&self, value: Value) -> Result<Value> {
        Ok(value)
    }

    /// Translates a full result set, applying the dialect's optional result
    /// converter after the accessor's own normalization.
    ///
    /// # Errors
    /// Returns a query-execution error when a row's width does not match
    /// the column list or a value conversion fails.
    fn into_rows(
        &self,
        result: NativeResultSet,
        converter: Option<ValueConverter>,
    ) -> Result<Vec<Row>> {
        let columns = Arc::new(result.columns);
        let mut rows = Vec::with_capacity(result.rows.len());

        for native_row in result.rows {
            if native_row.len() != columns.len() {
                return Err(GraphBridgeError::query_failed(format!(
                    "result row has {} values but {} columns were declared",
                    native_row.len(),
                    columns.len()
                )));
            }

            let mut values = Vec::with_capacity(native_row.len());
            for value in native_row {
                let value = self.convert_value(value)?;
                let value = match converter {
                    Some(convert) => convert(value)?,
                    None => value,
                };
                values.push(value);
            }
            rows.push(Row::new(Arc::clone(&columns), values));
        }

        Ok(rows)
    }
}

/// Framework-default accessor; fully satisfied by the trait defaults.
#[derive(Debug, Clone, Copy, Default)]
pub struct GenericDataAccessor;

impl DataAccessor for GenericDataAccessor {}

/// Accessor specialization for Neo4j.
///
/// Adds no behavior of its own: the generic translation already handles
/// everything the Bolt driver produces. The type exists so the plugin
/// registry has a concrete accessor to instantiate for the Neo4j dialect.
#[derive(Debug, Clone, Copy, Default)]
pub struct Neo4jDataAccessor;

impl DataAccessor for Neo4jDataAccessor {}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_result() -> NativeResultSet {
        let mut result = NativeResultSet::new(vec!["name".to_string(), "age".to_string()]);
        result.push_row(vec![Value::Text("neo".to_string()), Value::Int(3)]);
        result.push_row(vec![Value::Text("trinity".to_string()), Value::Int(5)]);
        result
    }

    #[test]
    fn test_generic_translation() {
        let accessor = Neo4jDataAccessor;
        let rows = accessor
            .into_rows(sample_result(), None)
            .expect("translation succeeds");

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].get("name"), Some(&Value::Text("neo".to_string())));
        assert_eq!(rows[1].get("age"), Some(&Value::Int(5)));
    }

    #[test]
    fn test_width_mismatch_is_rejected() {
        let accessor = GenericDataAccessor;
        let mut result = NativeResultSet::new(vec!["name".to_string(), "age".to_string()]);
        result.push_row(vec![Value::Text("neo".to_string())]);

        let err = accessor
            .into_rows(result, None)
            .expect_err("short row is rejected");
        assert!(err.to_string().contains("1 values"));
    }

    #[test]
    fn test_dialect_converter_is_applied() {
        fn double_ints(value: Value) -> Result<Value> {
            Ok(match value {
                Value::Int(n) => Value::Int(n * 2),
                other => other,
            })
        }

        let accessor = Neo4jDataAccessor;
        let rows = accessor
            .into_rows(sample_result(), Some(double_ints))
            .expect("translation succeeds");

        assert_eq!(rows[0].get("age"), Some(&Value::Int(6)));
        assert_eq!(rows[1].get("age"), Some(&Value::Int(10)));
        // Non-integer values pass through untouched
        assert_eq!(rows[0].get("name"), Some(&Value::Text("neo".to_string())));
    }

    #[test]
    fn test_neo4j_accessor_matches_generic_behavior() {
        // The Neo4j accessor adds no overrides, so both accessors must
        // translate identically.
        let generic = GenericDataAccessor
            .into_rows(sample_result(), None)
            .expect("generic translation succeeds");
        let neo4j = Neo4jDataAccessor
            .into_rows(sample_result(), None)
            .expect("neo4j translation succeeds");

        assert_eq!(generic, neo4j);
    }
}
