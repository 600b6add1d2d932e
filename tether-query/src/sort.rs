//! Whitelisted sort columns and direction parsing.

use serde::{Deserialize, Serialize};
use tracing::debug;

/// Sort direction. Anything that isn't `desc` is treated as `asc`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    /// Permissive parse: `"desc"` (any case) means descending, everything
    /// else — including `None` — defaults to ascending.
    pub fn parse_permissive(value: Option<&str>) -> Self {
        match value {
            Some(v) if v.eq_ignore_ascii_case("desc") => Self::Desc,
            _ => Self::Asc,
        }
    }

    pub fn as_sql(self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}

/// One whitelisted sortable column: the key clients send and the order
/// expression the query layer uses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortableColumn {
    pub key: String,
    pub expression: String,
}

/// Ordered whitelist of sortable columns; the first entry is the default.
///
/// Order expressions are resolved from this whitelist only — arbitrary
/// user-supplied column names never reach a query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortableColumns {
    columns: Vec<SortableColumn>,
}

impl SortableColumns {
    /// Build a whitelist from `(key, order expression)` pairs.
    ///
    /// # Panics
    /// Panics if `columns` is empty — a list endpoint without a default
    /// sort is a configuration bug.
    pub fn new<'a>(columns: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let columns: Vec<SortableColumn> = columns
            .into_iter()
            .map(|(key, expression)| SortableColumn {
                key: key.to_string(),
                expression: expression.to_string(),
            })
            .collect();
        assert!(!columns.is_empty(), "sortable column whitelist is empty");
        Self { columns }
    }

    /// The default sort column (first declared).
    pub fn default_column(&self) -> &SortableColumn {
        &self.columns[0]
    }

    pub fn contains(&self, key: &str) -> bool {
        self.columns.iter().any(|c| c.key == key)
    }

    /// Resolve a requested key against the whitelist, falling back to the
    /// default column for unknown or missing keys.
    pub fn resolve(&self, key: Option<&str>) -> &SortableColumn {
        match key {
            Some(k) => self.columns.iter().find(|c| c.key == k).unwrap_or_else(|| {
                debug!(requested = k, "unknown sort key, falling back to default");
                self.default_column()
            }),
            None => self.default_column(),
        }
    }
}

/// Resolved ordering for the query layer: a whitelisted expression plus a
/// validated direction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderSpec {
    pub expression: String,
    pub direction: SortDirection,
}

impl OrderSpec {
    /// Render as an ORDER BY fragment, e.g. `"clients.name ASC"`.
    pub fn to_sql(&self) -> String {
        format!("{} {}", self.expression, self.direction.as_sql())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn desc_is_case_insensitive_everything_else_is_asc() {
        assert_eq!(SortDirection::parse_permissive(Some("DESC")), SortDirection::Desc);
        assert_eq!(SortDirection::parse_permissive(Some("desc")), SortDirection::Desc);
        assert_eq!(SortDirection::parse_permissive(Some("asc")), SortDirection::Asc);
        assert_eq!(SortDirection::parse_permissive(Some("sideways")), SortDirection::Asc);
        assert_eq!(SortDirection::parse_permissive(None), SortDirection::Asc);
    }

    #[test]
    fn unknown_keys_resolve_to_the_first_column() {
        let columns = SortableColumns::new([("name", "clients.name"), ("city", "clients.city")]);
        assert_eq!(columns.resolve(Some("city")).expression, "clients.city");
        assert_eq!(columns.resolve(Some("password")).key, "name");
        assert_eq!(columns.resolve(None).key, "name");
    }

    #[test]
    fn order_spec_renders_sql_fragment() {
        let spec = OrderSpec {
            expression: "clients.name".to_string(),
            direction: SortDirection::Desc,
        };
        assert_eq!(spec.to_sql(), "clients.name DESC");
    }
}
