//! Clamped pagination parameters.

use serde::{Deserialize, Serialize};

use crate::sort::{OrderSpec, SortDirection, SortableColumns};

/// Limit applied when the request does not specify one.
pub const DEFAULT_LIMIT: u32 = 20;
/// Hard ceiling on page size.
pub const MAX_LIMIT: u32 = 100;

/// Raw, untrusted pagination input as it arrives from a query string layer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageRequest {
    pub page: Option<i64>,
    pub limit: Option<i64>,
    pub sort_by: Option<String>,
    pub sort_direction: Option<String>,
}

/// Validated pagination parameters.
///
/// Every field is in range: `page` within `[1, max_page]`, `limit` within
/// `[1, MAX_LIMIT]`, `sort_by` a whitelisted key, `order_spec` resolved
/// from the whitelist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageParams {
    pub page: u32,
    pub limit: u32,
    pub max_page: u32,
    pub sort_by: String,
    pub direction: SortDirection,
    pub order_spec: OrderSpec,
}

impl PageParams {
    /// Zero-based row offset for the query layer.
    pub fn offset(&self) -> u64 {
        u64::from(self.page - 1) * u64::from(self.limit)
    }
}

/// Validate and clamp a page request against a row count and a sortable
/// column whitelist. Total: malformed input falls back, it never errors.
pub fn validate(request: &PageRequest, total_count: u64, columns: &SortableColumns) -> PageParams {
    let limit = match request.limit {
        Some(v) if v >= 1 => u32::try_from(v).unwrap_or(MAX_LIMIT).min(MAX_LIMIT),
        Some(_) => 1,
        None => DEFAULT_LIMIT,
    };

    let max_page = u32::try_from(total_count.div_ceil(u64::from(limit)))
        .unwrap_or(u32::MAX)
        .max(1);

    let page = match request.page {
        Some(v) if v >= 1 => u32::try_from(v).unwrap_or(max_page).min(max_page),
        _ => 1,
    };

    let column = columns.resolve(request.sort_by.as_deref());
    let direction = SortDirection::parse_permissive(request.sort_direction.as_deref());

    PageParams {
        page,
        limit,
        max_page,
        sort_by: column.key.clone(),
        direction,
        order_spec: OrderSpec {
            expression: column.expression.clone(),
            direction,
        },
    }
}
