use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use crate::{
    error::PaginationError,
    pagination::{check_limit, check_page, check_total_items, Pagination, Parameters},
    paginator::Paginator,
};

/// Loosely typed pagination input, as found in a json body
///
/// Nothing is checked until it is turned into a `Pagination`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationRequest {
    /// Maximum items per page, `-1` for no limit
    #[serde(default = "default_limit", alias = "per_page", alias = "perPage")]
    pub limit: Value,
    /// Requested page, starting at 1
    #[serde(default = "default_page")]
    pub page: Value,
    /// Items across all pages
    #[serde(default = "default_total_items", alias = "total_items")]
    pub total_items: Value,
    /// Extra parameters for the pagination links
    #[serde(default)]
    pub parameters: Parameters,
}

fn default_limit() -> Value {
    Value::from(Pagination::NO_LIMIT)
}

fn default_page() -> Value {
    Value::from(1)
}

fn default_total_items() -> Value {
    Value::from(0)
}

impl Default for PaginationRequest {
    fn default() -> Self {
        Self {
            limit: default_limit(),
            page: default_page(),
            total_items: default_total_items(),
            parameters: Parameters::new(),
        }
    }
}

impl TryFrom<PaginationRequest> for Pagination {
    type Error = PaginationError;

    fn try_from(request: PaginationRequest) -> Result<Self, Self::Error> {
        Self::from_values(&request.limit, &request.page, &request.total_items, request.parameters)
    }
}

impl Pagination {
    /// Build from values of unknown type
    /// # Errors
    /// `InvalidIntegerType` when a field is not an integer,
    /// `PositiveIntegerRequired` when it is out of range.
    /// Fields are checked in the order limit, total items, page.
    pub fn from_values(
        limit: &Value,
        page: &Value,
        total_items: &Value,
        parameters: Parameters,
    ) -> Result<Self, PaginationError> {
        let limit = check_limit(integer("limit", limit)?)?;
        let total_items = check_total_items(integer("total_items", total_items)?)?;
        let page = check_page(integer("page", page)?)?;
        Self::new(limit, page, total_items, parameters)
    }
}

/// Name of the json type held by `value`
///
/// Uses json type names (`null`, `float`, ...), not php `gettype` ones.
#[must_use]
pub fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(n) if n.is_i64() => "integer",
        Value::Number(n) if n.is_u64() => "unsigned integer",
        Value::Number(_) => "float",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn integer(field: &'static str, value: &Value) -> Result<i64, PaginationError> {
    value.as_i64().ok_or_else(|| {
        let given = type_name(value);
        debug!(field, given, "rejected pagination input");
        PaginationError::invalid_type(given)
    })
}
