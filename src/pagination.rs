use serde::Serialize;
use serde_json::{Map, Value};
use tracing::trace;

use crate::{error::PaginationError, paginator::Paginator};

/// Extra parameters carried along for building page links
pub type Parameters = Map<String, Value>;

/// Pagination metadata for one requested page
///
/// Every derived field is computed once, on construction,
/// the value never changes afterward.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    /// Maximum items per page or `NO_LIMIT`
    limit: i64,
    /// 1-based requested page
    page: i64,
    /// Items across all pages, 0 when unknown
    total_items: i64,
    /// 0-based index of the first item on the page
    offset: i64,
    total_pages: i64,
    first_item_on_page: i64,
    last_item_on_page: i64,
    parameters: Parameters,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            limit: Self::NO_LIMIT,
            page: 1,
            total_items: 0,
            offset: 0,
            total_pages: 1,
            first_item_on_page: 0,
            last_item_on_page: 0,
            parameters: Parameters::new(),
        }
    }
}

impl Pagination {
    /// Validate the inputs and compute the page metadata
    /// # Errors
    /// `PositiveIntegerRequired` when `limit` is neither `NO_LIMIT` nor positive,
    /// when `total_items` is negative or when `page` is not positive.
    /// Checked in that order.
    pub fn new(
        limit: i64,
        page: i64,
        total_items: i64,
        parameters: Parameters,
    ) -> Result<Self, PaginationError> {
        let limit = check_limit(limit)?;
        let has_limit = limit != Self::NO_LIMIT;

        let total_items = check_total_items(total_items)?;
        let total_pages = if total_items == 0 || !has_limit {
            1
        } else {
            total_items / limit + i64::from(total_items % limit != 0)
        };

        let page = check_page(page)?;
        let offset = if has_limit { (page - 1).saturating_mul(limit) } else { 0 };
        let first_item_on_page = if offset == 0 { 0 } else { offset.saturating_add(1) };
        let last_item_on_page = match has_limit {
            false => total_items,
            // Unknown total, assume a full page
            true if total_items == 0 => offset.saturating_add(limit),
            true => offset.saturating_add(limit).min(total_items),
        };

        trace!(
            limit,
            page,
            total_items,
            offset,
            total_pages,
            first_item_on_page,
            last_item_on_page,
            "computed pagination"
        );

        Ok(Self {
            limit,
            page,
            total_items,
            offset,
            total_pages,
            first_item_on_page,
            last_item_on_page,
            parameters,
        })
    }

    /// Total amount of items
    #[must_use]
    pub fn total_items(&self) -> i64 {
        self.total_items
    }

    /// Current page, starting at 1
    #[must_use]
    pub fn page(&self) -> i64 {
        self.page
    }

    /// Total amount of pages, at least 1
    #[must_use]
    pub fn total_pages(&self) -> i64 {
        self.total_pages
    }

    /// Number of the first item on the page
    #[must_use]
    pub fn first_item_on_page(&self) -> i64 {
        self.first_item_on_page
    }

    /// Number of the last item on the page
    #[must_use]
    pub fn last_item_on_page(&self) -> i64 {
        self.last_item_on_page
    }

    /// Extra parameters for the pagination links
    #[must_use]
    pub fn parameters(&self) -> &Parameters {
        &self.parameters
    }

    /// Take back the extra parameters
    #[must_use]
    pub fn into_parameters(self) -> Parameters {
        self.parameters
    }
}

/// A limit of 0 or less is useless
pub(crate) fn check_limit(limit: i64) -> Result<i64, PaginationError> {
    match limit == Pagination::NO_LIMIT || limit > 0 {
        true => Ok(limit),
        false => Err(PaginationError::PositiveIntegerRequired(limit)),
    }
}

/// A result may have zero items
pub(crate) fn check_total_items(total_items: i64) -> Result<i64, PaginationError> {
    match total_items >= 0 {
        true => Ok(total_items),
        false => Err(PaginationError::PositiveIntegerRequired(total_items)),
    }
}

/// There is at least one page
pub(crate) fn check_page(page: i64) -> Result<i64, PaginationError> {
    match page > 0 {
        true => Ok(page),
        false => Err(PaginationError::PositiveIntegerRequired(page)),
    }
}

impl Paginator for Pagination {
    fn limit(&self) -> i64 {
        self.limit
    }

    fn offset(&self) -> i64 {
        self.offset
    }
}
