use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MetaError {
    #[error("invalid default page limit '{0}'")]
    InvalidDefaultLimit(String),
}

/// Pagination metadata attached to list responses.
///
/// `page` is 1-based and clamped into `1..=page_count` (or 1 when there are no
/// rows). A non-positive `per_page` falls back to the configured default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Meta {
    pub page: i64,
    pub per_page: i64,
    pub page_count: i64,
    pub total_count: i64,
}

impl Meta {
    pub fn new(
        page: i64,
        per_page: i64,
        total: u64,
        default_per_page: &str,
    ) -> Result<Self, MetaError> {
        let per_page = if per_page > 0 {
            per_page
        } else {
            default_per_page
                .trim()
                .parse::<i64>()
                .ok()
                .filter(|limit| *limit > 0)
                .ok_or_else(|| MetaError::InvalidDefaultLimit(default_per_page.to_string()))?
        };

        let total_count = i64::try_from(total).unwrap_or(i64::MAX);
        let page_count = total_count / per_page + i64::from(total_count % per_page != 0);
        let page = page.min(page_count).max(1);

        Ok(Self {
            page,
            per_page,
            page_count,
            total_count,
        })
    }

    /// Rows to skip for the current page.
    pub fn offset(&self) -> u64 {
        ((self.page - 1) * self.per_page) as u64
    }

    pub fn limit(&self) -> u64 {
        self.per_page as u64
    }
}
