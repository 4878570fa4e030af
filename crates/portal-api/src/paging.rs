//! Query-string paging and the empty-listing policy.

use portal_config::PaginationConfig;
use portal_core::errors::CoreError;
use portal_core::pagination::{PageRequest, Paginated};
use serde::Deserialize;

use crate::error::ApiError;

/// Raw `?page=&page_size=` parameters.
#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    pub page: Option<u32>,
    pub page_size: Option<u32>,
}

impl PageQuery {
    /// Fill in defaults and validate against the configured bounds.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Validation` for `page < 1` or a `page_size`
    /// outside `1..=max_page_size`.
    pub fn resolve(&self, config: &PaginationConfig) -> Result<PageRequest, CoreError> {
        PageRequest::with_max(
            self.page.unwrap_or(1),
            self.page_size.unwrap_or(config.default_page_size),
            config.max_page_size,
        )
    }
}

/// Apply the empty-listing policy to a fetched page.
///
/// With `empty_page_not_found` set, a page with no items becomes
/// `EmptyResult` (404); otherwise it is returned unchanged.
///
/// # Errors
///
/// Returns `ApiError::Core(EmptyResult)` under the 404 policy.
pub fn check_empty<T>(
    page: Paginated<T>,
    resource: &str,
    config: &PaginationConfig,
) -> Result<Paginated<T>, ApiError> {
    if config.empty_page_not_found && page.is_empty() {
        return Err(CoreError::EmptyResult {
            resource: resource.to_string(),
        }
        .into());
    }
    Ok(page)
}

#[cfg(test)]
mod tests {
    use super::*;
    use portal_core::pagination::compute_page_metadata;
    use rstest::rstest;

    fn query(page: Option<u32>, page_size: Option<u32>) -> PageQuery {
        PageQuery { page, page_size }
    }

    #[test]
    fn missing_params_use_config_defaults() {
        let config = PaginationConfig {
            default_page_size: 25,
            ..PaginationConfig::default()
        };
        let req = query(None, None).resolve(&config).unwrap();
        assert_eq!(req.page(), 1);
        assert_eq!(req.page_size(), 25);
    }

    #[rstest]
    #[case(Some(0), None)]
    #[case(None, Some(0))]
    #[case(None, Some(101))]
    #[case(Some(2), Some(1000))]
    fn out_of_range_is_rejected(#[case] page: Option<u32>, #[case] page_size: Option<u32>) {
        let result = query(page, page_size).resolve(&PaginationConfig::default());
        assert!(matches!(result, Err(CoreError::Validation(_))));
    }

    #[test]
    fn configured_max_is_enforced() {
        let config = PaginationConfig {
            max_page_size: 20,
            ..PaginationConfig::default()
        };
        assert!(query(None, Some(20)).resolve(&config).is_ok());
        assert!(query(None, Some(21)).resolve(&config).is_err());
    }

    #[test]
    fn empty_page_passes_by_default() {
        let req = PageRequest::first();
        let page: Paginated<i64> = Paginated::new(Vec::new(), compute_page_metadata(0, req));
        let page = check_empty(page, "words", &PaginationConfig::default()).unwrap();
        assert!(page.is_empty());
    }

    #[test]
    fn empty_page_is_not_found_under_strict_policy() {
        let config = PaginationConfig {
            empty_page_not_found: true,
            ..PaginationConfig::default()
        };
        let req = PageRequest::first();
        let page: Paginated<i64> = Paginated::new(Vec::new(), compute_page_metadata(0, req));
        let err = check_empty(page, "words", &config).unwrap_err();
        assert_eq!(err.to_string(), "No words found");
    }
}
