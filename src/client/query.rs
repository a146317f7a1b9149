//! Query parameters for list and search requests.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Largest page size the CRM accepts.
pub const MAX_PER_PAGE: u32 = 200;

/// Sort direction for record listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }
}

/// Pagination and sorting for `list_records`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ListParams {
    /// Page number for pagination (default 1)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,

    /// Number of records per page (default 20, max 200)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(range(min = 1, max = 200))]
    pub per_page: Option<u32>,

    /// Field to sort by
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort_by: Option<String>,

    /// Sort order
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<SortOrder>,
}

impl ListParams {
    /// Check limits the CRM would otherwise reject.
    pub fn validate(&self) -> Result<(), String> {
        check_per_page(self.per_page)
    }

    /// Query pairs in a fixed order, absent values omitted.
    pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(page) = self.page {
            pairs.push(("page", page.to_string()));
        }
        if let Some(per_page) = self.per_page {
            pairs.push(("per_page", per_page.to_string()));
        }
        if let Some(sort_by) = &self.sort_by {
            pairs.push(("sort_by", sort_by.clone()));
        }
        if let Some(sort_order) = self.sort_order {
            pairs.push(("sort_order", sort_order.as_str().to_string()));
        }
        pairs
    }
}

/// Pagination for `search_records`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct SearchParams {
    /// Page number (default 1)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,

    /// Records per page (default 20, max 200)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(range(min = 1, max = 200))]
    pub per_page: Option<u32>,
}

impl SearchParams {
    pub fn validate(&self) -> Result<(), String> {
        check_per_page(self.per_page)
    }

    pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(page) = self.page {
            pairs.push(("page", page.to_string()));
        }
        if let Some(per_page) = self.per_page {
            pairs.push(("per_page", per_page.to_string()));
        }
        pairs
    }
}

fn check_per_page(per_page: Option<u32>) -> Result<(), String> {
    match per_page {
        Some(n) if n > MAX_PER_PAGE => Err(format!(
            "per_page must be at most {}, got {}",
            MAX_PER_PAGE, n
        )),
        _ => Ok(()),
    }
}

/// Append URL-encoded query pairs to a path.
pub fn with_query(path: &str, pairs: &[(&str, String)]) -> String {
    if pairs.is_empty() {
        return path.to_string();
    }
    let query = pairs
        .iter()
        .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
        .collect::<Vec<_>>()
        .join("&");
    format!("{}?{}", path, query)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_params_pairs_in_order() {
        let params = ListParams {
            page: Some(2),
            per_page: Some(50),
            sort_by: Some("Created_Time".to_string()),
            sort_order: Some(SortOrder::Desc),
        };
        assert_eq!(
            with_query("Leads", &params.to_pairs()),
            "Leads?page=2&per_page=50&sort_by=Created_Time&sort_order=desc"
        );
    }

    #[test]
    fn test_empty_params_leave_path_untouched() {
        assert_eq!(with_query("Leads", &ListParams::default().to_pairs()), "Leads");
    }

    #[test]
    fn test_per_page_limit() {
        let ok = SearchParams {
            page: None,
            per_page: Some(200),
        };
        assert!(ok.validate().is_ok());

        let too_many = ListParams {
            per_page: Some(201),
            ..Default::default()
        };
        assert!(too_many.validate().unwrap_err().contains("200"));
    }

    #[test]
    fn test_query_values_are_encoded() {
        let pairs = vec![("criteria", "Email:equals:a+b@c.com".to_string())];
        assert_eq!(
            with_query("Contacts/search", &pairs),
            "Contacts/search?criteria=Email%3Aequals%3Aa%2Bb%40c.com"
        );
    }

    #[test]
    fn test_sort_order_deserializes_lowercase() {
        let order: SortOrder = serde_json::from_str("\"asc\"").unwrap();
        assert_eq!(order, SortOrder::Asc);
        assert!(serde_json::from_str::<SortOrder>("\"up\"").is_err());
    }
}
