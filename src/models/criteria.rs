use std::collections::BTreeMap;

pub const DEFAULT_REGION: &str = "Москва";
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// What the user is looking for. Only the first page is ever requested.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchCriteria {
    pub keyword: String,
    pub region_name: String,
    pub page: u32,
    pub page_size: u32,
}

impl SearchCriteria {
    pub fn new(keyword: impl Into<String>, region_name: impl Into<String>, page_size: u32) -> Self {
        Self {
            keyword: keyword.into(),
            region_name: region_name.into(),
            page: 0,
            page_size,
        }
    }

    /// Plain key-value view used as the base of query strings.
    pub fn to_params(&self) -> BTreeMap<&'static str, String> {
        BTreeMap::from([
            ("text", self.keyword.clone()),
            ("area", self.region_name.clone()),
            ("page", self.page.to_string()),
            ("per_page", self.page_size.to_string()),
        ])
    }
}

impl Default for SearchCriteria {
    fn default() -> Self {
        Self::new("", DEFAULT_REGION, DEFAULT_PAGE_SIZE)
    }
}
