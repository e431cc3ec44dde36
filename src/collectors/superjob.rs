use async_trait::async_trait;
use serde_json::Value;

use crate::collectors::region::find_in_town_list;
use crate::collectors::{
    MISSING_TEXT, Platform, VacancySource, amount, str_field, strip_markup, take_array,
};
use crate::error::Result;
use crate::models::vacancy::{NEGOTIABLE, format_salary};
use crate::models::{NormalizedVacancy, SearchCriteria};

pub const DEFAULT_BASE_URL: &str = "https://api.superjob.ru/2.0";
pub const APP_ID_HEADER: &str = "X-Api-App-Id";

pub struct SuperJob {
    client: reqwest::Client,
    base_url: String,
    app_id: String,
}

impl SuperJob {
    pub fn new(client: reqwest::Client, base_url: &str, app_id: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            app_id: app_id.to_string(),
        }
    }
}

#[async_trait]
impl VacancySource for SuperJob {
    fn platform(&self) -> Platform {
        Platform::SuperJob
    }

    async fn resolve_region(&self, criteria: &SearchCriteria) -> Result<Option<String>> {
        let url = format!("{}/towns/", self.base_url);
        tracing::debug!("Fetching town list from {url}");

        let body: Value = self
            .client
            .get(&url)
            .query(&[("all", "1")])
            .header(APP_ID_HEADER, &self.app_id)
            .send()
            .await?
            .json()
            .await?;

        let towns = take_array(body, Platform::SuperJob, "objects")?;
        Ok(find_in_town_list(&towns, &criteria.region_name))
    }

    async fn fetch_raw(
        &self,
        criteria: &SearchCriteria,
        region: Option<&str>,
    ) -> Result<Vec<Value>> {
        let mut params = vec![
            ("catalogues", String::new()),
            ("count", criteria.page_size.to_string()),
            ("keyword", criteria.keyword.clone()),
        ];
        if let Some(town) = region {
            params.push(("town", town.to_string()));
        }

        let url = format!("{}/vacancies/", self.base_url);
        tracing::debug!("Fetching vacancies from {url} with {params:?}");

        let body: Value = self
            .client
            .get(&url)
            .query(&params)
            .header(APP_ID_HEADER, &self.app_id)
            .send()
            .await?
            .json()
            .await?;

        take_array(body, Platform::SuperJob, "objects")
    }

    fn normalize(&self, raw: &[Value]) -> Vec<NormalizedVacancy> {
        raw.iter().map(normalize_item).collect()
    }
}

fn normalize_item(item: &Value) -> NormalizedVacancy {
    let requirement = str_field(item, "/candidat")
        .map(strip_markup)
        .unwrap_or_else(|| MISSING_TEXT.to_string());

    NormalizedVacancy {
        name: str_field(item, "/profession").unwrap_or_default().to_string(),
        url: str_field(item, "/link").unwrap_or_default().to_string(),
        salary: salary_text(item),
        experience: str_field(item, "/experience/title")
            .unwrap_or(MISSING_TEXT)
            .to_string(),
        requirement_and_responsibility: requirement,
    }
}

fn salary_text(item: &Value) -> String {
    match amount(item, "/payment_from").filter(|v| *v > 0) {
        None => NEGOTIABLE.to_string(),
        Some(from) => format_salary(Some(from), amount(item, "/payment_to")),
    }
}
