use async_trait::async_trait;
use serde_json::Value;

use crate::collectors::region::find_in_area_tree;
use crate::collectors::{
    MISSING_TEXT, Platform, VacancySource, amount, str_field, strip_markup, take_array,
};
use crate::error::Result;
use crate::models::vacancy::{NEGOTIABLE, format_salary};
use crate::models::{NormalizedVacancy, SearchCriteria};

pub const DEFAULT_BASE_URL: &str = "https://api.hh.ru";

pub struct HeadHunter {
    client: reqwest::Client,
    base_url: String,
}

impl HeadHunter {
    pub fn new(client: reqwest::Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl VacancySource for HeadHunter {
    fn platform(&self) -> Platform {
        Platform::HeadHunter
    }

    async fn resolve_region(&self, criteria: &SearchCriteria) -> Result<Option<String>> {
        let url = format!("{}/areas", self.base_url);
        tracing::debug!("Fetching area tree from {url}");

        let tree: Value = self.client.get(&url).send().await?.json().await?;
        Ok(find_in_area_tree(&tree, &criteria.region_name))
    }

    async fn fetch_raw(
        &self,
        criteria: &SearchCriteria,
        region: Option<&str>,
    ) -> Result<Vec<Value>> {
        let mut params = criteria.to_params();
        match region {
            Some(id) => params.insert("area", id.to_string()),
            None => params.remove("area"),
        };

        let url = format!("{}/vacancies", self.base_url);
        tracing::debug!("Fetching vacancies from {url} with {params:?}");

        let body: Value = self
            .client
            .get(&url)
            .query(&params)
            .send()
            .await?
            .json()
            .await?;

        take_array(body, Platform::HeadHunter, "items")
    }

    fn normalize(&self, raw: &[Value]) -> Vec<NormalizedVacancy> {
        raw.iter().map(normalize_item).collect()
    }
}

fn normalize_item(item: &Value) -> NormalizedVacancy {
    let url = str_field(item, "/alternate_url")
        .or_else(|| str_field(item, "/apply_alternate_url"))
        .unwrap_or_default();

    let requirement = str_field(item, "/snippet/requirement").unwrap_or(MISSING_TEXT);
    let responsibility = str_field(item, "/snippet/responsibility").unwrap_or(MISSING_TEXT);

    NormalizedVacancy {
        name: str_field(item, "/name").unwrap_or_default().to_string(),
        url: url.to_string(),
        salary: salary_text(item),
        experience: str_field(item, "/experience/name")
            .unwrap_or(MISSING_TEXT)
            .to_string(),
        requirement_and_responsibility: strip_markup(&format!(
            "Требования: {requirement}\nОбязанности: {responsibility}"
        )),
    }
}

fn salary_text(item: &Value) -> String {
    let from = amount(item, "/salary/from").filter(|v| *v > 0);
    let to = amount(item, "/salary/to").filter(|v| *v > 0);
    match (from, to) {
        (None, None) => NEGOTIABLE.to_string(),
        (from, to) => format_salary(from, to),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn maps_full_item() {
        let item = json!({
            "name": "Rust-разработчик",
            "alternate_url": "https://hh.ru/vacancy/100",
            "apply_alternate_url": "https://hh.ru/applicant/vacancy_response?vacancyId=100",
            "salary": {"from": 150000, "to": 250000, "currency": "RUR"},
            "experience": {"id": "between1And3", "name": "От 1 года до 3 лет"},
            "snippet": {
                "requirement": "Опыт с <highlighttext>Rust</highlighttext>",
                "responsibility": "Писать сервисы.\nРевьюить код."
            }
        });

        let v = normalize_item(&item);
        assert_eq!(v.name, "Rust-разработчик");
        assert_eq!(v.url, "https://hh.ru/vacancy/100");
        assert_eq!(v.salary, "от 150000 до 250000");
        assert_eq!(v.experience, "От 1 года до 3 лет");
        assert_eq!(
            v.requirement_and_responsibility,
            "Требования: Опыт с RustОбязанности: Писать сервисы.Ревьюить код."
        );
    }

    #[test]
    fn missing_bound_reads_zero() {
        let only_to = json!({"salary": {"from": null, "to": 120000}});
        assert_eq!(salary_text(&only_to), "от 0 до 120000");
        let only_from = json!({"salary": {"from": 50000, "to": null}});
        assert_eq!(salary_text(&only_from), "от 50000 до 0");
    }

    #[test]
    fn absent_salary_is_negotiable() {
        assert_eq!(salary_text(&json!({"salary": null})), NEGOTIABLE);
        assert_eq!(salary_text(&json!({})), NEGOTIABLE);
        assert_eq!(salary_text(&json!({"salary": {"from": 0, "to": null}})), NEGOTIABLE);
    }

    #[test]
    fn oversized_salary_ranks_without_overflow_panic() {
        use crate::error::AppError;
        use crate::models::VacancyRecord;

        let huge = normalize_item(&json!({"salary": {"from": 1e20, "to": null}}));
        assert_eq!(huge.salary, format!("от {} до 0", u64::MAX));

        let huge = VacancyRecord::try_from(huge).unwrap();
        let modest =
            VacancyRecord::try_from(normalize_item(&json!({"salary": {"from": 1, "to": 2}})))
                .unwrap();
        assert!(matches!(
            huge.combined_salary(&modest),
            Err(AppError::SalaryOverflow(_))
        ));
        assert_eq!(
            huge.salary_difference(&modest).map_err(|e| e.to_string()),
            Err(format!("Salary overflow: {} - 2", u64::MAX))
        );
    }

    #[test]
    fn sparse_item_gets_placeholders() {
        let item = json!({
            "name": "Стажёр",
            "apply_alternate_url": "https://hh.ru/apply/7",
            "snippet": {"requirement": null}
        });
        let v = normalize_item(&item);
        assert_eq!(v.url, "https://hh.ru/apply/7");
        assert_eq!(v.experience, "Нет");
        assert_eq!(
            v.requirement_and_responsibility,
            "Требования: НетОбязанности: Нет"
        );
    }
}
