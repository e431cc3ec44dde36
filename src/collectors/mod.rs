// Vacancy sources: one implementation per recruiting platform, plus the
// runner that merges their output.

pub mod headhunter;
pub mod region;
pub mod runner;
pub mod superjob;

use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;

use crate::config::Config;
use crate::error::{AppError, Result};
use crate::models::{NormalizedVacancy, SearchCriteria};

pub use headhunter::HeadHunter;
pub use superjob::SuperJob;

/// Text used when a platform leaves a descriptive field empty.
pub const MISSING_TEXT: &str = "Нет";

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    HeadHunter,
    SuperJob,
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Platform::HeadHunter => f.write_str("HeadHunter"),
            Platform::SuperJob => f.write_str("SuperJob"),
        }
    }
}

/// Capability every platform provides. Each step takes the criteria
/// explicitly so it can be called and tested on its own.
#[async_trait]
pub trait VacancySource: Send + Sync {
    fn platform(&self) -> Platform;

    /// Platform region id for `criteria.region_name`, or `None` when the
    /// name is unknown to the platform.
    async fn resolve_region(&self, criteria: &SearchCriteria) -> Result<Option<String>>;

    /// One page of raw vacancy objects.
    async fn fetch_raw(&self, criteria: &SearchCriteria, region: Option<&str>)
    -> Result<Vec<Value>>;

    fn normalize(&self, raw: &[Value]) -> Vec<NormalizedVacancy>;

    async fn fetch_and_normalize(&self, criteria: &SearchCriteria) -> Result<Vec<NormalizedVacancy>> {
        let region = self.resolve_region(criteria).await?;
        if region.is_none() {
            tracing::warn!(
                "{}: region '{}' not found, searching without a region filter",
                self.platform(),
                criteria.region_name
            );
        }

        let raw = self.fetch_raw(criteria, region.as_deref()).await?;
        let vacancies = self.normalize(&raw);
        tracing::info!("{}: {} vacancies fetched", self.platform(), vacancies.len());
        Ok(vacancies)
    }
}

/// Build the shared HTTP client. HeadHunter rejects requests without a User-Agent.
pub fn http_client(timeout: Duration) -> Result<reqwest::Client> {
    Ok(reqwest::Client::builder()
        .user_agent(USER_AGENT)
        .timeout(timeout)
        .build()?)
}

/// All configured sources in concatenation order.
pub fn build_sources(config: &Config) -> Result<Vec<Box<dyn VacancySource>>> {
    let client = http_client(Duration::from_secs(config.timeout_secs))?;
    Ok(vec![
        Box::new(HeadHunter::new(client.clone(), &config.hh_base_url)),
        Box::new(SuperJob::new(
            client,
            &config.superjob_base_url,
            &config.superjob_app_id,
        )),
    ])
}

/// Remove newlines and search highlight tags from snippet text.
pub fn strip_markup(text: &str) -> String {
    text.replace(['\n', '\r'], "")
        .replace("<highlighttext>", "")
        .replace("</highlighttext>", "")
}

/// Pull the wrapper array out of a platform response. A missing key means
/// the platform answered with an error payload instead of results.
pub(crate) fn take_array(
    mut body: Value,
    platform: Platform,
    key: &'static str,
) -> Result<Vec<Value>> {
    match body.get_mut(key).map(Value::take) {
        Some(Value::Array(items)) => Ok(items),
        _ => Err(AppError::UpstreamSchema {
            platform,
            key,
            detail: upstream_error_detail(&body),
        }),
    }
}

fn upstream_error_detail(body: &Value) -> String {
    let description = body.get("description").and_then(Value::as_str);
    let hh_error = body
        .get("errors")
        .and_then(Value::as_array)
        .and_then(|errors| errors.first())
        .and_then(|e| e.get("value").or_else(|| e.get("type")))
        .and_then(Value::as_str);
    let sj_error = body
        .pointer("/error/message")
        .and_then(Value::as_str);

    description
        .or(sj_error)
        .or(hh_error)
        .map(String::from)
        .unwrap_or_else(|| "too many vacancies requested or the platform rejected the query".to_string())
}

pub(crate) fn str_field<'a>(value: &'a Value, pointer: &str) -> Option<&'a str> {
    value.pointer(pointer).and_then(Value::as_str)
}

/// Salary amounts arrive as integers, occasionally as floats.
pub(crate) fn amount(value: &Value, pointer: &str) -> Option<u64> {
    let v = value.pointer(pointer)?;
    v.as_u64().or_else(|| v.as_f64().filter(|f| *f >= 0.0).map(|f| f as u64))
}

/// Platforms disagree on whether ids are numbers or strings.
pub(crate) fn id_string(value: &Value) -> Option<String> {
    match value.get("id")? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}
