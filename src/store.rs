use std::path::Path;

use crate::error::Result;
use crate::models::{NormalizedVacancy, VacancyRecord};

pub const DEFAULT_OUTPUT: &str = "json-vacancies.json";

/// Append-only list of records, written once as a JSON array.
#[derive(Debug, Default)]
pub struct RecordStore {
    records: Vec<NormalizedVacancy>,
}

impl RecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, record: &VacancyRecord) {
        self.records.push(record.vacancy().clone());
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Write every accumulated record to `path`, replacing the file.
    /// Non-ASCII text is written as-is.
    pub async fn flush(&self, path: impl AsRef<Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(&self.records)?;
        tokio::fs::write(path.as_ref(), json).await?;
        tracing::info!(
            "Saved {} vacancies to {}",
            self.records.len(),
            path.as_ref().display()
        );
        Ok(())
    }

    pub async fn load(path: impl AsRef<Path>) -> Result<Vec<NormalizedVacancy>> {
        let bytes = tokio::fs::read(path).await?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, salary: &str) -> VacancyRecord {
        VacancyRecord::try_from(NormalizedVacancy {
            name: name.to_string(),
            url: format!("https://hh.ru/vacancy/{name}"),
            salary: salary.to_string(),
            experience: "Нет опыта".to_string(),
            requirement_and_responsibility: "Требования: НетОбязанности: Нет".to_string(),
        })
        .unwrap()
    }

    #[tokio::test]
    async fn flush_then_load_preserves_records_and_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.json");

        let mut store = RecordStore::new();
        for r in [
            record("Аналитик", "от 0 до 90000"),
            record("Инженер", "По договоренности"),
            record("Тестировщик", "от 40000 до 0"),
        ] {
            store.add(&r);
        }
        store.flush(&path).await.unwrap();

        let loaded = RecordStore::load(&path).await.unwrap();
        assert_eq!(loaded.len(), 3);
        assert_eq!(loaded[0].name, "Аналитик");
        assert_eq!(loaded[1].salary, "По договоренности");
        assert_eq!(loaded[2].name, "Тестировщик");
        assert_eq!(loaded[2].url, "https://hh.ru/vacancy/Тестировщик");
    }

    #[tokio::test]
    async fn output_keeps_cyrillic_unescaped() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.json");

        let mut store = RecordStore::new();
        store.add(&record("Программист", "от 1 до 2"));
        store.flush(&path).await.unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.contains("Программист"));
        assert!(!text.contains("\\u"));
        for key in ["name", "url", "salary", "experience", "requirement_and_responsibility"] {
            assert!(text.contains(&format!("\"{key}\"")), "{key}");
        }
    }

    #[tokio::test]
    async fn empty_store_writes_empty_array() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.json");

        let store = RecordStore::new();
        assert!(store.is_empty());
        store.flush(&path).await.unwrap();
        assert!(RecordStore::load(&path).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn flush_into_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("out.json");
        assert!(RecordStore::new().flush(&path).await.is_err());
    }
}
