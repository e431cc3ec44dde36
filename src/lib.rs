pub mod collectors;
pub mod config;
pub mod error;
pub mod models;
pub mod ranking;
pub mod store;

pub use collectors::{Platform, VacancySource};
pub use error::{AppError, Result};
pub use models::{NormalizedVacancy, SearchCriteria, VacancyRecord};
pub use ranking::RankedCollection;
pub use store::RecordStore;
