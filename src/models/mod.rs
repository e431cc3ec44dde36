pub mod criteria;
pub mod vacancy;

pub use criteria::SearchCriteria;
pub use vacancy::{NEGOTIABLE, NormalizedVacancy, VacancyRecord};
