use crate::collectors::VacancySource;
use crate::error::Result;
use crate::models::SearchCriteria;
use crate::ranking::RankedCollection;

/// Fetch from every source in turn and rank the combined result.
/// Any source failure aborts the whole run; there is no partial result.
pub async fn aggregate(
    sources: &[Box<dyn VacancySource>],
    criteria: &SearchCriteria,
) -> Result<RankedCollection> {
    let mut batches = Vec::with_capacity(sources.len());

    for source in sources {
        let vacancies = source.fetch_and_normalize(criteria).await.inspect_err(|e| {
            tracing::error!("{} fetch failed: {e}", source.platform());
        })?;
        batches.push(vacancies);
    }

    let ranked = RankedCollection::merge(batches)?;
    tracing::info!(
        "Ranked {} vacancies, presenting top {}",
        ranked.len(),
        ranked.top_half().len()
    );
    Ok(ranked)
}
