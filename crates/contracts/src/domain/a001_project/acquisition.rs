use async_trait::async_trait;
use serde_json::Value;

use super::error::SourceFailure;

/// Anything that can be asked for the catalog document at a location.
///
/// Implementations perform exactly one attempt per call and never retry.
#[async_trait(?Send)]
pub trait CatalogSource {
    async fn fetch(&self, location: &str) -> Result<Value, SourceFailure>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateFailure {
    pub location: String,
    pub failure: SourceFailure,
}

/// Outcome of walking the candidate list.
///
/// `Records` with an empty vector means the catalog really is empty;
/// `NoData` means every candidate failed.
#[derive(Debug, Clone, PartialEq)]
pub enum Acquisition {
    Records { location: String, records: Vec<Value> },
    NoData { failures: Vec<CandidateFailure> },
}

impl Acquisition {
    pub fn is_no_data(&self) -> bool {
        matches!(self, Acquisition::NoData { .. })
    }
}

/// Try each candidate in order, stopping at the first one that yields a JSON
/// array. Entries are returned verbatim.
pub async fn acquire<S, L>(source: &S, candidates: &[L]) -> Acquisition
where
    S: CatalogSource + ?Sized,
    L: AsRef<str>,
{
    let mut failures = Vec::with_capacity(candidates.len());

    for candidate in candidates {
        let location = candidate.as_ref();
        log::debug!("attempting catalog fetch from {location}");

        let failure = match source.fetch(location).await {
            Ok(Value::Array(records)) => {
                log::info!("fetched {} projects from {location}", records.len());
                return Acquisition::Records {
                    location: location.to_string(),
                    records,
                };
            }
            Ok(_) => SourceFailure::NotASequence,
            Err(failure) => failure,
        };

        log::warn!("catalog fetch failed for {location}: {failure}");
        failures.push(CandidateFailure {
            location: location.to_string(),
            failure,
        });
    }

    Acquisition::NoData { failures }
}
