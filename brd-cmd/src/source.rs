//! Reading the two documents from disk or over HTTP.

use crate::Sources;
use brd_data::{Dataset, Error};
use log::info;
use std::time::Duration;

fn is_url(source: &str) -> bool {
    source.starts_with("http://") || source.starts_with("https://")
}

/// Read one document as text.
pub async fn read_source(client: &reqwest::Client, source: &str) -> brd_data::Result<String> {
    if !is_url(source) {
        return tokio::fs::read_to_string(source).await.map_err(|e| Error::Fetch {
            url: source.to_string(),
            reason: e.to_string(),
        });
    }

    let fetch_error = |e: reqwest::Error| Error::Fetch {
        url: source.to_string(),
        reason: e.to_string(),
    };
    let response = client.get(source).send().await.map_err(fetch_error)?;
    if !response.status().is_success() {
        return Err(Error::Status {
            url: source.to_string(),
            status: response.status().as_u16(),
        });
    }
    response.text().await.map_err(fetch_error)
}

/// Read both documents concurrently and build the context. Either failure aborts.
pub async fn load_dataset(sources: &Sources) -> anyhow::Result<Dataset> {
    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(30))
        .build()?;

    info!("Loading {} and {}", sources.rainfall, sources.summary);
    let (rainfall, summary) = tokio::try_join!(
        read_source(&client, &sources.rainfall),
        read_source(&client, &sources.summary)
    )?;
    Ok(Dataset::from_documents(&rainfall, &summary)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{write_fixture, RAINFALL_JSON, SUMMARY_JSON};

    #[test]
    fn recognises_urls() {
        assert!(is_url("https://example.org/rainfall_data.json"));
        assert!(is_url("http://localhost:8080/summary_stats.json"));
        assert!(!is_url("public/rainfall_data.json"));
    }

    #[tokio::test]
    async fn loads_both_local_files() {
        let rainfall = write_fixture("load_rainfall.json", RAINFALL_JSON);
        let summary = write_fixture("load_summary.json", SUMMARY_JSON);
        let sources = Sources { rainfall, summary };

        let dataset = load_dataset(&sources).await.unwrap();
        assert_eq!(dataset.district_names(), vec!["Patna", "Gaya", "Nalanda"]);
    }

    #[tokio::test]
    async fn missing_summary_fails_the_whole_load() {
        let rainfall = write_fixture("partial_rainfall.json", RAINFALL_JSON);
        let sources = Sources {
            rainfall,
            summary: "does/not/exist/summary_stats.json".to_string(),
        };

        let err = load_dataset(&sources).await.unwrap_err();
        let err = err.downcast::<Error>().unwrap();
        assert!(matches!(err, Error::Fetch { ref url, .. } if url.ends_with("summary_stats.json")));
    }

    #[tokio::test]
    async fn malformed_document_is_a_parse_error() {
        let rainfall = write_fixture("bad_rainfall.json", "{not json");
        let summary = write_fixture("bad_summary.json", SUMMARY_JSON);
        let sources = Sources { rainfall, summary };

        let err = load_dataset(&sources).await.unwrap_err();
        assert!(matches!(err.downcast::<Error>().unwrap(), Error::Json { .. }));
    }
}
