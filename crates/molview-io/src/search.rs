//! Best-effort text search against the RCSB PDB search API
//!
//! Search is deliberately non-fatal: any failure - transport, HTTP, or a
//! response shape we do not understand - is logged and degrades to an empty
//! result set, so exploratory querying never breaks a caller's flow.

use serde::Deserialize;
use serde_json::{json, Value};

use crate::error::{FetchError, FetchResult};
use crate::fetch::USER_AGENT;

/// RCSB PDB search endpoint
const SEARCH_URL: &str = "https://search.rcsb.org/rcsbsearch/v2/query";

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    result_set: Vec<SearchEntry>,
}

#[derive(Debug, Deserialize)]
struct SearchEntry {
    identifier: String,
}

/// Search RCSB PDB for entries matching a free-text query
///
/// Returns up to `max_results` PDB IDs, or an empty list on any failure.
pub fn search_pdb(query_text: &str, max_results: usize) -> Vec<String> {
    let query = json!({
        "query": {
            "type": "terminal",
            "service": "text",
            "parameters": { "value": query_text }
        },
        "return_type": "entry",
        "request_options": {
            "paginate": { "start": 0, "rows": max_results }
        }
    });

    match post_query(&query) {
        Ok(ids) => ids,
        Err(e) => {
            log::warn!("structure search for '{}' failed: {}", query_text, e);
            Vec::new()
        }
    }
}

fn post_query(query: &Value) -> FetchResult<Vec<String>> {
    log::debug!("POST {}", SEARCH_URL);

    let response = ureq::post(SEARCH_URL)
        .header("User-Agent", USER_AGENT)
        .send_json(query)
        .map_err(|e| FetchError::network(e.to_string()))?;

    let result: SearchResponse = response
        .into_body()
        .read_json()
        .map_err(|e| FetchError::network(format!("failed to decode response: {}", e)))?;

    Ok(result
        .result_set
        .into_iter()
        .map(|entry| entry.identifier)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_parsing() {
        let body = r#"{"result_set": [{"identifier": "1UBQ"}, {"identifier": "1D3Z"}]}"#;
        let response: SearchResponse = serde_json::from_str(body).unwrap();
        let ids: Vec<String> = response
            .result_set
            .into_iter()
            .map(|e| e.identifier)
            .collect();
        assert_eq!(ids, vec!["1UBQ", "1D3Z"]);
    }

    #[test]
    fn test_empty_response_parses() {
        let response: SearchResponse = serde_json::from_str("{}").unwrap();
        assert!(response.result_set.is_empty());
    }

    #[test]
    #[ignore = "requires network access"]
    fn test_search_ubiquitin() {
        let ids = search_pdb("ubiquitin", 5);
        assert!(ids.len() <= 5);
    }
}
