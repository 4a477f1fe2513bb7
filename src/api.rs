/// HTTP calls to the two remote collaborators

use gloo_net::http::Request;
use serde::{Deserialize, Serialize};
use web_sys::RequestMode;

use crate::article::{Article, ArticleFeed};
use crate::reader_state::SummaryOutcome;

/// Request body for the summarize endpoint
#[derive(Debug, Serialize)]
struct SummarizeRequest<'a> {
    url: &'a str,
}

/// Response body from the summarize endpoint. The backend fills in
/// exactly one of the two fields.
#[derive(Debug, Clone, Deserialize)]
struct SummarizeResponse {
    #[serde(default)]
    summary: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

/// Append one article to the sheet. The sheet endpoint does not send
/// CORS response headers, so the request goes out in no-cors mode and
/// the response is never read.
pub async fn save_article(sheet_url: &str, article: &Article) -> Result<(), String> {
    Request::post(sheet_url)
        .mode(RequestMode::NoCors)
        .json(article)
        .map_err(|e| format!("Failed to serialize article: {:?}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to save article: {:?}", e))?;

    Ok(())
}

/// Fetch every saved article from the sheet.
pub async fn fetch_articles(sheet_url: &str) -> Result<ArticleFeed, String> {
    let response = Request::get(sheet_url)
        .send()
        .await
        .map_err(|e| format!("Failed to load articles: {:?}", e))?;

    response
        .json::<ArticleFeed>()
        .await
        .map_err(|e| format!("Failed to parse articles: {:?}", e))
}

/// Ask the backend to summarize the page at `url`. Never fails at the
/// call site: every way the request can go wrong maps onto an outcome
/// the summary panel knows how to show.
pub async fn summarize(backend_url: &str, url: &str) -> SummaryOutcome {
    let endpoint = format!("{}/summarize", backend_url);

    let request = match Request::post(&endpoint).json(&SummarizeRequest { url }) {
        Ok(request) => request,
        Err(e) => return SummaryOutcome::Failure(format!("{:?}", e)),
    };

    let response = match request.send().await {
        Ok(response) => response,
        Err(e) => return SummaryOutcome::Failure(format!("{:?}", e)),
    };

    let body: SummarizeResponse = match response.json().await {
        Ok(body) => body,
        Err(e) => return SummaryOutcome::Failure(format!("{:?}", e)),
    };

    if let Some(summary) = body.summary {
        SummaryOutcome::Summary(summary)
    } else if let Some(error) = body.error {
        SummaryOutcome::Error(error)
    } else {
        SummaryOutcome::Failure("backend sent neither summary nor error".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summarize_response_with_summary() {
        let body: SummarizeResponse =
            serde_json::from_str(r#"{"summary":"One sentence."}"#).unwrap();
        assert_eq!(body.summary.as_deref(), Some("One sentence."));
        assert!(body.error.is_none());
    }

    #[test]
    fn test_summarize_response_with_error() {
        let body: SummarizeResponse =
            serde_json::from_str(r#"{"error":"URL is required"}"#).unwrap();
        assert!(body.summary.is_none());
        assert_eq!(body.error.as_deref(), Some("URL is required"));
    }

    #[test]
    fn test_summarize_response_empty() {
        let body: SummarizeResponse = serde_json::from_str("{}").unwrap();
        assert!(body.summary.is_none());
        assert!(body.error.is_none());
    }

    #[test]
    fn test_summarize_request_shape() {
        let json = serde_json::to_string(&SummarizeRequest {
            url: "https://example.com/post",
        })
        .unwrap();
        assert_eq!(json, r#"{"url":"https://example.com/post"}"#);
    }
}
