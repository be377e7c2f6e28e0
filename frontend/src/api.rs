use gloo_net::http::Request;

use pagecraft::completion::{
    http_error, COMPLETION_ENDPOINT, REFERER_HEADER, TITLE_HEADER,
};
use pagecraft::{CompletionRequest, CompletionResponse, GenerateError};

/// Runs one completion round against the remote endpoint. No retries and no
/// cancellation: a failed attempt is terminal for the round.
pub async fn request_completion(
    api_key: &str,
    request: &CompletionRequest,
) -> Result<String, GenerateError> {
    let resp = Request::post(COMPLETION_ENDPOINT)
        .header("Authorization", &format!("Bearer {api_key}"))
        .header(REFERER_HEADER.0, REFERER_HEADER.1)
        .header(TITLE_HEADER.0, TITLE_HEADER.1)
        .json(request)
        .map_err(|e| GenerateError::Network(format!("Serialize error: {e}")))?
        .send()
        .await
        .map_err(|e| GenerateError::Network(format!("Network error: {e}")))?;

    if !resp.ok() {
        let body = resp.text().await.unwrap_or_default();
        return Err(http_error(resp.status(), &body));
    }

    let parsed = resp
        .json::<CompletionResponse>()
        .await
        .map_err(|e| GenerateError::Network(format!("Parse error: {e}")))?;

    parsed.into_code()
}
