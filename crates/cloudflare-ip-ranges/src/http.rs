//! Plain GET helper shared by the HTTP sources

use crate::error::{CloudflareError, Result};

/// GET `url` and return the body, treating any non-2xx status as an error
pub(crate) async fn get_text(client: &reqwest::Client, url: &str) -> Result<String> {
    tracing::debug!("GET {}", url);

    let response = client.get(url).send().await?;
    let status = response.status();
    if !status.is_success() {
        // Cloudflare explains 4xx/5xx in a JSON `errors` list; keep its message
        let body = response.text().await.unwrap_or_default();
        return Err(CloudflareError::Status {
            status: status.as_u16(),
            url: url.to_string(),
            detail: crate::api::error_message(&body),
        });
    }

    let body = response.text().await?;
    tracing::debug!("{} returned {} bytes", url, body.len());
    Ok(body)
}
