use anyhow::{Context, Result};

/// Build the HTTP client shared by every fetch in one run.
pub fn client() -> Result<reqwest::Client> {
    reqwest::Client::builder()
        .user_agent("volby/0.1 (election results export tool)")
        .build()
        .context("Failed to build HTTP client")
}

/// Fetch one page and return its body as text.
///
/// Any transport failure or non-success status is an error; the pipeline
/// treats it as fatal for the whole run. No retry, no timeout.
pub async fn fetch_page(client: &reqwest::Client, url: &str) -> Result<String> {
    let response = client
        .get(url)
        .send()
        .await
        .context("Failed to fetch page")?;

    let status = response.status();
    anyhow::ensure!(status.is_success(), "HTTP {status} for {url}");

    response.text().await.context("Failed to read response body")
}
