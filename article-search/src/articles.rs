//! Fetching the top articles a submitted form describes.

use anyhow::{bail, Context};
use serde::Deserialize;
use wpv_form::SubmitPayload;

/// Number of articles listed under the form.
pub const DISPLAY_LIMIT: usize = 25;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TopArticle {
    pub article: String,
    pub project: String,
    pub views_ceil: u64,
    pub rank: u32,
}

impl TopArticle {
    /// Link to the article on its wiki, e.g. `fr.wikipedia`.
    pub fn url(&self) -> String {
        format!("https://{}.org/wiki/{}", self.project, self.article)
    }

    pub fn title(&self) -> String {
        self.article.replace('_', " ")
    }
}

#[derive(Debug, Deserialize)]
struct TopPerCountryResponse {
    items: Vec<TopPerCountryItem>,
}

#[derive(Debug, Deserialize)]
struct TopPerCountryItem {
    articles: Vec<TopArticle>,
}

/// Parse a top-per-country response, best ranked first.
pub fn parse_top_articles(body: &str) -> anyhow::Result<Vec<TopArticle>> {
    let response: TopPerCountryResponse =
        serde_json::from_str(body).context("Malformed top articles response")?;
    let mut articles: Vec<TopArticle> = response
        .items
        .into_iter()
        .flat_map(|item| item.articles)
        .collect();
    articles.sort_by_key(|a| a.rank);
    Ok(articles)
}

/// Query the pageviews API for the payload's country, access type and day.
pub async fn fetch_top_articles(payload: &SubmitPayload) -> anyhow::Result<Vec<TopArticle>> {
    let url = payload.top_articles_url();
    log::info!("Fetching {}", url);
    let response = reqwest::get(&url)
        .await
        .with_context(|| format!("Request to {} failed", url))?;
    let status = response.status();
    if !status.is_success() {
        bail!("Pageviews API answered {} for {}", status, url);
    }
    let body = response.text().await?;
    parse_top_articles(&body)
}
