use async_trait::async_trait;
use reqwest::StatusCode;
use reqwest::header;
use tracing::{debug, info};

use crate::error::{Result, XkcdError};
use crate::models::ComicResponse;
use crate::sources::{ComicSource, random_comic_number};

pub const DEFAULT_BASE_URL: &str = "https://xkcd.com";

pub struct XkcdSource {
    client: reqwest::Client,
    base_url: String,
}

impl XkcdSource {
    pub fn new(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    pub fn latest_url(&self) -> String {
        format!("{}/info.0.json", self.base_url)
    }

    pub fn comic_url(&self, num: u32) -> String {
        format!("{}/{}/info.0.json", self.base_url, num)
    }

    async fn fetch_comic_json(&self, url: &str) -> Result<Option<ComicResponse>> {
        debug!(url, "fetching xkcd metadata");
        let resp = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| XkcdError::UpstreamFailed(format!("GET {} failed: {}", url, e)))?;

        match resp.status() {
            StatusCode::NOT_FOUND => Ok(None),
            status if !status.is_success() => Err(XkcdError::UpstreamFailed(format!(
                "GET {} answered {}",
                url, status
            ))),
            _ => resp.json::<ComicResponse>().await.map(Some).map_err(|e| {
                XkcdError::UpstreamFailed(format!("{} is not a comic payload: {}", url, e))
            }),
        }
    }
}

#[async_trait]
impl ComicSource for XkcdSource {
    async fn fetch_latest(&self) -> Result<Option<ComicResponse>> {
        self.fetch_comic_json(&self.latest_url()).await
    }

    async fn fetch_comic(&self, num: u32) -> Result<Option<ComicResponse>> {
        self.fetch_comic_json(&self.comic_url(num)).await
    }

    async fn fetch_random(&self) -> Result<Option<ComicResponse>> {
        let Some(latest) = self.fetch_latest().await? else {
            return Ok(None);
        };

        let Some(num) = random_comic_number(latest.num) else {
            return Ok(None);
        };

        info!(num, max = latest.num, "fetching random xkcd");
        if num == latest.num {
            return Ok(Some(latest));
        }
        self.fetch_comic(num).await
    }

    async fn fetch_image(&self, image_url: &str) -> Result<(Vec<u8>, String)> {
        let resp = self.client.get(image_url).send().await.map_err(|e| {
            XkcdError::UpstreamFailed(format!("GET {} failed: {}", image_url, e))
        })?;

        match resp.status() {
            StatusCode::NOT_FOUND => {
                return Err(XkcdError::NotFound(format!("no image at {}", image_url)));
            }
            status if !status.is_success() => {
                return Err(XkcdError::UpstreamFailed(format!(
                    "GET {} answered {}",
                    image_url, status
                )));
            }
            _ => {}
        }

        let content_type = resp
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("image/png")
            .to_string();

        let bytes = resp.bytes().await.map_err(|e| {
            XkcdError::UpstreamFailed(format!("reading image {} failed: {}", image_url, e))
        })?;

        Ok((bytes.to_vec(), content_type))
    }
}
