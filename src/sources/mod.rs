pub mod xkcd;

use std::fmt;
use std::str::FromStr;

use async_trait::async_trait;
use rand::Rng;

use crate::error::{Result, XkcdError};
use crate::models::ComicResponse;

/// xkcd never published a comic #404.
pub const MISSING_COMIC: u32 = 404;

#[async_trait]
pub trait ComicSource: Send + Sync {
    async fn fetch_latest(&self) -> Result<Option<ComicResponse>>;

    async fn fetch_comic(&self, num: u32) -> Result<Option<ComicResponse>>;

    async fn fetch_random(&self) -> Result<Option<ComicResponse>>;

    async fn fetch_image(&self, image_url: &str) -> Result<(Vec<u8>, String)>;
}

/// Picks a comic number in `1..=max_num`, skipping the missing #404.
pub fn random_comic_number(max_num: u32) -> Option<u32> {
    if max_num == 0 {
        return None;
    }
    let mut rng = rand::thread_rng();
    loop {
        let num = rng.gen_range(1..=max_num);
        if num != MISSING_COMIC {
            return Some(num);
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComicSelector {
    Latest,
    Random,
    Number(u32),
}

impl ComicSelector {
    pub async fn fetch(self, source: &dyn ComicSource) -> Result<Option<ComicResponse>> {
        match self {
            ComicSelector::Latest => source.fetch_latest().await,
            ComicSelector::Random => source.fetch_random().await,
            ComicSelector::Number(num) => source.fetch_comic(num).await,
        }
    }

    pub fn is_random(&self) -> bool {
        matches!(self, ComicSelector::Random)
    }
}

impl FromStr for ComicSelector {
    type Err = XkcdError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "latest" => Ok(ComicSelector::Latest),
            "random" => Ok(ComicSelector::Random),
            other => {
                let num_str = other.strip_prefix('#').unwrap_or(other);
                match num_str.parse::<u32>() {
                    Ok(num) if num > 0 => Ok(ComicSelector::Number(num)),
                    _ => Err(XkcdError::InvalidParam(format!(
                        "expected `latest`, `random` or a comic number (e.g. #123), got: {}",
                        s
                    ))),
                }
            }
        }
    }
}

impl fmt::Display for ComicSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ComicSelector::Latest => f.write_str("latest"),
            ComicSelector::Random => f.write_str("random"),
            ComicSelector::Number(num) => write!(f, "#{}", num),
        }
    }
}
