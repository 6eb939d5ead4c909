use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{Result, XkcdError};

/// Payload returned by the xkcd JSON API (`info.0.json`).
///
/// Missing and `null` fields both decode to their zero value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ComicResponse {
    #[serde(deserialize_with = "null_as_default")]
    pub month: String,
    #[serde(deserialize_with = "null_as_default")]
    pub num: u32,
    #[serde(deserialize_with = "null_as_default")]
    pub link: String,
    #[serde(deserialize_with = "null_as_default")]
    pub year: String,
    #[serde(deserialize_with = "null_as_default")]
    pub news: String,
    #[serde(deserialize_with = "null_as_default")]
    pub safe_title: String,
    #[serde(deserialize_with = "null_as_default")]
    pub transcript: String,
    #[serde(deserialize_with = "null_as_default")]
    pub alt: String,
    #[serde(deserialize_with = "null_as_default")]
    pub img: String,
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(deserialize_with = "null_as_default")]
    pub day: String,
}

fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

impl ComicResponse {
    /// Joins day, month and year as-is. No calendar validation.
    pub fn formatted_date(&self) -> String {
        format_date(&self.day, &self.month, &self.year)
    }

    pub fn to_comic(&self) -> Comic {
        Comic::from(self.clone())
    }
}

impl From<ComicResponse> for Comic {
    fn from(response: ComicResponse) -> Self {
        let date = response.formatted_date();
        Comic {
            title: response.title,
            number: response.num,
            date,
            description: response.alt,
            image: response.img,
        }
    }
}

pub fn format_date(day: &str, month: &str, year: &str) -> String {
    format!("{}-{}-{}", day, month, year)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Comic {
    pub title: String,
    pub number: u32,
    pub date: String,
    pub description: String,
    // existing consumers read this key, keep the spelling
    #[serde(rename = "imgage")]
    pub image: String,
}

impl Comic {
    pub fn pretty_string(&self) -> String {
        format!(
            "Title: {}\nComic No: {}\nDate: {}\nDescription: {}\nImage: {}\n",
            self.title, self.number, self.date, self.description, self.image
        )
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(XkcdError::Encode)
    }

    pub fn render(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Text => Ok(self.pretty_string()),
            OutputFormat::Json => self.to_json(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}
