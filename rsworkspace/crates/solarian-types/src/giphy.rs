//! Giphy random-GIF response shape

use serde::Deserialize;

/// Body of `GET /v1/gifs/random`. Only the original image URL is kept.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct GiphyRandomResponse {
    pub data: GiphyData,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct GiphyData {
    pub images: GiphyImages,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct GiphyImages {
    pub original: GiphyImage,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct GiphyImage {
    pub url: String,
}

impl GiphyRandomResponse {
    pub fn url(&self) -> &str {
        &self.data.images.original.url
    }
}
