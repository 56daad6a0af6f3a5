use crate::error::{ClientResult, OcrError};
use log::{debug, warn};
use std::path::PathBuf;

/// Where the image bytes come from.
#[derive(Debug, Clone, PartialEq)]
pub enum ImageSource {
    Path(PathBuf),
    Url(String),
}

impl ImageSource {
    /// Picks the source from the two optional inputs. A local path wins when both are set.
    pub fn from_args(image_path: &str, image_url: &str) -> ClientResult<Self> {
        if !image_path.is_empty() {
            Ok(ImageSource::Path(PathBuf::from(image_path)))
        } else if !image_url.is_empty() {
            Ok(ImageSource::Url(image_url.to_string()))
        } else {
            Err(OcrError::InvalidArgument(
                "provide either an image path or an image URL".to_string(),
            ))
        }
    }

    pub async fn load(&self, client: &reqwest::Client) -> ClientResult<Vec<u8>> {
        match self {
            ImageSource::Path(path) => {
                debug!("Reading local image {:?}", path);
                tokio::fs::read(path)
                    .await
                    .map_err(|e| OcrError::Io(format!("Failed to read local image {:?}", path), e))
            }
            ImageSource::Url(url) => {
                debug!("Downloading image from {}", url);
                let resp = client
                    .get(url)
                    .send()
                    .await
                    .map_err(|e| OcrError::Network(format!("Failed to download image from {}", url), e))?;

                let status = resp.status();
                if !status.is_success() {
                    warn!("Image download from {} returned status {}", url, status);
                }

                let bytes = resp
                    .bytes()
                    .await
                    .map_err(|e| OcrError::Network("Failed to read image data".to_string(), e))?;
                Ok(bytes.to_vec())
            }
        }
    }
}
