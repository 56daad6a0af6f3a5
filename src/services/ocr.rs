use crate::constants;
use crate::error::{ClientResult, OcrError};
use crate::models::{OcrRequest, OcrResponse};
use crate::services::ImageSource;
use crate::utils::encode_base64;
use async_trait::async_trait;
use log::{debug, info, warn};

#[async_trait]
pub trait OcrProvider: Send + Sync {
    /// Loads the image from `image_path` or `image_url` and runs it through OCR.
    async fn recognize(
        &self,
        image_path: &str,
        image_url: &str,
        api_url: &str,
    ) -> ClientResult<OcrResponse>;

    /// Sends an already base64-encoded image to the OCR endpoint.
    async fn recognize_base64(&self, base64_image: &str, api_url: &str) -> ClientResult<OcrResponse>;

    fn provider_id(&self) -> &'static str;
}

/// Client for an OCR service that takes `{"image": "<base64>"}` over HTTP POST.
#[derive(Debug, Clone, Default)]
pub struct HttpOcrClient {
    client: reqwest::Client,
}

impl HttpOcrClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl OcrProvider for HttpOcrClient {
    async fn recognize(
        &self,
        image_path: &str,
        image_url: &str,
        api_url: &str,
    ) -> ClientResult<OcrResponse> {
        let source = ImageSource::from_args(image_path, image_url)?;
        let image_data = source.load(&self.client).await?;
        debug!("Loaded {} bytes from {:?}", image_data.len(), source);

        let base64_image = encode_base64(&image_data);
        self.recognize_base64(&base64_image, api_url).await
    }

    async fn recognize_base64(&self, base64_image: &str, api_url: &str) -> ClientResult<OcrResponse> {
        let request_body = serde_json::to_vec(&OcrRequest {
            image: base64_image.to_string(),
        })
        .map_err(OcrError::Encode)?;

        let resp = self
            .client
            .post(api_url)
            .header(reqwest::header::CONTENT_TYPE, constants::JSON_CONTENT_TYPE)
            .body(request_body)
            .send()
            .await
            .map_err(|e| OcrError::Network(format!("OCR request to {} failed", api_url), e))?;

        let status = resp.status();
        if !status.is_success() {
            warn!("OCR endpoint {} returned status {}", api_url, status);
        }

        let body = resp.bytes().await.map_err(|e| {
            OcrError::Io(
                "Failed to read OCR response".to_string(),
                std::io::Error::other(e),
            )
        })?;

        let ocr_response: OcrResponse = serde_json::from_slice(&body).map_err(|e| {
            OcrError::Decode(
                format!("Failed to parse OCR response JSON (status {})", status),
                e,
            )
        })?;

        if !ocr_response.result.is_ok() {
            warn!("OCR service reported errcode {}", ocr_response.result.errcode);
        }
        info!(
            "OCR returned {} detections for a {}x{} image",
            ocr_response.detections().len(),
            ocr_response.result.width,
            ocr_response.result.height
        );

        if let Err(e) = write_summary(&ocr_response, &mut std::io::stdout().lock()) {
            warn!("Failed to print OCR result: {}", e);
        }

        Ok(ocr_response)
    }

    fn provider_id(&self) -> &'static str {
        "http"
    }
}

/// Writes the result header followed by one summary line per detection.
pub fn write_summary<W: std::io::Write>(response: &OcrResponse, out: &mut W) -> std::io::Result<()> {
    writeln!(out, "{}", constants::RESULT_HEADER)?;
    for line in response.summary_lines() {
        writeln!(out, "{}", line)?;
    }
    out.flush()
}

/// Runs [`OcrProvider::recognize`] with a default [`HttpOcrClient`].
pub async fn recognize(image_path: &str, image_url: &str, api_url: &str) -> ClientResult<OcrResponse> {
    HttpOcrClient::new().recognize(image_path, image_url, api_url).await
}

/// Runs [`OcrProvider::recognize_base64`] with a default [`HttpOcrClient`].
pub async fn recognize_base64(base64_image: &str, api_url: &str) -> ClientResult<OcrResponse> {
    HttpOcrClient::new().recognize_base64(base64_image, api_url).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_recognize_without_source_is_invalid_argument() {
        let err = recognize("", "", "http://127.0.0.1:9/ocr").await.unwrap_err();
        assert!(matches!(err, OcrError::InvalidArgument(_)));
    }

    #[tokio::test]
    async fn test_recognize_missing_file_is_io_error() {
        let err = recognize("/no/such/dir/missing.png", "", "http://127.0.0.1:9/ocr")
            .await
            .unwrap_err();
        assert!(matches!(err, OcrError::Io(_, _)));
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_is_network_error() {
        // Port 9 (discard) is closed on test machines, so the connect is refused.
        let err = recognize_base64("aGk=", "http://127.0.0.1:9/ocr").await.unwrap_err();
        assert!(matches!(err, OcrError::Network(_, _)));
    }

    #[test]
    fn test_write_summary_prints_header_and_detection_lines() {
        let response: OcrResponse = serde_json::from_str(
            r#"{"result": {"errcode": 0, "height": 40, "width": 120, "imgpath": "", "ocr_response": [
                {"text": "A", "left": 1, "right": 2, "top": 3, "bottom": 4, "rate": 0.91},
                {"text": "B", "left": 5, "right": 6, "top": 7, "bottom": 8, "rate": 0.5}
            ]}}"#,
        )
        .unwrap();

        let mut out = Vec::new();
        write_summary(&response, &mut out).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "OCR result:\n\"A\" (1,2,3,4) 91.0%\n\"B\" (5,6,7,8) 50.0%\n"
        );
    }

    #[test]
    fn test_write_summary_without_detections() {
        let response: OcrResponse = serde_json::from_str(
            r#"{"result": {"errcode": 0, "height": 0, "width": 0, "imgpath": "", "ocr_response": []}}"#,
        )
        .unwrap();

        let mut out = Vec::new();
        write_summary(&response, &mut out).unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), "OCR result:\n");
    }

    #[test]
    fn test_provider_id() {
        let provider: Box<dyn OcrProvider> = Box::new(HttpOcrClient::new());
        assert_eq!(provider.provider_id(), "http");
    }
}
