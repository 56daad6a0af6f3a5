use serde::{Deserialize, Serialize};
use std::fmt;

/// Request body sent to the OCR endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OcrRequest {
    /// Standard base64 of the raw image bytes, without a `data:` prefix
    pub image: String,
}

/// One recognized text region.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OcrDetection {
    pub top: f64,
    pub bottom: f64,
    pub left: f64,
    pub right: f64,
    /// Confidence in [0, 1]
    pub rate: f64,
    pub text: String,
}

impl OcrDetection {
    /// `"<text>" (<left>,<right>,<top>,<bottom>) <rate>%`
    pub fn summary_line(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for OcrDetection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "\"{}\" ({:.0},{:.0},{:.0},{:.0}) {:.1}%",
            self.text,
            self.left,
            self.right,
            self.top,
            self.bottom,
            self.rate * 100.0
        )
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OcrResult {
    pub errcode: i64,
    pub height: i64,
    pub width: i64,
    pub imgpath: String,
    pub ocr_response: Vec<OcrDetection>,
}

impl OcrResult {
    pub fn is_ok(&self) -> bool {
        self.errcode == 0
    }
}

/// Top-level envelope returned by the OCR service.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OcrResponse {
    pub result: OcrResult,
}

impl OcrResponse {
    pub fn detections(&self) -> &[OcrDetection] {
        &self.result.ocr_response
    }

    pub fn texts(&self) -> Vec<&str> {
        self.detections().iter().map(|d| d.text.as_str()).collect()
    }

    /// One line per detection, in the order the service returned them.
    pub fn summary_lines(&self) -> Vec<String> {
        self.detections().iter().map(OcrDetection::summary_line).collect()
    }
}
