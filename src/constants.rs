// src/constants.rs

pub const DEFAULT_API_URL: &str = "http://192.168.31.106:5000/ocr";
pub const DEFAULT_IMAGE_PATH: &str = "";
pub const DEFAULT_IMAGE_URL: &str = "";

// Environment overrides
pub const ENV_API_URL: &str = "OCR_API_URL";
pub const ENV_IMAGE_PATH: &str = "OCR_IMAGE_PATH";
pub const ENV_IMAGE_URL: &str = "OCR_IMAGE_URL";

pub const JSON_CONTENT_TYPE: &str = "application/json";
pub const RESULT_HEADER: &str = "OCR result:";
