mod ocr;
pub use ocr::*;

mod image;
pub use image::*;
