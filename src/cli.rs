use anyhow::Context;
use clap::{Parser, Subcommand};
use log::info;
use std::io::Read;

use crate::config::Config;
use crate::models::OcrResponse;
use crate::services::{HttpOcrClient, OcrProvider};

#[derive(Parser)]
#[command(name = "ocr-client")]
#[command(author, version, about = "Send an image to a remote OCR service and print the text boxes", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Recognize a local image file or an image URL
    Recognize {
        /// Local image path (takes precedence over --url)
        #[arg(long)]
        path: Option<String>,
        /// Image URL to download
        #[arg(long)]
        url: Option<String>,
        /// OCR endpoint, defaults to $OCR_API_URL
        #[arg(long)]
        api_url: Option<String>,
    },

    /// Recognize an already base64-encoded image
    RecognizeBase64 {
        /// Base64 image data, or "-" to read it from stdin
        image: String,
        /// OCR endpoint, defaults to $OCR_API_URL
        #[arg(long)]
        api_url: Option<String>,
    },
}

pub fn run(cli: Cli) -> anyhow::Result<OcrResponse> {
    let rt = tokio::runtime::Runtime::new().context("Failed to start async runtime")?;

    match cli.command {
        Some(Commands::Recognize { path, url, api_url }) => {
            let config = Config::new().with_overrides(api_url, path, url);
            rt.block_on(handle_recognize(&config))
        }
        None => rt.block_on(handle_recognize(&Config::new())),
        Some(Commands::RecognizeBase64 { image, api_url }) => {
            let config = Config::new().with_overrides(api_url, None, None);
            let image = read_base64_arg(&image)?;
            rt.block_on(handle_recognize_base64(&image, &config))
        }
    }
}

pub async fn handle_recognize(config: &Config) -> anyhow::Result<OcrResponse> {
    info!("Sending image to {}", config.api_url);
    let provider = HttpOcrClient::new();
    let response = provider
        .recognize(&config.image_path, &config.image_url, &config.api_url)
        .await?;
    Ok(response)
}

pub async fn handle_recognize_base64(image: &str, config: &Config) -> anyhow::Result<OcrResponse> {
    info!("Sending base64 image ({} chars) to {}", image.len(), config.api_url);
    let provider = HttpOcrClient::new();
    let response = provider.recognize_base64(image, &config.api_url).await?;
    Ok(response)
}

fn read_base64_arg(arg: &str) -> anyhow::Result<String> {
    if arg != "-" {
        return Ok(arg.trim().to_string());
    }
    let mut buf = String::new();
    std::io::stdin()
        .read_to_string(&mut buf)
        .context("Failed to read base64 image from stdin")?;
    Ok(buf.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_recognize_flags() {
        let cli = Cli::try_parse_from([
            "ocr-client",
            "recognize",
            "--path",
            "/tmp/a.png",
            "--api-url",
            "http://localhost:5000/ocr",
        ])
        .unwrap();

        match cli.command {
            Some(Commands::Recognize { path, url, api_url }) => {
                assert_eq!(path.as_deref(), Some("/tmp/a.png"));
                assert_eq!(url, None);
                assert_eq!(api_url.as_deref(), Some("http://localhost:5000/ocr"));
            }
            _ => panic!("expected recognize subcommand"),
        }
    }

    #[test]
    fn test_parse_recognize_base64() {
        let cli = Cli::try_parse_from(["ocr-client", "recognize-base64", "aGk="]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Commands::RecognizeBase64 { ref image, api_url: None }) if image == "aGk="
        ));
    }

    #[test]
    fn test_no_subcommand_is_allowed() {
        let cli = Cli::try_parse_from(["ocr-client"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_base64_arg_is_trimmed() {
        assert_eq!(read_base64_arg(" aGk=\n").unwrap(), "aGk=");
    }
}
