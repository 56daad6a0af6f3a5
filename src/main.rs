use clap::Parser;
use log::error;

use ocr_client::cli::{self, Cli};

fn main() {
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    if let Err(e) = cli::run(cli) {
        error!("OCR failed: {}", e);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
