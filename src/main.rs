use std::path::PathBuf;
use std::process::ExitCode;

use teif::TeifError;
use teif::pdf::{FieldExtractor, SampleExtractor};
use teif::xml::{ConvertOptions, convert};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_PDF: &str = "invoice.pdf";

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn run(path: PathBuf) -> anyhow::Result<ExitCode> {
    let fields = SampleExtractor.extract(&path)?;

    match convert(&fields, &ConvertOptions::default()) {
        Ok(xml) => {
            println!("{xml}");
            Ok(ExitCode::SUCCESS)
        }
        Err(TeifError::Validation(err)) => {
            tracing::error!(violations = err.errors().len(), "invoice rejected");
            println!("Validation error: {}", err.to_json());
            Ok(ExitCode::FAILURE)
        }
        Err(e) => Err(e.into()),
    }
}

fn main() -> anyhow::Result<ExitCode> {
    init_tracing();

    let path = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_PDF));

    run(path)
}
