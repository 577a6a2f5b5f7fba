use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use linescribe::config::{Config, LogFormat, LoggingConfig};
use linescribe::ocr::{OcrProfile, OcrProvider};
use linescribe::processing::read_record;
use linescribe::{ExtractionStatus, OutputFormat, TextExtractionRecorder};

#[derive(Parser, Debug)]
#[command(name = "linescribe")]
#[command(version, about = "Extract text lines from an image with Tesseract OCR", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run OCR on an image and record its text lines
    Extract {
        /// Input image path
        image: PathBuf,

        /// Output file (default: text_lines.csv or result.json)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Output format (default: LINESCRIBE_FORMAT or lines_csv)
        #[arg(short, long, value_enum, ignore_case = true)]
        format: Option<OutputFormat>,

        /// Tesseract tuning profile (default: OCR_PROFILE or default)
        #[arg(long, value_enum, ignore_case = true)]
        profile: Option<OcrProfile>,

        /// Tesseract languages, e.g. eng+hin (default: OCR_LANGUAGES or eng)
        #[arg(long)]
        lang: Option<String>,
    },

    /// Print the text lines stored in a JSON record
    Show {
        /// Record file written by `extract --format json_record`
        record: PathBuf,
    },
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    dotenvy::dotenv().ok();

    let logging = LoggingConfig::from_env();
    init_tracing(logging.format)?;
    logging.warn_invalid();

    let config = Config::from_env();

    let code = match cli.command {
        Commands::Extract {
            image,
            output,
            format,
            profile,
            lang,
        } => extract(&config, image, output, format, profile, lang),
        Commands::Show { record } => show(record),
    };

    Ok(code)
}

fn init_tracing(format: LogFormat) -> anyhow::Result<()> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "linescribe=info".into());
    let registry = tracing_subscriber::registry().with(filter);

    match format {
        LogFormat::Text => registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .try_init(),
        LogFormat::Json => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            )
            .try_init(),
    }
    .context("failed to install tracing subscriber")
}

fn extract(
    config: &Config,
    image: PathBuf,
    output: Option<PathBuf>,
    format: Option<OutputFormat>,
    profile: Option<OcrProfile>,
    lang: Option<String>,
) -> ExitCode {
    let format = format.unwrap_or(config.output.format);
    let output = output.unwrap_or_else(|| config.output.default_path(format));

    let mut ocr_config = config.ocr.clone();
    if let Some(profile) = profile {
        ocr_config.profile = profile;
    }
    if let Some(lang) = lang {
        ocr_config.languages = lang;
    }

    tracing::info!("Initializing OCR provider ({})...", ocr_config.languages);
    let status = match OcrProvider::new(&ocr_config) {
        Ok(ocr) => TextExtractionRecorder::new(ocr).run(&image, &output, format),
        Err(e) => ExtractionStatus::from(e),
    };

    report(&status)
}

fn show(record: PathBuf) -> ExitCode {
    match read_record(&record) {
        Ok(record) => {
            println!("{}", record.joined_text());
            ExitCode::SUCCESS
        }
        Err(e) => report(&ExtractionStatus::from(e)),
    }
}

fn report(status: &ExtractionStatus) -> ExitCode {
    if status.is_done() {
        println!("{status}");
        ExitCode::SUCCESS
    } else {
        eprintln!("{status}");
        ExitCode::FAILURE
    }
}
