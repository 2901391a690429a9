use std::{
    io::{self, Read},
    path::PathBuf,
};

use anyhow::{Context, Result};
use clap::Parser;
use shared::domain::{PageSize, PdfOptions};
use tracing_subscriber::EnvFilter;
use wordsearch_core::{config::load_settings, platform, Generator, GeneratorSettings};

#[derive(Parser, Debug)]
#[command(name = "wordsearch-cli", about = "Render a word search through the generator binary")]
struct Args {
    /// Word list, one word per line. `-` reads stdin.
    words: PathBuf,
    /// Output PDF path (defaults to the configured output path).
    #[arg(short, long)]
    output: Option<PathBuf>,
    /// Print the grid instead of writing a PDF.
    #[arg(long)]
    json: bool,
    /// Open the PDF in the default viewer once written.
    #[arg(long)]
    open: bool,

    #[arg(long)]
    config: Option<PathBuf>,
    #[arg(long)]
    generator: Option<PathBuf>,
    #[arg(long)]
    timeout_secs: Option<u64>,

    #[arg(long)]
    rows: Option<u32>,
    #[arg(long)]
    cols: Option<u32>,
    #[arg(long)]
    margin: Option<u32>,
    /// letter, a4, or WIDTH,HEIGHT in points.
    #[arg(long)]
    size: Option<PageSize>,
    #[arg(long)]
    title: Option<String>,
    #[arg(long)]
    title_font_size: Option<u32>,
    #[arg(long)]
    grid_font_size: Option<u32>,
    #[arg(long)]
    word_bank_font_size: Option<u32>,
}

impl Args {
    fn apply_to(&self, settings: &mut GeneratorSettings) {
        if let Some(generator) = &self.generator {
            settings.binary_path = generator.clone();
        }
        if let Some(timeout_secs) = self.timeout_secs {
            settings.timeout_secs = timeout_secs;
        }
        if let Some(output) = &self.output {
            settings.output_path = output.clone();
        }
        apply_option_flags(self, &mut settings.pdf);
    }

    fn read_words(&self) -> Result<String> {
        if self.words.as_os_str() == "-" {
            let mut words = String::new();
            io::stdin()
                .read_to_string(&mut words)
                .context("failed to read word list from stdin")?;
            return Ok(words);
        }
        std::fs::read_to_string(&self.words)
            .with_context(|| format!("failed to read word list {}", self.words.display()))
    }
}

fn apply_option_flags(args: &Args, pdf: &mut PdfOptions) {
    if let Some(v) = args.rows {
        pdf.rows = v;
    }
    if let Some(v) = args.cols {
        pdf.cols = v;
    }
    if let Some(v) = args.margin {
        pdf.margin = v;
    }
    if let Some(v) = args.size {
        pdf.page_size = v;
    }
    if let Some(v) = &args.title {
        pdf.title = v.clone();
    }
    if let Some(v) = args.title_font_size {
        pdf.title_font_size = v;
    }
    if let Some(v) = args.grid_font_size {
        pdf.grid_font_size = v;
    }
    if let Some(v) = args.word_bank_font_size {
        pdf.word_bank_font_size = v;
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let mut settings = load_settings(args.config.as_deref());
    args.apply_to(&mut settings);
    let words = args.read_words()?;
    let generator = Generator::from_settings(&settings);

    if args.json {
        let grid = generator.generate_grid(&words, &settings.pdf).await?;
        print!("{grid}");
        return Ok(());
    }

    let report = generator
        .generate(&words, &settings.output_path, &settings.pdf)
        .await?;
    println!(
        "Wrote {} ({} words, {:.1}s)",
        report.output_path.display(),
        report.word_count,
        report.elapsed.as_secs_f32()
    );

    if args.open || settings.open_after_generate {
        platform::open_with_default_viewer(&report.output_path)
            .with_context(|| format!("failed to open {}", report.output_path.display()))?;
    }
    Ok(())
}
