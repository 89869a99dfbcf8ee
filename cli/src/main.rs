use std::fs;
use std::path::{Path, PathBuf};

use clap::Parser;
use pagetext::{PageRange, PdfExtractor};

#[derive(Parser)]
#[command(name = "pagetext")]
#[command(about = "Extract plain text from a page range of a PDF file", long_about = None)]
struct Args {
    /// PDF file to extract text from
    #[arg(value_name = "FILE")]
    file: PathBuf,

    /// First page to extract (1-based, inclusive; clamped into document bounds)
    #[arg(value_name = "START_PAGE", requires = "end")]
    start: Option<u32>,

    /// Last page to extract (1-based, inclusive; clamped into document bounds)
    #[arg(value_name = "END_PAGE")]
    end: Option<u32>,

    /// Password for encrypted PDFs
    #[arg(short, long)]
    password: Option<String>,
}

/// `<input stem>_extracted.txt`, relative to the current working directory.
fn output_file_name(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy())
        .unwrap_or_default();
    PathBuf::from(format!("{}_extracted.txt", stem))
}

fn main() {
    tracing_subscriber::fmt::init();

    let args = Args::parse();

    if !args.file.exists() {
        eprintln!("Error: file {} does not exist", args.file.display());
        std::process::exit(1);
    }

    // Build extractor with optional password and page range
    let mut builder = PdfExtractor::builder();
    if let Some(password) = args.password {
        builder = builder.password(password);
    }
    if let (Some(start), Some(end)) = (args.start, args.end) {
        builder = builder.page_range(PageRange::new(start, end));
    }

    println!("Processing PDF file: {}", args.file.display());

    // Extract text
    let output = match builder.build().from_path(&args.file) {
        Ok(output) => output,
        Err(e) => {
            eprintln!("Error extracting text from {}: {}", args.file.display(), e);
            std::process::exit(1);
        }
    };

    println!("Total pages: {}", output.total_pages());

    let text = output.to_string();

    println!();
    println!("{}", "=".repeat(60));
    println!("PDF text content:");
    println!("{}", "=".repeat(60));
    println!("{}", text);

    let out_path = output_file_name(&args.file);
    if let Err(e) = fs::write(&out_path, &text) {
        eprintln!("Error writing {}: {}", out_path.display(), e);
        std::process::exit(1);
    }

    println!("Text content saved to: {}", out_path.display());
}
