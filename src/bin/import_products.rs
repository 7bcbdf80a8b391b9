use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use ditel_site::constants;
use ditel_site::importer::{ImportError, ImportReport, Importer};

/// Convert a product spreadsheet (xlsx, xls or ods) into the catalog JSON
///
/// Headers are matched loosely ("Product Name", "Title" and "Name" all fill
/// the name), rows without a name are skipped, and missing images get a
/// per-category placeholder.
#[derive(Parser, Debug)]
#[command(name = "import-products", version)]
struct Args {
    /// Spreadsheet to read; only the first worksheet is used.
    #[arg(default_value = constants::DEFAULT_IMPORT_INPUT)]
    input: PathBuf,

    /// Catalog file to write.
    #[arg(short, long, default_value = constants::DEFAULT_CATALOG_OUTPUT)]
    output: PathBuf,
}

fn print_summary(report: &ImportReport, args: &Args) {
    println!("Columns: {}", report.headers.join(", "));
    println!("Processed {} products from {} rows", report.products.len(), report.rows);

    if report.skipped > 0 {
        println!("Skipped {} rows (missing required data)", report.skipped);
    }

    let missing_images = report.missing_images();
    if missing_images > 0 {
        println!("{missing_images} products have placeholder images (no image URL in the spreadsheet)");
    }

    println!("Saved to {}", args.output.display());
    println!();
    println!("Summary:");
    for (category, count) in report.categories.iter() {
        println!("   - {category}: {count} products");
    }
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    match Importer::run(&args.input, &args.output) {
        Ok(report) => {
            print_summary(&report, &args);
            ExitCode::SUCCESS
        }
        Err(error @ ImportError::NotFound(_)) => {
            log::error!("{error}");
            eprintln!("Please provide a valid path to your products spreadsheet.");
            ExitCode::FAILURE
        }
        Err(error) => {
            log::error!("Import failed: {error}");
            ExitCode::FAILURE
        }
    }
}
