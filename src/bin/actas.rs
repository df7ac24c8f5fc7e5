//! Rename and archive SIAGIE actas
//!
//! Reads each PDF, extracts its header metadata, and writes it under
//! `<root>/<year>/<level>/` with its canonical name. Prints the batch result
//! as JSON.
//!
//! Usage:
//!   actas process scans/ extra.pdf --root ActasProcesadas
//!   actas process scans/ --institutions data/institutions.json --zip out/

use actas_oxide::{
    load_inputs, ActaArchive, ActaParser, ExtractionConfig, InstitutionDirectory, PdfOxideSource,
};
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Parse, rename and archive PDF actas
    Process {
        /// PDF files or directories containing PDFs
        #[arg(required = true)]
        inputs: Vec<PathBuf>,

        /// Archive root
        #[arg(short, long, default_value = "ActasProcesadas")]
        root: PathBuf,

        /// JSON file with known institutions
        #[arg(short, long)]
        institutions: Option<PathBuf>,

        /// Also package the archive as a ZIP into this directory
        #[arg(short, long)]
        zip: Option<PathBuf>,

        /// Keep existing archive contents instead of starting empty
        #[arg(long)]
        keep: bool,
    },
}

fn is_pdf(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("pdf"))
}

/// Expand directories (non-recursively) into their PDF files, sorted by name.
fn discover_pdfs(inputs: &[PathBuf]) -> Result<Vec<PathBuf>> {
    let mut pdfs = Vec::new();
    for input in inputs {
        if input.is_dir() {
            let mut found: Vec<PathBuf> = fs::read_dir(input)
                .with_context(|| format!("Failed to read directory {}", input.display()))?
                .filter_map(|e| e.ok())
                .map(|e| e.path())
                .filter(|p| p.is_file() && is_pdf(p))
                .collect();
            found.sort();
            pdfs.extend(found);
        } else {
            if !is_pdf(input) {
                log::warn!("{} has no .pdf extension, processing anyway", input.display());
            }
            pdfs.push(input.clone());
        }
    }
    Ok(pdfs)
}

fn process(
    inputs: Vec<PathBuf>,
    root: PathBuf,
    institutions: Option<PathBuf>,
    zip: Option<PathBuf>,
    keep: bool,
) -> Result<()> {
    let mut config = ExtractionConfig::new();
    if let Some(path) = institutions {
        let directory = InstitutionDirectory::from_json_file(&path)
            .with_context(|| format!("Failed to load institutions from {}", path.display()))?;
        config = config.with_institutions(directory);
    }

    let archive = ActaArchive::new(&root, ActaParser::new(config), PdfOxideSource::new())
        .with_context(|| format!("Failed to create archive root {}", root.display()))?;

    let paths = discover_pdfs(&inputs)?;
    if paths.is_empty() {
        anyhow::bail!("No PDF files found");
    }
    if !keep {
        if let Some(inside) = paths.iter().find(|p| archive.contains(p)) {
            anyhow::bail!(
                "{} is inside the archive root {}, which is cleared before processing; \
                 use --keep or move the input",
                inside.display(),
                root.display()
            );
        }
    }

    // Everything is in memory before the root is touched.
    let loaded = load_inputs(&paths);
    if !keep {
        archive.clear()?;
    }

    let batch = archive.process_loaded(loaded);

    println!("{}", serde_json::to_string_pretty(&batch)?);
    eprintln!(
        "Processed {}: {} archived, {} failed",
        batch.total(),
        batch.succeeded(),
        batch.failed()
    );

    if let Some(out_dir) = zip {
        let zip_path = archive.package_zip(&out_dir)?;
        eprintln!("ZIP written to {}", zip_path.display());
    }

    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    match cli.command {
        Command::Process {
            inputs,
            root,
            institutions,
            zip,
            keep,
        } => process(inputs, root, institutions, zip, keep),
    }
}
