//! # gtf2gff3
//!
//! GTF-to-GFF3 converter with ID/Parent inference.
//!
//! ## Usage
//!
//! ```bash
//! gtf2gff3 -i <INPUT> -o <OUTPUT> [OPTIONS]
//!
//! Required arguments:
//!   -i, --input <GTF>                 Path to GTF file
//!   -o, --output <GFF3>               Path to output GFF3 file
//!
//! Optional arguments:
//!   -b, --bare-attributes <POLICY>    Policy for attributes without a value
//!                                     [default: skip] [possible values: skip, keep, fail]
//!   -q, --quiet                       Only log warnings and errors
//!   -h, --help                        Print help
//!   -V, --version                     Print version
//! ```
//!
//! ## Examples
//!
//! ```bash
//! gtf2gff3 -i annotations.gtf -o annotations.gff3
//! gtf2gff3 -i annotations.gtf.gz -o annotations.gff3.gz -b keep
//! ```
use clap::Parser;
use colored::Colorize;
use gtf2gff3::{run, Args, Config};
use log::Level;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let level = if args.quiet { Level::Warn } else { Level::Info };
    simple_logger::init_with_level(level)?;
    log::info!("{:?}", args);

    args.check()?;
    let config = Config::from_args(&args);

    let stats = run(&config)?;
    log::info!(
        "Records: {}, comments skipped: {}, malformed lines skipped: {}, attributes dropped: {}",
        stats.counts.records,
        stats.counts.comments,
        stats.counts.malformed,
        stats.counts.dropped_attributes
    );
    log::info!("Elapsed: {:.4?} secs", stats.elapsed.as_secs_f32());
    log::info!("Memory: {:.2} MB", stats.mem_delta_mb);

    println!(
        "{} Output saved to {}",
        "Conversion complete!".green().bold(),
        config.output.display()
    );

    Ok(())
}
