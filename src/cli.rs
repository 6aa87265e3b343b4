//! GTF-to-GFF3 converter with ID/Parent inference
//! Alejandro Gonzales-Irribarren, 2025

use crate::detect::{detect_format, Format};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use thiserror::Error;

#[derive(Parser, Debug)]
#[clap(
    name = "gtf2gff3",
    version = env!("CARGO_PKG_VERSION"),
    author = "Alejandro Gonzales-Irribarren <alejandrxgzi@gmail.com>",
    about = "GTF-to-GFF3 converter with ID/Parent inference"
)]
pub struct Args {
    /// GTF-to-GFF3 converter.
    ///
    /// Start by providing the path to the GTF file with -i/--input file.gtf
    /// or -i/--input file.gtf.gz.
    #[clap(
        short = 'i',
        long = "input",
        help = "Path to GTF file",
        value_name = "GTF",
        required = true
    )]
    pub input: PathBuf,

    /// Output filepath; gzip-compressed when it ends in .gz, plain text otherwise.
    #[clap(
        short = 'o',
        long = "output",
        help = "Path to output GFF3 file",
        value_name = "GFF3",
        required = true
    )]
    pub output: PathBuf,

    /// What to do with attributes that have no value (e.g. `cds_start_NF;`).
    #[clap(
        short = 'b',
        long = "bare-attributes",
        help = "Policy for attributes without a value",
        value_name = "POLICY",
        value_enum,
        default_value_t = BareAttributePolicy::Skip
    )]
    pub bare_attributes: BareAttributePolicy,

    /// Only log warnings and errors.
    #[clap(short = 'q', long = "quiet", help = "Only log warnings and errors")]
    pub quiet: bool,
}

/// Handling of attribute segments without a key/value separator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum BareAttributePolicy {
    /// Drop the segment and log a warning.
    #[default]
    Skip,
    /// Keep the segment as a key with an empty value.
    Keep,
    /// Abort the conversion.
    Fail,
}

impl Args {
    /// Checks all the arguments for validity using validate_args()
    pub fn check(&self) -> Result<(), ArgError> {
        self.validate_args()
    }

    /// The input file must exist. A name without a `.gtf` extension only
    /// triggers a warning.
    fn check_input(&self) -> Result<(), ArgError> {
        if !self.input.exists() {
            let err = format!("file {:?} does not exist", self.input);
            return Err(ArgError::InvalidInput(err));
        }

        if detect_format(&self.input) != Some(Format::Gtf) {
            log::warn!("input {:?} does not look like a GTF file", self.input);
        }
        Ok(())
    }

    /// A name without a `.gff3`/`.gff` extension only triggers a warning.
    fn check_output(&self) {
        if detect_format(&self.output) != Some(Format::Gff3) {
            log::warn!("output {:?} does not look like a GFF3 file", self.output);
        }
    }

    /// Validates all the arguments
    fn validate_args(&self) -> Result<(), ArgError> {
        self.check_input()?;
        self.check_output();
        Ok(())
    }
}

#[derive(Debug, Error)]
pub enum ArgError {
    /// The input file does not exist.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
