use crate::cli::{Args, BareAttributePolicy};
use std::path::PathBuf;

/// Normalized configuration for a conversion run.
#[derive(Clone, Debug)]
pub struct Config {
    /// Input GTF path.
    pub input: PathBuf,
    /// Output GFF3 path.
    pub output: PathBuf,
    /// Handling of attributes without a value.
    pub bare_attributes: BareAttributePolicy,
}

impl Config {
    /// Builds a conversion config from CLI arguments.
    ///
    /// # Example
    ///
    /// ```rust, ignore
    /// use clap::Parser;
    /// use gtf2gff3::{Args, Config};
    ///
    /// let args = Args::parse_from(["gtf2gff3", "-i", "in.gtf", "-o", "out.gff3"]);
    /// let config = Config::from_args(&args);
    /// ```
    pub fn from_args(args: &Args) -> Self {
        Self {
            input: args.input.clone(),
            output: args.output.clone(),
            bare_attributes: args.bare_attributes,
        }
    }
}
