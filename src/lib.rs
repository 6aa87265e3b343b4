//! # gtf2gff3
//!
//! GTF-to-GFF3 converter with ID/Parent inference.
//!
//! Every GTF record is carried over column by column. The attribute column is
//! rewritten from `key "value";` into `key=value` syntax, and GFF3 `ID` and
//! `Parent` attributes are derived from `gene_id` and `transcript_id`:
//!
//! - with a `gene_id`, `ID` is the gene id;
//! - with a `gene_id` and a `transcript_id`, `ID` is the transcript id and
//!   `Parent` is the gene id.
//!
//! Comment lines and lines without exactly nine columns are dropped.
//!
//! ## Usage
//!
//! ```rust, ignore
//! use gtf2gff3::{run, BareAttributePolicy, Config};
//! use std::path::PathBuf;
//!
//! let config = Config {
//!     input: PathBuf::from("annotations.gtf"),
//!     output: PathBuf::from("annotations.gff3"),
//!     bare_attributes: BareAttributePolicy::Skip,
//! };
//!
//! let stats = run(&config)?;
//! println!("Conversion completed in {:?}", stats.elapsed);
//! println!("Records written: {}", stats.counts.records);
//! ```
//!
//! ### Converting streams
//!
//! ```rust, ignore
//! use gtf2gff3::{convert_reader, BareAttributePolicy};
//!
//! let gtf = "chr1\tsrc\tgene\t1\t100\t.\t+\t.\tgene_id \"G1\";\n";
//! let mut gff3 = Vec::new();
//! convert_reader(gtf.as_bytes(), &mut gff3, BareAttributePolicy::Skip)?;
//! ```

pub mod cli;
pub mod config;
pub mod convert;
pub mod detect;
pub mod error;
pub mod gff3;
pub mod gtf;
pub mod memory;

pub use cli::{Args, BareAttributePolicy};
pub use config::Config;
pub use convert::{convert, convert_reader, convert_with_policy, run, ConvertStats, RunStats};
pub use error::{Gtf2Gff3Error, Result};
pub use memory::max_mem_usage_mb;
