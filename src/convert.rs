use crate::cli::BareAttributePolicy;
use crate::config::Config;
use crate::detect::{detect_compression, Compression};
use crate::error::{Gtf2Gff3Error, Result};
use crate::gff3::{write_header, Gff3Record};
use crate::gtf::{GtfRecord, ParseError};
use crate::memory::max_mem_usage_mb;
use flate2::read::MultiGzDecoder;
use flate2::write::GzEncoder;
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;
use std::time::{Duration, Instant};

/// Line counts collected during a single conversion pass.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ConvertStats {
    /// GFF3 records written (header excluded).
    pub records: usize,
    /// Skipped `#` lines.
    pub comments: usize,
    /// Skipped lines without exactly nine columns.
    pub malformed: usize,
    /// Bare attribute segments dropped under [`BareAttributePolicy::Skip`].
    pub dropped_attributes: usize,
}

/// Summary statistics for a conversion run.
#[derive(Debug, Clone, Copy)]
pub struct RunStats {
    /// Wall clock time spent in the conversion.
    pub elapsed: Duration,
    /// Delta in maximum RSS memory usage, in MB.
    pub mem_delta_mb: f64,
    /// Line counts of the pass.
    pub counts: ConvertStats,
}

/// Runs a conversion with the provided configuration.
///
/// # Errors
///
/// Returns an error if either path cannot be opened, or if reading/writing
/// fails mid-stream. A partially written
/// output file may remain in the latter case.
///
/// # Example
///
/// ```rust, ignore
/// use gtf2gff3::{run, BareAttributePolicy, Config};
/// use std::path::PathBuf;
///
/// let config = Config {
///     input: PathBuf::from("input.gtf"),
///     output: PathBuf::from("output.gff3"),
///     bare_attributes: BareAttributePolicy::Skip,
/// };
/// let stats = run(&config)?;
/// println!("Conversion took: {:?}", stats.elapsed);
/// ```
pub fn run(config: &Config) -> Result<RunStats> {
    let start = Instant::now();
    let start_mem = max_mem_usage_mb();

    let counts = convert_with_policy(&config.input, &config.output, config.bare_attributes)?;

    let elapsed = start.elapsed();
    let mem_delta = (max_mem_usage_mb() - start_mem).max(0.0);

    Ok(RunStats {
        elapsed,
        mem_delta_mb: mem_delta,
        counts,
    })
}

/// Converts the GTF file at `input` into a GFF3 file at `output`, skipping
/// bare attribute segments.
pub fn convert<P: AsRef<Path>, Q: AsRef<Path>>(input: P, output: Q) -> Result<ConvertStats> {
    convert_with_policy(input.as_ref(), output.as_ref(), BareAttributePolicy::default())
}

/// Converts `input` into `output` with an explicit bare attribute policy.
///
/// Paths ending in `.gz`/`.gzip` are read or written as gzip; any other
/// name is treated as plain text.
pub fn convert_with_policy(
    input: &Path,
    output: &Path,
    policy: BareAttributePolicy,
) -> Result<ConvertStats> {
    let reader = open_reader(input, detect_compression(input))?;
    let mut writer = OutputWriter::create(output, detect_compression(output))?;

    let stats = convert_reader(reader, &mut writer, policy)?;
    writer.finish()?;

    Ok(stats)
}

/// Runs the GTF-to-GFF3 pass over arbitrary streams.
///
/// The header is written first, even for empty input. Comment lines and
/// lines without exactly nine columns are skipped and only counted.
///
/// # Errors
///
/// Returns an error on I/O failure, or on a bare attribute segment when
/// `policy` is [`BareAttributePolicy::Fail`].
pub fn convert_reader<R: BufRead, W: Write>(
    mut reader: R,
    writer: &mut W,
    policy: BareAttributePolicy,
) -> Result<ConvertStats> {
    write_header(writer)?;

    let mut stats = ConvertStats::default();
    let mut line = String::new();
    let mut line_number = 0;

    loop {
        line.clear();
        if reader.read_line(&mut line)? == 0 {
            break;
        }
        line_number += 1;

        if GtfRecord::is_comment(&line) {
            stats.comments += 1;
            continue;
        }

        let record = match GtfRecord::parse(&line, policy) {
            Ok(record) => record,
            Err(ParseError::ColumnCount(columns)) => {
                log::debug!("line {line_number}: skipping record with {columns} columns");
                stats.malformed += 1;
                continue;
            }
            Err(ParseError::BareAttribute(segment)) => {
                return Err(Gtf2Gff3Error::BareAttribute {
                    line: line_number,
                    segment,
                });
            }
        };

        for segment in record.attr.dropped() {
            log::warn!("line {line_number}: dropping attribute {segment:?} without a value");
        }
        stats.dropped_attributes += record.attr.dropped().len();

        Gff3Record::from(record).write(writer)?;
        stats.records += 1;
    }

    Ok(stats)
}

/// Opens a buffered reader, decompressing gzip input.
fn open_reader(path: &Path, compression: Compression) -> io::Result<Box<dyn BufRead>> {
    let file = File::open(path)?;
    if compression.is_compressed() {
        Ok(Box::new(BufReader::with_capacity(
            256 * 1024,
            MultiGzDecoder::new(file),
        )))
    } else {
        Ok(Box::new(BufReader::with_capacity(256 * 1024, file)))
    }
}

/// Buffered output sink, gzip-compressed when requested.
enum OutputWriter {
    Plain(BufWriter<File>),
    Gzip(GzEncoder<BufWriter<File>>),
}

impl OutputWriter {
    fn create(path: &Path, compression: Compression) -> io::Result<Self> {
        let file = BufWriter::with_capacity(256 * 1024, File::create(path)?);
        if compression.is_compressed() {
            Ok(OutputWriter::Gzip(GzEncoder::new(
                file,
                flate2::Compression::default(),
            )))
        } else {
            Ok(OutputWriter::Plain(file))
        }
    }

    /// Flushes all buffers and writes the gzip trailer, if any.
    fn finish(self) -> io::Result<()> {
        match self {
            OutputWriter::Plain(mut writer) => writer.flush(),
            OutputWriter::Gzip(encoder) => encoder.finish()?.flush(),
        }
    }
}

impl Write for OutputWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            OutputWriter::Plain(writer) => writer.write(buf),
            OutputWriter::Gzip(writer) => writer.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            OutputWriter::Plain(writer) => writer.flush(),
            OutputWriter::Gzip(writer) => writer.flush(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;

    fn convert_str(input: &str, policy: BareAttributePolicy) -> Result<(String, ConvertStats)> {
        let mut output = Vec::new();
        let stats = convert_reader(input.as_bytes(), &mut output, policy)?;
        Ok((String::from_utf8(output).unwrap(), stats))
    }

    #[test]
    fn test_empty_input_writes_header() {
        let (output, stats) = convert_str("", BareAttributePolicy::Skip).unwrap();
        assert_eq!(output, "##gff-version 3\n");
        assert_eq!(stats, ConvertStats::default());
    }

    #[test]
    fn test_counts() {
        let gtf = indoc! {"
            #!genome-build GRCh38
            chr1\tsrc\tgene\t100\t200\t.\t+\t.\tgene_id \"g1\"; cds_start_NF;

            chr1\tsrc\tgene\t100\t200
            chr1\tsrc\ttranscript\t100\t200\t.\t+\t.\tgene_id \"g1\"; transcript_id \"t1\";
        "};
        let (output, stats) = convert_str(gtf, BareAttributePolicy::Skip).unwrap();
        assert_eq!(output.lines().count(), 3);
        assert_eq!(
            stats,
            ConvertStats {
                records: 2,
                comments: 1,
                malformed: 2,
                dropped_attributes: 1,
            }
        );
    }

    #[test]
    fn test_fail_policy_reports_line() {
        let gtf = indoc! {"
            # header
            chr1\tsrc\tgene\t100\t200\t.\t+\t.\tgene_id \"g1\"; cds_start_NF;
        "};
        let err = convert_str(gtf, BareAttributePolicy::Fail).unwrap_err();
        match err {
            Gtf2Gff3Error::BareAttribute { line, segment } => {
                assert_eq!(line, 2);
                assert_eq!(segment, "cds_start_NF");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_missing_trailing_newline() {
        let gtf = "chr1\tsrc\tgene\t1\t2\t.\t+\t.\tgene_id \"g1\"";
        let (output, _) = convert_str(gtf, BareAttributePolicy::Skip).unwrap();
        assert_eq!(
            output,
            "##gff-version 3\nchr1\tsrc\tgene\t1\t2\t.\t+\t.\tgene_id=g1;ID=g1\n"
        );
    }

    #[test]
    fn test_crlf_line_endings() {
        let gtf = "chr1\tsrc\tgene\t1\t2\t.\t+\t.\tgene_id \"g1\";\r\n";
        let (output, stats) = convert_str(gtf, BareAttributePolicy::Skip).unwrap();
        assert_eq!(stats.records, 1);
        assert!(output.ends_with("gene_id=g1;ID=g1\n"));
    }
}
