use crate::gtf::{Attributes, GtfRecord};
use std::fmt;
use std::io::{self, Write};

/// First line of every GFF3 file.
pub const HEADER: &str = "##gff-version 3";

/// Writes the `##gff-version 3` header line.
pub fn write_header<W: Write>(writer: &mut W) -> io::Result<()> {
    writeln!(writer, "{HEADER}")
}

/// A GFF3 record derived from a GTF record.
#[derive(Debug, PartialEq)]
pub struct Gff3Record<'a> {
    pub seqid: &'a str,
    pub source: &'a str,
    pub feature: &'a str,
    pub start: &'a str,
    pub end: &'a str,
    pub score: &'a str,
    pub strand: &'a str,
    pub phase: &'a str,
    pub attr: Attributes<'a>,
}

impl<'a> From<GtfRecord<'a>> for Gff3Record<'a> {
    /// Carries the eight leading columns over and derives `ID`/`Parent`.
    fn from(record: GtfRecord<'a>) -> Self {
        let mut attr = record.attr;
        attr.assign_identity();

        Self {
            seqid: record.seqid,
            source: record.source,
            feature: record.feature,
            start: record.start,
            end: record.end,
            score: record.score,
            strand: record.strand,
            phase: record.frame,
            attr,
        }
    }
}

impl Gff3Record<'_> {
    /// Writes the record followed by a newline.
    pub fn write<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        writeln!(writer, "{self}")
    }
}

impl fmt::Display for Gff3Record<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}",
            self.seqid,
            self.source,
            self.feature,
            self.start,
            self.end,
            self.score,
            self.strand,
            self.phase,
            self.attr
        )
    }
}
