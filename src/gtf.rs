mod attr;
pub use attr::*;

use crate::cli::BareAttributePolicy;

/// A single GTF record.
///
/// The first eight columns are carried through verbatim; only the attribute
/// column is interpreted.
#[derive(Debug, PartialEq)]
pub struct GtfRecord<'a> {
    pub seqid: &'a str,
    pub source: &'a str,
    pub feature: &'a str,
    pub start: &'a str,
    pub end: &'a str,
    pub score: &'a str,
    pub strand: &'a str,
    pub frame: &'a str,
    pub attr: Attributes<'a>,
}

impl<'a> GtfRecord<'a> {
    /// Parses a GTF line. Trailing whitespace (including the newline) is
    /// trimmed before splitting on tabs; anything other than nine columns is
    /// rejected with [`ParseError::ColumnCount`].
    pub fn parse(line: &'a str, policy: BareAttributePolicy) -> Result<Self, ParseError> {
        let fields: Vec<&'a str> = line.trim_end().split('\t').collect();

        let &[seqid, source, feature, start, end, score, strand, frame, attr] = fields.as_slice()
        else {
            return Err(ParseError::ColumnCount(fields.len()));
        };

        Ok(Self {
            seqid,
            source,
            feature,
            start,
            end,
            score,
            strand,
            frame,
            attr: Attributes::parse(attr, policy)?,
        })
    }

    /// Comment lines start with `#`, checked before any trimming.
    #[inline(always)]
    pub fn is_comment(line: &str) -> bool {
        line.starts_with('#')
    }
}
