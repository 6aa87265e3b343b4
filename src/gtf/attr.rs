use crate::cli::BareAttributePolicy;
use hashbrown::HashMap;
use std::fmt;
use thiserror::Error;

const GENE_ID: &str = "gene_id";
const TRANSCRIPT_ID: &str = "transcript_id";
const ID: &str = "ID";
const PARENT: &str = "Parent";

/// Insertion-ordered attribute mapping of a single record.
///
/// Keys and values borrow from the source line; re-inserting an existing key
/// replaces its value without moving it.
#[derive(Debug, Default, PartialEq)]
pub struct Attributes<'a> {
    entries: Vec<(&'a str, &'a str)>,
    index: HashMap<&'a str, usize>,
    dropped: Vec<&'a str>,
}

impl<'a> Attributes<'a> {
    /// Parses a GTF attribute column (`key "value"; key "value";`).
    ///
    /// Segments are split on `;`, trimmed, and split again on the first
    /// whitespace run. Double quotes are stripped from the ends of values
    /// only; inner or escaped quotes (`"a\"b"`) are kept verbatim.
    /// Segments without a separator are handled according to `policy`.
    ///
    /// # Example
    ///
    /// ```rust, ignore
    /// use gtf2gff3::gtf::Attributes;
    /// use gtf2gff3::BareAttributePolicy;
    ///
    /// let attr = Attributes::parse("gene_id \"G1\";", BareAttributePolicy::Skip)?;
    /// assert_eq!(attr.get("gene_id"), Some("G1"));
    /// ```
    pub fn parse(
        line: &'a str,
        policy: BareAttributePolicy,
    ) -> Result<Attributes<'a>, ParseError> {
        let mut attributes = Attributes::default();
        let line = line.strip_suffix(';').unwrap_or(line);

        for segment in line.split(';').map(str::trim) {
            if segment.is_empty() {
                continue;
            }

            match segment.split_once(char::is_whitespace) {
                Some((key, value)) => {
                    attributes.insert(key, value.trim_start().trim_matches('"'));
                }
                None => match policy {
                    BareAttributePolicy::Skip => attributes.dropped.push(segment),
                    BareAttributePolicy::Keep => attributes.insert(segment, ""),
                    BareAttributePolicy::Fail => {
                        return Err(ParseError::BareAttribute(segment.to_string()))
                    }
                },
            }
        }

        Ok(attributes)
    }

    /// Inserts `key`, overwriting the value in place if the key already exists.
    pub fn insert(&mut self, key: &'a str, value: &'a str) {
        match self.index.get(key) {
            Some(&idx) => self.entries[idx].1 = value,
            None => {
                self.index.insert(key, self.entries.len());
                self.entries.push((key, value));
            }
        }
    }

    #[inline(always)]
    pub fn get(&self, key: &str) -> Option<&'a str> {
        self.index.get(key).map(|&idx| self.entries[idx].1)
    }

    #[inline(always)]
    pub fn contains_key(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over `(key, value)` pairs in mapping order.
    pub fn iter(&self) -> impl Iterator<Item = (&'a str, &'a str)> + '_ {
        self.entries.iter().copied()
    }

    /// Bare segments dropped under [`BareAttributePolicy::Skip`].
    pub fn dropped(&self) -> &[&'a str] {
        &self.dropped
    }

    /// Derives GFF3 `ID`/`Parent` from `gene_id` and `transcript_id`.
    ///
    /// `ID` takes the gene id; when a transcript id is also present, `Parent`
    /// takes the gene id and `ID` is overwritten with the transcript id.
    /// Nothing is derived without a `gene_id`.
    pub fn assign_identity(&mut self) {
        let Some(gene_id) = self.get(GENE_ID) else {
            return;
        };

        self.insert(ID, gene_id);
        if let Some(transcript_id) = self.get(TRANSCRIPT_ID) {
            self.insert(PARENT, gene_id);
            self.insert(ID, transcript_id);
        }
    }
}

/// Writes the mapping in GFF3 syntax: `key=value` pairs joined by `;`.
impl fmt::Display for Attributes<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, (key, value)) in self.entries.iter().enumerate() {
            if idx > 0 {
                f.write_str(";")?;
            }
            write!(f, "{key}={value}")?;
        }
        Ok(())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    // Record does not have exactly nine columns
    #[error("expected 9 tab-separated columns, found {0}")]
    ColumnCount(usize),

    // Attribute segment without whitespace
    #[error("attribute segment {0:?} has no key/value separator")]
    BareAttribute(String),
}
