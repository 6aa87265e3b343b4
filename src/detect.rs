use std::path::{Path, PathBuf};

/// Annotation formats recognized by extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Gtf,
    Gff3,
}

/// Supported compression formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Compression {
    None,
    Gzip,
}

impl Compression {
    /// Returns true when the file is compressed.
    pub fn is_compressed(self) -> bool {
        !matches!(self, Compression::None)
    }
}

/// Detects compression from the last extension; anything other than
/// `.gz`/`.gzip` is plain text. Matching is case-insensitive.
///
/// # Example
///
/// ```rust, ignore
/// use gtf2gff3::detect::{detect_compression, Compression};
/// use std::path::Path;
///
/// assert_eq!(detect_compression(Path::new("file.gtf.gz")), Compression::Gzip);
/// assert_eq!(detect_compression(Path::new("file.txt")), Compression::None);
/// ```
pub fn detect_compression(path: &Path) -> Compression {
    extension_lowercase(path)
        .and_then(|ext| compression_from_extension(&ext))
        .unwrap_or(Compression::None)
}

/// Detects the annotation format from the extension, looking through a
/// compression suffix (`.gtf.gz` -> GTF). Returns `None` for unknown or
/// missing extensions.
pub fn detect_format(path: &Path) -> Option<Format> {
    let ext = extension_lowercase(path)?;
    if compression_from_extension(&ext).is_some() {
        return format_from_extension(&nested_extension(path)?);
    }
    format_from_extension(&ext)
}

fn extension_lowercase(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase())
}

fn format_from_extension(ext: &str) -> Option<Format> {
    match ext {
        "gtf" => Some(Format::Gtf),
        "gff" | "gff3" => Some(Format::Gff3),
        _ => None,
    }
}

fn compression_from_extension(ext: &str) -> Option<Compression> {
    match ext {
        "gz" | "gzip" => Some(Compression::Gzip),
        _ => None,
    }
}

/// Returns the inner extension for compressed files (`.gtf.gz` -> `gtf`).
fn nested_extension(path: &Path) -> Option<String> {
    let stem = path.file_stem()?.to_str()?;
    extension_lowercase(&PathBuf::from(stem))
}
