use gtf2gff3::detect::{detect_compression, detect_format, Compression, Format};
use std::path::Path;

/// Ensures plain GTF input is detected correctly.
#[test]
fn detect_plain_gtf() {
    let path = Path::new("sample.gtf");
    assert_eq!(detect_format(path), Some(Format::Gtf));
    assert_eq!(detect_compression(path), Compression::None);
    assert!(!detect_compression(path).is_compressed());
}

/// Ensures GFF3 with gzip compression is detected correctly.
#[test]
fn detect_gff3_gz() {
    let path = Path::new("sample.gff3.gz");
    assert_eq!(detect_format(path), Some(Format::Gff3));
    assert_eq!(detect_compression(path), Compression::Gzip);
    assert!(detect_compression(path).is_compressed());
}

/// Extensions are matched case-insensitively.
#[test]
fn detect_uppercase() {
    let path = Path::new("SAMPLE.GTF.GZ");
    assert_eq!(detect_format(path), Some(Format::Gtf));
    assert_eq!(detect_compression(path), Compression::Gzip);
}

/// Unknown extensions are plain text of unknown format.
#[test]
fn detect_unknown_is_plain() {
    for name in ["sample.txt", "sample.out", "sample"] {
        let path = Path::new(name);
        assert_eq!(detect_format(path), None);
        assert_eq!(detect_compression(path), Compression::None);
    }
}

/// Gzip without an inner extension is still compressed.
#[test]
fn detect_bare_gzip() {
    let path = Path::new("sample.gz");
    assert_eq!(detect_format(path), None);
    assert_eq!(detect_compression(path), Compression::Gzip);
}
