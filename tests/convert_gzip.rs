use flate2::read::MultiGzDecoder;
use flate2::write::GzEncoder;
use flate2::Compression as GzCompression;
use gtf2gff3::convert;
use indoc::indoc;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

/// Writes gz-compressed contents to a file and returns its path.
fn write_gzip_file(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let mut encoder = GzEncoder::new(Vec::new(), GzCompression::default());
    encoder.write_all(contents.as_bytes()).unwrap();
    let gz = encoder.finish().unwrap();

    let path = dir.join(name);
    std::fs::write(&path, gz).unwrap();
    path
}

/// Reads a gz-compressed file into a string.
fn read_gzip_file(path: &Path) -> String {
    let mut decoder = MultiGzDecoder::new(std::fs::File::open(path).unwrap());
    let mut contents = String::new();
    decoder.read_to_string(&mut contents).unwrap();
    contents
}

const GTF: &str = indoc! {"
    chr1\tsrc\ttranscript\t100\t200\t.\t+\t.\tgene_id \"g1\"; transcript_id \"tx1\";
    chr1\tsrc\texon\t100\t150\t.\t+\t.\tgene_id \"g1\"; transcript_id \"tx1\"; exon_number \"1\";
"};

/// Converts a gzipped GTF into a plain GFF3.
#[test]
fn convert_gzipped_gtf() {
    let dir = tempfile::tempdir().unwrap();
    let input_path = write_gzip_file(dir.path(), "input.gtf.gz", GTF);
    let output_path = dir.path().join("output.gff3");

    let stats = convert(&input_path, &output_path).unwrap();
    assert_eq!(stats.records, 2);

    let output = std::fs::read_to_string(&output_path).unwrap();
    let line = output.lines().nth(1).unwrap();
    let fields = line.split('\t').collect::<Vec<_>>();
    assert_eq!(fields[0], "chr1");
    assert_eq!(fields[2], "transcript");
    assert_eq!(fields[8], "gene_id=g1;transcript_id=tx1;ID=tx1;Parent=g1");
}

/// Writes gzip output when the output path ends in .gz.
#[test]
fn convert_to_gzipped_gff3() {
    let dir = tempfile::tempdir().unwrap();
    let input_path = dir.path().join("input.gtf");
    std::fs::write(&input_path, GTF).unwrap();
    let output_path = dir.path().join("output.gff3.gz");

    convert(&input_path, &output_path).unwrap();

    let output = read_gzip_file(&output_path);
    assert!(output.starts_with("##gff-version 3\n"));
    assert_eq!(output.lines().count(), 3);
}
