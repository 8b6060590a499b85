use std::io::BufRead;
use std::path::Path;

use fxhash::FxHashSet;
use thiserror::Error;

use bednorm_core::utils::get_dynamic_reader;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Can't read reference catalog: {0}")]
    FileRead(String),

    #[error("Not a FASTA file, no sequence records found: {0}")]
    NotFasta(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

///
/// The set of canonical sequence names extracted from a reference FASTA.
///
/// Built once per run and shared read-only across worker threads. Names are
/// deduplicated and held sorted so the substring scan in
/// [normalize_chrom](crate::normalize::normalize_chrom) is deterministic.
///
#[derive(Clone, Debug)]
pub struct CanonicalNames {
    names: Vec<String>,
}

impl CanonicalNames {
    ///
    /// Extract the sequence names from a FASTA file (gzipped or plain).
    ///
    /// The name of a record is the text after `>` up to the first whitespace,
    /// taken verbatim. Duplicate headers collapse into one entry.
    ///
    /// # Arguments:
    /// - path: path to the reference FASTA on disk.
    pub fn from_fasta(path: &Path) -> Result<Self, CatalogError> {
        let reader = get_dynamic_reader(path)
            .map_err(|_| CatalogError::FileRead(path.display().to_string()))?;

        let mut names: FxHashSet<String> = FxHashSet::default();
        let mut in_records = false;

        for line in reader.lines() {
            let line = line?;

            if let Some(header) = line.strip_prefix('>') {
                in_records = true;
                if let Some(id) = header.split_whitespace().next() {
                    names.insert(id.to_string());
                }
            } else if !in_records && !line.trim().is_empty() {
                // sequence data before any record header
                return Err(CatalogError::NotFasta(path.display().to_string()));
            }
        }

        if names.is_empty() {
            return Err(CatalogError::NotFasta(path.display().to_string()));
        }

        Ok(Self::from_names(names))
    }

    ///
    /// Build a catalog from names already in hand. Mostly useful for tests
    /// and for callers that get their names from somewhere other than a
    /// FASTA file.
    ///
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: FxHashSet<String> = names.into_iter().map(|n| n.into()).collect();
        let mut names: Vec<String> = names.into_iter().collect();
        names.sort();

        CanonicalNames { names }
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.binary_search_by(|n| n.as_str().cmp(name)).is_ok()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.names.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::*;
    use std::io::Write as _;

    #[fixture]
    fn reference_fasta() -> &'static str {
        "tests/data/reference.fa"
    }

    #[rstest]
    fn test_extract_names_from_fasta(reference_fasta: &str) {
        let names = CanonicalNames::from_fasta(Path::new(reference_fasta)).unwrap();

        assert_eq!(names.len(), 6);
        assert!(names.contains("chr1"));
        assert!(names.contains("chr22"));
        assert!(names.contains("chrM"));
        assert!(names.contains("chrX"));
        assert!(names.contains("chrY"));
        assert!(names.contains("chrUn_GL000219v1"));
    }

    #[rstest]
    fn test_header_description_is_dropped() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, ">chr1 AC:CM000663.2 gi:568336023").unwrap();
        writeln!(file, "ACGTACGT").unwrap();

        let names = CanonicalNames::from_fasta(file.path()).unwrap();
        assert_eq!(names.iter().collect::<Vec<_>>(), vec!["chr1"]);
    }

    #[rstest]
    fn test_duplicate_headers_collapse() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, ">chr1\nACGT\n>chr1\nTTTT\n>chr2\nGGGG").unwrap();

        let names = CanonicalNames::from_fasta(file.path()).unwrap();
        assert_eq!(names.len(), 2);
    }

    #[rstest]
    fn test_gzipped_fasta() {
        use flate2::Compression;
        use flate2::write::GzEncoder;
        use std::fs::File;

        let tempdir = tempfile::tempdir().unwrap();
        let path = tempdir.path().join("reference.fa.gz");

        let mut encoder =
            GzEncoder::new(File::create(&path).unwrap(), Compression::default());
        encoder
            .write_all(b">chr1\nACGTACGT\n>chrM\nTTAACCGG\n")
            .unwrap();
        encoder.finish().unwrap();

        let names = CanonicalNames::from_fasta(&path).unwrap();
        assert_eq!(names.len(), 2);
        assert!(names.contains("chr1"));
        assert!(names.contains("chrM"));
    }

    #[rstest]
    fn test_missing_file() {
        let res = CanonicalNames::from_fasta(Path::new("no/such/reference.fa"));
        assert!(matches!(res, Err(CatalogError::FileRead(_))));
    }

    #[rstest]
    fn test_non_fasta_content() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "chr1\t100\t200").unwrap();

        let res = CanonicalNames::from_fasta(file.path());
        assert!(matches!(res, Err(CatalogError::NotFasta(_))));
    }

    #[rstest]
    fn test_empty_file() {
        let file = tempfile::NamedTempFile::new().unwrap();

        let res = CanonicalNames::from_fasta(file.path());
        assert!(matches!(res, Err(CatalogError::NotFasta(_))));
    }

    #[rstest]
    fn test_from_names_sorts_and_dedupes() {
        let names = CanonicalNames::from_names(["chr2", "chr1", "chr2"]);
        assert_eq!(names.iter().collect::<Vec<_>>(), vec!["chr1", "chr2"]);
    }
}
