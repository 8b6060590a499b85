use std::fs::File;
use std::io::{BufRead, BufWriter, Write};
use std::path::{Path, PathBuf};

use flate2::Compression;
use flate2::write::GzEncoder;

use crate::errors::RegionSetError;
use crate::models::Region;
use crate::utils::get_dynamic_reader;

///
/// RegionSet struct, the in-memory representation of one BED interval file.
///
/// Row order is preserved exactly as read; nothing is sorted or deduplicated.
///
#[derive(Clone, Debug)]
pub struct RegionSet {
    pub regions: Vec<Region>,
    pub path: Option<PathBuf>,
}

impl TryFrom<&Path> for RegionSet {
    type Error = RegionSetError;

    ///
    /// Create a new [RegionSet] from a bed file on disk.
    ///
    /// # Arguments:
    /// - value: path to bed file on disk.
    fn try_from(value: &Path) -> Result<Self, RegionSetError> {
        let reader = get_dynamic_reader(value)
            .map_err(|_| RegionSetError::FileRead(value.display().to_string()))?;

        let mut new_regions: Vec<Region> = Vec::new();

        for line in reader.lines() {
            let string_line = line?;

            if string_line.is_empty() {
                continue;
            }

            let parts: Vec<&str> = string_line.split('\t').collect();

            if parts.len() < 3 {
                return Err(RegionSetError::RegionParse(format!(
                    "Expected at least 3 tab-separated columns, found {}: {:?}",
                    parts.len(),
                    string_line
                )));
            }

            let start = parts[1].parse().map_err(|_| {
                RegionSetError::RegionParse(format!(
                    "Error in parsing start position: {:?}",
                    parts
                ))
            })?;

            let end = parts[2].parse().map_err(|_| {
                RegionSetError::RegionParse(format!("Error in parsing end position: {:?}", parts))
            })?;

            new_regions.push(Region {
                chr: parts[0].to_owned(),
                start,
                end,
                rest: Some(parts[3..].join("\t")).filter(|s| !s.is_empty()),
            });
        }

        if new_regions.is_empty() {
            return Err(RegionSetError::EmptyRegionSet(
                value.display().to_string(),
            ));
        }

        Ok(RegionSet {
            regions: new_regions,
            path: Some(value.to_owned()),
        })
    }
}

impl TryFrom<&str> for RegionSet {
    type Error = RegionSetError;

    fn try_from(value: &str) -> Result<Self, RegionSetError> {
        RegionSet::try_from(Path::new(value))
    }
}

impl TryFrom<PathBuf> for RegionSet {
    type Error = RegionSetError;

    fn try_from(value: PathBuf) -> Result<Self, RegionSetError> {
        RegionSet::try_from(value.as_path())
    }
}

impl RegionSet {
    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Region> {
        self.regions.iter()
    }

    ///
    /// Write regions to disk as a bed file, one row per region, no header.
    ///
    /// # Arguments
    /// - path: the path to the file to dump to
    pub fn write_bed<T: AsRef<Path>>(&self, path: T) -> std::io::Result<()> {
        let path = path.as_ref();

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let mut writer = BufWriter::new(File::create(path)?);

        for region in &self.regions {
            writeln!(writer, "{}", region.as_string())?;
        }
        writer.flush()?;
        Ok(())
    }

    ///
    /// Write regions to disk as a bed.gz file.
    ///
    /// # Arguments
    /// - path: the path to the file to dump to
    pub fn write_bed_gz<T: AsRef<Path>>(&self, path: T) -> std::io::Result<()> {
        let path = path.as_ref();

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let file = File::create(path)?;
        let mut encoder = GzEncoder::new(BufWriter::new(file), Compression::default());

        for region in &self.regions {
            writeln!(encoder, "{}", region.as_string())?;
        }

        encoder.finish()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::*;
    use std::io::Write as _;

    fn write_temp_bed(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new()
            .suffix(".bed")
            .tempfile()
            .unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[rstest]
    fn test_load_preserves_order_and_columns() {
        let file = write_temp_bed("1\t100\t200\tpeak_b\n22\t5\t10\nX\t0\t9\tpeak_a\t+\n");
        let rs = RegionSet::try_from(file.path()).unwrap();

        assert_eq!(rs.len(), 3);
        assert_eq!(rs.regions[0].chr, "1");
        assert_eq!(rs.regions[0].rest.as_deref(), Some("peak_b"));
        assert_eq!(rs.regions[1].rest, None);
        assert_eq!(rs.regions[2].chr, "X");
        assert_eq!(rs.regions[2].rest.as_deref(), Some("peak_a\t+"));
    }

    #[rstest]
    fn test_load_rejects_short_rows() {
        let file = write_temp_bed("chr1\t100\n");
        let res = RegionSet::try_from(file.path());
        assert!(matches!(res, Err(RegionSetError::RegionParse(_))));
    }

    #[rstest]
    fn test_load_rejects_non_integer_coordinates() {
        let file = write_temp_bed("chr1\tstart\tend\n");
        let res = RegionSet::try_from(file.path());
        assert!(matches!(res, Err(RegionSetError::RegionParse(_))));
    }

    #[rstest]
    fn test_load_rejects_empty_file() {
        let file = write_temp_bed("");
        let res = RegionSet::try_from(file.path());
        assert!(matches!(res, Err(RegionSetError::EmptyRegionSet(_))));
    }

    #[rstest]
    fn test_load_missing_file() {
        let res = RegionSet::try_from(Path::new("no/such/file.bed"));
        assert!(matches!(res, Err(RegionSetError::FileRead(_))));
    }

    #[rstest]
    fn test_write_round_trip() {
        let file = write_temp_bed("chr1\t100\t200\tname\t0\t+\nchr2\t5\t10\n");
        let rs = RegionSet::try_from(file.path()).unwrap();

        let tempdir = tempfile::tempdir().unwrap();
        let out_path = tempdir.path().join("out.bed");
        rs.write_bed(&out_path).unwrap();

        let reloaded = RegionSet::try_from(out_path.as_path()).unwrap();
        assert_eq!(reloaded.regions, rs.regions);
    }

    #[rstest]
    fn test_write_bed_gz_round_trip() {
        let file = write_temp_bed("chr1\t100\t200\tname\t0\t+\nchr2\t5\t10\n");
        let rs = RegionSet::try_from(file.path()).unwrap();

        let tempdir = tempfile::tempdir().unwrap();
        let out_path = tempdir.path().join("out.bed.gz");
        rs.write_bed_gz(&out_path).unwrap();

        // reload goes through the gzip branch of get_dynamic_reader
        let reloaded = RegionSet::try_from(out_path.as_path()).unwrap();
        assert_eq!(reloaded.regions, rs.regions);
    }
}
