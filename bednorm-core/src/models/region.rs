use std::fmt::{self, Display};

///
/// Region struct, representation of one row in a BED interval file.
///
/// Columns beyond chr/start/end are carried verbatim in `rest`, tab-joined,
/// so they round-trip through load and write unchanged.
///
#[derive(Eq, PartialEq, Hash, Debug, Clone)]
pub struct Region {
    pub chr: String,
    pub start: u32,
    pub end: u32,

    pub rest: Option<String>,
}

impl Region {
    ///
    /// Get file string of Region
    ///
    pub fn as_string(&self) -> String {
        format!(
            "{}\t{}\t{}{}",
            self.chr,
            self.start,
            self.end,
            self.rest
                .as_deref()
                .map_or(String::new(), |s| format!("\t{}", s)),
        )
    }
}

impl Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::*;

    #[rstest]
    fn test_as_string_minimal() {
        let region = Region {
            chr: "chr1".to_string(),
            start: 100,
            end: 200,
            rest: None,
        };
        assert_eq!(region.as_string(), "chr1\t100\t200");
    }

    #[rstest]
    fn test_as_string_with_extra_columns() {
        let region = Region {
            chr: "chrX".to_string(),
            start: 0,
            end: 50,
            rest: Some("peak_1\t960\t+".to_string()),
        };
        assert_eq!(region.as_string(), "chrX\t0\t50\tpeak_1\t960\t+");
    }
}
