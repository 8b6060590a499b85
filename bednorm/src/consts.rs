pub const NORMALIZE_CMD: &str = "normalize";
pub const DEFAULT_BED_DIR: &str = "INPUT/BED";
pub const DEFAULT_OUT: &str = "OUTPUT";
