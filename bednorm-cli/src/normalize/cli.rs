use clap::{Command, arg};

pub use bednorm::consts::*;

pub fn create_normalize_cli() -> Command {
    Command::new(NORMALIZE_CMD)
        .about("Rewrite chromosome names in BED files to match a reference FASTA.")
        .arg(arg!(-f --fasta <fasta> "Path to the reference FASTA file (plain or gzipped)"))
        .arg(arg!(-b --bed [bed] "Directory of BED files to normalize"))
        .arg(arg!(-o --output [output] "Directory where the rewritten BED files go"))
}
