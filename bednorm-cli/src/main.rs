mod normalize;

use anyhow::Result;
use clap::Command;

pub mod consts {
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");
    pub const PKG_NAME: &str = "bednorm";
    pub const BIN_NAME: &str = "bednorm";
}

fn build_parser() -> Command {
    Command::new(consts::BIN_NAME)
        .bin_name(consts::BIN_NAME)
        .version(consts::VERSION)
        .author("Databio")
        .about("Rewrite the chromosome column of BED files so the names match the sequence identifiers of a reference FASTA.")
        .subcommand_required(true)
        .subcommand(normalize::cli::create_normalize_cli())
}

fn main() -> Result<()> {
    let app = build_parser();
    let matches = app.get_matches();

    match matches.subcommand() {
        //
        // CHROMOSOME NAME NORMALIZATION
        //
        Some((normalize::cli::NORMALIZE_CMD, matches)) => {
            normalize::handlers::run_normalize(matches)?;
        }

        _ => unreachable!("Subcommand not found"),
    };

    Ok(())
}
