use std::path::Path;

use anyhow::Result;
use clap::ArgMatches;

use bednorm::consts::*;
use bednorm::{CanonicalNames, normalize_bed_files};

pub fn run_normalize(matches: &ArgMatches) -> Result<()> {
    let fasta = matches
        .get_one::<String>("fasta")
        .expect("A path to a reference FASTA file is required.");

    let default_bed = DEFAULT_BED_DIR.to_string();
    let bed = matches.get_one::<String>("bed").unwrap_or(&default_bed);

    let default_out = DEFAULT_OUT.to_string();
    let output = matches.get_one::<String>("output").unwrap_or(&default_out);

    let names = CanonicalNames::from_fasta(Path::new(fasta))?;
    println!("Found {} sequence names in {}", names.len(), fasta);

    let summary = normalize_bed_files(Path::new(bed), &names, Path::new(output))?;

    for report in &summary.succeeded {
        for row in &report.unmatched {
            eprintln!(
                "Warning: {}: line {}: no canonical match for chromosome {:?}, kept as-is",
                report.input.display(),
                row.line,
                row.token
            );
        }
    }

    for (path, reason) in &summary.failed {
        eprintln!("Failed: {}: {}", path.display(), reason);
    }

    println!(
        "{} file(s) normalized, {} failed, {} row(s) written, {} row(s) unmatched",
        summary.n_succeeded(),
        summary.n_failed(),
        summary.rows_written(),
        summary.unmatched_rows()
    );

    Ok(())
}
