use std::collections::hash_map::Entry;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use fxhash::FxHashMap;
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;

use bednorm_core::models::RegionSet;
use bednorm_core::utils::remove_all_extensions;

use crate::catalog::CanonicalNames;
use crate::normalize::{ChromName, normalize_chrom};

/// One row whose chromosome token matched no canonical entry. The row is
/// written with the token unchanged; this record is what makes the condition
/// visible to the caller.
#[derive(Debug, Clone)]
pub struct UnmatchedRow {
    pub line: usize,
    pub token: String,
}

/// Result of one successfully processed BED file.
#[derive(Debug, Clone)]
pub struct FileReport {
    pub input: PathBuf,
    pub output: PathBuf,
    pub rows: usize,
    pub unmatched: Vec<UnmatchedRow>,
}

/// Aggregated outcome of a batch run. Per-file failures never abort the
/// batch; they end up here next to the reports of the files that made it.
#[derive(Debug, Default)]
pub struct BatchSummary {
    pub succeeded: Vec<FileReport>,
    pub failed: Vec<(PathBuf, String)>,
}

impl BatchSummary {
    pub fn n_succeeded(&self) -> usize {
        self.succeeded.len()
    }

    pub fn n_failed(&self) -> usize {
        self.failed.len()
    }

    pub fn rows_written(&self) -> usize {
        self.succeeded.iter().map(|r| r.rows).sum()
    }

    pub fn unmatched_rows(&self) -> usize {
        self.succeeded.iter().map(|r| r.unmatched.len()).sum()
    }
}

///
/// Rewrite the chromosome column of every BED file under `bed_dir` to match
/// the given canonical names, writing one `<stem>.modified.<ext>` file per
/// input into `output`.
///
/// Files are processed independently on the rayon worker pool (one worker
/// per available core); a file that fails to load, normalize, or write is
/// reported in the summary without disturbing its siblings. Output for a
/// file is rendered only after every one of its rows normalized, so a
/// failing file leaves no partial output behind.
///
/// # Arguments:
/// - bed_dir: directory of BED files, walked recursively
/// - names: canonical sequence names, shared read-only by all tasks
/// - output: path to the output folder where new files should go
///
pub fn normalize_bed_files(
    bed_dir: &Path,
    names: &CanonicalNames,
    output: &Path,
) -> Result<BatchSummary> {
    let files = collect_bed_files(bed_dir)?;

    fs::create_dir_all(output).with_context(|| {
        format!(
            "There was an error creating the output directory: {:?}",
            output
        )
    })?;

    let mut summary = BatchSummary::default();

    // Inputs with the same basename in different subdirectories would land
    // on the same output path; the first claimant (discovery order) wins and
    // the rest fail instead of clobbering each other mid-run.
    let mut claimed: FxHashMap<PathBuf, PathBuf> = FxHashMap::default();
    let mut tasks: Vec<PathBuf> = Vec::with_capacity(files.len());
    for file in files {
        let out_path = output_path_for(&file, output);
        match claimed.entry(out_path) {
            Entry::Vacant(entry) => {
                entry.insert(file.clone());
                tasks.push(file);
            }
            Entry::Occupied(entry) => {
                summary.failed.push((
                    file,
                    format!(
                        "Output path {:?} already claimed by input {:?}",
                        entry.key(),
                        entry.get()
                    ),
                ));
            }
        }
    }

    let pb = ProgressBar::new(tasks.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} files ({eta})")?
            .progress_chars("##-"),
    );

    let outcomes: Vec<(PathBuf, Result<FileReport>)> = tasks
        .par_iter()
        .map(|file| {
            let res = process_file(file, names, output);
            pb.inc(1);
            (file.clone(), res)
        })
        .collect();

    pb.finish_and_clear();

    for (path, res) in outcomes {
        match res {
            Ok(report) => summary.succeeded.push(report),
            Err(e) => summary.failed.push((path, format!("{e:#}"))),
        }
    }

    Ok(summary)
}

///
/// Recursively collect the BED files under a directory.
///
/// Every regular file counts regardless of extension, except `.gitkeep`
/// placeholders. The result is sorted so runs are reproducible.
///
pub fn collect_bed_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    walk_dir(dir, &mut files)?;
    files.sort();
    Ok(files)
}

fn walk_dir(dir: &Path, files: &mut Vec<PathBuf>) -> Result<()> {
    let entries = fs::read_dir(dir).with_context(|| {
        format!(
            "There was an error reading the BED file directory: {:?}",
            dir
        )
    })?;

    for entry in entries {
        let entry = entry?;
        let path = entry.path();

        if path.is_dir() {
            walk_dir(&path, files)?;
        } else if path.file_name().and_then(|n| n.to_str()) != Some(".gitkeep") {
            files.push(path);
        }
    }

    Ok(())
}

///
/// Derive the output path for one input file:
/// `regions.bed` -> `<output>/regions.modified.bed`,
/// `regions.bed.gz` -> `<output>/regions.modified.bed.gz`,
/// extension-less inputs default to `.bed`.
///
pub fn output_path_for(input: &Path, output: &Path) -> PathBuf {
    let stem = remove_all_extensions(input);

    let is_gz = input.extension().and_then(|e| e.to_str()) == Some("gz");
    let ext = if is_gz {
        let inner = input.with_extension("");
        let inner_ext = inner
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("bed");
        format!("{inner_ext}.gz")
    } else {
        input
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("bed")
            .to_string()
    };

    output.join(format!("{stem}.modified.{ext}"))
}

fn process_file(bed_path: &Path, names: &CanonicalNames, output: &Path) -> Result<FileReport> {
    let mut region_set = RegionSet::try_from(bed_path)
        .with_context(|| format!("Failed to load BED file: {:?}", bed_path))?;

    let mut unmatched: Vec<UnmatchedRow> = Vec::new();

    for (index, region) in region_set.regions.iter_mut().enumerate() {
        match normalize_chrom(&region.chr, names) {
            ChromName::Matched(name) => region.chr = name,
            ChromName::Unmatched(token) => {
                // the row keeps its original token
                unmatched.push(UnmatchedRow {
                    line: index + 1,
                    token,
                });
            }
        }
    }

    let out_path = output_path_for(bed_path, output);

    let write_result = if out_path.extension().and_then(|e| e.to_str()) == Some("gz") {
        region_set.write_bed_gz(&out_path)
    } else {
        region_set.write_bed(&out_path)
    };
    write_result.with_context(|| format!("Failed to write output file: {:?}", out_path))?;

    Ok(FileReport {
        input: bed_path.to_owned(),
        output: out_path,
        rows: region_set.len(),
        unmatched,
    })
}
