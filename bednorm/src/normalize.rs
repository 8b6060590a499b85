use crate::catalog::CanonicalNames;

///
/// The outcome of normalizing one chromosome token.
///
/// A token that matches no rewrite rule and no canonical entry is not an
/// error: it comes back tagged [ChromName::Unmatched] with the original
/// text, and the caller decides what to do with the row.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChromName {
    Matched(String),
    Unmatched(String),
}

impl ChromName {
    pub fn as_str(&self) -> &str {
        match self {
            ChromName::Matched(name) => name,
            ChromName::Unmatched(token) => token,
        }
    }

    pub fn into_string(self) -> String {
        match self {
            ChromName::Matched(name) => name,
            ChromName::Unmatched(token) => token,
        }
    }

    pub fn is_unmatched(&self) -> bool {
        matches!(self, ChromName::Unmatched(_))
    }
}

///
/// Map one raw chromosome token to the naming convention of the reference.
///
/// Rules, first match wins:
/// 1. all-digit tokens get a `chr` prefix (`22` -> `chr22`)
/// 2. `MT` -> `chrM`
/// 3. `X`/`Y` get a `chr` prefix
/// 4. anything else is treated as a versioned contig name: dots become `v`,
///    an underscore is prepended, and the canonical set is scanned for an
///    entry containing that probe (`GL000219.1` -> `_GL000219v1` ->
///    `chrUn_GL000219v1`). When several entries contain the probe the
///    shortest one wins, ties broken lexicographically. No containing entry
///    means [ChromName::Unmatched].
///
/// Pure function of its inputs; the canonical set is scanned in sorted
/// order, so the result is deterministic.
///
pub fn normalize_chrom(token: &str, names: &CanonicalNames) -> ChromName {
    if token.is_empty() {
        return ChromName::Unmatched(String::new());
    }

    if token.bytes().all(|b| b.is_ascii_digit()) {
        return ChromName::Matched(format!("chr{token}"));
    }

    if token == "MT" {
        return ChromName::Matched("chrM".to_string());
    }

    if token == "X" || token == "Y" {
        return ChromName::Matched(format!("chr{token}"));
    }

    let probe = format!("_{}", token.replace('.', "v"));

    let candidate = names
        .iter()
        .filter(|name| name.contains(&probe))
        .min_by_key(|name| (name.len(), *name));

    match candidate {
        Some(name) => ChromName::Matched(name.clone()),
        None => ChromName::Unmatched(token.to_string()),
    }
}
