use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;
use thiserror::Error;

/// The `(problemId, seed)` pair a result file belongs to. Ordered so that
/// winners come out in ascending problem/seed order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SolutionKey {
    pub problem_id: u32,
    pub seed: i64,
}

/// One result file, ranked by the score encoded in its name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultFile {
    pub key: SolutionKey,
    pub score: i64,
    pub path: PathBuf,
}

#[derive(Debug, Error)]
pub enum SelectError {
    #[error("file name does not match <problemId>-<seed>-<score>.json: {name:?}")]
    FilenamePattern { name: String },
    #[error("malformed JSON in {}: {reason}", .path.display())]
    MalformedJson { path: PathBuf, reason: String },
    #[error("failed to read {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Extracts the `(problemId, seed)` key and score from a result file name.
///
/// The stem must be exactly three dash-delimited integer fields; anything
/// else in the scan directory is a hard error rather than a skip, so a stray
/// file cannot silently shrink the submission.
pub fn parse_result_filename(name: &str) -> Result<(SolutionKey, i64), SelectError> {
    let err = || SelectError::FilenamePattern {
        name: name.to_string(),
    };
    let stem = name.strip_suffix(".json").ok_or_else(err)?;
    let mut fields = stem.split('-');
    let (Some(problem), Some(seed), Some(score), None) =
        (fields.next(), fields.next(), fields.next(), fields.next())
    else {
        return Err(err());
    };
    let problem_id: u32 = problem.parse().map_err(|_| err())?;
    let seed: i64 = seed.parse().map_err(|_| err())?;
    let score: i64 = score.parse().map_err(|_| err())?;
    Ok((SolutionKey { problem_id, seed }, score))
}

/// Lists `dir` and parses every entry into a `ResultFile`.
///
/// Entries are visited in ascending file-name order; the first name that
/// does not match the pattern aborts the scan.
pub fn list_candidates<P: AsRef<Path>>(dir: P) -> Result<Vec<ResultFile>, SelectError> {
    let dir = dir.as_ref();
    let io = |source: std::io::Error| SelectError::Io {
        path: dir.to_path_buf(),
        source,
    };
    let mut names = Vec::new();
    for entry in fs::read_dir(dir).map_err(&io)? {
        let entry = entry.map_err(&io)?;
        names.push(entry.file_name().to_string_lossy().into_owned());
    }
    names.sort();

    let mut candidates = Vec::with_capacity(names.len());
    for name in names {
        let (key, score) = parse_result_filename(&name)?;
        candidates.push(ResultFile {
            key,
            score,
            path: dir.join(name),
        });
    }
    Ok(candidates)
}

/// Partitions candidates by `(problemId, seed)`. Within a group, members
/// keep their listing order; across groups, keys ascend.
pub fn group_by_problem_and_seed(
    candidates: Vec<ResultFile>,
) -> BTreeMap<SolutionKey, Vec<ResultFile>> {
    let mut groups: BTreeMap<SolutionKey, Vec<ResultFile>> = BTreeMap::new();
    for candidate in candidates {
        groups.entry(candidate.key).or_default().push(candidate);
    }
    groups
}

/// The highest-scoring member of a group. Equal scores resolve to the last
/// member in ascending-score order; equal scores within one group imply an
/// identical file name, so the choice is deterministic either way.
pub fn select_winner(group: &[ResultFile]) -> &ResultFile {
    group
        .iter()
        .max_by_key(|f| f.score)
        .expect("groups hold at least one member")
}

/// The whole selection: list, group, pick one winner per key.
pub fn select_winners<P: AsRef<Path>>(dir: P) -> Result<Vec<ResultFile>, SelectError> {
    let groups = group_by_problem_and_seed(list_candidates(dir)?);
    Ok(groups
        .into_values()
        .map(|group| select_winner(&group).clone())
        .collect())
}

/// Reads each winner and flattens the contents into one payload: a top-level
/// array contributes its elements, a top-level object itself. Solution
/// objects are opaque to us and pass through untouched.
pub fn load_and_merge(winners: &[ResultFile]) -> Result<Vec<Value>, SelectError> {
    let mut payload = Vec::new();
    for winner in winners {
        let raw = fs::read_to_string(&winner.path).map_err(|source| SelectError::Io {
            path: winner.path.clone(),
            source,
        })?;
        let value: Value = serde_json::from_str(&raw).map_err(|e| SelectError::MalformedJson {
            path: winner.path.clone(),
            reason: e.to_string(),
        })?;
        match value {
            Value::Array(items) => payload.extend(items),
            object @ Value::Object(_) => payload.push(object),
            other => {
                return Err(SelectError::MalformedJson {
                    path: winner.path.clone(),
                    reason: format!(
                        "expected a solution object or an array of them, got {other}"
                    ),
                });
            }
        }
    }
    Ok(payload)
}
