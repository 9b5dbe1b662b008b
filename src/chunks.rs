use std::fs;
use std::path::Path;

use anyhow::{Context, Result, ensure};
use itertools::Itertools;

/// Splits the raw results log on `'}'` record boundaries and joins each run
/// of `per_chunk` segments with blank lines. The delimiter is dropped; the
/// chunks exist for eyeballing recent records, not for re-parsing.
pub fn split_records(input: &str, per_chunk: usize) -> Vec<String> {
    assert!(per_chunk > 0, "per_chunk must be at least 1");
    let segments = input.split('}');
    let chunks = segments.chunks(per_chunk);
    chunks
        .into_iter()
        .map(|mut chunk| chunk.join("\n\n"))
        .collect()
}

/// Recreates `out_dir` from scratch and writes `output{N}.dat` chunk files,
/// numbered from 1. Higher numbers hold more recent records. Returns the
/// number of files written.
pub fn write_chunks<P: AsRef<Path>, Q: AsRef<Path>>(
    input_path: P,
    out_dir: Q,
    per_chunk: usize,
) -> Result<usize> {
    ensure!(per_chunk > 0, "chunk size must be at least 1");
    let input_path = input_path.as_ref();
    let out_dir = out_dir.as_ref();

    let raw = fs::read_to_string(input_path)
        .with_context(|| format!("failed to read {}", input_path.display()))?;

    if out_dir.exists() {
        fs::remove_dir_all(out_dir)
            .with_context(|| format!("failed to clear {}", out_dir.display()))?;
    }
    fs::create_dir_all(out_dir)
        .with_context(|| format!("failed to create {}", out_dir.display()))?;

    let chunks = split_records(&raw, per_chunk);
    for (i, chunk) in chunks.iter().enumerate() {
        let path = out_dir.join(format!("output{}.dat", i + 1));
        fs::write(&path, chunk).with_context(|| format!("failed to write {}", path.display()))?;
    }
    Ok(chunks.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn splits_on_record_boundaries() {
        let chunks = split_records(r#"{"a":1},{"a":2},{"a":3}"#, 2);
        assert_eq!(chunks, vec!["{\"a\":1\n\n,{\"a\":2", ",{\"a\":3\n\n"]);
    }

    #[test]
    fn a_short_log_fits_in_one_chunk() {
        let chunks = split_records("{\"a\":1}", 200);
        assert_eq!(chunks.len(), 1);
    }

    #[test]
    fn writes_numbered_chunk_files() -> Result<()> {
        let dir = TempDir::new()?;
        let input = dir.path().join("metadata.json");
        fs::write(&input, r#"{"a":1},{"a":2},{"a":3}"#)?;
        let out_dir = dir.path().join("parsed");

        let count = write_chunks(&input, &out_dir, 2)?;
        assert_eq!(count, 2);
        assert!(out_dir.join("output1.dat").exists());
        assert!(out_dir.join("output2.dat").exists());
        Ok(())
    }

    #[test]
    fn reruns_recreate_the_output_directory() -> Result<()> {
        let dir = TempDir::new()?;
        let input = dir.path().join("metadata.json");
        fs::write(&input, r#"{"a":1},{"a":2},{"a":3}"#)?;
        let out_dir = dir.path().join("parsed");

        write_chunks(&input, &out_dir, 1)?;
        assert!(out_dir.join("output4.dat").exists());

        // A rerun with bigger chunks must not leave stale high-numbered files.
        write_chunks(&input, &out_dir, 200)?;
        assert!(out_dir.join("output1.dat").exists());
        assert!(!out_dir.join("output4.dat").exists());
        Ok(())
    }

    #[test]
    fn rejects_a_zero_chunk_size() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("metadata.json");
        fs::write(&input, "{}").unwrap();
        assert!(write_chunks(&input, dir.path().join("parsed"), 0).is_err());
    }
}
