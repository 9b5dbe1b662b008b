use std::path::Path;

use anyhow::{Context, Result};

/// Loads phrases of power, one per line. Blank lines are skipped so a
/// trailing newline does not turn into an empty `-p` argument.
pub fn load_phrases<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    let path = path.as_ref();
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read phrase file: {}", path.display()))?;
    Ok(raw
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(str::to_string)
        .collect())
}

/// `-p <phrase>` pairs in phrase order, the flag shape the solver expects.
pub fn phrase_args(phrases: &[String]) -> Vec<String> {
    let mut args = Vec::with_capacity(phrases.len() * 2);
    for phrase in phrases {
        args.push("-p".to_string());
        args.push(phrase.clone());
    }
    args
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loads_one_phrase_per_line() -> Result<()> {
        let dir = tempfile::TempDir::new()?;
        let path = dir.path().join("pop");
        std::fs::write(&path, "ei!\nia! ia!\n\nr'lyeh\n")?;
        let phrases = load_phrases(&path)?;
        assert_eq!(phrases, vec!["ei!", "ia! ia!", "r'lyeh"]);
        Ok(())
    }

    #[test]
    fn builds_interleaved_flag_pairs() {
        let phrases = vec!["ei!".to_string(), "r'lyeh".to_string()];
        assert_eq!(phrase_args(&phrases), vec!["-p", "ei!", "-p", "r'lyeh"]);
    }

    #[test]
    fn no_phrases_means_no_args() {
        assert!(phrase_args(&[]).is_empty());
    }
}
