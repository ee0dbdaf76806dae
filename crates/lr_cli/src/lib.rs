//! League table CLI plumbing.
//!
//! Resolves the input file, streams its lines through the ranking engine,
//! and renders the outcome: standings rows (or one JSON document) on
//! success, a bad-line report on failure. The engine itself stays free of
//! any I/O.

use std::fs::File;
use std::io::{BufRead, Write};
use std::path::Path;

use anyhow::{bail, Context, Result};
use lr_core::{BadLine, RankedEntry, RankingEngine};

/// Check that `path` points at a readable regular file and open it.
///
/// Missing paths, directories, and unreadable files each get their own
/// message; argument-count validation is left to the argument parser.
pub fn resolve_input_file(path: &Path) -> Result<File> {
    if !path.exists() {
        bail!("no file exists at the given path: {}", path.display());
    }
    if !path.is_file() {
        bail!(
            "the given path does not resolve to a file: {} (possibly a directory?)",
            path.display()
        );
    }
    File::open(path).with_context(|| format!("cannot read the supplied file: {}", path.display()))
}

/// Stream `reader`'s lines through `engine` and render the outcome.
///
/// Lines are consumed in a single pass. Standings go to `out`; the
/// failure report goes to `err`, preserving input order. Returns whether
/// a ranking was produced, so the caller can pick an exit status.
pub fn print_rankings<R, W, E>(
    reader: R,
    engine: &RankingEngine,
    out: &mut W,
    err: &mut E,
    json: bool,
) -> Result<bool>
where
    R: BufRead,
    W: Write,
    E: Write,
{
    let mut read_error = None;
    let rankings = engine.calculate_rankings(reader.lines().map_while(|line| match line {
        Ok(text) => Some(text),
        Err(io_err) => {
            read_error = Some(io_err);
            None
        }
    }));
    if let Some(io_err) = read_error {
        return Err(io_err).context("failed while reading the input file");
    }

    match rankings {
        Ok(rankings) => {
            log::debug!("ranked {} teams", rankings.len());
            render_rankings(&rankings, out, json)?;
            Ok(true)
        }
        Err(bad_lines) => {
            log::debug!("{} lines could not be parsed", bad_lines.len());
            render_bad_lines(&bad_lines, err)?;
            Ok(false)
        }
    }
}

fn render_rankings<W: Write>(rankings: &[RankedEntry], out: &mut W, json: bool) -> Result<()> {
    if json {
        let doc =
            serde_json::to_string_pretty(rankings).context("failed to serialize standings")?;
        writeln!(out, "{}", doc)?;
    } else {
        for entry in rankings {
            writeln!(out, "{}", entry)?;
        }
    }
    Ok(())
}

fn render_bad_lines<E: Write>(bad_lines: &[BadLine], err: &mut E) -> Result<()> {
    writeln!(
        err,
        "Failed to determine rankings; there were problems with the following lines:"
    )?;
    for bad in bad_lines {
        writeln!(err, "{}", bad)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{BufReader, Write as _};
    use tempfile::NamedTempFile;

    const SAMPLE: &str = "\
Lions 3, Snakes 3
Tarantulas 1, FC Awesome 1
Lions 1, FC Awesome 1
Tarantulas 3, Snakes 1
Lions 4, Grouches 0
";

    fn run(input: &str, json: bool) -> Result<(bool, String, String)> {
        let engine = RankingEngine::standard();
        let mut out = Vec::new();
        let mut err = Vec::new();
        let ranked = print_rankings(
            BufReader::new(input.as_bytes()),
            &engine,
            &mut out,
            &mut err,
            json,
        )?;
        Ok((ranked, String::from_utf8(out)?, String::from_utf8(err)?))
    }

    #[test]
    fn test_prints_sample_standings() -> Result<()> {
        let (ranked, out, err) = run(SAMPLE, false)?;

        assert!(ranked);
        assert_eq!(
            out,
            "1. Tarantulas, 6 pts\n\
             2. Lions, 5 pts\n\
             3. FC Awesome, 1 pt\n\
             3. Snakes, 1 pt\n\
             5. Grouches, 0 pts\n"
        );
        assert!(err.is_empty());
        Ok(())
    }

    #[test]
    fn test_json_output_round_trips() -> Result<()> {
        let (ranked, out, _) = run(SAMPLE, true)?;

        assert!(ranked);
        let parsed: serde_json::Value = serde_json::from_str(&out)?;
        let entries = parsed.as_array().expect("JSON output should be an array");
        assert_eq!(entries.len(), 5);
        assert_eq!(entries[0]["rank"], 1);
        assert_eq!(entries[0]["team"]["name"], "Tarantulas");
        assert_eq!(entries[0]["team"]["points"], 6);
        Ok(())
    }

    #[test]
    fn test_bad_lines_render_as_report() -> Result<()> {
        let input = "Lions 3, Snakes 3\nTeam1, Team2 5\nLions x, Snakes 3\n";
        let (ranked, out, err) = run(input, false)?;

        assert!(!ranked);
        assert!(out.is_empty());
        assert_eq!(
            err,
            "Failed to determine rankings; there were problems with the following lines:\n\
             2:  Team1, Team2 5\n\
             3:  Lions x, Snakes 3\n"
        );
        Ok(())
    }

    #[test]
    fn test_empty_input_prints_nothing() -> Result<()> {
        let (ranked, out, err) = run("", false)?;
        assert!(ranked);
        assert!(out.is_empty());
        assert!(err.is_empty());
        Ok(())
    }

    #[test]
    fn test_resolve_input_file_reads_real_file() -> Result<()> {
        let mut file = NamedTempFile::new()?;
        file.write_all(SAMPLE.as_bytes())?;

        let opened = resolve_input_file(file.path())?;
        let engine = RankingEngine::standard();
        let mut out = Vec::new();
        let mut err = Vec::new();
        let ranked = print_rankings(BufReader::new(opened), &engine, &mut out, &mut err, false)?;

        assert!(ranked);
        assert!(String::from_utf8(out)?.starts_with("1. Tarantulas, 6 pts\n"));
        Ok(())
    }

    #[test]
    fn test_resolve_input_file_rejects_missing_path() {
        let error = resolve_input_file(Path::new("/definitely/not/here.txt")).unwrap_err();
        assert!(error.to_string().contains("no file exists"));
    }

    #[test]
    fn test_resolve_input_file_rejects_directory() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let error = resolve_input_file(dir.path()).unwrap_err();
        assert!(error.to_string().contains("does not resolve to a file"));
        Ok(())
    }
}
