use std::{
    fs::File,
    io::{self, BufReader, BufWriter, StdoutLock, Write},
    path::{Path, PathBuf},
};

use anyhow::Context;
use othello_evaluator::weights::FactorWeights;
use serde::Serialize;

/// Destination of a JSON report: stdout unless a path is given.
#[derive(Debug)]
pub enum Output {
    Stdout(StdoutLock<'static>),
    File {
        writer: BufWriter<File>,
        path: PathBuf,
    },
}

impl Output {
    /// Writes `value` as pretty JSON followed by a newline.
    pub fn save_json<T>(value: &T, output_path: Option<PathBuf>) -> anyhow::Result<()>
    where
        T: Serialize,
    {
        let mut output = match output_path {
            Some(path) => {
                let file = File::create(&path).with_context(|| {
                    format!("Failed to create output file: {}", path.display())
                })?;
                Output::File {
                    writer: BufWriter::new(file),
                    path,
                }
            }
            None => Output::Stdout(io::stdout().lock()),
        };
        let target = match &output {
            Output::Stdout(_) => "stdout".to_string(),
            Output::File { path, .. } => path.display().to_string(),
        };

        let writer: &mut dyn Write = match &mut output {
            Output::Stdout(writer) => writer,
            Output::File { writer, .. } => writer,
        };
        serde_json::to_writer_pretty(&mut *writer, value)
            .with_context(|| format!("Failed to write JSON to {target}"))?;
        writeln!(writer)
            .and_then(|()| writer.flush())
            .with_context(|| format!("Failed to flush output to {target}"))?;
        Ok(())
    }
}

/// Read factor weights from a JSON file
///
/// # Errors
///
/// Returns error if the file cannot be opened, is not valid JSON, or names an
/// unknown or missing factor
pub fn read_weights_file<P>(path: P) -> anyhow::Result<FactorWeights>
where
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let file = File::open(path)
        .with_context(|| format!("Failed to open weights file: {}", path.display()))?;
    serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("Failed to parse weights JSON file: {}", path.display()))
}

#[cfg(test)]
mod tests {
    use std::{env, fs, process};

    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        env::temp_dir().join(format!("othello-cli-{}-{name}", process::id()))
    }

    #[test]
    fn test_weights_file_round_trip() {
        let path = temp_path("weights.json");
        let weights = FactorWeights {
            mobility: 1.5,
            ..FactorWeights::DEFAULT
        };
        Output::save_json(&weights, Some(path.clone())).unwrap();
        let loaded = read_weights_file(&path).unwrap();
        fs::remove_file(&path).unwrap();
        assert_eq!(loaded, weights);
    }

    #[test]
    fn test_weights_file_errors_name_the_file() {
        let missing = temp_path("missing.json");
        let err = read_weights_file(&missing).unwrap_err();
        assert!(
            err.to_string().contains("Failed to open weights file"),
            "unexpected error: {err}"
        );

        let invalid = temp_path("invalid.json");
        fs::write(&invalid, r#"{"corner": 1.0}"#).unwrap();
        let err = read_weights_file(&invalid).unwrap_err();
        fs::remove_file(&invalid).unwrap();
        assert!(
            err.to_string().contains("Failed to parse weights JSON file"),
            "unexpected error: {err}"
        );
    }
}
