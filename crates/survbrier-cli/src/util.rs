use std::{
    fs::File,
    io::{self, BufWriter, StdoutLock, Write as _},
    path::{Path, PathBuf},
};

use anyhow::Context;
use survbrier_metrics::SurvivalLabels;

use crate::schema::predictions::PredictionsFile;

#[derive(Debug)]
pub enum Output {
    Stdout {
        writer: StdoutLock<'static>,
    },
    File {
        writer: BufWriter<File>,
        path: PathBuf,
    },
}

impl Output {
    /// Write `value` as pretty-printed JSON to `output_path`, or stdout when `None`
    pub fn save_json<T>(value: &T, output_path: Option<PathBuf>) -> anyhow::Result<()>
    where
        T: serde::Serialize,
    {
        let mut output = match output_path {
            Some(path) => {
                let file = File::create(&path)
                    .with_context(|| format!("Failed to create output file: {}", path.display()))?;
                Output::File {
                    writer: BufWriter::new(file),
                    path,
                }
            }
            None => Output::Stdout {
                writer: io::stdout().lock(),
            },
        };

        serde_json::to_writer_pretty(&mut output, value)
            .with_context(|| format!("Failed to write JSON to {}", output.display_path()))?;
        writeln!(output)
            .and_then(|()| output.flush())
            .with_context(|| format!("Failed to finish writing {}", output.display_path()))?;

        log::info!("Results written to {}", output.display_path());
        Ok(())
    }

    fn display_path(&self) -> String {
        match self {
            Output::Stdout { .. } => "stdout".to_string(),
            Output::File { path, .. } => path.display().to_string(),
        }
    }
}

impl io::Write for Output {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            Output::Stdout { writer } => writer.write(buf),
            Output::File { writer, .. } => writer.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            Output::Stdout { writer } => writer.flush(),
            Output::File { writer, .. } => writer.flush(),
        }
    }
}

pub fn read_json_file<T, P>(file_kind: &str, path: P) -> anyhow::Result<T>
where
    T: serde::de::DeserializeOwned,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let file = File::open(path)
        .with_context(|| format!("Failed to open {} file: {}", file_kind, path.display()))?;

    let reader = io::BufReader::new(file);
    let value = serde_json::from_reader(reader).with_context(|| {
        format!(
            "Failed to parse {} JSON file: {}",
            file_kind,
            path.display()
        )
    })?;

    Ok(value)
}

/// Read survival labels from a JSON file
///
/// Accepts both the record form (`[{"event": 1, "duration": 2.0}, ...]`) and
/// the column form (`{"event": [...], "duration": [...]}`).
pub fn read_labels_file<P>(file_kind: &str, path: P) -> anyhow::Result<SurvivalLabels>
where
    P: AsRef<Path>,
{
    let labels: SurvivalLabels = read_json_file(file_kind, path)?;
    log::info!("Loaded {} {file_kind} labels", labels.len());
    Ok(labels)
}

/// Read predictions and their time horizons from a JSON file
pub fn read_predictions_file<P>(path: P) -> anyhow::Result<PredictionsFile>
where
    P: AsRef<Path>,
{
    let predictions: PredictionsFile = read_json_file("predictions", path)?;
    log::info!(
        "Loaded predictions for {} samples at {} time horizons",
        predictions.values.len(),
        predictions.times.len()
    );
    Ok(predictions)
}
