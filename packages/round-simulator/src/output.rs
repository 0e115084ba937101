//! Output writers for simulation results.

use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use flate2::write::GzEncoder;
use flate2::Compression;

use crate::metrics::{CsvSummaryRow, GameMetrics};
use crate::types::OutputFormat;

pub struct OutputWriter {
    format: OutputFormat,
    detail_writer: Box<dyn Write + Send>,
    detail_path: PathBuf,
    csv_writer: csv::Writer<BufWriter<File>>,
    csv_path: PathBuf,
    /// Games held back until `finish` for the single-array JSON format
    pending: Vec<GameMetrics>,
}

fn create_truncated(path: &Path) -> std::io::Result<File> {
    OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(path)
}

impl OutputWriter {
    pub fn new(
        output_dir: &str,
        format: OutputFormat,
        compress: bool,
    ) -> Result<Self, Box<dyn std::error::Error>> {
        let dir = Path::new(output_dir);
        std::fs::create_dir_all(dir)?;

        let timestamp = time::OffsetDateTime::now_utc()
            .format(&time::format_description::well_known::Iso8601::DEFAULT)
            .unwrap_or_else(|_| "unknown".to_string())
            .replace(':', "-");

        let extension = match format {
            OutputFormat::Jsonl => "jsonl",
            OutputFormat::Json => "json",
        };
        let mut detail_path = dir.join(format!("simulation_{timestamp}.{extension}"));
        let detail_writer: Box<dyn Write + Send> = if compress {
            detail_path = dir.join(format!("simulation_{timestamp}.{extension}.gz"));
            Box::new(BufWriter::new(GzEncoder::new(
                create_truncated(&detail_path)?,
                Compression::default(),
            )))
        } else {
            Box::new(BufWriter::new(create_truncated(&detail_path)?))
        };

        // Always create CSV summary
        let csv_path = dir.join(format!("simulation_{timestamp}_summary.csv"));
        let csv_writer = csv::Writer::from_writer(BufWriter::new(create_truncated(&csv_path)?));

        Ok(Self {
            format,
            detail_writer,
            detail_path,
            csv_writer,
            csv_path,
            pending: Vec::new(),
        })
    }

    pub fn write_game(&mut self, metrics: &GameMetrics) -> Result<(), Box<dyn std::error::Error>> {
        match self.format {
            OutputFormat::Jsonl => {
                let json = serde_json::to_string(metrics)?;
                writeln!(self.detail_writer, "{json}")?;
                self.detail_writer.flush()?;
            }
            OutputFormat::Json => self.pending.push(metrics.clone()),
        }

        let row: CsvSummaryRow = metrics.into();
        self.csv_writer.serialize(&row)?;
        self.csv_writer.flush()?;
        Ok(())
    }

    pub fn finish(mut self) -> Result<(), Box<dyn std::error::Error>> {
        if self.format == OutputFormat::Json {
            serde_json::to_writer_pretty(&mut self.detail_writer, &self.pending)?;
            writeln!(self.detail_writer)?;
        }
        self.detail_writer.flush()?;
        self.csv_writer.flush()?;
        // Dropping the boxed writer finalizes the gzip stream
        drop(self.detail_writer);
        Ok(())
    }

    pub fn output_paths(&self) -> (&PathBuf, &PathBuf) {
        (&self.detail_path, &self.csv_path)
    }
}
