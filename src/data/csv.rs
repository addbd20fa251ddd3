//! CSV dataset loading
//!
//! Expected layout:
//! - The first line is a header and is always discarded
//! - Every following line is `x1,x2,label`
//! - Blank lines are ignored

use crate::core::{Dataset, Label, PerceptronError, Record, Result, NEGATIVE, POSITIVE};
use log::{debug, warn};
use std::fs::File;
use std::io::{BufRead, BufReader, ErrorKind};
use std::path::Path;

const N_COLUMNS: usize = 3;

impl Dataset {
    /// Load a dataset from a CSV file
    pub fn from_csv_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)?;
        let dataset = Self::from_csv_reader(BufReader::new(file))?;
        debug!("Loaded {} rows from {:?}", dataset.len(), path);
        Ok(dataset)
    }

    /// Load a dataset from any buffered reader
    pub fn from_csv_reader<R: BufRead>(reader: R) -> Result<Self> {
        let mut records = Vec::new();

        // Line 1 is the header.
        for (idx, line) in reader.lines().enumerate().skip(1) {
            let line = line.map_err(|e| match e.kind() {
                ErrorKind::InvalidData => {
                    PerceptronError::ParseError(format!("line {}: invalid UTF-8", idx + 1))
                }
                _ => PerceptronError::IoError(e),
            })?;
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            records.push(parse_data_line(line, idx + 1)?);
        }

        if records.is_empty() {
            return Err(PerceptronError::EmptyDataset);
        }

        Ok(Self::from_records(records))
    }
}

/// Parse one `x1,x2,label` line
fn parse_data_line(line: &str, line_no: usize) -> Result<Record> {
    let fields: Vec<&str> = line.split(',').map(str::trim).collect();
    if fields.len() != N_COLUMNS {
        return Err(PerceptronError::ParseError(format!(
            "line {line_no}: expected {N_COLUMNS} fields, found {}: {line}",
            fields.len()
        )));
    }

    let x1 = parse_feature(fields[0], 1, line_no)?;
    let x2 = parse_feature(fields[1], 2, line_no)?;
    let label = fields[2].parse::<Label>().map_err(|_| {
        PerceptronError::ParseError(format!("line {line_no}: invalid label: {}", fields[2]))
    })?;

    if label != POSITIVE && label != NEGATIVE {
        warn!("line {line_no}: label {label} is outside {{-1, +1}}");
    }

    Ok(Record::new(x1, x2, label))
}

fn parse_feature(field: &str, column: usize, line_no: usize) -> Result<f64> {
    field.parse::<f64>().map_err(|_| {
        PerceptronError::ParseError(format!(
            "line {line_no}: invalid feature value at column {column}: {field}"
        ))
    })
}
