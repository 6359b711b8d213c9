// Copyright 2021 Twitter, Inc.
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use std::fs::File;
use std::io::BufReader;
use std::io::ErrorKind;
use std::path::Path;

use serde_derive::*;
use serde_json::error::Category;

use crate::Error;

/// One measured run of the study: processor count and wallclock time.
#[derive(Clone, Copy, Debug, Deserialize, PartialEq)]
pub struct Sample {
    nproc: u64,
    execution_time: f64,
}

impl Sample {
    pub fn new(nproc: u64, execution_time: f64) -> Self {
        Self {
            nproc,
            execution_time,
        }
    }

    /// Read one study result from a JSON file. Both `nproc` and
    /// `execution_time` must be present and numeric; any other fields in
    /// the document are ignored.
    pub fn load(path: &Path) -> Result<Self, Error> {
        let file = File::open(path).map_err(|e| {
            if e.kind() == ErrorKind::NotFound {
                Error::FileNotFound {
                    path: path.to_path_buf(),
                }
            } else {
                Error::Io {
                    path: path.to_path_buf(),
                    source: e,
                }
            }
        })?;
        serde_json::from_reader(BufReader::new(file)).map_err(|e| match e.classify() {
            // a Data error means the document parsed but lacked the
            // required shape, which includes absent or non-numeric fields
            Category::Data => Error::MissingField {
                path: path.to_path_buf(),
                detail: e.to_string(),
            },
            _ => Error::InvalidJson {
                path: path.to_path_buf(),
                source: e,
            },
        })
    }

    pub fn nproc(&self) -> u64 {
        self.nproc
    }

    pub fn execution_time(&self) -> f64 {
        self.execution_time
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::io::Write;
    use std::path::PathBuf;

    fn write_file(name: &str, content: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!(
            "scalinggraph-sample-{}-{}",
            std::process::id(),
            name
        ));
        let mut file = File::create(&path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
        path
    }

    #[test]
    fn load_valid() {
        let path = write_file("valid.json", r#"{"nproc": 4, "execution_time": 10.5}"#);
        let sample = Sample::load(&path).unwrap();
        assert_eq!(sample.nproc(), 4);
        assert!((sample.execution_time() - 10.5).abs() < f64::EPSILON);
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn load_ignores_extra_fields() {
        let path = write_file(
            "extra.json",
            r#"{"nproc": 2, "execution_time": 3.0, "hostname": "node01", "terse": true}"#,
        );
        let sample = Sample::load(&path).unwrap();
        assert_eq!(sample.nproc(), 2);
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn load_missing_file() {
        let path = std::env::temp_dir().join("scalinggraph-sample-does-not-exist.json");
        let result = Sample::load(&path);
        assert!(matches!(result, Err(Error::FileNotFound { .. })));
    }

    #[test]
    fn load_invalid_json() {
        let path = write_file("invalid.json", "{not valid json");
        let result = Sample::load(&path);
        assert!(matches!(result, Err(Error::InvalidJson { .. })));
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn load_missing_field() {
        let path = write_file("missing.json", r#"{"nproc": 4}"#);
        let result = Sample::load(&path);
        assert!(matches!(result, Err(Error::MissingField { .. })));
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn load_non_numeric_field() {
        let path = write_file(
            "nonnumeric.json",
            r#"{"nproc": "four", "execution_time": 10.0}"#,
        );
        let result = Sample::load(&path);
        assert!(matches!(result, Err(Error::MissingField { .. })));
        let _ = std::fs::remove_file(&path);
    }
}
