// Copyright 2021 Twitter, Inc.
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use std::path::PathBuf;

use thiserror::Error;

/// Failures that abort a run. Each variant renders as a single
/// human-readable line at the binary boundary; none are retried.
#[derive(Error, Debug)]
pub enum Error {
    #[error("file not found: {path:?}")]
    FileNotFound { path: PathBuf },

    #[error("file {path:?} is not valid JSON: {source}")]
    InvalidJson {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("missing required data in file {path:?}: {detail}")]
    MissingField { path: PathBuf, detail: String },

    #[error("output file {path:?} already exists, use --overwrite to replace it")]
    OutputExists { path: PathBuf },

    #[error("no input files provided")]
    NoInput,

    #[error("could not load chart settings from {path:?}: {detail}")]
    ChartSettings { path: PathBuf, detail: String },

    #[error("could not write chart to {path:?}: {detail}")]
    PlotWrite { path: PathBuf, detail: String },

    #[error("could not read {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}
