// Copyright 2021 Twitter, Inc.
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Reads scaling study results (one JSON file per measured run) and renders
//! the measured curve against an ideal inverse-proportional reference line.

#[macro_use]
extern crate log;

mod config;
mod error;
mod logger;
mod plot;
mod sample;
mod study;

pub use crate::config::{ChartSettings, Config, NAME, VERSION};
pub use crate::error::Error;
pub use crate::logger::Logger;
pub use crate::plot::render;
pub use crate::sample::Sample;
pub use crate::study::Study;

/// Run one load, build, render pass. All-or-nothing: any ingestion error
/// aborts before the output file is touched.
pub fn run(config: &Config) -> Result<(), Error> {
    if config.output().exists() && !config.overwrite() {
        return Err(Error::OutputExists {
            path: config.output().to_path_buf(),
        });
    }

    let study = Study::load(config.inputs())?;
    debug!(
        "loaded {} samples, max nproc: {}",
        study.len(),
        study.max_nproc()
    );

    plot::render(&study, config.settings(), config.output())
}
