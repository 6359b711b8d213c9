// Copyright 2021 Twitter, Inc.
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

#[macro_use]
extern crate log;

use std::process;

use scalinggraph::{Config, Logger, VERSION};

fn main() {
    let config = Config::new();

    Logger::new()
        .label("scalinggraph")
        .level(config.log_level())
        .init()
        .expect("failed to initialize logger");

    info!("scalinggraph {} initializing...", VERSION);
    config.print();

    if let Err(e) = scalinggraph::run(&config) {
        error!("{}", e);
        process::exit(1);
    }

    info!("chart written to {:?}", config.output());
}
