// Copyright 2021 Twitter, Inc.
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use std::path::{Path, PathBuf};

use clap::{App, Arg, ArgMatches};
use log::LevelFilter;
use serde_derive::*;

use crate::Error;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");

fn default_title() -> String {
    "Scaling plot".to_string()
}

fn default_x_label() -> String {
    "Number of cores".to_string()
}

fn default_y_label() -> String {
    "Wallclock time (seconds)".to_string()
}

fn default_width() -> u32 {
    1280
}

fn default_height() -> u32 {
    720
}

/// Chart cosmetics, loadable from a TOML file with per-key defaults.
#[derive(Clone, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ChartSettings {
    #[serde(default = "default_title")]
    title: String,
    #[serde(default = "default_x_label")]
    x_label: String,
    #[serde(default = "default_y_label")]
    y_label: String,
    #[serde(default = "default_width")]
    width: u32,
    #[serde(default = "default_height")]
    height: u32,
    #[serde(default)]
    log_scale: bool,
}

impl Default for ChartSettings {
    fn default() -> Self {
        Self {
            title: default_title(),
            x_label: default_x_label(),
            y_label: default_y_label(),
            width: default_width(),
            height: default_height(),
            log_scale: false,
        }
    }
}

impl ChartSettings {
    pub fn load_from_file(path: &Path) -> Result<Self, Error> {
        let content = std::fs::read_to_string(path).map_err(|e| Error::ChartSettings {
            path: path.to_path_buf(),
            detail: e.to_string(),
        })?;
        toml::from_str(&content).map_err(|e| Error::ChartSettings {
            path: path.to_path_buf(),
            detail: e.to_string(),
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn x_label(&self) -> &str {
        &self.x_label
    }

    pub fn y_label(&self) -> &str {
        &self.y_label
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn log_scale(&self) -> bool {
        self.log_scale
    }
}

/// Runtime configuration: the tool's command line merged with an optional
/// chart-settings file. Flags override file values.
pub struct Config {
    output: PathBuf,
    inputs: Vec<PathBuf>,
    overwrite: bool,
    settings: ChartSettings,
    verbosity: u64,
}

impl Config {
    /// parse command line options and return `Config`
    pub fn new() -> Config {
        let matches = app().get_matches();
        Config::from_matches(&matches)
    }

    pub(crate) fn from_matches(matches: &ArgMatches) -> Config {
        let mut settings = if let Some(file) = matches.value_of("config") {
            match ChartSettings::load_from_file(Path::new(file)) {
                Ok(settings) => settings,
                Err(e) => {
                    println!("ERROR: {}", e);
                    std::process::exit(1);
                }
            }
        } else {
            Default::default()
        };

        if let Some(title) = matches.value_of("title") {
            settings.title = title.to_string();
        }
        if let Some(width) = parse_numeric_arg(matches, "width") {
            settings.width = width;
        }
        if let Some(height) = parse_numeric_arg(matches, "height") {
            settings.height = height;
        }
        if matches.is_present("log-scale") {
            settings.log_scale = true;
        }

        let output = matches
            .value_of("output")
            .map(PathBuf::from)
            .unwrap_or_default();
        let inputs = matches
            .values_of("inputs")
            .map(|values| values.map(PathBuf::from).collect())
            .unwrap_or_default();

        Config {
            output,
            inputs,
            overwrite: matches.is_present("overwrite"),
            settings,
            verbosity: matches.occurrences_of("verbose"),
        }
    }

    pub fn output(&self) -> &Path {
        &self.output
    }

    pub fn inputs(&self) -> &[PathBuf] {
        &self.inputs
    }

    pub fn overwrite(&self) -> bool {
        self.overwrite
    }

    pub fn settings(&self) -> &ChartSettings {
        &self.settings
    }

    pub fn log_level(&self) -> LevelFilter {
        match self.verbosity {
            0 => LevelFilter::Info,
            1 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }

    /// Log the resolved configuration, one line per concern.
    pub fn print(&self) {
        info!("-----");
        info!(
            "Config: Output: {:?} Overwrite: {}",
            self.output, self.overwrite
        );
        info!("Config: Inputs: {}", self.inputs.len());
        info!(
            "Config: Chart: {}x{} LogScale: {}",
            self.settings.width(),
            self.settings.height(),
            self.settings.log_scale()
        );
    }
}

pub(crate) fn app() -> App<'static, 'static> {
    App::new(NAME)
        .version(VERSION)
        .author("Brian Martin <bmartin@twitter.com>")
        .about("Plot scaling study results against ideal scaling")
        .arg(
            Arg::with_name("output")
                .long("output")
                .value_name("FILE")
                .help("Image file to write (PNG or JPEG by extension)")
                .takes_value(true)
                .required(true),
        )
        .arg(
            Arg::with_name("inputs")
                .value_name("FILE")
                .help("Scaling study result files (JSON)")
                .multiple(true)
                .required(true),
        )
        .arg(
            Arg::with_name("overwrite")
                .long("overwrite")
                .help("Replace the output file if it already exists"),
        )
        .arg(
            Arg::with_name("config")
                .long("config")
                .value_name("FILE")
                .help("TOML chart settings file")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("title")
                .long("title")
                .value_name("STRING")
                .help("Chart title")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("width")
                .long("width")
                .value_name("PIXELS")
                .help("Chart width")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("height")
                .long("height")
                .value_name("PIXELS")
                .help("Chart height")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("log-scale")
                .long("log-scale")
                .help("Draw both axes with log scale"),
        )
        .arg(
            Arg::with_name("verbose")
                .short("v")
                .long("verbose")
                .help("Increase verbosity by one level. Can be used more than once")
                .multiple(true),
        )
}

fn parse_numeric_arg(matches: &ArgMatches, key: &str) -> Option<u32> {
    matches.value_of(key).map(|f| {
        f.parse().unwrap_or_else(|_| {
            println!("ERROR: could not parse numeric argument for: {}", key);
            std::process::exit(1);
        })
    })
}
