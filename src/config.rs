// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Command-line configuration

use crate::error::SeamError;
use clap::{App, Arg, ArgMatches};
use std::path::PathBuf;
use std::str::FromStr;

/// What to write to the output file.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Mode {
    /// The image with seams removed.
    Carve,
    /// The energy field, as greyscale.
    Energy,
    /// The luminosity of every pixel, as greyscale.
    Luminosity,
    /// The image with its next seam painted red.
    Seam,
    /// The luminosity and energy tables, as text.
    Table,
}

impl FromStr for Mode {
    type Err = SeamError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "carve" => Ok(Mode::Carve),
            "energy" => Ok(Mode::Energy),
            "luminosity" => Ok(Mode::Luminosity),
            "seam" => Ok(Mode::Seam),
            "table" => Ok(Mode::Table),
            other => Err(SeamError::BadMode(other.to_string())),
        }
    }
}

const MODES: [&str; 5] = ["carve", "energy", "luminosity", "seam", "table"];

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub input: PathBuf,
    pub output: PathBuf,
    pub seams: u32,
    pub mode: Mode,
}

impl Config {
    /// The argument parser for the `lumaseam` binary.
    pub fn app() -> App<'static, 'static> {
        App::new("lumaseam")
            .version(env!("CARGO_PKG_VERSION"))
            .about("Narrow an image by removing its lowest-energy seams")
            .arg(
                Arg::with_name("input")
                    .help("The image to carve")
                    .required(true)
                    .index(1),
            )
            .arg(
                Arg::with_name("output")
                    .help("Where to write the result; the extension picks the format")
                    .required(true)
                    .index(2),
            )
            .arg(
                Arg::with_name("seams")
                    .short("n")
                    .long("seams")
                    .takes_value(true)
                    .default_value("1")
                    .help("How many vertical seams to remove"),
            )
            .arg(
                Arg::with_name("mode")
                    .short("m")
                    .long("mode")
                    .takes_value(true)
                    .possible_values(&MODES)
                    .default_value("carve")
                    .help("What to write: the carved image, or a diagnostic view"),
            )
    }

    pub fn from_matches(matches: &ArgMatches) -> Result<Self, SeamError> {
        let seams = matches.value_of("seams").unwrap_or("1");
        Ok(Config {
            input: PathBuf::from(matches.value_of_os("input").unwrap_or_default()),
            output: PathBuf::from(matches.value_of_os("output").unwrap_or_default()),
            seams: seams
                .parse()
                .map_err(|_| SeamError::BadSeamCount(seams.to_string()))?,
            mode: matches.value_of("mode").unwrap_or("carve").parse()?,
        })
    }
}
