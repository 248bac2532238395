//! Explicit configuration passed to every puzzle's entry point

use std::path::{Path, PathBuf};

use cgmath::Vector2;

use crate::{Error, Result};

/// Where a puzzle reads its input from, and where (if anywhere) it writes its output
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub input: PathBuf,
    /// Only the image decoder produces an output file
    pub output: Option<PathBuf>,
    /// Width and height of each layer of a layered image
    pub dimensions: Vector2<u32>,
    /// Print the decoded image to stdout as well as saving it
    pub display: bool,
}

impl Config {
    /// The `Config` used when a day is run without any overrides
    pub fn for_day(day: u8) -> Self {
        match day {
            1 => Self {
                input: PathBuf::from("./inputs"),
                ..Self::default()
            },
            8 => Self {
                output: Some(PathBuf::from("./out.png")),
                ..Self::default()
            },
            _ => Self::default(),
        }
    }

    pub fn read_input(&self) -> Result<String> {
        read_input(&self.input)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input: PathBuf::from("./input"),
            output: None,
            dimensions: Vector2::new(25, 6),
            display: false,
        }
    }
}

/// Read the whole of a file as a [`String`], remembering the path if the read fails
pub fn read_input(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    std::fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_owned(),
        source,
    })
}
