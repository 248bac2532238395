use std::path::PathBuf;

use aoc_2019::Config;
use clap::Parser;

/// Solve one day's puzzle.  Without any options, input is read from (and output written to) the
/// current directory.
#[derive(Debug, Parser)]
#[command(version)]
struct Args {
    /// Which day to solve
    day: u8,
    /// Read the puzzle input from this file
    #[arg(short, long)]
    input: Option<PathBuf>,
    /// Write the decoded image to this file (day 8 only)
    #[arg(short, long)]
    output: Option<PathBuf>,
    /// Width of each image layer
    #[arg(long)]
    width: Option<u32>,
    /// Height of each image layer
    #[arg(long)]
    height: Option<u32>,
    /// Also print the decoded image to the terminal
    #[arg(short, long)]
    display: bool,
}

impl Args {
    fn into_config(self) -> Config {
        let mut config = Config::for_day(self.day);
        if let Some(input) = self.input {
            config.input = input;
        }
        if let Some(output) = self.output {
            config.output = Some(output);
        }
        if let Some(width) = self.width {
            config.dimensions.x = width;
        }
        if let Some(height) = self.height {
            config.dimensions.y = height;
        }
        config.display = self.display;
        config
    }
}

fn main() -> aoc_2019::Result<()> {
    env_logger::init();

    let args = Args::parse();
    let day = args.day;
    aoc_2019::run(day, &args.into_config())
}
