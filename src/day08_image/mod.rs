//! Decoding of layered images: a flat stream of digits is cut into fixed-size layers, which are
//! then either checksummed or composited into a single visible image.

mod composite;
mod layer;

use std::path::Path;

use log::info;

pub use composite::{Composite, Pixel};
pub use layer::{Layer, LayerIdx, LayerSet};

use crate::{config, Config, Error, Result};

/// Load the digit stream stored in a file, ignoring any surrounding whitespace.  The characters
/// aren't checked here; that happens when they're split into layers.
pub fn read_stream(path: impl AsRef<Path>) -> Result<Vec<char>> {
    let contents = config::read_input(path)?;
    Ok(contents.trim().chars().collect())
}

/// The checksum of the layer with the fewest `0`s
pub fn checksum(layers: &LayerSet) -> Result<usize> {
    layers
        .fewest_zeros()
        .map(Layer::checksum)
        .ok_or(Error::NoLayers)
}

pub fn run(config: &Config) -> Result<()> {
    let stream = read_stream(&config.input)?;
    let layers = LayerSet::split(&stream, config.dimensions)?;
    info!(
        "Loaded {} layers of {}x{} from {:?}",
        layers.len(),
        config.dimensions.x,
        config.dimensions.y,
        config.input
    );

    let layer_checksum = checksum(&layers)?;
    let image = layers.composite()?;

    println!("{}", layer_checksum);
    if config.display {
        println!("{}", image);
    }
    if let Some(path) = &config.output {
        image.save(path)?;
        info!("Saved {:?} to {:?}", image, path);
    }
    Ok(())
}
