//! Splitting a flat stream of digits into fixed-size layers, and counting digits within them

use cgmath::Vector2;
use index_vec::IndexVec;
use itertools::Itertools;
use log::{debug, warn};

use crate::{Error, Result};

index_vec::define_index_type! {
    /// Position of a [`Layer`] within a [`LayerSet`].  Layer `0` is the frontmost.
    pub struct LayerIdx = usize;
}

/// One `width` x `height` grid of digits, stored row by row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layer {
    rows: Vec<Vec<u8>>,
}

impl Layer {
    /// Creates a `Layer` from rows of digits.  All the rows must be the same length.
    pub(crate) fn from_rows(rows: Vec<Vec<u8>>) -> Self {
        debug_assert!(rows.iter().map(Vec::len).all_equal());
        Self { rows }
    }

    pub fn rows(&self) -> &[Vec<u8>] {
        &self.rows
    }

    pub fn width(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// The digit at `(x, y)`.  Panics if the coordinate is outside the layer.
    pub fn digit(&self, x: usize, y: usize) -> u8 {
        self.rows[y][x]
    }

    /// All the digits in this layer, in the order they appeared in the stream
    pub fn digits(&self) -> impl Iterator<Item = u8> + '_ {
        self.rows.iter().flatten().copied()
    }

    /// The number of times `digit` appears anywhere in this layer
    pub fn count(&self, digit: u8) -> usize {
        self.digits().filter(|&d| d == digit).count()
    }

    /// `(number of 1s) * (number of 2s)`
    pub fn checksum(&self) -> usize {
        self.count(1) * self.count(2)
    }
}

/// An ordered stack of [`Layer`]s which all share the same dimensions
#[derive(Debug, Clone)]
pub struct LayerSet {
    size: Vector2<u32>,
    layers: IndexVec<LayerIdx, Layer>,
}

impl LayerSet {
    /// Creates a `LayerSet` from layers which have already been built.  Every layer must have
    /// dimensions `size`.
    pub fn new(size: Vector2<u32>, layers: impl IntoIterator<Item = Layer>) -> Result<Self> {
        check_size(size)?;
        let layers: IndexVec<LayerIdx, Layer> = layers.into_iter().collect();
        for (idx, layer) in layers.iter_enumerated() {
            if layer.width() != size.x as usize || layer.height() != size.y as usize {
                return Err(Error::LayerSize {
                    layer: idx.index(),
                    width: layer.width(),
                    height: layer.height(),
                });
            }
        }
        Ok(Self { size, layers })
    }

    /// Partition `stream` into consecutive layers of `size.x * size.y` digits, each reshaped into
    /// `size.y` rows of `size.x`.  Any trailing digits which don't fill a complete layer are
    /// dropped.
    pub fn split(stream: &[char], size: Vector2<u32>) -> Result<Self> {
        check_size(size)?;
        let width = size.x as usize;
        let layer_len = width * size.y as usize;

        let num_layers = stream.len() / layer_len;
        let leftover = stream.len() % layer_len;
        if leftover > 0 {
            warn!(
                "Dropping {} trailing digits which don't fill a {}x{} layer",
                leftover, size.x, size.y
            );
        }

        let digits = stream[..num_layers * layer_len]
            .iter()
            .enumerate()
            .map(|(index, &found)| {
                found
                    .to_digit(10)
                    .map(|d| d as u8)
                    .ok_or(Error::InvalidDigit { index, found })
            })
            .collect::<Result<Vec<u8>>>()?;
        let layers = digits
            .chunks_exact(layer_len)
            .map(|layer| Layer::from_rows(layer.chunks_exact(width).map(<[u8]>::to_vec).collect()))
            .collect::<IndexVec<LayerIdx, Layer>>();

        debug!("Split {} digits into {} layers", stream.len(), layers.len());
        Ok(Self { size, layers })
    }

    pub fn size(&self) -> Vector2<u32> {
        self.size
    }

    pub fn len(&self) -> usize {
        self.layers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    pub fn get(&self, idx: LayerIdx) -> Option<&Layer> {
        self.layers.get(idx)
    }

    /// Iterate over the layers, front to back
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Layer> + '_ {
        self.layers.iter()
    }

    /// Every digit in every layer, in stream order
    pub fn digits(&self) -> impl Iterator<Item = u8> + '_ {
        self.layers.iter().flat_map(Layer::digits)
    }

    /// The [`LayerIdx`] of the layer containing the fewest `0`s.  On a tie, the earliest layer
    /// wins.
    pub fn fewest_zeros_idx(&self) -> Option<LayerIdx> {
        self.layers
            .iter_enumerated()
            .min_by_key(|(_, layer)| layer.count(0))
            .map(|(idx, _)| idx)
    }

    /// The layer containing the fewest `0`s, or `None` if there are no layers
    pub fn fewest_zeros(&self) -> Option<&Layer> {
        self.fewest_zeros_idx().map(|idx| &self.layers[idx])
    }
}

fn check_size(size: Vector2<u32>) -> Result<()> {
    if size.x == 0 || size.y == 0 {
        return Err(Error::ZeroDimensions {
            width: size.x,
            height: size.y,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    fn layer(rows: &[&str]) -> Layer {
        Layer::from_rows(
            rows.iter()
                .map(|row| row.bytes().map(|b| b - b'0').collect())
                .collect(),
        )
    }

    #[test]
    fn split_reshapes_in_stream_order() {
        let layers = LayerSet::split(&chars("123456789012"), Vector2::new(3, 2)).unwrap();
        assert_eq!(layers.len(), 2);
        assert_eq!(layers.get(LayerIdx::new(0)), Some(&layer(&["123", "456"])));
        assert_eq!(layers.get(LayerIdx::new(1)), Some(&layer(&["789", "012"])));
    }

    #[test]
    fn split_round_trips() {
        let stream = "0222112222120000210120102";
        for (w, h) in [(1, 1), (5, 1), (1, 5), (5, 5)] {
            let layers = LayerSet::split(&chars(stream), Vector2::new(w, h)).unwrap();
            assert_eq!(layers.len(), stream.len() / (w * h) as usize);
            for l in layers.iter() {
                assert_eq!(l.width(), w as usize);
                assert_eq!(l.height(), h as usize);
            }
            let digits: String = layers.digits().map(|d| char::from(b'0' + d)).collect();
            assert_eq!(digits, stream);
        }
    }

    #[test]
    fn split_drops_partial_layer() {
        let layers = LayerSet::split(&chars("1234567"), Vector2::new(2, 2)).unwrap();
        assert_eq!(layers.len(), 1);
        assert_eq!(layers.digits().collect::<Vec<_>>(), vec![1, 2, 3, 4]);
    }

    #[test]
    fn split_empty_stream() {
        let layers = LayerSet::split(&[], Vector2::new(25, 6)).unwrap();
        assert!(layers.is_empty());
        assert_eq!(layers.fewest_zeros(), None);
    }

    #[test]
    fn split_rejects_non_digits() {
        match LayerSet::split(&chars("01x2"), Vector2::new(2, 2)) {
            Err(Error::InvalidDigit { index, found }) => {
                assert_eq!(index, 2);
                assert_eq!(found, 'x');
            }
            other => panic!("expected InvalidDigit, got {:?}", other),
        }
    }

    #[test]
    fn split_rejects_zero_dimensions() {
        assert!(matches!(
            LayerSet::split(&chars("0000"), Vector2::new(0, 4)),
            Err(Error::ZeroDimensions { width: 0, height: 4 })
        ));
    }

    #[test]
    fn count_depends_only_on_own_layer() {
        let a = layer(&["100", "201"]);
        let b = layer(&["222", "222"]);
        let forwards = LayerSet::new(Vector2::new(3, 2), [a.clone(), b.clone()]).unwrap();
        let backwards = LayerSet::new(Vector2::new(3, 2), [b, a.clone()]).unwrap();
        assert_eq!(a.count(0), 3);
        assert_eq!(a.count(1), 2);
        assert_eq!(a.count(2), 1);
        assert_eq!(forwards.get(LayerIdx::new(0)).unwrap().count(0), 3);
        assert_eq!(backwards.get(LayerIdx::new(1)).unwrap().count(0), 3);
        assert_eq!(backwards.get(LayerIdx::new(0)).unwrap().count(0), 0);
    }

    #[test]
    fn checksum_multiplies_ones_and_twos() {
        let l = layer(&["123", "456"]);
        assert_eq!(l.checksum(), 1);
        let l = layer(&["112", "222"]);
        assert_eq!(l.checksum(), 2 * 4);
        let l = layer(&["789", "000"]);
        assert_eq!(l.checksum(), 0);
    }

    #[test]
    fn fewest_zeros_picks_minimum() {
        // Zero counts are [5, 2, 8]
        let layers = LayerSet::new(
            Vector2::new(4, 2),
            [
                layer(&["0000", "0111"]),
                layer(&["0011", "1111"]),
                layer(&["0000", "0000"]),
            ],
        )
        .unwrap();
        assert_eq!(layers.fewest_zeros_idx(), Some(LayerIdx::new(1)));
    }

    #[test]
    fn fewest_zeros_tie_keeps_first() {
        let layers = LayerSet::new(
            Vector2::new(2, 1),
            [layer(&["01"]), layer(&["02"]), layer(&["10"])],
        )
        .unwrap();
        assert_eq!(layers.fewest_zeros_idx(), Some(LayerIdx::new(0)));
    }

    #[test]
    fn new_rejects_mismatched_layers() {
        let result = LayerSet::new(Vector2::new(2, 1), [layer(&["01"]), layer(&["012"])]);
        assert!(matches!(
            result,
            Err(Error::LayerSize {
                layer: 1,
                width: 3,
                height: 1
            })
        ));
        assert!(matches!(
            LayerSet::new(Vector2::new(0, 1), Vec::new()),
            Err(Error::ZeroDimensions { width: 0, height: 1 })
        ));
    }
}
