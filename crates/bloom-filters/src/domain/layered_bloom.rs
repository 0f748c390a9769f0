//! # Layered Bloom Filter
//!
//! An ordered stack of equally sized [`BloomFilter`] layers that
//! approximates how many times an element has been added. Adding walks the
//! layers from the bottom and sets the element in the first layer that does
//! not contain it yet; when every layer already contains it, a new layer is
//! pushed. The depth reported for an element is the run of consecutive
//! layers, from layer 1, that contain it.
//!
//! False positives compound per layer: a count is an upper bound that is
//! exact with the probability of every consulted layer answering truthfully.

use tracing::trace;

use super::bloom_filter::BloomFilter;
use super::config::FilterConfig;
use super::hash_functions::HashFamily;
use super::parameters::{calculate_optimal_parameters, BloomFilterParams};
use crate::error::FilterError;

/// Stack of Bloom filters counting multiplicity of insertion
#[derive(Clone, Debug, PartialEq)]
pub struct LayeredBloomFilter {
    /// Layer 1 first; each layer exclusively owned
    layers: Vec<BloomFilter>,
    /// Shape every new layer is created with
    params: BloomFilterParams,
    /// Shared by all layers, so positions are computed once per call
    hashes: HashFamily,
}

impl LayeredBloomFilter {
    /// Create an empty layered filter whose layers are each sized for
    /// `expected_elements` at `target_fpr`
    pub fn new(expected_elements: usize, target_fpr: f64) -> Result<Self, FilterError> {
        let params = calculate_optimal_parameters(expected_elements, target_fpr)?;
        Ok(Self::from_params(params))
    }

    /// Create an empty layered filter from a validated configuration
    pub fn from_config(config: &FilterConfig) -> Result<Self, FilterError> {
        Ok(Self::from_params(config.parameters()?))
    }

    fn from_params(params: BloomFilterParams) -> Self {
        Self {
            layers: Vec::new(),
            hashes: HashFamily::new(params.size_bits, params.hash_count),
            params,
        }
    }

    /// Add an element and return the 1-based layer it was recorded in
    ///
    /// Repeated adds of the same element return 1, 2, 3, ... as long as no
    /// higher layer already reports it through a false positive.
    pub fn add(&mut self, element: &[u8]) -> usize {
        let positions: Vec<usize> = self.hashes.positions(element).collect();

        for (index, layer) in self.layers.iter_mut().enumerate() {
            if !layer.contains_positions(positions.iter().copied()) {
                layer.set_positions(positions);
                return index + 1;
            }
        }

        let mut layer = BloomFilter::from_params(&self.params);
        layer.set_positions(positions);
        self.layers.push(layer);
        trace!(depth = self.layers.len(), "Appended bloom filter layer");
        self.layers.len()
    }

    /// Report how deep an element reaches
    ///
    /// Returns `(depth, found)`: `depth` counts consecutive layers from
    /// layer 1 that contain the element, and `found` is true iff the first
    /// layer contains it.
    pub fn test(&self, element: &[u8]) -> (usize, bool) {
        let positions: Vec<usize> = self.hashes.positions(element).collect();
        let depth = self
            .layers
            .iter()
            .take_while(|layer| layer.contains_positions(positions.iter().copied()))
            .count();
        (depth, depth > 0)
    }

    /// Whether the element is present in the first layer
    pub fn contains(&self, element: &[u8]) -> bool {
        self.test(element).1
    }

    /// Number of layers allocated so far
    pub fn layer_count(&self) -> usize {
        self.layers.len()
    }

    /// Layers in order, layer 1 first
    pub fn layers(&self) -> &[BloomFilter] {
        &self.layers
    }

    /// Parameters each layer is created with
    pub fn layer_params(&self) -> &BloomFilterParams {
        &self.params
    }

    /// Drop every layer
    pub fn clear(&mut self) {
        self.layers.clear();
    }
}
