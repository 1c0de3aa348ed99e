//! Recurrent perceptron controller for creature brains.
//!
//! A brain is a fixed two-layer tanh network. The input layer sees the sensor
//! distances plus the memory cells written by the previous step; the output
//! layer produces `turn`, `move` and the next memory cells. All parameters live
//! in one flat weight vector so they can be compared, cloned and spliced
//! cheaply by the hall of fame.

use ndarray::{Array1, ArrayView1, s};
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::frame::Rgba;

pub mod mlp;

pub use mlp::Mlp;

/// Layer sizes of a brain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Topology {
    /// Number of sensor inputs.
    pub sensors: usize,
    /// Number of recurrent memory cells.
    pub memory: usize,
}

impl Topology {
    /// Creates a topology for `sensors` inputs and `memory` cells.
    pub fn new(sensors: usize, memory: usize) -> Self {
        Self { sensors, memory }
    }

    /// Perceptrons in the input layer.
    pub fn input_layer_size(&self) -> usize {
        self.sensors + self.memory
    }

    /// Perceptrons in the output layer (`turn`, `move`, memory).
    pub fn output_layer_size(&self) -> usize {
        self.memory + 2
    }

    /// Weights per input-layer perceptron, bias included.
    pub fn input_weight_len(&self) -> usize {
        self.sensors + self.memory + 1
    }

    /// Weights per output-layer perceptron, bias included.
    pub fn output_weight_len(&self) -> usize {
        self.input_layer_size() + 1
    }

    /// Length of the flat weight vector.
    pub fn weight_count(&self) -> usize {
        let (input, output) = self.layers();
        input.len() + output.len()
    }

    /// Canonical layer blocks: every input-layer perceptron first, then every
    /// output-layer perceptron. Serialized weight vectors depend on this order.
    pub fn layers(&self) -> (Mlp, Mlp) {
        let input = Mlp::new(0, self.input_layer_size(), self.input_weight_len());
        let output = Mlp::new(input.end(), self.output_layer_size(), self.output_weight_len());
        (input, output)
    }
}

/// Motor command produced by one brain step. Both values lie in `[-1, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Action {
    /// Heading change request.
    pub turn: f32,
    /// Forward (positive) or backward (negative) speed request.
    pub movement: f32,
}

/// Neural network brain that controls a creature.
#[derive(Debug, Clone)]
pub struct Brain {
    topology: Topology,
    weights: Vec<f32>,
    input_layer: Mlp,
    output_layer: Mlp,
    /// Bias, sensors, memory.
    x: Array1<f32>,
    /// Bias, input-layer activations.
    hidden: Array1<f32>,
    /// Output-layer activations of the last step.
    output: Array1<f32>,
}

impl Brain {
    /// Creates a brain with weights drawn uniformly from `[-1, 1)`.
    pub fn new_random<R: Rng + ?Sized>(topology: Topology, rng: &mut R) -> Self {
        let weights = (0..topology.weight_count())
            .map(|_| rng.random_range(-1.0..1.0))
            .collect();
        Self::from_weights(topology, weights)
    }

    /// Creates a brain from a flat weight vector laid out as [`Topology::layers`].
    ///
    /// # Panics
    ///
    /// Panics if `weights` does not have [`Topology::weight_count`] elements.
    pub fn from_weights(topology: Topology, weights: Vec<f32>) -> Self {
        assert_eq!(
            weights.len(),
            topology.weight_count(),
            "weight vector length does not match the brain topology"
        );
        let (input_layer, output_layer) = topology.layers();

        let mut x = Array1::zeros(topology.input_weight_len());
        x[0] = 1.0;
        let mut hidden = Array1::zeros(topology.output_weight_len());
        hidden[0] = 1.0;

        Self {
            topology,
            weights,
            input_layer,
            output_layer,
            x,
            hidden,
            output: Array1::zeros(topology.output_layer_size()),
        }
    }

    /// Runs one forward pass and stores the new memory for the next call.
    ///
    /// # Panics
    ///
    /// Panics if `sensors.len()` differs from the topology's sensor count.
    pub fn step(&mut self, sensors: &[f32]) -> Action {
        let n = self.topology.sensors;
        assert_eq!(sensors.len(), n, "sensor input length is wrong");

        self.x.slice_mut(s![1..=n]).assign(&ArrayView1::from(sensors));
        let memory_start = n + 1;
        self.x
            .slice_mut(s![memory_start..])
            .assign(&self.output.slice(s![2..]));

        self.input_layer
            .forward_into(&self.weights, self.x.view(), self.hidden.slice_mut(s![1..]));
        self.output_layer
            .forward_into(&self.weights, self.hidden.view(), self.output.view_mut());

        Action {
            turn: self.output[0],
            movement: self.output[1],
        }
    }

    /// Redraws every weight uniformly from `[-1, 1)`. Memory is left alone.
    pub fn randomize_weights<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        for w in &mut self.weights {
            *w = rng.random_range(-1.0..1.0);
        }
    }

    /// The flat weight vector in canonical order.
    pub fn weights(&self) -> &[f32] {
        &self.weights
    }

    /// Replaces the weights in place. Layer blocks keep their fixed offsets.
    ///
    /// # Panics
    ///
    /// Panics if `weights` has the wrong length.
    pub fn set_weights(&mut self, weights: &[f32]) {
        assert_eq!(
            weights.len(),
            self.weights.len(),
            "weight vector length does not match the brain topology"
        );
        self.weights.copy_from_slice(weights);
    }

    /// Zeroes the recurrent state so the next step starts fresh.
    pub fn reset_memory(&mut self) {
        self.output.fill(0.0);
    }

    /// Memory cells that will feed the next step.
    pub fn memory(&self) -> ArrayView1<'_, f32> {
        self.output.slice(s![2..])
    }

    /// Layer sizes of this brain.
    pub fn topology(&self) -> Topology {
        self.topology
    }

    /// Display colour derived from the weights.
    ///
    /// The vector is cut into thirds that feed the red, blue and green
    /// channels in that order. Brains with identical weights share a colour,
    /// so clones are easy to spot.
    pub fn color(&self) -> Rgba {
        let third = self.weights.len() / 3;
        let divisor = third as f32;
        let (mut red, mut blue, mut green) = (0.0f32, 0.0f32, 0.0f32);
        for (i, w) in self.weights.iter().enumerate() {
            if i < third {
                red += w / divisor;
            } else if i < third * 2 {
                blue += w / divisor;
            } else {
                green += w / divisor;
            }
        }
        Rgba::opaque(channel(red), channel(green), channel(blue))
    }
}

/// Maps an average weight onto a colour channel, capped below white.
fn channel(avg: f32) -> u8 {
    (f32::from(0xB3u8) / (avg * 2.0 + 0.5)).clamp(0.0, 255.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_topology_sizes() {
        let topology = Topology::new(12, 12);
        assert_eq!(topology.input_weight_len(), 25);
        assert_eq!(topology.output_weight_len(), 25);
        assert_eq!(topology.weight_count(), 24 * 25 + 14 * 25);

        let (input, output) = topology.layers();
        assert_eq!(input.offset, 0);
        assert_eq!(output.offset, 600);
        assert_eq!(output.end(), 950);
    }

    #[test]
    fn test_channel_mapping() {
        assert_eq!(channel(0.0), 255);
        assert_eq!(channel(0.25), 0xB3);
        assert_eq!(channel(-0.5), 0);
    }
}
