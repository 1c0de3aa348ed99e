//! A single perceptron layer bound to a block of a flat weight vector.

use ndarray::{ArrayView1, ArrayView2, ArrayViewMut1};
use serde::{Deserialize, Serialize};

/// One fully connected tanh layer.
///
/// The layer does not own its weights. It describes where its block starts in
/// the brain's flat weight vector and how the block is shaped: `outputs`
/// perceptrons, each with `inputs` consecutive weights. The first input of every
/// perceptron is the bias slot, which the caller keeps at 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mlp {
    /// Index of the first weight of this layer in the flat vector.
    pub offset: usize,
    /// Number of perceptrons.
    pub outputs: usize,
    /// Weights per perceptron, bias included.
    pub inputs: usize,
}

impl Mlp {
    /// Describes a layer block starting at `offset`.
    pub fn new(offset: usize, outputs: usize, inputs: usize) -> Self {
        Self {
            offset,
            outputs,
            inputs,
        }
    }

    /// Number of weights in the block.
    pub fn len(&self) -> usize {
        self.outputs * self.inputs
    }

    /// Whether the block holds no weights.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// One past the last weight of the block.
    pub fn end(&self) -> usize {
        self.offset + self.len()
    }

    /// Views the block as an `outputs × inputs` matrix.
    pub fn view<'a>(&self, weights: &'a [f32]) -> ArrayView2<'a, f32> {
        ArrayView2::from_shape((self.outputs, self.inputs), &weights[self.offset..self.end()])
            .expect("layer block does not match its shape")
    }

    /// Performs forward pass with tanh activation, writing into `out`.
    ///
    /// Each weighted sum accumulates left to right, so inputs as large as
    /// `f32::MAX` saturate the activation instead of producing NaN.
    #[inline]
    pub fn forward_into(
        &self,
        weights: &[f32],
        inputs: ArrayView1<'_, f32>,
        mut out: ArrayViewMut1<'_, f32>,
    ) {
        for (o, row) in out.iter_mut().zip(self.view(weights).rows()) {
            let sum = row.iter().zip(inputs.iter()).fold(0.0f32, |acc, (w, x)| acc + w * x);
            *o = sum.tanh();
        }
    }
}
