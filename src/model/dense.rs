//! Dense feed-forward classifier exported as JSON (sequential dense layers).
//! Evaluated with `ndarray`; no runtime library needed.

use super::Classifier;
use crate::error::{ChurnError, ChurnResult};
use ndarray::{Array1, Array2};
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Activation {
    Linear,
    Relu,
    Sigmoid,
    Tanh,
}

impl Activation {
    fn apply(&self, x: f32) -> f32 {
        match self {
            Activation::Linear => x,
            Activation::Relu => x.max(0.0),
            Activation::Sigmoid => 1.0 / (1.0 + (-x).exp()),
            Activation::Tanh => x.tanh(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct LayerFile {
    /// `inputs x units`
    weights: Vec<Vec<f32>>,
    bias: Vec<f32>,
    activation: Activation,
}

#[derive(Debug, Deserialize)]
struct NetworkFile {
    layers: Vec<LayerFile>,
}

#[derive(Debug, Clone)]
pub struct DenseLayer {
    weights: Array2<f32>,
    bias: Array1<f32>,
    activation: Activation,
}

impl DenseLayer {
    pub fn new(weights: Vec<Vec<f32>>, bias: Vec<f32>, activation: Activation) -> Result<Self, String> {
        let inputs = weights.len();
        let units = bias.len();
        if inputs == 0 || units == 0 {
            return Err("layer must have at least one input and one unit".to_string());
        }
        if let Some(row) = weights.iter().position(|r| r.len() != units) {
            return Err(format!(
                "weights row {row} has {} columns, bias has {units}",
                weights[row].len()
            ));
        }
        let flat: Vec<f32> = weights.into_iter().flatten().collect();
        if flat.iter().chain(bias.iter()).any(|v| !v.is_finite()) {
            return Err("weights and bias must be finite".to_string());
        }
        let weights = Array2::from_shape_vec((inputs, units), flat).map_err(|e| e.to_string())?;
        Ok(Self {
            weights,
            bias: Array1::from_vec(bias),
            activation,
        })
    }

    pub fn inputs(&self) -> usize {
        self.weights.nrows()
    }

    pub fn units(&self) -> usize {
        self.weights.ncols()
    }

    fn forward(&self, x: &Array1<f32>) -> Array1<f32> {
        let activation = self.activation;
        (x.dot(&self.weights) + &self.bias).mapv(|v| activation.apply(v))
    }
}

#[derive(Debug, Clone)]
pub struct DenseNetwork {
    layers: Vec<DenseLayer>,
}

impl DenseNetwork {
    /// Layers must chain and end in a single unit.
    pub fn from_layers(layers: Vec<DenseLayer>) -> Result<Self, String> {
        let Some(last) = layers.last() else {
            return Err("network has no layers".to_string());
        };
        if last.units() != 1 {
            return Err(format!("output layer has {} units, expected 1", last.units()));
        }
        for (i, pair) in layers.windows(2).enumerate() {
            if pair[0].units() != pair[1].inputs() {
                return Err(format!(
                    "layer {i} outputs {} values but layer {} takes {}",
                    pair[0].units(),
                    i + 1,
                    pair[1].inputs()
                ));
            }
        }
        Ok(Self { layers })
    }

    pub fn load(path: &Path) -> ChurnResult<Self> {
        let data = std::fs::read_to_string(path).map_err(|e| ChurnError::artifact(path, e))?;
        let file: NetworkFile =
            serde_json::from_str(&data).map_err(|e| ChurnError::artifact(path, e))?;
        let layers = file
            .layers
            .into_iter()
            .enumerate()
            .map(|(i, l)| {
                DenseLayer::new(l.weights, l.bias, l.activation).map_err(|e| format!("layer {i}: {e}"))
            })
            .collect::<Result<Vec<_>, _>>()
            .map_err(|reason| ChurnError::artifact(path, reason))?;
        Self::from_layers(layers).map_err(|reason| ChurnError::artifact(path, reason))
    }

    pub fn input_dim(&self) -> usize {
        self.layers[0].inputs()
    }
}

impl Classifier for DenseNetwork {
    fn predict(&self, scaled: &[f32]) -> ChurnResult<f32> {
        if scaled.len() != self.input_dim() {
            return Err(ChurnError::inference(format!(
                "classifier expects {} inputs, got {}",
                self.input_dim(),
                scaled.len()
            )));
        }
        let mut x = Array1::from_vec(scaled.to_vec());
        for layer in &self.layers {
            x = layer.forward(&x);
        }
        x.get(0)
            .copied()
            .ok_or_else(|| ChurnError::inference("classifier produced no output"))
    }

    fn name(&self) -> &str {
        "dense"
    }
}
