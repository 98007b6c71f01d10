use burn::config::Config;
use burn::module::Module;
use burn::nn::{Linear, LinearConfig};
use burn::tensor::activation;
use burn::tensor::{backend::Backend, Tensor};

/// Stack of fully connected layers with a ReLU after every layer, applied
/// along the last axis. On a [N, T, C] input the same weights transform
/// every position of the T axis.
#[derive(Module, Debug)]
pub struct MLP<B: Backend> {
    d_input: usize,
    layers: Vec<Linear<B>>,
}

impl<B: Backend> MLP<B> {
    pub fn forward<const D: usize>(&self, x: Tensor<B, D>) -> Tensor<B, D> {
        let d_feat = x.dims()[D - 1];
        assert!(
            d_feat == self.d_input,
            "input has {} features on the last axis, mlp expects {}",
            d_feat,
            self.d_input
        );

        self.layers
            .iter()
            .fold(x, |x, layer| activation::relu(layer.forward(x)))
    }
}

#[derive(Config, Debug)]
pub struct MLPConfig {
    d_input: usize,
    layer_sizes: Vec<usize>,
}

impl MLPConfig {
    pub fn init<B: Backend>(&self) -> MLP<B> {
        assert!(self.d_input > 0);
        assert!(self.layer_sizes.len() > 0);

        let mut layers = Vec::with_capacity(self.layer_sizes.len());
        let mut d_in = self.d_input;

        for d_out in self.layer_sizes.iter().copied() {
            layers.push(LinearConfig::new(d_in, d_out).init());
            d_in = d_out;
        }

        MLP {
            d_input: self.d_input,
            layers,
        }
    }
}
