use burn::config::Config;
use burn::module::Module;
use burn::nn::{Linear, LinearConfig};
use burn::tensor::{backend::Backend, Tensor};
use tracing::debug;

use crate::modules::mlp::{MLPConfig, MLP};

use super::decoder::Seq2SeqDecoder;

/// Decoder that predicts the whole forecast horizon in a single pass, with
/// no per-step recurrence. Static context is expanded into a distinct
/// learned slice per time step, concatenated with the known per-step
/// covariates and pushed through a shared feed-forward network.
#[derive(Module, Debug)]
pub struct OneShotDecoder<B: Backend> {
    decoder_length: usize,
    static_outputs_per_time_step: usize,
    dynamic_feature_width: usize,
    expander: Linear<B>,
    mlp: MLP<B>,
}

impl<B: Backend> OneShotDecoder<B> {
    pub fn forward(
        &self,
        dynamic_input: Tensor<B, 3>, // [N, T, C]
        static_input: Tensor<B, 2>,  // [N, C]
    ) -> Tensor<B, 3> {
        let [batch_size, dynamic_length, dynamic_width] = dynamic_input.dims();

        assert!(
            dynamic_length == self.decoder_length,
            "dynamic input covers {} time steps, decoder expects {}",
            dynamic_length,
            self.decoder_length
        );
        assert!(
            dynamic_width == self.dynamic_feature_width,
            "dynamic input has {} features per step, decoder expects {}",
            dynamic_width,
            self.dynamic_feature_width
        );

        let static_tile = self.expander.forward(static_input).reshape([
            batch_size,
            self.decoder_length,
            self.static_outputs_per_time_step,
        ]);

        let combined_input = Tensor::cat(vec![dynamic_input, static_tile], 2);

        self.mlp.forward(combined_input) // [N, T, layer_sizes last]
    }
}

impl<B: Backend> Seq2SeqDecoder<B> for OneShotDecoder<B> {
    fn forward(&self, dynamic_input: Tensor<B, 3>, static_input: Tensor<B, 2>) -> Tensor<B, 3> {
        OneShotDecoder::forward(self, dynamic_input, static_input)
    }
}

#[derive(Config, Debug)]
pub struct OneShotDecoderConfig {
    input_size: usize,
    decoder_length: usize,
    layer_sizes: Vec<usize>,
    static_outputs_per_time_step: usize,
    dynamic_feature_width: usize,
}

impl OneShotDecoderConfig {
    pub fn init<B: Backend>(&self) -> OneShotDecoder<B> {
        assert!(self.input_size > 0, "input_size must be positive");
        assert!(self.decoder_length > 0, "decoder_length must be positive");
        assert!(
            self.static_outputs_per_time_step > 0,
            "static_outputs_per_time_step must be positive"
        );

        let expander = LinearConfig::new(
            self.input_size,
            self.decoder_length * self.static_outputs_per_time_step,
        )
        .init();

        let d_combined = self.dynamic_feature_width + self.static_outputs_per_time_step;
        let mlp = MLPConfig::new(d_combined, self.layer_sizes.clone()).init();

        debug!(
            "OneShotDecoder: horizon {}, {} combined features per step",
            self.decoder_length, d_combined
        );

        OneShotDecoder {
            decoder_length: self.decoder_length,
            static_outputs_per_time_step: self.static_outputs_per_time_step,
            dynamic_feature_width: self.dynamic_feature_width,
            expander,
            mlp,
        }
    }
}
