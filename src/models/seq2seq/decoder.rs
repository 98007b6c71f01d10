use burn::tensor::{backend::Backend, Tensor};

/// Decoder half of an encoder-decoder forecasting model.
///
/// Consumes per-step dynamic features for the forecast horizon plus a static
/// context vector and produces one output embedding per future time step.
/// Concrete decoders are interchangeable behind this trait.
pub trait Seq2SeqDecoder<B: Backend> {
    fn forward(
        &self,
        dynamic_input: Tensor<B, 3>, // [N, T, C]
        static_input: Tensor<B, 2>,  // [N, C]
    ) -> Tensor<B, 3>;
}
