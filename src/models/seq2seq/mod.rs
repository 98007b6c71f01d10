pub mod decoder;
pub mod oneshot;

pub use decoder::Seq2SeqDecoder;
pub use oneshot::{OneShotDecoder, OneShotDecoderConfig};
