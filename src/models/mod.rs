pub mod seq2seq;
