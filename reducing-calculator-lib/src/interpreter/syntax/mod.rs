pub mod token_sequence;
