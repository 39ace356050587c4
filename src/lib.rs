//! Public library API for decoding ACBLscore game files.

/// Game file layout, structural decoders and the decoded record tree.
pub mod game;
