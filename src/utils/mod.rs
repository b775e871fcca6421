//! Helpers shared across layers.
//!
//! Only [`code_generator`] lives here: the short-code alphabet, its format
//! rule, and random generation.

pub mod code_generator;
