/// Runtime value representation.
///
/// Defines the `Value` enum, conversions from Rust primitives, type checks
/// used by the evaluator, and the display forms written by `puts`.
pub mod core;
