/// Core value types for evaluation.
///
/// Contains the dynamically-typed `Value` enum, the on-demand coercions used
/// by operators, and the canonical string rendering.
pub mod core;
