/// Rule-text and variable-bag preprocessing helpers.
///
/// These are optional collaborators of the core pipeline: pure text→text and
/// bag→bag transforms that an embedding application may run before calling
/// `evaluate`. None of them are required for the correctness of the grammar
/// or the evaluator's own coercions.
pub mod preprocess;
