//! Chatscript — script authoring pipeline.
//!
//! Decodes author-supplied YAML scripts, validates them for author-time
//! feedback, normalizes shorthand step forms into canonical records, and
//! builds the immutable dialogue graph the session engine traverses.

pub mod default_script;
pub mod graph;
pub mod normalize;
pub mod parse;
pub mod step;
pub mod validate;
