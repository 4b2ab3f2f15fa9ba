//! Similarity metrics for the scanning pipeline
//!
//! Three independent signals, each bounded to `[0, 100]`:
//! - `lexical`: normalized edit-distance ratio (the gate and the title metric)
//! - `content`: TF-IDF cosine over the pair's page bodies
//! - `visual`: per-pixel MSE over the pair's favicons

pub mod content;
pub mod lexical;
pub mod visual;
