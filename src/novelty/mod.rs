// Novelty module - incremental-mode duplicate detection against prior output

mod filter;

pub use filter::{is_novel, variant_closure, NoveltySet};
