mod operation;
mod translator;

pub use operation::Operation;
pub use translator::{apply_operations, translate, translate_segments};
