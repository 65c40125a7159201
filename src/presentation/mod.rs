/// Writing fetched documents to the terminal or to a file
pub mod output;

pub use output::*;
