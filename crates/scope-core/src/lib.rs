mod path;
pub mod types;

pub use path::{
    CurrentDirProvider, FixedPathProvider, PackagePath, StartPathProvider, normalize_segments,
};
pub use types::*;
