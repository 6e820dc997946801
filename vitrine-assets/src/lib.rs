//! Product model decoding for vitrine
//!
//! This crate turns product scene bundles into [`Model`] geometry and runs
//! decodes on a background worker so the UI thread never blocks on I/O.
//! Formats are dispatched by file extension; the product pipeline ships
//! glTF 2.0 bundles (`.gltf` / `.glb`).

pub mod gltf;
pub mod loader;

pub use self::gltf::GltfReader;
pub use loader::{AssetLoader, LoadResult};

use std::path::Path;
use vitrine_core::{Error, Model, Result};

/// Trait for decoding product models from files
pub trait ModelReader {
    fn read_model<P: AsRef<Path>>(path: P) -> Result<Model>;
}

/// Auto-detect format and decode a product model
pub fn load_model<P: AsRef<Path>>(path: P) -> Result<Model> {
    let path = path.as_ref();
    match path.extension().and_then(|s| s.to_str()) {
        Some("gltf") | Some("glb") => GltfReader::read_model(path),
        _ => Err(Error::UnsupportedFormat(format!(
            "unsupported model format: {:?}",
            path.extension()
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_extension_is_rejected() {
        let err = load_model("model.fbx").unwrap_err();
        assert!(matches!(err, Error::UnsupportedFormat(_)));
    }

    #[test]
    fn missing_extension_is_rejected() {
        assert!(load_model("model").is_err());
    }
}
