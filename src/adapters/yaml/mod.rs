//! YAML manifest loading
//!
//! - [`parser`] - Read, deserialize and validate `manifest.yaml`

pub mod parser;

pub use parser::{MANIFEST_FILE, ManifestError, load_manifest, parse_manifest};
