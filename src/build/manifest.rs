use serde::Deserialize;

/// `manifest.json` at the root of the build input directory.
///
/// Documents are listed in site order: a document's position here is its
/// site index in the built index.
#[derive(Deserialize, Clone, Debug)]
pub struct InputManifest {
    pub version: u32,
    pub documents: Vec<String>,
}
