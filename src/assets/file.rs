//! Filesystem content provider.
//!
//! Reads `.glb`/`.gltf` models and audio files relative to a root directory.
//! Only the glTF JSON is inspected: bounds come from the POSITION accessor
//! min/max of every mesh in the default scene and clip durations from the
//! animation sampler inputs, so no buffer data is decoded.

use std::path::{Path, PathBuf};

use anyhow::Context;
use glam::{Affine3A, Mat4, Vec3};
use serde_json::Value;

use crate::animation::AnimationClip;
use crate::assets::provider::ContentProvider;
use crate::scene::{AudioClip, BoundingBox, ModelAsset};

pub struct FileContentProvider {
    root_path: PathBuf,
}

impl FileContentProvider {
    #[must_use]
    pub fn new(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        let root_path = if path.is_file() {
            path.parent().unwrap_or(Path::new(".")).to_path_buf()
        } else {
            path.to_path_buf()
        };
        Self { root_path }
    }

    #[inline]
    #[must_use]
    pub fn root_path(&self) -> &Path {
        &self.root_path
    }

    async fn read_bytes(&self, uri: &str) -> anyhow::Result<Vec<u8>> {
        let path = self.root_path.join(uri);
        let data = tokio::fs::read(&path)
            .await
            .with_context(|| format!("failed to read {}", path.display()))?;
        Ok(data)
    }
}

impl ContentProvider for FileContentProvider {
    async fn load_model(&self, path: &str) -> anyhow::Result<ModelAsset> {
        let bytes = self.read_bytes(path).await?;
        parse_model(file_stem(path), &bytes)
    }

    async fn load_audio(&self, path: &str) -> anyhow::Result<AudioClip> {
        let bytes = self.read_bytes(path).await?;
        if bytes.is_empty() {
            anyhow::bail!("audio file '{path}' is empty");
        }
        Ok(AudioClip::new(file_stem(path), bytes))
    }
}

fn file_stem(path: &str) -> &str {
    Path::new(path)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or(path)
}

/// Extracts bounds and animation clips from glTF JSON or GLB bytes.
pub fn parse_model(name: &str, bytes: &[u8]) -> anyhow::Result<ModelAsset> {
    let gltf = gltf::Gltf::from_slice(bytes).context("invalid glTF document")?;

    let scene = gltf
        .default_scene()
        .or_else(|| gltf.scenes().next())
        .context("glTF document has no scene")?;

    let mut bounds = BoundingBox::EMPTY;
    for node in scene.nodes() {
        accumulate_bounds(&node, Affine3A::IDENTITY, &mut bounds);
    }

    let mut asset = ModelAsset::new(name, bounds);
    for anim in gltf.animations() {
        let duration = anim
            .channels()
            .filter_map(|channel| accessor_bound(channel.sampler().input().max()))
            .map(|max| max.x)
            .fold(0.0_f32, f32::max);

        let clip_name = anim
            .name()
            .map_or_else(|| format!("Animation_{}", anim.index()), str::to_string);
        asset = asset.with_animation(AnimationClip::new(clip_name, duration));
    }

    Ok(asset)
}

fn accumulate_bounds(node: &gltf::Node, parent: Affine3A, bounds: &mut BoundingBox) {
    let local = Affine3A::from_mat4(Mat4::from_cols_array_2d(&node.transform().matrix()));
    let world = parent * local;

    if let Some(mesh) = node.mesh() {
        for primitive in mesh.primitives() {
            let Some(positions) = primitive.get(&gltf::Semantic::Positions) else {
                continue;
            };
            let (Some(min), Some(max)) = (
                accessor_bound(positions.min()),
                accessor_bound(positions.max()),
            ) else {
                log::warn!("Primitive in mesh {} has no POSITION bounds", mesh.index());
                continue;
            };
            *bounds = bounds.union(&BoundingBox::new(min, max).transform(&world));
        }
    }

    for child in node.children() {
        accumulate_bounds(&child, world, bounds);
    }
}

/// Reads an accessor `min`/`max` entry. Scalars fill only `x`.
fn accessor_bound(value: Option<Value>) -> Option<Vec3> {
    let components: Vec<f32> = value?
        .as_array()?
        .iter()
        .map(|v| v.as_f64().map(|f| f as f32))
        .collect::<Option<_>>()?;

    match components.as_slice() {
        [x] => Some(Vec3::new(*x, 0.0, 0.0)),
        [x, y, z, ..] => Some(Vec3::new(*x, *y, *z)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Metadata only: the buffer has no uri, so no binary data is ever read
    const ANIMATED_BOX: &str = r#"{
        "asset": { "version": "2.0" },
        "scene": 0,
        "scenes": [{ "nodes": [0] }],
        "nodes": [{ "mesh": 0, "scale": [2.0, 1.0, 1.0], "name": "Page" }],
        "meshes": [{ "primitives": [{ "attributes": { "POSITION": 0 } }] }],
        "buffers": [{ "byteLength": 128 }],
        "bufferViews": [
            { "buffer": 0, "byteOffset": 0, "byteLength": 96 },
            { "buffer": 0, "byteOffset": 96, "byteLength": 8 },
            { "buffer": 0, "byteOffset": 104, "byteLength": 24 }
        ],
        "accessors": [
            { "bufferView": 0, "componentType": 5126, "count": 8, "type": "VEC3",
              "min": [-0.5, -1.0, -0.25], "max": [0.5, 1.0, 0.25] },
            { "bufferView": 1, "componentType": 5126, "count": 2, "type": "SCALAR",
              "min": [0.0], "max": [2.5] },
            { "bufferView": 2, "componentType": 5126, "count": 2, "type": "VEC3" }
        ],
        "animations": [{
            "name": "Wave",
            "samplers": [{ "input": 1, "output": 2 }],
            "channels": [{ "sampler": 0, "target": { "node": 0, "path": "translation" } }]
        }]
    }"#;

    const STATIC_BOX: &str = r#"{
        "asset": { "version": "2.0" },
        "scenes": [{ "nodes": [0] }],
        "nodes": [{ "children": [1], "translation": [5.0, 0.0, 0.0] }, { "mesh": 0 }],
        "meshes": [{ "primitives": [{ "attributes": { "POSITION": 0 } }] }],
        "buffers": [{ "byteLength": 96 }],
        "bufferViews": [{ "buffer": 0, "byteLength": 96 }],
        "accessors": [
            { "bufferView": 0, "componentType": 5126, "count": 8, "type": "VEC3",
              "min": [0.0, 0.0, 0.0], "max": [1.0, 3.0, 1.0] }
        ]
    }"#;

    #[test]
    fn parse_reads_bounds_through_node_transform() {
        let asset = parse_model("page", ANIMATED_BOX.as_bytes()).unwrap();
        let size = asset.bounds.size();
        assert!((size.x - 2.0).abs() < 1e-5);
        assert!((size.y - 2.0).abs() < 1e-5);
        assert!((size.z - 0.5).abs() < 1e-5);
    }

    #[test]
    fn parse_reads_clip_duration() {
        let asset = parse_model("page", ANIMATED_BOX.as_bytes()).unwrap();
        assert_eq!(asset.animations.len(), 1);
        assert_eq!(asset.animations[0].name, "Wave");
        assert!((asset.animations[0].duration - 2.5).abs() < 1e-5);
    }

    #[test]
    fn parse_walks_child_nodes_without_default_scene() {
        let asset = parse_model("static", STATIC_BOX.as_bytes()).unwrap();
        assert!(asset.animations.is_empty());
        assert!((asset.bounds.min.x - 5.0).abs() < 1e-5);
        assert!((asset.bounds.max_dimension() - 3.0).abs() < 1e-5);
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!(parse_model("junk", b"not a model").is_err());
    }
}
