//! glTF scene-bundle decoding
//!
//! Products ship as glTF 2.0 bundles: geometry, materials, and a node
//! hierarchy under a root transform. The reader walks the default scene,
//! bakes node transforms into the vertices, and concatenates every
//! primitive into one [`Model`].

use crate::ModelReader;
use nalgebra::{Matrix4, Point3, Vector3};
use std::path::Path;
use vitrine_core::{Error, Model, Result};

pub struct GltfReader;

impl ModelReader for GltfReader {
    /// Decode a `.gltf`/`.glb` bundle into a single flattened model.
    fn read_model<P: AsRef<Path>>(path: P) -> Result<Model> {
        let path = path.as_ref();
        let (document, buffers, _images) = gltf::import(path)
            .map_err(|e| Error::Asset(format!("failed to load {path:?}: {e}")))?;

        let scene = document
            .default_scene()
            .or_else(|| document.scenes().next())
            .ok_or_else(|| Error::Asset(format!("no scenes in {path:?}")))?;

        let mut model = Model::new();
        for node in scene.nodes() {
            append_node(&node, &buffers, Matrix4::identity(), &mut model)?;
        }
        if model.is_empty() {
            return Err(Error::Asset(format!("no mesh data in {path:?}")));
        }
        Ok(model)
    }
}

fn append_node(
    node: &gltf::Node,
    buffers: &[gltf::buffer::Data],
    parent: Matrix4<f32>,
    model: &mut Model,
) -> Result<()> {
    // glTF matrices are column-major, same as nalgebra's array layout.
    let local = Matrix4::from(node.transform().matrix());
    let transform = parent * local;

    if let Some(mesh) = node.mesh() {
        for primitive in mesh.primitives() {
            append_primitive(&primitive, buffers, &transform, model)?;
        }
    }
    for child in node.children() {
        append_node(&child, buffers, transform, model)?;
    }
    Ok(())
}

fn append_primitive(
    primitive: &gltf::Primitive,
    buffers: &[gltf::buffer::Data],
    transform: &Matrix4<f32>,
    model: &mut Model,
) -> Result<()> {
    let reader = primitive.reader(|buffer| Some(&buffers[buffer.index()]));

    let positions: Vec<[f32; 3]> = reader
        .read_positions()
        .ok_or_else(|| Error::Asset("primitive has no positions".to_string()))?
        .collect();

    let normals: Vec<[f32; 3]> = reader
        .read_normals()
        .map(|n| n.collect())
        .unwrap_or_else(|| vec![[0.0, 1.0, 0.0]; positions.len()]);

    if normals.len() != positions.len() {
        return Err(Error::Asset(
            "primitive normal count does not match position count".to_string(),
        ));
    }

    // Non-indexed primitives draw vertices in order.
    let indices: Vec<u32> = match reader.read_indices() {
        Some(indices) => indices.into_u32().collect(),
        None => (0..positions.len() as u32).collect(),
    };

    // Prefer per-vertex colors; fall back to the material's base color.
    let vertex_colors: Option<Vec<[f32; 4]>> = reader
        .read_colors(0)
        .map(|c| c.into_rgba_f32().collect());
    let base_color = primitive
        .material()
        .pbr_metallic_roughness()
        .base_color_factor();

    let base_index = model.vertices.len() as u32;
    for (i, (position, normal)) in positions.iter().zip(&normals).enumerate() {
        model
            .vertices
            .push(transform.transform_point(&Point3::from(*position)));
        let n = transform.transform_vector(&Vector3::from(*normal));
        model.normals.push(if n.norm() > f32::EPSILON {
            n.normalize()
        } else {
            Vector3::y()
        });
        let [r, g, b, _a] = vertex_colors
            .as_ref()
            .map(|colors| colors[i])
            .unwrap_or(base_color);
        model.colors.push([r, g, b]);
    }
    model
        .indices
        .extend(indices.into_iter().map(|i| base_index + i));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::load_model;
    use approx::assert_relative_eq;
    use std::fs;

    // A single triangle at (0,0,0), (1,0,0), (0,1,0) with positions embedded
    // as a base64 data URI, scaled 2x by its node transform.
    const TRIANGLE_GLTF: &str = r#"{
        "asset": { "version": "2.0" },
        "scene": 0,
        "scenes": [ { "nodes": [0] } ],
        "nodes": [ { "mesh": 0, "scale": [2.0, 2.0, 2.0] } ],
        "meshes": [ { "primitives": [ { "attributes": { "POSITION": 0 } } ] } ],
        "accessors": [ {
            "bufferView": 0,
            "componentType": 5126,
            "count": 3,
            "type": "VEC3",
            "min": [0.0, 0.0, 0.0],
            "max": [1.0, 1.0, 0.0]
        } ],
        "bufferViews": [ { "buffer": 0, "byteOffset": 0, "byteLength": 36 } ],
        "buffers": [ {
            "byteLength": 36,
            "uri": "data:application/octet-stream;base64,AAAAAAAAAAAAAAAAAACAPwAAAAAAAAAAAAAAAAAAgD8AAAAA"
        } ]
    }"#;

    #[test]
    fn decodes_embedded_triangle_with_node_transform() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("triangle.gltf");
        fs::write(&path, TRIANGLE_GLTF).unwrap();

        let model = load_model(&path).unwrap();
        assert_eq!(model.vertex_count(), 3);
        assert_eq!(model.triangle_count(), 1);
        assert_eq!(model.normals.len(), 3);
        assert_eq!(model.colors.len(), 3);

        // The 2x node scale is baked into the vertices.
        let aabb = model.aabb().unwrap();
        assert_relative_eq!(aabb.largest_dimension(), 2.0, epsilon = 1e-6);
    }

    #[test]
    fn missing_file_reports_asset_error() {
        let err = GltfReader::read_model("does-not-exist.gltf").unwrap_err();
        assert!(matches!(err, Error::Asset(_)));
    }
}
