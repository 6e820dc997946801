//! Model geometry: triangle data, bounding boxes, and normalization

use nalgebra::{Point3, Vector3};
use serde::{Deserialize, Serialize};

/// A 3D point with floating point coordinates
pub type Point3f = Point3<f32>;

/// A 3D vector with floating point components
pub type Vector3f = Vector3<f32>;

/// An axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub min: Point3f,
    pub max: Point3f,
}

impl Aabb {
    /// Bounding box of a point set; `None` for an empty set.
    pub fn from_points<'a, I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = &'a Point3f>,
    {
        let mut iter = points.into_iter();
        let first = *iter.next()?;
        let mut min = first;
        let mut max = first;
        for p in iter {
            min = Point3f::new(min.x.min(p.x), min.y.min(p.y), min.z.min(p.z));
            max = Point3f::new(max.x.max(p.x), max.y.max(p.y), max.z.max(p.z));
        }
        Some(Self { min, max })
    }

    pub fn center(&self) -> Point3f {
        Point3f::from((self.min.coords + self.max.coords) * 0.5)
    }

    pub fn size(&self) -> Vector3f {
        self.max - self.min
    }

    /// Largest extent across the three axes
    pub fn largest_dimension(&self) -> f32 {
        let size = self.size();
        size.x.max(size.y).max(size.z)
    }
}

/// Triangle geometry decoded from a product's scene bundle
///
/// Geometry is stored flattened: the asset pipeline walks the bundle's node
/// hierarchy and bakes node transforms into the vertices, so a model is a
/// single indexed triangle list regardless of how the source was organized.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Model {
    pub vertices: Vec<Point3f>,
    pub normals: Vec<Vector3f>,
    /// Per-vertex linear RGB
    pub colors: Vec<[f32; 3]>,
    pub indices: Vec<u32>,
}

impl Model {
    /// Create a new empty model
    pub fn new() -> Self {
        Self::default()
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty() || self.indices.is_empty()
    }

    /// Axis-aligned bounding box of the vertices
    pub fn aabb(&self) -> Option<Aabb> {
        Aabb::from_points(&self.vertices)
    }

    /// Normalize the model for display: scale uniformly so the largest
    /// bounding-box dimension equals `target`, then translate the post-scale
    /// bounding-box center to the origin. Returns the applied scale factor
    /// (1.0 for empty or degenerate geometry).
    pub fn normalize(&mut self, target: f32) -> f32 {
        let Some(aabb) = self.aabb() else {
            return 1.0;
        };
        let largest = aabb.largest_dimension();
        if largest <= f32::EPSILON {
            return 1.0;
        }
        let factor = target / largest;
        for v in &mut self.vertices {
            *v *= factor;
        }
        // Recompute the center after scaling, as the original does.
        if let Some(scaled) = self.aabb() {
            let center = scaled.center().coords;
            for v in &mut self.vertices {
                *v -= center;
            }
        }
        factor
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn box_model(w: f32, h: f32, d: f32, offset: Vector3f) -> Model {
        // Two opposite corners are enough to pin the bounding box.
        let vertices = vec![
            Point3f::from(Vector3f::new(0.0, 0.0, 0.0) + offset),
            Point3f::from(Vector3f::new(w, h, d) + offset),
            Point3f::from(Vector3f::new(w, 0.0, 0.0) + offset),
        ];
        Model {
            normals: vec![Vector3f::y(); vertices.len()],
            colors: vec![[1.0, 1.0, 1.0]; vertices.len()],
            indices: vec![0, 1, 2],
            vertices,
        }
    }

    #[test]
    fn aabb_of_empty_model_is_none() {
        assert!(Model::new().aabb().is_none());
    }

    #[test]
    fn aabb_spans_all_vertices() {
        let model = box_model(2.0, 4.0, 1.0, Vector3f::new(1.0, 1.0, 1.0));
        let aabb = model.aabb().unwrap();
        assert_eq!(aabb.min, Point3f::new(1.0, 1.0, 1.0));
        assert_eq!(aabb.max, Point3f::new(3.0, 5.0, 2.0));
        assert_relative_eq!(aabb.largest_dimension(), 4.0);
    }

    #[test]
    fn normalize_scales_largest_dimension_to_target() {
        let mut model = box_model(8.0, 2.0, 1.0, Vector3f::zeros());
        let factor = model.normalize(2.0);
        assert_relative_eq!(factor, 2.0 / 8.0);
        let aabb = model.aabb().unwrap();
        assert_relative_eq!(aabb.largest_dimension(), 2.0, epsilon = 1e-5);
    }

    #[test]
    fn normalize_centers_on_origin() {
        let mut model = box_model(3.0, 5.0, 2.0, Vector3f::new(10.0, -4.0, 7.0));
        model.normalize(2.0);
        let center = model.aabb().unwrap().center();
        assert_relative_eq!(center.x, 0.0, epsilon = 1e-5);
        assert_relative_eq!(center.y, 0.0, epsilon = 1e-5);
        assert_relative_eq!(center.z, 0.0, epsilon = 1e-5);
    }

    #[test]
    fn normalize_of_degenerate_geometry_is_identity() {
        let mut model = box_model(0.0, 0.0, 0.0, Vector3f::zeros());
        assert_relative_eq!(model.normalize(2.0), 1.0);
    }
}
