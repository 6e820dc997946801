//! wgpu rendering for the vitrine product viewer
//!
//! One normalized model, lit by two directional lights plus an ambient
//! term, drawn inside an egui paint callback. GPU buffers are keyed by the
//! owning render session's generation: when the generation changes, the
//! previous session's buffers are dropped before the replacement is
//! created, so two sessions never hold GPU resources at the same time.

pub mod callback;

pub use callback::{ViewerCallback, ViewerDrawData};

use bytemuck::{Pod, Zeroable};
use nalgebra::Matrix4;
use vitrine_core::Model;
use wgpu::util::DeviceExt;

/// Vertex data for model rendering
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct MeshVertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub color: [f32; 3],
}

impl MeshVertex {
    /// Vertex buffer layout descriptor
    pub fn desc<'a>() -> wgpu::VertexBufferLayout<'a> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<MeshVertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                // Position
                wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 0,
                    format: wgpu::VertexFormat::Float32x3,
                },
                // Normal
                wgpu::VertexAttribute {
                    offset: std::mem::size_of::<[f32; 3]>() as wgpu::BufferAddress,
                    shader_location: 1,
                    format: wgpu::VertexFormat::Float32x3,
                },
                // Color
                wgpu::VertexAttribute {
                    offset: std::mem::size_of::<[f32; 6]>() as wgpu::BufferAddress,
                    shader_location: 2,
                    format: wgpu::VertexFormat::Float32x3,
                },
            ],
        }
    }
}

/// Uniform data for the model pass
#[repr(C)]
#[derive(Copy, Clone, Pod, Zeroable)]
pub struct ViewerUniforms {
    pub view_proj: [[f32; 4]; 4],
    pub model: [[f32; 4]; 4],
    /// xyz = direction, w = intensity
    pub front_light: [f32; 4],
    /// xyz = direction, w = intensity
    pub top_light: [f32; 4],
    /// rgb = color, w = strength
    pub ambient: [f32; 4],
}

/// Lighting for uniform product shading
#[derive(Debug, Clone)]
pub struct LightingParams {
    pub front_direction: [f32; 3],
    pub front_intensity: f32,
    pub top_direction: [f32; 3],
    pub top_intensity: f32,
    pub ambient_strength: f32,
}

impl Default for LightingParams {
    fn default() -> Self {
        // Front light at full intensity, top fill at half, ambient at half.
        Self {
            front_direction: [0.0, 0.0, 1.0],
            front_intensity: 1.0,
            top_direction: [0.0, 1.0, 0.0],
            top_intensity: 0.5,
            ambient_strength: 0.5,
        }
    }
}

/// Flatten model geometry into the GPU vertex layout
pub fn model_to_vertices(model: &Model) -> Vec<MeshVertex> {
    model
        .vertices
        .iter()
        .zip(&model.normals)
        .zip(&model.colors)
        .map(|((position, normal), color)| MeshVertex {
            position: [position.x, position.y, position.z],
            normal: [normal.x, normal.y, normal.z],
            color: *color,
        })
        .collect()
}

/// GPU buffers for one render session's model
struct ModelGpu {
    generation: u64,
    vertex_buffer: wgpu::Buffer,
    index_buffer: wgpu::Buffer,
    index_count: u32,
}

impl ModelGpu {
    fn upload(device: &wgpu::Device, generation: u64, model: &Model) -> Self {
        let vertices = model_to_vertices(model);
        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("viewer_model_vertex_buffer"),
            contents: bytemuck::cast_slice(&vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("viewer_model_index_buffer"),
            contents: bytemuck::cast_slice(&model.indices),
            usage: wgpu::BufferUsages::INDEX,
        });
        Self {
            generation,
            vertex_buffer,
            index_buffer,
            index_count: model.indices.len() as u32,
        }
    }
}

/// Pipeline and per-session buffers for the model viewer
pub struct ViewerRenderer {
    pipeline: wgpu::RenderPipeline,
    uniform_buffer: wgpu::Buffer,
    uniform_bind_group: wgpu::BindGroup,
    model: Option<ModelGpu>,
}

impl ViewerRenderer {
    pub fn new(device: &wgpu::Device, target_format: wgpu::TextureFormat) -> Self {
        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("viewer_model_shader"),
            source: wgpu::ShaderSource::Wgsl(std::borrow::Cow::Borrowed(include_str!(
                "shaders/model.wgsl"
            ))),
        });

        let uniform_bind_group_layout =
            device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                label: Some("viewer_uniform_bgl"),
                entries: &[wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: None,
                    },
                    count: None,
                }],
            });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("viewer_pipeline_layout"),
            bind_group_layouts: &[&uniform_bind_group_layout],
            push_constant_ranges: &[],
        });

        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("viewer_pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: "vs_main",
                buffers: &[MeshVertex::desc()],
                compilation_options: Default::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: "fs_main",
                targets: &[Some(wgpu::ColorTargetState {
                    format: target_format,
                    blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: Default::default(),
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                // Product bundles come from arbitrary exporters; draw
                // double-sided rather than trusting their winding.
                cull_mode: None,
                unclipped_depth: false,
                polygon_mode: wgpu::PolygonMode::Fill,
                conservative: false,
            },
            // The host configures its render pass with a depth attachment;
            // pipelines used inside egui paint callbacks must be compatible.
            depth_stencil: Some(wgpu::DepthStencilState {
                format: wgpu::TextureFormat::Depth24Plus,
                depth_write_enabled: true,
                depth_compare: wgpu::CompareFunction::LessEqual,
                stencil: wgpu::StencilState::default(),
                bias: wgpu::DepthBiasState::default(),
            }),
            multisample: wgpu::MultisampleState::default(),
            multiview: None,
            cache: None,
        });

        let uniforms = ViewerUniforms {
            view_proj: Matrix4::identity().into(),
            model: Matrix4::identity().into(),
            front_light: [0.0, 0.0, 1.0, 1.0],
            top_light: [0.0, 1.0, 0.0, 0.5],
            ambient: [1.0, 1.0, 1.0, 0.5],
        };
        let uniform_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("viewer_uniform_buffer"),
            contents: bytemuck::bytes_of(&uniforms),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });
        let uniform_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("viewer_uniform_bg"),
            layout: &uniform_bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buffer.as_entire_binding(),
            }],
        });

        Self {
            pipeline,
            uniform_buffer,
            uniform_bind_group,
            model: None,
        }
    }

    /// Make the uploaded geometry match session `generation`. When the
    /// generation changes, the previous session's buffers are dropped
    /// before the replacement is created — teardown precedes init.
    pub fn ensure_model(&mut self, device: &wgpu::Device, generation: u64, model: &Model) {
        if self
            .model
            .as_ref()
            .is_some_and(|gpu| gpu.generation == generation)
        {
            return;
        }
        self.model = None;
        self.model = Some(ModelGpu::upload(device, generation, model));
    }

    /// Drop the current session's geometry (nothing ready to draw).
    pub fn release_model(&mut self) {
        self.model = None;
    }

    /// Generation of the currently uploaded geometry, if any.
    pub fn uploaded_generation(&self) -> Option<u64> {
        self.model.as_ref().map(|gpu| gpu.generation)
    }

    pub fn update_uniforms(
        &self,
        queue: &wgpu::Queue,
        view_proj: Matrix4<f32>,
        model_matrix: Matrix4<f32>,
        lighting: &LightingParams,
    ) {
        let [fx, fy, fz] = lighting.front_direction;
        let [tx, ty, tz] = lighting.top_direction;
        let uniforms = ViewerUniforms {
            view_proj: view_proj.into(),
            model: model_matrix.into(),
            front_light: [fx, fy, fz, lighting.front_intensity],
            top_light: [tx, ty, tz, lighting.top_intensity],
            ambient: [1.0, 1.0, 1.0, lighting.ambient_strength],
        };
        queue.write_buffer(&self.uniform_buffer, 0, bytemuck::bytes_of(&uniforms));
    }

    pub fn paint(&self, render_pass: &mut wgpu::RenderPass<'_>) {
        let Some(model) = &self.model else {
            return;
        };
        render_pass.set_pipeline(&self.pipeline);
        render_pass.set_bind_group(0, &self.uniform_bind_group, &[]);
        render_pass.set_vertex_buffer(0, model.vertex_buffer.slice(..));
        render_pass.set_index_buffer(model.index_buffer.slice(..), wgpu::IndexFormat::Uint32);
        render_pass.draw_indexed(0..model.index_count, 0, 0..1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vitrine_core::{Point3, Vector3};

    #[test]
    fn vertex_layout_matches_struct_size() {
        let desc = MeshVertex::desc();
        assert_eq!(desc.array_stride, 36);
        assert_eq!(desc.attributes.len(), 3);
        assert_eq!(desc.attributes[1].offset, 12);
        assert_eq!(desc.attributes[2].offset, 24);
    }

    #[test]
    fn uniforms_are_16_byte_aligned() {
        assert_eq!(std::mem::size_of::<ViewerUniforms>() % 16, 0);
    }

    #[test]
    fn model_flattens_to_matching_vertices() {
        let model = Model {
            vertices: vec![Point3::new(1.0, 2.0, 3.0), Point3::new(4.0, 5.0, 6.0)],
            normals: vec![Vector3::y(), Vector3::x()],
            colors: vec![[1.0, 0.0, 0.0], [0.0, 1.0, 0.0]],
            indices: vec![0, 1, 0],
        };
        let vertices = model_to_vertices(&model);
        assert_eq!(vertices.len(), 2);
        assert_eq!(vertices[0].position, [1.0, 2.0, 3.0]);
        assert_eq!(vertices[1].normal, [1.0, 0.0, 0.0]);
        assert_eq!(vertices[1].color, [0.0, 1.0, 0.0]);
    }
}
