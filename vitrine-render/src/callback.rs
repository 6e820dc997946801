//! egui paint callback for the model viewer
//!
//! The UI thread builds a [`ViewerDrawData`] snapshot each frame; `prepare`
//! syncs GPU buffers and uniforms, `paint` draws into egui's render pass.
//! The shared [`ViewerRenderer`] lives in egui-wgpu's callback resources.

use std::sync::Arc;

use nalgebra::Matrix4;
use vitrine_core::Model;

use crate::{LightingParams, ViewerRenderer};

/// Per-frame snapshot of everything the model pass needs
pub struct ViewerDrawData {
    /// Render session the geometry belongs to
    pub generation: u64,
    /// Decoded model, or `None` while the session is still loading
    pub model: Option<Arc<Model>>,
    pub model_matrix: Matrix4<f32>,
    pub view_proj: Matrix4<f32>,
    pub lighting: LightingParams,
    pub target_format: wgpu::TextureFormat,
}

pub struct ViewerCallback {
    pub draw: ViewerDrawData,
}

impl egui_wgpu::CallbackTrait for ViewerCallback {
    fn prepare(
        &self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        _screen_descriptor: &egui_wgpu::ScreenDescriptor,
        _egui_encoder: &mut wgpu::CommandEncoder,
        callback_resources: &mut egui_wgpu::CallbackResources,
    ) -> Vec<wgpu::CommandBuffer> {
        let renderer = callback_resources
            .entry::<ViewerRenderer>()
            .or_insert_with(|| ViewerRenderer::new(device, self.draw.target_format));

        match &self.draw.model {
            Some(model) => renderer.ensure_model(device, self.draw.generation, model),
            None => renderer.release_model(),
        }
        renderer.update_uniforms(
            queue,
            self.draw.view_proj,
            self.draw.model_matrix,
            &self.draw.lighting,
        );
        Vec::new()
    }

    fn paint(
        &self,
        info: egui::PaintCallbackInfo,
        render_pass: &mut wgpu::RenderPass<'static>,
        callback_resources: &egui_wgpu::CallbackResources,
    ) {
        let Some(renderer) = callback_resources.get::<ViewerRenderer>() else {
            return;
        };
        let viewport = info.viewport_in_pixels();
        render_pass.set_viewport(
            viewport.left_px as f32,
            viewport.top_px as f32,
            viewport.width_px as f32,
            viewport.height_px as f32,
            0.0,
            1.0,
        );
        renderer.paint(render_pass);
    }
}
