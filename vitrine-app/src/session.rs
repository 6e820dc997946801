//! Render session lifecycle
//!
//! Each product selection owns one render session: a fresh orientation, a
//! fresh overlay timer, and one in-flight asset load. Sessions are numbered
//! by a monotonic generation; results tagged with an older generation belong
//! to a torn-down session and are discarded. GPU resources downstream are
//! keyed by the same generation, so starting a new session implicitly tears
//! the old one down before anything new is built.

use std::sync::Arc;
use std::time::{Duration, Instant};

use nalgebra::{Matrix4, Rotation3, Vector3};
use vitrine_assets::LoadResult;
use vitrine_core::Model;

/// Where a session is in its lifecycle
#[derive(Debug, Clone)]
pub enum SessionPhase {
    /// Asset decode in flight
    Loading,
    /// Model decoded, normalized, and ready to draw
    Ready(Arc<Model>),
    /// Decode failed; the message is shown with a retry action
    Failed(String),
}

/// State of the active product's render session
pub struct RenderSession {
    generation: u64,
    phase: SessionPhase,
    started: Instant,
    yaw: f32,
    pitch: f32,
    dragging: bool,
    last_pointer: Option<(f32, f32)>,
    loaded_notified: bool,
}

impl RenderSession {
    pub fn new() -> Self {
        Self {
            generation: 0,
            phase: SessionPhase::Loading,
            started: Instant::now(),
            yaw: 0.0,
            pitch: 0.0,
            dragging: false,
            last_pointer: None,
            loaded_notified: false,
        }
    }

    /// Tear down the current session and start the next one. Orientation,
    /// phase, and the overlay timer all reset; the returned generation tags
    /// the load request so stale deliveries can be recognized.
    pub fn begin_next(&mut self) -> u64 {
        self.generation += 1;
        self.phase = SessionPhase::Loading;
        self.started = Instant::now();
        self.yaw = 0.0;
        self.pitch = 0.0;
        self.dragging = false;
        self.last_pointer = None;
        self.loaded_notified = false;
        self.generation
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn phase(&self) -> &SessionPhase {
        &self.phase
    }

    pub fn model(&self) -> Option<Arc<Model>> {
        match &self.phase {
            SessionPhase::Ready(model) => Some(Arc::clone(model)),
            _ => None,
        }
    }

    /// Accept a load result. Results from a previous generation are dropped;
    /// the session they belonged to no longer exists. Returns true exactly
    /// once per session, on the delivery that makes the model ready — the
    /// viewer's loaded signal.
    pub fn deliver(&mut self, result: LoadResult, normalize_target: f32) -> bool {
        if result.generation != self.generation {
            log::debug!(
                "dropping stale load result for generation {} (current {})",
                result.generation,
                self.generation
            );
            return false;
        }
        match result.result {
            Ok(mut model) => {
                model.normalize(normalize_target);
                self.phase = SessionPhase::Ready(Arc::new(model));
                if self.loaded_notified {
                    return false;
                }
                self.loaded_notified = true;
                true
            }
            Err(err) => {
                self.phase = SessionPhase::Failed(err.to_string());
                false
            }
        }
    }

    /// True when the overlay's fallback timer has expired for this session.
    pub fn overlay_expired(&self, timeout: Duration) -> bool {
        self.started.elapsed() >= timeout
    }

    /// Per-frame orientation update: auto-rotate unless the user is holding
    /// the model.
    pub fn tick(&mut self, auto_rotate_speed: f32) {
        if !self.dragging && matches!(self.phase, SessionPhase::Ready(_)) {
            self.yaw += auto_rotate_speed;
        }
    }

    /// Feed the pointer state for this frame. Dragging maps pointer deltas
    /// to yaw and pitch; releasing the button resumes auto-rotation from the
    /// dragged orientation. Until the model is ready there is nothing to
    /// rotate, so deltas are ignored and the model cannot arrive pre-spun.
    pub fn pointer(&mut self, pressed: bool, position: Option<(f32, f32)>, sensitivity: f32) {
        if !pressed {
            self.dragging = false;
            self.last_pointer = None;
            return;
        }
        if let (Some((x, y)), Some((last_x, last_y))) = (position, self.last_pointer) {
            if self.dragging && matches!(self.phase, SessionPhase::Ready(_)) {
                self.yaw += (x - last_x) * sensitivity;
                self.pitch += (y - last_y) * sensitivity;
            }
        }
        self.dragging = true;
        self.last_pointer = position;
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    /// Model rotation: pitch about X applied after yaw about Y.
    pub fn model_matrix(&self) -> Matrix4<f32> {
        let pitch = Rotation3::from_axis_angle(&Vector3::x_axis(), self.pitch);
        let yaw = Rotation3::from_axis_angle(&Vector3::y_axis(), self.yaw);
        (pitch * yaw).to_homogeneous()
    }
}

impl Default for RenderSession {
    fn default() -> Self {
        Self::new()
    }
}
