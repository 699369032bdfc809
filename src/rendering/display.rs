//! # Display Management
//!
//! Macroquad-backed [`FrameSurface`]: star texture, quad batching and frame
//! pacing.

use crate::rendering::{FrameLimiter, FrameSurface};
use crate::{FrameSignal, InputHandler, StarQuad, StarfieldConfig, StarfieldError, StarfieldResult};
use log::{debug, info};
use macroquad::models::{draw_mesh, Mesh, Vertex};
use macroquad::prelude::*;

/// Quads per mesh. Six indices per quad must stay under macroquad's default
/// per-draw-call index capacity of 5000.
pub const QUADS_PER_MESH: usize = 800;

/// Texture coordinates for the four corners, matching corner order.
const CORNER_UVS: [(f32, f32); 4] = [(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)];

/// Loads the star texture with linear filtering.
pub async fn load_star_texture(path: &str) -> StarfieldResult<Texture2D> {
    let texture = load_texture(path)
        .await
        .map_err(|e| StarfieldError::AssetLoad {
            path: path.to_string(),
            message: e.to_string(),
        })?;
    texture.set_filter(FilterMode::Linear);
    debug!(
        "Loaded star texture '{}' ({}x{})",
        path,
        texture.width(),
        texture.height()
    );
    Ok(texture)
}

/// Appends one quad's vertices and indices to `mesh`.
fn push_quad(mesh: &mut Mesh, quad: &StarQuad, offset: Vec2) {
    let base = mesh.vertices.len() as u16;
    let level = quad.color.level();
    let color = Color::from_rgba(level, level, level, 255);

    for (corner, (u, v)) in quad.geometry.corners.iter().zip(CORNER_UVS) {
        mesh.vertices.push(Vertex::new(
            corner.x + offset.x,
            corner.y + offset.y,
            0.0,
            u,
            v,
            color,
        ));
    }
    mesh.indices
        .extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
}

/// Starfield window surface.
pub struct MacroquadSurface {
    /// Reused between batches and frames
    mesh: Mesh,
    input: InputHandler,
    limiter: FrameLimiter,
}

impl MacroquadSurface {
    /// Loads the star texture and prepares the window.
    ///
    /// Fails fast if the texture cannot be loaded.
    pub async fn new(config: &StarfieldConfig) -> StarfieldResult<Self> {
        let texture = load_star_texture(&config.texture_path).await?;

        show_mouse(false);
        let input = InputHandler::new();
        input.install();

        info!(
            "Display ready: {}x{} surface, frame cap {} fps",
            screen_width(),
            screen_height(),
            config.max_fps
        );

        Ok(Self {
            mesh: Mesh {
                vertices: Vec::with_capacity(QUADS_PER_MESH * 4),
                indices: Vec::with_capacity(QUADS_PER_MESH * 6),
                texture: Some(texture),
            },
            input,
            limiter: FrameLimiter::new(config.max_fps),
        })
    }

    /// Translation that puts the world origin at the center of the surface.
    fn view_center() -> Vec2 {
        vec2(screen_width() * 0.5, screen_height() * 0.5)
    }
}

impl FrameSurface for MacroquadSurface {
    fn poll_events(&mut self) -> FrameSignal {
        self.input.poll()
    }

    fn submit_quads(&mut self, quads: &[StarQuad]) {
        clear_background(BLACK);

        let offset = Self::view_center();
        for batch in quads.chunks(QUADS_PER_MESH) {
            self.mesh.vertices.clear();
            self.mesh.indices.clear();
            for quad in batch {
                push_quad(&mut self.mesh, quad, offset);
            }
            draw_mesh(&self.mesh);
        }
    }

    async fn present_and_wait_for_frame(&mut self) {
        next_frame().await;
        self.limiter.wait();
    }
}
