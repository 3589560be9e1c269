//! Rendering module
//!
//! `scene` builds a display list from simulation state, `shapes` flattens it
//! into colored triangles and `pipeline` draws them with wgpu.

pub mod glyphs;
pub mod pipeline;
pub mod scene;
pub mod shapes;
pub mod vertex;

pub use pipeline::RenderState;
pub use scene::{Color, DisplayList, DrawCmd, compose};
pub use shapes::{Tessellation, tessellate};
