//! geomgen core - lathe geometry shader generation
//!
//! This crate provides:
//! - Segment count parsing and the derived shader constants
//! - The built-in GLSL template, embedded at compile time
//! - Named placeholder substitution
//!
//! ```
//! let src = geomgen_core::generate("4").unwrap();
//! assert!(src.contains("max_vertices = 10"));
//! ```

pub mod error;
pub mod params;
pub mod shaders;
pub mod template;

pub use error::{GenerateError, ParseError, TemplateError};
pub use params::{Segments, ShaderParams};
pub use template::render_template;

use std::ffi::OsStr;

/// Render the built-in lathe shader
pub fn render(params: &ShaderParams) -> Result<String, TemplateError> {
    render_template(shaders::builtin::LATHE_GEOMETRY, params)
}

/// Parse a segment count, derive the constants and render the shader
pub fn generate(arg: impl AsRef<OsStr>) -> Result<String, GenerateError> {
    let segments = Segments::parse_os(arg.as_ref())?;
    let params = ShaderParams::from_segments(&segments);
    log::debug!(
        "segments={} max_vertices={} max_segments={}",
        segments,
        params.max_vertices,
        params.max_segments
    );
    Ok(render(&params)?)
}
