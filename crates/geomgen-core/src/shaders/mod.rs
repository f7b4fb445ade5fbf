//! GLSL templates for the geometry stage
//!
//! Each template lives in its own `.geom` file next to this module and is
//! compiled into the binary. Values are filled in by `template::render_template`.

/// Built-in templates included at compile time
pub mod builtin {
    /// Lathe shader - sweeps each input line around the Y axis into a
    /// triangle strip, `{{max_segments}}` steps per full turn
    pub const LATHE_GEOMETRY: &str = include_str!("lathe.geom");
}
