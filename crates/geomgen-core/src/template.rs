//! Named placeholder substitution
//!
//! Placeholders are written `{{name}}`. Everything else, single GLSL braces
//! included, passes through untouched.

use num_bigint::BigInt;

use crate::error::TemplateError;
use crate::params::ShaderParams;

const OPEN: &str = "{{";
const CLOSE: &str = "}}";

fn lookup<'a>(name: &str, params: &'a ShaderParams) -> Option<&'a BigInt> {
    match name {
        "max_vertices" => Some(&params.max_vertices),
        "max_segments" => Some(&params.max_segments),
        _ => None,
    }
}

/// Substitute `params` into every placeholder of `template`
pub fn render_template(template: &str, params: &ShaderParams) -> Result<String, TemplateError> {
    let mut out = String::with_capacity(template.len() + 16);
    let mut rest = template;
    let mut offset = 0;

    while let Some(start) = rest.find(OPEN) {
        out.push_str(&rest[..start]);

        let after_open = &rest[start + OPEN.len()..];
        let end = after_open
            .find(CLOSE)
            .ok_or(TemplateError::Unterminated(offset + start))?;

        let name = after_open[..end].trim();
        let value = lookup(name, params)
            .ok_or_else(|| TemplateError::UnknownPlaceholder(name.to_string()))?;
        out.push_str(&value.to_string());

        let consumed = start + OPEN.len() + end + CLOSE.len();
        offset += consumed;
        rest = &rest[consumed..];
    }

    out.push_str(rest);
    Ok(out)
}
