//! Emission backend for generated units.
//! Renders an [`OutputUnit`] into Rust source through a MiniJinja template.
use crate::constants::DEFAULT_RUNTIME_CRATE;
use crate::error::{Error, Result};
use crate::model::OutputUnit;
use minijinja::{context, Environment};

const UNIT_TEMPLATE: &str = r#"// @generated by localizer-gen from {{ unit.source }}. Do not edit.

static {{ unit.holder.name }}: {{ runtime }}::BundleHolder = {{ runtime }}::BundleHolder::new({{ unit.holder.bundle | rust_str }});
{% for accessor in unit.accessors %}

{{ accessor.template | doc_comment }}
#[allow(non_snake_case)]
pub fn {{ accessor.eager }}({% for param in accessor.params %}{{ param }}: impl ::std::fmt::Display{% if not loop.last %}, {% endif %}{% endfor %}) -> String {
    {{ unit.holder.name }}.format({{ accessor.key | rust_str }}, &[{% for param in accessor.params %}{{ param }}.to_string(){% if not loop.last %}, {% endif %}{% endfor %}])
}

{{ accessor.template | doc_comment }}
#[allow(non_snake_case)]
pub fn {{ accessor.deferred }}({% for param in accessor.params %}{{ param }}: impl ::std::fmt::Display{% if not loop.last %}, {% endif %}{% endfor %}) -> {{ runtime }}::Localizable {
    {{ runtime }}::Localizable::new(&{{ unit.holder.name }}, {{ accessor.key | rust_str }}, vec![{% for param in accessor.params %}{{ param }}.to_string(){% if not loop.last %}, {% endif %}{% endfor %}])
}
{% endfor %}
"#;

/// Trait for unit emission backends.
pub trait UnitRenderer {
    /// Renders one unit to the full text of its source file.
    ///
    /// # Arguments
    /// * `unit` - Fully assembled unit
    ///
    /// # Returns
    /// * `Result<String>` - Source file contents
    fn render(&self, unit: &OutputUnit) -> Result<String>;
}

/// MiniJinja-based unit renderer.
pub struct MiniJinjaRenderer {
    /// MiniJinja environment instance
    env: Environment<'static>,
    /// Path of the runtime crate providing `BundleHolder` and `Localizable`
    runtime: String,
}

impl MiniJinjaRenderer {
    /// Creates a renderer whose output refers to the given runtime crate path.
    pub fn new<S: Into<String>>(runtime: S) -> Self {
        let mut env = Environment::new();
        env.set_trim_blocks(true);
        env.set_keep_trailing_newline(true);
        env.add_filter("doc_comment", doc_comment);
        env.add_filter("rust_str", rust_str);
        Self {
            env,
            runtime: runtime.into(),
        }
    }
}

impl Default for MiniJinjaRenderer {
    fn default() -> Self {
        MiniJinjaRenderer::new(DEFAULT_RUNTIME_CRATE)
    }
}

impl UnitRenderer for MiniJinjaRenderer {
    fn render(&self, unit: &OutputUnit) -> Result<String> {
        let tmpl = self
            .env
            .template_from_str(UNIT_TEMPLATE)
            .map_err(Error::RenderError)?;

        tmpl.render(context! { unit => unit, runtime => &self.runtime })
            .map_err(Error::RenderError)
    }
}

/// Turns template text into `///` lines, escaping `&` and `<`.
fn doc_comment(value: String) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace("\r\n", "\n")
        .replace('\r', "\n")
        .split('\n')
        .map(|line| {
            if line.is_empty() {
                "///".to_string()
            } else {
                format!("/// {}", line)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Quotes a value as a Rust string literal.
fn rust_str(value: String) -> String {
    format!("{:?}", value)
}
