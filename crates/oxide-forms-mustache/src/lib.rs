//! # oxide-forms-mustache
//!
//! Renders [`oxide_forms`] fields, fieldsets and grids through Mustache
//! templates.
//!
//! This crate provides:
//! - [`MustacheEngine`]: an ordered template search path with name lookup
//!   and rendering, plus a process-wide engine set by [`configure`]
//! - Proxies ([`FieldProxy`], [`FieldSetProxy`], [`GridProxy`]) exposing
//!   host objects to templates
//! - [`MustacheFieldRenderer`]: a [`FieldRenderer`](oxide_forms::FieldRenderer)
//!   driven by a [`RendererConfig`]
//! - A catalog of renderers per field type and kind, with bundled templates
//!
//! ## Quick Start
//!
//! ```rust
//! use oxide_forms::fields::text_field;
//! use oxide_forms::FieldSet;
//! use oxide_forms_mustache::get_default_renderers;
//!
//! let fieldset = FieldSet::new()
//!     .field(text_field("name", "Name", 50, true).with_value("Ada"))
//!     .renderers(get_default_renderers());
//!
//! let html = fieldset.get("name").unwrap().render().unwrap();
//! assert!(html.contains(r#"name="name""#));
//! assert!(html.contains(r#"value="Ada""#));
//! ```
//!
//! ## Custom Templates
//!
//! Directories passed to [`configure`] are searched before the bundled
//! templates, so a `field_text.mustache` there replaces the bundled one.
//!
//! ```rust
//! use oxide_forms::fields::text_field;
//! use oxide_forms_mustache::{MustacheEngine, MustacheFieldRenderer, RenderOptions, RendererConfig};
//!
//! let dir = std::env::temp_dir().join("oxide-forms-mustache-doc");
//! std::fs::create_dir_all(&dir).unwrap();
//! std::fs::write(dir.join("greeting.mustache"), "{{label}}: {{value}}").unwrap();
//!
//! let engine = MustacheEngine::with_bundled([&dir]);
//! let field = text_field("name", "Name", 50, false).with_value("Ada");
//! let renderer =
//!     MustacheFieldRenderer::with_engine(field, &RendererConfig::new("greeting"), &engine).unwrap();
//!
//! assert_eq!(renderer.render(&RenderOptions::new()).unwrap(), "Name: Ada");
//! ```

pub mod catalog;
pub mod context;
mod engine;
mod error;
mod proxies;
mod renderer;
pub mod settings;

pub use catalog::get_default_renderers;
pub use engine::{
    bundled_directory, bundled_template, configure, current_engine, reset, MustacheEngine,
    TEMPLATE_EXTENSION,
};
pub use error::{MustacheError, Result};
pub use proxies::{
    proxy_errors, proxy_fields, proxy_object, ContextObject, DictProxy, ErrorProxy, FieldProxy,
    FieldSetProxy, GridProxy, LabelProxy, Proxy, RenderOptions, RowProxy,
};
pub use renderer::{
    ChoiceProxy, MustacheFieldRenderer, RendererConfig, RendererKind, DEFAULT_READONLY_TEMPLATE,
};
pub use settings::{configure_from_settings, MustacheSettings};
