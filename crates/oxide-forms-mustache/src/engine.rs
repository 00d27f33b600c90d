//! Template engine adapter.
//!
//! [`MustacheEngine`] owns an ordered template search path. Templates are
//! looked up by name as `<name>.mustache` in each directory in turn; the
//! first match wins.
//!
//! A process-wide engine can be installed with [`configure`]. Renderers
//! that are not given their own directories copy the search path of the
//! engine current at their construction; reconfiguring later does not
//! affect them.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, PoisonError, RwLock};

use mustache::Data;
use oxide_forms::{FieldSet, Grid};
use tracing::debug;

use crate::error::{MustacheError, Result};
use crate::proxies::RenderOptions;

/// File extension of template files.
pub const TEMPLATE_EXTENSION: &str = "mustache";

/// The directory holding the templates shipped with this crate.
///
/// This is the crate's source directory on the machine that compiled it.
/// A binary moved elsewhere may not find it on disk; lookups that fall
/// through to this directory are then served from [`bundled_template`].
pub fn bundled_directory() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("templates")
}

macro_rules! bundled {
    ($($name:literal),* $(,)?) => {
        &[$(($name, include_str!(concat!("../templates/", $name, ".mustache")))),*]
    };
}

static BUNDLED_TEMPLATES: &[(&str, &str)] = bundled![
    "field_checkbox",
    "field_checkbox_set",
    "field_number",
    "field_password",
    "field_password_readonly",
    "field_radio_set",
    "field_readonly",
    "field_select",
    "field_select_readonly",
    "field_text",
    "field_textarea",
    "fieldset",
    "fieldset_readonly",
    "grid",
    "grid_readonly",
];

/// The compiled-in copy of a bundled template. A trailing `.mustache` on
/// the name is ignored.
pub fn bundled_template(name: &str) -> Option<&'static str> {
    let name = normalize_name(name);
    BUNDLED_TEMPLATES
        .iter()
        .find(|(bundled, _)| *bundled == name)
        .map(|(_, text)| *text)
}

/// Loads and renders Mustache templates from a search path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MustacheEngine {
    directories: Vec<PathBuf>,
}

impl MustacheEngine {
    /// Creates an engine searching exactly the given directories.
    pub fn new<I, P>(directories: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        Self {
            directories: directories.into_iter().map(Into::into).collect(),
        }
    }

    /// Creates an engine searching the given directories, then the bundled
    /// template directory.
    pub fn with_bundled<I, P>(directories: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        let mut engine = Self::new(directories);
        engine.directories.push(bundled_directory());
        engine
    }

    /// The search path, in lookup order.
    pub fn directories(&self) -> &[PathBuf] {
        &self.directories
    }

    /// Finds the file for a template name. A trailing `.mustache` on the
    /// name is ignored.
    pub fn find_template(&self, name: &str) -> Result<PathBuf> {
        let name = normalize_name(name);
        let file_name = format!("{name}.{TEMPLATE_EXTENSION}");
        for dir in &self.directories {
            let candidate = dir.join(&file_name);
            if candidate.is_file() {
                debug!(template = name, path = %candidate.display(), "found template");
                return Ok(candidate);
            }
        }
        debug!(template = name, "template not found in search path");
        Err(MustacheError::TemplateNotFound {
            name: name.to_string(),
            directories: self.directories.clone(),
        })
    }

    /// Returns the raw text of a template. When no directory has the file
    /// and the bundled directory is on the search path, the compiled-in
    /// copy of a bundled template is used.
    pub fn load_template(&self, name: &str) -> Result<String> {
        match self.find_template(name) {
            Ok(path) => {
                fs::read_to_string(&path).map_err(|source| MustacheError::Io { path, source })
            }
            Err(err) => match self.embedded_template(name) {
                Some(text) => {
                    debug!(template = name, "using compiled-in bundled template");
                    Ok(text.to_string())
                }
                None => Err(err),
            },
        }
    }

    fn embedded_template(&self, name: &str) -> Option<&'static str> {
        let bundled = bundled_directory();
        if self.directories.iter().any(|dir| *dir == bundled) {
            bundled_template(name)
        } else {
            None
        }
    }

    /// Renders template text against a context.
    pub fn render(&self, template: &str, context: &Data) -> Result<String> {
        let compiled = mustache::compile_str(template)?;
        let mut out = Vec::new();
        compiled.render_data(&mut out, context)?;
        Ok(String::from_utf8(out)?)
    }

    /// Loads a template by name and renders it against a context.
    pub fn render_template(&self, name: &str, context: &Data) -> Result<String> {
        let template = self.load_template(name)?;
        self.render(&template, context)
    }

    /// Renders a template by name with every option passed through
    /// [`proxy_object`](crate::proxy_object).
    pub fn render_named(&self, name: &str, options: &RenderOptions) -> Result<String> {
        let context = options.to_context().into_data();
        self.render_template(name, &context)
    }

    /// Renders a fieldset with the `fieldset` template, or
    /// `fieldset_readonly` when the set is read-only. The set is available
    /// to the template as `fieldset`.
    pub fn render_fieldset(&self, fieldset: &FieldSet) -> Result<String> {
        let name = if fieldset.is_readonly() {
            "fieldset_readonly"
        } else {
            "fieldset"
        };
        let options = RenderOptions::new().set("fieldset", fieldset.clone());
        self.render_named(name, &options)
    }

    /// Renders a grid with the `grid` template, or `grid_readonly` when the
    /// grid is read-only. The grid is available to the template as `grid`.
    pub fn render_grid(&self, grid: &Grid) -> Result<String> {
        let name = if grid.is_readonly() {
            "grid_readonly"
        } else {
            "grid"
        };
        let options = RenderOptions::new().set("grid", grid.clone());
        self.render_named(name, &options)
    }
}

impl Default for MustacheEngine {
    /// An engine searching only the bundled templates.
    fn default() -> Self {
        Self::with_bundled(Vec::<PathBuf>::new())
    }
}

fn normalize_name(name: &str) -> &str {
    name.strip_suffix(".mustache").unwrap_or(name)
}

static CURRENT: RwLock<Option<Arc<MustacheEngine>>> = RwLock::new(None);

/// Installs a process-wide engine searching `directories` followed by the
/// bundled templates, replacing any previous one.
pub fn configure<I, P>(directories: I) -> Arc<MustacheEngine>
where
    I: IntoIterator<Item = P>,
    P: Into<PathBuf>,
{
    let engine = Arc::new(MustacheEngine::with_bundled(directories));
    debug!(directories = ?engine.directories(), "configured mustache engine");
    *CURRENT.write().unwrap_or_else(PoisonError::into_inner) = Some(Arc::clone(&engine));
    engine
}

/// The process-wide engine, if one was configured.
pub fn current_engine() -> Option<Arc<MustacheEngine>> {
    CURRENT
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .clone()
}

/// Removes the process-wide engine.
pub fn reset() {
    *CURRENT.write().unwrap_or_else(PoisonError::into_inner) = None;
}

/// The process-wide engine, or one searching only the bundled templates.
pub(crate) fn current_or_default() -> Arc<MustacheEngine> {
    current_engine().unwrap_or_else(|| Arc::new(MustacheEngine::default()))
}
