//! Markup-producing renderers for the built-in widgets.

use super::{attrs_to_html, html_escape};
use crate::error::Result;
use crate::field::Field;
use crate::renderer::{FieldRenderer, Options};
use crate::value::FieldValue;

/// The built-in widget kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Widget {
    /// `<input>` of the given type.
    Input(&'static str),
    /// `<textarea>`.
    Textarea,
    /// A single checkbox.
    Checkbox,
    /// `<select>`, optionally multi-valued.
    Select { multiple: bool },
    /// One radio button per choice.
    RadioSet,
    /// One checkbox per choice.
    CheckboxSet,
    /// `<input type="hidden">`.
    Hidden,
}

/// Renders one field with a built-in widget.
#[derive(Debug, Clone)]
pub struct WidgetRenderer {
    field: Field,
    widget: Widget,
}

impl WidgetRenderer {
    /// Binds a widget to a field.
    pub const fn new(field: Field, widget: Widget) -> Self {
        Self { field, widget }
    }

    fn value_text(&self) -> String {
        self.field
            .value()
            .map(ToString::to_string)
            .unwrap_or_default()
    }

    fn choices(&self) -> Vec<(FieldValue, String)> {
        self.field
            .choices()
            .cloned()
            .map(crate::value::Choices::into_pairs)
            .unwrap_or_default()
    }

    fn is_selected(&self, choice: &FieldValue) -> bool {
        self.field.value().is_some_and(|v| v.contains(choice))
    }

    fn render_choice_inputs(&self, input_type: &str) -> String {
        let name = html_escape(self.field.name());
        self.choices()
            .iter()
            .map(|(value, label)| {
                let checked = if self.is_selected(value) {
                    r#" checked="checked""#
                } else {
                    ""
                };
                format!(
                    r#"<label><input type="{input_type}" name="{name}" value="{}"{checked}> {}</label>"#,
                    html_escape(&value.to_string()),
                    html_escape(label)
                )
            })
            .collect()
    }
}

impl FieldRenderer for WidgetRenderer {
    fn render(&self, _options: &Options) -> Result<String> {
        let name = html_escape(self.field.name());
        let attrs = attrs_to_html(self.field.attrs());
        let value = html_escape(&self.value_text());

        let html = match self.widget {
            Widget::Input("password") => {
                format!(r#"<input type="password" id="{name}" name="{name}"{attrs}>"#)
            }
            Widget::Input(input_type) => format!(
                r#"<input type="{input_type}" id="{name}" name="{name}" value="{value}"{attrs}>"#
            ),
            Widget::Hidden => {
                format!(r#"<input type="hidden" id="{name}" name="{name}" value="{value}"{attrs}>"#)
            }
            Widget::Textarea => {
                format!(r#"<textarea id="{name}" name="{name}"{attrs}>{value}</textarea>"#)
            }
            Widget::Checkbox => {
                let checked = if self.field.value().is_some_and(FieldValue::is_truthy) {
                    r#" checked="checked""#
                } else {
                    ""
                };
                format!(r#"<input type="checkbox" id="{name}" name="{name}" value="true"{checked}{attrs}>"#)
            }
            Widget::Select { multiple } => {
                let multiple = if multiple { r#" multiple="multiple""# } else { "" };
                let options: String = self
                    .choices()
                    .iter()
                    .map(|(v, l)| {
                        let selected = if self.is_selected(v) {
                            r#" selected="selected""#
                        } else {
                            ""
                        };
                        format!(
                            r#"<option value="{}"{selected}>{}</option>"#,
                            html_escape(&v.to_string()),
                            html_escape(l)
                        )
                    })
                    .collect();
                format!(r#"<select id="{name}" name="{name}"{multiple}{attrs}>{options}</select>"#)
            }
            Widget::RadioSet => self.render_choice_inputs("radio"),
            Widget::CheckboxSet => self.render_choice_inputs("checkbox"),
        };
        Ok(html)
    }

    fn render_readonly(&self, _options: &Options) -> Result<String> {
        let text = match self.widget {
            Widget::Hidden => String::new(),
            Widget::Input("password") => "********".to_string(),
            Widget::Select { .. } | Widget::RadioSet | Widget::CheckboxSet => {
                let labels: Vec<String> = self
                    .choices()
                    .into_iter()
                    .filter(|(v, _)| self.is_selected(v))
                    .map(|(_, l)| l)
                    .collect();
                html_escape(&labels.join(", "))
            }
            _ => html_escape(&self.value_text()),
        };
        Ok(text)
    }
}
