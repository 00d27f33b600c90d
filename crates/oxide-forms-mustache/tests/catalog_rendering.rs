//! Tests rendering fields, fieldsets and grids through the bundled
//! templates and the default renderer catalog.

mod common;
use common::*;

use oxide_forms::fields::{
    boolean_field, choice_field, hidden_field, integer_field, multiple_choice_field,
    password_field, radio_field, text_field, textarea_field,
};
use oxide_forms::{Choices, Field, FieldSet, Focus, Grid, ValidationErrors};
use oxide_forms_mustache::{get_default_renderers, MustacheEngine};

fn with_catalog(field: Field) -> Field {
    FieldSet::new()
        .field(field.clone())
        .renderers(get_default_renderers())
        .get(field.name())
        .cloned()
        .unwrap()
}

fn colors() -> Choices {
    Choices::pairs([("red", "Red"), ("blue", "Blue")])
}

#[test]
fn text_field_uses_text_template() {
    init_tracing();
    let field = with_catalog(
        text_field("name", "Name", 50, true)
            .with_value("Ada")
            .attr("size", "20"),
    );
    let html = field.render().unwrap();
    assert_eq!(
        html.trim_end(),
        r#"<input type="text" id="name" name="name" value="Ada" size="20">"#
    );
    assert_eq!(field.render_readonly().unwrap().trim_end(), "Ada");
}

#[test]
fn values_are_html_escaped() {
    let field = with_catalog(text_field("name", "Name", 50, false).with_value("<b>\"x\"</b>"));
    let html = field.render().unwrap();
    assert!(!html.contains("<b>"));
    assert!(html.contains("&lt;b&gt;"));
}

#[test]
fn integer_field_uses_number_template() {
    let field = with_catalog(integer_field("age", "Age", false).with_value(42_i64));
    let html = field.render().unwrap();
    assert!(html.contains(r#"type="number""#));
    assert!(html.contains(r#"value="42""#));
}

#[test]
fn password_never_shows_value() {
    let field = with_catalog(password_field("secret", "Secret", None).with_value("hunter2"));
    let html = field.render().unwrap();
    assert!(html.contains(r#"type="password""#));
    assert!(!html.contains("hunter2"));
    assert_eq!(field.render_readonly().unwrap().trim_end(), "********");
}

#[test]
fn textarea_renders_value_as_body() {
    let field = with_catalog(textarea_field("bio", "Bio", false).with_value("Hello"));
    let html = field.render().unwrap();
    assert!(html.starts_with(r#"<textarea id="bio" name="bio">Hello</textarea>"#));
}

#[test]
fn checkbox_selected_follows_value() {
    let checked = with_catalog(boolean_field("agree", "Agree").with_value(true));
    assert!(checked.render().unwrap().contains(" checked"));

    let unchecked = with_catalog(boolean_field("agree", "Agree").with_value(false));
    assert!(!unchecked.render().unwrap().contains(" checked"));

    let unset = with_catalog(boolean_field("agree", "Agree"));
    assert!(!unset.render().unwrap().contains(" checked"));
}

#[test]
fn dropdown_marks_selected_option() {
    let field = with_catalog(choice_field("color", "Color", colors(), false).with_value("blue"));
    let html = field.render().unwrap();
    assert!(html.contains(r#"<option value="red">Red</option>"#));
    assert!(html.contains(r#"<option value="blue" selected>Blue</option>"#));
    assert!(!html.contains("multiple"));
    assert_eq!(
        field.render_readonly().unwrap().trim_end(),
        r#"<span class="choice">Blue</span>"#
    );
}

#[test]
fn dropdown_accepts_label_keyed_choices() {
    let choices = Choices::by_label([("Red", "red"), ("Blue", "blue")]);
    let field = with_catalog(choice_field("color", "Color", choices, false).with_value("red"));
    let html = field.render().unwrap();
    assert!(html.contains(r#"<option value="red" selected>Red</option>"#));
}

#[test]
fn radio_set_renders_one_input_per_choice() {
    let field = with_catalog(radio_field("color", "Color", colors(), false).with_value("red"));
    let html = field.render().unwrap();
    assert_eq!(html.matches(r#"type="radio""#).count(), 2);
    assert!(html.contains(r#"name="color" value="red" checked"#));
    assert!(!html.contains(r#"value="blue" checked"#));
}

#[test]
fn checkbox_set_checks_every_member() {
    let field = with_catalog(
        multiple_choice_field(
            "tags",
            "Tags",
            Choices::pairs([("a", "A"), ("b", "B"), ("c", "C")]),
            false,
        )
        .with_value(vec!["a", "c"]),
    );
    let html = field.render().unwrap();
    assert_eq!(html.matches(r#"type="checkbox""#).count(), 3);
    assert!(html.contains(r#"value="a" checked"#));
    assert!(!html.contains(r#"value="b" checked"#));
    assert!(html.contains(r#"value="c" checked"#));
}

#[test]
fn hidden_field_keeps_host_renderer() {
    let field = with_catalog(hidden_field("token", Some("abc")));
    let html = field.render().unwrap();
    assert!(html.contains(r#"type="hidden""#));
    assert!(html.contains(r#"value="abc""#));
}

#[test]
fn focus_adds_autofocus_to_editable_field() {
    init_tracing();
    let fieldset = people()
        .focus(Focus::First)
        .renderers(get_default_renderers());
    let html = MustacheEngine::default().render_fieldset(&fieldset).unwrap();
    assert_eq!(html.matches(" autofocus").count(), 1);
    assert!(html.contains(r#"id="name" name="name" value="" autofocus"#));
    assert!(html.contains(r#"class="field even""#));
    assert!(html.contains(r#"class="field odd""#));

    let readonly = people()
        .focus(Focus::First)
        .readonly(true)
        .renderers(get_default_renderers());
    let html = MustacheEngine::default().render_fieldset(&readonly).unwrap();
    assert!(!html.contains("autofocus"));
}

#[test]
fn fieldset_renders_fields_errors_and_instructions() {
    init_tracing();
    let mut fieldset = FieldSet::new()
        .field(text_field("name", "Name", 50, true).instructions("Your full name"))
        .field(hidden_field("token", Some("abc")))
        .renderers(get_default_renderers());
    let mut errors = ValidationErrors::new();
    errors.add("name", "Please enter a value");
    errors.add_non_field("Form is incomplete");
    fieldset.set_errors(&errors).unwrap();

    let html = MustacheEngine::default().render_fieldset(&fieldset).unwrap();
    assert!(html.contains(r#"<div class="fieldset_error">Form is incomplete</div>"#));
    assert!(html.contains(r#"<input type="text" id="name" name="name""#));
    assert!(html.contains(r#"<span class="instructions">Your full name</span>"#));
    assert!(html.contains(r#"<span class="field_error">Please enter a value</span>"#));
    assert!(html.contains(r#"type="hidden""#));
    assert_eq!(html.matches("<label").count(), 1);
}

#[test]
fn readonly_fieldset_uses_readonly_templates() {
    let fieldset = FieldSet::new()
        .field(text_field("name", "Name", 50, false).with_value("Ada"))
        .field(password_field("secret", "Secret", None).with_value("hunter2"))
        .readonly(true)
        .renderers(get_default_renderers());

    let html = MustacheEngine::default().render_fieldset(&fieldset).unwrap();
    assert!(html.contains("<dt>Name</dt>"));
    assert!(html.contains("Ada"));
    assert!(html.contains("********"));
    assert!(!html.contains("hunter2"));
    assert!(!html.contains("<input"));
}

#[test]
fn grid_renders_one_row_per_record() {
    init_tracing();
    let template = people().renderers(get_default_renderers());
    let mut grid = Grid::new(template).bind(vec![
        record(&[("name", "Ada"), ("text", "first")]),
        record(&[("name", "Grace"), ("text", "second")]),
    ]);
    let mut errors = ValidationErrors::new();
    errors.add_non_field("Duplicate row");
    grid.set_row_errors(1, errors).unwrap();

    let html = MustacheEngine::default().render_grid(&grid).unwrap();
    assert!(html.contains("<th>Name</th><th>Text</th>"));
    assert!(html.contains(r#"<tr class="even">"#));
    assert!(html.contains(r#"<tr class="odd">"#));
    assert!(html.contains(r#"value="Ada""#));
    assert!(html.contains(r#"value="second""#));
    assert!(html.contains(r#"<tr class="row_error"><td>Duplicate row</td></tr>"#));
}

#[test]
fn field_output_is_not_reparsed_as_template() {
    init_tracing();
    for value in ["{{parity}}", "a {{ b"] {
        let fieldset = FieldSet::new()
            .field(text_field("name", "Name", 50, false).with_value(value))
            .renderers(get_default_renderers());
        let html = MustacheEngine::default().render_fieldset(&fieldset).unwrap();
        assert!(html.contains(&format!(r#"value="{value}""#)), "{html}");

        let readonly = fieldset.clone().readonly(true);
        let html = MustacheEngine::default().render_fieldset(&readonly).unwrap();
        assert!(html.contains(value), "{html}");

        let rows = vec![record(&[("name", value), ("text", "plain")])];
        let grid = Grid::new(people().renderers(get_default_renderers())).bind(rows.clone());
        let html = MustacheEngine::default().render_grid(&grid).unwrap();
        assert!(html.contains(&format!(r#"value="{value}""#)), "{html}");

        let readonly = people().readonly(true).renderers(get_default_renderers());
        let html = MustacheEngine::default()
            .render_grid(&Grid::new(readonly).bind(rows))
            .unwrap();
        assert!(html.contains(value), "{html}");
    }
}
