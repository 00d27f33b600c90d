//! Tests for the proxy layer as seen from outside the crate.

mod common;
use common::*;

use oxide_forms::fields::text_field;
use oxide_forms::{FieldSet, Focus, Grid};
use oxide_forms_mustache::{
    proxy_errors, proxy_fields, ErrorProxy, FieldProxy, GridProxy, LabelProxy,
};

#[test]
fn focus_never_lands_on_readonly_fields() {
    for readonly in [false, true] {
        let mut field = text_field("name", "Name", 10, false);
        if readonly {
            field = field.readonly();
        }
        assert_eq!(FieldProxy::new(field).with_focus(true).focus(), !readonly);
    }

    let fieldset = people().focus(Focus::First).readonly(true);
    let proxies = proxy_fields(fieldset.render_fields().values(), fieldset.focus_setting());
    assert!(proxies.iter().all(|p| !p.focus()));
}

#[test]
fn parity_follows_definition_order() {
    let fieldset = ["e", "d", "c", "b", "a"]
        .into_iter()
        .fold(FieldSet::new(), |set, name| {
            set.field(text_field(name, name, 10, false))
        });
    let proxies = proxy_fields(fieldset.render_fields().values(), &Focus::None);
    let seen: Vec<(&str, &str)> = proxies
        .iter()
        .map(|p| (p.name().unwrap(), p.parity()))
        .collect();
    assert_eq!(
        seen,
        [
            ("e", "even"),
            ("d", "odd"),
            ("c", "even"),
            ("b", "odd"),
            ("a", "even")
        ]
    );
}

#[test]
fn errors_are_wrapped_in_order() {
    assert!(proxy_errors(None).is_empty());
    let errors = ["a".to_string(), "b".to_string()];
    assert_eq!(
        proxy_errors(Some(&errors)),
        [
            ErrorProxy {
                error: "a".to_string()
            },
            ErrorProxy {
                error: "b".to_string()
            },
        ]
    );
}

#[test]
fn grid_labels_in_column_order() {
    let grid = Grid::new(people()).bind(vec![record(&[("name", "Ada"), ("text", "x")])]);
    let proxy = GridProxy::new(grid);
    assert_eq!(
        proxy.labels(),
        [
            LabelProxy {
                label: "Name".to_string()
            },
            LabelProxy {
                label: "Text".to_string()
            },
        ]
    );
    assert!(!proxy.readonly());
}

#[test]
fn grid_rows_carry_their_own_values() {
    let grid = Grid::new(people()).bind(vec![
        record(&[("name", "Ada")]),
        record(&[("name", "Grace")]),
        record(&[("name", "Edsger")]),
    ]);
    let rows = GridProxy::new(grid).rows().unwrap();
    let names: Vec<String> = rows
        .iter()
        .map(|row| row.fields()[0].value().unwrap().to_string())
        .collect();
    assert_eq!(names, ["Ada", "Grace", "Edsger"]);
    assert_eq!(
        rows.iter().map(|r| r.parity()).collect::<Vec<_>>(),
        ["even", "odd", "even"]
    );
    assert_eq!(rows[1].fields()[1].value(), None);
}
