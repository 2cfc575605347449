use duro::prelude::*;
use duro::theme;

// ============================================================================
// Field
// ============================================================================

#[test]
fn test_field_wires_label_description_and_error() {
    let field = Field::default();
    let scope = field.provide(&Scope::new());
    let label = FieldLabel::mount(&scope);
    let description = FieldDescription::mount(&scope);
    let error = FieldError::mount(&scope, None);
    let control = FieldControl::mount(&scope);

    assert_eq!(label.attrs().get("for"), control.attrs().get("id"));
    assert_eq!(description.attrs().get("id"), Some(field.description_id().as_str()));
    assert_eq!(control.described_by(), Some(field.description_id()));
    assert!(!control.attrs().contains("aria-invalid"));
    assert!(!error.is_rendered());

    field.set_invalid(true);
    assert!(error.is_rendered());
    assert!(control.is_invalid());
    assert_eq!(
        control.described_by(),
        Some(format!("{} {}", field.description_id(), field.error_id()))
    );
    assert_eq!(control.attrs().get("aria-invalid"), Some("true"));
    assert_eq!(error.attrs().get("role"), Some("alert"));
}

#[test]
fn test_control_error_variant_without_field() {
    let control = FieldControl::mount(&Scope::new()).error_variant(true);
    assert!(control.is_invalid());
    assert!(!control.attrs().contains("id"));
}

// ============================================================================
// Table
// ============================================================================

#[test]
fn test_table_sections_pick_cell_roles() {
    let table = Table::new(3).variant(TableVariant::Striped).size(TableSize::Sm);
    let scope = table.provide(&Scope::new());

    let head = TableSection::header(&scope).unwrap();
    let head_scope = head.provide(&scope);
    assert!(head.is_header());
    assert_eq!(TableCell::mount(&head_scope).unwrap().role(), "columnheader");
    assert!(!TableRow::mount(&head_scope, 1).unwrap().is_striped());

    let body = TableSection::body(&scope).unwrap();
    let body_scope = body.provide(&scope);
    let cell = TableCell::mount(&body_scope).unwrap();
    assert_eq!(cell.role(), "cell");
    assert_eq!(cell.attrs().get("data-size"), Some("sm"));

    let rows: Vec<_> = (0..4)
        .map(|i| TableRow::mount(&body_scope, i).unwrap().is_striped())
        .collect();
    assert_eq!(rows, vec![false, true, false, true]);
    assert_eq!(table.attrs().get("data-columns"), Some("3"));
}

#[test]
fn test_plain_table_has_no_stripes() {
    let table = Table::new(2);
    let scope = TableSection::body(&table.provide(&Scope::new()))
        .unwrap()
        .provide(&table.provide(&Scope::new()));
    assert!(!TableRow::mount(&scope, 1).unwrap().is_striped());
    assert_eq!(table.attrs().get("data-variant"), Some("default"));
}

#[test]
fn test_table_parts_require_root() {
    let err = TableRow::mount(&Scope::new(), 0).unwrap_err();
    assert_eq!(err.to_string(), "Table.Row must be used within Table.Root");
}

// ============================================================================
// Theme
// ============================================================================

#[test]
fn test_theme_flows_through_widget_scopes() {
    let themed = ThemeProvider::new(ThemeName::Light).provide(&Scope::new());
    let menu = Menu::new();
    let menu_scope = menu.provide(&themed);
    assert_eq!(theme::current(&menu_scope), ThemeName::Light);
    assert_eq!(theme::current(&Scope::new()), ThemeName::Dark);
}

#[test]
fn test_theme_from_defaults() {
    let defaults: Defaults = serde_json::from_str(r#"{"theme": "light"}"#).unwrap();
    let scope = ThemeProvider::new(defaults.theme).provide(&Scope::new());
    assert_eq!(theme::current(&scope).to_string(), "light");
}
