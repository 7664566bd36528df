//! Parsing utilities for table and field attributes
//!
//! This module handles the parsing of `#[table]` and field attributes
//! and validation of table and column names.

use quote::quote;
use syn::{Attribute, Data, Error, Fields, Ident, LitStr, Result};
use type_mapping::is_reserved_keyword;

/// SQLite accepts longer names; the limit keeps identifiers portable
const MAX_IDENTIFIER_LENGTH: usize = 63;

/// Validate table name and return syn::Error for better proc macro error handling
pub fn validate_table_name_syn(name: &str, span: proc_macro2::Span) -> Result<()> {
    validate_identifier(name)
        .map_err(|e| Error::new(span, format!("Invalid table name '{}': {}", name, e)))
}

/// Validate field name and return syn::Error for better proc macro error handling
pub fn validate_field_name_syn(name: &str, span: proc_macro2::Span) -> Result<()> {
    validate_identifier(name)
        .map_err(|e| Error::new(span, format!("Invalid field name '{}': {}", name, e)))
}

/// Validation logic that mirrors store_object::validation
fn validate_identifier(name: &str) -> std::result::Result<(), String> {
    if name.is_empty() {
        return Err("Name cannot be empty".to_string());
    }

    if name.len() > MAX_IDENTIFIER_LENGTH {
        return Err(format!(
            "Name '{}' is too long: {} characters (max {})",
            name,
            name.len(),
            MAX_IDENTIFIER_LENGTH
        ));
    }

    let first_char = name
        .chars()
        .next()
        .ok_or_else(|| "Name cannot be empty".to_string())?;
    if !first_char.is_ascii_alphabetic() && first_char != '_' {
        return Err(format!(
            "Name '{}' must start with a letter or underscore",
            name
        ));
    }

    if !name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return Err(format!("Name '{}' contains invalid characters: only alphanumeric characters and underscores are allowed", name));
    }

    if is_reserved_keyword(name) {
        return Err(format!("Name '{}' is a reserved SQL keyword", name));
    }

    Ok(())
}

#[derive(Debug)]
pub struct TableInfo {
    pub name: String,
}

#[derive(Debug)]
pub struct ColumnInfo {
    pub ident: Ident,
    pub name: String,
    pub rust_type: String,
    pub primary_key: bool,
    pub unique: bool,
    pub indexed: bool,
    pub references: Option<String>,
}

#[derive(Debug)]
pub struct FieldInfo {
    pub columns: Vec<ColumnInfo>,
    pub primary_key_field: Ident,
    pub soft_delete_field: Option<Ident>,
}

impl FieldInfo {
    pub fn primary_key_name(&self) -> String {
        self.primary_key_field.to_string()
    }

    pub fn soft_delete_name(&self) -> Option<String> {
        self.soft_delete_field.as_ref().map(|ident| ident.to_string())
    }

    /// Every column except the primary key, in declaration order
    pub fn value_columns(&self) -> impl Iterator<Item = &ColumnInfo> {
        self.columns.iter().filter(|column| !column.primary_key)
    }
}

pub fn parse_table_attributes(attrs: &[Attribute]) -> Result<TableInfo> {
    let mut table_name: Option<LitStr> = None;

    for attr in attrs {
        if attr.path().is_ident("table") {
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("name") {
                    table_name = Some(meta.value()?.parse()?);
                    Ok(())
                } else {
                    Err(meta.error("unsupported table attribute, expected `name = \"...\"`"))
                }
            })?;
        }
    }

    let table_name = table_name.ok_or_else(|| {
        Error::new(
            proc_macro2::Span::call_site(),
            "table attribute is required: add #[table(name = \"table_name\")] to your struct",
        )
    })?;

    validate_table_name_syn(&table_name.value(), table_name.span())?;

    Ok(TableInfo {
        name: table_name.value(),
    })
}

pub fn parse_field_attributes(data: &Data) -> Result<FieldInfo> {
    let fields_named = match data {
        Data::Struct(data_struct) => match &data_struct.fields {
            Fields::Named(fields_named) => fields_named,
            _ => {
                return Err(Error::new(
                    proc_macro2::Span::call_site(),
                    "TableMetadata can only be derived for structs with named fields",
                ))
            }
        },
        _ => {
            return Err(Error::new(
                proc_macro2::Span::call_site(),
                "TableMetadata can only be derived for structs with named fields",
            ))
        }
    };

    let mut columns = Vec::new();
    let mut primary_key_field: Option<Ident> = None;
    let mut soft_delete_field: Option<Ident> = None;

    for field in &fields_named.named {
        let field_name = field
            .ident
            .as_ref()
            .ok_or_else(|| Error::new_spanned(field, "Field must have a name"))?;
        let field_name_str = field_name.to_string();

        validate_field_name_syn(&field_name_str, field_name.span())?;

        let ty = &field.ty;
        // Normalize type string by removing all whitespace for consistent matching
        let rust_type = quote!(#ty).to_string().replace(' ', "");

        let primary_key = has_attribute(&field.attrs, "primary_key");
        if primary_key {
            if primary_key_field.is_some() {
                return Err(Error::new_spanned(
                    field_name,
                    "only one field can be marked #[primary_key]",
                ));
            }
            if rust_type != "i64" {
                return Err(Error::new_spanned(
                    ty,
                    "#[primary_key] must be a numeric identifier of type i64",
                ));
            }
            primary_key_field = Some(field_name.clone());
        }

        if has_attribute(&field.attrs, "soft_delete") {
            if soft_delete_field.is_some() {
                return Err(Error::new_spanned(
                    field_name,
                    "only one field can be marked #[soft_delete]",
                ));
            }
            if rust_type != "bool" {
                return Err(Error::new_spanned(ty, "#[soft_delete] field must be a bool"));
            }
            soft_delete_field = Some(field_name.clone());
        }

        columns.push(ColumnInfo {
            ident: field_name.clone(),
            name: field_name_str,
            rust_type,
            primary_key,
            unique: has_attribute(&field.attrs, "unique"),
            indexed: has_attribute(&field.attrs, "index"),
            references: parse_references(&field.attrs)?,
        });
    }

    let primary_key_field = primary_key_field.ok_or_else(|| {
        Error::new(
            proc_macro2::Span::call_site(),
            "an entity needs a numeric identifier: mark an i64 field with #[primary_key]",
        )
    })?;

    Ok(FieldInfo {
        columns,
        primary_key_field,
        soft_delete_field,
    })
}

pub fn has_attribute(attrs: &[Attribute], name: &str) -> bool {
    attrs.iter().any(|attr| attr.path().is_ident(name))
}

/// Parse `#[references(table)]` or `#[references("table")]`
fn parse_references(attrs: &[Attribute]) -> Result<Option<String>> {
    for attr in attrs {
        if attr.path().is_ident("references") {
            let table = match attr.parse_args::<Ident>() {
                Ok(ident) => ident.to_string(),
                Err(_) => attr.parse_args::<LitStr>()?.value(),
            };
            validate_table_name_syn(&table, proc_macro2::Span::call_site())?;
            return Ok(Some(table));
        }
    }

    Ok(None)
}

#[cfg(test)]
mod validation_tests {
    use super::*;
    use syn::parse_quote;

    fn validate_table_name(name: &str) {
        if let Err(e) = validate_table_name_syn(name, proc_macro2::Span::call_site()) {
            panic!("Invalid table name: {}", e);
        }
    }

    fn validate_field_name(name: &str) {
        if let Err(e) = validate_field_name_syn(name, proc_macro2::Span::call_site()) {
            panic!("Invalid field name: {}", e);
        }
    }

    #[test]
    fn test_valid_table_names() {
        validate_table_name("users");
        validate_table_name("room_types");
        validate_table_name("_private");
        validate_table_name("table123");
        validate_table_name("a");
    }

    #[test]
    #[should_panic(expected = "Invalid table name")]
    fn test_reserved_keyword() {
        validate_table_name("SELECT");
    }

    #[test]
    #[should_panic(expected = "Invalid table name")]
    fn test_invalid_start() {
        validate_table_name("123table");
    }

    #[test]
    #[should_panic(expected = "Invalid table name")]
    fn test_invalid_chars() {
        validate_table_name("user-table");
    }

    #[test]
    #[should_panic(expected = "Invalid table name")]
    fn test_empty_name() {
        validate_table_name("");
    }

    #[test]
    fn test_field_validation() {
        validate_field_name("id");
        validate_field_name("hotel_id");
        validate_field_name("is_active");
    }

    #[test]
    #[should_panic(expected = "Invalid field name")]
    fn test_invalid_field() {
        validate_field_name("rowid");
    }

    #[test]
    fn test_sql_injection_prevention() {
        let malicious_names = [
            "users; DROP TABLE users; --",
            "users' OR '1'='1",
            "users/**/UNION/**/SELECT",
            "users\"; DELETE FROM users; --",
        ];

        for name in malicious_names {
            let result = std::panic::catch_unwind(|| {
                validate_table_name(name);
            });
            assert!(result.is_err(), "Should panic for malicious name: {}", name);
        }
    }

    #[test]
    fn parses_table_name() {
        let attrs: Vec<Attribute> = vec![parse_quote!(#[table(name = "hotels")])];
        let info = parse_table_attributes(&attrs).unwrap();
        assert_eq!(info.name, "hotels");
    }

    #[test]
    fn missing_table_attribute_is_an_error() {
        assert!(parse_table_attributes(&[]).is_err());
    }

    #[test]
    fn parses_entity_fields() {
        let input: syn::DeriveInput = parse_quote! {
            struct RoomType {
                #[primary_key]
                id: i64,
                #[references(hotels)]
                hotel_id: i64,
                #[unique]
                code: String,
                note: Option<String>,
                #[soft_delete]
                is_active: bool,
            }
        };

        let info = parse_field_attributes(&input.data).unwrap();
        assert_eq!(info.primary_key_name(), "id");
        assert_eq!(info.soft_delete_name().as_deref(), Some("is_active"));
        assert_eq!(info.columns.len(), 5);
        assert_eq!(info.columns[1].references.as_deref(), Some("hotels"));
        assert!(info.columns[2].unique);
        assert_eq!(info.columns[3].rust_type, "Option<String>");
        assert_eq!(info.value_columns().count(), 4);
    }

    #[test]
    fn primary_key_must_be_i64() {
        let input: syn::DeriveInput = parse_quote! {
            struct Broken {
                #[primary_key]
                id: String,
            }
        };
        assert!(parse_field_attributes(&input.data).is_err());
    }

    #[test]
    fn soft_delete_must_be_bool() {
        let input: syn::DeriveInput = parse_quote! {
            struct Broken {
                #[primary_key]
                id: i64,
                #[soft_delete]
                is_active: i64,
            }
        };
        assert!(parse_field_attributes(&input.data).is_err());
    }

    #[test]
    fn primary_key_is_required() {
        let input: syn::DeriveInput = parse_quote! {
            struct Broken {
                name: String,
            }
        };
        assert!(parse_field_attributes(&input.data).is_err());
    }
}
