//! SQL code generation for entity metadata
//!
//! This module generates the static SQL statements and DDL for an entity
//! based on parsed table and field metadata.

use proc_macro2::TokenStream;
use quote::quote;
use syn::Ident;
use type_mapping::{is_optional_type, rust_type_to_sqlite_type};

use crate::parsing::{ColumnInfo, FieldInfo, TableInfo};

/// Quote an identifier that was already validated at parse time
fn quoted(name: &str) -> String {
    format!("\"{}\"", name)
}

fn placeholders(range: std::ops::RangeInclusive<usize>) -> String {
    range
        .map(|i| format!("?{}", i))
        .collect::<Vec<_>>()
        .join(", ")
}

fn column_definition(column: &ColumnInfo, soft_delete_field: Option<&str>) -> String {
    if column.primary_key {
        return format!("{} INTEGER PRIMARY KEY", quoted(&column.name));
    }

    let mut definition = format!(
        "{} {}",
        quoted(&column.name),
        rust_type_to_sqlite_type(&column.rust_type)
    );

    if !is_optional_type(&column.rust_type) {
        definition.push_str(" NOT NULL");
    }

    if soft_delete_field == Some(column.name.as_str()) {
        definition.push_str(" DEFAULT 1");
    }

    if column.unique {
        definition.push_str(" UNIQUE");
    }

    if let Some(table) = &column.references {
        definition.push_str(&format!(" REFERENCES {} (\"id\")", quoted(table)));
    }

    definition
}

pub struct GeneratedSql {
    pub select_base: String,
    pub get_by_id: String,
    pub get_active_by_id: String,
    pub list_all: String,
    pub list_active: String,
    pub count_all: String,
    pub count_active: String,
    pub insert: String,
    pub insert_generated_key: String,
    pub update: String,
    pub create_table: String,
    pub indexes: Vec<String>,
}

pub fn generate_sql(table_info: &TableInfo, field_info: &FieldInfo) -> GeneratedSql {
    let table = quoted(&table_info.name);
    let pk = quoted(&field_info.primary_key_name());
    let soft_delete = field_info.soft_delete_name();

    let all_columns: Vec<String> = field_info.columns.iter().map(|c| quoted(&c.name)).collect();
    let value_columns: Vec<String> = field_info.value_columns().map(|c| quoted(&c.name)).collect();

    let select_base = format!("SELECT {} FROM {}", all_columns.join(", "), table);

    let active_condition = soft_delete
        .as_ref()
        .map(|field| format!("{} = 1", quoted(field)));

    let get_by_id = format!("{} WHERE {} = ?1", select_base, pk);
    let get_active_by_id = match &active_condition {
        Some(condition) => format!("{} AND {}", get_by_id, condition),
        None => get_by_id.clone(),
    };

    let list_all = format!("{} ORDER BY {}", select_base, pk);
    let list_active = match &active_condition {
        Some(condition) => format!("{} WHERE {} ORDER BY {}", select_base, condition, pk),
        None => list_all.clone(),
    };

    let count_all = format!("SELECT COUNT(*) AS total FROM {}", table);
    let count_active = match &active_condition {
        Some(condition) => format!("{} WHERE {}", count_all, condition),
        None => count_all.clone(),
    };

    let insert = format!(
        "INSERT INTO {} ({}) VALUES ({})",
        table,
        all_columns.join(", "),
        placeholders(1..=all_columns.len())
    );

    let insert_generated_key = format!(
        "INSERT INTO {} ({}) VALUES ({})",
        table,
        value_columns.join(", "),
        placeholders(1..=value_columns.len())
    );

    let assignments: Vec<String> = value_columns
        .iter()
        .enumerate()
        .map(|(i, column)| format!("{} = ?{}", column, i + 1))
        .collect();
    let update = format!(
        "UPDATE {} SET {} WHERE {} = ?{}",
        table,
        assignments.join(", "),
        pk,
        value_columns.len() + 1
    );

    let definitions: Vec<String> = field_info
        .columns
        .iter()
        .map(|column| column_definition(column, soft_delete.as_deref()))
        .collect();
    let create_table = format!(
        "CREATE TABLE IF NOT EXISTS {} ({})",
        table,
        definitions.join(", ")
    );

    let mut indexes = Vec::new();
    if let Some(field) = &soft_delete {
        indexes.push(index_sql(&table_info.name, field));
    }
    for column in field_info.value_columns() {
        if column.references.is_some() || column.indexed {
            indexes.push(index_sql(&table_info.name, &column.name));
        }
    }

    GeneratedSql {
        select_base,
        get_by_id,
        get_active_by_id,
        list_all,
        list_active,
        count_all,
        count_active,
        insert,
        insert_generated_key,
        update,
        create_table,
        indexes,
    }
}

fn index_sql(table: &str, column: &str) -> String {
    format!(
        "CREATE INDEX IF NOT EXISTS {} ON {} ({})",
        quoted(&format!("idx_{}_{}", table, column)),
        quoted(table),
        quoted(column)
    )
}

pub fn generate_table_metadata_impl(
    name: &Ident,
    table_info: &TableInfo,
    field_info: &FieldInfo,
) -> TokenStream {
    let table_name = &table_info.name;
    let primary_key_field = &field_info.primary_key_field;
    let primary_key_name = field_info.primary_key_name();

    let column_names: Vec<&str> = field_info.columns.iter().map(|c| c.name.as_str()).collect();
    let soft_delete_field_option = match field_info.soft_delete_name() {
        Some(field) => quote! { Some(#field) },
        None => quote! { None },
    };

    let GeneratedSql {
        select_base,
        get_by_id,
        get_active_by_id,
        list_all,
        list_active,
        count_all,
        count_active,
        insert,
        insert_generated_key,
        update,
        create_table,
        indexes,
    } = generate_sql(table_info, field_info);

    quote! {
        impl ::store_object::TableMetadata for #name {
            fn table_name() -> &'static str {
                #table_name
            }

            fn primary_key_field() -> &'static str {
                #primary_key_name
            }

            fn columns() -> &'static [&'static str] {
                &[#(#column_names),*]
            }

            fn soft_delete_field() -> Option<&'static str> {
                #soft_delete_field_option
            }

            fn extract_id(&self) -> ::store_object::EntityId {
                self.#primary_key_field
            }

            fn select_base_sql() -> &'static str {
                #select_base
            }

            fn get_by_id_sql() -> &'static str {
                #get_by_id
            }

            fn get_active_by_id_sql() -> &'static str {
                #get_active_by_id
            }

            fn list_all_sql() -> &'static str {
                #list_all
            }

            fn list_active_sql() -> &'static str {
                #list_active
            }

            fn count_all_sql() -> &'static str {
                #count_all
            }

            fn count_active_sql() -> &'static str {
                #count_active
            }

            fn insert_sql() -> &'static str {
                #insert
            }

            fn insert_generated_key_sql() -> &'static str {
                #insert_generated_key
            }

            fn update_sql() -> &'static str {
                #update
            }

            fn create_table_sql() -> &'static str {
                #create_table
            }

            fn create_indexes_sql() -> &'static [&'static str] {
                &[#(#indexes),*]
            }
        }
    }
}

/// Generate the `SoftDeletable` capability when the entity has an active flag
pub fn generate_soft_deletable_impl(name: &Ident, field_info: &FieldInfo) -> TokenStream {
    match &field_info.soft_delete_field {
        Some(field) => quote! {
            impl ::store_object::SoftDeletable for #name {
                fn is_active(&self) -> bool {
                    self.#field
                }

                fn set_active(&mut self, active: bool) {
                    self.#field = active;
                }
            }
        },
        None => TokenStream::new(),
    }
}
