//! Procedural macros for generating entity table metadata
//!
//! This crate provides the `#[model]` macro and `TableMetadata` derive, which
//! generate the table metadata, static SQL, DDL and the soft-delete capability
//! used by `store_object::GenericRepository`.

use proc_macro::TokenStream;
use syn::{parse_macro_input, DeriveInput};

mod model_macro;
mod parsing;
mod sql_generation;

use model_macro::model_attribute;
use parsing::{parse_field_attributes, parse_table_attributes};
use sql_generation::{generate_soft_deletable_impl, generate_table_metadata_impl};

/// Derive macro for the `TableMetadata` trait
///
/// Note: It's recommended to use the `#[model]` attribute macro instead,
/// which automatically includes this derive along with the serde and sqlx derives.
///
/// ```rust,ignore
/// #[derive(Debug, Clone, serde::Serialize, serde::Deserialize, sqlx::FromRow, TableMetadata)]
/// #[table(name = "room_types")]
/// pub struct RoomType {
///     #[primary_key]
///     pub id: i64,
///
///     #[references(hotels)]
///     pub hotel_id: i64,
///
///     pub name: String,
///
///     #[soft_delete]
///     pub is_active: bool,
/// }
/// ```
///
/// Field attributes:
/// - `#[primary_key]`: the numeric (`i64`) identifier, required
/// - `#[soft_delete]`: the `bool` active flag; also derives `SoftDeletable`
/// - `#[unique]`: adds a `UNIQUE` constraint
/// - `#[index]`: adds a secondary index
/// - `#[references(table)]`: foreign key to `table(id)`, indexed
#[proc_macro_derive(
    TableMetadata,
    attributes(table, primary_key, soft_delete, unique, index, references)
)]
pub fn derive_table_metadata(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    let name = &input.ident;

    let table_info = match parse_table_attributes(&input.attrs) {
        Ok(attrs) => attrs,
        Err(e) => return e.to_compile_error().into(),
    };

    let field_info = match parse_field_attributes(&input.data) {
        Ok(info) => info,
        Err(e) => return e.to_compile_error().into(),
    };

    let table_metadata_impl = generate_table_metadata_impl(name, &table_info, &field_info);
    let soft_deletable_impl = generate_soft_deletable_impl(name, &field_info);

    let expanded = quote::quote! {
        #table_metadata_impl
        #soft_deletable_impl
    };

    TokenStream::from(expanded)
}

/// Convenience attribute macro that adds all necessary derives for an entity
///
/// ```rust,ignore
/// use store_object::model;
///
/// #[model]
/// #[table(name = "hotels")]
/// pub struct Hotel {
///     #[primary_key]
///     pub id: i64,
///     pub name: String,
///     #[soft_delete]
///     pub is_active: bool,
/// }
/// ```
#[proc_macro_attribute]
pub fn model(attr: TokenStream, item: TokenStream) -> TokenStream {
    model_attribute(attr, item)
}
