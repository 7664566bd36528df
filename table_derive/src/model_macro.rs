use proc_macro::TokenStream;
use quote::quote;
use syn::{parse_macro_input, Data, DeriveInput, Error};

/// Adds the derives every entity needs: Debug, Clone, PartialEq, serde,
/// `sqlx::FromRow` and `TableMetadata`.
///
/// The caller's crate must depend on `serde` and `sqlx`.
pub fn model_attribute(_attr: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);

    let name = &input.ident;
    let attrs = &input.attrs;
    let vis = &input.vis;
    let generics = &input.generics;

    let fields = match &input.data {
        Data::Struct(data) => &data.fields,
        _ => {
            return Error::new_spanned(name, "#[model] can only be used on structs")
                .to_compile_error()
                .into()
        }
    };

    let expanded = quote! {
        #[derive(
            Debug,
            Clone,
            PartialEq,
            serde::Serialize,
            serde::Deserialize,
            sqlx::FromRow,
            ::store_object::TableMetadata
        )]
        #(#attrs)*
        #vis struct #name #generics #fields
    };

    TokenStream::from(expanded)
}
