//! Code generation for `#[derive(Queryable)]`.

use proc_macro2::{Ident, TokenStream};
use quote::{format_ident, quote};
use syn::punctuated::Punctuated;
use syn::token::Comma;
use syn::{Data, DataStruct, DeriveInput, Error, Field, Fields, Result};

use super::attrs::{parse_query_attrs, FieldKind};

/// One field exposed to queries.
struct Exposed<'f> {
    ident: &'f Ident,
    query_name: String,
    kind: FieldKind,
}

impl Exposed<'_> {
    fn constant(&self) -> TokenStream {
        let name = format_ident!("{}", constant_name(&self.query_name));
        let query_name = &self.query_name;
        quote! {
            pub const #name: &'static str = #query_name;
        }
    }

    fn arm(&self) -> TokenStream {
        let ident = self.ident;
        let query_name = &self.query_name;
        let value = match self.kind {
            FieldKind::Text => quote!(::linqs_query::Value::String(&self.#ident)),
            FieldKind::Number => {
                quote!(::linqs_query::Value::Number(::core::convert::From::from(self.#ident)))
            }
            FieldKind::Date => quote!(::linqs_query::Value::Timestamp(
                ::linqs_query::QueryTimestamp::to_timestamp(&self.#ident)
            )),
            FieldKind::Choice => quote!(::linqs_query::Value::Enum(
                ::linqs_query::QueryEnum::discriminant(&self.#ident)
            )),
        };
        quote!(#query_name => #value,)
    }
}

pub fn queryable_derive_impl(input: DeriveInput) -> Result<TokenStream> {
    let exposed = named_fields(&input)?
        .iter()
        .filter_map(|field| exposed_field(field).transpose())
        .collect::<Result<Vec<_>>>()?;

    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();
    let constants = exposed.iter().map(Exposed::constant);
    let arms = exposed.iter().map(Exposed::arm);

    Ok(quote! {
        impl #impl_generics #name #ty_generics #where_clause {
            #(#constants)*
        }

        impl #impl_generics ::linqs_query::Queryable for #name #ty_generics #where_clause {
            fn field_value(&self, field: &str) -> ::linqs_query::Value<'_> {
                match field {
                    #(#arms)*
                    _ => ::linqs_query::Value::None,
                }
            }
        }
    })
}

fn named_fields(input: &DeriveInput) -> Result<&Punctuated<Field, Comma>> {
    match &input.data {
        Data::Struct(DataStruct {
            fields: Fields::Named(named),
            ..
        }) => Ok(&named.named),
        Data::Struct(_) => Err(Error::new_spanned(
            &input.ident,
            "Queryable needs a struct with named fields",
        )),
        _ => Err(Error::new_spanned(
            &input.ident,
            "Queryable can only be derived for structs",
        )),
    }
}

fn exposed_field(field: &Field) -> Result<Option<Exposed<'_>>> {
    let attr = parse_query_attrs(&field.attrs)?;
    let (Some(kind), Some(ident)) = (attr.exposed_kind(), field.ident.as_ref()) else {
        return Ok(None);
    };
    Ok(Some(Exposed {
        ident,
        query_name: attr.rename.unwrap_or_else(|| ident.to_string()),
        kind,
    }))
}

/// `contact_number` -> `CONTACT_NUMBER`, `foundedOn` -> `FOUNDED_ON`.
fn constant_name(query_name: &str) -> String {
    let mut out = String::with_capacity(query_name.len() + 4);
    let mut after_lower = false;
    for c in query_name.chars() {
        match c {
            '-' | '_' => out.push('_'),
            c if c.is_uppercase() && after_lower => {
                out.push('_');
                out.push(c);
            }
            c => out.extend(c.to_uppercase()),
        }
        after_lower = c.is_lowercase() || c.is_ascii_digit();
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use syn::parse_quote;

    fn expand(input: DeriveInput) -> String {
        queryable_derive_impl(input).unwrap().to_string()
    }

    #[test]
    fn constant_names() {
        assert_eq!(constant_name("surname"), "SURNAME");
        assert_eq!(constant_name("contact_number"), "CONTACT_NUMBER");
        assert_eq!(constant_name("foundedOn"), "FOUNDED_ON");
        assert_eq!(constant_name("full-name"), "FULL_NAME");
    }

    #[test]
    fn only_marked_fields_are_exposed() {
        let expanded = expand(parse_quote! {
            struct Student {
                #[query(text)]
                surname: String,
                #[query(number, rename = "years")]
                age: u8,
                #[query(skip)]
                notes: String,
                untouched: bool,
            }
        });
        assert!(expanded.contains("SURNAME"));
        assert!(expanded.contains("YEARS"));
        assert!(expanded.contains("\"years\""));
        assert!(!expanded.contains("NOTES"));
        assert!(!expanded.contains("UNTOUCHED"));
    }

    #[test]
    fn structs_without_fields_expose_nothing() {
        let expanded = expand(parse_quote! { struct Empty {} });
        assert!(expanded.contains("Value :: None"));
    }

    #[test]
    fn only_named_structs_are_supported() {
        let tuple: DeriveInput = parse_quote! { struct Pair(u8, u8); };
        let err = queryable_derive_impl(tuple).unwrap_err();
        assert!(err.to_string().contains("named fields"));

        let enumeration: DeriveInput = parse_quote! { enum Kind { A, B } };
        assert!(queryable_derive_impl(enumeration).is_err());
    }
}
