//! Derive macro for record field access.
//!
//! Expands `#[derive(Record)]` into field-name constants and a
//! `budfinder_seeker::Record` implementation dispatching on the field name.

use std::collections::HashSet;

use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::{
    parse::{Parse, ParseStream},
    punctuated::Punctuated,
    spanned::Spanned,
    Data, DeriveInput, Error, Expr, Fields, Lit, Meta, Result, Token,
};

/// How a field is exposed to the query engine.
#[derive(Clone, Copy, PartialEq, Eq)]
enum FieldKind {
    Text,
    Tags,
    Number,
}

/// Container-level attributes: `#[record(category = "...")]`
#[derive(Default)]
struct ContainerAttrs {
    category: Option<String>,
}

/// Field-level attributes: `#[record(text, rename = "...")]`
#[derive(Default)]
struct FieldAttrs {
    kind: Option<FieldKind>,
    rename: Option<String>,
    skip: bool,
}

fn string_value(expr: &Expr) -> Result<String> {
    match expr {
        Expr::Lit(expr_lit) => match &expr_lit.lit {
            Lit::Str(lit_str) => Ok(lit_str.value()),
            _ => Err(Error::new(expr.span(), "expected string literal")),
        },
        _ => Err(Error::new(expr.span(), "expected string literal")),
    }
}

impl Parse for ContainerAttrs {
    fn parse(input: ParseStream) -> Result<Self> {
        let mut attrs = ContainerAttrs::default();

        let content: Punctuated<Meta, Token![,]> = Punctuated::parse_terminated(input)?;

        for meta in content {
            match &meta {
                Meta::NameValue(nv) if nv.path.is_ident("category") => {
                    attrs.category = Some(string_value(&nv.value)?);
                }
                _ => {
                    return Err(Error::new(
                        meta.span(),
                        "unknown attribute, expected `category = \"...\"`",
                    ));
                }
            }
        }

        Ok(attrs)
    }
}

impl Parse for FieldAttrs {
    fn parse(input: ParseStream) -> Result<Self> {
        let mut attrs = FieldAttrs::default();

        let content: Punctuated<Meta, Token![,]> = Punctuated::parse_terminated(input)?;

        for meta in content {
            let kind = match &meta {
                Meta::Path(p) if p.is_ident("text") => Some(FieldKind::Text),
                Meta::Path(p) if p.is_ident("tags") => Some(FieldKind::Tags),
                Meta::Path(p) if p.is_ident("number") => Some(FieldKind::Number),
                Meta::Path(p) if p.is_ident("skip") => {
                    attrs.skip = true;
                    None
                }
                Meta::NameValue(nv) if nv.path.is_ident("rename") => {
                    attrs.rename = Some(string_value(&nv.value)?);
                    None
                }
                _ => {
                    return Err(Error::new(
                        meta.span(),
                        "unknown attribute, expected one of: text, tags, number, skip, rename",
                    ));
                }
            };

            if let Some(kind) = kind {
                if attrs.kind.is_some() {
                    return Err(Error::new(meta.span(), "field kind specified more than once"));
                }
                attrs.kind = Some(kind);
            }
        }

        Ok(attrs)
    }
}

/// A queryable field after attribute resolution.
struct RecordField {
    ident: syn::Ident,
    query_name: String,
    kind: FieldKind,
}

pub fn record_derive_impl(input: DeriveInput) -> Result<TokenStream> {
    let name = &input.ident;

    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(named) => &named.named,
            _ => {
                return Err(Error::new(
                    input.span(),
                    "Record can only be derived for structs with named fields",
                ))
            }
        },
        _ => {
            return Err(Error::new(
                input.span(),
                "Record can only be derived for structs",
            ))
        }
    };

    let mut container = ContainerAttrs::default();
    for attr in &input.attrs {
        if attr.path().is_ident("record") {
            container = attr.parse_args()?;
        }
    }

    let mut record_fields = Vec::new();
    let mut seen = HashSet::new();
    if container.category.is_some() {
        seen.insert("type".to_string());
    }

    for field in fields {
        let mut attrs = FieldAttrs::default();
        let mut annotated = false;
        for attr in &field.attrs {
            if attr.path().is_ident("record") {
                attrs = attr.parse_args()?;
                annotated = true;
            }
        }

        if !annotated || attrs.skip {
            continue;
        }

        let ident = field
            .ident
            .clone()
            .ok_or_else(|| Error::new(field.span(), "expected named field"))?;

        let Some(kind) = attrs.kind else {
            return Err(Error::new(
                field.span(),
                "missing field kind, expected one of: text, tags, number",
            ));
        };

        let query_name = attrs.rename.unwrap_or_else(|| ident.to_string());
        if !seen.insert(query_name.clone()) {
            return Err(Error::new(
                field.span(),
                format!("duplicate query field name '{}'", query_name),
            ));
        }

        record_fields.push(RecordField {
            ident,
            query_name,
            kind,
        });
    }

    let constants = record_fields.iter().map(|f| {
        let const_name = format_ident!("{}", f.ident.to_string().to_uppercase());
        let query_name = &f.query_name;
        quote! {
            pub const #const_name: &'static str = #query_name;
        }
    });

    let arms = record_fields.iter().map(|f| {
        let ident = &f.ident;
        let query_name = &f.query_name;
        let access = match f.kind {
            FieldKind::Text => quote! { ::budfinder_seeker::TextField::text_value(&self.#ident) },
            FieldKind::Tags => quote! { ::budfinder_seeker::TagField::tag_value(&self.#ident) },
            FieldKind::Number => {
                quote! { ::budfinder_seeker::NumberField::number_value(&self.#ident) }
            }
        };
        quote! { #query_name => #access, }
    });

    let category_arm = container.category.as_ref().map(|category| {
        quote! { "type" => ::budfinder_seeker::Value::Text(#category), }
    });

    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    Ok(quote! {
        impl #impl_generics #name #ty_generics #where_clause {
            #(#constants)*
        }

        impl #impl_generics ::budfinder_seeker::Record for #name #ty_generics #where_clause {
            fn field_value(&self, field: &str) -> ::budfinder_seeker::Value<'_> {
                match field {
                    #category_arm
                    #(#arms)*
                    _ => ::budfinder_seeker::Value::None,
                }
            }
        }
    })
}
