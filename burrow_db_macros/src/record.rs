use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{Attribute, Data, DeriveInput, Fields, LitStr};

pub fn derive_record(input: TokenStream) -> TokenStream {
    let input = syn::parse_macro_input!(input as DeriveInput);
    match expand(&input) {
        Ok(tokens) => TokenStream::from(tokens),
        Err(err) => TokenStream::from(err.to_compile_error()),
    }
}

/// A visible field as seen by the derive.
enum VisibleField {
    /// Plain named field, optionally annotated under `#[burrow(...)]`.
    Plain {
        ident: syn::Ident,
        annotation: Option<String>,
    },
    /// `#[serde(flatten)]` field whose type is itself a `Record`.
    Flattened { ident: syn::Ident, ty: syn::Type },
}

fn expand(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let name = &input.ident;
    // The namespace is the bare type name, so `Envelope<u8>` and `Envelope<String>`
    // would share one directory.
    if !input.generics.params.is_empty() {
        return Err(syn::Error::new_spanned(
            &input.generics,
            "Record derive does not support generic types; derive it on a concrete type instead",
        ));
    }
    let type_name = extract_type_name(input)?;

    let (kind, visible) = match &input.data {
        Data::Struct(data_struct) => match &data_struct.fields {
            Fields::Named(fields) => {
                let mut visible = Vec::new();
                for field in &fields.named {
                    if let Some(v) = visible_field(field)? {
                        visible.push(v);
                    }
                }
                (quote! { burrow_db::RecordKind::Struct }, visible)
            }
            Fields::Unnamed(_) => (quote! { burrow_db::RecordKind::Tuple }, Vec::new()),
            Fields::Unit => (quote! { burrow_db::RecordKind::Unit }, Vec::new()),
        },
        Data::Enum(_) => (quote! { burrow_db::RecordKind::Enum }, Vec::new()),
        Data::Union(_) => {
            return Err(syn::Error::new_spanned(
                name,
                "Record derive does not support unions",
            ))
        }
    };

    // Descriptor fields are pushed in declared order; flattened records splice theirs in place.
    let field_pushes = visible.iter().map(|field| match field {
        VisibleField::Plain { ident, annotation } => {
            let field_name = ident_name(ident);
            let annotation = match annotation {
                Some(tag) => quote! { ::std::option::Option::Some(#tag) },
                None => quote! { ::std::option::Option::None },
            };
            quote! {
                fields.push(burrow_db::FieldDescriptor::new(#field_name, #annotation));
            }
        }
        VisibleField::Flattened { ty, .. } => quote! {
            fields.extend(<#ty as burrow_db::Record>::descriptor().into_fields());
        },
    });

    let value_arms = visible.iter().filter_map(|field| match field {
        VisibleField::Plain { ident, .. } => {
            let field_name = ident_name(ident);
            Some(quote! {
                #field_name => {
                    return ::std::option::Option::Some(burrow_db::capture_field(&self.#ident));
                }
            })
        }
        VisibleField::Flattened { .. } => None,
    });

    let delegations = visible.iter().filter_map(|field| match field {
        VisibleField::Flattened { ident, .. } => Some(quote! {
            if let ::std::option::Option::Some(value) =
                burrow_db::Record::field_value(&self.#ident, field)
            {
                return ::std::option::Option::Some(value);
            }
        }),
        VisibleField::Plain { .. } => None,
    });

    Ok(quote! {
        impl burrow_db::Record for #name {
            fn descriptor() -> burrow_db::RecordDescriptor {
                #[allow(unused_mut)]
                let mut fields = ::std::vec::Vec::new();
                #(#field_pushes)*
                burrow_db::RecordDescriptor::new(#type_name, #kind, fields)
            }

            #[allow(unused_variables)]
            fn field_value(
                &self,
                field: &str,
            ) -> ::std::option::Option<
                ::std::result::Result<burrow_db::FieldValue, burrow_db::CodecError>,
            > {
                match field {
                    #(#value_arms)*
                    _ => {}
                }
                #(#delegations)*
                ::std::option::Option::None
            }
        }
    })
}

fn visible_field(field: &syn::Field) -> syn::Result<Option<VisibleField>> {
    let Some(ident) = field.ident.clone() else {
        return Ok(None);
    };

    if has_serde_flag(&field.attrs, "skip") {
        return Ok(None);
    }

    let mut skip = false;
    let mut annotation: Option<String> = None;
    for attr in &field.attrs {
        if !attr.path().is_ident("burrow") {
            continue;
        }
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("id") {
                annotation = Some("ID".to_string());
            } else if meta.path.is_ident("tag") {
                let value: LitStr = meta.value()?.parse()?;
                annotation = Some(value.value());
            } else if meta.path.is_ident("skip") {
                skip = true;
            } else {
                return Err(meta.error("expected `id`, `tag = \"...\"` or `skip`"));
            }
            Ok(())
        })?;
    }

    if skip {
        return Ok(None);
    }

    if has_serde_flag(&field.attrs, "flatten") {
        if annotation.is_some() {
            return Err(syn::Error::new_spanned(
                &ident,
                "a flattened field cannot carry an identifier annotation",
            ));
        }
        return Ok(Some(VisibleField::Flattened {
            ident,
            ty: field.ty.clone(),
        }));
    }

    Ok(Some(VisibleField::Plain { ident, annotation }))
}

fn extract_type_name(input: &DeriveInput) -> syn::Result<String> {
    let mut name = None;
    for attr in &input.attrs {
        if !attr.path().is_ident("burrow") {
            continue;
        }
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("name") {
                let value: LitStr = meta.value()?.parse()?;
                let candidate = value.value();
                if candidate.is_empty()
                    || candidate == "."
                    || candidate == ".."
                    || candidate.contains(['/', '\\', '\0'])
                {
                    return Err(syn::Error::new_spanned(
                        &value,
                        "record name must be a single non-empty path segment",
                    ));
                }
                name = Some(candidate);
                Ok(())
            } else {
                Err(meta.error("expected `name = \"...\"`"))
            }
        })?;
    }

    Ok(name.unwrap_or_else(|| input.ident.to_string()))
}

fn has_serde_flag(attrs: &[Attribute], flag: &str) -> bool {
    for attr in attrs {
        if !attr.path().is_ident("serde") {
            continue;
        }

        let mut found = false;
        let _ = attr.parse_nested_meta(|meta| {
            if meta.path.is_ident(flag) {
                found = true;
                Ok(())
            } else {
                skip_meta(meta)
            }
        });

        if found {
            return true;
        }
    }
    false
}

// Consumes `rename = "..."`, `rename(serialize = "...")` and friends so the
// remaining serde options are still visited.
fn skip_meta(meta: syn::meta::ParseNestedMeta) -> syn::Result<()> {
    if meta.input.peek(syn::Token![=]) {
        let _: syn::Expr = meta.value()?.parse()?;
    } else if meta.input.peek(syn::token::Paren) {
        meta.parse_nested_meta(skip_meta)?;
    }
    Ok(())
}

fn ident_name(ident: &syn::Ident) -> String {
    let name = ident.to_string();
    name.strip_prefix("r#").map(str::to_string).unwrap_or(name)
}
