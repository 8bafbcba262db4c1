//! View derive macro.

use quote::quote;
use syn::{Expr, Ident};

use crate::utils::{expect_string_literal, parse_assignments};

mod attributes {
    pub(super) const VIEW: &str = "view";
    pub(super) const KIND: &str = "kind";
    pub(super) const MODEL: &str = "model";
}

/// Map a kind, in either verb vocabulary, to its `ViewKind` variant.
fn kind_variant(kind: &str) -> Option<&'static str> {
    match kind {
        "list" | "changelist" => Some("List"),
        "detail" => Some("Detail"),
        "create" | "add" => Some("Create"),
        "update" | "change" => Some("Update"),
        "delete" => Some("Delete"),
        "other" => Some("Other"),
        _ => None,
    }
}

pub fn derive(input: &mut syn::DeriveInput) -> syn::Result<proc_macro2::TokenStream> {
    let root_ident = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let mut kind = Ident::new("Other", proc_macro2::Span::call_site());
    let mut model = None;

    for (ident, value) in parse_assignments(&input.attrs, attributes::VIEW)? {
        match ident.to_string().as_str() {
            attributes::KIND => {
                let lit = expect_string_literal(&value)?;
                let variant = kind_variant(&lit.value()).ok_or_else(|| {
                    syn::Error::new_spanned(
                        &lit,
                        format!(
                            "unknown view kind `{}`: expected one of `list`, `changelist`, `detail`, `create`, `add`, `update`, `change`, `delete` or `other`",
                            lit.value()
                        ),
                    )
                })?;

                kind = Ident::new(variant, lit.span());
            }
            attributes::MODEL => match value {
                Expr::Path(expr) => model = Some(expr.path),
                value => {
                    return Err(syn::Error::new_spanned(value, "expected a model type path"));
                }
            },
            _ => {
                return Err(syn::Error::new_spanned(
                    &ident,
                    format!("unknown attribute `{ident}`"),
                ));
            }
        }
    }

    let name = root_ident.to_string();

    let model_fn = model.map(|model| {
        quote! {
            fn model() -> Option<routology::ModelInfo> {
                Some(routology::ModelInfo::of::<#model>())
            }
        }
    });

    Ok(quote! {
        impl #impl_generics routology::View for #root_ident #ty_generics #where_clause {
            const NAME: &'static str = #name;
            const MODULE_PATH: &'static str = module_path!();
            const KIND: routology::ViewKind = routology::ViewKind::#kind;

            #model_fn
        }
    })
}
