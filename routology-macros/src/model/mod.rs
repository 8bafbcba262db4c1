//! Model derive macro.

use quote::quote;

use crate::utils::{expect_string_literal, parse_assignments};

mod attributes {
    pub(super) const MODEL: &str = "model";
    pub(super) const NAME: &str = "name";
}

pub fn derive(input: &mut syn::DeriveInput) -> syn::Result<proc_macro2::TokenStream> {
    let root_ident = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let mut model_name = None;

    for (ident, value) in parse_assignments(&input.attrs, attributes::MODEL)? {
        match ident.to_string().as_str() {
            attributes::NAME => {
                let lit = expect_string_literal(&value)?;

                if lit.value().is_empty() {
                    return Err(syn::Error::new_spanned(lit, "model name cannot be empty"));
                }

                model_name = Some(lit);
            }
            _ => {
                return Err(syn::Error::new_spanned(
                    &ident,
                    format!("unknown attribute `{ident}`"),
                ));
            }
        }
    }

    let object_name = root_ident.to_string();

    let model_name = model_name.map(|model_name| {
        quote! {
            const MODEL_NAME: Option<&'static str> = Some(#model_name);
        }
    });

    Ok(quote! {
        impl #impl_generics routology::Model for #root_ident #ty_generics #where_clause {
            const OBJECT_NAME: &'static str = #object_name;

            #model_name
        }
    })
}
