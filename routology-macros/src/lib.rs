//! Routology macros

use syn::parse_macro_input;

mod model;
mod utils;
mod view;

/// Derive the `View` trait for a type.
///
/// The view name is the type identifier and its module path is the module where the derive is
/// used.
///
/// # Example
///
/// ```ignore
/// use routology::View;
///
/// #[derive(View)]
/// #[view(kind = "list", model = Article)]
/// struct ArticleList;
/// ```
///
/// Supported kinds (both verb vocabularies are accepted):
/// - `"list"` or `"changelist"`
/// - `"detail"`
/// - `"create"` or `"add"`
/// - `"update"` or `"change"`
/// - `"delete"`
/// - `"other"` (the default)
#[proc_macro_derive(View, attributes(view))]
pub fn derive_view(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    let mut input = parse_macro_input!(input as syn::DeriveInput);

    view::derive(&mut input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

/// Derive the `Model` trait for a type.
///
/// The object name is the type identifier. The monolithic model name defaults to its lower-case
/// form and can be overridden.
///
/// # Example
///
/// ```ignore
/// use routology::Model;
///
/// #[derive(Model)]
/// #[model(name = "post")]
/// struct Article;
/// ```
#[proc_macro_derive(Model, attributes(model))]
pub fn derive_model(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    let mut input = parse_macro_input!(input as syn::DeriveInput);

    model::derive(&mut input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
