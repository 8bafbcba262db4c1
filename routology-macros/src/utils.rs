//! Shared utilities for derive macros.

use syn::{Expr, ExprAssign, Token, punctuated::Punctuated};

/// Collect the `key = value` assignments of every `#[<name>(...)]` attribute.
///
/// Returns an error if any argument is not an assignment to a plain identifier.
pub fn parse_assignments(
    attrs: &[syn::Attribute],
    name: &str,
) -> syn::Result<Vec<(syn::Ident, Expr)>> {
    let mut assignments = Vec::new();

    for attr in attrs {
        if !attr.path().is_ident(name) {
            continue;
        }

        let exprs = attr.parse_args_with(Punctuated::<Expr, Token![,]>::parse_terminated)?;

        for expr in exprs {
            match expr {
                Expr::Assign(ExprAssign { left, right, .. }) => {
                    let ident = match left.as_ref() {
                        Expr::Path(expr) => expr.path.require_ident()?.clone(),
                        _ => {
                            return Err(syn::Error::new_spanned(left, "expected an identifier"));
                        }
                    };

                    if assignments
                        .iter()
                        .any(|(existing, _): &(syn::Ident, Expr)| *existing == ident)
                    {
                        return Err(syn::Error::new_spanned(
                            &ident,
                            format!("duplicate `{ident}` attribute"),
                        ));
                    }

                    assignments.push((ident, *right));
                }
                expr => {
                    return Err(syn::Error::new_spanned(
                        expr,
                        format!("expected `<attr> = ...` in `{name}` attribute"),
                    ));
                }
            }
        }
    }

    Ok(assignments)
}

/// Extract a string literal from an expression.
pub fn expect_string_literal(expr: &Expr) -> syn::Result<syn::LitStr> {
    match expr {
        Expr::Lit(expr) => match &expr.lit {
            syn::Lit::Str(lit_str) => Ok(lit_str.clone()),
            lit => Err(syn::Error::new_spanned(lit, "expected a string literal")),
        },
        _ => Err(syn::Error::new_spanned(expr, "expected a string literal")),
    }
}
