use proc_macro2::{Literal, TokenStream};
use quote::ToTokens;

pub(crate) fn int(v: usize) -> TokenStream {
    Literal::usize_unsuffixed(v).into_token_stream()
}

/// Creates a new identifier prefixed with `__strata_` to avoid name collisions
/// with user-defined names in generated code.
pub(crate) fn ident(name: &str) -> syn::Ident {
    quote::format_ident!("__strata_{name}")
}
