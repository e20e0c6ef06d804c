extern crate proc_macro;

use proc_macro::TokenStream;

/// Derives `strata::Record` for a struct with named fields.
///
/// Every field is an attribute stored in one column, matched by name unless
/// `#[column("...")]` names the column. A `#[flatten]` field is itself a
/// record whose attributes are appended after the struct's own.
#[proc_macro_derive(Record, attributes(column, flatten))]
pub fn derive_record(input: TokenStream) -> TokenStream {
    match strata_codegen::generate(input.into()) {
        Ok(output) => output.into(),
        Err(e) => e.to_compile_error().into(),
    }
}
