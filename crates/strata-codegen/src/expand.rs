mod fields;
mod record;
mod util;

use crate::schema::Record;

use proc_macro2::TokenStream;
use quote::quote;

struct Expand<'a> {
    /// The record being expanded
    record: &'a Record,

    /// Path prefix for strata types
    strata: TokenStream,
}

impl Expand<'_> {
    fn expand(&self) -> TokenStream {
        let record_impls = self.expand_record_impls();
        let field_struct = self.expand_field_struct();

        wrap_in_const(quote! {
            #record_impls
            #field_struct
        })
    }
}

pub(super) fn record(record: &Record) -> TokenStream {
    let strata = quote!(_strata::codegen_support);

    Expand { record, strata }.expand()
}

fn wrap_in_const(code: TokenStream) -> TokenStream {
    quote! {
        const _: () = {
            use strata as _strata;
            #code
        };
    }
}
