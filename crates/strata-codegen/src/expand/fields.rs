use super::Expand;
use crate::schema::FieldTy;

use proc_macro2::TokenStream;
use quote::quote;

impl Expand<'_> {
    pub(super) fn expand_field_struct(&self) -> TokenStream {
        let strata = &self.strata;
        let vis = &self.record.vis;
        let field_struct_ident = &self.record.field_struct_ident;

        // Attributes stored in a column are reached through a typed path;
        // flattened records hand out their own field struct.
        let methods = self
            .record
            .own
            .iter()
            .chain(&self.record.flattened)
            .map(|field| {
                let field_ident = &field.ident;
                let name = field.name();

                match &field.ty {
                    FieldTy::Primitive(ty) => quote! {
                        #vis fn #field_ident(&self) -> #strata::Path<#ty> {
                            #strata::Path::from_attribute(#name)
                        }
                    },
                    FieldTy::Flatten(ty) => quote! {
                        #vis fn #field_ident(&self) -> <#ty as #strata::Record>::Fields {
                            <#ty as #strata::Record>::fields()
                        }
                    },
                }
            });

        quote! {
            #vis struct #field_struct_ident {
                _p: (),
            }

            impl #field_struct_ident {
                #( #methods )*
            }
        }
    }

    pub(super) fn expand_fields_fn(&self) -> TokenStream {
        let strata = &self.strata;
        let vis = &self.record.vis;
        let field_struct_ident = &self.record.field_struct_ident;

        quote! {
            #vis fn fields() -> #field_struct_ident {
                <Self as #strata::Record>::fields()
            }
        }
    }
}
