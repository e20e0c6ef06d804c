use super::{util, Expand};
use crate::schema::FieldTy;

use proc_macro2::TokenStream;
use quote::quote;

impl Expand<'_> {
    pub(super) fn expand_record_impls(&self) -> TokenStream {
        let strata = &self.strata;
        let record_ident = &self.record.ident;
        let field_struct_ident = &self.record.field_struct_ident;
        let attribute_count = self.expand_attribute_count();
        let attributes = self.expand_attributes();
        let get_body = self.expand_get_body();
        let set_body = self.expand_set_body();
        let fields_fn = self.expand_fields_fn();
        let index = util::ident("index");
        let value = util::ident("value");

        quote! {
            impl #strata::Record for #record_ident {
                type Fields = #field_struct_ident;

                const ATTRIBUTE_COUNT: usize = #attribute_count;

                fn fields() -> #field_struct_ident {
                    #field_struct_ident { _p: () }
                }

                fn attributes() -> Vec<#strata::Attribute> {
                    #attributes
                }

                fn get(&self, #index: usize) -> #strata::Value {
                    #get_body
                }

                fn set(&mut self, #index: usize, #value: #strata::Value) -> #strata::Result<()> {
                    #set_body
                }
            }

            impl #record_ident {
                #fields_fn
            }
        }
    }

    fn expand_attribute_count(&self) -> TokenStream {
        let strata = &self.strata;
        let own = util::int(self.record.own.len());
        let flattened = self.record.flattened.iter().map(|field| {
            let ty = field_ty(&field.ty);
            quote!(+ <#ty as #strata::Record>::ATTRIBUTE_COUNT)
        });

        quote!(#own #( #flattened )*)
    }

    fn expand_attributes(&self) -> TokenStream {
        let strata = &self.strata;
        let attributes = util::ident("attributes");

        let own = self.record.own.iter().map(|field| {
            let name = field.name();
            let ty = field_ty(&field.ty);
            let column = match &field.column {
                Some(column) => {
                    let lit = &column.name;
                    quote!(#strata::Option::Some(#strata::Into::into(#lit)))
                }
                None => quote!(#strata::Option::None),
            };

            quote! {
                #strata::Attribute {
                    name: #strata::Into::into(#name),
                    ty: <#ty as #strata::Primitive>::TYPE,
                    nullable: <#ty as #strata::Primitive>::NULLABLE,
                    column: #column,
                }
            }
        });

        let flattened = self.record.flattened.iter().map(|field| {
            let ty = field_ty(&field.ty);
            quote!(#attributes.extend(<#ty as #strata::Record>::attributes());)
        });

        quote! {
            let mut #attributes = vec![ #( #own ),* ];
            #( #flattened )*
            #attributes
        }
    }

    fn expand_get_body(&self) -> TokenStream {
        let strata = &self.strata;
        let index = util::ident("index");

        let own = self.record.own.iter().enumerate().map(|(offset, field)| {
            let field_ident = &field.ident;
            let offset = util::int(offset);
            quote!(#offset => #strata::Primitive::to_value(&self.#field_ident),)
        });

        let flattened = self.expand_flattened_dispatch(|field_ident, rest| {
            quote!(return #strata::Record::get(&self.#field_ident, #rest);)
        });

        quote! {
            match #index {
                #( #own )*
                _ => {
                    #flattened
                    #strata::Value::Null
                }
            }
        }
    }

    fn expand_set_body(&self) -> TokenStream {
        let strata = &self.strata;
        let index = util::ident("index");
        let value = util::ident("value");

        let own = self.record.own.iter().enumerate().map(|(offset, field)| {
            let field_ident = &field.ident;
            let ty = field_ty(&field.ty);
            let offset = util::int(offset);
            quote! {
                #offset => {
                    self.#field_ident = <#ty as #strata::Primitive>::load(#value)?;
                    Ok(())
                }
            }
        });

        let flattened = self.expand_flattened_dispatch(|field_ident, rest| {
            quote!(return #strata::Record::set(&mut self.#field_ident, #rest, #value);)
        });

        quote! {
            match #index {
                #( #own )*
                _ => {
                    #flattened
                    let _ = #value;
                    Err(#strata::no_such_attribute::<Self>(#index))
                }
            }
        }
    }

    /// Routes an index past the record's own fields to the flattened record
    /// that owns it. `dispatch` receives the flattened field and the index
    /// relative to that record.
    fn expand_flattened_dispatch(
        &self,
        dispatch: impl Fn(&syn::Ident, &syn::Ident) -> TokenStream,
    ) -> TokenStream {
        if self.record.flattened.is_empty() {
            return quote!();
        }

        let strata = &self.strata;
        let index = util::ident("index");
        let rest = util::ident("rest");
        let own_count = util::int(self.record.own.len());

        let steps = self.record.flattened.iter().enumerate().map(|(i, field)| {
            let ty = field_ty(&field.ty);
            let call = dispatch(&field.ident, &rest);
            let advance = if i + 1 < self.record.flattened.len() {
                quote!(let #rest = #rest - <#ty as #strata::Record>::ATTRIBUTE_COUNT;)
            } else {
                quote!()
            };

            quote! {
                if #rest < <#ty as #strata::Record>::ATTRIBUTE_COUNT {
                    #call
                }
                #advance
            }
        });

        if self.record.own.is_empty() {
            return quote! {
                let #rest = #index;
                #( #steps )*
            };
        }

        quote! {
            if #index >= #own_count {
                let #rest = #index - #own_count;
                #( #steps )*
            }
        }
    }
}

fn field_ty(ty: &FieldTy) -> &syn::Type {
    match ty {
        FieldTy::Primitive(ty) | FieldTy::Flatten(ty) => ty,
    }
}
