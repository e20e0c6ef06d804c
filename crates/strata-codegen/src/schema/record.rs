use super::{ErrorSet, Field};

#[derive(Debug)]
pub(crate) struct Record {
    /// Record visibility
    pub(crate) vis: syn::Visibility,

    /// Record identifier
    pub(crate) ident: syn::Ident,

    /// Fields stored in their own column, in declaration order
    pub(crate) own: Vec<Field>,

    /// Fields flattened with `#[flatten]`, in declaration order
    pub(crate) flattened: Vec<Field>,

    /// Identifier of the generated struct of field paths
    pub(crate) field_struct_ident: syn::Ident,
}

impl Record {
    pub(crate) fn from_ast(ast: &syn::ItemStruct) -> syn::Result<Record> {
        if !ast.generics.params.is_empty() {
            return Err(syn::Error::new_spanned(
                &ast.generics,
                "record types cannot be generic",
            ));
        }

        let syn::Fields::Named(node) = &ast.fields else {
            return Err(syn::Error::new_spanned(
                &ast.fields,
                "record fields must be named",
            ));
        };

        let mut errs = ErrorSet::new();
        let mut own = vec![];
        let mut flattened = vec![];

        for node in &node.named {
            match Field::from_ast(node) {
                Ok(field) if field.ty.is_flatten() => flattened.push(field),
                Ok(field) => own.push(field),
                Err(err) => errs.push(err),
            }
        }

        if let Some(err) = errs.collect() {
            return Err(err);
        }

        Ok(Record {
            vis: ast.vis.clone(),
            ident: ast.ident.clone(),
            own,
            flattened,
            field_struct_ident: quote::format_ident!("{}Fields", ast.ident),
        })
    }
}
