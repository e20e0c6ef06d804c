use super::{Column, ErrorSet};

#[derive(Debug)]
pub(crate) struct Field {
    /// Field identifier
    pub(crate) ident: syn::Ident,

    /// Field type
    pub(crate) ty: FieldTy,

    /// Column declared with `#[column("...")]`
    pub(crate) column: Option<Column>,
}

#[derive(Debug)]
pub(crate) enum FieldTy {
    /// A value stored in a single column
    Primitive(syn::Type),

    /// A record whose attributes are spliced in with `#[flatten]`
    Flatten(syn::Type),
}

impl FieldTy {
    pub(crate) fn is_flatten(&self) -> bool {
        matches!(self, Self::Flatten(..))
    }
}

impl Field {
    pub(super) fn from_ast(field: &syn::Field) -> syn::Result<Self> {
        let Some(ident) = &field.ident else {
            return Err(syn::Error::new_spanned(field, "record fields must be named"));
        };

        let mut errs = ErrorSet::new();
        let mut column = None;
        let mut flatten = None;

        for attr in &field.attrs {
            if attr.path().is_ident("column") {
                if column.is_some() {
                    errs.push(syn::Error::new_spanned(attr, "duplicate #[column] attribute"));
                } else {
                    match Column::from_ast(attr) {
                        Ok(parsed) => column = Some(parsed),
                        Err(err) => errs.push(err),
                    }
                }
            } else if attr.path().is_ident("flatten") {
                if flatten.is_some() {
                    errs.push(syn::Error::new_spanned(attr, "duplicate #[flatten] attribute"));
                } else if let Err(err) = attr.meta.require_path_only() {
                    errs.push(err);
                } else {
                    flatten = Some(attr.clone());
                }
            }
        }

        if let (Some(attr), Some(_)) = (&flatten, &column) {
            errs.push(syn::Error::new_spanned(
                attr,
                "a #[flatten] field takes its columns from the flattened record; remove #[column]",
            ));
        }

        if let Some(err) = errs.collect() {
            return Err(err);
        }

        let ty = match flatten {
            Some(_) => FieldTy::Flatten(field.ty.clone()),
            None => FieldTy::Primitive(field.ty.clone()),
        };

        Ok(Field {
            ident: ident.clone(),
            ty,
            column,
        })
    }

    /// The attribute name, as matched against renames and column names.
    pub(crate) fn name(&self) -> String {
        let name = self.ident.to_string();
        name.strip_prefix("r#").map(str::to_string).unwrap_or(name)
    }
}
