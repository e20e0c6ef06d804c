/// Gathers every problem found in a record declaration so they are all
/// reported by one compile.
#[derive(Debug, Default)]
pub(crate) struct ErrorSet {
    first: Option<syn::Error>,
}

impl ErrorSet {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, err: syn::Error) {
        match &mut self.first {
            Some(first) => first.combine(err),
            None => self.first = Some(err),
        }
    }

    /// The combined error, or `None` when the declaration was clean.
    pub(crate) fn collect(self) -> Option<syn::Error> {
        self.first
    }
}
