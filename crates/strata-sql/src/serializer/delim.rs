use super::{Formatter, ToSql};

use strata_core::Result;

/// Items separated by an arbitrary delimiter
pub(super) struct Delimited<L>(pub(super) L, pub(super) &'static str);

impl<L, I> ToSql for Delimited<L>
where
    L: IntoIterator<Item = I>,
    I: ToSql,
{
    fn to_sql(self, f: &mut Formatter<'_>) -> Result<()> {
        let mut s = "";
        for i in self.0 {
            fmt!(f, s i);
            s = self.1;
        }
        Ok(())
    }
}
