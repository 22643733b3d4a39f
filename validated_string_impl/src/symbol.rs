use std::fmt::{self, Display};
use syn::Path;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Symbol(&'static str);

pub const ALIAS: Symbol = Symbol("alias");
pub const COMPARATOR: Symbol = Symbol("comparator");
pub const NAME: Symbol = Symbol("name");
pub const NORMALIZER: Symbol = Symbol("normalizer");
pub const VALIDATOR: Symbol = Symbol("validator");

impl PartialEq<Symbol> for Path {
    fn eq(&self, word: &Symbol) -> bool {
        self.is_ident(word.0)
    }
}

impl Display for Symbol {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str(self.0)
    }
}
