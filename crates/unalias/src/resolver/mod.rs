//! Public resolver surface.

use crate::resolve::resolve_tokens;
use crate::table::AliasTable;

/// Resolves tokens against a borrowed, read-only alias table.
///
/// Each call builds its own bookkeeping and drops it on return, so one
/// `Resolver` can serve any number of calls, from any number of threads.
#[derive(Copy, Clone, Debug)]
pub struct Resolver<'t> {
    aliases: &'t AliasTable,
}

impl<'t> Resolver<'t> {
    pub fn new(aliases: &'t AliasTable) -> Self {
        Resolver { aliases }
    }

    /// The alias table this resolver reads from.
    #[inline]
    pub fn aliases(&self) -> &'t AliasTable {
        self.aliases
    }

    /// Resolve a mix of terminal values, aliases and `-` exclusions into
    /// deduplicated terminal values.
    ///
    /// ```
    /// use unalias::{AliasTable, Resolver};
    ///
    /// let aliases: AliasTable = [
    ///     ("staff", vec!["alice", "bob", "interns"]),
    ///     ("interns", vec!["carol"]),
    /// ]
    /// .into_iter()
    /// .collect();
    ///
    /// let resolver = Resolver::new(&aliases);
    /// assert_eq!(resolver.resolve_all(&["staff", "-bob"]), ["alice", "carol"]);
    /// ```
    pub fn resolve_all<S: AsRef<str>>(&self, tokens: &[S]) -> Vec<String> {
        resolve_tokens(self.aliases, tokens)
    }

    /// Resolve a single token. Same as `resolve_all(&[token])`.
    pub fn resolve_one(&self, token: &str) -> Vec<String> {
        self.resolve_all(&[token])
    }
}
