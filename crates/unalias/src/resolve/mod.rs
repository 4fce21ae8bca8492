//! Alias expansion.
//!
//! One resolution request walks its tokens in order, expanding aliases
//! depth-first. Three request-scoped sets carry the bookkeeping:
//!
//! - `discovered`: terminal values in first-discovery order
//! - `visited`: aliases already expanded during this request
//! - `excluded`: names to strip from `discovered` once the walk is done
//!
//! Exclusions are applied only at the end, so an exclusion anywhere in the
//! request wins over an inclusion of the same value regardless of order.
//!
//! # Cycles
//!
//! - **Direct self-reference**: an alias never re-expands into its own name.
//!   If nothing else is left after removing it, the alias name itself
//!   becomes a terminal value (`cyclic -> [cyclic]` resolves to `cyclic`).
//! - **Indirect cycles** (`a -> [b]`, `b -> [a]`): an included token whose
//!   alias was already visited is skipped. The repeated branch contributes
//!   nothing.
//! - **Excluded cycles**: an excluded alias already recorded in `excluded`
//!   has been (or is being) expanded under exclusion, so it is not expanded
//!   again.

use indexmap::IndexSet;
use rustc_hash::{FxBuildHasher, FxHashSet};
use tracing::{debug, trace};
use unalias_stack::with_stack_headroom;

use crate::table::AliasTable;
use crate::token::{Polarity, Token};

/// Request-scoped bookkeeping for one resolution call.
struct ResolveCtx<'a> {
    aliases: &'a AliasTable,
    discovered: IndexSet<&'a str, FxBuildHasher>,
    visited: FxHashSet<&'a str>,
    excluded: FxHashSet<&'a str>,
}

impl<'a> ResolveCtx<'a> {
    fn new(aliases: &'a AliasTable) -> Self {
        ResolveCtx {
            aliases,
            discovered: IndexSet::default(),
            visited: FxHashSet::default(),
            excluded: FxHashSet::default(),
        }
    }

    fn expand(&mut self, tokens: impl IntoIterator<Item = &'a str>, inherited: Polarity) {
        with_stack_headroom(|| {
            for raw in tokens {
                self.visit(Token::parse(raw, inherited));
            }
        });
    }

    fn visit(&mut self, token: Token<'a>) {
        let name = token.name();
        let polarity = token.polarity();

        if !polarity.is_exclude() && self.visited.contains(name) {
            trace!(alias = name, "cycle, skipping revisit");
            return;
        }

        let aliases = self.aliases;
        let Some(definition) = aliases.get(name) else {
            if polarity.is_exclude() {
                self.excluded.insert(name);
            } else {
                self.discovered.insert(name);
            }
            return;
        };

        self.visited.insert(name);

        if polarity.is_exclude() && !self.excluded.insert(name) {
            trace!(alias = name, "already excluded");
            return;
        }

        // An alias never expands into itself.
        let body = definition
            .iter()
            .map(String::as_str)
            .filter(move |&t| t != name);
        let self_loop = body.clone().next().is_none();
        trace!(alias = name, %token, "expanding");
        self.expand(body, polarity);

        if self_loop && !polarity.is_exclude() {
            trace!(alias = name, "self-loop, resolving to own name");
            self.discovered.insert(name);
        }
    }

    fn finish(self) -> Vec<String> {
        let ResolveCtx {
            discovered,
            excluded,
            ..
        } = self;
        let discovered_count = discovered.len();
        let resolved: Vec<String> = discovered
            .into_iter()
            .filter(|name| !excluded.contains(name))
            .map(str::to_owned)
            .collect();
        debug!(
            discovered = discovered_count,
            excluded = excluded.len(),
            resolved = resolved.len(),
            "resolution finished"
        );
        resolved
    }
}

/// Resolve `tokens` against `aliases` into deduplicated terminal values.
///
/// Values appear in the order the walk first discovers them; anything
/// reached through an exclusion is removed. Never fails: unknown names are
/// terminal values and every cycle shape terminates.
#[tracing::instrument(level = "debug", skip_all, fields(tokens = tokens.len()))]
pub fn resolve_tokens<S: AsRef<str>>(aliases: &AliasTable, tokens: &[S]) -> Vec<String> {
    let mut ctx = ResolveCtx::new(aliases);
    ctx.expand(tokens.iter().map(|t| t.as_ref()), Polarity::Include);
    ctx.finish()
}
