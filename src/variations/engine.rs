//! Candidate generation: case variants seeded first, numeric suffixes after.

use std::collections::HashSet;

use crate::context::ServiceContext;
use crate::variations::{casing, GeneratedEmail};

/// The pool is grown to this multiple of the requested count before
/// truncation, giving the dedup step headroom over suffix/case collisions.
const POOL_HEADROOM_FACTOR: usize = 2;

/// Hard bound on suffix values tried, as a multiple of the requested count.
/// Guarantees termination even when case diversity is minimal; must stay
/// independent of whether the pool target was reached.
const SUFFIX_EFFORT_FACTOR: usize = 5;

/// Generates up to `count` unique address variations of `base`.
///
/// Case variants of the local part are seeded first, then numeric-suffix
/// forms (`{variant}{n}@{domain}`) in suffix-then-variant order until the
/// pool reaches `count * 2` entries or the suffix counter passes
/// `count * 5`. The insertion-ordered pool is truncated to `count` and each
/// surviving address gets a fresh id and a zero copy count.
///
/// A base that is not exactly `local@domain` with both parts non-empty
/// yields an empty vec; callers are expected to have validated upstream.
/// Requesting more than the pool can uniquely supply yields fewer items,
/// never an error.
#[must_use]
pub fn generate(ctx: &ServiceContext, base: &str, count: usize) -> Vec<GeneratedEmail> {
    let Some((local, domain)) = split_address(base) else {
        return Vec::new();
    };

    let variants = casing::case_variants(local);
    let mut pool = UniquePool::new();

    for variant in &variants {
        pool.insert(format!("{variant}@{domain}"));
    }

    let pool_target = count.saturating_mul(POOL_HEADROOM_FACTOR);
    let max_suffix = count.saturating_mul(SUFFIX_EFFORT_FACTOR);
    let mut suffix = 1;
    while pool.len() < pool_target && suffix <= max_suffix {
        for variant in &variants {
            pool.insert(format!("{variant}{suffix}@{domain}"));
        }
        suffix += 1;
    }

    pool.into_first(count)
        .into_iter()
        .map(|email| GeneratedEmail { id: ctx.id_gen.generate_id(), email, copy_count: 0 })
        .collect()
}

/// Splits `base` into local part and domain.
///
/// Returns `None` unless there is exactly one `@` with non-empty text on
/// both sides.
fn split_address(base: &str) -> Option<(&str, &str)> {
    let (local, domain) = base.split_once('@')?;
    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return None;
    }
    Some((local, domain))
}

/// Insertion-ordered string set: `HashSet` membership, `Vec` order.
struct UniquePool {
    seen: HashSet<String>,
    ordered: Vec<String>,
}

impl UniquePool {
    fn new() -> Self {
        Self { seen: HashSet::new(), ordered: Vec::new() }
    }

    /// Inserts `candidate` unless an equal string was inserted before.
    fn insert(&mut self, candidate: String) {
        if self.seen.insert(candidate.clone()) {
            self.ordered.push(candidate);
        }
    }

    fn len(&self) -> usize {
        self.ordered.len()
    }

    /// Consumes the pool, keeping the first `n` entries in insertion order.
    fn into_first(self, n: usize) -> Vec<String> {
        let mut ordered = self.ordered;
        ordered.truncate(n);
        ordered
    }
}
