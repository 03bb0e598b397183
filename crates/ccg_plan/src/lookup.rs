//! Search scope to lookup-sequence resolution.

use ccg_common::SearchScope;
use ccg_config::RuntimeApi;

/// One lookup in a property's fallback chain.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LookupStep {
    /// Search the object itself.
    InSelf,
    /// Search the object's descendants.
    InChildren,
    /// Search the object's ancestors.
    InParent,
}

impl LookupStep {
    /// The runtime method performing this lookup.
    pub fn method<'a>(&self, runtime: &'a RuntimeApi) -> &'a str {
        match self {
            LookupStep::InSelf => &runtime.find_in_self,
            LookupStep::InChildren => &runtime.find_in_children,
            LookupStep::InParent => &runtime.find_in_parent,
        }
    }

    /// The scope flag this step corresponds to.
    pub fn scope(&self) -> SearchScope {
        match self {
            LookupStep::InSelf => SearchScope::SELF,
            LookupStep::InChildren => SearchScope::CHILDREN,
            LookupStep::InParent => SearchScope::PARENT,
        }
    }
}

use LookupStep::{InChildren, InParent, InSelf};

/// Indexed by scope bits. Order within each entry is always
/// Self, Children, Parent.
static LOOKUP_TABLE: [&[LookupStep]; 8] = [
    &[],
    &[InSelf],
    &[InChildren],
    &[InSelf, InChildren],
    &[InParent],
    &[InSelf, InParent],
    &[InChildren, InParent],
    &[InSelf, InChildren, InParent],
];

/// Returns the lookups for `scope` in fixed Self, Children, Parent order,
/// regardless of how the flags were combined. An empty scope yields no steps.
pub fn lookup_steps(scope: SearchScope) -> &'static [LookupStep] {
    LOOKUP_TABLE[(scope.bits() & 0b111) as usize]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_scopes() {
        assert_eq!(lookup_steps(SearchScope::SELF), &[InSelf]);
        assert_eq!(lookup_steps(SearchScope::CHILDREN), &[InChildren]);
        assert_eq!(lookup_steps(SearchScope::PARENT), &[InParent]);
    }

    #[test]
    fn order_is_fixed() {
        assert_eq!(
            lookup_steps(SearchScope::PARENT | SearchScope::SELF),
            &[InSelf, InParent]
        );
        assert_eq!(
            lookup_steps(SearchScope::PARENT | SearchScope::CHILDREN | SearchScope::SELF),
            &[InSelf, InChildren, InParent]
        );
    }

    #[test]
    fn every_combination_matches_its_flags() {
        for bits in 1..8u32 {
            let scope = SearchScope::from_bits_truncate(bits);
            let steps = lookup_steps(scope);
            assert_eq!(steps.len(), bits.count_ones() as usize);
            let rebuilt = steps
                .iter()
                .fold(SearchScope::empty(), |acc, s| acc | s.scope());
            assert_eq!(rebuilt, scope);
        }
    }

    #[test]
    fn empty_scope_has_no_steps() {
        assert!(lookup_steps(SearchScope::empty()).is_empty());
    }

    #[test]
    fn methods_come_from_runtime_api() {
        let runtime = RuntimeApi::default();
        assert_eq!(InSelf.method(&runtime), "GetComponent");
        assert_eq!(InChildren.method(&runtime), "GetComponentInChildren");
        assert_eq!(InParent.method(&runtime), "GetComponentInParent");
    }
}
