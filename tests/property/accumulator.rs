//! Algebraic laws of the accumulator and the annotation layer.

use proptest::prelude::*;

use super::common::{config, validation_strategy};
use validity::laws::monoid_laws;
use validity::{annotate, decorate_list, list_index_label, Validation, Validity};

/// A value whose check returns a canned result.
#[derive(Debug, Clone)]
struct Canned(Validation);

impl Validity for Canned {
    fn validate(&self) -> Validation {
        self.0.clone()
    }
}

proptest! {
    /// Property: the empty accumulator is a two-sided identity.
    #[test]
    fn prop_identity(a in validation_strategy()) {
        prop_assert_eq!(Validation::concat(a.clone(), Validation::empty()), a.clone());
        prop_assert_eq!(Validation::concat(Validation::empty(), a.clone()), a);
    }

    /// Property: concatenation is associative.
    #[test]
    fn prop_associative(
        a in validation_strategy(),
        b in validation_strategy(),
        c in validation_strategy(),
    ) {
        prop_assert_eq!(
            Validation::concat(Validation::concat(a.clone(), b.clone()), c.clone()),
            Validation::concat(a, Validation::concat(b, c))
        );
    }

    /// Property: annotate keeps the number and order of violations and adds the
    /// label outermost.
    #[test]
    fn prop_annotate_wraps_each_chain(v in validation_strategy(), label in "[A-Z][a-z]{0,5}") {
        let annotated = annotate(&Canned(v.clone()), label.clone());
        prop_assert_eq!(annotated.len(), v.len());
        for (outer, inner) in annotated.violations().iter().zip(v.violations()) {
            let outer_labels = outer.labels();
            let inner_labels = inner.labels();
            prop_assert_eq!(outer_labels[0], label.as_str());
            prop_assert_eq!(&outer_labels[1..], inner_labels.as_slice());
            prop_assert_eq!(outer.reason(), inner.reason());
        }
    }

    /// Property: decorate_list is the index-ordered concatenation of the labelled
    /// element results.
    #[test]
    fn prop_decorate_list_is_indexed_concat(items in prop::collection::vec(validation_strategy(), 0..5)) {
        let canned: Vec<Canned> = items.iter().cloned().map(Canned).collect();
        let expected = Validation::concat_all(
            items
                .iter()
                .enumerate()
                .map(|(i, v)| v.clone().decorate(list_index_label(i))),
        );
        prop_assert_eq!(decorate_list(&canned, Canned::validate), expected);
    }
}

#[test]
fn test_validation_monoid_suite() {
    monoid_laws(
        "Validation",
        validation_strategy,
        Validation::empty,
        |a: &Validation, b: &Validation| Validation::concat(a.clone(), b.clone()),
    )
    .assert_holds_with(&config());
}
