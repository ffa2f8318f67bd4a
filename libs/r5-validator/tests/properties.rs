//! Property-based tests for the validation protocol using QuickCheck

use ferrum_r5_validator::{Flow, Validate, ValidationContext};
use quickcheck::{QuickCheck, TestResult};

/// A recursive node: a chain of `depth` levels ending in a leaf that may be
/// missing its required value.
struct Chain {
    value: Option<String>,
    child: Option<Box<Chain>>,
}

impl Validate for Chain {
    fn validate_with(&self, ctx: &mut ValidationContext) -> Flow {
        ctx.required_str("Value", &self.value)?;
        ctx.optional_node("Child", &self.child)
    }
}

fn chain(depth: usize, broken_at: Option<usize>) -> Chain {
    let mut node = Chain {
        value: Some(format!("level-{}", depth)),
        child: None,
    };
    if broken_at == Some(depth) {
        node.value = None;
    }
    for level in (0..depth).rev() {
        node = Chain {
            value: if broken_at == Some(level) {
                None
            } else {
                Some(format!("level-{}", level))
            },
            child: Some(Box::new(node)),
        };
    }
    node
}

struct Bag {
    items: Vec<Chain>,
    min: usize,
}

impl Validate for Bag {
    fn validate_with(&self, ctx: &mut ValidationContext) -> Flow {
        ctx.repeated("Item", &self.items, self.min)
    }
}

#[test]
fn prop_validation_is_idempotent() {
    fn prop(depth: u8, broken: Option<u8>) -> bool {
        let depth = (depth % 32) as usize;
        let node = chain(depth, broken.map(|b| (b % 32) as usize));
        node.validate() == node.validate() && node.validate_all() == node.validate_all()
    }

    QuickCheck::new()
        .tests(200)
        .quickcheck(prop as fn(u8, Option<u8>) -> bool);
}

#[test]
fn prop_error_path_depth_matches_fault_depth() {
    fn prop(depth: u8, broken: u8) -> TestResult {
        let depth = (depth % 32) as usize;
        let broken = (broken % 32) as usize;
        if broken > depth {
            return TestResult::discard();
        }

        let err = match chain(depth, Some(broken)).validate() {
            Err(err) => err,
            Ok(()) => return TestResult::failed(),
        };

        let expected: String = std::iter::repeat("Child.")
            .take(broken)
            .chain(std::iter::once("Value"))
            .collect();
        TestResult::from_bool(err.context().len() == broken && err.path() == expected)
    }

    QuickCheck::new()
        .tests(200)
        .quickcheck(prop as fn(u8, u8) -> TestResult);
}

#[test]
fn prop_cardinality_boundary() {
    fn prop(min: u8) -> TestResult {
        let min = (min % 16) as usize;
        if min == 0 {
            return TestResult::discard();
        }

        let under = Bag {
            items: (0..min - 1).map(|_| chain(0, None)).collect(),
            min,
        };
        let exact = Bag {
            items: (0..min).map(|_| chain(0, None)).collect(),
            min,
        };

        let under_fails = matches!(under.validate(), Err(ref e) if e.is_min_cardinality());
        TestResult::from_bool(under_fails && exact.validate().is_ok())
    }

    QuickCheck::new()
        .tests(100)
        .quickcheck(prop as fn(u8) -> TestResult);
}

#[test]
fn prop_fail_fast_returns_first_exhaustive_error() {
    fn prop(faults: Vec<bool>) -> bool {
        let items: Vec<Chain> = faults
            .iter()
            .map(|&broken| chain(1, if broken { Some(1) } else { None }))
            .collect();
        let bag = Bag { items, min: 0 };

        match (bag.validate(), bag.validate_all()) {
            (Ok(()), Ok(())) => true,
            (Err(first), Err(all)) => {
                all.len() == faults.iter().filter(|&&b| b).count()
                    && all.first() == Some(&first)
            }
            _ => false,
        }
    }

    QuickCheck::new()
        .tests(200)
        .quickcheck(prop as fn(Vec<bool>) -> bool);
}
