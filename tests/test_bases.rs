//! Integration tests for the basis rewriters
//!
//! Every pass is checked over a corpus covering all operators and both
//! constants: the result must only use the operators of its basis and must
//! have the same truth table as the input.

use propositional_bases::{
    implies_false_from_implies_not, nand_from_not_and, to_implies_false, to_implies_not, to_nand,
    to_not_and, to_not_and_or, Basis, BinaryOp, Formula, Operator, RewriteError,
};
use std::io;

const CORPUS: &[&str] = &[
    "p",
    "T",
    "F",
    "~p",
    "~T",
    "p & q",
    "p | q",
    "p -> q",
    "p + q",
    "p <-> q",
    "p -& q",
    "p -| q",
    "T & F",
    "p -> T",
    "F | ~q",
    "(p + q) <-> (r -| T)",
    "~(p -& q) -| (r -> F)",
    "p -> q -> r",
    "(p <-> q) + (q <-> r) & s",
    "a & (b | c) -> ~(d + e) <-> f -& (g -| T)",
    "~~(x -& ~y) | F + (x <-> z)",
    "((p -> q) -> p) -> p",
];

fn corpus() -> Vec<Formula> {
    CORPUS
        .iter()
        .map(|text| Formula::parse(text).expect("corpus formula should parse"))
        .collect()
}

fn parse(text: &str) -> Formula {
    Formula::parse(text).unwrap()
}

#[test]
fn test_operator_closure() {
    for basis in Basis::ALL {
        for f in corpus() {
            let g = basis.rewrite(&f).unwrap();
            assert!(
                basis.admits(&g),
                "{} of {} uses {:?}",
                basis,
                f,
                g.operators()
            );
        }
    }
}

#[test]
fn test_no_constants_survive() {
    for basis in [Basis::NotAndOr, Basis::NotAnd, Basis::Nand, Basis::ImpliesNot] {
        for f in corpus() {
            let g = basis.rewrite(&f).unwrap();
            let ops = g.operators();
            assert!(!ops.contains(&Operator::True), "{} of {}: {}", basis, f, g);
            assert!(!ops.contains(&Operator::False), "{} of {}: {}", basis, f, g);
        }
    }
    for f in corpus() {
        let g = to_implies_false(&f).unwrap();
        assert!(!g.operators().contains(&Operator::True), "{}: {}", f, g);
    }
}

#[test]
fn test_semantic_equivalence() {
    for basis in Basis::ALL {
        for f in corpus() {
            let g = basis.rewrite(&f).unwrap();
            assert!(g.equivalent_to(&f), "{} of {} gave {}", basis, f, g);
        }
    }
}

#[test]
fn test_idempotence_on_restricted_input() {
    let restricted = [
        (Basis::NotAndOr, "~(p & q) | ~~r & p"),
        (Basis::NotAnd, "~(~p & q) & ~~r"),
        (Basis::Nand, "p -& (q -& (p -& r))"),
        (Basis::ImpliesNot, "~(p -> ~q) -> ~~r"),
        (Basis::ImpliesFalse, "(p -> q) -> r -> p"),
    ];
    for (basis, text) in restricted {
        let f = parse(text);
        assert!(basis.admits(&f));
        let g = basis.rewrite(&f).unwrap();
        assert!(basis.admits(&g));
        assert_eq!(g.truth_table().values(), f.truth_table().values());
    }
}

#[test]
fn test_passes_through_own_operators() {
    let f = parse("~(p & q) | ~~r & p");
    assert_eq!(to_not_and_or(&f).unwrap(), f);

    let g = parse("~(~p & q) & ~~r");
    assert_eq!(to_not_and(&g).unwrap(), g);

    let h = parse("~(p -> ~q) -> ~~r");
    assert_eq!(to_implies_not(&h).unwrap(), h);
}

#[test]
fn test_pipeline_consistency() {
    for f in corpus() {
        let direct = to_nand(&f).unwrap();
        let staged = nand_from_not_and(&to_not_and(&f).unwrap()).unwrap();
        assert!(direct.equivalent_to(&staged), "nand pipeline on {}", f);

        let direct = to_implies_false(&f).unwrap();
        let staged = implies_false_from_implies_not(&to_implies_not(&f).unwrap()).unwrap();
        assert!(direct.equivalent_to(&staged), "implies-false pipeline on {}", f);
    }
}

#[test]
fn test_determinism() {
    for basis in Basis::ALL {
        for f in corpus() {
            let first = basis.rewrite(&f).unwrap();
            let second = basis.rewrite(&f.clone()).unwrap();
            assert_eq!(first, second);
        }
    }
}

#[test]
fn test_constants_use_smallest_variable() {
    let f = parse("z & T | y");
    let g = to_not_and_or(&f).unwrap();
    assert_eq!(g.to_string(), "z & (y | ~y) | y");
    assert_eq!(g.variables(), f.variables());
}

/// Left-nested chain `x00 + x01 + ...` over `n` variables, or `<->` for `iff`
fn chain(n: usize, iff: bool) -> Formula {
    let op = if iff { BinaryOp::Iff } else { BinaryOp::Xor };
    (1..n).fold(Formula::variable("x00"), |acc, i| {
        Formula::binary(op, acc, Formula::variable(&format!("x{:02}", i)))
    })
}

#[test]
fn test_pipelines_stay_linear_on_nested_xor() {
    let f = chain(30, false);
    assert_eq!(f.size(), 59);

    for (basis, g) in [
        (Basis::Nand, to_nand(&f).unwrap()),
        (Basis::ImpliesFalse, to_implies_false(&f).unwrap()),
        (Basis::NotAnd, to_not_and(&f).unwrap()),
        (Basis::ImpliesNot, to_implies_not(&f).unwrap()),
    ] {
        assert!(basis.admits(&g), "{}", basis);
        assert_eq!(g.variables(), f.variables());
        assert!(
            g.shared_size() <= 200 * f.size(),
            "{} produced {} distinct nodes",
            basis,
            g.shared_size()
        );
    }

    let h = chain(30, true);
    assert!(to_nand(&h).unwrap().shared_size() <= 200 * h.size());
    assert!(to_implies_false(&h).unwrap().shared_size() <= 200 * h.size());
}

#[test]
fn test_nested_xor_and_iff_stay_equivalent() {
    for iff in [false, true] {
        let f = chain(6, iff);
        for basis in Basis::ALL {
            let g = basis.rewrite(&f).unwrap();
            assert_eq!(g.truth_table().values(), f.truth_table().values());
        }
    }
}

#[test]
fn test_shared_input_is_rewritten_consistently() {
    // The same subformula reached through both operands
    let shared = parse("(p + q) <-> ~r");
    let f = Formula::binary(BinaryOp::Nand, shared.clone(), shared.clone());
    for basis in Basis::ALL {
        let g = basis.rewrite(&f).unwrap();
        assert!(basis.admits(&g));
        assert!(g.equivalent_to(&f));
        let unshared = parse("((p + q) <-> ~r) -& ((p + q) <-> ~r)");
        assert_eq!(g, basis.rewrite(&unshared).unwrap());
    }
}

// ========== Example Scenarios ==========

#[test]
fn test_implication_into_not_and_or() {
    let f = parse("p -> q");
    let g = to_not_and_or(&f).unwrap();
    assert_eq!(g, parse("~p | q"));
    assert_eq!(g.truth_table().values(), vec![true, true, false, true]);
    assert_eq!(g.truth_table().values(), f.truth_table().values());
}

#[test]
fn test_true_into_not_and_without_variables() {
    let g = to_not_and(&Formula::constant(true)).unwrap();
    assert_eq!(g.to_string(), "~(p & ~p)");
    assert!(g.is_tautology());
}

#[test]
fn test_xor_into_implies_not() {
    let f = parse("p + q");
    let g = to_implies_not(&f).unwrap();
    assert!(Basis::ImpliesNot.admits(&g));
    // FF, FT, TF, TT
    assert_eq!(g.truth_table().values(), vec![false, true, true, false]);
}

#[test]
fn test_nand_into_nand() {
    let p = Formula::variable("p");
    let q = Formula::variable("q");
    let f = p.nand(&q);
    let g = to_nand(&f).unwrap();

    // ~(p & q) with `~x` as `x -& x` and `p & q` as a doubled nand
    let t = p.nand(&q);
    let conjunction = t.nand(&t);
    assert_eq!(g, conjunction.nand(&conjunction));
    assert!(g.equivalent_to(&p.and(&q).not()));
}

#[test]
fn test_false_into_implies_false() {
    let falsum = Formula::constant(false);
    assert_eq!(to_implies_false(&falsum).unwrap(), falsum);
}

// ========== Errors ==========

#[test]
fn test_stage_two_rejects_foreign_operators() {
    let f = parse("p | q");
    let err = nand_from_not_and(&f).unwrap_err();
    assert_eq!(
        err,
        RewriteError::UnsupportedOperator {
            operator: Operator::Or,
            stage: "nand_from_not_and",
        }
    );
    assert_eq!(err.to_string(), "Unsupported operator '|' in nand_from_not_and");

    let g = Formula::binary(BinaryOp::Xor, parse("p -> q"), parse("~q"));
    assert!(implies_false_from_implies_not(&g).is_err());
}

#[test]
fn test_rewrite_error_converts_to_io_error() {
    fn run(f: &Formula) -> io::Result<Formula> {
        Ok(nand_from_not_and(f)?)
    }
    let err = run(&parse("p <-> q")).unwrap_err();
    assert_eq!(err.kind(), io::ErrorKind::InvalidData);
    assert!(run(&parse("~(p & q)")).is_ok());
}

#[test]
fn test_basis_names_round_trip() {
    for basis in Basis::ALL {
        let parsed: Basis = basis.to_string().parse().unwrap();
        assert_eq!(parsed, basis);
    }
    assert!("xor".parse::<Basis>().is_err());
}
