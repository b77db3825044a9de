//! Tests for the `formula!` procedural macro

use propositional_bases::{formula, to_implies_not, Formula};

#[test]
fn test_string_literals_and_constants() {
    let f = formula!("p" & ~"q" | T);
    assert_eq!(f, Formula::parse("p & ~q | T").unwrap());

    let g = formula!(F -> "p");
    assert_eq!(g.to_string(), "F -> p");
}

#[test]
fn test_existing_formulas_are_borrowed() {
    let p = Formula::variable("p");
    let q = Formula::variable("q");

    let f = formula!(p -& q);
    let g = formula!(p -| q);

    // p and q are still usable
    assert_eq!(f, p.nand(&q));
    assert_eq!(g, p.nor(&q));
}

#[test]
fn test_precedence_matches_parser() {
    let p = Formula::variable("p");
    let q = Formula::variable("q");
    let r = Formula::variable("r");

    assert_eq!(
        formula!(p <-> q -> r | p + q & !r),
        Formula::parse("p <-> q -> r | p + q & ~r").unwrap()
    );
    assert_eq!(
        formula!(p -> q -> r),
        Formula::parse("p -> (q -> r)").unwrap()
    );
    assert_eq!(
        formula!((p | q) & r),
        Formula::parse("(p | q) & r").unwrap()
    );
    assert_eq!(formula!(p ^ q), formula!(p + q));
}

#[test]
fn test_composition() {
    let a = formula!("a" -> "b");
    let b = formula!(~a <-> "c");
    assert_eq!(b.to_string(), "~(a -> b) <-> c");

    let rewritten = to_implies_not(&formula!(a & b)).unwrap();
    assert!(rewritten.equivalent_to(&a.and(&b)));
}
