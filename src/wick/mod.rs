//! Wick's theorem for fermionic operator products.
//!
//! ## Example
//! ```rust
//! use wick_rs::{op::{fannx, fcrex}, wick::WickTheorem};
//!
//! let product = fannx("p3") * fannx("p4") * fcrex("p1") * fcrex("p2");
//! let result = WickTheorem::new(product).full_contractions(true).compute();
//! assert_eq!(
//!     result.to_string(),
//!     "-1.0 delta^{p3}_{p1} delta^{p4}_{p2} + delta^{p3}_{p2} delta^{p4}_{p1}"
//! );
//! ```

pub mod pairing;
pub mod sign;

use crate::{delta::Delta, expr::Expr, op::Action, sum::ExprSum};

use self::pairing::all_pairings;

/// Evaluator for a single operator product.
#[derive(Clone, Debug)]
pub struct WickTheorem {
    expr: Expr,
    full_contractions: bool,
}

impl WickTheorem {
    /// Evaluator for `expr`, with full contractions enabled.
    pub fn new(expr: Expr) -> Self {
        WickTheorem {
            expr,
            full_contractions: true,
        }
    }

    /// Choose between full contraction and returning the product unchanged.
    pub fn full_contractions(mut self, enabled: bool) -> Self {
        self.full_contractions = enabled;
        self
    }

    pub fn expr(&self) -> &Expr {
        &self.expr
    }

    pub fn compute(&self) -> ExprSum {
        if self.full_contractions {
            full_contraction(&self.expr)
        } else {
            // Normal ordering is not supported, the product is its own expansion.
            ExprSum::new(vec![self.expr.clone()])
        }
    }
}

/// Sum over all complete contractions of `term`.
///
/// Each output term carries `sign * term.coeff`, no operators, the deltas of
/// `term` followed by one delta per contraction in pairing order. A product
/// with no operators is returned unchanged, one with unequal numbers of
/// creators and annihilators gives zero.
pub fn full_contraction(term: &Expr) -> ExprSum {
    if term.ops.is_empty() {
        return ExprSum::new(vec![term.clone()]);
    }
    if term.count(Action::Create) != term.count(Action::Annihilate) {
        return ExprSum::zero();
    }
    all_pairings(&term.ops)
        .into_iter()
        .map(|pairing| {
            let mut deltas = term.deltas.clone();
            deltas.extend(pairing.iter().map(|pair| {
                Delta::new(
                    term.ops[pair.annihilator].label.clone(),
                    term.ops[pair.creator].label.clone(),
                )
            }));
            Expr {
                coeff: sign::sign(&pairing) * term.coeff,
                ops: vec![],
                deltas,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::op::{fannx, fcrex};

    #[test]
    fn pass_through_keeps_operators() {
        let product = fannx("p") * fcrex("q");
        let result = WickTheorem::new(product.clone())
            .full_contractions(false)
            .compute();
        assert_eq!(result.terms(), &[product]);
    }

    #[test]
    fn unbalanced_product_is_zero() {
        assert!(full_contraction(&(fannx("p") * fannx("q"))).is_zero());
        assert!(full_contraction(&Expr::from(fcrex("q"))).is_zero());
    }

    #[test]
    fn scalar_is_unchanged() {
        let scalar = Expr::scalar(3.0).with_delta(Delta::new("i", "j"));
        assert_eq!(full_contraction(&scalar).terms(), &[scalar]);
    }

    #[test]
    fn input_deltas_come_first() {
        let term =
            Expr::scalar(2.0).with_delta(Delta::new("i", "j")) * fannx("p") * fcrex("q");
        let result = full_contraction(&term);
        assert_eq!(result.to_string(), "2.0 delta^{i}_{j} delta^{p}_{q}");
    }

    #[test]
    fn all_terms_fully_contracted() {
        let product =
            fannx("p1") * fannx("p2") * fannx("p3") * fcrex("q1") * fcrex("q2") * fcrex("q3");
        let result = full_contraction(&product);
        assert_eq!(result.len(), 6);
        assert!(result.iter().all(|t| t.is_contracted() && t.deltas.len() == 3));
    }
}
