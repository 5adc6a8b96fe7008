//! Terms: a scalar coefficient times a product of deltas and operators.

use std::{fmt, ops::Mul};

use pretty::RcDoc;
use winnow::{
    LocatingSlice, ModalResult, Parser,
    ascii::{float, multispace0},
    combinator::{alt, fail, opt, preceded, repeat, terminated},
    error::{StrContext, StrContextValue},
};

use crate::{
    delta::Delta,
    op::{Action, Op},
    text::{HasParser, Notation, ToDoc},
};

/// A single term `coeff * deltas * ops`.
#[derive(Clone, Debug, PartialEq)]
pub struct Expr {
    /// Scalar coefficient, 0 is the additive identity.
    pub coeff: f64,
    /// Operators remaining in the term, in product order.
    pub ops: Vec<Op>,
    /// Delta factors, in the order they were produced.
    pub deltas: Vec<Delta>,
}

impl Default for Expr {
    fn default() -> Self {
        Expr::scalar(1.0)
    }
}

impl Expr {
    /// A term with no factors.
    pub fn scalar(coeff: f64) -> Self {
        Expr {
            coeff,
            ops: vec![],
            deltas: vec![],
        }
    }

    /// Product of `ops` with coefficient 1.
    pub fn from_ops(ops: Vec<Op>) -> Self {
        Expr {
            coeff: 1.0,
            ops,
            deltas: vec![],
        }
    }

    /// Multiply the coefficient by `c`.
    pub fn scaled(mut self, c: f64) -> Self {
        self.coeff *= c;
        self
    }

    /// Append the delta `delta(i, j)`.
    pub fn with_delta(mut self, delta: Delta) -> Self {
        self.deltas.push(delta);
        self
    }

    /// Number of operators with the given action.
    pub fn count(&self, action: Action) -> usize {
        self.ops.iter().filter(|op| op.action == action).count()
    }

    /// True if no operators are left in the term.
    pub fn is_contracted(&self) -> bool {
        self.ops.is_empty()
    }

    /// Hermitian adjoint: operators reversed and daggered.
    /// Coefficients are real and deltas symmetric, so both are kept.
    pub fn adjoint(&self) -> Self {
        Expr {
            coeff: self.coeff,
            ops: self.ops.iter().rev().map(Op::dagger).collect(),
            deltas: self.deltas.clone(),
        }
    }

    fn has_factors(&self) -> bool {
        !self.ops.is_empty() || !self.deltas.is_empty()
    }

    /// Render the term in the given notation.
    pub fn render(&self, notation: Notation) -> String {
        match notation {
            Notation::Plain => self.to_string(),
            Notation::Tensor => format!("{}", self.to_tensor_doc().pretty(80)),
        }
    }

    /// Document in tensor notation, with all operators folded into a single
    /// `a^{creators}_{annihilators}` factor, annihilators in reverse.
    pub fn to_tensor_doc(&self) -> RcDoc {
        if self.coeff == 0.0 {
            return RcDoc::text("0");
        }
        let mut factors: Vec<RcDoc> = self.deltas.iter().map(Delta::to_doc).collect();
        let ups: String = self
            .ops
            .iter()
            .filter(|op| op.is_create())
            .map(|op| op.label.as_str())
            .collect();
        let downs: String = self
            .ops
            .iter()
            .rev()
            .filter(|op| op.is_annihilate())
            .map(|op| op.label.as_str())
            .collect();
        if !self.ops.is_empty() {
            let mut tensor = RcDoc::text("a");
            if !ups.is_empty() {
                tensor = tensor.append(RcDoc::text(format!("^{{{ups}}}")));
            }
            if !downs.is_empty() {
                tensor = tensor.append(RcDoc::text(format!("_{{{downs}}}")));
            }
            factors.push(tensor);
        }
        let body = RcDoc::intersperse(factors, RcDoc::text(" "));
        if !self.has_factors() {
            RcDoc::text(coeff_text(self.coeff))
        } else if self.coeff == 1.0 {
            body
        } else if self.coeff == -1.0 {
            RcDoc::text("-").append(body)
        } else {
            RcDoc::text(coeff_text(self.coeff)).append(" ").append(body)
        }
    }
}

/// Integral coefficients keep one decimal (`-1.0`), others print exactly.
pub(crate) fn coeff_text(c: f64) -> String {
    if c.fract() == 0.0 {
        format!("{c:.1}")
    } else {
        format!("{c}")
    }
}

impl ToDoc for Expr {
    fn to_doc(&self) -> RcDoc {
        if self.coeff == 0.0 {
            return RcDoc::text("0");
        }
        let coeff = (self.coeff != 1.0 || !self.has_factors())
            .then(|| RcDoc::text(coeff_text(self.coeff)));
        RcDoc::intersperse(
            coeff
                .into_iter()
                .chain(self.deltas.iter().map(Delta::to_doc))
                .chain(self.ops.iter().map(Op::to_doc)),
            RcDoc::text(" "),
        )
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_doc().pretty(80))
    }
}

impl From<Op> for Expr {
    fn from(value: Op) -> Self {
        Expr::from_ops(vec![value])
    }
}

impl From<Vec<Op>> for Expr {
    fn from(value: Vec<Op>) -> Self {
        Expr::from_ops(value)
    }
}

impl FromIterator<Op> for Expr {
    fn from_iter<T: IntoIterator<Item = Op>>(iter: T) -> Self {
        Expr::from_ops(iter.into_iter().collect())
    }
}

impl Mul for Op {
    type Output = Expr;

    fn mul(self, rhs: Op) -> Expr {
        Expr::from_ops(vec![self, rhs])
    }
}

impl Mul<Op> for f64 {
    type Output = Expr;

    fn mul(self, rhs: Op) -> Expr {
        Expr::from(rhs).scaled(self)
    }
}

impl Mul<Op> for Expr {
    type Output = Expr;

    fn mul(mut self, rhs: Op) -> Expr {
        self.ops.push(rhs);
        self
    }
}

impl Mul for Expr {
    type Output = Expr;

    fn mul(mut self, rhs: Expr) -> Expr {
        self.coeff *= rhs.coeff;
        self.ops.extend(rhs.ops);
        self.deltas.extend(rhs.deltas);
        self
    }
}

enum Factor {
    Op(Op),
    Delta(Delta),
}

impl HasParser for Factor {
    fn parser(input: &mut LocatingSlice<&str>) -> ModalResult<Self> {
        alt((Delta::parser.map(Factor::Delta), Op::parser.map(Factor::Op))).parse_next(input)
    }
}

impl HasParser for Expr {
    /// Parse an optional coefficient followed by deltas and operators.
    /// At least one of the two must be present.
    fn parser(input: &mut LocatingSlice<&str>) -> ModalResult<Self> {
        let coeff: Option<f64> = opt(terminated(float, multispace0)).parse_next(input)?;
        let factors: Vec<Factor> =
            repeat(0.., preceded(multispace0, Factor::parser)).parse_next(input)?;
        if coeff.is_none() && factors.is_empty() {
            return fail
                .context(StrContext::Label("operator product"))
                .context(StrContext::Expected(StrContextValue::Description(
                    "coefficient or operator",
                )))
                .parse_next(input);
        }
        let mut expr = Expr::scalar(coeff.unwrap_or(1.0));
        for factor in factors {
            match factor {
                Factor::Op(op) => expr.ops.push(op),
                Factor::Delta(delta) => expr.deltas.push(delta),
            }
        }
        Ok(expr)
    }
}
