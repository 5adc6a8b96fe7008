//! Sums of terms.

use std::fmt;

use pretty::RcDoc;

use crate::{
    expr::Expr,
    text::{Notation, ToDoc},
};

/// An ordered sum of terms. The empty sum is zero.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ExprSum(Vec<Expr>);

/// How a rendered term is attached to the terms before it.
enum Joint {
    First,
    Plus,
    Minus,
}

impl ExprSum {
    pub fn new(terms: Vec<Expr>) -> Self {
        ExprSum(terms)
    }

    pub fn zero() -> Self {
        ExprSum(vec![])
    }

    /// The empty sum is the zero expression.
    pub fn is_zero(&self) -> bool {
        self.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn terms(&self) -> &[Expr] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = &Expr> {
        self.0.iter()
    }

    /// Rendered terms with their joints. A term after the first whose text
    /// starts with `-` loses the sign and is joined with ` - `.
    fn pieces(&self, notation: Notation) -> Vec<(Joint, String)> {
        self.0
            .iter()
            .enumerate()
            .map(|(n, term)| {
                let text = term.render(notation);
                if n == 0 {
                    (Joint::First, text)
                } else if let Some(rest) = text.strip_prefix('-') {
                    (Joint::Minus, rest.to_owned())
                } else {
                    (Joint::Plus, text)
                }
            })
            .collect()
    }

    /// Document for the sum, breaking before each `+`/`-` when it does not fit.
    pub fn to_doc_with(&self, notation: Notation) -> RcDoc {
        if self.0.is_empty() {
            return RcDoc::text("0");
        }
        RcDoc::concat(self.pieces(notation).into_iter().map(|(joint, text)| match joint {
            Joint::First => RcDoc::text(text),
            Joint::Plus => RcDoc::line().append("+ ").append(RcDoc::text(text)),
            Joint::Minus => RcDoc::line().append("- ").append(RcDoc::text(text)),
        }))
        .nest(2)
        .group()
    }

    /// Render with the given notation, wrapping at `width` columns.
    pub fn render(&self, notation: Notation, width: usize) -> String {
        format!("{}", self.to_doc_with(notation).pretty(width))
    }
}

impl ToDoc for ExprSum {
    fn to_doc(&self) -> RcDoc {
        self.to_doc_with(Notation::Plain)
    }
}

impl fmt::Display for ExprSum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return f.write_str("0");
        }
        for (joint, text) in self.pieces(Notation::Plain) {
            match joint {
                Joint::First => f.write_str(&text)?,
                Joint::Plus => write!(f, " + {text}")?,
                Joint::Minus => write!(f, " - {text}")?,
            }
        }
        Ok(())
    }
}

impl From<Vec<Expr>> for ExprSum {
    fn from(value: Vec<Expr>) -> Self {
        ExprSum(value)
    }
}

impl FromIterator<Expr> for ExprSum {
    fn from_iter<T: IntoIterator<Item = Expr>>(iter: T) -> Self {
        ExprSum(iter.into_iter().collect())
    }
}

impl IntoIterator for ExprSum {
    type Item = Expr;

    type IntoIter = std::vec::IntoIter<Expr>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a ExprSum {
    type Item = &'a Expr;

    type IntoIter = std::slice::Iter<'a, Expr>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
