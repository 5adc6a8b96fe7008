//! Symbolic Kronecker deltas.

use std::fmt;

use pretty::RcDoc;
use winnow::{
    LocatingSlice, ModalResult, Parser,
    combinator::{cut_err, preceded, seq},
    error::{StrContext, StrContextValue},
};

use crate::{
    op::closing_brace,
    text::{HasParser, Label, ToDoc},
};

/// The factor `delta(i, j)`, recorded in the order it was produced.
/// For a contraction, `i` is the annihilated index and `j` the created one.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Delta {
    pub i: Label,
    pub j: Label,
}

impl Delta {
    pub fn new(i: impl Into<Label>, j: impl Into<Label>) -> Self {
        Delta {
            i: i.into(),
            j: j.into(),
        }
    }
}

impl ToDoc for Delta {
    fn to_doc(&self) -> RcDoc {
        RcDoc::text("delta^{")
            .append(self.i.to_doc())
            .append("}_{")
            .append(self.j.to_doc())
            .append("}")
    }
}

impl fmt::Display for Delta {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_doc().pretty(80))
    }
}

impl HasParser for Delta {
    fn parser(input: &mut LocatingSlice<&str>) -> ModalResult<Self> {
        preceded(
            "delta^{",
            cut_err(seq!(
                Label::parser,
                _: "}_{".context(StrContext::Expected(StrContextValue::StringLiteral("}_{"))),
                Label::parser,
                _: closing_brace
            )),
        )
        .map(|(i, j)| Delta { i, j })
        .context(StrContext::Label("delta"))
        .parse_next(input)
    }
}
