//! Fermionic creation and annihilation operators.

use std::fmt;

use pretty::RcDoc;
use winnow::{
    LocatingSlice, ModalResult, Parser,
    combinator::{alt, cut_err, preceded, terminated},
    error::{StrContext, StrContextValue},
};

use crate::text::{HasParser, Label, ToDoc};

/// Whether an operator adds or removes a particle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Action {
    /// Creation operator, printed `a^{p}`
    Create,
    /// Annihilation operator, printed `a_{p}`
    Annihilate,
}

impl Action {
    /// Returns the action of the hermitian adjoint.
    pub fn adjoint(self) -> Self {
        match self {
            Action::Create => Action::Annihilate,
            Action::Annihilate => Action::Create,
        }
    }
}

/// A single fermionic operator acting on the index `label`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Op {
    /// Creation or annihilation
    pub action: Action,
    /// Index the operator acts on
    pub label: Label,
}

impl Op {
    /// Creation operator on `label`.
    pub fn create(label: impl Into<Label>) -> Self {
        Op {
            action: Action::Create,
            label: label.into(),
        }
    }

    /// Annihilation operator on `label`.
    pub fn annihilate(label: impl Into<Label>) -> Self {
        Op {
            action: Action::Annihilate,
            label: label.into(),
        }
    }

    /// Hermitian adjoint: same index, opposite action.
    pub fn dagger(&self) -> Self {
        Op {
            action: self.action.adjoint(),
            label: self.label.clone(),
        }
    }

    pub fn is_create(&self) -> bool {
        self.action == Action::Create
    }

    pub fn is_annihilate(&self) -> bool {
        self.action == Action::Annihilate
    }
}

/// Shorthand for [`Op::create`].
pub fn fcrex(label: impl Into<Label>) -> Op {
    Op::create(label)
}

/// Shorthand for [`Op::annihilate`].
pub fn fannx(label: impl Into<Label>) -> Op {
    Op::annihilate(label)
}

impl ToDoc for Op {
    fn to_doc(&self) -> RcDoc {
        let open = match self.action {
            Action::Create => "a^{",
            Action::Annihilate => "a_{",
        };
        RcDoc::text(open).append(self.label.to_doc()).append("}")
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_doc().pretty(80))
    }
}

pub(crate) fn closing_brace(input: &mut LocatingSlice<&str>) -> ModalResult<()> {
    "}".void()
        .context(StrContext::Expected(StrContextValue::CharLiteral('}')))
        .parse_next(input)
}

impl HasParser for Op {
    fn parser(input: &mut LocatingSlice<&str>) -> ModalResult<Self> {
        alt((
            preceded("a^{", cut_err(terminated(Label::parser, closing_brace))).map(Op::create),
            preceded("a_{", cut_err(terminated(Label::parser, closing_brace)))
                .map(Op::annihilate),
        ))
        .context(StrContext::Label("operator"))
        .parse_next(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dagger_flips_action_only() {
        let op = fannx("p3");
        assert_eq!(op.dagger(), fcrex("p3"));
        assert_eq!(op.dagger().dagger(), op);
    }

    #[test]
    fn display() {
        assert_eq!(fcrex("p1").to_string(), "a^{p1}");
        assert_eq!(fannx("p1").to_string(), "a_{p1}");
    }

    #[test]
    fn parse_both_actions() {
        let create = Op::parser.parse(LocatingSlice::new("a^{q}")).unwrap();
        let annihilate = Op::parser.parse(LocatingSlice::new("a_{q}")).unwrap();
        assert_eq!(create, fcrex("q"));
        assert_eq!(annihilate, fannx("q"));
    }

    #[test]
    fn parse_unclosed_fails() {
        assert!(Op::parser.parse(LocatingSlice::new("a^{q")).is_err());
    }
}
