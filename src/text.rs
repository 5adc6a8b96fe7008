//! Helpers for parsing and pretty printing.

use std::fmt;

use pretty::RcDoc;
use winnow::{
    LocatingSlice, ModalResult, Parser,
    ascii::multispace0,
    combinator::repeat,
    error::{StrContext, StrContextValue},
    token::{take_till, take_while},
};

/// Trait for types which can be pretty-printed
pub trait ToDoc {
    /// Produce an `RcDoc` for pretty-printing.
    fn to_doc(&self) -> RcDoc;
}

/// Trait for types which can be parsed
pub trait HasParser: Sized {
    /// Parse an element of this type.
    fn parser(input: &mut LocatingSlice<&str>) -> ModalResult<Self>;
}

/// Notation used when printing terms and sums.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum Notation {
    /// One factor per operator, e.g. `a_{p3} a^{p1}`
    #[default]
    Plain,
    /// All operators of a term folded into one tensor, e.g. `a^{p1}_{p3}`
    Tensor,
}

/// Parse whitespace and `//` line comments.
pub fn comment(input: &mut LocatingSlice<&str>) -> ModalResult<()> {
    (
        multispace0,
        repeat::<_, _, (), _, _>(0.., ("//", take_till(0.., '\n'), multispace0).value(())),
    )
        .parse_next(input)?;
    Ok(())
}

/// An abstract index name, e.g. `p1`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Label(String);

impl Label {
    /// Create a label from any string.
    pub fn new(name: impl Into<String>) -> Self {
        Label(name.into())
    }

    /// The label as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Label {
    fn from(value: &str) -> Self {
        Label::new(value)
    }
}

impl From<String> for Label {
    fn from(value: String) -> Self {
        Label(value)
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl ToDoc for Label {
    fn to_doc(&self) -> RcDoc {
        RcDoc::text(self.0.as_str())
    }
}

impl HasParser for Label {
    fn parser(input: &mut LocatingSlice<&str>) -> ModalResult<Self> {
        take_while(1.., |c: char| c.is_alphanumeric() || c == '_')
            .map(|s: &str| Label(s.to_owned()))
            .context(StrContext::Label("index label"))
            .context(StrContext::Expected(StrContextValue::Description(
                "alphanumeric string",
            )))
            .parse_next(input)
    }
}

#[cfg(test)]
mod tests {
    use winnow::combinator::terminated;

    use super::*;

    #[test]
    fn label_accepts_underscores() {
        let label = Label::parser.parse(LocatingSlice::new("p_1")).unwrap();
        assert_eq!(label.as_str(), "p_1");
    }

    #[test]
    fn label_rejects_braces() {
        assert!(Label::parser.parse(LocatingSlice::new("p}")).is_err());
    }

    #[test]
    fn comments_are_skipped() {
        let src = "  // first\n// second without newline";
        assert!(terminated(comment, multispace0).parse(LocatingSlice::new(src)).is_ok());
    }
}
