//! A syntax of commands and their parsing.
//!
//! A `Command` is the top level structure accepted by the executable:
//! a `;` separated list of operator products, each evaluated on its own.

use winnow::{
    LocatingSlice, ModalResult, Parser,
    ascii::multispace0,
    combinator::{opt, separated, terminated},
    error::StrContext,
};

use crate::{
    error::ParseError,
    expr::Expr,
    text::{HasParser, comment},
};

/// The Command structure: a runnable program.
#[derive(Clone, Debug, PartialEq)]
pub struct Command {
    /// Products to evaluate, in source order.
    pub products: Vec<Expr>,
}

/// Parse a command
pub fn command(input: &mut LocatingSlice<&str>) -> ModalResult<Command> {
    comment.parse_next(input)?;
    let products = separated(
        1..,
        terminated(Expr::parser, comment).context(StrContext::Label("operator product")),
        (";", comment),
    )
    .parse_next(input)?;
    opt((";", comment)).parse_next(input)?;
    Ok(Command { products })
}

impl Command {
    /// Parse the whole of `src`, naming it `name` in error reports.
    pub fn parse(name: &str, src: &str) -> Result<Command, ParseError> {
        terminated(command, multispace0)
            .parse(LocatingSlice::new(src))
            .map_err(|e| ParseError::new(name, src, e.offset(), e.inner().to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::op::{fannx, fcrex};

    #[test]
    fn products_with_comments() {
        let src = "// pairs\na_{p} a^{q};\n// scalar\n2.0;\n";
        let command = Command::parse("test", src).unwrap();
        assert_eq!(
            command.products,
            vec![fannx("p") * fcrex("q"), Expr::scalar(2.0)]
        );
    }

    #[test]
    fn error_offset_points_at_bad_input() {
        let err = Command::parse("test", "a_{p} b^{q}").unwrap_err();
        assert_eq!(err.offset(), 6);
    }

    #[test]
    fn unclosed_operator_is_labelled() {
        let src = "a_{p} a^{q";
        let err = Command::parse("test", src).unwrap_err();
        assert_eq!(err.offset(), src.len() - 1);
        assert_eq!(err.span.len(), 1);
    }

    #[test]
    fn empty_input_is_an_error() {
        assert!(Command::parse("test", "  // nothing\n").is_err());
    }
}
