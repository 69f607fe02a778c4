//! Recursive-descent parser for the Lam language.
//!
//! Grammar:
//!
//! ```text
//! expr        := literal | name | lambda | "(" expr ")" , call_suffix*
//! lambda      := "lambda" , params , ":" , expr
//! params      := [] | name , ("," , name)*
//! call_suffix := "(" , [expr , ("," , expr)*] , ")"
//! ```

use crate::ast::Expr;
use crate::cursor::Cursor;
use crate::error::SyntaxError;
use crate::lexer::{tokenize, Token};

/// The reserved word introducing a lambda expression.
const LAMBDA: &str = "lambda";

/// Parse an expression from source text.
///
/// Empty or whitespace-only input parses to `None`. Anything left over after
/// one complete expression is an error; no partial parse is ever returned.
pub fn read(source: &str) -> Result<Option<Expr>, SyntaxError> {
    let tokens = tokenize(source)?;
    if tokens.is_empty() {
        return Ok(None);
    }

    let mut parser = Parser::new(tokens);
    let expr = parser.read_expr()?;
    match parser.src.advance() {
        Some(extra) => Err(SyntaxError::TrailingInput(extra)),
        None => Ok(Some(expr)),
    }
}

struct Parser {
    src: Cursor<Token>,
}

impl Parser {
    fn new(tokens: Vec<Token>) -> Self {
        Self {
            src: Cursor::new(tokens),
        }
    }

    /// Parse one expression, starting at the current token.
    fn read_expr(&mut self) -> Result<Expr, SyntaxError> {
        match self.src.advance() {
            None => Err(SyntaxError::IncompleteExpression),
            Some(Token::NumberLiteral(text)) => {
                let literal = Expr::Literal(text.parse().unwrap_or(0.0));
                self.read_call_suffixes(literal)
            }
            Some(Token::Symbol(name)) if name == LAMBDA => {
                let parameters = self.read_comma_separated(':', Self::read_param)?;
                if let Some(name) = first_duplicate(&parameters) {
                    return Err(SyntaxError::DuplicateParameter(name.to_string()));
                }
                self.src.expect(&Token::Delimiter(':'))?;
                let body = self.read_expr()?;
                Ok(Expr::lambda(parameters, body))
            }
            Some(Token::Symbol(name)) => self.read_call_suffixes(Expr::Name(name)),
            Some(Token::Delimiter('(')) => {
                let inner = self.read_expr()?;
                self.src.expect(&Token::Delimiter(')'))?;
                self.read_call_suffixes(inner)
            }
            Some(token) => Err(SyntaxError::UnexpectedToken(token)),
        }
    }

    /// Apply any number of call suffixes to an operator expression, so that
    /// `f(x)(y)` becomes `Call(Call(f, [x]), [y])`.
    fn read_call_suffixes(&mut self, mut operator: Expr) -> Result<Expr, SyntaxError> {
        while self.src.peek() == Some(&Token::Delimiter('(')) {
            self.src.advance();
            let operands = self.read_comma_separated(')', Self::read_expr)?;
            self.src.expect(&Token::Delimiter(')'))?;
            operator = Expr::call(operator, operands);
        }
        Ok(operator)
    }

    /// Read a possibly-empty comma-separated list, stopped (but not
    /// consumed) by the `terminator` delimiter. An element is required after
    /// every comma, so a trailing comma fails.
    fn read_comma_separated<R>(
        &mut self,
        terminator: char,
        read: fn(&mut Self) -> Result<R, SyntaxError>,
    ) -> Result<Vec<R>, SyntaxError> {
        if self.src.peek() == Some(&Token::Delimiter(terminator)) {
            return Ok(Vec::new());
        }

        let mut items = vec![read(self)?];
        while self.src.peek() == Some(&Token::Delimiter(',')) {
            self.src.advance();
            items.push(read(self)?);
        }
        Ok(items)
    }

    /// Read one lambda parameter name.
    fn read_param(&mut self) -> Result<String, SyntaxError> {
        match self.src.advance() {
            Some(Token::Symbol(name)) if name != LAMBDA => Ok(name),
            Some(token) => Err(SyntaxError::ExpectedParameter(token)),
            None => Err(SyntaxError::IncompleteExpression),
        }
    }
}

fn first_duplicate(names: &[String]) -> Option<&str> {
    for (i, name) in names.iter().enumerate() {
        if names[..i].contains(name) {
            return Some(name);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(source: &str) -> Expr {
        read(source).unwrap().expect("expected an expression")
    }

    fn parse_err(source: &str) -> SyntaxError {
        read(source).unwrap_err()
    }

    #[test]
    fn empty_input_is_no_expression() {
        assert_eq!(read("").unwrap(), None);
        assert_eq!(read("   \n\t ").unwrap(), None);
    }

    #[test]
    fn literal_and_name() {
        assert_eq!(parse("42"), Expr::Literal(42.0));
        assert_eq!(parse("-4.5"), Expr::Literal(-4.5));
        assert_eq!(parse("my_var"), Expr::name("my_var"));
    }

    #[test]
    fn call_with_operands() {
        assert_eq!(
            parse("add(3, 4)"),
            Expr::call(
                Expr::name("add"),
                vec![Expr::Literal(3.0), Expr::Literal(4.0)]
            )
        );
    }

    #[test]
    fn curried_call_nests_left() {
        assert_eq!(
            parse("f(1)(2)"),
            Expr::call(
                Expr::call(Expr::name("f"), vec![Expr::Literal(1.0)]),
                vec![Expr::Literal(2.0)]
            )
        );
    }

    #[test]
    fn zero_operand_call() {
        assert_eq!(parse("f()"), Expr::call(Expr::name("f"), Vec::new()));
    }

    #[test]
    fn lambda_with_parameters() {
        assert_eq!(
            parse("lambda x, y: add(x, y)"),
            Expr::lambda(
                vec!["x".to_string(), "y".to_string()],
                Expr::call(Expr::name("add"), vec![Expr::name("x"), Expr::name("y")])
            )
        );
    }

    #[test]
    fn zero_parameter_lambda() {
        assert_eq!(
            parse("lambda: 5"),
            Expr::lambda(Vec::new(), Expr::Literal(5.0))
        );
    }

    #[test]
    fn nested_lambda_bodies() {
        assert_eq!(
            parse("lambda x: lambda y: x"),
            Expr::lambda(
                vec!["x".to_string()],
                Expr::lambda(vec!["y".to_string()], Expr::name("x"))
            )
        );
    }

    #[test]
    fn parenthesized_expression_can_be_called() {
        assert_eq!(
            parse("(lambda x: x)(1)"),
            Expr::call(
                Expr::lambda(vec!["x".to_string()], Expr::name("x")),
                vec![Expr::Literal(1.0)]
            )
        );
    }

    #[test]
    fn lambda_body_extends_over_call_suffix() {
        // Without parentheses the suffix belongs to the body, not the lambda.
        assert_eq!(
            parse("lambda x: f(x)"),
            Expr::lambda(
                vec!["x".to_string()],
                Expr::call(Expr::name("f"), vec![Expr::name("x")])
            )
        );
    }

    #[test]
    fn trailing_comma_fails() {
        assert_eq!(
            parse_err("add(3,)"),
            SyntaxError::UnexpectedToken(Token::Delimiter(')'))
        );
    }

    #[test]
    fn trailing_comma_in_parameters_fails() {
        assert_eq!(
            parse_err("lambda x,: x"),
            SyntaxError::ExpectedParameter(Token::Delimiter(':'))
        );
    }

    #[test]
    fn duplicate_parameters_fail() {
        assert_eq!(
            parse_err("lambda x, y, x: x"),
            SyntaxError::DuplicateParameter("x".to_string())
        );
    }

    #[test]
    fn lambda_is_not_a_parameter_name() {
        assert!(matches!(
            parse_err("lambda lambda: 1"),
            SyntaxError::ExpectedParameter(Token::Symbol(_))
        ));
    }

    #[test]
    fn trailing_input_fails() {
        assert_eq!(
            parse_err("add(3, 4) 5"),
            SyntaxError::TrailingInput(Token::NumberLiteral("5".to_string()))
        );
    }

    #[test]
    fn unterminated_call_fails() {
        assert_eq!(parse_err("add("), SyntaxError::IncompleteExpression);
        assert_eq!(
            parse_err("add(3"),
            SyntaxError::Expected {
                expected: ")".to_string(),
                found: "end of input".to_string(),
            }
        );
    }

    #[test]
    fn missing_lambda_body_fails() {
        assert_eq!(
            parse_err("lambda x"),
            SyntaxError::Expected {
                expected: ":".to_string(),
                found: "end of input".to_string(),
            }
        );
    }

    #[test]
    fn stray_delimiter_fails() {
        assert_eq!(
            parse_err(", 3"),
            SyntaxError::UnexpectedToken(Token::Delimiter(','))
        );
    }
}
