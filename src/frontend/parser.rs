//! Recursive-descent parser for Gengar
//!
//! Single-token lookahead through [`Lexer::peek`], plus explicit lexer
//! snapshots for the few decisions that have to reattempt a production:
//! `else` chains, member calls, and assignment starts. Binary and ternary
//! tails are folded as they are parsed, producing a right-leaning tree with
//! no operator precedence.

use crate::frontend::ast::*;
use crate::frontend::lexer::Lexer;
use crate::frontend::token::{Token, TokenKind};
use crate::utils::{Error, Result};

/// Kinds skipped between tokens that carry structure.
const BLANK: &[TokenKind] = &[TokenKind::WhiteSpace, TokenKind::Crlf];
const SPACE: &[TokenKind] = &[TokenKind::WhiteSpace];

/// The parser. Owns the lexer for the duration of the compilation unit.
pub struct Parser<'a> {
    lexer: Lexer<'a>,
}

impl<'a> Parser<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            lexer: Lexer::new(source),
        }
    }

    // ==================== Helper Methods ====================

    /// The token under the cursor. Every `parse_*` method is entered with
    /// the cursor on the construct's first token and leaves it on the first
    /// token after the construct.
    fn current(&self) -> Token {
        self.lexer
            .current()
            .cloned()
            .unwrap_or_else(|| Token::eof(0, 0))
    }

    fn advance(&mut self) -> Result<Token> {
        self.lexer.get_token()
    }

    /// Consume the current token, failing unless it has the expected kind.
    fn expect_current(&mut self, kind: TokenKind, what: &str) -> Result<Token> {
        let token = self.current();
        if token.kind != kind {
            return Err(unexpected(what, &token));
        }
        self.advance()?;
        Ok(token)
    }

    /// Consume the current token, failing unless it is the given mark.
    fn expect_mark(&mut self, mark: &str) -> Result<()> {
        let token = self.current();
        if !token.is_mark(mark) {
            return Err(unexpected(mark, &token));
        }
        self.advance()?;
        Ok(())
    }

    fn skip_space(&mut self) -> Result<()> {
        self.lexer.skip_of(SPACE, true)?;
        Ok(())
    }

    fn skip_blank(&mut self) -> Result<()> {
        self.lexer.skip_of(BLANK, true)?;
        Ok(())
    }

    // ==================== Declarations ====================

    /// Parse a complete program: any number of `main` and `fn`
    /// declarations. Anything else at the top level is skipped.
    pub fn parse(&mut self) -> Result<Program> {
        let mut body = Vec::new();
        self.lexer.get_token()?;
        loop {
            let before = self.lexer.pos();
            let token = self.current();
            match (token.kind, token.value.as_str()) {
                (TokenKind::Eof, _) => break,
                (TokenKind::Id, "main") => body.push(Stmt::Main(self.parse_main()?)),
                (TokenKind::Id, "fn") => body.push(Stmt::Function(self.parse_fn()?)),
                _ => {
                    self.advance()?;
                }
            }
            if self.lexer.pos() == before {
                // forward progress guard
                self.advance()?;
            }
        }
        Ok(Program { body })
    }

    /// `main() TypeAssert? Block`
    fn parse_main(&mut self) -> Result<MainDeclare> {
        let position = self.current().position();
        self.advance()?;
        self.skip_space()?;
        self.expect_current(TokenKind::LeftParenthesis, "(")?;
        self.skip_blank()?;
        self.expect_current(TokenKind::RightParenthesis, ")")?;
        self.skip_space()?;
        let ret_type = if self.current().kind == TokenKind::TypeAssert {
            Some(self.parse_type_annotation()?)
        } else {
            None
        };
        self.skip_blank()?;
        let body = self.parse_block()?;
        Ok(MainDeclare {
            ret_type,
            body,
            position,
        })
    }

    /// `fn name(params) Block`
    fn parse_fn(&mut self) -> Result<FunctionDeclare> {
        let position = self.current().position();
        self.advance()?;
        self.skip_space()?;
        if self.current().kind != TokenKind::Id {
            return Err(Error::Structural {
                message: "missing function name".to_string(),
                position: self.current().position(),
            });
        }
        let name = self.parse_identifier("function name")?;
        self.skip_space()?;
        self.expect_current(TokenKind::LeftParenthesis, "(")?;
        let params = self.parse_params()?;
        self.expect_current(TokenKind::RightParenthesis, ")")?;
        self.skip_blank()?;
        let body = self.parse_block()?;
        Ok(FunctionDeclare {
            name,
            params,
            body,
            position,
        })
    }

    fn parse_params(&mut self) -> Result<Vec<Param>> {
        let mut params = Vec::new();
        loop {
            self.skip_blank()?;
            match self.current().kind {
                TokenKind::RightParenthesis => break,
                TokenKind::Id => {
                    let name = self.parse_identifier("parameter name")?;
                    self.skip_space()?;
                    let ty = if self.current().kind == TokenKind::TypeAssert {
                        Some(self.parse_type_annotation()?)
                    } else {
                        None
                    };
                    params.push(Param { name, ty });
                    self.skip_blank()?;
                    if self.current().kind == TokenKind::Comma {
                        self.advance()?;
                    }
                }
                _ => return Err(unexpected("parameter name or )", &self.current())),
            }
        }
        Ok(params)
    }

    fn parse_identifier(&mut self, what: &str) -> Result<Identifier> {
        let token = self.expect_current(TokenKind::Id, what)?;
        let position = token.position();
        Ok(Identifier {
            name: token.value,
            position,
        })
    }

    fn parse_type_annotation(&mut self) -> Result<TypeAnnotation> {
        let token = self.expect_current(TokenKind::TypeAssert, "type annotation")?;
        TypeAnnotation::from_assert(&token.value).ok_or_else(|| Error::Structural {
            message: format!("malformed type annotation `{}`", token.value),
            position: token.position(),
        })
    }

    // ==================== Statements ====================

    /// `{ … }`; the closing brace is consumed before returning.
    fn parse_block(&mut self) -> Result<BlockStatement> {
        let open = self.expect_current(TokenKind::LeftBracket, "{")?;
        let mut body = Vec::new();
        loop {
            let before = self.lexer.pos();
            let token = self.current();
            match token.kind {
                TokenKind::RightBracket => break,
                TokenKind::Eof => return Err(unexpected("}", &token)),
                TokenKind::Keywords => body.push(self.parse_statement()?),
                TokenKind::Id
                | TokenKind::StringLiteral
                | TokenKind::NumberLiteral
                | TokenKind::BoolLiteral => {
                    let position = token.position();
                    let expression = self.parse_expression()?;
                    self.skip_space()?;
                    if self.current().kind == TokenKind::Semicolon {
                        self.advance()?;
                    }
                    body.push(Stmt::Expression(ExpressionStatement {
                        expression,
                        position,
                    }));
                }
                _ => {
                    self.advance()?;
                }
            }
            if self.lexer.pos() == before {
                // forward progress guard
                self.advance()?;
            }
        }
        self.advance()?;
        Ok(BlockStatement {
            body,
            position: open.position(),
        })
    }

    fn parse_statement(&mut self) -> Result<Stmt> {
        let token = self.current();
        match token.value.as_str() {
            "const" | "mut" => self.parse_var_declare(),
            "if" => Ok(Stmt::If(self.parse_if()?)),
            "while" => Ok(Stmt::While(self.parse_while()?)),
            "return" => self.parse_return(),
            "debugger" => {
                self.advance()?;
                self.skip_space()?;
                if self.current().kind == TokenKind::Semicolon {
                    self.advance()?;
                }
                Ok(Stmt::Debugger {
                    position: token.position(),
                })
            }
            other => Err(Error::Structural {
                message: format!("unknown statement `{other}`"),
                position: token.position(),
            }),
        }
    }

    /// `('const'|'mut') ID TypeAssert? '=' Expression ';'?`
    ///
    /// Any assignment operator token is accepted in the `=` slot; the
    /// declaration always lowers to a plain `=`.
    fn parse_var_declare(&mut self) -> Result<Stmt> {
        let keyword = self.current();
        let kind = if keyword.value == "mut" {
            VarKind::Mut
        } else {
            VarKind::Const
        };
        self.advance()?;
        self.skip_space()?;
        let name = self.parse_identifier("variable name")?;
        self.skip_space()?;
        let ty = if self.current().kind == TokenKind::TypeAssert {
            Some(self.parse_type_annotation()?)
        } else {
            None
        };
        self.skip_space()?;
        self.expect_current(TokenKind::AssignOperator, "=")?;
        self.skip_space()?;
        let init = self.parse_expression()?;
        self.skip_space()?;
        if self.current().kind == TokenKind::Semicolon {
            self.advance()?;
        }
        Ok(Stmt::VarDeclare(VarDeclare {
            kind,
            name,
            ty,
            init,
            position: keyword.position(),
        }))
    }

    fn parse_if(&mut self) -> Result<IfStatement> {
        let position = self.current().position();
        self.advance()?;
        self.skip_space()?;
        self.expect_current(TokenKind::LeftParenthesis, "(")?;
        self.skip_blank()?;
        let test = self.parse_expression()?;
        self.skip_blank()?;
        self.expect_current(TokenKind::RightParenthesis, ")")?;
        self.skip_blank()?;
        let consequent = self.parse_block()?;
        let alternate = self.parse_else()?;
        Ok(IfStatement {
            test,
            consequent,
            alternate,
            position,
        })
    }

    /// `else` chaining: a nested `if` continues the chain, a block ends it.
    /// When no `else` follows the consequent, the lexer is restored so the
    /// enclosing block sees the skipped tokens again.
    fn parse_else(&mut self) -> Result<Option<Box<Stmt>>> {
        let snapshot = self.lexer.save();
        self.skip_blank()?;
        if !self.current().is_keyword("else") {
            log::trace!("no else branch, backtracking");
            self.lexer.backtrack(snapshot);
            return Ok(None);
        }
        self.advance()?;
        let snapshot = self.lexer.save();
        self.skip_space()?;
        let token = self.current();
        if token.is_keyword("if") {
            return Ok(Some(Box::new(Stmt::If(self.parse_if()?))));
        }
        if token.kind == TokenKind::LeftBracket {
            return Ok(Some(Box::new(Stmt::Block(self.parse_block()?))));
        }
        self.lexer.backtrack(snapshot);
        Err(Error::Structural {
            message: "expected if or block after else".to_string(),
            position: token.position(),
        })
    }

    fn parse_while(&mut self) -> Result<WhileStatement> {
        let position = self.current().position();
        self.advance()?;
        self.skip_space()?;
        self.expect_current(TokenKind::LeftParenthesis, "(")?;
        self.skip_blank()?;
        let test = self.parse_expression()?;
        self.skip_blank()?;
        self.expect_current(TokenKind::RightParenthesis, ")")?;
        self.skip_blank()?;
        let body = self.parse_block()?;
        Ok(WhileStatement {
            test,
            body,
            position,
        })
    }

    fn parse_return(&mut self) -> Result<Stmt> {
        let position = self.current().position();
        self.advance()?;
        self.skip_space()?;
        let argument = self.parse_expression()?;
        self.skip_space()?;
        if self.current().kind == TokenKind::Semicolon {
            self.advance()?;
        }
        Ok(Stmt::Return(ReturnStatement { argument, position }))
    }

    // ==================== Expressions ====================

    /// Parse one expression: a non-recursive atom followed by an optional
    /// binary or ternary tail. Tails recurse to the right, so `a + b * c`
    /// parses as `a + (b * c)` regardless of the operators involved.
    fn parse_expression(&mut self) -> Result<Expr> {
        let atom = self.parse_non_recursive()?;
        self.skip_space()?;
        let token = self.current();
        if token.kind == TokenKind::BinaryOperator {
            self.advance()?;
            self.skip_blank()?;
            let right = self.parse_expression()?;
            let position = atom.position();
            return Ok(Expr::Binary(BinaryExpression {
                left: Box::new(atom),
                operator: token.value,
                right: Box::new(right),
                position,
            }));
        }
        if token.is_mark("?") {
            self.advance()?;
            self.skip_blank()?;
            let consequent = self.parse_expression()?;
            self.skip_blank()?;
            self.expect_mark(":")?;
            self.skip_blank()?;
            let alternate = self.parse_expression()?;
            let position = atom.position();
            return Ok(Expr::Conditional(ConditionalExpression {
                test: Box::new(atom),
                consequent: Box::new(consequent),
                alternate: Box::new(alternate),
                position,
            }));
        }
        Ok(atom)
    }

    fn parse_non_recursive(&mut self) -> Result<Expr> {
        let token = self.current();
        match token.kind {
            TokenKind::StringLiteral => {
                self.advance()?;
                Ok(Expr::StringLit(literal(token)))
            }
            TokenKind::NumberLiteral => {
                self.advance()?;
                Ok(Expr::NumberLit(literal(token)))
            }
            TokenKind::BoolLiteral => {
                self.advance()?;
                Ok(Expr::BoolLit(literal(token)))
            }
            TokenKind::UnaryOperator => {
                self.advance()?;
                self.skip_space()?;
                let operand = self.parse_expression()?;
                let position = token.position();
                Ok(Expr::Unary(UnaryExpression {
                    operator: token.value,
                    operand: Box::new(operand),
                    position,
                }))
            }
            TokenKind::Id => self.parse_id_start(),
            _ => Err(Error::Structural {
                message: format!("unknown expression token `{}`", token.value),
                position: token.position(),
            }),
        }
    }

    /// Disambiguate the expression starts sharing an identifier prefix:
    /// bare `id`, `id(...)`, `id.x`, `id.x(...)` and `id = ...`.
    fn parse_id_start(&mut self) -> Result<Expr> {
        let token = self.current();
        let next = self.lexer.peek()?;
        match next.kind {
            TokenKind::Dot => {
                let snapshot = self.lexer.save();
                let member = self.parse_member()?;
                if self.current().kind == TokenKind::LeftParenthesis {
                    log::trace!("member chain is a callee, backtracking");
                    self.lexer.backtrack(snapshot);
                    self.parse_call()
                } else {
                    Ok(member)
                }
            }
            TokenKind::LeftParenthesis => self.parse_call(),
            TokenKind::WhiteSpace => {
                let snapshot = self.lexer.save();
                self.advance()?;
                self.skip_space()?;
                let is_assign = self.current().kind == TokenKind::AssignOperator;
                self.lexer.backtrack(snapshot);
                if is_assign {
                    self.parse_assign()
                } else {
                    self.advance()?;
                    Ok(Expr::Identifier(identifier(token)))
                }
            }
            TokenKind::AssignOperator => self.parse_assign(),
            _ => {
                self.advance()?;
                Ok(Expr::Identifier(identifier(token)))
            }
        }
    }

    /// `ID ('.' ID)+`, folded left-to-right
    fn parse_member(&mut self) -> Result<Expr> {
        let first = self.expect_current(TokenKind::Id, "identifier")?;
        let mut expr = Expr::Identifier(identifier(first));
        while self.current().kind == TokenKind::Dot {
            self.advance()?;
            let property = self.expect_current(TokenKind::Id, "member name")?;
            let position = expr.position();
            expr = Expr::Member(MemberExpression {
                object: Box::new(expr),
                property: identifier(property),
                position,
            });
        }
        Ok(expr)
    }

    /// `(ID | Member) '(' ArgList ')'`
    fn parse_call(&mut self) -> Result<Expr> {
        let position = self.current().position();
        let callee = if self.lexer.peek()?.kind == TokenKind::Dot {
            self.parse_member()?
        } else {
            let token = self.expect_current(TokenKind::Id, "callee")?;
            Expr::Identifier(identifier(token))
        };
        self.expect_current(TokenKind::LeftParenthesis, "(")?;
        let mut arguments = Vec::new();
        loop {
            self.skip_blank()?;
            match self.current().kind {
                TokenKind::RightParenthesis => break,
                TokenKind::Eof => return Err(unexpected(")", &self.current())),
                TokenKind::Comma => {
                    self.advance()?;
                }
                _ => arguments.push(self.parse_expression()?),
            }
        }
        self.advance()?;
        Ok(Expr::Call(CallExpression {
            callee: Box::new(callee),
            arguments,
            position,
        }))
    }

    /// `ID AssignOperator Expression` with the operator text preserved
    fn parse_assign(&mut self) -> Result<Expr> {
        let target = self.parse_identifier("assignment target")?;
        self.skip_space()?;
        let operator = self.expect_current(TokenKind::AssignOperator, "assignment operator")?;
        self.skip_space()?;
        let value = self.parse_expression()?;
        let position = target.position;
        Ok(Expr::Assign(AssignExpression {
            target,
            operator: operator.value,
            value: Box::new(value),
            position,
        }))
    }
}

fn identifier(token: Token) -> Identifier {
    let position = token.position();
    Identifier {
        name: token.value,
        position,
    }
}

fn literal(token: Token) -> Literal {
    let position = token.position();
    Literal {
        value: token.value,
        position,
    }
}

fn unexpected(expected: &str, actual: &Token) -> Error {
    Error::UnexpectedToken {
        expected: expected.to_string(),
        actual: if actual.kind == TokenKind::Eof {
            "end of input".to_string()
        } else {
            actual.value.clone()
        },
        position: actual.position(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(source: &str) -> Program {
        Parser::new(source).parse().expect("parse failed")
    }

    fn parse_err(source: &str) -> Error {
        Parser::new(source).parse().expect_err("parse succeeded")
    }

    /// The statements of the first main declaration.
    fn main_body(program: &Program) -> &[Stmt] {
        match &program.body[0] {
            Stmt::Main(main) => &main.body.body,
            other => panic!("expected main, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_main() {
        let program = parse("main() { }");
        assert_eq!(program.body.len(), 1);
        assert!(main_body(&program).is_empty());
    }

    #[test]
    fn test_main_with_return_type() {
        let program = parse("main(): number {\n  return 0\n}");
        match &program.body[0] {
            Stmt::Main(main) => {
                assert_eq!(main.ret_type, Some(TypeAnnotation::Number));
                assert!(matches!(main.body.body[0], Stmt::Return(_)));
            }
            other => panic!("expected main, got {other:?}"),
        }
    }

    #[test]
    fn test_fn_with_typed_params() {
        let program = parse("fn add(a: number, b: number) {\n  return a + b\n}");
        match &program.body[0] {
            Stmt::Function(func) => {
                assert_eq!(func.name.name, "add");
                assert_eq!(func.params.len(), 2);
                assert_eq!(func.params[0].name.name, "a");
                assert_eq!(func.params[0].ty, Some(TypeAnnotation::Number));
                assert_eq!(func.params[1].name.name, "b");
            }
            other => panic!("expected fn, got {other:?}"),
        }
    }

    #[test]
    fn test_top_level_skips_other_tokens() {
        let program = parse("\n  42 ;\nmain() { }\n");
        assert_eq!(program.body.len(), 1);
    }

    #[test]
    fn test_var_declare_kinds() {
        let program = parse("main() { const a = 1; mut b: string = \"s\" }");
        let body = main_body(&program);
        match (&body[0], &body[1]) {
            (Stmt::VarDeclare(a), Stmt::VarDeclare(b)) => {
                assert_eq!(a.kind, VarKind::Const);
                assert_eq!(a.ty, None);
                assert_eq!(b.kind, VarKind::Mut);
                assert_eq!(b.ty, Some(TypeAnnotation::String));
                assert!(matches!(&b.init, Expr::StringLit(l) if l.value == "\"s\""));
            }
            other => panic!("expected two declarations, got {other:?}"),
        }
    }

    #[test]
    fn test_if_else_if_else_chain() {
        let program =
            parse("main() { if (x) { return 1; } else if (y) { return 2; } else { return 3; } }");
        let Stmt::If(outer) = &main_body(&program)[0] else {
            panic!("expected if");
        };
        assert!(matches!(&outer.test, Expr::Identifier(id) if id.name == "x"));
        assert_eq!(outer.consequent.body.len(), 1);
        let Some(alt) = &outer.alternate else {
            panic!("expected else branch");
        };
        let Stmt::If(chained) = alt.as_ref() else {
            panic!("expected chained if");
        };
        assert!(matches!(&chained.test, Expr::Identifier(id) if id.name == "y"));
        assert!(matches!(
            chained.alternate.as_deref(),
            Some(Stmt::Block(block)) if block.body.len() == 1
        ));
    }

    #[test]
    fn test_if_without_else_leaves_following_statement() {
        let program = parse("main() { if (x) { }\n  debugger; }");
        let body = main_body(&program);
        assert_eq!(body.len(), 2);
        assert!(matches!(&body[0], Stmt::If(st) if st.alternate.is_none()));
        assert!(matches!(&body[1], Stmt::Debugger { .. }));
    }

    #[test]
    fn test_else_requires_if_or_block() {
        let err = parse_err("main() { if (x) { } else return 1 }");
        assert!(matches!(err, Error::Structural { message, .. }
            if message.contains("after else")));
    }

    #[test]
    fn test_while_with_assignment() {
        let program = parse("main() { while (i) { i = i + 1; } }");
        let Stmt::While(st) = &main_body(&program)[0] else {
            panic!("expected while");
        };
        let Stmt::Expression(expr_stmt) = &st.body.body[0] else {
            panic!("expected expression statement");
        };
        let Expr::Assign(assign) = &expr_stmt.expression else {
            panic!("expected assignment");
        };
        assert_eq!(assign.target.name, "i");
        assert_eq!(assign.operator, "=");
        assert!(matches!(&*assign.value, Expr::Binary(_)));
    }

    #[test]
    fn test_compound_assignment_operator_preserved() {
        let program = parse("main() { i += 2; }");
        let Stmt::Expression(stmt) = &main_body(&program)[0] else {
            panic!("expected expression statement");
        };
        let Expr::Assign(assign) = &stmt.expression else {
            panic!("expected assignment");
        };
        assert_eq!(assign.operator, "+=");
    }

    #[test]
    fn test_binary_tail_is_right_leaning() {
        let program = parse("main() { const v = a + b * c; }");
        let Stmt::VarDeclare(var) = &main_body(&program)[0] else {
            panic!("expected declaration");
        };
        let Expr::Binary(outer) = &var.init else {
            panic!("expected binary expression");
        };
        assert_eq!(outer.operator, "+");
        assert!(matches!(&*outer.left, Expr::Identifier(id) if id.name == "a"));
        let Expr::Binary(inner) = &*outer.right else {
            panic!("expected nested binary expression");
        };
        assert_eq!(inner.operator, "*");
    }

    #[test]
    fn test_conditional_expression() {
        let program = parse("main() { const v = flag ? 1 : other ? 2 : 3; }");
        let Stmt::VarDeclare(var) = &main_body(&program)[0] else {
            panic!("expected declaration");
        };
        let Expr::Conditional(cond) = &var.init else {
            panic!("expected conditional");
        };
        assert!(matches!(&*cond.test, Expr::Identifier(id) if id.name == "flag"));
        assert!(matches!(&*cond.alternate, Expr::Conditional(_)));
    }

    #[test]
    fn test_member_chain_call() {
        let program = parse("main() { const s = foo.bar.baz(x); }");
        let Stmt::VarDeclare(var) = &main_body(&program)[0] else {
            panic!("expected declaration");
        };
        let Expr::Call(call) = &var.init else {
            panic!("expected call");
        };
        let Expr::Member(outer) = &*call.callee else {
            panic!("expected member callee");
        };
        assert_eq!(outer.property.name, "baz");
        let Expr::Member(inner) = &*outer.object else {
            panic!("expected nested member");
        };
        assert_eq!(inner.property.name, "bar");
        assert!(matches!(&*inner.object, Expr::Identifier(id) if id.name == "foo"));
        assert_eq!(call.arguments.len(), 1);
    }

    #[test]
    fn test_member_without_call_stays_member() {
        let program = parse("main() { print(msg.length); }");
        let Stmt::Expression(stmt) = &main_body(&program)[0] else {
            panic!("expected expression statement");
        };
        let Expr::Call(call) = &stmt.expression else {
            panic!("expected call");
        };
        assert!(matches!(&call.arguments[0], Expr::Member(_)));
    }

    #[test]
    fn test_unary_expression() {
        let program = parse("main() { const v = !flag; }");
        let Stmt::VarDeclare(var) = &main_body(&program)[0] else {
            panic!("expected declaration");
        };
        let Expr::Unary(unary) = &var.init else {
            panic!("expected unary");
        };
        assert_eq!(unary.operator, "!");
        assert!(matches!(&*unary.operand, Expr::Identifier(_)));
    }

    #[test]
    fn test_call_with_multiple_arguments() {
        let program = parse("main() { print(a, \"x\", 3); }");
        let Stmt::Expression(stmt) = &main_body(&program)[0] else {
            panic!("expected expression statement");
        };
        let Expr::Call(call) = &stmt.expression else {
            panic!("expected call");
        };
        assert_eq!(call.arguments.len(), 3);
    }

    #[test]
    fn test_unknown_statement_keyword() {
        let err = parse_err("main() { else }");
        assert!(matches!(err, Error::Structural { message, .. }
            if message.contains("unknown statement")));
    }

    #[test]
    fn test_unknown_expression_token() {
        let err = parse_err("main() { const v = , }");
        assert!(matches!(err, Error::Structural { message, .. }
            if message.contains("unknown expression token")));
    }

    #[test]
    fn test_unexpected_token_in_main_header() {
        let err = parse_err("main( { }");
        assert!(matches!(err, Error::UnexpectedToken { expected, .. } if expected == ")"));
    }

    #[test]
    fn test_unclosed_block() {
        let err = parse_err("main() { debugger;");
        assert!(matches!(err, Error::UnexpectedToken { expected, .. } if expected == "}"));
    }

    #[test]
    fn test_missing_function_name() {
        let err = parse_err("fn () { }");
        assert!(matches!(err, Error::Structural { message, .. }
            if message.contains("missing function name")));
    }

    #[test]
    fn test_garbage_does_not_loop_forever() {
        let program = parse(") ) } , .");
        assert!(program.body.is_empty());
    }
}
