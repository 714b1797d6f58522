//! Abstract syntax tree for Gengar
//!
//! Nodes are built by the parser and treated as read-only afterwards. Every
//! node carries the source position of its first token so the emitter can
//! attach origins to the generated code.

use crate::utils::Position;

/// A complete program (one compilation unit)
#[derive(Debug, Clone)]
pub struct Program {
    pub body: Vec<Stmt>,
}

/// Statements
#[derive(Debug, Clone)]
pub enum Stmt {
    Main(MainDeclare),
    Function(FunctionDeclare),
    VarDeclare(VarDeclare),
    If(IfStatement),
    While(WhileStatement),
    Return(ReturnStatement),
    Debugger { position: Position },
    Expression(ExpressionStatement),
    Block(BlockStatement),
}

/// `main() { … }`, the program entry point
#[derive(Debug, Clone)]
pub struct MainDeclare {
    pub ret_type: Option<TypeAnnotation>,
    pub body: BlockStatement,
    pub position: Position,
}

/// `fn name(params) { … }`
#[derive(Debug, Clone)]
pub struct FunctionDeclare {
    pub name: Identifier,
    pub params: Vec<Param>,
    pub body: BlockStatement,
    pub position: Position,
}

#[derive(Debug, Clone)]
pub struct Param {
    pub name: Identifier,
    pub ty: Option<TypeAnnotation>,
}

/// `const`/`mut` declaration with optional type annotation
#[derive(Debug, Clone)]
pub struct VarDeclare {
    pub kind: VarKind,
    pub name: Identifier,
    pub ty: Option<TypeAnnotation>,
    pub init: Expr,
    pub position: Position,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VarKind {
    Const,
    Mut,
}

#[derive(Debug, Clone)]
pub struct IfStatement {
    pub test: Expr,
    pub consequent: BlockStatement,
    /// `else` branch: a chained [`Stmt::If`] or a [`Stmt::Block`]
    pub alternate: Option<Box<Stmt>>,
    pub position: Position,
}

#[derive(Debug, Clone)]
pub struct WhileStatement {
    pub test: Expr,
    pub body: BlockStatement,
    pub position: Position,
}

#[derive(Debug, Clone)]
pub struct ReturnStatement {
    pub argument: Expr,
    pub position: Position,
}

/// An expression in statement position
#[derive(Debug, Clone)]
pub struct ExpressionStatement {
    pub expression: Expr,
    pub position: Position,
}

#[derive(Debug, Clone)]
pub struct BlockStatement {
    pub body: Vec<Stmt>,
    pub position: Position,
}

/// Expressions
#[derive(Debug, Clone)]
pub enum Expr {
    Assign(AssignExpression),
    Binary(BinaryExpression),
    Unary(UnaryExpression),
    Conditional(ConditionalExpression),
    Call(CallExpression),
    Member(MemberExpression),
    Identifier(Identifier),
    StringLit(Literal),
    NumberLit(Literal),
    BoolLit(Literal),
}

impl Expr {
    pub fn position(&self) -> Position {
        match self {
            Expr::Assign(e) => e.position,
            Expr::Binary(e) => e.position,
            Expr::Unary(e) => e.position,
            Expr::Conditional(e) => e.position,
            Expr::Call(e) => e.position,
            Expr::Member(e) => e.position,
            Expr::Identifier(e) => e.position,
            Expr::StringLit(e) | Expr::NumberLit(e) | Expr::BoolLit(e) => e.position,
        }
    }

    pub fn node_type(&self) -> &'static str {
        match self {
            Expr::Assign(_) => "AssignExpression",
            Expr::Binary(_) => "BinaryExpression",
            Expr::Unary(_) => "UnaryExpression",
            Expr::Conditional(_) => "ConditionalExpression",
            Expr::Call(_) => "CallExpression",
            Expr::Member(_) => "MemberExpression",
            Expr::Identifier(_) => "Identifier",
            Expr::StringLit(_) => "StringLiteral",
            Expr::NumberLit(_) => "NumberLiteral",
            Expr::BoolLit(_) => "BooleanLiteral",
        }
    }
}

/// `target OP value` with the operator text preserved verbatim
#[derive(Debug, Clone)]
pub struct AssignExpression {
    pub target: Identifier,
    pub operator: String,
    pub value: Box<Expr>,
    pub position: Position,
}

/// `left OP right`; built right-leaning, no precedence
#[derive(Debug, Clone)]
pub struct BinaryExpression {
    pub left: Box<Expr>,
    pub operator: String,
    pub right: Box<Expr>,
    pub position: Position,
}

#[derive(Debug, Clone)]
pub struct UnaryExpression {
    pub operator: String,
    pub operand: Box<Expr>,
    pub position: Position,
}

/// `test ? consequent : alternate`
#[derive(Debug, Clone)]
pub struct ConditionalExpression {
    pub test: Box<Expr>,
    pub consequent: Box<Expr>,
    pub alternate: Box<Expr>,
    pub position: Position,
}

/// `callee(args)`; the callee is an identifier or a member chain
#[derive(Debug, Clone)]
pub struct CallExpression {
    pub callee: Box<Expr>,
    pub arguments: Vec<Expr>,
    pub position: Position,
}

/// `object.property`, left-nested for longer chains
#[derive(Debug, Clone)]
pub struct MemberExpression {
    pub object: Box<Expr>,
    pub property: Identifier,
    pub position: Position,
}

#[derive(Debug, Clone)]
pub struct Identifier {
    pub name: String,
    pub position: Position,
}

/// A literal's matched source text, kept verbatim (strings include their
/// quotes)
#[derive(Debug, Clone)]
pub struct Literal {
    pub value: String,
    pub position: Position,
}

/// The syntactic `: type` marker on declarations and parameters. Parsed and
/// stored, never emitted: the target language is untyped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeAnnotation {
    String,
    Number,
    Boolean,
}

impl TypeAnnotation {
    /// Read the type name out of a type-assertion token value like
    /// `": string"`.
    pub fn from_assert(value: &str) -> Option<Self> {
        let name = value
            .strip_prefix(':')?
            .trim_start_matches(|c| c == ' ' || c == '\t');
        match name {
            "string" => Some(TypeAnnotation::String),
            "number" => Some(TypeAnnotation::Number),
            "boolean" => Some(TypeAnnotation::Boolean),
            _ => None,
        }
    }
}
