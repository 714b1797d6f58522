//! JavaScript emission
//!
//! One match dispatch over the AST; every node yields a [`Fragment`] whose
//! chunks carry the originating source position. Type annotations never
//! reach the output: the target language is untyped.

use crate::backend::fragment::Fragment;
use crate::frontend::ast::*;
use crate::utils::{Error, Result};

/// Runtime shim prepended to every program.
pub const PRELUDE: &str = "function print(...args){\n  console.log(...args);\n}\n";

pub fn emit_program(program: &Program) -> Result<Fragment> {
    let mut root = Fragment::bare().text(PRELUDE);
    for stmt in &program.body {
        root.push(emit_stmt(stmt)?);
    }
    Ok(root)
}

fn emit_stmt(stmt: &Stmt) -> Result<Fragment> {
    match stmt {
        Stmt::Main(main) => Ok(Fragment::new(main.position)
            .text(";(function()")
            .child(emit_block(&main.body)?)
            .text(")();\n")),
        Stmt::Function(func) => {
            let mut f = Fragment::new(func.position)
                .text("function ")
                .child(emit_identifier(&func.name))
                .text("(");
            for (i, param) in func.params.iter().enumerate() {
                if i > 0 {
                    f.push_str(",");
                }
                f.push(emit_identifier(&param.name));
            }
            f.push_str(") ");
            f.push(emit_block(&func.body)?);
            Ok(f)
        }
        Stmt::VarDeclare(var) => {
            let keyword = match var.kind {
                VarKind::Mut => "let ",
                VarKind::Const => "const ",
            };
            Ok(Fragment::new(var.position)
                .text(keyword)
                .child(emit_identifier(&var.name))
                .text("=")
                .child(emit_expr(&var.init)?)
                .text(";"))
        }
        Stmt::If(st) => {
            let mut f = Fragment::new(st.position)
                .text("\nif(")
                .child(emit_expr(&st.test)?)
                .text(")")
                .child(emit_block(&st.consequent)?);
            if let Some(alternate) = &st.alternate {
                f.push_str("else ");
                f.push(emit_stmt(alternate)?);
            }
            Ok(f)
        }
        Stmt::While(st) => Ok(Fragment::new(st.position)
            .text("while(")
            .child(emit_expr(&st.test)?)
            .text(")")
            .child(emit_block(&st.body)?)),
        Stmt::Return(st) => Ok(Fragment::new(st.position)
            .text("\nreturn (")
            .child(emit_expr(&st.argument)?)
            .text(");")),
        Stmt::Debugger { position } => Ok(Fragment::new(*position).text("\ndebugger;")),
        Stmt::Expression(st) => Ok(Fragment::new(st.position)
            .child(emit_expr(&st.expression)?)
            .text(";")),
        Stmt::Block(block) => emit_block(block),
    }
}

fn emit_block(block: &BlockStatement) -> Result<Fragment> {
    let mut f = Fragment::new(block.position).text("{\n");
    for stmt in &block.body {
        f.push(emit_stmt(stmt)?);
    }
    f.push_str("\n}");
    Ok(f)
}

fn emit_expr(expr: &Expr) -> Result<Fragment> {
    match expr {
        Expr::Assign(e) => Ok(Fragment::new(e.position)
            .child(emit_identifier(&e.target))
            .text(format!(" {} ", e.operator))
            .child(emit_expr(&e.value)?)),
        Expr::Binary(e) => Ok(Fragment::new(e.position)
            .child(emit_expr(&e.left)?)
            .text(format!(" {} ", e.operator))
            .child(emit_expr(&e.right)?)),
        Expr::Unary(e) => Ok(Fragment::new(e.position)
            .text(e.operator.clone())
            .child(emit_expr(&e.operand)?)),
        Expr::Conditional(e) => Ok(Fragment::new(e.position)
            .child(emit_expr(&e.test)?)
            .text(" ? ")
            .child(emit_expr(&e.consequent)?)
            .text(" : ")
            .child(emit_expr(&e.alternate)?)),
        Expr::Call(e) => {
            match e.callee.as_ref() {
                Expr::Identifier(_) | Expr::Member(_) => {}
                other => {
                    return Err(Error::Emission {
                        message: format!("{} is not callable", other.node_type()),
                        position: other.position(),
                    })
                }
            }
            let mut f = Fragment::new(e.position).child(emit_expr(&e.callee)?).text("(");
            for (i, argument) in e.arguments.iter().enumerate() {
                if i > 0 {
                    f.push_str(",");
                }
                f.push(emit_expr(argument)?);
            }
            f.push_str(")");
            Ok(f)
        }
        Expr::Member(e) => Ok(Fragment::new(e.position)
            .child(emit_expr(&e.object)?)
            .text(".")
            .child(emit_identifier(&e.property))),
        Expr::Identifier(id) => Ok(emit_identifier(id)),
        Expr::StringLit(lit) | Expr::NumberLit(lit) | Expr::BoolLit(lit) => {
            Ok(Fragment::new(lit.position).text(lit.value.clone()))
        }
    }
}

fn emit_identifier(id: &Identifier) -> Fragment {
    Fragment::new(id.position).text(id.name.clone())
}
