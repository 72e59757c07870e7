//! Readable AST rendering for `mpl parse`.
//!
//! Statements print one per line in source-like form, with bodies indented.
//! Expressions print as S-expressions so the single-operator nesting is
//! explicit:
//!
//! ```text
//! var x : int := (+ 1 2)
//! for i in 1..x do
//!   print (* i i)
//! end for
//! ```

use std::fmt::{self, Write};

use mpl_ir::{Block, ExprArena, ExprId, ExprKind, Module, Stmt, StmtKind, StringInterner};
use mpl_stack::ensure_sufficient_stack;

/// Display adapter that renders a parsed module.
pub struct AstDump<'a> {
    module: &'a Module,
    arena: &'a ExprArena,
    interner: &'a StringInterner,
}

impl<'a> AstDump<'a> {
    pub fn new(module: &'a Module, arena: &'a ExprArena, interner: &'a StringInterner) -> Self {
        AstDump {
            module,
            arena,
            interner,
        }
    }

    fn block(&self, f: &mut fmt::Formatter<'_>, block: &Block, indent: usize) -> fmt::Result {
        ensure_sufficient_stack(|| {
            block
                .iter()
                .try_for_each(|stmt| self.stmt(f, stmt, indent))
        })
    }

    fn stmt(&self, f: &mut fmt::Formatter<'_>, stmt: &Stmt, indent: usize) -> fmt::Result {
        let pad = "  ".repeat(indent);
        let deeper = indent.saturating_add(1);
        match &stmt.kind {
            StmtKind::VarDef { name, ty, init } => {
                write!(f, "{pad}var {} : {ty}", self.interner.lookup(*name))?;
                if let Some(init) = init {
                    f.write_str(" := ")?;
                    self.expr(f, *init)?;
                }
                f.write_char('\n')
            }
            StmtKind::Assign { name, value } => {
                write!(f, "{pad}{} := ", self.interner.lookup(*name))?;
                self.expr(f, *value)?;
                f.write_char('\n')
            }
            StmtKind::If {
                cond,
                then_branch,
                else_branch,
            } => {
                write!(f, "{pad}if ")?;
                self.expr(f, *cond)?;
                f.write_str(" do\n")?;
                self.block(f, then_branch, deeper)?;
                if let Some(else_branch) = else_branch {
                    writeln!(f, "{pad}else")?;
                    self.block(f, else_branch, deeper)?;
                }
                writeln!(f, "{pad}end if")
            }
            StmtKind::For {
                var,
                start,
                end,
                body,
            } => {
                write!(f, "{pad}for {} in ", self.interner.lookup(*var))?;
                self.expr(f, *start)?;
                f.write_str("..")?;
                self.expr(f, *end)?;
                f.write_str(" do\n")?;
                self.block(f, body, deeper)?;
                writeln!(f, "{pad}end for")
            }
            StmtKind::Read { target } => {
                writeln!(f, "{pad}read {}", self.interner.lookup(*target))
            }
            StmtKind::Print { expr } => {
                write!(f, "{pad}print ")?;
                self.expr(f, *expr)?;
                f.write_char('\n')
            }
        }
    }

    fn expr(&self, f: &mut fmt::Formatter<'_>, id: ExprId) -> fmt::Result {
        ensure_sufficient_stack(|| match self.arena.get_expr(id).kind {
            ExprKind::Int(n) => write!(f, "{n}"),
            ExprKind::Str(s) => write!(f, "{:?}", self.interner.lookup(s)),
            ExprKind::Bool(b) => write!(f, "{b}"),
            ExprKind::Ident(name) => f.write_str(self.interner.lookup(name)),
            ExprKind::Unary { op, operand } => {
                write!(f, "({} ", op.as_symbol())?;
                self.expr(f, operand)?;
                f.write_char(')')
            }
            ExprKind::Binary { op, left, right } => {
                write!(f, "({} ", op.as_symbol())?;
                self.expr(f, left)?;
                f.write_char(' ')?;
                self.expr(f, right)?;
                f.write_char(')')
            }
        })
    }
}

impl fmt::Display for AstDump<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.block(f, &self.module.stmts, 0)
    }
}
