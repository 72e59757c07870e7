//! The evaluation pass.

use mpl_env::{EnvError, Environment, Value};
use mpl_ir::{
    Block, ExprArena, ExprId, ExprKind, Module, Name, Position, Stmt, StmtKind, StringInterner,
    Type,
};
use mpl_stack::ensure_sufficient_stack;
use mpl_types::TypedModule;
use tracing::trace;

use crate::operators::{evaluate_binary, evaluate_unary};
use crate::{EvalError, EvalErrorKind, EvalResult, InputHandlerImpl, PrintHandlerImpl};

/// Tree-walking interpreter over a type-checked module.
pub struct Interpreter<'a> {
    arena: &'a ExprArena,
    typed: &'a TypedModule,
    interner: &'a StringInterner,
    env: &'a mut Environment,
    print: &'a PrintHandlerImpl,
    input: &'a InputHandlerImpl,
}

impl<'a> Interpreter<'a> {
    pub fn new(
        arena: &'a ExprArena,
        typed: &'a TypedModule,
        interner: &'a StringInterner,
        env: &'a mut Environment,
        print: &'a PrintHandlerImpl,
        input: &'a InputHandlerImpl,
    ) -> Self {
        Interpreter {
            arena,
            typed,
            interner,
            env,
            print,
            input,
        }
    }

    pub fn exec_block(&mut self, block: &Block) -> Result<(), EvalError> {
        ensure_sufficient_stack(|| block.iter().try_for_each(|stmt| self.exec_stmt(stmt)))
    }

    pub fn exec_stmt(&mut self, stmt: &Stmt) -> Result<(), EvalError> {
        match &stmt.kind {
            StmtKind::VarDef { name, ty, init } => {
                let value = match init {
                    Some(init) => self.eval_expr(*init)?,
                    None => Value::zero(*ty),
                };
                self.store(stmt.pos, *name, value)
            }
            StmtKind::Assign { name, value } => {
                let value = self.eval_expr(*value)?;
                self.store(stmt.pos, *name, value)
            }
            StmtKind::If {
                cond,
                then_branch,
                else_branch,
            } => {
                if self.eval_bool(*cond)? {
                    self.exec_block(then_branch)
                } else if let Some(else_branch) = else_branch {
                    self.exec_block(else_branch)
                } else {
                    Ok(())
                }
            }
            StmtKind::For {
                var,
                start,
                end,
                body,
            } => self.exec_for(stmt.pos, *var, *start, *end, body),
            StmtKind::Read { target } => self.exec_read(stmt.pos, *target),
            StmtKind::Print { expr } => {
                let value = self.eval_expr(*expr)?;
                self.print
                    .print(&value.to_string())
                    .map_err(|err| EvalError::io(stmt.pos, &err))
            }
        }
    }

    /// Run a `for` loop over the inclusive range `start..end`.
    ///
    /// The control variable is locked while the body runs and unlocked
    /// between iterations for the increment. It ends unlocked, holding one
    /// past the last value visited.
    fn exec_for(
        &mut self,
        pos: Position,
        var: Name,
        start: ExprId,
        end: ExprId,
        body: &Block,
    ) -> Result<(), EvalError> {
        let start = self.eval_int(start)?;
        let end = self.eval_int(end)?;
        trace!(var = self.interner.lookup(var), start, end, "for");

        self.store(pos, var, Value::Int(start))?;
        self.set_locked(pos, var, true)?;

        let mut current = start;
        while current <= end {
            self.exec_block(body)?;
            self.set_locked(pos, var, false)?;
            current = current.checked_add(1).ok_or_else(|| {
                EvalError::new(
                    pos,
                    EvalErrorKind::IntegerOverflow {
                        operation: "for loop increment",
                    },
                )
            })?;
            self.store(pos, var, Value::Int(current))?;
            self.set_locked(pos, var, true)?;
        }

        self.set_locked(pos, var, false)
    }

    fn exec_read(&mut self, pos: Position, target: Name) -> Result<(), EvalError> {
        let line = self
            .input
            .read_line()
            .map_err(|err| EvalError::io(pos, &err))?
            .unwrap_or_default();

        let value = match self.env.get_type(target) {
            Ok(Some(Type::Int)) => match line.trim().parse::<i32>() {
                Ok(n) => Value::Int(n),
                Err(_) => {
                    return Err(EvalError::new(
                        pos,
                        EvalErrorKind::ConversionFailed { input: line },
                    ))
                }
            },
            Ok(Some(Type::Str)) => Value::Str(line),
            Ok(Some(ty)) => {
                return Err(EvalError::new(
                    pos,
                    EvalErrorKind::InvalidOperation { op: "read", ty },
                ))
            }
            Ok(None) => return Err(self.unset(pos, target)),
            Err(err) => return Err(self.env_error(pos, err)),
        };
        trace!(name = self.interner.lookup(target), %value, "read");
        self.store(pos, target, value)
    }

    /// Evaluate an expression to its runtime value.
    pub fn eval_expr(&mut self, id: ExprId) -> EvalResult {
        ensure_sufficient_stack(|| self.eval_expr_inner(id))
    }

    fn eval_expr_inner(&mut self, id: ExprId) -> EvalResult {
        let expr = *self.arena.get_expr(id);
        match expr.kind {
            ExprKind::Int(n) => Ok(Value::Int(n)),
            ExprKind::Str(s) => Ok(Value::Str(self.interner.lookup(s).to_string())),
            ExprKind::Bool(b) => Ok(Value::Bool(b)),
            ExprKind::Ident(name) => match self.env.get_value(name) {
                Ok(Some(value)) => Ok(value.clone()),
                Ok(None) => Err(self.unset(expr.pos, name)),
                Err(err) => Err(self.env_error(expr.pos, err)),
            },
            ExprKind::Unary { op, operand } => {
                let ty = self.static_type(operand, op.as_symbol(), expr.pos)?;
                let value = self.eval_expr(operand)?;
                evaluate_unary(op, ty, &value).map_err(|kind| EvalError::new(expr.pos, kind))
            }
            ExprKind::Binary { op, left, right } => {
                let ty = self.static_type(left, op.as_symbol(), expr.pos)?;
                let left = self.eval_expr(left)?;
                let right = self.eval_expr(right)?;
                evaluate_binary(op, ty, &left, &right)
                    .map_err(|kind| EvalError::new(expr.pos, kind))
            }
        }
    }

    fn eval_int(&mut self, id: ExprId) -> Result<i32, EvalError> {
        let value = self.eval_expr(id)?;
        value
            .as_int()
            .ok_or_else(|| self.not_implemented(id, "..", value.ty()))
    }

    fn eval_bool(&mut self, id: ExprId) -> Result<bool, EvalError> {
        let value = self.eval_expr(id)?;
        value
            .as_bool()
            .ok_or_else(|| self.not_implemented(id, "if", value.ty()))
    }

    /// Operand type recorded by the type checker.
    fn static_type(&self, id: ExprId, op: &'static str, pos: Position) -> Result<Type, EvalError> {
        self.typed.expr_type(id).ok_or_else(|| {
            EvalError::new(
                pos,
                EvalErrorKind::Environment {
                    message: format!("no type recorded for operand of `{op}`"),
                },
            )
        })
    }

    fn store(&mut self, pos: Position, name: Name, value: Value) -> Result<(), EvalError> {
        self.env
            .set_value(name, value)
            .map_err(|err| self.env_error(pos, err))
    }

    fn set_locked(&mut self, pos: Position, name: Name, locked: bool) -> Result<(), EvalError> {
        self.env
            .set_mutable(name, !locked)
            .map_err(|err| self.env_error(pos, err))
    }

    fn not_implemented(&self, id: ExprId, op: &'static str, ty: Type) -> EvalError {
        EvalError::new(
            self.arena.get_expr(id).pos,
            EvalErrorKind::InvalidOperation { op, ty },
        )
    }

    fn unset(&self, pos: Position, name: Name) -> EvalError {
        EvalError::new(
            pos,
            EvalErrorKind::UnsetValue {
                name: self.interner.lookup(name).to_string(),
            },
        )
    }

    fn env_error(&self, pos: Position, err: EnvError) -> EvalError {
        EvalError::new(
            pos,
            EvalErrorKind::Environment {
                message: err.message(self.interner),
            },
        )
    }
}

/// Run a type-checked module.
///
/// `env` must be the environment the module was type checked against:
/// every variable is expected to be declared already.
#[tracing::instrument(level = "debug", skip_all)]
pub fn interpret(
    module: &Module,
    arena: &ExprArena,
    typed: &TypedModule,
    interner: &StringInterner,
    env: &mut Environment,
    print: &PrintHandlerImpl,
    input: &InputHandlerImpl,
) -> Result<(), EvalError> {
    Interpreter::new(arena, typed, interner, env, print, input).exec_block(&module.stmts)?;
    tracing::debug!("interpretation complete");
    Ok(())
}
