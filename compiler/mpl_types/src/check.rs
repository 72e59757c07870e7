//! The checking pass.

use mpl_env::{EnvError, Environment};
use mpl_ir::{
    Block, ExprArena, ExprId, ExprKind, Module, Name, Position, Stmt, StmtKind, StringInterner,
    Type,
};
use mpl_stack::ensure_sufficient_stack;
use tracing::trace;

use crate::operators::{binary_result, unary_result};
use crate::{MismatchContext, TypeCheckError, TypeErrorKind, TypedModule};

/// Walks a module, declaring variables and recording expression types.
pub struct TypeChecker<'a> {
    arena: &'a ExprArena,
    interner: &'a StringInterner,
    env: &'a mut Environment,
    typed: TypedModule,
}

impl<'a> TypeChecker<'a> {
    pub fn new(
        arena: &'a ExprArena,
        interner: &'a StringInterner,
        env: &'a mut Environment,
    ) -> Self {
        TypeChecker {
            arena,
            interner,
            env,
            typed: TypedModule::with_capacity(arena.len()),
        }
    }

    /// Consume the checker and return the collected expression types.
    pub fn finish(self) -> TypedModule {
        self.typed
    }

    pub fn check_block(&mut self, block: &Block) -> Result<(), TypeCheckError> {
        block.iter().try_for_each(|stmt| self.check_stmt(stmt))
    }

    pub fn check_stmt(&mut self, stmt: &Stmt) -> Result<(), TypeCheckError> {
        match &stmt.kind {
            StmtKind::VarDef { name, ty, init } => self.check_var_def(stmt.pos, *name, *ty, *init),
            StmtKind::Assign { name, value } => self.check_assign(stmt.pos, *name, *value),
            StmtKind::If {
                cond,
                then_branch,
                else_branch,
            } => {
                self.expect_type(*cond, Type::Bool, MismatchContext::Condition)?;
                self.check_block(then_branch)?;
                if let Some(else_branch) = else_branch {
                    self.check_block(else_branch)?;
                }
                Ok(())
            }
            StmtKind::For {
                var,
                start,
                end,
                body,
            } => self.check_for(stmt.pos, *var, *start, *end, body),
            StmtKind::Read { target } => self.check_read(stmt.pos, *target),
            StmtKind::Print { expr } => self.infer_expr(*expr).map(|_| ()),
        }
    }

    fn check_var_def(
        &mut self,
        pos: Position,
        name: Name,
        ty: Type,
        init: Option<ExprId>,
    ) -> Result<(), TypeCheckError> {
        self.env
            .declare(name)
            .and_then(|()| self.env.set_type(name, ty))
            .map_err(|err| self.env_error(pos, err))?;
        trace!(name = self.interner.lookup(name), %ty, "declared");

        if let Some(init) = init {
            let context = MismatchContext::Declaration {
                name: self.name_string(name),
            };
            self.expect_type(init, ty, context)?;
        }
        Ok(())
    }

    fn check_assign(
        &mut self,
        pos: Position,
        name: Name,
        value: ExprId,
    ) -> Result<(), TypeCheckError> {
        let declared = self.declared_type(pos, name)?;
        self.require_unlocked(pos, name)?;
        let context = MismatchContext::Assignment {
            name: self.name_string(name),
        };
        self.expect_type(value, declared, context)?;
        self.env
            .set_type(name, declared)
            .map_err(|err| self.env_error(pos, err))
    }

    /// A `for` on an undeclared name introduces it as an `int` variable.
    fn check_for(
        &mut self,
        pos: Position,
        var: Name,
        start: ExprId,
        end: ExprId,
        body: &Block,
    ) -> Result<(), TypeCheckError> {
        if self.env.contains(var) {
            let declared = self.declared_type(pos, var)?;
            if declared != Type::Int {
                return Err(TypeCheckError::mismatch(
                    pos,
                    Type::Int,
                    declared,
                    MismatchContext::LoopVariable {
                        name: self.name_string(var),
                    },
                ));
            }
            self.require_unlocked(pos, var)?;
        } else {
            self.env
                .declare(var)
                .and_then(|()| self.env.set_type(var, Type::Int))
                .map_err(|err| self.env_error(pos, err))?;
            trace!(name = self.interner.lookup(var), "implicitly declared loop variable");
        }

        self.expect_type(start, Type::Int, MismatchContext::RangeStart)?;
        self.expect_type(end, Type::Int, MismatchContext::RangeEnd)?;

        self.set_locked(pos, var, true)?;
        let result = self.check_block(body);
        self.set_locked(pos, var, false)?;
        result
    }

    fn check_read(&mut self, pos: Position, target: Name) -> Result<(), TypeCheckError> {
        let declared = self.declared_type(pos, target)?;
        if !matches!(declared, Type::Int | Type::Str) {
            return Err(TypeCheckError::new(
                pos,
                TypeErrorKind::InvalidReadTarget {
                    name: self.name_string(target),
                    ty: declared,
                },
            ));
        }
        self.require_unlocked(pos, target)
    }

    /// Infer the type of an expression and record it.
    pub fn infer_expr(&mut self, id: ExprId) -> Result<Type, TypeCheckError> {
        ensure_sufficient_stack(|| self.infer_expr_inner(id))
    }

    fn infer_expr_inner(&mut self, id: ExprId) -> Result<Type, TypeCheckError> {
        let expr = *self.arena.get_expr(id);
        let ty = match expr.kind {
            ExprKind::Int(_) => Type::Int,
            ExprKind::Str(_) => Type::Str,
            ExprKind::Bool(_) => Type::Bool,
            ExprKind::Ident(name) => self.declared_type(expr.pos, name)?,
            ExprKind::Unary { op, operand } => {
                let operand = self.infer_expr(operand)?;
                unary_result(op, operand).ok_or_else(|| {
                    TypeCheckError::new(
                        expr.pos,
                        TypeErrorKind::InvalidUnaryOperand {
                            op: op.as_symbol(),
                            operand,
                        },
                    )
                })?
            }
            ExprKind::Binary { op, left, right } => {
                let left = self.infer_expr(left)?;
                let right = self.infer_expr(right)?;
                binary_result(op, left, right).ok_or_else(|| {
                    TypeCheckError::new(
                        expr.pos,
                        TypeErrorKind::InvalidBinaryOperands {
                            op: op.as_symbol(),
                            left,
                            right,
                        },
                    )
                })?
            }
        };
        self.typed.set(id, ty);
        Ok(ty)
    }

    fn expect_type(
        &mut self,
        id: ExprId,
        expected: Type,
        context: MismatchContext,
    ) -> Result<(), TypeCheckError> {
        let found = self.infer_expr(id)?;
        if found == expected {
            Ok(())
        } else {
            Err(TypeCheckError::mismatch(
                self.arena.get_expr(id).pos,
                expected,
                found,
                context,
            ))
        }
    }

    /// Declared type of `name`. Undeclared names are an error.
    fn declared_type(&self, pos: Position, name: Name) -> Result<Type, TypeCheckError> {
        match self.env.get_type(name) {
            Ok(Some(ty)) => Ok(ty),
            Ok(None) | Err(EnvError::Undefined(_)) => Err(TypeCheckError::new(
                pos,
                TypeErrorKind::UndefinedVariable {
                    name: self.name_string(name),
                },
            )),
            Err(err) => Err(self.env_error(pos, err)),
        }
    }

    fn require_unlocked(&self, pos: Position, name: Name) -> Result<(), TypeCheckError> {
        match self.env.is_mutable(name) {
            Ok(true) => Ok(()),
            Ok(false) => Err(TypeCheckError::new(
                pos,
                TypeErrorKind::LockedVariable {
                    name: self.name_string(name),
                },
            )),
            Err(err) => Err(self.env_error(pos, err)),
        }
    }

    fn set_locked(&mut self, pos: Position, name: Name, locked: bool) -> Result<(), TypeCheckError> {
        self.env
            .set_mutable(name, !locked)
            .map_err(|err| self.env_error(pos, err))
    }

    fn env_error(&self, pos: Position, err: EnvError) -> TypeCheckError {
        let name = self.name_string(err.name());
        let kind = match err {
            EnvError::Redeclared(_) => TypeErrorKind::Redeclared { name },
            EnvError::Undefined(_) => TypeErrorKind::UndefinedVariable { name },
            EnvError::Immutable(_) => TypeErrorKind::LockedVariable { name },
        };
        TypeCheckError::new(pos, kind)
    }

    fn name_string(&self, name: Name) -> String {
        self.interner.lookup(name).to_string()
    }
}

/// Type check a parsed module.
///
/// Declarations are entered into `env` as a side effect; on success every
/// variable the program mentions has its type set and is unlocked.
#[tracing::instrument(level = "debug", skip_all)]
pub fn type_check(
    module: &Module,
    arena: &ExprArena,
    interner: &StringInterner,
    env: &mut Environment,
) -> Result<TypedModule, TypeCheckError> {
    let mut checker = TypeChecker::new(arena, interner, env);
    checker.check_block(&module.stmts)?;
    let typed = checker.finish();
    tracing::debug!(variables = env.len(), "type check complete");
    Ok(typed)
}
