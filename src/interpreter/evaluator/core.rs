use std::collections::HashMap;

use crate::{
    ast::{BinaryOperator, BlockVisitor, Expr, PostfixOperator, PrefixOperator, Visitor},
    error::{EvalError, EvalResult},
    interpreter::evaluator::symbol::{NativeFn, Symbol},
    util::num::truncate_to_i64,
};

/// Evaluation settings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EvalConfig {
    /// Report the first evaluation problem from [`Evaluator::finish`] instead
    /// of substituting a default value.
    pub strict: bool,
}

/// A stack-machine evaluator over the AST.
///
/// Each visit pushes its result onto the operand stack; consumers pop the
/// symbols they expect. The environment is a single flat map of names,
/// seeded with the builtin functions, and persists across the expressions of
/// a block.
///
/// Problems are never fatal during the traversal. Popping from an empty
/// stack, reading an unbound name, or finding a function where a number is
/// expected (or vice versa) substitutes `0` (or a function returning `0`),
/// logs a warning, and records the problem. A strict evaluator reports the
/// first recorded problem from [`Evaluator::finish`].
///
/// ## Usage
/// ```
/// use bantam::interpreter::evaluator::core::Evaluator;
///
/// let block = bantam::parse_block(bantam::tokenize("r * r * pi")).unwrap();
///
/// let mut evaluator = Evaluator::new();
/// evaluator.define_number("pi", 3.0);
/// evaluator.define_number("r", 2.0);
/// block.accept(&mut evaluator);
/// assert_eq!(evaluator.answer(), 12.0);
/// ```
pub struct Evaluator {
    stack:       Vec<Symbol>,
    environment: HashMap<String, Symbol>,
    config:      EvalConfig,
    warnings:    Vec<EvalError>,
}

impl Default for Evaluator {
    fn default() -> Self {
        Self::new()
    }
}

impl Evaluator {
    /// Creates a lenient evaluator with the builtins bound.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(EvalConfig::default())
    }

    /// Creates an evaluator with the given configuration and the builtins
    /// bound.
    #[must_use]
    pub fn with_config(config: EvalConfig) -> Self {
        let mut evaluator = Self { stack: Vec::new(),
                                   environment: HashMap::new(),
                                   config,
                                   warnings: Vec::new() };
        evaluator.define_builtins();
        evaluator
    }

    /// Binds `name` to a number, replacing any previous binding.
    pub fn define_number(&mut self, name: impl Into<String>, value: f64) {
        self.environment.insert(name.into(), Symbol::Number(value));
    }

    /// Binds `name` to a native function taking `arity` arguments.
    pub fn define_function(&mut self, name: impl Into<String>, arity: usize, func: NativeFn) {
        let name = name.into();
        self.environment
            .insert(name.clone(), Symbol::Function { name, arity, func });
    }

    /// Looks up a binding.
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<&Symbol> {
        self.environment.get(name)
    }

    /// Number of symbols currently on the operand stack.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Every problem met so far, in order.
    #[must_use]
    pub fn warnings(&self) -> &[EvalError] {
        &self.warnings
    }

    /// Pops the result of the last evaluated expression as a number.
    ///
    /// Follows the lenient policy regardless of configuration: an empty stack
    /// or a non-number yields `0`.
    pub fn answer(&mut self) -> f64 {
        self.pop_number()
    }

    /// Consumes the evaluator and returns the result of the last evaluated
    /// expression.
    ///
    /// # Errors
    /// In strict mode, the first problem recorded during evaluation,
    /// including one raised while reading the result itself.
    pub fn finish(mut self) -> EvalResult<f64> {
        let answer = self.answer();
        match self.warnings.into_iter().next() {
            Some(error) if self.config.strict => Err(error),
            _ => Ok(answer),
        }
    }

    fn push(&mut self, symbol: Symbol) {
        self.stack.push(symbol);
    }

    fn push_number(&mut self, value: f64) {
        self.push(Symbol::Number(value));
    }

    fn pop(&mut self) -> EvalResult<Symbol> {
        self.stack.pop().ok_or(EvalError::StackUnderflow)
    }

    /// Records a problem and logs it.
    fn recover(&mut self, error: EvalError) {
        tracing::warn!(%error, strict = self.config.strict, "evaluation problem");
        self.warnings.push(error);
    }

    /// Pops a number, substituting `0` for anything else.
    fn pop_number(&mut self) -> f64 {
        let error = match self.pop() {
            Ok(Symbol::Number(value)) => return value,
            Ok(Symbol::Undefined(name)) => EvalError::UndefinedName { name },
            Ok(found) => EvalError::ExpectedNumber { found: found.to_string() },
            Err(error) => error,
        };
        self.recover(error);
        0.0
    }

    /// Pops a function, substituting `None` (a function returning `0`) for
    /// anything else.
    fn pop_function(&mut self) -> Option<(String, usize, NativeFn)> {
        let error = match self.pop() {
            Ok(Symbol::Function { name, arity, func }) => return Some((name, arity, func)),
            Ok(Symbol::Undefined(name)) => EvalError::UndefinedName { name },
            Ok(found) => EvalError::ExpectedFunction { found: found.to_string() },
            Err(error) => error,
        };
        self.recover(error);
        None
    }
}

impl Visitor for Evaluator {
    fn visit_name(&mut self, name: &str) {
        let symbol = self.environment
                         .get(name)
                         .cloned()
                         .unwrap_or_else(|| Symbol::Undefined(name.to_string()));
        self.push(symbol);
    }

    fn visit_number(&mut self, value: f64) {
        self.push_number(value);
    }

    /// Binds the value; nothing is pushed, so the assignment itself has no
    /// observable result.
    fn visit_assign(&mut self, name: &str, value: &Expr) {
        value.accept(self);
        let value = self.pop_number();
        self.define_number(name, value);
    }

    fn visit_conditional(&mut self, condition: &Expr, then_branch: &Expr, else_branch: &Expr) {
        condition.accept(self);
        if truncate_to_i64(self.pop_number()) != 0 {
            then_branch.accept(self);
        } else {
            else_branch.accept(self);
        }
    }

    fn visit_call(&mut self, callee: &Expr, arguments: &[Expr]) {
        callee.accept(self);
        let function = self.pop_function();

        let mut args = Vec::with_capacity(arguments.len());
        for argument in arguments {
            argument.accept(self);
            args.push(self.pop_number());
        }

        let result = match function {
            Some((_, arity, func)) if arity == args.len() => func(&args),
            Some((name, arity, _)) => {
                self.recover(EvalError::ArgumentCountMismatch { name,
                                                                expected: arity,
                                                                found: args.len() });
                0.0
            },
            None => 0.0,
        };
        self.push_number(result);
    }

    fn visit_prefix(&mut self, op: PrefixOperator, operand: &Expr) {
        operand.accept(self);
        let value = self.pop_number();
        self.push_number(Self::eval_prefix(op, value));
    }

    fn visit_postfix(&mut self, operand: &Expr, op: PostfixOperator) {
        operand.accept(self);
        let value = self.pop_number();
        let result = Self::eval_postfix(op, value).unwrap_or_else(|error| {
                                                       self.recover(error);
                                                       f64::INFINITY
                                                   });
        self.push_number(result);
    }

    /// Evaluates the left operand fully before the right one, which is
    /// observable when either side assigns.
    fn visit_infix(&mut self, left: &Expr, op: BinaryOperator, right: &Expr) {
        left.accept(self);
        let lhs = self.pop_number();
        right.accept(self);
        let rhs = self.pop_number();
        self.push_number(Self::eval_binary(op, lhs, rhs));
    }
}

impl BlockVisitor for Evaluator {
    fn visit_block(&mut self, expressions: &[Expr]) {
        for expr in expressions {
            expr.accept(self);
        }
    }
}
