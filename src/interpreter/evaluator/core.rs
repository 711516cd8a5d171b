use std::collections::HashMap;

use crate::{ast::{Expr, Line},
            error::EvalError,
            interpreter::{cancel::CancelToken, value::Outcome},
            rational::Rational};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or an
/// `EvalError` describing the failure.
pub type EvalResult<T> = Result<T, EvalError>;

/// Default number of correct decimal digits for approximated results.
pub const DEFAULT_PRECISION_DIGITS: u32 = 20;

/// Largest digit count a [`PrecisionPolicy`] will carry.
///
/// The approximation loop works at `digits + 5` decimal places and scales
/// intermediate integers by `10^digits`; the cap keeps that arithmetic away
/// from `u32` overflow and keeps a single evaluation's memory use bounded.
pub const MAX_PRECISION_DIGITS: u32 = 100_000;

/// Controls how many decimal digits approximated results carry.
///
/// The policy is read-only to the evaluator; only the layer driving the
/// session changes it, between evaluations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrecisionPolicy {
    digits: u32,
}

impl PrecisionPolicy {
    /// Creates a policy guaranteeing `digits` correct decimal digits.
    ///
    /// Requests beyond [`MAX_PRECISION_DIGITS`] are clamped to it.
    #[must_use]
    pub const fn new(digits: u32) -> Self {
        let digits = if digits > MAX_PRECISION_DIGITS {
            MAX_PRECISION_DIGITS
        } else {
            digits
        };
        Self { digits }
    }

    /// The guaranteed number of correct decimal digits.
    #[must_use]
    pub const fn digits(self) -> u32 {
        self.digits
    }
}

impl Default for PrecisionPolicy {
    fn default() -> Self {
        Self::new(DEFAULT_PRECISION_DIGITS)
    }
}

/// Stores the runtime evaluation context.
///
/// This struct holds the interpreter state: all variable assignments made so
/// far and the active precision policy.
///
/// ## Usage
///
/// `Context` is created once and reused for evaluating lines. Evaluation of
/// subexpressions never mutates it; only a successful assignment writes to
/// the variable map, so a failed line leaves the session state exactly as it
/// was.
#[derive(Debug, Default)]
pub struct Context {
    variables: HashMap<String, Rational>,
    precision: PrecisionPolicy,
}

impl Context {
    /// Creates a new evaluation context with no variables and the default
    /// precision policy.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new evaluation context with the given precision policy.
    #[must_use]
    pub fn with_precision(precision: PrecisionPolicy) -> Self {
        Self { variables: HashMap::new(),
               precision }
    }

    /// The active precision policy.
    #[must_use]
    pub const fn precision(&self) -> PrecisionPolicy {
        self.precision
    }

    /// Replaces the precision policy. Takes effect from the next evaluation.
    pub fn set_precision(&mut self, precision: PrecisionPolicy) {
        self.precision = precision;
    }

    /// Looks up a variable by its full name, `$` sigil included.
    #[must_use]
    pub fn get_variable(&self, name: &str) -> Option<&Rational> {
        self.variables.get(name)
    }

    /// Stores a variable, replacing any previous value of the same name.
    ///
    /// This is the hook for session restoration; interactive assignment goes
    /// through [`Context::eval_line`].
    pub fn set_variable(&mut self, name: impl Into<String>, value: Rational) {
        self.variables.insert(name.into(), value);
    }

    /// Iterates over all defined variables, for session persistence.
    pub fn variables(&self) -> impl Iterator<Item = (&str, &Rational)> {
        self.variables.iter().map(|(name, value)| (name.as_str(), value))
    }

    /// Evaluates a parsed line against this context.
    ///
    /// An expression line computes its value and leaves the context
    /// untouched. An assignment line evaluates its right-hand side first and
    /// writes the variable only when that evaluation succeeds, so errors
    /// never leave partial state behind. Either way the computed outcome is
    /// returned for display.
    ///
    /// # Parameters
    /// - `line`: The parsed line to evaluate.
    /// - `cancel`: Cooperative cancellation flag, polled throughout.
    ///
    /// # Returns
    /// The outcome of the line's expression.
    ///
    /// # Errors
    /// Any [`EvalError`] raised by the expression, or `EvalError::Cancelled`
    /// when the token was tripped.
    pub fn eval_line(&mut self, line: &Line, cancel: &CancelToken) -> EvalResult<Outcome> {
        match line {
            Line::Expression(expr) => self.eval(expr, cancel),
            Line::Assignment { name, value, .. } => {
                let outcome = self.eval(value, cancel)?;
                self.variables.insert(name.clone(), outcome.value().clone());
                Ok(outcome)
            },
        }
    }

    /// Evaluates an expression and returns the resulting outcome.
    ///
    /// This is the main entry point for expression evaluation. The evaluator
    /// dispatches based on expression variant: literals, variable references,
    /// unary minus, binary operations, and function calls. It takes `&self`
    /// so that evaluating a subexpression can never change session state.
    ///
    /// The cancellation token is checked once per node, before any work.
    ///
    /// # Parameters
    /// - `expr`: Expression to evaluate.
    /// - `cancel`: Cooperative cancellation flag.
    ///
    /// # Returns
    /// The exact or approximate outcome of the expression.
    ///
    /// # Errors
    /// An [`EvalError`] carrying the byte column of the failing node, or
    /// `EvalError::Cancelled`.
    pub fn eval(&self, expr: &Expr, cancel: &CancelToken) -> EvalResult<Outcome> {
        if cancel.is_cancelled() {
            return Err(EvalError::Cancelled);
        }

        match expr {
            Expr::Literal { value, .. } => Ok(Outcome::exact(value.clone())),
            Expr::Variable { name, column } => {
                self.variables
                    .get(name)
                    .map(|value| Outcome::exact(value.clone()))
                    .ok_or_else(|| EvalError::UnknownVariable { name:   name.clone(),
                                                                column: *column, })
            },
            Expr::UnaryMinus { operand, .. } => {
                let inner = self.eval(operand, cancel)?;
                let negated = -inner.value();
                Ok(inner.with_value(negated))
            },
            Expr::BinaryOp { left,
                             op,
                             right,
                             column, } => {
                let left = self.eval(left, cancel)?;
                let right = self.eval(right, cancel)?;
                self.eval_binary(*op, &left, &right, *column, cancel)
            },
            Expr::FunctionCall { name,
                                 arguments,
                                 column, } => {
                let arguments = arguments.iter()
                                         .map(|argument| self.eval(argument, cancel))
                                         .collect::<EvalResult<Vec<_>>>()?;
                self.eval_function(name, &arguments, *column, cancel)
            },
        }
    }
}
