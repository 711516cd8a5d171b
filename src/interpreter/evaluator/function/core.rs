use crate::{error::EvalError,
            interpreter::{cancel::CancelToken,
                          evaluator::{core::{Context, EvalResult},
                                      function::{abs, min_max, sqrt}},
                          value::Outcome}};

/// Type alias for builtin function handlers.
///
/// A builtin receives the evaluation context, a slice of evaluated argument
/// outcomes, the byte column of the call, and the cancellation token. It
/// returns an outcome wrapped in `EvalResult`.
type BuiltinFn = fn(&Context, &[Outcome], usize, &CancelToken) -> EvalResult<Outcome>;

/// Specifies the allowed number of arguments for a builtin.
///
/// - `Exact(n)` means the builtin must receive exactly `n` arguments.
/// - `AtLeast(n)` means the builtin accepts `n` or more arguments.
#[derive(Clone, Copy)]
enum Arity {
    Exact(usize),
    AtLeast(usize),
}

/// Defines builtin functions by generating a lookup table and a name list.
///
/// Each entry provides:
/// - a string name,
/// - an arity specification plus its human-readable form for errors,
/// - a function pointer implementing the builtin.
///
/// The macro produces:
/// - `BuiltinDef` (internal metadata),
/// - `BUILTIN_TABLE` (static table for lookup),
/// - `BUILTIN_FUNCTIONS` (public list of builtin names).
macro_rules! builtin_functions {
    (
        $(
            $name:literal => {
                arity: $arity:expr,
                expects: $expects:literal,
                func: $func:expr $(,)?
            }
        ),* $(,)?
    ) => {
        struct BuiltinDef {
            name:    &'static str,
            arity:   Arity,
            expects: &'static str,
            func:    BuiltinFn,
        }
        static BUILTIN_TABLE: &[BuiltinDef] = &[
            $(
                BuiltinDef { name: $name, arity: $arity, expects: $expects, func: $func },
            )*
        ];
        pub const BUILTIN_FUNCTIONS: &[&str] = &[
            $($name,)*
        ];
    };
}

builtin_functions! {
    "sqrt" => { arity: Arity::Exact(1),   expects: "exactly 1",  func: sqrt::sqrt },
    "abs"  => { arity: Arity::Exact(1),   expects: "exactly 1",  func: |_, args, _, _| abs::abs(args) },
    "min"  => { arity: Arity::AtLeast(1), expects: "at least 1", func: |_, args, _, _| min_max::min_max("min", args) },
    "max"  => { arity: Arity::AtLeast(1), expects: "at least 1", func: |_, args, _, _| min_max::min_max("max", args) },
}

impl Arity {
    /// Tests whether the given argument count satisfies this arity constraint.
    ///
    /// Returns `true` if the count is permitted, `false` otherwise.
    fn check(self, n: usize) -> bool {
        match self {
            Self::Exact(m) => n == m,
            Self::AtLeast(m) => n >= m,
        }
    }
}

impl Context {
    /// Evaluates a function call.
    ///
    /// The name is looked up in the builtin table; arity is verified before
    /// the handler runs, so individual builtins may index their argument
    /// slice freely.
    ///
    /// # Parameters
    /// - `name`: Function name as written, without `$`.
    /// - `arguments`: Evaluated argument outcomes.
    /// - `column`: Byte column of the call, for error reporting.
    /// - `cancel`: Cooperative cancellation flag.
    ///
    /// # Returns
    /// The function result or an error if lookup or arity fails.
    pub(crate) fn eval_function(&self,
                                name: &str,
                                arguments: &[Outcome],
                                column: usize,
                                cancel: &CancelToken)
                                -> EvalResult<Outcome> {
        let Some(builtin) = BUILTIN_TABLE.iter().find(|b| b.name == name) else {
            return Err(EvalError::UnknownFunction { name: name.to_string(),
                                                    column });
        };

        if !builtin.arity.check(arguments.len()) {
            return Err(EvalError::ArgumentCountMismatch { name: name.to_string(),
                                                          expected: builtin.expects,
                                                          found: arguments.len(),
                                                          column });
        }

        (builtin.func)(self, arguments, column, cancel)
    }
}
