use crate::rational::Rational;

/// An abstract syntax tree (AST) node representing an expression.
///
/// `Expr` is a closed enum: the evaluator matches on it exhaustively, so
/// adding a node kind is a compile-time-checked change rather than a runtime
/// dispatch surprise. Ownership is strictly hierarchical — every node owns
/// its children, and a tree is built once per input line and discarded after
/// evaluation.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A numeric literal, already converted to an exact fraction.
    Literal {
        /// The exact value of the literal.
        value:  Rational,
        /// Byte column of the literal in the input line.
        column: usize,
    },
    /// Reference to a variable by name (the name keeps its `$` sigil).
    Variable {
        /// Name of the variable, e.g. `$x`.
        name:   String,
        /// Byte column of the reference.
        column: usize,
    },
    /// Unary negation.
    UnaryMinus {
        /// The negated operand.
        operand: Box<Self>,
        /// Byte column of the `-` sign.
        column:  usize,
    },
    /// A binary arithmetic operation.
    BinaryOp {
        /// Left operand.
        left:   Box<Self>,
        /// The operator.
        op:     BinaryOperator,
        /// Right operand.
        right:  Box<Self>,
        /// Byte column of the operator.
        column: usize,
    },
    /// A call to a builtin function, e.g. `sqrt(2)`.
    FunctionCall {
        /// Name of the function.
        name:      String,
        /// The argument expressions, in order.
        arguments: Vec<Self>,
        /// Byte column of the function name.
        column:    usize,
    },
}

impl Expr {
    /// The byte column of the node, for error reporting.
    #[must_use]
    pub const fn column(&self) -> usize {
        match self {
            Self::Literal { column, .. }
            | Self::Variable { column, .. }
            | Self::UnaryMinus { column, .. }
            | Self::BinaryOp { column, .. }
            | Self::FunctionCall { column, .. } => *column,
        }
    }
}

/// A complete input line.
///
/// Assignment binds looser than every operator and is only valid as the
/// entire line; it never nests inside a subexpression.
#[derive(Debug, Clone, PartialEq)]
pub enum Line {
    /// `$name = expression` — evaluate the expression and store the result.
    Assignment {
        /// The target variable, including its `$` sigil.
        name:   String,
        /// The expression whose value is stored.
        value:  Expr,
        /// Byte column of the variable name.
        column: usize,
    },
    /// A bare expression to evaluate.
    Expression(Expr),
}

/// Binary operators, in no particular order.
///
/// Precedence lives in the parser (one parsing function per level), not
/// here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOperator {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
    /// `%`
    Mod,
    /// `^`
    Pow,
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let symbol = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Mod => "%",
            Self::Pow => "^",
        };
        write!(f, "{symbol}")
    }
}
