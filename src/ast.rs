/// A location in the source text.
///
/// Both fields are 1-based. Statements are evaluated one line at a time, so
/// `column` is the character offset inside the statement and `line` is the
/// statement's line in the surrounding script (always `1` for a single
/// statement).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Position {
    /// Line number in the source.
    pub line:   usize,
    /// Column number in the line.
    pub column: usize,
}

impl Position {
    /// Creates a position from a line and a zero-based byte cursor.
    ///
    /// ## Example
    /// ```
    /// use calcula::ast::Position;
    ///
    /// let pos = Position::at_cursor(3, 0);
    /// assert_eq!(pos, Position { line: 3, column: 1 });
    /// ```
    #[must_use]
    pub const fn at_cursor(line: usize, cursor: usize) -> Self {
        Self { line,
               column: cursor + 1 }
    }

    /// Returns the position `cursor` bytes to the right of `self`.
    ///
    /// Used to map a cursor inside a slice of a statement back to the
    /// statement's own columns.
    #[must_use]
    pub const fn offset(self, cursor: usize) -> Self {
        Self { line:   self.line,
               column: self.column + cursor, }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "line {}, column {}", self.line, self.column)
    }
}

/// An abstract syntax tree (AST) node representing an expression.
///
/// Trees are built bottom-up by the parser and are owned exclusively by the
/// parse result. Every node carries the [`Position`] of the token that
/// introduced it.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A numeric literal such as `3.5`.
    Number {
        /// The literal value.
        value:    f64,
        /// Source position.
        position: Position,
    },
    /// Reference to a variable by name.
    Variable {
        /// Name of the variable.
        name:     String,
        /// Source position.
        position: Position,
    },
    /// A vector literal such as `[1, 2, 3]`.
    VectorLiteral {
        /// The elements, in index order.
        elements: Vec<f64>,
        /// Source position.
        position: Position,
    },
    /// A matrix literal such as `[[1, 2], [3, 4]]`.
    ///
    /// Row lengths are not checked by the parser; the evaluator rejects
    /// ragged rows when the value is constructed.
    MatrixLiteral {
        /// The rows, in order.
        rows:     Vec<Vec<f64>>,
        /// Source position.
        position: Position,
    },
    /// A unary operation (negation).
    UnaryOp {
        /// The unary operator to apply.
        op:       UnaryOperator,
        /// The operand expression.
        expr:     Box<Self>,
        /// Source position.
        position: Position,
    },
    /// A binary operation (addition, subtraction, etc.).
    BinaryOp {
        /// Left operand.
        left:     Box<Self>,
        /// The operator.
        op:       BinaryOperator,
        /// Right operand.
        right:    Box<Self>,
        /// Source position of the operator.
        position: Position,
    },
    /// Function call expression (e.g. `sin(x)`).
    FunctionCall {
        /// Name of the function being called.
        name:      String,
        /// Arguments to the function.
        arguments: Vec<Self>,
        /// Source position of the function name.
        position:  Position,
    },
}

impl Expr {
    /// Gets the source position of `self`.
    ///
    /// ## Example
    /// ```
    /// use calcula::ast::{Expr, Position};
    ///
    /// let expr = Expr::Variable { name:     "x".to_string(),
    ///                             position: Position { line: 5, column: 2 }, };
    ///
    /// assert_eq!(expr.position().line, 5);
    /// ```
    #[must_use]
    pub const fn position(&self) -> Position {
        match self {
            Self::Number { position, .. }
            | Self::Variable { position, .. }
            | Self::VectorLiteral { position, .. }
            | Self::MatrixLiteral { position, .. }
            | Self::UnaryOp { position, .. }
            | Self::BinaryOp { position, .. }
            | Self::FunctionCall { position, .. } => *position,
        }
    }

    /// Returns `true` if the tree only contains numbers, variables, negation
    /// and binary operators.
    ///
    /// Such trees can be handed to the reverse-Polish evaluator once their
    /// variables have been substituted.
    #[must_use]
    pub fn is_numeric(&self) -> bool {
        match self {
            Self::Number { .. } | Self::Variable { .. } => true,
            Self::UnaryOp { expr, .. } => expr.is_numeric(),
            Self::BinaryOp { left, right, .. } => left.is_numeric() && right.is_numeric(),
            Self::VectorLiteral { .. } | Self::MatrixLiteral { .. } | Self::FunctionCall { .. } => {
                false
            },
        }
    }

    /// Collects the names of all variables referenced by the tree, in source
    /// order. Duplicates are kept.
    pub fn collect_variables<'a>(&'a self, names: &mut Vec<&'a str>) {
        match self {
            Self::Variable { name, .. } => names.push(name),
            Self::UnaryOp { expr, .. } => expr.collect_variables(names),
            Self::BinaryOp { left, right, .. } => {
                left.collect_variables(names);
                right.collect_variables(names);
            },
            Self::FunctionCall { arguments, .. } => {
                for argument in arguments {
                    argument.collect_variables(names);
                }
            },
            Self::Number { .. } | Self::VectorLiteral { .. } | Self::MatrixLiteral { .. } => {},
        }
    }

    /// Returns the number of nodes on the longest path from this node to a
    /// leaf. A leaf has height 1.
    ///
    /// ## Example
    /// ```
    /// use calcula::ast::{Expr, Position, UnaryOperator};
    ///
    /// let leaf = Expr::Number { value:    1.0,
    ///                           position: Position::default(), };
    /// assert_eq!(leaf.height(), 1);
    ///
    /// let negated = Expr::UnaryOp { op:       UnaryOperator::Negate,
    ///                               expr:     Box::new(leaf),
    ///                               position: Position::default(), };
    /// assert_eq!(negated.height(), 2);
    /// ```
    #[must_use]
    pub fn height(&self) -> usize {
        match self {
            Self::Number { .. }
            | Self::Variable { .. }
            | Self::VectorLiteral { .. }
            | Self::MatrixLiteral { .. } => 1,
            Self::UnaryOp { expr, .. } => expr.height() + 1,
            Self::BinaryOp { left, right, .. } => left.height().max(right.height()) + 1,
            Self::FunctionCall { arguments, .. } => {
                arguments.iter().map(Self::height).max().unwrap_or(0) + 1
            },
        }
    }
}

/// Represents a top-level statement.
///
/// Statements are the units accepted by the interpreter, one per line. The
/// right-hand sides are kept as text because the dispatch layer classifies
/// them before choosing a parser.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// A standalone expression evaluated for its result.
    Expression {
        /// The expression text.
        text:     String,
        /// Source position of the first character.
        position: Position,
    },
    /// A variable assignment binding a name to an expression.
    Assignment {
        /// The name of the variable.
        name:           String,
        /// The right-hand side text.
        value:          String,
        /// Source position of the first character of `value`.
        value_position: Position,
        /// Source position of the name.
        position:       Position,
    },
    /// A compound assignment such as `x += 1`.
    CompoundAssignment {
        /// The name of the variable.
        name:           String,
        /// The binary operation applied to the current binding.
        op:             BinaryOperator,
        /// The right-hand side text.
        value:          String,
        /// Source position of the first character of `value`.
        value_position: Position,
        /// Source position of the name.
        position:       Position,
    },
    /// `x++`
    Increment {
        /// The name of the variable.
        name:     String,
        /// Source position of the name.
        position: Position,
    },
    /// `x--`
    Decrement {
        /// The name of the variable.
        name:     String,
        /// Source position of the name.
        position: Position,
    },
}

/// Represents a binary arithmetic operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`); matrix product for two matrices.
    Mul,
    /// Division (`/`)
    Div,
    /// Modulo (`%`)
    Mod,
}

impl BinaryOperator {
    /// Binding strength of the operator. Higher binds tighter.
    #[must_use]
    pub const fn precedence(self) -> u8 {
        match self {
            Self::Add | Self::Sub => 1,
            Self::Mul | Self::Div | Self::Mod => 2,
        }
    }

    /// Applies the operator to two plain numbers.
    ///
    /// Zero checks are the caller's responsibility.
    #[must_use]
    pub fn apply(self, left: f64, right: f64) -> f64 {
        match self {
            Self::Add => left + right,
            Self::Sub => left - right,
            Self::Mul => left * right,
            Self::Div => left / right,
            Self::Mod => left % right,
        }
    }
}

/// Represents a unary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum UnaryOperator {
    /// Arithmetic negation (e.g. `-x`).
    Negate,
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Mod => "%",
        };
        write!(f, "{operator}")
    }
}
