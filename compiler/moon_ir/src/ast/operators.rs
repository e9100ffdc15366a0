//! Binary and Unary Operators
//!
//! The closed operator sets of the language. These are pure tags: coercion,
//! comparison and short-circuit rules belong to the evaluator.

/// Binary operators.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BinaryOp {
    // Arithmetic
    Addition,
    Subtraction,
    Multiplication,
    Division,
    Power,
    Modulo,

    // String
    Concat,

    // Comparison
    GreaterThan,
    GreaterOrEqual,
    LessThan,
    LessOrEqual,
    Equal,
    Different,

    // Logical
    And,
    Or,
}

impl BinaryOp {
    /// Every binary operator, in declaration order.
    pub const ALL: [BinaryOp; 15] = [
        Self::Addition,
        Self::Subtraction,
        Self::Multiplication,
        Self::Division,
        Self::Power,
        Self::Modulo,
        Self::Concat,
        Self::GreaterThan,
        Self::GreaterOrEqual,
        Self::LessThan,
        Self::LessOrEqual,
        Self::Equal,
        Self::Different,
        Self::And,
        Self::Or,
    ];

    /// Returns the source-level symbol for this operator.
    pub const fn as_symbol(self) -> &'static str {
        match self {
            Self::Addition => "+",
            Self::Subtraction => "-",
            Self::Multiplication => "*",
            Self::Division => "/",
            Self::Power => "^",
            Self::Modulo => "%",
            Self::Concat => "..",
            Self::GreaterThan => ">",
            Self::GreaterOrEqual => ">=",
            Self::LessThan => "<",
            Self::LessOrEqual => "<=",
            Self::Equal => "==",
            Self::Different => "~=",
            Self::And => "and",
            Self::Or => "or",
        }
    }

    /// Left and right binding power of this operator.
    ///
    /// Higher binds tighter. An operator is right-associative when its right
    /// power is lower than its left power (`..` and `^`).
    ///
    /// - 1: `or`
    /// - 2: `and`
    /// - 3: `<` `>` `<=` `>=` `~=` `==`
    /// - 5/4: `..`
    /// - 6: `+` `-`
    /// - 7: `*` `/` `%`
    /// - 10/9: `^`
    ///
    /// Unary operators sit at [`UnaryOp::BINDING_POWER`], between `%` and `^`.
    pub const fn binding_power(self) -> (u8, u8) {
        match self {
            Self::Or => (1, 1),
            Self::And => (2, 2),
            Self::GreaterThan
            | Self::GreaterOrEqual
            | Self::LessThan
            | Self::LessOrEqual
            | Self::Equal
            | Self::Different => (3, 3),
            Self::Concat => (5, 4),
            Self::Addition | Self::Subtraction => (6, 6),
            Self::Multiplication | Self::Division | Self::Modulo => (7, 7),
            Self::Power => (10, 9),
        }
    }

    /// Whether `a op b op c` groups as `a op (b op c)`.
    pub const fn is_right_associative(self) -> bool {
        let (left, right) = self.binding_power();
        right < left
    }
}

/// Unary operators.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum UnaryOp {
    /// Arithmetic negation: `-x`
    Negate,
    /// Logical not: `not x`
    Invert,
    /// Length: `#x`
    Length,
}

impl UnaryOp {
    /// Every unary operator, in declaration order.
    pub const ALL: [UnaryOp; 3] = [Self::Negate, Self::Invert, Self::Length];

    /// Binding power of every unary operator's operand.
    ///
    /// Only `^` binds tighter, so `-x ^ 2` is `-(x ^ 2)`.
    pub const BINDING_POWER: u8 = 8;

    /// Returns the source-level symbol for this operator.
    pub const fn as_symbol(self) -> &'static str {
        match self {
            Self::Negate => "-",
            Self::Invert => "not",
            Self::Length => "#",
        }
    }
}
