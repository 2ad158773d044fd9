/// A recognized two-operand operation.
///
/// Operands are extracted by the parser and never change afterwards.
/// Evaluation is a pure function of them, so calling
/// [`evaluate`](Operation::evaluate) any number of times yields the same value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// `a+b`
    Sum {
        /// Left operand.
        a: u64,
        /// Right operand.
        b: u64,
    },
    /// `a-b`, where `a` is the minuend as written on the left.
    Difference {
        /// Left operand.
        a: u64,
        /// Right operand.
        b: u64,
    },
}

impl Operation {
    /// Computes the value of the operation.
    ///
    /// The result is an `i128`, wide enough to hold the exact sum or difference
    /// of any two `u64` operands. Differences may be negative.
    ///
    /// # Example
    /// ```
    /// use uselesscalc::interpreter::operation::Operation;
    ///
    /// assert_eq!(Operation::Sum { a: 8, b: 34 }.evaluate(), 42);
    /// assert_eq!(Operation::Difference { a: 3, b: 8 }.evaluate(), -5);
    /// assert_eq!(Operation::Sum { a: u64::MAX, b: 1 }.evaluate(),
    ///            i128::from(u64::MAX) + 1);
    /// ```
    #[must_use]
    pub fn evaluate(self) -> i128 {
        match self {
            Self::Sum { a, b } => i128::from(a) + i128::from(b),
            Self::Difference { a, b } => i128::from(a) - i128::from(b),
        }
    }

    /// Returns the operator character as it appears in the input.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Sum { .. } => '+',
            Self::Difference { .. } => '-',
        }
    }

    /// Returns the operands in the order they were written.
    #[must_use]
    pub const fn operands(self) -> (u64, u64) {
        match self {
            Self::Sum { a, b } | Self::Difference { a, b } => (a, b),
        }
    }
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (a, b) = self.operands();
        write!(f, "{a}{}{b}", self.symbol())
    }
}
