//! Dice expressions such as `2d6 + 3`.

use std::fmt;
use std::ops::{Add, Sub};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A single die, identified by its number of sides.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Die {
    /// Number of faces.
    pub sides: i32,
}

impl Die {
    /// The d20 used for attack rolls and saving throws.
    pub const D20: Die = Die { sides: 20 };
    /// The d6 used for recharge rolls.
    pub const D6: Die = Die { sides: 6 };

    /// Creates a die with the given number of sides.
    #[must_use]
    pub const fn new(sides: i32) -> Self {
        Self { sides }
    }
}

/// Arithmetic operator joining two dice sub-expressions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Operator {
    /// `+`
    Add,
    /// `-`
    Subtract,
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Add => write!(f, "+"),
            Self::Subtract => write!(f, "-"),
        }
    }
}

/// A dice formula: dice, constants, and sums or differences of them.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum DiceExpression {
    /// `count` dice of the given kind, e.g. `2d6`.
    Dice {
        /// How many dice are rolled.
        count: i32,
        /// Which die is rolled.
        die: Die,
    },
    /// Two expressions joined by an operator.
    Compound {
        /// Left-hand side.
        lhs: Box<DiceExpression>,
        /// The operator.
        operator: Operator,
        /// Right-hand side.
        rhs: Box<DiceExpression>,
    },
    /// A constant.
    Number(i32),
}

impl DiceExpression {
    /// Creates `count` dice with `sides` sides.
    #[must_use]
    pub const fn dice(count: i32, sides: i32) -> Self {
        Self::Dice {
            count,
            die: Die::new(sides),
        }
    }

    /// Creates a constant.
    #[must_use]
    pub const fn number(value: i32) -> Self {
        Self::Number(value)
    }

    /// Joins two expressions with an operator.
    #[must_use]
    pub fn compound(lhs: Self, operator: Operator, rhs: Self) -> Self {
        Self::Compound {
            lhs: Box::new(lhs),
            operator,
            rhs: Box::new(rhs),
        }
    }

    /// The lowest value this expression can roll.
    #[must_use]
    pub fn minimum(&self) -> i32 {
        match self {
            Self::Dice { count, .. } => *count,
            Self::Number(n) => *n,
            Self::Compound { lhs, operator, rhs } => match operator {
                Operator::Add => lhs.minimum() + rhs.minimum(),
                Operator::Subtract => lhs.minimum() - rhs.maximum(),
            },
        }
    }

    /// The highest value this expression can roll.
    #[must_use]
    pub fn maximum(&self) -> i32 {
        match self {
            Self::Dice { count, die } => count * die.sides,
            Self::Number(n) => *n,
            Self::Compound { lhs, operator, rhs } => match operator {
                Operator::Add => lhs.maximum() + rhs.maximum(),
                Operator::Subtract => lhs.maximum() - rhs.minimum(),
            },
        }
    }

    /// Total number of dice rolled.
    #[must_use]
    pub fn dice_count(&self) -> i32 {
        match self {
            Self::Dice { count, .. } => *count,
            Self::Number(_) => 0,
            Self::Compound { lhs, rhs, .. } => lhs.dice_count() + rhs.dice_count(),
        }
    }
}

impl fmt::Display for DiceExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Dice { count, die } => write!(f, "{count}d{}", die.sides),
            Self::Number(n) => write!(f, "{n}"),
            Self::Compound { lhs, operator, rhs } => write!(f, "{lhs} {operator} {rhs}"),
        }
    }
}

impl Add for DiceExpression {
    type Output = DiceExpression;

    fn add(self, rhs: DiceExpression) -> DiceExpression {
        DiceExpression::compound(self, Operator::Add, rhs)
    }
}

impl Add<i32> for DiceExpression {
    type Output = DiceExpression;

    fn add(self, rhs: i32) -> DiceExpression {
        self + DiceExpression::Number(rhs)
    }
}

impl Sub for DiceExpression {
    type Output = DiceExpression;

    fn sub(self, rhs: DiceExpression) -> DiceExpression {
        DiceExpression::compound(self, Operator::Subtract, rhs)
    }
}

impl Sub<i32> for DiceExpression {
    type Output = DiceExpression;

    fn sub(self, rhs: i32) -> DiceExpression {
        self - DiceExpression::Number(rhs)
    }
}
