use std::error;
use std::fmt;
use std::result;

/// An enum representing a broken tree invariant or an unparsable argument.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Error {
    /// The in-order key sequence decreases somewhere.
    OutOfOrder,
    /// A cached avl height differs from `1 + max(left height, right height)`.
    HeightMismatch { cached: usize, actual: usize },
    /// An avl node whose subtree heights differ by more than one.
    Unbalanced { balance: isize },
    /// The root of a red black tree is red.
    RedRoot,
    /// A red node has a red child.
    RedViolation,
    /// Two paths from the same node to a leaf pass through different numbers of black nodes.
    BlackHeightMismatch { left: usize, right: usize },
    /// A child's parent link does not point at the node that owns it.
    BrokenParentLink,
    /// A traversal order name that is not one of `pre`, `in`, `post`, or `level`.
    UnknownOrder(String),
}

pub type Result<T> = result::Result<T, Error>;

impl error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::OutOfOrder => write!(f, "keys are not in binary search tree order"),
            Error::HeightMismatch { cached, actual } => {
                write!(f, "cached height {} but subtree height is {}", cached, actual)
            },
            Error::Unbalanced { balance } => write!(f, "balance factor {} out of range", balance),
            Error::RedRoot => write!(f, "root is red"),
            Error::RedViolation => write!(f, "red node has a red child"),
            Error::BlackHeightMismatch { left, right } => {
                write!(f, "black heights differ: left {} right {}", left, right)
            },
            Error::BrokenParentLink => write!(f, "parent link does not match owning node"),
            Error::UnknownOrder(name) => write!(f, "unknown traversal order `{}`", name),
        }
    }
}
