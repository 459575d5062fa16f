//! Domain entities: core data structures

use std::fmt;
use std::str::FromStr;

use crate::domain::error::DomainError;

/// Which child slot of a manager a new employee goes into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    /// Normalize raw user input into a side.
    ///
    /// Matching is case-insensitive and ignores surrounding whitespace.
    /// Absent input is rejected like any other invalid value.
    pub fn parse(raw: Option<&str>) -> Result<Self, DomainError> {
        let given = raw.unwrap_or_default();
        match given.trim().to_ascii_lowercase().as_str() {
            "left" => Ok(Side::Left),
            "right" => Ok(Side::Right),
            _ => Err(DomainError::InvalidSide {
                given: given.to_string(),
            }),
        }
    }
}

impl Side {
    /// One-letter label used in tree drawings.
    pub fn short(&self) -> char {
        match self {
            Side::Left => 'L',
            Side::Right => 'R',
        }
    }
}

impl FromStr for Side {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Side::parse(Some(s))
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Left => write!(f, "LEFT"),
            Side::Right => write!(f, "RIGHT"),
        }
    }
}

/// A single employee in the reporting hierarchy.
///
/// Each node exclusively owns its children; the hierarchy is a strict tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmployeeNode {
    pub name: String,
    pub left: Option<Box<EmployeeNode>>,
    pub right: Option<Box<EmployeeNode>>,
}

impl EmployeeNode {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            left: None,
            right: None,
        }
    }

    pub fn child(&self, side: Side) -> Option<&EmployeeNode> {
        match side {
            Side::Left => self.left.as_deref(),
            Side::Right => self.right.as_deref(),
        }
    }

    pub(crate) fn slot_mut(&mut self, side: Side) -> &mut Option<Box<EmployeeNode>> {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }
}

/// Summary with the names of the immediate children, `None` for empty slots.
impl fmt::Display for EmployeeNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn slot(child: Option<&EmployeeNode>) -> String {
            child
                .map(|c| format!("{:?}", c.name))
                .unwrap_or_else(|| "None".to_string())
        }
        write!(
            f,
            "EmployeeNode(name={:?}, left={}, right={})",
            self.name,
            slot(self.left.as_deref()),
            slot(self.right.as_deref())
        )
    }
}
