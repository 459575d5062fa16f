//! Reporting hierarchy as an unbalanced, append-only binary tree addressed by name.

use termtree::Tree;
use tracing::{debug, instrument, trace};

use crate::domain::entities::{EmployeeNode, Side};
use crate::domain::error::{DomainError, DomainResult};

/// Outcome of searching a subtree for the manager.
///
/// Finding the manager and attaching to it are different signals: a manager
/// whose slot is taken still ends the search.
#[derive(Debug, PartialEq, Eq)]
enum Search {
    Attached,
    Occupied(String),
    NotFound,
}

/// The team tree. Owns its root, which owns everything below it.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TeamTree {
    root: Option<Box<EmployeeNode>>,
}

impl TeamTree {
    pub fn new() -> Self {
        Self { root: None }
    }

    pub fn root(&self) -> Option<&EmployeeNode> {
        self.root.as_deref()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Install a fresh root, returning the previous one if there was any.
    ///
    /// Whether replacing an existing root is allowed is up to the caller.
    #[instrument(level = "debug", skip(self))]
    pub fn set_root(&mut self, name: &str) -> Option<EmployeeNode> {
        let previous = self.root.replace(Box::new(EmployeeNode::new(name)));
        if let Some(prev) = &previous {
            debug!("Replaced team lead {}", prev.name);
        }
        previous.map(|b| *b)
    }

    /// Attach `employee_name` under the first node named `manager_name`.
    ///
    /// `side` is normalized before anything else, so an invalid side is
    /// reported even on an empty tree. On any error the tree is unchanged.
    #[instrument(level = "debug", skip(self))]
    pub fn insert(&mut self, manager_name: &str, employee_name: &str, side: &str) -> DomainResult<()> {
        let side = side.parse::<Side>()?;
        self.insert_at(manager_name, employee_name, side)
    }

    /// Typed variant of [`TeamTree::insert`] for callers that already hold a [`Side`].
    #[instrument(level = "debug", skip(self))]
    pub fn insert_at(&mut self, manager_name: &str, employee_name: &str, side: Side) -> DomainResult<()> {
        let root = self.root.as_deref_mut().ok_or(DomainError::NoRoot)?;

        // NotFound is only turned into an error here, once per call
        match attach(root, manager_name, employee_name, side) {
            Search::Attached => {
                debug!("Attached {} to the {} of {}", employee_name, side, manager_name);
                Ok(())
            }
            Search::Occupied(occupant) => Err(DomainError::SlotOccupied {
                manager: manager_name.to_string(),
                side,
                occupant,
            }),
            Search::NotFound => Err(DomainError::ManagerNotFound {
                manager: manager_name.to_string(),
            }),
        }
    }

    /// Pre-order listing of `(depth, name)`, root at depth 0.
    ///
    /// Empty when there is no root.
    pub fn render(&self) -> Vec<(usize, &str)> {
        self.iter()
            .map(|(depth, node)| (depth, node.name.as_str()))
            .collect()
    }

    /// First node with the given name in left-to-right pre-order.
    pub fn find(&self, name: &str) -> Option<&EmployeeNode> {
        self.iter().map(|(_, node)| node).find(|node| node.name == name)
    }

    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// Number of levels, 0 for an empty tree.
    pub fn depth(&self) -> usize {
        self.iter().map(|(depth, _)| depth + 1).max().unwrap_or(0)
    }

    pub fn iter(&self) -> PreOrderIterator<'_> {
        PreOrderIterator::new(self)
    }

    /// Box-drawing rendering of the hierarchy.
    pub fn to_tree_string(&self, empty_marker: &str) -> Tree<String> {
        // children are labelled with their slot (L/R)
        fn build(node: &EmployeeNode, label: String) -> Tree<String> {
            let leaves: Vec<_> = [Side::Left, Side::Right]
                .into_iter()
                .filter_map(|side| {
                    node.child(side)
                        .map(|child| build(child, format!("{}: {}", side.short(), child.name)))
                })
                .collect();
            Tree::new(label).with_leaves(leaves)
        }

        match self.root() {
            Some(root) => build(root, root.name.clone()),
            None => Tree::new(empty_marker.to_string()),
        }
    }
}

fn attach(node: &mut EmployeeNode, manager_name: &str, employee_name: &str, side: Side) -> Search {
    if node.name == manager_name {
        let slot = node.slot_mut(side);
        if let Some(occupant) = slot.as_deref() {
            trace!("{} slot of {} taken by {}", side, manager_name, occupant.name);
            return Search::Occupied(occupant.name.clone());
        }
        *slot = Some(Box::new(EmployeeNode::new(employee_name)));
        return Search::Attached;
    }

    if let Some(left) = node.left.as_deref_mut() {
        match attach(left, manager_name, employee_name, side) {
            Search::NotFound => {}
            found => return found,
        }
    }

    match node.right.as_deref_mut() {
        Some(right) => attach(right, manager_name, employee_name, side),
        None => Search::NotFound,
    }
}

/// Depth-first pre-order iterator (node, left, right).
pub struct PreOrderIterator<'a> {
    stack: Vec<(usize, &'a EmployeeNode)>,
}

impl<'a> PreOrderIterator<'a> {
    fn new(tree: &'a TeamTree) -> Self {
        let mut stack = Vec::new();
        if let Some(root) = tree.root() {
            stack.push((0, root));
        }
        Self { stack }
    }
}

impl<'a> Iterator for PreOrderIterator<'a> {
    type Item = (usize, &'a EmployeeNode);

    fn next(&mut self) -> Option<Self::Item> {
        let (depth, node) = self.stack.pop()?;
        // Right first so left is visited first
        if let Some(right) = node.right.as_deref() {
            self.stack.push((depth + 1, right));
        }
        if let Some(left) = node.left.as_deref() {
            self.stack.push((depth + 1, left));
        }
        Some((depth, node))
    }
}
