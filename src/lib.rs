//! orgtree: a company's reporting hierarchy as an unbalanced binary tree.
//!
//! Employees are addressed by name. New employees are attached to the left or
//! right slot of the first manager with a matching name, in left-to-right
//! depth-first order.
//!
//! # Architecture
//!
//! - `domain`: the tree, its nodes and the insert/render operations
//! - `application`: formatting and error plumbing on top of the domain
//! - `cli`: argument parsing, command dispatch and the interactive menu
//! - `config`: layered settings (defaults, global file, explicit file, env)

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod util;

pub use domain::{DomainError, EmployeeNode, Side, TeamTree};
