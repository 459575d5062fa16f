//! Integration tests for the interactive menu session

use std::io::Cursor;

use orgtree::cli::Session;
use orgtree::config::{DisplayConfig, DisplayStyle, Settings};
use orgtree::domain::TeamTree;
use orgtree::util::testing;

#[ctor::ctor]
fn init() {
    testing::init_test_setup();
}

fn run(script: &str, settings: Settings) -> (TeamTree, String) {
    let mut out = Vec::new();
    let mut session = Session::new(Cursor::new(script.to_string()), &mut out, settings);
    session.run().expect("session runs");
    let tree = session.into_tree();
    (tree, String::from_utf8(out).expect("utf8 output"))
}

#[test]
fn given_walkthrough_script_when_running_then_reports_each_step() {
    let script = "\
1
Alice
2
Alice
Bob
left
2
Alice
Carol
LEFT
2
Bob
Dan
 Right
2
Eve
Frank
left
3
4
";
    let (tree, out) = run(script, Settings::default());

    assert!(out.contains("Alice added as the team lead."));
    assert!(out.contains("Bob added to the LEFT of Alice"));
    assert!(out.contains("Alice's LEFT side is already occupied by Bob"));
    assert!(out.contains("Dan added to the RIGHT of Bob"));
    assert_eq!(
        out.matches("manager named 'Eve' does not exist in the current team tree")
            .count(),
        1
    );
    assert!(out.contains("Current Team Structure:"));
    assert!(out.contains("- Alice\n  - Bob\n    - Dan\n"));
    assert!(out.trim_end().ends_with("Good Bye!"));

    assert_eq!(tree.render(), vec![(0, "Alice"), (1, "Bob"), (2, "Dan")]);
}

#[test]
fn given_no_root_when_adding_employee_then_asks_for_team_lead_first() {
    let (tree, out) = run("2\n3\n4\n", Settings::default());
    assert!(tree.is_empty());
    assert!(out.contains("please add a team lead first (option 1)"));
    assert!(out.contains("(empty team)"));
    assert!(!out.contains("Enter the manager's name"));
}

#[test]
fn given_invalid_menu_choice_then_error_and_loop_continues() {
    let (_, out) = run("7\nabc\n4\n", Settings::default());
    assert_eq!(out.matches("invalid choice: please enter a number 1-4").count(), 2);
    assert_eq!(out.matches("Team Management Menu").count(), 3);
}

#[test]
fn given_bad_side_when_adding_employee_then_validation_error() {
    let (tree, out) = run("1\nAlice\n2\nAlice\nBob\nup\n4\n", Settings::default());
    assert_eq!(tree.len(), 1);
    assert!(out.contains("side must be 'left' or 'right'"));
}

#[test]
fn given_empty_root_name_then_rejected() {
    let (tree, out) = run("1\n\n4\n", Settings::default());
    assert!(tree.is_empty());
    assert!(out.contains("name cannot be empty"));
}

#[test]
fn given_end_of_input_at_menu_then_good_bye() {
    let (_, out) = run("", Settings::default());
    assert!(out.trim_end().ends_with("Good Bye!"));
}

#[test]
fn given_tree_style_when_printing_then_uses_branch_glyphs() {
    let settings = Settings {
        display: DisplayConfig {
            style: DisplayStyle::Tree,
            ..DisplayConfig::default()
        },
        ..Settings::default()
    };
    let (_, out) = run("1\nAlice\n2\nAlice\nBob\nright\n3\n4\n", settings);
    let bob_line = out
        .lines()
        .find(|l| l.ends_with("Bob") && !l.contains("added"))
        .expect("Bob line");
    assert_ne!(bob_line, "- Bob");
    assert!(!out.contains("- Alice"));
}
