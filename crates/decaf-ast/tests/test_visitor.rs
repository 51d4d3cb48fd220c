//! Tests for the tree walker.

use decaf_ast::{BinaryOperator, Node, Visitor};
use decaf_core::DecafType;

/// Records `+Kind` on entry and `-Kind` on exit.
struct Recorder;

impl Visitor for Recorder {
    type Context = Vec<String>;

    fn enter(&mut self, node: &Node, cx: &mut Self::Context) {
        cx.push(format!("+{}", node.kind_name()));
    }

    fn exit(&mut self, node: &Node, cx: &mut Self::Context) {
        cx.push(format!("-{}", node.kind_name()));
    }
}

/// Counts nodes of one kind and never looks at the others.
struct BreakCounter;

impl Visitor for BreakCounter {
    type Context = usize;

    fn enter(&mut self, node: &Node, cx: &mut usize) {
        if node.kind_name() == "Break" {
            *cx += 1;
        }
    }
}

fn sample_program() -> Node {
    // int x;
    // def void main() { while (true) { x = x + 1; break; } }
    let body = Node::block(
        3,
        vec![],
        vec![Node::while_loop(
            3,
            Node::bool(3, true),
            Node::block(
                3,
                vec![],
                vec![
                    Node::assignment(
                        4,
                        Node::location(4, "x"),
                        Node::binary(
                            4,
                            BinaryOperator::Add,
                            Node::location(4, "x"),
                            Node::int(4, 1),
                        ),
                    ),
                    Node::break_stmt(5),
                ],
            ),
        )],
    );
    Node::program(
        vec![Node::var_decl(1, "x", DecafType::Int)],
        vec![Node::func_decl(2, "main", DecafType::Void, vec![], body)],
    )
}

#[test]
fn test_pre_and_post_order() {
    let program = sample_program();
    let mut events = Vec::new();
    Recorder.visit(&program, &mut events);

    insta::assert_snapshot!(events.join(" "), @"+Program +VarDecl -VarDecl +FuncDecl +Block +WhileLoop +Literal -Literal +Block +Assignment +Location -Location +BinaryOp +Location -Location +Literal -Literal -BinaryOp -Assignment +Break -Break -Block -WhileLoop -Block -FuncDecl -Program");
}

#[test]
fn test_every_node_visited_once() {
    let program = sample_program();
    let mut events = Vec::new();
    Recorder.visit(&program, &mut events);

    let entries = events.iter().filter(|e| e.starts_with('+')).count();
    let exits = events.iter().filter(|e| e.starts_with('-')).count();
    assert_eq!(entries, 13);
    assert_eq!(entries, exits);
}

#[test]
fn test_unhooked_kinds_are_still_walked() {
    let program = sample_program();
    let mut breaks = 0;
    BreakCounter.visit(&program, &mut breaks);
    assert_eq!(breaks, 1);
}
