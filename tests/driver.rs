//! End-to-end coverage: drives `Driver::parse_string` with the grammar in
//! `tests/common` across the handful of concrete statement shapes it
//! supports, plus the ambient-stack properties (recursion guard, default
//! configuration, lexer byte-span fidelity) that aren't specific to any one
//! grammar rule.

mod common;

use pegen_rt::ast::{CmpOp, Constant, Expr, ExprContext, Mod, Span, Stmt};
use pegen_rt::token::TokenKind;
use pegen_rt::{Arena, Cursor, Driver, Mode, ParserConfig, RawLexer};

use common::ReferenceLexer;

fn span(start_line: usize, start_col: usize, end_line: usize, end_col: usize) -> Span {
    Span {
        start_line,
        start_col,
        end_line,
        end_col,
    }
}

#[test]
fn name_expression_statement() {
    let arena = Arena::new(4096);
    let source = b"x\n";
    let module = Driver::parse_string(
        &arena,
        source,
        ReferenceLexer::new(source),
        ParserConfig::default(),
        Mode::Ast,
        common::module,
    )
    .unwrap()
    .unwrap();

    assert_eq!(module.body.len(), 1);
    match *module.body[0] {
        Stmt::Expr { value, .. } => match *value {
            Expr::Name { id, ctx, span: s } => {
                assert_eq!(id, "x");
                assert_eq!(ctx, ExprContext::Load);
                assert_eq!(s, span(1, 0, 1, 1));
            }
            other => panic!("expected Name, got {:?}", other),
        },
        other => panic!("expected Expr, got {:?}", other),
    }
}

#[test]
fn simple_assignment() {
    let arena = Arena::new(4096);
    let source = b"x = 1\n";
    let module = Driver::parse_string(
        &arena,
        source,
        ReferenceLexer::new(source),
        ParserConfig::default(),
        Mode::Ast,
        common::module,
    )
    .unwrap()
    .unwrap();

    match *module.body[0] {
        Stmt::Assign { targets, value, .. } => {
            assert_eq!(targets.len(), 1);
            match *targets[0] {
                Expr::Name { id, ctx, .. } => {
                    assert_eq!(id, "x");
                    assert_eq!(ctx, ExprContext::Store);
                }
                other => panic!("expected Name target, got {:?}", other),
            }
            match *value {
                Expr::Constant {
                    value: Constant::Int(1),
                    span: s,
                    ..
                } => assert_eq!(s, span(1, 4, 1, 5)),
                other => panic!("expected Constant(1), got {:?}", other),
            }
        }
        other => panic!("expected Assign, got {:?}", other),
    }
}

#[test]
fn dotted_import() {
    let arena = Arena::new(4096);
    let source = b"import a.b\n";
    let module = Driver::parse_string(
        &arena,
        source,
        ReferenceLexer::new(source),
        ParserConfig::default(),
        Mode::Ast,
        common::module,
    )
    .unwrap()
    .unwrap();

    match *module.body[0] {
        Stmt::Import { names, .. } => {
            assert_eq!(names.len(), 1);
            assert_eq!(names[0].name, "a.b");
            assert!(names[0].asname.is_none());
        }
        other => panic!("expected Import, got {:?}", other),
    }
}

#[test]
fn function_def_with_pass_body() {
    let arena = Arena::new(4096);
    let source = b"def f(): pass\n";
    let module = Driver::parse_string(
        &arena,
        source,
        ReferenceLexer::new(source),
        ParserConfig::default(),
        Mode::Ast,
        common::module,
    )
    .unwrap()
    .unwrap();

    match *module.body[0] {
        Stmt::FunctionDef {
            name,
            args,
            body,
            decorator_list,
            ..
        } => {
            assert_eq!(name, "f");
            assert!(args.posonlyargs.is_empty());
            assert!(args.args.is_empty());
            assert!(args.vararg.is_none());
            assert!(args.kwarg.is_none());
            assert!(decorator_list.is_empty());
            assert_eq!(body.len(), 1);
            assert!(matches!(*body[0], Stmt::Pass { .. }));
        }
        other => panic!("expected FunctionDef, got {:?}", other),
    }
}

#[test]
fn chained_comparison() {
    let arena = Arena::new(4096);
    let source = b"1 < 2 < 3\n";
    let module = Driver::parse_string(
        &arena,
        source,
        ReferenceLexer::new(source),
        ParserConfig::default(),
        Mode::Ast,
        common::module,
    )
    .unwrap()
    .unwrap();

    match *module.body[0] {
        Stmt::Expr { value, .. } => match *value {
            Expr::Compare {
                left,
                ops,
                comparators,
                ..
            } => {
                assert!(matches!(
                    *left,
                    Expr::Constant {
                        value: Constant::Int(1),
                        ..
                    }
                ));
                assert_eq!(ops, [CmpOp::Lt, CmpOp::Lt]);
                assert_eq!(comparators.len(), 2);
                assert!(matches!(
                    *comparators[0],
                    Expr::Constant {
                        value: Constant::Int(2),
                        ..
                    }
                ));
                assert!(matches!(
                    *comparators[1],
                    Expr::Constant {
                        value: Constant::Int(3),
                        ..
                    }
                ));
            }
            other => panic!("expected Compare, got {:?}", other),
        },
        other => panic!("expected Expr, got {:?}", other),
    }
}

#[test]
fn tuple_assignment_rewrites_targets_to_store_context() {
    let arena = Arena::new(4096);
    let source = b"a, b = 1, 2\n";
    let module = Driver::parse_string(
        &arena,
        source,
        ReferenceLexer::new(source),
        ParserConfig::default(),
        Mode::Ast,
        common::module,
    )
    .unwrap()
    .unwrap();

    match *module.body[0] {
        Stmt::Assign { targets, value, .. } => {
            assert_eq!(targets.len(), 1);
            match *targets[0] {
                Expr::Tuple { elts, ctx, .. } => {
                    assert_eq!(ctx, ExprContext::Store);
                    assert_eq!(elts.len(), 2);
                    for elt in elts {
                        match **elt {
                            Expr::Name { ctx, .. } => assert_eq!(ctx, ExprContext::Store),
                            other => panic!("expected Name, got {:?}", other),
                        }
                    }
                }
                other => panic!("expected target Tuple, got {:?}", other),
            }
            match *value {
                Expr::Tuple { ctx, elts, .. } => {
                    assert_eq!(ctx, ExprContext::Load);
                    assert_eq!(elts.len(), 2);
                }
                other => panic!("expected value Tuple, got {:?}", other),
            }
        }
        other => panic!("expected Assign, got {:?}", other),
    }
}

#[test]
fn parser_config_default_is_exercised_with_no_explicit_overrides() {
    let config = ParserConfig::default();
    assert_eq!(config.recursion_limit, 500);
    assert_eq!(config.max_tokens, None);

    let arena = Arena::new(4096);
    let source = b"x\n";
    let module = Driver::parse_string(
        &arena,
        source,
        ReferenceLexer::new(source),
        config,
        Mode::Ast,
        common::module,
    )
    .unwrap()
    .unwrap();
    assert_eq!(module.body.len(), 1);
}

/// Recurses through `enter_rule`/`exit_rule` far deeper than the configured
/// limit; stops growing the real call stack the moment the guard trips,
/// since `enter_rule` returning `Err` short-circuits before the next level
/// of recursion is attempted.
fn deeply_nested_rule<'a, L: RawLexer>(cursor: &mut Cursor<'a, L>, remaining: usize) -> Option<&'a Mod<'a>> {
    if cursor.enter_rule().is_err() {
        return None;
    }
    let result = if remaining == 0 {
        None
    } else {
        deeply_nested_rule(cursor, remaining - 1)
    };
    cursor.exit_rule();
    result
}

#[test]
fn recursion_guard_trips_cleanly() {
    let arena = Arena::new(1024);
    let mut config = ParserConfig::default();
    config.recursion_limit = 50;
    let err = Driver::parse_string(
        &arena,
        b"",
        ReferenceLexer::new(b""),
        config,
        Mode::Ast,
        |cursor| deeply_nested_rule(cursor, 10_000),
    )
    .unwrap_err();
    assert!(err.message.to_lowercase().contains("recursion"));
}

#[test]
fn reference_lexer_round_trips_byte_spans_against_source() {
    let source = b"abc 123 a.b < = ( ) : , def";
    let mut lexer = ReferenceLexer::new(source);
    loop {
        let tok = lexer.next_token();
        if tok.kind == TokenKind::EndMarker {
            break;
        }
        assert_eq!(tok.start_line, 1);
        let expected = &source[tok.start_col..tok.end_col];
        assert_eq!(tok.bytes, expected);
    }
}
