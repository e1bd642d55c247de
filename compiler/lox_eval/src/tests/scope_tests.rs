use pretty_assertions::assert_eq;

use super::{capturing, output_of, run_on};
use crate::{Environment, EvalErrorKind, InterpreterBuilder, Value};

#[test]
fn inner_block_shadows_and_restores() {
    let source = r#"
        var a = "global";
        {
            var a = "inner";
            print a;
        }
        print a;
    "#;
    assert_eq!(output_of(source), "inner\nglobal\n");
}

#[test]
fn assignment_reaches_enclosing_scope() {
    let source = r"
        var a = 1;
        {
            a = 2;
            { a = a + 1; }
        }
        print a;
    ";
    assert_eq!(output_of(source), "3\n");
}

#[test]
fn block_locals_do_not_leak() {
    let mut interp = capturing();
    let result = run_on(&mut interp, "{ var hidden = 1; } print hidden;");
    let err = match result {
        Err(err) => err,
        Ok(()) => panic!("expected a runtime error"),
    };
    assert_eq!(err.kind, EvalErrorKind::UndefinedVariable("hidden".into()));
}

#[test]
fn initializer_sees_outer_binding() {
    let source = r"
        var a = 1;
        {
            var a = a + 1;
            print a;
        }
        print a;
    ";
    assert_eq!(output_of(source), "2\n1\n");
}

#[test]
fn scope_is_popped_after_runtime_error() {
    let mut interp = capturing();
    let result = run_on(&mut interp, "{ { var x = 1; print -nil; } }");
    assert!(result.is_err());
    assert_eq!(interp.env().depth(), 1);
    assert_eq!(interp.env().lookup("x"), None);
}

#[test]
fn globals_persist_across_runs() {
    let mut interp = capturing();
    assert!(run_on(&mut interp, "var count = 1;").is_ok());
    assert!(run_on(&mut interp, "count = count + 1;").is_ok());
    assert!(run_on(&mut interp, "print count;").is_ok());
    assert_eq!(interp.print_handler().get_output(), "2\n");
}

#[test]
fn effects_before_error_persist() {
    let mut interp = capturing();
    assert!(run_on(&mut interp, "var a = 1; a = 2; print -a; a = 3;").is_ok());
    assert_eq!(interp.env().lookup("a"), Some(Value::Number(3.0)));

    let mut interp = capturing();
    assert!(run_on(&mut interp, "var b = 1; b = 2; print -nil; b = 3;").is_err());
    assert_eq!(interp.env().lookup("b"), Some(Value::Number(2.0)));
}

#[test]
fn builder_accepts_prepared_environment() {
    let mut env = Environment::new();
    env.define("greeting", Value::string("hi"));
    let handler = crate::buffer_handler();
    let mut interp = InterpreterBuilder::new()
        .env(env)
        .print_handler(handler.clone())
        .build();
    assert!(run_on(&mut interp, "print greeting;").is_ok());
    assert_eq!(handler.get_output(), "hi\n");
}

#[test]
fn silent_handler_discards_output() {
    let mut interp = InterpreterBuilder::new()
        .print_handler(crate::silent_handler())
        .build();
    assert!(run_on(&mut interp, "var x = 1; print x;").is_ok());
    assert_eq!(interp.print_handler().get_output(), "");
    assert_eq!(interp.env().lookup("x"), Some(Value::Number(1.0)));
}

#[test]
fn scoped_guard_pops_on_drop() {
    let mut interp = capturing();
    {
        let mut scoped = interp.scoped();
        scoped.env_mut().define("temp", Value::Bool(true));
        assert_eq!(scoped.env().depth(), 2);
    }
    assert_eq!(interp.env().depth(), 1);
    assert_eq!(interp.env().lookup("temp"), None);
}

#[test]
fn deeply_nested_blocks() {
    let depth = 50_000;
    let mut source = "var v = 0;".to_string();
    for _ in 0..depth {
        source.push('{');
    }
    source.push_str("v = v + 1;");
    for _ in 0..depth {
        source.push('}');
    }
    source.push_str("print v;");
    assert_eq!(output_of(&source), "1\n");
}
