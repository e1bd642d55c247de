use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_environment_push_pop() {
    let mut env = Environment::new();
    assert_eq!(env.depth(), 1);

    env.push_scope();
    env.push_scope();
    assert_eq!(env.depth(), 3);

    env.pop_scope();
    env.pop_scope();
    env.pop_scope();
    assert_eq!(env.depth(), 1, "global scope survives extra pops");
}

#[test]
fn test_define_and_lookup() {
    let mut env = Environment::new();
    env.define("x", Value::Number(1.0));
    assert_eq!(env.lookup("x"), Some(Value::Number(1.0)));
    assert_eq!(env.lookup("y"), None);
}

#[test]
fn test_redefinition_overwrites() {
    let mut env = Environment::new();
    env.define("x", Value::Number(1.0));
    env.define("x", Value::string("again"));
    assert_eq!(env.lookup("x"), Some(Value::string("again")));
}

#[test]
fn test_shadowing_is_undone_by_pop() {
    let mut env = Environment::new();
    env.define("x", Value::Number(1.0));

    env.push_scope();
    env.define("x", Value::Number(2.0));
    assert_eq!(env.lookup("x"), Some(Value::Number(2.0)));

    env.pop_scope();
    assert_eq!(env.lookup("x"), Some(Value::Number(1.0)));
}

#[test]
fn test_assign_targets_nearest_binding() {
    let mut env = Environment::new();
    env.define("x", Value::Number(1.0));
    env.push_scope();
    env.push_scope();

    assert_eq!(env.assign("x", Value::Number(5.0)), Ok(()));
    env.pop_scope();
    env.pop_scope();
    assert_eq!(env.lookup("x"), Some(Value::Number(5.0)));
}

#[test]
fn test_assign_to_shadow_leaves_outer_alone() {
    let mut env = Environment::new();
    env.define("x", Value::Number(1.0));
    env.push_scope();
    env.define("x", Value::Number(2.0));

    assert_eq!(env.assign("x", Value::Number(3.0)), Ok(()));
    env.pop_scope();
    assert_eq!(env.lookup("x"), Some(Value::Number(1.0)));
}

#[test]
fn test_assign_undefined_fails() {
    let mut env = Environment::new();
    assert_eq!(env.assign("missing", Value::Nil), Err(Unbound));
    assert_eq!(env.lookup("missing"), None);
}
