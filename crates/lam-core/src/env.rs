//! Chained binding environments.

use std::collections::HashMap;
use std::rc::Rc;

use crate::value::{PrimitiveFn, Value};

/// A single binding frame, optionally chained to a parent frame.
///
/// Frames are fully populated at construction and never mutated afterwards.
/// Name lookup walks this frame and then the parent chain up to the global
/// frame. A closure keeps its defining frame alive by holding an `Rc` to it,
/// which is what makes scoping lexical rather than dynamic: applying the
/// closure chains the argument frame to the captured frame, not the caller's.
#[derive(Debug, PartialEq)]
pub struct Environment {
    bindings: HashMap<String, Value>,
    parent: Option<Rc<Environment>>,
}

impl Environment {
    /// Build the root frame from a table of named primitives. The concrete
    /// table is chosen by the caller; [`crate::stdlib::standard_primitives`]
    /// is the default one.
    pub fn global<'a, I>(primitives: I) -> Rc<Self>
    where
        I: IntoIterator<Item = (&'a str, PrimitiveFn)>,
    {
        let bindings = primitives
            .into_iter()
            .map(|(name, function)| {
                let value = Value::Primitive {
                    name: name.to_string(),
                    function,
                };
                (name.to_string(), value)
            })
            .collect();
        Rc::new(Self {
            bindings,
            parent: None,
        })
    }

    /// Create the child frame for one function application, binding each
    /// parameter to the corresponding argument value.
    pub fn child(parent: &Rc<Environment>, names: &[String], values: Vec<Value>) -> Rc<Self> {
        debug_assert_eq!(names.len(), values.len());
        let bindings = names.iter().cloned().zip(values).collect();
        Rc::new(Self {
            bindings,
            parent: Some(Rc::clone(parent)),
        })
    }

    /// Look `name` up in this frame, then in the parent chain.
    pub fn lookup(&self, name: &str) -> Option<&Value> {
        match self.bindings.get(name) {
            Some(value) => Some(value),
            None => self.parent.as_deref()?.lookup(name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn forty_two(_: &[Value]) -> Result<f64, String> {
        Ok(42.0)
    }

    #[test]
    fn global_frame_binds_primitives() {
        let env = Environment::global(vec![("answer", forty_two as PrimitiveFn)]);
        match env.lookup("answer") {
            Some(Value::Primitive { name, .. }) => assert_eq!(name, "answer"),
            other => panic!("expected a primitive binding, got {other:?}"),
        }
        assert_eq!(env.lookup("question"), None);
    }

    #[test]
    fn lookup_walks_the_parent_chain() {
        let global = Environment::global(vec![("answer", forty_two as PrimitiveFn)]);
        let child = Environment::child(&global, &["x".to_string()], vec![Value::Number(1.0)]);

        assert_eq!(child.lookup("x"), Some(&Value::Number(1.0)));
        assert!(child.lookup("answer").is_some());
        assert_eq!(child.lookup("y"), None);
    }

    #[test]
    fn inner_frames_shadow_outer_bindings() {
        let global = Environment::global(Vec::new());
        let outer = Environment::child(&global, &["x".to_string()], vec![Value::Number(1.0)]);
        let inner = Environment::child(&outer, &["x".to_string()], vec![Value::Number(2.0)]);

        assert_eq!(inner.lookup("x"), Some(&Value::Number(2.0)));
        assert_eq!(outer.lookup("x"), Some(&Value::Number(1.0)));
    }
}
