//! Lexically scoped variable bindings.

use crate::object::Object;

use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

/// An execution environment used when evaluating Monkey source code.
///
/// An `Environment` is a shared handle: clones refer to the same scope, which
/// is how a `Function` keeps the scope it was defined in alive. Handles are
/// not `Send`, so each thread evaluating Monkey code needs its own root.
///
/// A function bound in the scope it closes over forms a reference cycle, so
/// that scope is never freed. This happens for every `let f = fn ...` and
/// named function, including those made by a `let` inside a function body,
/// which leaks one call scope per call. Closures which are only returned or
/// passed along do not form cycles.
#[derive(Clone, Default)]
pub struct Environment(Rc<RefCell<Scope>>);

#[derive(Default)]
struct Scope {
    store: HashMap<String, Object>,
    outer: Option<Environment>,
}

impl Environment {
    /// Creates a new, empty root `Environment`.
    pub fn new() -> Self {
        Environment::default()
    }

    /// Creates an enclosed `Environment` for use within a function call.
    pub fn new_enclosed(outer: &Environment) -> Self {
        Environment(Rc::new(RefCell::new(Scope {
            store: HashMap::new(),
            outer: Some(outer.clone()),
        })))
    }

    /// Retrieves the object associated with an identifier name, or returns
    /// `None` if no object is associated with `name`.
    pub fn get(&self, name: &str) -> Option<Object> {
        let scope = self.0.borrow();

        match (scope.store.get(name), &scope.outer) {
            // We found a binding in this environment; no need to consult the
            // outer environment.
            (Some(obj), _) => Some(obj.clone()),
            // We did not find a binding; try the outer environment.
            (None, Some(outer)) => outer.get(name),
            // We found no binding and there is no outer environment.
            (None, None) => None,
        }
    }

    /// Binds an object in this scope with the identifier `name`, shadowing
    /// any binding of the same name in an outer scope.
    pub fn set(&self, name: String, obj: Object) {
        self.0.borrow_mut().store.insert(name, obj);
    }

    /// Returns the names bound directly in this scope, sorted.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.0.borrow().store.keys().cloned().collect();
        names.sort();
        names
    }
}

impl fmt::Debug for Environment {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Environment")
            .field("names", &self.names())
            .field("enclosed", &self.0.borrow().outer.is_some())
            .finish()
    }
}
