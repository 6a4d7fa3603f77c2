//! # Router
//!
//! A back-stack of visited routes. The top of the stack is the route the
//! app is currently showing; the bottom is the entry route and is never
//! popped.

use log::debug;

use super::route::{Route, RouteError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Router {
    stack: Vec<Route>,
}

impl Default for Router {
    fn default() -> Self {
        Self::new()
    }
}

impl Router {
    /// A router positioned at the landing route.
    pub fn new() -> Self {
        Self::with_root(Route::Landing)
    }

    /// A router whose entry route is `root`.
    pub fn with_root(root: Route) -> Self {
        Self { stack: vec![root] }
    }

    pub fn current(&self) -> &Route {
        // The stack is created non-empty and `back()` never pops the root.
        &self.stack[self.stack.len() - 1]
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Visited routes, entry route first.
    pub fn history(&self) -> &[Route] {
        &self.stack
    }

    pub fn can_go_back(&self) -> bool {
        self.stack.len() > 1
    }

    pub fn navigate(&mut self, route: Route) {
        debug!("navigate: {} -> {}", self.current(), route);
        self.stack.push(route);
    }

    /// Parse `path` and push it. The stack is untouched on error.
    pub fn navigate_path(&mut self, path: &str) -> Result<(), RouteError> {
        let route = Route::from_path(path)?;
        self.navigate(route);
        Ok(())
    }

    /// Pop the current route. Returns `false`, leaving the stack alone, when
    /// only the entry route is left.
    pub fn back(&mut self) -> bool {
        if !self.can_go_back() {
            debug!("back: already at entry route {}", self.current());
            return false;
        }
        let left = self.stack.pop();
        debug!("back: left {:?}, now at {}", left, self.current());
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_at_landing() {
        let router = Router::new();
        assert_eq!(router.current(), &Route::Landing);
        assert_eq!(router.depth(), 1);
    }

    #[test]
    fn test_back_on_root_is_noop() {
        let mut router = Router::new();
        assert!(!router.back());
        assert_eq!(router.current(), &Route::Landing);
        assert_eq!(router.depth(), 1);
    }

    #[test]
    fn test_back_twice_from_electives_returns_to_majors() {
        let mut router = Router::with_root(Route::Majors);
        router.navigate(Route::careers("Computer Science"));
        router.navigate(Route::electives("Software Engineer"));
        assert!(router.back());
        assert!(router.back());
        assert_eq!(router.current(), &Route::Majors);
    }

    #[test]
    fn test_navigate_path_decodes_parameter() {
        let mut router = Router::new();
        router.navigate_path("career/Computer%20Science").unwrap();
        assert_eq!(router.current(), &Route::careers("Computer Science"));
    }

    #[test]
    fn test_navigate_path_error_leaves_stack() {
        let mut router = Router::new();
        assert!(router.navigate_path("nowhere").is_err());
        assert_eq!(router.history(), &[Route::Landing]);
    }
}
