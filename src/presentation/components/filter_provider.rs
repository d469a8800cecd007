use super::FilterCoordinator;
use crate::domain::errors::FilterError;
use std::cell::RefCell;
use std::rc::Rc;

thread_local! {
    static ACTIVE: RefCell<Vec<Rc<RefCell<FilterCoordinator>>>> = const { RefCell::new(Vec::new()) };
}

/// Makes one coordinator reachable through [`use_incident_filters`] for the
/// duration of [`FilterProvider::scope`]. Scopes nest; the innermost wins.
pub struct FilterProvider {
    coordinator: Rc<RefCell<FilterCoordinator>>,
}

struct ScopeGuard;

impl Drop for ScopeGuard {
    fn drop(&mut self) {
        ACTIVE.with(|stack| {
            stack.borrow_mut().pop();
        });
    }
}

impl FilterProvider {
    pub fn new(coordinator: FilterCoordinator) -> Self {
        Self {
            coordinator: Rc::new(RefCell::new(coordinator)),
        }
    }

    pub fn coordinator(&self) -> Rc<RefCell<FilterCoordinator>> {
        Rc::clone(&self.coordinator)
    }

    pub fn scope<R>(&self, f: impl FnOnce() -> R) -> R {
        ACTIVE.with(|stack| stack.borrow_mut().push(Rc::clone(&self.coordinator)));
        let _guard = ScopeGuard;
        f()
    }

    pub fn into_inner(self) -> Option<FilterCoordinator> {
        Rc::try_unwrap(self.coordinator)
            .ok()
            .map(RefCell::into_inner)
    }
}

/// Run `f` against the coordinator of the innermost enclosing provider.
pub fn use_incident_filters<R>(
    f: impl FnOnce(&mut FilterCoordinator) -> R,
) -> Result<R, FilterError> {
    let coordinator = ACTIVE
        .with(|stack| stack.borrow().last().cloned())
        .ok_or(FilterError::OutsideProvider)?;
    let mut coordinator = coordinator
        .try_borrow_mut()
        .map_err(|_| FilterError::ReentrantAccess)?;
    Ok(f(&mut coordinator))
}
