use std::cell::RefCell;
use std::collections::HashSet;
use std::marker::PhantomData;
use std::rc::Rc;
use std::str::FromStr;

use crate::api::capture::GenericBindable;
use crate::convert::{CaptureError, ConverterRegistry};
use crate::prelude::Collectable;

/// A field capture that takes a single value (arity 1).
pub struct Scalar<'a, T> {
    variable: Rc<RefCell<&'a mut T>>,
}

impl<'a, T> Scalar<'a, T> {
    /// Create a scalar capture.
    pub fn new(variable: &'a mut T) -> Self {
        Self {
            variable: Rc::new(RefCell::new(variable)),
        }
    }
}

impl<'a, T> GenericBindable<'a, T> for Scalar<'a, T>
where
    T: FromStr + 'static,
{
    fn matched(&mut self) {
        // Do nothing.
    }

    fn capture(&mut self, registry: &ConverterRegistry, token: &str) -> Result<(), CaptureError> {
        let value = registry.convert::<T>(token)?;
        **self.variable.borrow_mut() = value;
        Ok(())
    }
}

/// A field capture that takes no values (arity 0), a presence flag.
///
/// The target is cloned on every match so that re-binding the same inputs is
/// idempotent.
pub struct Switch<'a, T> {
    variable: Rc<RefCell<&'a mut T>>,
    target: T,
}

impl<'a, T> Switch<'a, T> {
    /// Create a switch capture.
    pub fn new(variable: &'a mut T, target: T) -> Self {
        Self {
            variable: Rc::new(RefCell::new(variable)),
            target,
        }
    }
}

impl<'a, T> GenericBindable<'a, T> for Switch<'a, T>
where
    T: Clone,
{
    fn matched(&mut self) {
        **self.variable.borrow_mut() = self.target.clone();
    }

    fn capture(&mut self, _registry: &ConverterRegistry, _token: &str) -> Result<(), CaptureError> {
        unreachable!("internal error - must not capture on a Switch");
    }
}

/// A field capture that maps down to [`Option`], taking a single value (arity 1).
pub struct Optional<'a, T> {
    variable: Rc<RefCell<&'a mut Option<T>>>,
}

impl<'a, T> Optional<'a, T> {
    /// Create an optional capture.
    pub fn new(variable: &'a mut Option<T>) -> Self {
        Self {
            variable: Rc::new(RefCell::new(variable)),
        }
    }
}

impl<'a, T> GenericBindable<'a, T> for Optional<'a, T>
where
    T: FromStr + 'static,
{
    fn matched(&mut self) {
        // Do nothing
    }

    fn capture(&mut self, registry: &ConverterRegistry, token: &str) -> Result<(), CaptureError> {
        let value = registry.convert::<T>(token)?;
        self.variable.borrow_mut().replace(value);
        Ok(())
    }
}

/// A field capture that takes multiple values (fixed arity > 1, or the
/// positional remainder).
///
/// The container is cleared on `matched()` so that re-binding the same inputs
/// reproduces the first bind instead of extending it.
pub struct Collection<'a, C, T>
where
    C: 'a + Collectable<T>,
{
    variable: Rc<RefCell<&'a mut C>>,
    _phantom: PhantomData<T>,
}

impl<'a, C, T> Collection<'a, C, T>
where
    C: 'a + Collectable<T>,
{
    /// Create a collection capture.
    pub fn new(variable: &'a mut C) -> Self {
        Self {
            variable: Rc::new(RefCell::new(variable)),
            _phantom: PhantomData,
        }
    }
}

impl<'a, C, T> GenericBindable<'a, T> for Collection<'a, C, T>
where
    T: FromStr + 'static,
    C: 'a + Collectable<T>,
{
    fn matched(&mut self) {
        (**self.variable.borrow_mut()).clear();
    }

    fn capture(&mut self, registry: &ConverterRegistry, token: &str) -> Result<(), CaptureError> {
        let value = registry.convert::<T>(token)?;
        (**self.variable.borrow_mut()).add(value);
        Ok(())
    }
}

/// A field capture for types without a built-in coercion; conversion goes
/// through the registry only (arity 1).
pub struct Custom<'a, T> {
    variable: Rc<RefCell<&'a mut T>>,
}

impl<'a, T> Custom<'a, T> {
    /// Create a registry-only capture.
    pub fn new(variable: &'a mut T) -> Self {
        Self {
            variable: Rc::new(RefCell::new(variable)),
        }
    }
}

impl<'a, T> GenericBindable<'a, T> for Custom<'a, T>
where
    T: 'static,
{
    fn matched(&mut self) {
        // Do nothing.
    }

    fn capture(&mut self, registry: &ConverterRegistry, token: &str) -> Result<(), CaptureError> {
        let value = registry.convert_registered::<T>(token)?;
        **self.variable.borrow_mut() = value;
        Ok(())
    }
}

impl<T> Collectable<T> for Vec<T> {
    fn add(&mut self, item: T) {
        self.push(item);
    }

    fn clear(&mut self) {
        Vec::clear(self);
    }
}

impl<T: Eq + std::hash::Hash> Collectable<T> for HashSet<T> {
    fn add(&mut self, item: T) {
        self.insert(item);
    }

    fn clear(&mut self) {
        HashSet::clear(self);
    }
}
