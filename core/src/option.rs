use crate::Error;

/// Combinators on [`Option`] that run caller-supplied branches instead of requiring manual presence checks.
///
/// Methods without a suffix hand out the contained value by shared reference, `_mut` methods by mutable reference so
/// that changes stay in the option. Presence predicates, `or`, `or_else`, `xor`, `ok_or` and `ok_or_else` are the
/// inherent ones of [`Option`].
pub trait OptionExt<T>: Sized {
  /// Runs `some` with the contained value if present, returning whether it ran.
  fn if_some(&self, some: impl FnOnce(&T)) -> bool;
  /// Runs `some` with a mutable reference to the contained value if present, returning whether it ran.
  fn if_some_mut(&mut self, some: impl FnOnce(&mut T)) -> bool;
  /// Runs `some` with a mutable reference to the contained value if present, returning its output.
  fn if_some_mut_map<U>(&mut self, some: impl FnOnce(&mut T) -> U) -> Option<U>;

  /// Runs exactly one of `some` or `none`, returning `true` if `some` ran.
  fn switch(&self, some: impl FnOnce(&T), none: impl FnOnce()) -> bool;
  /// Like [`switch`](Self::switch), but `some` may mutate the contained value.
  fn switch_mut(&mut self, some: impl FnOnce(&mut T), none: impl FnOnce()) -> bool;
  /// Runs exactly one of `some` or `none`, returning a reference to the contained value, or `None` if absent.
  fn switch_ref(&self, some: impl FnOnce(&T), none: impl FnOnce()) -> Option<&T>;
  /// Like [`switch_ref`](Self::switch_ref), but `some` may mutate the contained value.
  fn switch_ref_mut(&mut self, some: impl FnOnce(&mut T), none: impl FnOnce()) -> Option<&mut T>;
  /// Unwraps by transforming the contained value with `some`, or producing one with `none` if absent.
  fn switch_value<U>(self, some: impl FnOnce(T) -> U, none: impl FnOnce() -> U) -> U;
  /// Unwraps after letting `some` mutate the contained value, or produces one with `none` if absent.
  fn switch_mut_value(self, some: impl FnOnce(&mut T), none: impl FnOnce() -> T) -> T;

  /// Returns the contained value, or `default` if absent.
  fn value_or(self, default: T) -> T;
  /// Returns the contained value transformed by `some`, or `default` if absent.
  fn value_or_else(self, default: T, some: impl FnOnce(T) -> T) -> T;
  /// Returns the contained value after `some` mutated it, or `default` if absent.
  fn value_or_else_mut(self, default: T, some: impl FnOnce(&mut T)) -> T;

  /// Promotes absence to [`Error::NotOk`].
  fn ok_or_not_ok(self) -> crate::Result<T>;

  /// Threads the option through `steps` in order.
  ///
  /// Stops at the first step that returns `None`; later steps never run, nor does any step run if `self` is `None`.
  /// With no steps at all, `self` is returned unchanged rather than `None`.
  fn and_then_all<F>(self, steps: impl IntoIterator<Item=F>) -> Option<T> where
    F: FnOnce(T) -> Option<T>;
}

impl<T> OptionExt<T> for Option<T> {
  #[inline]
  fn if_some(&self, some: impl FnOnce(&T)) -> bool {
    self.switch(some, || {})
  }
  #[inline]
  fn if_some_mut(&mut self, some: impl FnOnce(&mut T)) -> bool {
    self.switch_mut(some, || {})
  }
  #[inline]
  fn if_some_mut_map<U>(&mut self, some: impl FnOnce(&mut T) -> U) -> Option<U> {
    self.as_mut().map(some)
  }

  #[inline]
  fn switch(&self, some: impl FnOnce(&T), none: impl FnOnce()) -> bool {
    self.switch_ref(some, none).is_some()
  }
  #[inline]
  fn switch_mut(&mut self, some: impl FnOnce(&mut T), none: impl FnOnce()) -> bool {
    self.switch_ref_mut(some, none).is_some()
  }
  fn switch_ref(&self, some: impl FnOnce(&T), none: impl FnOnce()) -> Option<&T> {
    match self {
      Some(value) => {
        some(value);
        Some(value)
      }
      None => {
        none();
        None
      }
    }
  }
  fn switch_ref_mut(&mut self, some: impl FnOnce(&mut T), none: impl FnOnce()) -> Option<&mut T> {
    match self {
      Some(value) => {
        some(&mut *value);
        Some(value)
      }
      None => {
        none();
        None
      }
    }
  }
  #[inline]
  fn switch_value<U>(self, some: impl FnOnce(T) -> U, none: impl FnOnce() -> U) -> U {
    match self {
      Some(value) => some(value),
      None => none(),
    }
  }
  #[inline]
  fn switch_mut_value(self, some: impl FnOnce(&mut T), none: impl FnOnce() -> T) -> T {
    self.switch_value(|mut value| {
      some(&mut value);
      value
    }, none)
  }

  #[inline]
  fn value_or(self, default: T) -> T {
    self.switch_value(|value| value, || default)
  }
  #[inline]
  fn value_or_else(self, default: T, some: impl FnOnce(T) -> T) -> T {
    self.switch_value(some, || default)
  }
  #[inline]
  fn value_or_else_mut(self, default: T, some: impl FnOnce(&mut T)) -> T {
    self.switch_mut_value(some, || default)
  }

  #[inline]
  fn ok_or_not_ok(self) -> crate::Result<T> {
    self.ok_or(Error::NotOk)
  }

  fn and_then_all<F>(self, steps: impl IntoIterator<Item=F>) -> Option<T> where
    F: FnOnce(T) -> Option<T>
  {
    let mut current = self;
    for step in steps {
      match current {
        Some(value) => current = step(value),
        None => break,
      }
    }
    current
  }
}

/// Returns `second` if both options are present, `None` otherwise. The value of `first` is discarded.
#[inline]
pub fn and<F, S>(first: Option<F>, second: Option<S>) -> Option<S> {
  match (first, second) {
    (Some(_), second @ Some(_)) => second,
    _ => None,
  }
}
