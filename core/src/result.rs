use crate::{Error, OptionExt};

/// Creates a successful [`Result`](crate::Result).
#[inline]
pub fn ok<T>(value: T) -> crate::Result<T> { Ok(value) }

/// Creates a failed [`Result`](crate::Result). A missing `error` is replaced by [`Error::NotOk`].
#[inline]
pub fn err<T>(error: impl Into<Option<Error>>) -> crate::Result<T> {
  Err(error.into().value_or(Error::NotOk))
}

/// Combinators on [`Result`] that run caller-supplied branches instead of requiring manual `match`es.
///
/// `_mut` methods hand out the success value by mutable reference so that changes stay in the result. The `must`
/// family is a last resort for call sites that have already established success: it panics on failure.
pub trait ResultExt<T, E>: Sized {
  /// Runs exactly one of `ok` or `err`.
  fn switch(&self, ok: impl FnOnce(&T), err: impl FnOnce(&E));
  /// Transforms the success value with `ok` or the error with `err`.
  fn switch_transform<U, F>(self, ok: impl FnOnce(T) -> U, err: impl FnOnce(E) -> F) -> Result<U, F>;
  /// Runs `ok` if successful and returns `None`, otherwise returns the error transformed by `err`.
  fn switch_report<F>(self, ok: impl FnOnce(T), err: impl FnOnce(E) -> F) -> Option<F>;

  /// Returns the success value, panicking with `message` on failure.
  fn must(self, message: &str) -> T;
  /// Returns a mutable reference to the success value, panicking with `message` on failure.
  fn must_mut(&mut self, message: &str) -> &mut T;
  /// Returns the success value transformed by `ok`, panicking with `message` on failure.
  fn must_transform<U>(self, message: &str, ok: impl FnOnce(T) -> U) -> U;
  /// Returns the success value after `ok` mutated it, panicking with `message` on failure.
  fn must_mut_value(self, message: &str, ok: impl FnOnce(&mut T)) -> T;

  /// Runs `ok` with the success value if successful, returning whether it ran.
  fn on_ok(&self, ok: impl FnOnce(&T)) -> bool;
  /// Runs `ok` with the success value if successful, and returns the error otherwise.
  fn on_ok_report(self, ok: impl FnOnce(T)) -> Option<E>;
  /// Runs `ok` with a mutable reference to the success value if successful, returning whether it ran.
  fn on_ok_mut(&mut self, ok: impl FnOnce(&mut T)) -> bool;
  /// Runs `ok` with a mutable reference to the success value if successful, returning its output.
  fn on_ok_mut_map<U>(&mut self, ok: impl FnOnce(&mut T) -> U) -> Option<U>;

  /// Returns the success value, or `default` on failure.
  fn value_or(self, default: T) -> T;
  /// Returns the success value transformed by `ok`, or `default` on failure.
  fn value_or_else(self, default: T, ok: impl FnOnce(T) -> T) -> T;
  /// Returns the success value after `ok` mutated it, or `default` on failure.
  fn value_or_else_mut(self, default: T, ok: impl FnOnce(&mut T)) -> T;
}

impl<T, E> ResultExt<T, E> for Result<T, E> {
  fn switch(&self, ok: impl FnOnce(&T), err: impl FnOnce(&E)) {
    match self {
      Ok(value) => ok(value),
      Err(error) => err(error),
    }
  }
  #[inline]
  fn switch_transform<U, F>(self, ok: impl FnOnce(T) -> U, err: impl FnOnce(E) -> F) -> Result<U, F> {
    self.map(ok).map_err(err)
  }
  fn switch_report<F>(self, ok: impl FnOnce(T), err: impl FnOnce(E) -> F) -> Option<F> {
    match self {
      Ok(value) => {
        ok(value);
        None
      }
      Err(error) => Some(err(error)),
    }
  }

  #[track_caller]
  fn must(self, message: &str) -> T {
    match self {
      Ok(value) => value,
      Err(_) => contract_violation(message),
    }
  }
  #[track_caller]
  fn must_mut(&mut self, message: &str) -> &mut T {
    match self {
      Ok(value) => value,
      Err(_) => contract_violation(message),
    }
  }
  #[track_caller]
  fn must_transform<U>(self, message: &str, ok: impl FnOnce(T) -> U) -> U {
    ok(self.must(message))
  }
  #[track_caller]
  fn must_mut_value(self, message: &str, ok: impl FnOnce(&mut T)) -> T {
    let mut value = self.must(message);
    ok(&mut value);
    value
  }

  #[inline]
  fn on_ok(&self, ok: impl FnOnce(&T)) -> bool {
    self.as_ref().ok().map(ok).is_some()
  }
  fn on_ok_report(self, ok: impl FnOnce(T)) -> Option<E> {
    self.switch_report(ok, |error| error)
  }
  #[inline]
  fn on_ok_mut(&mut self, ok: impl FnOnce(&mut T)) -> bool {
    self.on_ok_mut_map(ok).is_some()
  }
  #[inline]
  fn on_ok_mut_map<U>(&mut self, ok: impl FnOnce(&mut T) -> U) -> Option<U> {
    self.as_mut().ok().map(ok)
  }

  #[inline]
  fn value_or(self, default: T) -> T {
    self.ok().value_or(default)
  }
  #[inline]
  fn value_or_else(self, default: T, ok: impl FnOnce(T) -> T) -> T {
    self.ok().value_or_else(default, ok)
  }
  #[inline]
  fn value_or_else_mut(self, default: T, ok: impl FnOnce(&mut T)) -> T {
    self.ok().value_or_else_mut(default, ok)
  }
}

#[cold]
#[track_caller]
fn contract_violation(message: &str) -> ! {
  #[cfg(feature = "tracing")]
  tracing::error!(reason = message, "unwrapped a failed result");
  panic!("{}", message)
}


#[cfg(test)]
mod tests {
  use std::cell::Cell;

  use super::*;

  #[derive(Clone, Eq, PartialEq, Debug)]
  struct User {
    id: u32,
    name: String,
  }
  impl User {
    fn new(id: u32, name: &str) -> Self { Self { id, name: name.to_string() } }
  }

  fn fetched() -> crate::Result<User> { ok(User::new(1, "John Doe")) }
  fn failed() -> crate::Result<User> { err(Error::new("couldn't fetch user")) }

  #[test]
  fn ok_and_err_are_complementary() {
    assert!(fetched().is_ok());
    assert!(!fetched().is_err());
    assert!(failed().is_err());
    assert!(!failed().is_ok());
  }

  #[test]
  fn err_without_error_is_not_ok() {
    let result: crate::Result<User> = err(Option::<Error>::None);
    let error = result.on_ok_report(|_| panic!("result is failed"));
    assert!(error.as_ref().is_some_and(Error::is_not_ok));
    assert_eq!(error.map(|e| e.to_string()), Some("result is not ok, but it's ok".to_string()));
  }

  #[test]
  fn err_keeps_given_error() {
    let error = failed().err();
    assert_eq!(error.map(|e| e.to_string()), Some("couldn't fetch user".to_string()));
  }

  #[test]
  fn switch_runs_exactly_one_branch() {
    let ok_runs = Cell::new(0);
    let err_runs = Cell::new(0);
    fetched().switch(|u| {
      assert_eq!(u.id, 1);
      ok_runs.set(ok_runs.get() + 1)
    }, |_| err_runs.set(err_runs.get() + 1));
    assert_eq!((ok_runs.get(), err_runs.get()), (1, 0));
    failed().switch(|_| ok_runs.set(ok_runs.get() + 1), |e| {
      assert_eq!(e.to_string(), "couldn't fetch user");
      err_runs.set(err_runs.get() + 1)
    });
    assert_eq!((ok_runs.get(), err_runs.get()), (1, 1));
  }

  #[test]
  fn switch_transform() {
    let name = fetched().switch_transform(|u| u.name, |e| e.to_string());
    assert_eq!(name, Ok("John Doe".to_string()));
    let name = failed().switch_transform(|u| u.name, |e| format!("wrapped: {e}"));
    assert_eq!(name, Err("wrapped: couldn't fetch user".to_string()));
  }

  #[test]
  fn switch_report() {
    let seen = Cell::new(0);
    assert_eq!(fetched().switch_report(|u| seen.set(u.id), |e| e.to_string()), None);
    assert_eq!(seen.get(), 1);
    let reported = failed().switch_report(|_| seen.set(2), |e| e.to_string());
    assert_eq!(reported.as_deref(), Some("couldn't fetch user"));
    assert_eq!(seen.get(), 1);
  }

  #[test]
  fn must_returns_value() {
    assert_eq!(fetched().must("user must be fetched"), User::new(1, "John Doe"));
    assert_eq!(fetched().must_transform("user must be fetched", |u| u.id), 1);
    assert_eq!(fetched().must_mut_value("user must be fetched", |u| u.id = 7).id, 7);
  }

  #[test]
  fn must_mut_mutates_in_place() {
    let mut result = fetched();
    result.must_mut("user must be fetched").name = "Jane Doe".to_string();
    assert_eq!(result.value_or(User::new(0, "")).name, "Jane Doe");
  }

  #[test]
  #[should_panic(expected = "user must be fetched")]
  fn must_panics_with_message() {
    failed().must("user must be fetched");
  }

  #[test]
  #[should_panic(expected = "user must be fetched")]
  fn must_mut_panics_with_message() {
    let mut result = failed();
    result.must_mut("user must be fetched");
  }

  #[test]
  #[should_panic(expected = "user must be fetched")]
  fn must_transform_panics_without_running() {
    failed().must_transform("user must be fetched", |_| -> u32 { panic!("transform must not run") });
  }

  #[test]
  fn on_ok() {
    let seen = Cell::new(0);
    assert!(fetched().on_ok(|u| seen.set(u.id)));
    assert!(!failed().on_ok(|_| seen.set(2)));
    assert_eq!(seen.get(), 1);
  }

  #[test]
  fn on_ok_report() {
    let seen = Cell::new(0);
    assert!(fetched().on_ok_report(|u| seen.set(u.id)).is_none());
    assert_eq!(seen.get(), 1);
    let error = failed().on_ok_report(|_| seen.set(2));
    assert_eq!(error.map(|e| e.to_string()), Some("couldn't fetch user".to_string()));
    assert_eq!(seen.get(), 1);
  }

  #[test]
  fn on_ok_mut() {
    let mut result = fetched();
    assert!(result.on_ok_mut(|u| u.id += 1));
    assert!(result.on_ok(|u| assert_eq!(u.id, 2)));

    let mut result = failed();
    assert!(!result.on_ok_mut(|u| u.id += 1));
  }

  #[test]
  fn on_ok_mut_map() {
    let mut result = fetched();
    let id = result.on_ok_mut_map(|u| {
      u.id = 49;
      u.id
    });
    assert_eq!(id, Some(49));
    assert_eq!(result.map(|u| u.id).ok(), Some(49));
    assert_eq!(failed().on_ok_mut_map(|u| u.id), None);
  }

  #[test]
  fn value_or() {
    let fallback = User::new(0, "Nobody");
    assert_eq!(failed().value_or(fallback.clone()), fallback);
    assert_eq!(fetched().value_or(fallback).id, 1);
  }

  #[test]
  fn value_or_else() {
    let fallback = User::new(0, "Nobody");
    assert_eq!(failed().value_or_else(fallback.clone(), |u| User::new(u.id + 1, &u.name)), fallback);
    assert_eq!(fetched().value_or_else(fallback.clone(), |u| User::new(u.id + 1, &u.name)).id, 2);
    assert_eq!(failed().value_or_else_mut(fallback.clone(), |u| u.id = 9), fallback);
    assert_eq!(fetched().value_or_else_mut(fallback, |u| u.id = 9).id, 9);
  }

  #[test]
  fn converts_to_and_from_option() {
    assert_eq!(fetched().ok().map(|u| u.id), Some(1));
    assert_eq!(failed().ok(), None);
    assert_eq!(Some(User::new(3, "Neil")).ok_or_not_ok().value_or(User::new(0, "")).id, 3);
  }
}
