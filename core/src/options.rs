use std::{slice, vec};

/// Ordered sequence of optional values.
///
/// Combinators only visit present elements, in order, and skip absent ones. They come in two flavours: without suffix
/// the element is passed by shared reference, with a `_mut` suffix by mutable reference so that changes are visible to
/// later reads of the sequence. `_indexed` combinators also pass the position of the element in the sequence, absent
/// elements included.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize), serde(transparent))]
pub struct Options<T>(Vec<Option<T>>);

impl<T> Default for Options<T> {
  #[inline]
  fn default() -> Self { Self(Vec::new()) }
}

impl<T> Options<T> {
  #[inline]
  pub fn new() -> Self { Self::default() }
  #[inline]
  pub fn with_capacity(capacity: usize) -> Self { Self(Vec::with_capacity(capacity)) }
  /// Creates a sequence where every value is present.
  pub fn from_values(values: impl IntoIterator<Item=T>) -> Self {
    values.into_iter().map(Some).collect()
  }

  #[inline]
  pub fn len(&self) -> usize { self.0.len() }
  #[inline]
  pub fn is_empty(&self) -> bool { self.0.is_empty() }
  #[inline]
  pub fn as_slice(&self) -> &[Option<T>] { &self.0 }
  #[inline]
  pub fn iter(&self) -> slice::Iter<Option<T>> { self.0.iter() }
  #[inline]
  pub fn into_inner(self) -> Vec<Option<T>> { self.0 }

  /// Appends `value` as a present element.
  #[inline]
  pub fn push(&mut self, value: T) { self.0.push(Some(value)); }
  #[inline]
  pub fn push_option(&mut self, option: Option<T>) { self.0.push(option); }
  /// Appends `value` as a present element, returning the sequence.
  #[inline]
  pub fn append(mut self, value: T) -> Self {
    self.push(value);
    self
  }

  /// Iterates over the present elements along with their index, in order.
  pub fn somes(&self) -> impl DoubleEndedIterator<Item=(usize, &T)> + '_ {
    self.0.iter().enumerate().filter_map(|(index, option)| option.as_ref().map(|value| (index, value)))
  }
  /// Iterates mutably over the present elements along with their index, in order.
  pub fn somes_mut(&mut self) -> impl DoubleEndedIterator<Item=(usize, &mut T)> + '_ {
    self.0.iter_mut().enumerate().filter_map(|(index, option)| option.as_mut().map(|value| (index, value)))
  }
  /// Takes the present values, in order.
  pub fn into_values(self) -> Vec<T> {
    self.0.into_iter().flatten().collect()
  }
}

// Each

impl<T> Options<T> {
  #[inline]
  pub fn each(&self, mut f: impl FnMut(&T)) {
    self.each_indexed(|_, value| f(value))
  }
  #[inline]
  pub fn each_mut(&mut self, mut f: impl FnMut(&mut T)) {
    self.each_indexed_mut(|_, value| f(value))
  }
  pub fn each_indexed(&self, mut f: impl FnMut(usize, &T)) {
    for (index, value) in self.somes() {
      f(index, value);
    }
  }
  pub fn each_indexed_mut(&mut self, mut f: impl FnMut(usize, &mut T)) {
    for (index, value) in self.somes_mut() {
      f(index, value);
    }
  }
}

// Fold

impl<T> Options<T> {
  /// Accumulates the present elements from left to right.
  #[inline]
  pub fn fold_left<R>(&self, seed: R, mut f: impl FnMut(R, &T) -> R) -> R {
    self.fold_left_indexed(seed, |acc, _, value| f(acc, value))
  }
  #[inline]
  pub fn fold_left_mut<R>(&mut self, seed: R, mut f: impl FnMut(R, &mut T) -> R) -> R {
    self.fold_left_indexed_mut(seed, |acc, _, value| f(acc, value))
  }
  pub fn fold_left_indexed<R>(&self, seed: R, mut f: impl FnMut(R, usize, &T) -> R) -> R {
    self.somes().fold(seed, |acc, (index, value)| f(acc, index, value))
  }
  pub fn fold_left_indexed_mut<R>(&mut self, seed: R, mut f: impl FnMut(R, usize, &mut T) -> R) -> R {
    self.somes_mut().fold(seed, |acc, (index, value)| f(acc, index, value))
  }

  /// Accumulates the present elements from right to left.
  #[inline]
  pub fn fold_right<R>(&self, seed: R, mut f: impl FnMut(R, &T) -> R) -> R {
    self.somes().rev().fold(seed, |acc, (_, value)| f(acc, value))
  }
  #[inline]
  pub fn fold_right_mut<R>(&mut self, seed: R, mut f: impl FnMut(R, &mut T) -> R) -> R {
    self.somes_mut().rev().fold(seed, |acc, (_, value)| f(acc, value))
  }
  /// Accumulates the present elements from right to left.
  ///
  /// Unlike the other indexed combinators, the index counts from the right end: the last position of the sequence is
  /// 0. Absent elements still take up a position, so in `[Some(a), None, Some(b)]`, `b` is 0 and `a` is 2.
  pub fn fold_right_indexed<R>(&self, seed: R, mut f: impl FnMut(R, usize, &T) -> R) -> R {
    let last = self.len().saturating_sub(1);
    self.somes().rev().fold(seed, |acc, (index, value)| f(acc, last - index, value))
  }
  /// Mutable version of [`fold_right_indexed`](Self::fold_right_indexed), with the same right-based index.
  pub fn fold_right_indexed_mut<R>(&mut self, seed: R, mut f: impl FnMut(R, usize, &mut T) -> R) -> R {
    let last = self.len().saturating_sub(1);
    self.somes_mut().rev().fold(seed, |acc, (index, value)| f(acc, last - index, value))
  }
}

// Map

impl<T> Options<T> {
  /// Maps the present elements to a plain vector; absent elements are left out.
  #[inline]
  pub fn map<R>(&self, mut f: impl FnMut(&T) -> R) -> Vec<R> {
    self.map_indexed(|_, value| f(value))
  }
  pub fn map_indexed<R>(&self, mut f: impl FnMut(usize, &T) -> R) -> Vec<R> {
    self.fold_left_indexed(Vec::with_capacity(self.len()), |mut mapped, index, value| {
      mapped.push(f(index, value));
      mapped
    })
  }
}

// Filter

impl<T: Clone> Options<T> {
  /// Keeps the present elements for which `predicate` holds, as plain values.
  #[inline]
  pub fn filter_values(&self, mut predicate: impl FnMut(&T) -> bool) -> Vec<T> {
    self.filter_values_indexed(|_, value| predicate(value))
  }
  pub fn filter_values_indexed(&self, mut predicate: impl FnMut(usize, &T) -> bool) -> Vec<T> {
    self.fold_left_indexed(Vec::new(), |mut kept, index, value| {
      if predicate(index, value) {
        kept.push(value.clone());
      }
      kept
    })
  }
  /// Like [`filter_values`](Self::filter_values), but `predicate` may mutate each element before judging it.
  #[inline]
  pub fn filter_values_mut(&mut self, mut predicate: impl FnMut(&mut T) -> bool) -> Vec<T> {
    self.filter_values_indexed_mut(|_, value| predicate(value))
  }
  pub fn filter_values_indexed_mut(&mut self, mut predicate: impl FnMut(usize, &mut T) -> bool) -> Vec<T> {
    self.fold_left_indexed_mut(Vec::new(), |mut kept, index, value| {
      if predicate(index, value) {
        kept.push(value.clone());
      }
      kept
    })
  }

  /// Keeps the present elements for which `predicate` holds, as a new sequence of present elements.
  #[inline]
  pub fn filter_options(&self, predicate: impl FnMut(&T) -> bool) -> Options<T> {
    Options::from_values(self.filter_values(predicate))
  }
  #[inline]
  pub fn filter_options_indexed(&self, predicate: impl FnMut(usize, &T) -> bool) -> Options<T> {
    Options::from_values(self.filter_values_indexed(predicate))
  }
  #[inline]
  pub fn filter_options_mut(&mut self, predicate: impl FnMut(&mut T) -> bool) -> Options<T> {
    Options::from_values(self.filter_values_mut(predicate))
  }
  #[inline]
  pub fn filter_options_indexed_mut(&mut self, predicate: impl FnMut(usize, &mut T) -> bool) -> Options<T> {
    Options::from_values(self.filter_values_indexed_mut(predicate))
  }
}

// Conversions

impl<T> From<Vec<Option<T>>> for Options<T> {
  #[inline]
  fn from(options: Vec<Option<T>>) -> Self { Self(options) }
}
impl<T> From<Options<T>> for Vec<Option<T>> {
  #[inline]
  fn from(options: Options<T>) -> Self { options.0 }
}
impl<T> FromIterator<Option<T>> for Options<T> {
  #[inline]
  fn from_iter<I: IntoIterator<Item=Option<T>>>(iter: I) -> Self { Self(Vec::from_iter(iter)) }
}
impl<T> Extend<Option<T>> for Options<T> {
  #[inline]
  fn extend<I: IntoIterator<Item=Option<T>>>(&mut self, iter: I) { self.0.extend(iter) }
}
impl<T> IntoIterator for Options<T> {
  type Item = Option<T>;
  type IntoIter = vec::IntoIter<Option<T>>;
  #[inline]
  fn into_iter(self) -> Self::IntoIter { self.0.into_iter() }
}
impl<'a, T> IntoIterator for &'a Options<T> {
  type Item = &'a Option<T>;
  type IntoIter = slice::Iter<'a, Option<T>>;
  #[inline]
  fn into_iter(self) -> Self::IntoIter { self.0.iter() }
}
