use crate::key::Key;
use std::fmt;
use std::ops::Deref;
use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum Error {
  #[error("{0} is not instantiable")]
  NotInstantiable(Key),
  #[error("{0} declares more than one injection constructor")]
  AmbiguousInjection(Key),
  #[error("{owner}.{field} is immutable and cannot be injected")]
  ImmutableInjectionTarget { owner: Key, field: &'static str },
  #[error("{0} not found")]
  DependencyNotFound(Chain),
  #[error("cyclic dependency: {0}")]
  CyclicDependency(Chain),
  #[error("unregistered component: {0}")]
  Unregistered(Key),
  #[error("type mismatch for: {0}")]
  TypeMismatch(Key),
}

impl Error {
  /// Keys involved in a graph-level failure, from the requesting key onwards.
  pub fn chain(&self) -> Option<&[Key]> {
    match self {
      Error::DependencyNotFound(chain) | Error::CyclicDependency(chain) => Some(&chain[..]),
      _ => None,
    }
  }
}

/// Ordered dependency path, rendered as `A -> B -> C`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chain(Vec<Key>);

impl Chain {
  pub(crate) fn new(keys: Vec<Key>) -> Self {
    Chain(keys)
  }
}

impl Deref for Chain {
  type Target = [Key];

  fn deref(&self) -> &[Key] {
    &self.0
  }
}

impl fmt::Display for Chain {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    for (i, key) in self.0.iter().enumerate() {
      if i > 0 {
        f.write_str(" -> ")?;
      }
      write!(f, "{}", key)?;
    }
    Ok(())
  }
}
