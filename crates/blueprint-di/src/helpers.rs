use std::fmt;
use std::any::Any;

pub type BoxAny = Box<dyn Any + Send + Sync>;

/// A value tagged with the member name it was declared under.
pub(crate) struct Named<T> {
  pub name: &'static str,
  pub value: T,
}

impl<T> Named<T> {
  pub fn new(name: &'static str, value: T) -> Self {
    Named { name, value }
  }

  pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Named<U> {
    Named {
      name: self.name,
      value: f(self.value)
    }
  }
}

impl<T> fmt::Debug for Named<T> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Named")
      .field("name", &self.name)
      .finish()
  }
}
