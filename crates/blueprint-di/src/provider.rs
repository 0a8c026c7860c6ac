use std::fmt;
use std::marker::PhantomData;
use crate::descriptor::Injectable;
use crate::error::Error;
use crate::helpers::BoxAny;
use crate::key::Key;
use crate::plan::Plan;
use crate::resolver::Resolver;
use crate::Ref;

/// Conversion of a freshly built implementation into a handle of contract `T`.
///
/// Every type implements it for itself. Trait contracts are declared with
/// [`implements!`](crate::implements).
pub trait Implements<T: ?Sized>: Sized {
  fn into_ref(self) -> Ref<T>;
}

impl<T> Implements<T> for T
  where T: Send + Sync + 'static
{
  fn into_ref(self) -> Ref<T> {
    Ref::new(self)
  }
}

/// Declares which trait contracts an implementation type can be bound to.
///
/// ```
/// use blueprint_di::implements;
///
/// pub trait Clock: Send + Sync {}
/// pub trait Source: Send + Sync {}
///
/// pub struct SystemClock;
/// impl Clock for SystemClock {}
/// impl Source for SystemClock {}
///
/// implements!(SystemClock: dyn Clock, dyn Source);
/// ```
#[macro_export]
macro_rules! implements {
  ($ty:ty: $($contract:ty),+ $(,)?) => {
    $(
      impl $crate::Implements<$contract> for $ty {
        fn into_ref(self) -> $crate::Ref<$contract> {
          $crate::Ref::new(self)
        }
      }
    )+
  };
}

/// Strategy the resolver dispatches on to produce an instance for a key.
pub(crate) enum Provider {
  Constant(Box<dyn ProvideConstant>),
  Constructing(Box<dyn ProvideConstructed>),
}

impl Provider {
  pub(crate) fn constant<T>(value: Ref<T>) -> Self
    where T: ?Sized + Send + Sync + 'static
  {
    Provider::Constant(Box::new(StaticProvider(value)))
  }

  pub(crate) fn constructing<T, I>(plan: Plan<I>) -> Self
    where T: ?Sized + Send + Sync + 'static,
          I: Injectable + Implements<T>
  {
    Provider::Constructing(Box::new(PlanProvider::<T, I> {
      plan,
      _contract: PhantomData,
    }))
  }

  pub(crate) fn dependencies(&self) -> &[Key] {
    match self {
      Provider::Constant(_) => &[],
      Provider::Constructing(provider) => provider.dependencies(),
    }
  }
}

impl fmt::Debug for Provider {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Provider::Constant(_) => f.write_str("Constant"),
      Provider::Constructing(provider) => f.debug_tuple("Constructing")
        .field(&provider.implementation())
        .finish(),
    }
  }
}

pub(crate) trait ProvideConstant: Send + Sync + 'static {
  fn provide(&self) -> BoxAny;
}

pub(crate) trait ProvideConstructed: Send + Sync + 'static {
  fn implementation(&self) -> Key;
  fn dependencies(&self) -> &[Key];
  fn provide(&self, resolver: &Resolver) -> Result<BoxAny, Error>;
}

struct StaticProvider<T: ?Sized>(Ref<T>);

impl<T> ProvideConstant for StaticProvider<T>
  where T: ?Sized + Send + Sync + 'static
{
  fn provide(&self) -> BoxAny {
    Box::new(self.0.clone())
  }
}

struct PlanProvider<T: ?Sized, I> {
  plan: Plan<I>,
  _contract: PhantomData<fn() -> Ref<T>>,
}

impl<T, I> ProvideConstructed for PlanProvider<T, I>
  where T: ?Sized + Send + Sync + 'static,
        I: Injectable + Implements<T>
{
  fn implementation(&self) -> Key {
    self.plan.implementation()
  }

  fn dependencies(&self) -> &[Key] {
    self.plan.dependencies()
  }

  fn provide(&self, resolver: &Resolver) -> Result<BoxAny, Error> {
    tracing::trace!("constructing {}", self.plan.implementation());
    let instance = self.plan.construct(resolver)?;
    Ok(Box::new(instance.into_ref()))
  }
}
