//! Typed parameter lists for initializers and injected methods.
//!
//! A parameter list is `()` or a tuple of `Ref<T>` handles. Its keys are known
//! statically, so a plan can report its dependencies without building anything,
//! and the resolved values are handed back in the same order.

use crate::error::Error;
use crate::helpers::BoxAny;
use crate::key::Key;
use crate::Ref;

/// A single injectable parameter.
pub trait Param: Sized + 'static {
    fn key() -> Key;

    fn from_boxed(value: BoxAny) -> Result<Self, Error>;
}

impl<T> Param for Ref<T>
where
    T: ?Sized + Send + Sync + 'static,
{
    #[inline]
    fn key() -> Key {
        Key::of::<T>()
    }

    fn from_boxed(value: BoxAny) -> Result<Self, Error> {
        value
            .downcast::<Ref<T>>()
            .map(|value| *value)
            .map_err(|_| Error::TypeMismatch(Self::key()))
    }
}

/// An ordered list of parameters.
pub trait Params: Sized + 'static {
    fn keys() -> Vec<Key>;

    fn from_arguments(args: &mut Arguments) -> Result<Self, Error>;
}

/// Resolved values for a parameter list, consumed front to back.
pub struct Arguments {
    values: std::vec::IntoIter<(Key, BoxAny)>,
}

impl Arguments {
    pub(crate) fn new(values: Vec<(Key, BoxAny)>) -> Self {
        Arguments {
            values: values.into_iter(),
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.len() == 0
    }

    pub fn next<P: Param>(&mut self) -> Result<P, Error> {
        match self.values.next() {
            Some((key, value)) if key == P::key() => P::from_boxed(value),
            _ => Err(Error::TypeMismatch(P::key())),
        }
    }
}

impl Params for () {
    fn keys() -> Vec<Key> {
        Vec::new()
    }

    fn from_arguments(_: &mut Arguments) -> Result<Self, Error> {
        Ok(())
    }
}

macro_rules! impl_params_tuple {
    ($($P:ident),+) => {
        impl<$($P: Param),+> Params for ($($P,)+) {
            fn keys() -> Vec<Key> {
                vec![$($P::key()),+]
            }

            fn from_arguments(args: &mut Arguments) -> Result<Self, Error> {
                Ok(($(args.next::<$P>()?,)+))
            }
        }
    };
}

impl_params_tuple!(A);
impl_params_tuple!(A, B);
impl_params_tuple!(A, B, C);
impl_params_tuple!(A, B, C, D);
impl_params_tuple!(A, B, C, D, E);
impl_params_tuple!(A, B, C, D, E, F);
impl_params_tuple!(A, B, C, D, E, F, G);
impl_params_tuple!(A, B, C, D, E, F, G, H);
