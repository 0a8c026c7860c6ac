//! Declarative description of an implementation type.
//!
//! Instead of discovering constructors, fields and methods at runtime, a type
//! implements [`Injectable`] and lists them on a [`TypeDescriptor`]. The
//! description is turned into a [`Plan`](crate::Plan) when the type is bound.

use crate::error::Error;
use crate::helpers::{BoxAny, Named};
use crate::key::Key;
use crate::params::{Arguments, Param, Params};
use crate::Ref;

/// A concrete type the container knows how to describe.
///
/// ```
/// use blueprint_di::{Injectable, Ref, TypeDescriptor};
///
/// pub trait Clock: Send + Sync {}
///
/// pub struct Scheduler {
///     clock: Ref<dyn Clock>,
///     started: bool,
/// }
///
/// impl Injectable for Scheduler {
///     fn describe(ty: &mut TypeDescriptor<Self>) {
///         ty.inject_constructor(|(clock,): (Ref<dyn Clock>,)| Scheduler { clock, started: false })
///             .inject_method("start", |this: &mut Self, ()| this.started = true);
///     }
/// }
/// ```
pub trait Injectable: Sized + Send + Sync + 'static {
    fn describe(ty: &mut TypeDescriptor<Self>);
}

pub(crate) type Build<I> = Box<dyn Fn(&mut Arguments) -> Result<I, Error> + Send + Sync>;
pub(crate) type Assign<I> = Box<dyn Fn(&mut I, BoxAny) -> Result<(), Error> + Send + Sync>;
pub(crate) type Invoke<I> = Box<dyn Fn(&mut I, &mut Arguments) -> Result<(), Error> + Send + Sync>;

pub(crate) struct Constructor<I> {
    pub inject: bool,
    pub params: Vec<Key>,
    pub build: Build<I>,
}

pub(crate) struct Field<I> {
    pub key: Key,
    /// `None` for a field declared immutable.
    pub assign: Option<Assign<I>>,
}

/// Name and ordered parameter keys of a method; overrides share a signature.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Signature {
    name: &'static str,
    params: Vec<Key>,
}

impl Signature {
    pub(crate) fn new(name: &'static str, params: Vec<Key>) -> Self {
        Signature { name, params }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn params(&self) -> &[Key] {
        &self.params
    }
}

pub(crate) struct Method<I> {
    pub signature: Signature,
    pub inject: bool,
    pub invoke: Invoke<I>,
}

/// Members declared by one type of the ancestor list.
pub(crate) struct Level<I> {
    pub owner: Key,
    pub fields: Vec<Named<Field<I>>>,
    pub methods: Vec<Method<I>>,
}

impl<I: 'static> Level<I> {
    fn new(owner: Key) -> Self {
        Level {
            owner,
            fields: Vec::new(),
            methods: Vec::new(),
        }
    }

    /// Re-targets every member onto a type embedding `I`.
    fn project<D: 'static>(self, project: fn(&mut D) -> &mut I) -> Level<D> {
        let fields = self
            .fields
            .into_iter()
            .map(|field| {
                field.map(|field| Field {
                    key: field.key,
                    assign: field.assign.map(|assign| -> Assign<D> {
                        Box::new(move |this: &mut D, value: BoxAny| assign(project(this), value))
                    }),
                })
            })
            .collect();
        let methods = self
            .methods
            .into_iter()
            .map(|method| {
                let invoke = method.invoke;
                Method {
                    signature: method.signature,
                    inject: method.inject,
                    invoke: Box::new(move |this: &mut D, args: &mut Arguments| -> Result<(), Error> {
                        invoke(project(this), args)
                    }),
                }
            })
            .collect();
        Level {
            owner: self.owner,
            fields,
            methods,
        }
    }
}

/// Builder an [`Injectable`] type fills in to describe itself.
pub struct TypeDescriptor<I> {
    pub(crate) is_abstract: bool,
    pub(crate) constructors: Vec<Constructor<I>>,
    /// The type itself first, then its ancestors in walk order.
    pub(crate) levels: Vec<Level<I>>,
}

impl<I: Injectable> TypeDescriptor<I> {
    pub(crate) fn of() -> Self {
        let mut ty = TypeDescriptor {
            is_abstract: false,
            constructors: Vec::new(),
            levels: vec![Level::new(Key::of::<I>())],
        };
        I::describe(&mut ty);
        ty
    }

    /// Marks the type as abstract: usable as an ancestor, never bound directly.
    pub fn abstract_type(&mut self) -> &mut Self {
        self.is_abstract = true;
        self
    }

    pub fn constructor<P, F>(&mut self, build: F) -> &mut Self
    where
        P: Params,
        F: Fn(P) -> I + Send + Sync + 'static,
    {
        self.push_constructor(false, build)
    }

    pub fn inject_constructor<P, F>(&mut self, build: F) -> &mut Self
    where
        P: Params,
        F: Fn(P) -> I + Send + Sync + 'static,
    {
        self.push_constructor(true, build)
    }

    pub fn default_constructor(&mut self) -> &mut Self
    where
        I: Default,
    {
        self.constructor(|()| I::default())
    }

    fn push_constructor<P, F>(&mut self, inject: bool, build: F) -> &mut Self
    where
        P: Params,
        F: Fn(P) -> I + Send + Sync + 'static,
    {
        self.constructors.push(Constructor {
            inject,
            params: P::keys(),
            build: Box::new(move |args: &mut Arguments| -> Result<I, Error> {
                Ok(build(P::from_arguments(args)?))
            }),
        });
        self
    }

    pub fn inject_field<D, F>(&mut self, name: &'static str, assign: F) -> &mut Self
    where
        D: ?Sized + Send + Sync + 'static,
        F: Fn(&mut I, Ref<D>) + Send + Sync + 'static,
    {
        let assign: Assign<I> = Box::new(move |this: &mut I, value: BoxAny| -> Result<(), Error> {
            assign(this, Ref::<D>::from_boxed(value)?);
            Ok(())
        });
        self.own_level().fields.push(Named::new(
            name,
            Field {
                key: Key::of::<D>(),
                assign: Some(assign),
            },
        ));
        self
    }

    /// Declares an inject-marked field that can only be set at construction.
    /// Binding a type with such a field fails.
    pub fn inject_immutable_field<D>(&mut self, name: &'static str) -> &mut Self
    where
        D: ?Sized + Send + Sync + 'static,
    {
        self.own_level().fields.push(Named::new(
            name,
            Field {
                key: Key::of::<D>(),
                assign: None,
            },
        ));
        self
    }

    pub fn inject_method<P, F>(&mut self, name: &'static str, invoke: F) -> &mut Self
    where
        P: Params,
        F: Fn(&mut I, P) + Send + Sync + 'static,
    {
        self.push_method(name, true, invoke)
    }

    /// A method without the inject marker. It only takes part in injection when
    /// it overrides an inject-marked ancestor method of the same signature.
    pub fn method<P, F>(&mut self, name: &'static str, invoke: F) -> &mut Self
    where
        P: Params,
        F: Fn(&mut I, P) + Send + Sync + 'static,
    {
        self.push_method(name, false, invoke)
    }

    fn push_method<P, F>(&mut self, name: &'static str, inject: bool, invoke: F) -> &mut Self
    where
        P: Params,
        F: Fn(&mut I, P) + Send + Sync + 'static,
    {
        self.own_level().methods.push(Method {
            signature: Signature::new(name, P::keys()),
            inject,
            invoke: Box::new(move |this: &mut I, args: &mut Arguments| -> Result<(), Error> {
                invoke(this, P::from_arguments(args)?);
                Ok(())
            }),
        });
        self
    }

    /// Declares `B` as an ancestor embedded in `I` and reached through `project`.
    pub fn extends<B: Injectable>(&mut self, project: fn(&mut I) -> &mut B) -> &mut Self {
        let ancestor = TypeDescriptor::<B>::of();
        self.levels
            .extend(ancestor.levels.into_iter().map(|level| level.project(project)));
        self
    }

    fn own_level(&mut self) -> &mut Level<I> {
        &mut self.levels[0]
    }
}
