mod key;
pub use key::Key;
mod error;
pub use error::{Chain, Error};
mod params;
pub use params::{Arguments, Param, Params};
mod descriptor;
pub use descriptor::{Injectable, Signature, TypeDescriptor};
mod plan;
pub use plan::Plan;
mod provider;
pub use provider::Implements;
mod resolver;
pub use resolver::{Resolver, ResolverBuilder};
mod graph;
mod helpers;

pub type Ref<T> = std::sync::Arc<T>;

/// A validated set of bindings, ready to build object graphs.
///
/// ```
/// use blueprint_di::{implements, Container, Injectable, Ref, TypeDescriptor};
///
/// pub trait Dependency: Send + Sync {}
/// impl Dependency for String {}
///
/// pub trait Component: Send + Sync {
///     fn dependency(&self) -> &Ref<dyn Dependency>;
/// }
///
/// struct InjectionConstructorComponent {
///     dependency: Ref<dyn Dependency>,
/// }
///
/// impl Component for InjectionConstructorComponent {
///     fn dependency(&self) -> &Ref<dyn Dependency> {
///         &self.dependency
///     }
/// }
///
/// impl Injectable for InjectionConstructorComponent {
///     fn describe(ty: &mut TypeDescriptor<Self>) {
///         ty.inject_constructor(|(dependency,): (Ref<dyn Dependency>,)| {
///             InjectionConstructorComponent { dependency }
///         });
///     }
/// }
///
/// implements!(InjectionConstructorComponent: dyn Component);
///
/// let dependency: Ref<dyn Dependency> = Ref::new(String::from("x"));
/// let container = Container::new(|registry| {
///     registry
///         .bind_instance::<dyn Dependency>(dependency.clone())
///         .bind_type::<dyn Component, InjectionConstructorComponent>()?;
///     Ok(())
/// })
/// .unwrap();
///
/// let component = container.get::<dyn Component>().unwrap();
/// assert!(Ref::ptr_eq(component.dependency(), &dependency));
/// ```
#[derive(Debug)]
pub struct Container {
    registry: Resolver,
}

impl Container {
    pub fn new<F>(config: F) -> Result<Self, Error>
    where
        F: FnOnce(&mut ResolverBuilder) -> Result<(), Error>,
    {
        let mut builder = ResolverBuilder::new();

        config(&mut builder)?;

        Ok(Self {
            registry: builder.finalize()?,
        })
    }

    pub fn build() -> ContainerBuilder {
        ContainerBuilder {
            resolve_builder: ResolverBuilder::new(),
        }
    }

    pub fn get<T>(&self) -> Option<Ref<T>>
    where
        T: ?Sized + Send + Sync + 'static,
    {
        self.registry.get::<T>()
    }

    pub fn resolve<T>(&self) -> Result<Ref<T>, Error>
    where
        T: ?Sized + Send + Sync + 'static,
    {
        self.registry.resolve::<T>()
    }

    pub fn resolver(&self) -> &Resolver {
        &self.registry
    }
}

#[derive(Debug)]
pub struct ContainerBuilder {
    resolve_builder: ResolverBuilder,
}

impl ContainerBuilder {
    pub fn bind_instance<T>(&mut self, value: Ref<T>) -> &mut Self
    where
        T: ?Sized + Send + Sync + 'static,
    {
        self.resolve_builder.bind_instance(value);
        self
    }

    pub fn bind_type<T, I>(&mut self) -> Result<&mut Self, Error>
    where
        T: ?Sized + Send + Sync + 'static,
        I: Injectable + Implements<T>,
    {
        self.resolve_builder.bind_type::<T, I>()?;
        Ok(self)
    }

    pub fn finalize(self) -> Result<Container, Error> {
        Ok(Container {
            registry: self.resolve_builder.finalize()?,
        })
    }
}
