use crate::descriptor::Injectable;
use crate::error::Error;
use crate::graph::DependencyGraph;
use crate::helpers::BoxAny;
use crate::key::Key;
use crate::params::Arguments;
use crate::plan::Plan;
use crate::provider::{Implements, Provider};
use crate::Ref;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

/// The validated, read-only view over a set of bindings.
///
/// Cloning is cheap and clones share the same bindings.
#[derive(Clone)]
pub struct Resolver {
    provider_map: Arc<BTreeMap<Key, Arc<Provider>>>,
}

impl Resolver {
    /// Builds a fresh instance for `T`, or `None` when nothing is bound to it.
    pub fn get<T>(&self) -> Option<Ref<T>>
    where
        T: ?Sized + Send + Sync + 'static,
    {
        if !self.contains::<T>() {
            return None;
        }
        self.resolve::<T>().ok()
    }

    pub fn resolve<T>(&self) -> Result<Ref<T>, Error>
    where
        T: ?Sized + Send + Sync + 'static,
    {
        let key = Key::of::<T>();
        self.provide(&key)?
            .downcast::<Ref<T>>()
            .map(|instance| *instance)
            .map_err(|_| Error::TypeMismatch(key))
    }

    pub fn contains<T: ?Sized + 'static>(&self) -> bool {
        self.provider_map.contains_key(&Key::of::<T>())
    }

    pub(crate) fn provide(&self, key: &Key) -> Result<BoxAny, Error> {
        match self.provider_map.get(key).map(|provider| &**provider) {
            Some(Provider::Constant(provider)) => Ok(provider.provide()),
            Some(Provider::Constructing(provider)) => provider.provide(self),
            None => Err(Error::Unregistered(*key)),
        }
    }

    pub(crate) fn arguments(&self, keys: &[Key]) -> Result<Arguments, Error> {
        let values = keys
            .iter()
            .map(|key| Ok((*key, self.provide(key)?)))
            .collect::<Result<Vec<_>, Error>>()?;
        Ok(Arguments::new(values))
    }
}

impl fmt::Debug for Resolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.provider_map.iter()).finish()
    }
}

/// The binding registry.
///
/// Bindings can be added in any order; dependencies are only checked when
/// [`finalize`](ResolverBuilder::finalize) is called.
#[derive(Debug, Default)]
pub struct ResolverBuilder {
    provider_map: BTreeMap<Key, Arc<Provider>>,
    order: Vec<Key>,
}

impl ResolverBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds `T` to an already built instance. Every lookup returns that same instance.
    pub fn bind_instance<T>(&mut self, value: Ref<T>) -> &mut Self
    where
        T: ?Sized + Send + Sync + 'static,
    {
        let key = Key::of::<T>();
        tracing::debug!("bind instance: {}", key);
        self.insert(key, Provider::constant(value));
        self
    }

    /// Binds `T` to implementation `I`, built anew on every lookup.
    ///
    /// Fails right away if `I` cannot be turned into a construction plan; the
    /// registry is left unchanged in that case.
    pub fn bind_type<T, I>(&mut self) -> Result<&mut Self, Error>
    where
        T: ?Sized + Send + Sync + 'static,
        I: Injectable + Implements<T>,
    {
        let key = Key::of::<T>();
        let plan = Plan::<I>::derive().map_err(|err| {
            tracing::warn!("bind type {} -> {} rejected: {}", key, Key::of::<I>(), err);
            err
        })?;
        tracing::debug!("bind type: {} -> {:?}", key, plan);
        self.insert(key, Provider::constructing::<T, I>(plan));
        Ok(self)
    }

    fn insert(&mut self, key: Key, provider: Provider) {
        if self.provider_map.insert(key, Arc::new(provider)).is_some() {
            tracing::debug!("replaced previous binding for {}", key);
        } else {
            self.order.push(key);
        }
    }

    pub fn contains<T: ?Sized + 'static>(&self) -> bool {
        self.provider_map.contains_key(&Key::of::<T>())
    }

    /// Dependency keys of the provider bound to `T`.
    pub fn dependencies<T: ?Sized + 'static>(&self) -> Option<&[Key]> {
        self.provider_map
            .get(&Key::of::<T>())
            .map(|provider| provider.dependencies())
    }

    /// Bound keys in the order they were first registered.
    pub fn keys(&self) -> impl Iterator<Item = Key> + '_ {
        self.order.iter().copied()
    }

    /// Validates the whole registry and, on success, returns a resolver over it.
    ///
    /// The registry stays usable afterwards, whatever the outcome.
    pub fn finalize(&self) -> Result<Resolver, Error> {
        let graph = DependencyGraph::new(
            self.order
                .iter()
                .filter_map(|key| self.provider_map.get(key).map(|p| (*key, p.dependencies()))),
        );
        if let Err(err) = graph.validate() {
            tracing::warn!("binding validation failed: {}", err);
            return Err(err);
        }
        tracing::debug!("validated {} bindings", self.order.len());

        Ok(Resolver {
            provider_map: Arc::new(self.provider_map.clone()),
        })
    }
}
