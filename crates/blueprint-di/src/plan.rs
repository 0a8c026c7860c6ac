use std::collections::HashMap;
use std::fmt;

use crate::descriptor::{Assign, Build, Constructor, Injectable, Invoke, Signature, TypeDescriptor};
use crate::error::Error;
use crate::helpers::Named;
use crate::key::Key;
use crate::resolver::Resolver;

/// How to build and wire one concrete implementation type.
///
/// Derived once when the type is bound, immutable afterwards.
pub struct Plan<I> {
    ty: Key,
    initializer: Initializer<I>,
    fields: Vec<Named<FieldInjection<I>>>,
    methods: Vec<MethodInjection<I>>,
    dependencies: Vec<Key>,
}

struct Initializer<I> {
    params: Vec<Key>,
    build: Build<I>,
}

struct FieldInjection<I> {
    key: Key,
    assign: Assign<I>,
}

struct MethodInjection<I> {
    signature: Signature,
    invoke: Invoke<I>,
}

impl<I: Injectable> Plan<I> {
    pub fn derive() -> Result<Self, Error> {
        let ty = Key::of::<I>();
        let descriptor = TypeDescriptor::<I>::of();
        if descriptor.is_abstract {
            return Err(Error::NotInstantiable(ty));
        }

        let initializer = select_initializer(ty, descriptor.constructors)?;
        let mut fields = Vec::new();
        let mut methods: Vec<(Signature, Invoke<I>, bool)> = Vec::new();
        let mut seen: HashMap<Signature, usize> = HashMap::new();

        for level in descriptor.levels {
            for field in level.fields {
                let Named { name, value } = field;
                match value.assign {
                    Some(assign) => fields.push(Named::new(name, FieldInjection { key: value.key, assign })),
                    None => {
                        return Err(Error::ImmutableInjectionTarget {
                            owner: level.owner,
                            field: name,
                        })
                    }
                }
            }
            for method in level.methods {
                match seen.get(&method.signature) {
                    // an overridden declaration still passes its marker on
                    Some(&slot) => methods[slot].2 |= method.inject,
                    None => {
                        seen.insert(method.signature.clone(), methods.len());
                        methods.push((method.signature, method.invoke, method.inject));
                    }
                }
            }
        }

        let methods: Vec<_> = methods
            .into_iter()
            .filter(|(_, _, inject)| *inject)
            .map(|(signature, invoke, _)| MethodInjection { signature, invoke })
            .collect();

        let mut dependencies = initializer.params.clone();
        dependencies.extend(fields.iter().map(|field| field.value.key));
        dependencies.extend(methods.iter().flat_map(|method| method.signature.params().iter().copied()));

        Ok(Plan {
            ty,
            initializer,
            fields,
            methods,
            dependencies,
        })
    }
}

fn select_initializer<I>(
    ty: Key,
    constructors: Vec<Constructor<I>>,
) -> Result<Initializer<I>, Error> {
    let marked = constructors.iter().filter(|c| c.inject).count();
    if marked > 1 {
        return Err(Error::AmbiguousInjection(ty));
    }
    constructors
        .into_iter()
        .find(|c| if marked == 1 { c.inject } else { c.params.is_empty() })
        .map(|c| Initializer {
            params: c.params,
            build: c.build,
        })
        .ok_or(Error::NotInstantiable(ty))
}

impl<I> Plan<I> {
    pub fn implementation(&self) -> Key {
        self.ty
    }

    /// Parameter keys of the chosen initializer, in order.
    pub fn initializer(&self) -> &[Key] {
        &self.initializer.params
    }

    /// Injected fields as `(name, key)`, most-derived type first.
    pub fn fields(&self) -> impl Iterator<Item = (&'static str, Key)> + '_ {
        self.fields.iter().map(|field| (field.name, field.value.key))
    }

    /// Injected method signatures in invocation order.
    pub fn methods(&self) -> impl Iterator<Item = &Signature> + '_ {
        self.methods.iter().map(|method| &method.signature)
    }

    pub fn dependencies(&self) -> &[Key] {
        &self.dependencies
    }

    pub(crate) fn construct(&self, resolver: &Resolver) -> Result<I, Error> {
        let mut args = resolver.arguments(&self.initializer.params)?;
        let mut instance = (self.initializer.build)(&mut args)?;

        for field in &self.fields {
            let value = resolver.provide(&field.value.key)?;
            (field.value.assign)(&mut instance, value)?;
        }

        for method in &self.methods {
            let mut args = resolver.arguments(method.signature.params())?;
            (method.invoke)(&mut instance, &mut args)?;
        }

        Ok(instance)
    }
}

impl<I> fmt::Debug for Plan<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Plan")
            .field("implementation", &self.ty)
            .field("initializer", &self.initializer.params)
            .field("fields", &self.fields().collect::<Vec<_>>())
            .field("methods", &self.methods().collect::<Vec<_>>())
            .finish()
    }
}
