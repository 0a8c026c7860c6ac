//! Whole-registry validation: missing dependencies and dependency cycles.

use std::collections::BTreeMap;

use crate::error::{Chain, Error};
use crate::key::Key;

/// Borrowed view of the dependency edges of every bound key.
pub(crate) struct DependencyGraph<'a> {
    nodes: Vec<(Key, &'a [Key])>,
    index: BTreeMap<Key, usize>,
}

impl<'a> DependencyGraph<'a> {
    pub(crate) fn new<N>(nodes: N) -> Self
    where
        N: IntoIterator<Item = (Key, &'a [Key])>,
    {
        let nodes: Vec<_> = nodes.into_iter().collect();
        let index = nodes
            .iter()
            .enumerate()
            .map(|(i, (key, _))| (*key, i))
            .collect();
        DependencyGraph { nodes, index }
    }

    pub(crate) fn validate(&self) -> Result<(), Error> {
        self.check_dependencies()?;
        self.check_cycles()
    }

    /// Every dependency of every node must itself be a node.
    pub(crate) fn check_dependencies(&self) -> Result<(), Error> {
        for (key, dependencies) in &self.nodes {
            if let Some(missing) = dependencies.iter().find(|d| !self.index.contains_key(*d)) {
                return Err(Error::DependencyNotFound(Chain::new(vec![*key, *missing])));
            }
        }
        Ok(())
    }

    /// Depth-first walk from every node with an explicit path stack. Nodes whose
    /// whole subtree was already walked are skipped.
    pub(crate) fn check_cycles(&self) -> Result<(), Error> {
        let mut done = vec![false; self.nodes.len()];

        for root in 0..self.nodes.len() {
            if done[root] {
                continue;
            }
            // (node, index of the next dependency to visit)
            let mut path: Vec<(usize, usize)> = vec![(root, 0)];

            while let Some((node, next)) = path.last_mut() {
                let node = *node;
                let dependencies = self.nodes[node].1;
                let Some(dependency) = dependencies.get(*next) else {
                    done[node] = true;
                    path.pop();
                    continue;
                };
                *next += 1;

                let Some(&target) = self.index.get(dependency) else {
                    continue;
                };
                if let Some(start) = path.iter().position(|(n, _)| *n == target) {
                    let mut cycle: Vec<Key> = path[start..].iter().map(|(n, _)| self.nodes[*n].0).collect();
                    cycle.push(self.nodes[target].0);
                    return Err(Error::CyclicDependency(Chain::new(cycle)));
                }
                if !done[target] {
                    path.push((target, 0));
                }
            }
        }
        Ok(())
    }
}
