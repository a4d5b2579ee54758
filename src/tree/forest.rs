//! The resource forest and its deepest-match locator.
//!
//! Every node keeps two ordered lists below it, much like a radix node keeps
//! static and parameter children apart:
//!
//! - `children` hold resources with the same number of parameter segments,
//!   e.g. `.../sites/{name}/config` under `.../sites/{name}`
//! - `sub_paths` hold resources with more parameter segments,
//!   e.g. `.../sites/{name}` under `.../sites`
//!
//! Lookup is by literal string prefix of the path template, so a node is
//! always attached beneath one whose template is a strict prefix of its own.
//! That rules out cycles.

use super::node::ResourceNode;

/// How a node is linked to the node visited before it in [`Forest::walk`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Link {
    Root,
    Child,
    SubPath,
}

/// Where [`Forest::insert`] put a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// New top-level node.
    Root,
    /// Folded into an existing node with the same template.
    Merged,
    /// Appended to the deepest match's `children`.
    Child,
    /// Appended to the deepest match's `sub_paths`.
    SubPath,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    Root(usize),
    Child(usize),
    SubPath(usize),
}

/// Ordered collection of resource trees.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Forest {
    roots: Vec<ResourceNode>,
}

impl Forest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn roots(&self) -> &[ResourceNode] {
        &self.roots
    }

    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    /// Total number of nodes at every depth.
    pub fn node_count(&self) -> usize {
        let mut count = 0;
        self.walk(|_, _, _| count += 1);
        count
    }

    /// Most specific node whose template is a string prefix of `search_path`.
    ///
    /// Takes the first prefix match in forest order, then looks for a deeper
    /// match among its `children` first and its `sub_paths` second.
    pub fn find_deepest_match(&self, search_path: &str) -> Option<&ResourceNode> {
        let address = self.locate(search_path)?;
        self.node(&address)
    }

    /// Attach `node` beneath the deepest match for `search_path`.
    ///
    /// - no match: the node becomes a root
    /// - match with the same template: the two are merged
    /// - match with the same parameter count: appended to `children`
    /// - otherwise: appended to `sub_paths`
    pub fn insert(&mut self, node: ResourceNode, search_path: &str) -> Placement {
        let parent = match self.locate(search_path) {
            Some(address) => self.node_mut(&address),
            None => None,
        };
        match parent {
            Some(parent) if parent.template() == node.template() => {
                parent.absorb(node);
                Placement::Merged
            }
            Some(parent) if parent.name_segments() == node.name_segments() => {
                parent.children.push(node);
                Placement::Child
            }
            Some(parent) => {
                parent.sub_paths.push(node);
                Placement::SubPath
            }
            None => {
                self.roots.push(node);
                Placement::Root
            }
        }
    }

    /// Pre-order traversal. The callback receives each node, its parent and
    /// the kind of link to that parent.
    pub fn walk<'a, F>(&'a self, mut visit: F)
    where
        F: FnMut(&'a ResourceNode, Option<&'a ResourceNode>, Link),
    {
        for root in &self.roots {
            walk_node(root, None, Link::Root, &mut visit);
        }
    }

    fn locate(&self, search_path: &str) -> Option<Vec<Step>> {
        deepest(&self.roots, search_path, Step::Root)
    }

    fn node(&self, address: &[Step]) -> Option<&ResourceNode> {
        let (first, rest) = address.split_first()?;
        let Step::Root(index) = *first else {
            return None;
        };
        let mut current = self.roots.get(index)?;
        for step in rest {
            current = match *step {
                Step::Child(i) => current.children.get(i)?,
                Step::SubPath(i) => current.sub_paths.get(i)?,
                Step::Root(_) => return None,
            };
        }
        Some(current)
    }

    fn node_mut(&mut self, address: &[Step]) -> Option<&mut ResourceNode> {
        let (first, rest) = address.split_first()?;
        let Step::Root(index) = *first else {
            return None;
        };
        let mut current = self.roots.get_mut(index)?;
        for step in rest {
            current = match *step {
                Step::Child(i) => current.children.get_mut(i)?,
                Step::SubPath(i) => current.sub_paths.get_mut(i)?,
                Step::Root(_) => return None,
            };
        }
        Some(current)
    }
}

fn deepest(
    nodes: &[ResourceNode],
    search_path: &str,
    step: fn(usize) -> Step,
) -> Option<Vec<Step>> {
    let (index, node) = nodes
        .iter()
        .enumerate()
        .find(|(_, node)| search_path.starts_with(node.template()))?;
    let mut address = vec![step(index)];
    if let Some(deeper) = deepest(&node.children, search_path, Step::Child)
        .or_else(|| deepest(&node.sub_paths, search_path, Step::SubPath))
    {
        address.extend(deeper);
    }
    Some(address)
}

fn walk_node<'a, F>(
    node: &'a ResourceNode,
    parent: Option<&'a ResourceNode>,
    link: Link,
    visit: &mut F,
) where
    F: FnMut(&'a ResourceNode, Option<&'a ResourceNode>, Link),
{
    visit(node, parent, link);
    for child in &node.children {
        walk_node(child, Some(node), Link::Child, visit);
    }
    for sub in &node.sub_paths {
        walk_node(sub, Some(node), Link::SubPath, visit);
    }
}
