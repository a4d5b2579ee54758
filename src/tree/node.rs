use crate::endpoint::EndpointInfo;
use crate::spec::Verb;

/// Exposure of one HTTP verb on a resource.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OperationSlot {
    /// The verb can be invoked on the resource.
    pub permitted: bool,
    /// Set when the slot is backed by a different verb (e.g. a POST acting
    /// as the logical GET).
    pub verb_override: Option<Verb>,
    /// Set when the verb is invoked on a different path than the resource's
    /// logical endpoint.
    pub endpoint_override: Option<EndpointInfo>,
}

impl OperationSlot {
    pub fn permitted() -> Self {
        OperationSlot {
            permitted: true,
            ..Default::default()
        }
    }

    /// Endpoint to invoke this slot on: the override if set, else `logical`.
    pub fn endpoint<'a>(&'a self, logical: &'a EndpointInfo) -> &'a EndpointInfo {
        self.endpoint_override.as_ref().unwrap_or(logical)
    }
}

/// The five verb slots of a resource.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Operations {
    pub get: OperationSlot,
    pub delete: OperationSlot,
    pub patch: OperationSlot,
    pub post: OperationSlot,
    pub put: OperationSlot,
}

impl Operations {
    /// Copy every permitted slot of `other` over the matching slot here.
    /// Slots `other` does not permit are left as they are.
    pub fn absorb(&mut self, other: Operations) {
        let Operations {
            get,
            delete,
            patch,
            post,
            put,
        } = other;
        for (slot, incoming) in [
            (&mut self.get, get),
            (&mut self.delete, delete),
            (&mut self.patch, patch),
            (&mut self.post, post),
            (&mut self.put, put),
        ] {
            if incoming.permitted {
                *slot = incoming;
            }
        }
    }

    /// Slot for `verb`; HEAD and OPTIONS have none.
    pub fn slot_mut(&mut self, verb: Verb) -> Option<&mut OperationSlot> {
        match verb {
            Verb::Get => Some(&mut self.get),
            Verb::Delete => Some(&mut self.delete),
            Verb::Patch => Some(&mut self.patch),
            Verb::Post => Some(&mut self.post),
            Verb::Put => Some(&mut self.put),
            Verb::Head | Verb::Options => None,
        }
    }
}

/// A resource in the navigation tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceNode {
    /// Last path segment, `{param}` for a parameter.
    pub name: String,
    /// Logical endpoint; the node's identity.
    pub endpoint: EndpointInfo,
    pub operations: Operations,
    /// Resources at the same parameter depth, grouped under this one.
    pub children: Vec<ResourceNode>,
    /// Resources with more parameter segments.
    pub sub_paths: Vec<ResourceNode>,
    name_segments: usize,
}

impl ResourceNode {
    pub fn new(endpoint: EndpointInfo) -> Self {
        let name = endpoint
            .last_segment()
            .map(|segment| segment.display_name())
            .unwrap_or_default();
        let name_segments = endpoint.name_segment_count();
        ResourceNode {
            name,
            endpoint,
            operations: Operations::default(),
            children: Vec::new(),
            sub_paths: Vec::new(),
            name_segments,
        }
    }

    pub fn with_operations(mut self, operations: Operations) -> Self {
        self.operations = operations;
        self
    }

    pub fn template(&self) -> &str {
        &self.endpoint.template_url
    }

    /// Parameter segment count, fixed when the node was created.
    pub fn name_segments(&self) -> usize {
        self.name_segments
    }

    /// Fold a node with the same template into this one.
    pub(crate) fn absorb(&mut self, other: ResourceNode) {
        self.operations.absorb(other.operations);
        self.children.extend(other.children);
        self.sub_paths.extend(other.sub_paths);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::endpoint::endpoint_info_from_template;

    fn endpoint(template: &str) -> EndpointInfo {
        endpoint_info_from_template(template, "1").unwrap()
    }

    #[test]
    fn test_new_node_name_and_depth() {
        let node = ResourceNode::new(endpoint("/sites/{name}/config"));
        assert_eq!(node.name, "config");
        assert_eq!(node.name_segments(), 1);
        let node = ResourceNode::new(endpoint("/sites/{name}"));
        assert_eq!(node.name, "{name}");
    }

    #[test]
    fn test_absorb_only_overwrites_permitted_slots() {
        let mut existing = Operations {
            put: OperationSlot::permitted(),
            get: OperationSlot {
                permitted: true,
                verb_override: None,
                endpoint_override: None,
            },
            ..Default::default()
        };
        let incoming = Operations {
            get: OperationSlot {
                permitted: true,
                verb_override: Some(Verb::Post),
                endpoint_override: Some(endpoint("/a/list")),
            },
            ..Default::default()
        };
        existing.absorb(incoming);
        assert_eq!(existing.get.verb_override, Some(Verb::Post));
        assert_eq!(
            existing.get.endpoint_override.as_ref().unwrap().template_url,
            "/a/list"
        );
        assert!(existing.put.permitted);
        assert!(!existing.delete.permitted);
    }

    #[test]
    fn test_slot_endpoint_prefers_override() {
        let logical = endpoint("/a");
        let plain = OperationSlot::permitted();
        assert_eq!(plain.endpoint(&logical).template_url, "/a");
        let overridden = OperationSlot {
            endpoint_override: Some(endpoint("/a/list")),
            ..OperationSlot::permitted()
        };
        assert_eq!(overridden.endpoint(&logical).template_url, "/a/list");
    }
}
