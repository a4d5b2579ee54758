use std::fmt::{self, Write as _};
use std::io;

use super::templates::render_resource_types;
use crate::endpoint::EndpointInfo;
use crate::error::{BuildError, Result};
use crate::tree::{Forest, ResourceNode};
use tracing::debug;

/// Counts collected while rendering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EmitStats {
    /// `SwaggerResourceType` literals written.
    pub emitted: usize,
    /// Nodes left out because they have no permitted GET.
    pub skipped: usize,
}

/// Render the whole output file for `forest`.
pub fn render_forest(forest: &Forest) -> Result<(String, EmitStats)> {
    let mut body = String::new();
    let mut stats = EmitStats::default();
    write_nodes(&mut body, forest.roots(), "", &mut stats)?;
    let rendered = render_resource_types(&body)?;
    debug!(emitted = stats.emitted, skipped = stats.skipped, "rendered forest");
    Ok((rendered, stats))
}

/// Write the rendered forest to `writer`.
///
/// The text is rendered completely before the first byte is written.
pub fn emit<W: io::Write>(writer: &mut W, forest: &Forest) -> Result<EmitStats> {
    let (rendered, stats) = render_forest(forest)?;
    writer
        .write_all(rendered.as_bytes())
        .map_err(BuildError::Output)?;
    Ok(stats)
}

/// A node without GET is left out, and its descendants take its place in
/// the current list.
fn write_nodes(
    out: &mut String,
    nodes: &[ResourceNode],
    prefix: &str,
    stats: &mut EmitStats,
) -> fmt::Result {
    for node in nodes {
        if !node.operations.get.permitted {
            debug!(template = node.template(), "skipping resource without GET");
            stats.skipped += 1;
            write_nodes(out, &node.children, prefix, stats)?;
            write_nodes(out, &node.sub_paths, prefix, stats)?;
            continue;
        }
        stats.emitted += 1;
        write_node(out, node, prefix, stats)?;
    }
    Ok(())
}

fn write_node(
    out: &mut String,
    node: &ResourceNode,
    prefix: &str,
    stats: &mut EmitStats,
) -> fmt::Result {
    let ops = &node.operations;
    writeln!(out, "\t{prefix}\tSwaggerResourceType{{")?;
    writeln!(out, "\t{prefix}\t\tDisplay:  {},", go_string(&node.name))?;
    writeln!(
        out,
        "\t{prefix}\t\tEndpoint: {},",
        endpoint_literal(ops.get.endpoint(&node.endpoint))
    )?;
    if let Some(verb) = ops.get.verb_override {
        writeln!(out, "\t{prefix}\t\tVerb:     {},", go_string(verb.as_upper()))?;
    }
    for (field, slot) in [
        ("DeleteEndpoint", &ops.delete),
        ("PatchEndpoint", &ops.patch),
        ("PutEndpoint", &ops.put),
    ] {
        if slot.permitted {
            writeln!(
                out,
                "\t{prefix}\t\t{field}: {},",
                endpoint_literal(slot.endpoint(&node.endpoint))
            )?;
        }
    }

    let nested = format!("{prefix}\t\t");
    for (field, list) in [("Children", &node.children), ("SubResources", &node.sub_paths)] {
        if list.is_empty() {
            continue;
        }
        writeln!(out, "\t{prefix}\t\t{field}: []SwaggerResourceType {{")?;
        write_nodes(out, list, &nested, stats)?;
        writeln!(out, "\t{prefix}\t\t}},")?;
    }
    writeln!(out, "\t{prefix}\t}},")
}

fn endpoint_literal(endpoint: &EndpointInfo) -> String {
    format!(
        "mustGetEndpointInfoFromURL({}, {})",
        go_string(&endpoint.template_url),
        go_string(&endpoint.api_version)
    )
}

/// Quote `s` as a Go interpreted string literal.
fn go_string(s: &str) -> String {
    let mut quoted = String::with_capacity(s.len() + 2);
    quoted.push('"');
    for c in s.chars() {
        match c {
            '"' => quoted.push_str("\\\""),
            '\\' => quoted.push_str("\\\\"),
            _ => quoted.push(c),
        }
    }
    quoted.push('"');
    quoted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::endpoint::endpoint_info_from_template;
    use crate::spec::Verb;
    use crate::tree::{OperationSlot, Operations};

    fn node(template: &str, operations: Operations) -> ResourceNode {
        ResourceNode::new(endpoint_info_from_template(template, "2018-02-01").unwrap())
            .with_operations(operations)
    }

    #[test]
    fn test_go_string_escapes() {
        assert_eq!(go_string("plain"), "\"plain\"");
        assert_eq!(go_string("a\"b\\c"), "\"a\\\"b\\\\c\"");
    }

    #[test]
    fn test_node_literal_layout() {
        let mut parent = node(
            "/sites/{name}",
            Operations {
                get: OperationSlot::permitted(),
                delete: OperationSlot::permitted(),
                patch: OperationSlot::permitted(),
                put: OperationSlot::permitted(),
                ..Default::default()
            },
        );
        parent.children.push(node(
            "/sites/{name}/config",
            Operations {
                get: OperationSlot {
                    permitted: true,
                    verb_override: Some(Verb::Post),
                    endpoint_override: Some(
                        endpoint_info_from_template("/sites/{name}/config/list", "2018-02-01")
                            .unwrap(),
                    ),
                },
                ..Default::default()
            },
        ));

        let mut out = String::new();
        let mut stats = EmitStats::default();
        write_nodes(&mut out, std::slice::from_ref(&parent), "", &mut stats).unwrap();

        let expected = concat!(
            "\t\tSwaggerResourceType{\n",
            "\t\t\tDisplay:  \"{name}\",\n",
            "\t\t\tEndpoint: mustGetEndpointInfoFromURL(\"/sites/{name}\", \"2018-02-01\"),\n",
            "\t\t\tDeleteEndpoint: mustGetEndpointInfoFromURL(\"/sites/{name}\", \"2018-02-01\"),\n",
            "\t\t\tPatchEndpoint: mustGetEndpointInfoFromURL(\"/sites/{name}\", \"2018-02-01\"),\n",
            "\t\t\tPutEndpoint: mustGetEndpointInfoFromURL(\"/sites/{name}\", \"2018-02-01\"),\n",
            "\t\t\tChildren: []SwaggerResourceType {\n",
            "\t\t\t\tSwaggerResourceType{\n",
            "\t\t\t\t\tDisplay:  \"config\",\n",
            "\t\t\t\t\tEndpoint: mustGetEndpointInfoFromURL(\"/sites/{name}/config/list\", \"2018-02-01\"),\n",
            "\t\t\t\t\tVerb:     \"POST\",\n",
            "\t\t\t\t},\n",
            "\t\t\t},\n",
            "\t\t},\n",
        );
        assert_eq!(out, expected);
        assert_eq!(stats, EmitStats { emitted: 2, skipped: 0 });
    }

    #[test]
    fn test_patch_endpoint_uses_its_own_override() {
        let n = node(
            "/things/{id}",
            Operations {
                get: OperationSlot::permitted(),
                delete: OperationSlot {
                    endpoint_override: Some(
                        endpoint_info_from_template("/things/{id}/remove", "1").unwrap(),
                    ),
                    ..OperationSlot::permitted()
                },
                patch: OperationSlot::permitted(),
                ..Default::default()
            },
        );
        let mut out = String::new();
        write_nodes(&mut out, std::slice::from_ref(&n), "", &mut EmitStats::default()).unwrap();
        assert!(out.contains(
            "DeleteEndpoint: mustGetEndpointInfoFromURL(\"/things/{id}/remove\", \"1\")"
        ));
        assert!(out.contains(
            "PatchEndpoint: mustGetEndpointInfoFromURL(\"/things/{id}\", \"2018-02-01\")"
        ));
    }

    #[test]
    fn test_descendants_of_skipped_node_move_up() {
        let mut collection = node(
            "/things",
            Operations {
                put: OperationSlot::permitted(),
                ..Default::default()
            },
        );
        collection.sub_paths.push(node(
            "/things/{id}",
            Operations {
                get: OperationSlot::permitted(),
                ..Default::default()
            },
        ));

        let mut out = String::new();
        let mut stats = EmitStats::default();
        write_nodes(&mut out, std::slice::from_ref(&collection), "", &mut stats).unwrap();

        assert!(!out.contains("\"things\""));
        assert!(out.starts_with("\t\tSwaggerResourceType{\n\t\t\tDisplay:  \"{id}\",\n"));
        assert_eq!(stats, EmitStats { emitted: 1, skipped: 1 });
    }

    #[test]
    fn test_render_wraps_body_in_header_and_footer() {
        let (rendered, stats) = render_forest(&Forest::new()).unwrap();
        assert!(rendered.starts_with(
            "package handlers\n\nfunc (e *SwaggerResourceExpander) getResourceTypes() []SwaggerResourceType {\n\treturn []SwaggerResourceType{\n"
        ));
        assert!(rendered.trim_end().ends_with("\t}\n}"));
        assert_eq!(stats, EmitStats::default());

        let mut buf = Vec::new();
        emit(&mut buf, &Forest::new()).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), rendered);
    }
}
