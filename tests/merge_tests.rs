#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

mod common;

use common::SITES;
use navtree::tree::{Link, Placement};
use navtree::{Forest, Merger, OverrideTable, ResourceNode, SpecDocument, Verb};
use std::collections::HashSet;

fn web_apps() -> SpecDocument {
    let name = format!("{SITES}/{{name}}");
    SpecDocument::new("2018-02-01")
        .with_path(SITES, &[Verb::Get])
        .with_path(&name, &[Verb::Get, Verb::Put, Verb::Delete, Verb::Patch])
        .with_path(&format!("{name}/config/appsettings"), &[Verb::Put])
        .with_path(&format!("{name}/config/appsettings/list"), &[Verb::Post])
        .with_path(&format!("{name}/slots/{{slot}}"), &[Verb::Get, Verb::Delete])
}

type Found<'a> = (&'a ResourceNode, Option<&'a ResourceNode>, Link);

fn find<'a>(forest: &'a Forest, template: &str) -> Option<Found<'a>> {
    let mut found = None;
    forest.walk(|node, parent, link| {
        if node.template() == template {
            found = Some((node, parent, link));
        }
    });
    found
}

#[test]
fn test_appsettings_list_becomes_get_of_section() {
    let merger = Merger::new(OverrideTable::builtin());
    let forest = merger.merge(Forest::new(), &web_apps()).unwrap();

    let name = format!("{SITES}/{{name}}");
    let section = format!("{name}/config/appsettings");
    let (node, parent, link) = find(&forest, &section).unwrap();
    assert_eq!(parent.unwrap().template(), name);
    assert_eq!(link, Link::Child);

    let get = &node.operations.get;
    assert!(get.permitted);
    assert_eq!(get.verb_override, Some(Verb::Post));
    assert_eq!(
        get.endpoint(&node.endpoint).template_url,
        format!("{section}/list")
    );
    assert!(node.operations.put.permitted);
    assert!(!node.operations.post.permitted);

    // The list action itself is never a node of its own.
    assert!(find(&forest, &format!("{section}/list")).is_none());
}

#[test]
fn test_without_overrides_list_is_its_own_node() {
    let forest = Merger::default().merge(Forest::new(), &web_apps()).unwrap();
    let name = format!("{SITES}/{{name}}");
    let section = format!("{name}/config/appsettings");

    let (section_node, _, _) = find(&forest, &section).unwrap();
    assert!(!section_node.operations.get.permitted);

    let (list, parent, link) = find(&forest, &format!("{section}/list")).unwrap();
    assert_eq!(parent.unwrap().template(), section);
    assert_eq!(link, Link::Child);
    assert!(list.operations.post.permitted);
    assert!(!list.operations.get.permitted);
}

#[test]
fn test_site_config_nests_beneath_site() {
    let name = format!("{SITES}/{{name}}");
    let config = format!("{name}/config");
    let doc = SpecDocument::new("2018-02-01")
        .with_path(SITES, &[Verb::Get])
        .with_path(&name, &[Verb::Get])
        .with_path(&config, &[Verb::Get])
        .with_path(&format!("{name}/slots/{{slot}}"), &[Verb::Get]);
    let forest = Merger::default().merge(Forest::new(), &doc).unwrap();

    assert_eq!(forest.roots().len(), 1);
    let (_, parent, link) = find(&forest, &name).unwrap();
    assert_eq!(parent.unwrap().template(), SITES);
    assert_eq!(link, Link::SubPath);

    // Same parameter count as the site, so it is a child.
    let (_, parent, link) = find(&forest, &config).unwrap();
    assert_eq!(parent.unwrap().template(), name);
    assert_eq!(link, Link::Child);

    let (_, parent, link) = find(&forest, &format!("{name}/slots/{{slot}}")).unwrap();
    assert_eq!(parent.unwrap().template(), name);
    assert_eq!(link, Link::SubPath);

    assert_eq!(forest.find_deepest_match(&format!("{config}/web")).unwrap().template(), config);
}

#[test]
fn test_each_template_appears_once_and_nests_under_a_prefix() {
    let merger = Merger::new(OverrideTable::builtin());
    let forest = merger.merge(Forest::new(), &web_apps()).unwrap();

    let mut seen = HashSet::new();
    forest.walk(|node, parent, link| {
        assert!(seen.insert(node.template().to_string()), "duplicate {}", node.template());
        if let Some(parent) = parent {
            assert!(node.template().starts_with(parent.template()));
            assert_ne!(node.template(), parent.template());
            match link {
                Link::Child => assert_eq!(node.name_segments(), parent.name_segments()),
                Link::SubPath => assert!(node.name_segments() > parent.name_segments()),
                Link::Root => panic!("root link with a parent"),
            }
        } else {
            assert_eq!(link, Link::Root);
        }
    });
    assert_eq!(seen.len(), forest.node_count());
    assert_eq!(forest.node_count(), 4);
}

#[test]
fn test_merge_is_deterministic() {
    let merger = Merger::new(OverrideTable::builtin());
    let a = merger.merge(Forest::new(), &web_apps()).unwrap();
    let b = merger.merge(Forest::new(), &web_apps()).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_merging_the_same_document_twice_changes_nothing() {
    let merger = Merger::new(OverrideTable::builtin());
    let once = merger.merge(Forest::new(), &web_apps()).unwrap();
    let twice = merger.merge(once.clone(), &web_apps()).unwrap();
    assert_eq!(once, twice);
}

#[test]
fn test_documents_accumulate_into_one_forest() {
    let plans = SITES.replace("/sites", "/serverfarms");
    let second = SpecDocument::new("2018-02-01")
        .with_path(&plans, &[Verb::Get])
        .with_path(&format!("{SITES}/{{name}}/config"), &[Verb::Get]);

    let merger = Merger::default();
    let forest = merger.merge(Forest::new(), &web_apps()).unwrap();
    let forest = merger.merge(forest, &second).unwrap();

    let templates: Vec<_> = forest.roots().iter().map(ResourceNode::template).collect();
    assert_eq!(templates, [SITES, plans.as_str()]);

    // Added after appsettings, so it lands beside it rather than above it.
    let (_, parent, _) = find(&forest, &format!("{SITES}/{{name}}/config")).unwrap();
    assert_eq!(parent.unwrap().template(), format!("{SITES}/{{name}}"));
}

#[test]
fn test_insert_reports_placement() {
    let mut forest = Forest::new();
    let doc = SpecDocument::new("1").with_path("/a", &[Verb::Get]);
    forest = Merger::default().merge(forest, &doc).unwrap();
    let node = ResourceNode::new(navtree::endpoint_info_from_template("/a", "1").unwrap());
    assert_eq!(forest.insert(node, "/a"), Placement::Merged);
}
