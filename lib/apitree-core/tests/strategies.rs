#![allow(missing_docs)]

use apitree_core::organize::{DocumentTreeExt, GroupByTagHierarchy};
use apitree_core::{Document, FolderStrategy, SkeletonConfig, generate_skeleton};
use insta::assert_snapshot;
use rstest::rstest;

mod common;
pub use self::common::*;

#[rstest]
fn should_organize_petstore_by_paths(petstore: Document) {
    let config = SkeletonConfig::new(FolderStrategy::Paths).with_webhooks(true);

    let tree = generate_skeleton(&petstore, &config);

    assert_snapshot!(tree.outline(), @r"
    collection root:collection
      folder path:folder:pet
        request path:request:pet:put
        request path:request:pet:post
        folder path:folder:pet/findByStatus
          request path:request:pet/findByStatus:get
        folder path:folder:pet/{petId}
          request path:request:pet/{petId}:get
          request path:request:pet/{petId}:delete
      folder path:folder:store
        folder path:folder:store/order
          request path:request:store/order:post
      folder path:folder:user
        folder path:folder:user/login
          request path:request:user/login:get
      folder path:folder:/
        request path:request:/:get
      webhook-folder path~webhook:folder
        webhook-request path~webhook:newPet:post
        webhook-request path~webhook:petDeleted:post
    ");
}

#[rstest]
fn should_organize_petstore_by_tags(petstore: Document) {
    let config = SkeletonConfig::new(FolderStrategy::Tags)
        .with_webhooks(true)
        .with_deprecated(false);

    let tree = generate_skeleton(&petstore, &config);

    assert_snapshot!(tree.outline(), @r"
    collection root:collection
      folder path:pet
        request path:pet:/pet:put
        request path:pet:/pet:post
        request path:pet:/pet/findByStatus:get
        request path:pet:/pet/{petId}:get
        request path:pet:/store/order:post
      folder path:store
        request path:store:/store/order:post
      folder path:user
      request path:/user/login:get
      request path:/:get
      webhook-folder path~webhook:folder
        webhook-request path~webhook:newPet:post
    ");
}

#[rstest]
fn should_organize_petstore_by_tag_hierarchy(petstore: Document) {
    let tree = petstore.organize_with(GroupByTagHierarchy::new(true));

    assert_snapshot!(tree.outline(), @r"
    collection root:collection
      folder path:pet
        request path:pet:/pet:put
        request path:pet:/pet:post
        request path:pet:/pet/findByStatus:get
        request path:pet:/pet/{petId}:get
        request path:pet:/pet/{petId}:delete
        folder path:pet/store
          request path:pet/store:/store/order:post
      request path:/user/login:get
      request path:/:get
    ");
}

#[rstest]
fn should_carry_tag_descriptions(petstore: Document) {
    let tree = generate_skeleton(&petstore, &SkeletonConfig::new(FolderStrategy::Tags));

    let description = tree
        .node("path:store")
        .and_then(|node| node.meta.as_folder())
        .and_then(|meta| meta.description.as_deref());

    assert_eq!(description, Some("Access to Petstore orders"));
}

#[rstest]
fn should_serialize_tree_to_json(petstore: Document) -> anyhow::Result<()> {
    let tree = generate_skeleton(&petstore, &SkeletonConfig::default());

    let json = serde_json::to_value(&tree)?;

    assert_eq!(
        json["nodes"]["path:request:pet/{petId}:get"],
        serde_json::json!({
            "meta": {
                "type": "request",
                "path": "/pet/{petId}",
                "method": "get",
                "pathIdentifier": "pet/{petId}"
            },
            "data": {}
        })
    );
    assert_eq!(
        json["children"]["path:folder:pet/{petId}"],
        serde_json::json!([
            "path:request:pet/{petId}:get",
            "path:request:pet/{petId}:delete"
        ])
    );
    Ok(())
}

#[cfg(feature = "yaml")]
#[rstest]
fn should_read_yaml_document() -> anyhow::Result<()> {
    use apitree_core::ToYaml;

    let document = Document::from_yaml(
        "paths:\n  /pet:\n    get:\n      tags: [pet]\ntags:\n  - name: pet\n",
    )?;
    let tree = generate_skeleton(&document, &SkeletonConfig::new(FolderStrategy::Tags));

    assert!(tree.has_edge("path:pet", "path:pet:/pet:get"));
    let yaml = tree.to_yaml()?;
    assert!(yaml.contains("path:pet:/pet:get"));
    Ok(())
}
