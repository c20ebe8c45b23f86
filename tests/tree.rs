use alpha_id3::prelude::*;

use std::collections::BTreeMap;
use std::fs;


fn traffic_tree() -> DecisionTree {
    let train = DatasetReader::new()
        .file("tests/dataset/traffic_train.csv")
        .project(["protocol", "service", "class"])
        .target_feature("class")
        .read()
        .unwrap();

    Id3Builder::new(&train)
        .target("class")
        .alpha(2.0)
        .build()
        .unwrap()
        .fit(&train)
        .unwrap()
}


#[test]
fn to_dot_file() {
    let tree = traffic_tree();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("result.dot");

    tree.to_dot_file(&path).unwrap();
    let dot = fs::read_to_string(&path).unwrap();

    assert!(dot.starts_with("graph DecisionTree {"));
    assert!(dot.trim_end().ends_with('}'));
    assert!(dot.contains("node_0 [ label = \"service ?\" ];"));
    assert!(dot.contains("[ label = \"ecr\" ];"));
    // One box per leaf.
    assert_eq!(dot.matches("shape = box").count(), tree.root().n_leaves());
}


#[test]
fn json_keeps_the_structure() {
    let tree = traffic_tree();
    let json = tree.to_json().unwrap();
    assert!(json.contains("\"Internal\""));

    let restored = DecisionTree::from_json(&json).unwrap();
    assert_eq!(restored.rules(), tree.rules());
}


#[test]
fn shape_of_the_tree() {
    let tree = traffic_tree();
    assert_eq!(tree.root().depth(), 1);
    assert_eq!(tree.root().n_leaves(), 5);
    assert!(!tree.root().is_leaf());
}


#[test]
fn dot_labels_are_escaped() {
    let children = [("say \"hi\"".to_string(), Node::leaf(r"C:\tmp"))]
        .into_iter()
        .collect::<BTreeMap<_, _>>();
    let tree = DecisionTree::from(Node::internal("a\"b", children));

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("escaped.dot");
    tree.to_dot_file(&path).unwrap();
    let dot = fs::read_to_string(&path).unwrap();

    assert!(dot.contains(r#"node_0 [ label = "a\"b ?" ];"#));
    assert!(dot.contains(r#"node_0 -- node_1 [ label = "say \"hi\"" ];"#));
    assert!(dot.contains(r#"node_1 [ label = "C:\\tmp", shape = box ];"#));
}
