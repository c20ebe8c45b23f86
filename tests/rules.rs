use alpha_id3::prelude::*;
use alpha_id3::id3::extract_rules;

use std::collections::{BTreeMap, BTreeSet};


fn weather() -> Dataset {
    let rows = [
        ["Sunny", "Yes"],
        ["Sunny", "Yes"],
        ["Rainy", "No"],
        ["Rainy", "No"],
    ];
    let rows = rows.iter()
        .map(|row| row.iter().map(|v| v.to_string()).collect::<Vec<_>>())
        .collect();
    Dataset::new(vec!["Weather", "Play"], rows).unwrap()
}


#[test]
fn weather_rules() {
    let train = weather();

    for alpha in [0.5, 2.0] {
        let tree = Id3Builder::new(&train)
            .target("Play")
            .alpha(alpha)
            .build()
            .unwrap()
            .fit(&train)
            .unwrap();

        let expected = [
            "IF Weather EQUALS Sunny THEN Yes",
            "IF Weather EQUALS Rainy THEN No",
        ].into_iter()
            .map(String::from)
            .collect::<BTreeSet<_>>();
        assert_eq!(tree.rules(), expected);
    }
}


#[test]
fn nested_rules_join_with_and() {
    let inner = [
        ("p".to_string(), Node::leaf("yes")),
        ("q".to_string(), Node::leaf("no")),
    ].into_iter().collect::<BTreeMap<_, _>>();
    let root = [
        ("x".to_string(), Node::internal("B", inner)),
        ("y".to_string(), Node::leaf("no")),
    ].into_iter().collect::<BTreeMap<_, _>>();
    let root = Node::internal("A", root);

    let rules = extract_rules(&root);
    let expected = [
        "IF A EQUALS x AND B EQUALS p THEN yes",
        "IF A EQUALS x AND B EQUALS q THEN no",
        "IF A EQUALS y THEN no",
    ].into_iter()
        .map(String::from)
        .collect::<BTreeSet<_>>();

    assert_eq!(rules, expected);
    assert_eq!(rules.len(), root.n_leaves());
}


#[test]
fn single_leaf_has_a_bare_rule() {
    let rules = extract_rules(&Node::leaf("Yes"));
    assert_eq!(rules.into_iter().collect::<Vec<_>>(), vec![" THEN Yes"]);
}


#[test]
fn one_rule_per_leaf() {
    let train = Dataset::from_csv("tests/dataset/traffic_train.csv").unwrap();
    let tree = Id3Builder::new(&train)
        .target("class")
        .alpha(2.0)
        .build()
        .unwrap()
        .fit(&train)
        .unwrap();

    let rules = tree.rules();
    assert_eq!(rules.len(), tree.root().n_leaves());
    assert!(rules.contains("IF service EQUALS ecr THEN attack"));
    assert!(rules.contains("IF service EQUALS http THEN normal"));
    assert!(rules.iter().all(|rule| rule.starts_with("IF service EQUALS ")));
}
