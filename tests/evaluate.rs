use alpha_id3::prelude::*;
use alpha_id3::{Prediction, Tally};

const TOLERANCE: f64 = 1e-9;


fn fit(train: &Dataset, target: &str) -> DecisionTree {
    Id3Builder::new(train)
        .target(target)
        .alpha(2.0)
        .build()
        .unwrap()
        .fit(train)
        .unwrap()
}


fn weather(rows: &[[&str; 2]]) -> Dataset {
    let rows = rows.iter()
        .map(|row| row.iter().map(|v| v.to_string()).collect::<Vec<_>>())
        .collect();
    Dataset::new(vec!["Weather", "Play"], rows).unwrap()
}


#[test]
fn weather_is_fitted_exactly() {
    let train = weather(&[
        ["Sunny", "Yes"],
        ["Sunny", "Yes"],
        ["Rainy", "No"],
        ["Rainy", "No"],
    ]);
    let tree = fit(&train, "Play");

    let evaluation = evaluate(&tree, &train, "Play").unwrap();
    assert_eq!(evaluation.success_rate(), 100.0);
    assert_eq!(evaluation.false_positive_rate(), 0.0);
}


#[test]
fn unseen_value_is_skipped_but_counted() {
    let train = weather(&[
        ["Sunny", "Yes"],
        ["Sunny", "Yes"],
        ["Rainy", "No"],
        ["Rainy", "No"],
    ]);
    let tree = fit(&train, "Play");

    let test = weather(&[
        ["Sunny", "Yes"],
        ["Rainy", "No"],
        ["Cloudy", "Yes"],
        ["Sunny", "Yes"],
    ]);
    let cloudy = &test.rows()[2];
    assert_eq!(tree.classify(cloudy, test.name_to_index()), Prediction::Skipped);

    let evaluation = evaluate(&tree, &test, "Play").unwrap();
    let tally = evaluation.tally();
    assert_eq!(tally.n_rows, 4);
    assert_eq!(tally.success, 3);
    assert_eq!(tally.skipped, 1);
    assert_eq!(evaluation.success_rate(), 75.0);
}


#[test]
fn classify_is_deterministic() {
    let train = Dataset::from_csv("tests/dataset/traffic_train.csv").unwrap();
    let tree = fit(&train, "class");

    let test = Dataset::from_csv("tests/dataset/traffic_test.csv").unwrap();
    for row in test.rows() {
        let first = tree.classify(row, test.name_to_index());
        for _ in 0..3 {
            assert_eq!(tree.classify(row, test.name_to_index()), first);
        }
    }
}


// The tree is trained on `attack`/`normal`
// and tested against the fine-grained categories.
//
// | id | truth   | service | prediction | outcome        |
// |----|---------|---------|------------|----------------|
// | 1  | normal  | http    | normal     | success, TN    |
// | 2  | DoS     | ecr     | attack     | success        |
// | 3  | Probing | snmp    | attack     | success        |
// | 4  | R2L     | http    | normal     | false positive |
// | 5  | normal  | dns     | normal     | success, TN    |
// | 6  | DoS     | ftp     | (skipped)  |                |
// | 7  | normal  | telnet  | attack     |                |
// | 8  | U2R     | telnet  | attack     | success        |
#[test]
fn attack_categories() {
    let train = Dataset::from_csv("tests/dataset/traffic_train.csv").unwrap();
    let tree = fit(&train, "class");

    // The target sits at a different column in each of these.
    let raw = Dataset::from_csv("tests/dataset/traffic_test.csv").unwrap();
    let projected = raw.project(&["protocol", "service", "class"]).unwrap();
    assert_ne!(raw.index_of("class").unwrap(), projected.index_of("class").unwrap());

    for test in [&raw, &projected] {
        let evaluation = evaluate(&tree, test, "class").unwrap();
        let tally = evaluation.tally();

        assert_eq!(tally.n_rows, 8);
        assert_eq!(tally.success, 5);
        assert_eq!(tally.false_positive, 1);
        assert_eq!(tally.true_normal, 2);
        assert_eq!(tally.skipped, 1);

        assert_eq!(evaluation.success_rate(), 62.5);
        let fp_rate = evaluation.false_positive_rate();
        assert!((fp_rate - 100.0 / 3.0).abs() < TOLERANCE, "{fp_rate}");
    }
}


#[test]
fn unknown_ground_truth_column() {
    let train = Dataset::from_csv("tests/dataset/traffic_train.csv").unwrap();
    let tree = fit(&train, "class");

    let result = evaluate(&tree, &train, "label");
    assert!(matches!(result, Err(Error::UnknownAttribute { name }) if name == "label"));
}


#[test]
fn report_lists_the_four_rates() {
    let train = Dataset::from_csv("tests/dataset/traffic_train.csv").unwrap();
    let test = Dataset::from_csv("tests/dataset/traffic_test.csv").unwrap();
    let tree = fit(&train, "class");

    colored::control::set_override(false);
    let report = Report::new(
        evaluate(&tree, &train, "class").unwrap(),
        evaluate(&tree, &test, "class").unwrap(),
    );
    let lines = report.to_string()
        .lines()
        .map(String::from)
        .collect::<Vec<_>>();

    assert_eq!(lines.len(), 4);
    assert_eq!(lines[0], "The success rate on the training data is 100.0%.");
    assert_eq!(lines[1], "The false positive rate on the training data is 0.0%.");
    assert!(lines[2].starts_with("The false positive rate on the test data is 33.3"));
    assert_eq!(lines[3], "The success rate on the test data is 62.5%.");
}


#[test]
fn parallel_tally_equals_a_sequential_pass() {
    let train = Dataset::from_csv("tests/dataset/traffic_train.csv").unwrap();
    let test = Dataset::from_csv("tests/dataset/traffic_test.csv").unwrap();
    let tree = fit(&train, "class");

    let truth = test.index_of("class").unwrap();
    let sequential = test.rows()
        .iter()
        .fold(Tally::default(), |tally, row| {
            let prediction = tree.classify(row, test.name_to_index());
            tally.record(prediction, &row[truth])
        });

    for _ in 0..5 {
        let evaluation = evaluate(&tree, &test, "class").unwrap();
        assert_eq!(evaluation.tally(), sequential);
    }
}
