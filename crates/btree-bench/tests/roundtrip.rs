// File: crates/btree-bench/tests/roundtrip.rs
// Purpose: Timing CSVs written by a benchmark run load back through the chart generator's loader.

use std::path::PathBuf;

use btree_bench::{run, Config};
use btree_charts::load_series;

const TEXT: &str = "It was the best of times, it was the worst of times; it was the age of wisdom,
it was the age of foolishness (it was the epoch of belief). It was the epoch of incredulity!
\"It was the season of Light\", it was the season of Darkness? It was the spring of hope...";

fn fresh_dir(name: &str) -> PathBuf {
    let dir = PathBuf::from("target/test_out/roundtrip").join(name);
    std::fs::remove_dir_all(&dir).ok();
    std::fs::create_dir_all(&dir).expect("create test dir");
    dir
}

fn config_in(dir: &std::path::Path) -> Config {
    Config {
        text_path: dir.join("book.txt"),
        insert_out: dir.join("insert_times.csv"),
        delete_out: dir.join("delete_times.csv"),
        seed: Some(2024),
    }
}

#[test]
fn generated_csvs_load_with_one_row_per_token() {
    let dir = fresh_dir("load");
    let config = config_in(&dir);
    std::fs::write(&config.text_path, TEXT).expect("write text");

    let report = run(&config).expect("benchmark run");
    let tokens = btree_bench::tokenize(TEXT).len();
    assert_eq!(report.tokens, tokens);

    let insert = load_series(&config.insert_out).expect("load insert csv");
    let delete = load_series(&config.delete_out).expect("load delete csv");
    assert_eq!((insert.len(), delete.len()), (tokens, tokens));

    let sizes: Vec<i32> = insert.points.iter().map(|m| m.node_count).collect();
    assert_eq!(sizes[0], 1);
    assert!(sizes.windows(2).all(|w| w[0] <= w[1]));
    assert_eq!(sizes.last().copied(), report.inserts.last().map(|s| s.node_count as i32));

    // every key is gone at the end, leaving the single empty root
    assert_eq!(delete.points.last().map(|m| m.node_count), Some(1));
    assert!(insert.points.iter().chain(&delete.points).all(|m| m.time_us > 0));
}

#[test]
fn same_seed_gives_same_delete_shape() {
    let dir = fresh_dir("seed");
    let config = config_in(&dir);
    std::fs::write(&config.text_path, TEXT).expect("write text");

    let nodes = |report: &btree_bench::Report| report.deletes.iter().map(|s| s.node_count).collect::<Vec<_>>();
    let first = run(&config).expect("first run");
    let second = run(&config).expect("second run");
    assert_eq!(nodes(&first), nodes(&second));
}

#[test]
fn empty_text_writes_header_only_files() {
    let dir = fresh_dir("empty");
    let config = config_in(&dir);
    std::fs::write(&config.text_path, " .,;\n").expect("write text");

    let report = run(&config).expect("benchmark run");
    assert_eq!(report.tokens, 0);
    assert!(load_series(&config.insert_out).expect("load").is_empty());
    assert!(load_series(&config.delete_out).expect("load").is_empty());
}

#[test]
fn missing_text_writes_nothing() {
    let dir = fresh_dir("missing");
    let config = config_in(&dir);
    assert!(run(&config).is_err());
    assert!(!config.insert_out.exists());
    assert!(!config.delete_out.exists());
}
