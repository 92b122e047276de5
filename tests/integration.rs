//! Integration tests for memspace


use harness::{TestTree, branch, child_lines, names_in_read_order, run_memspace};

#[test]
fn test_default_run_shows_one_level() {
    let tree = TestTree::sample();

    let (stdout, _stderr, success) = run_memspace(tree.path(), &[]);
    assert!(success, "memspace should succeed");

    let root_line = stdout.lines().next().unwrap();
    assert_eq!(root_line, "📁. [10.00B]");

    let order = names_in_read_order(tree.path());
    let expected: Vec<String> = order
        .iter()
        .map(|name| match name.as_str() {
            "a" => format!("{}📄a [2.00B]", branch(&order, "a")),
            "b" => format!("{}📄b [3.00B]", branch(&order, "b")),
            _ => format!("{}📁c [5.00B]", branch(&order, "c")),
        })
        .collect();
    assert_eq!(child_lines(&stdout), expected, "only direct children in read order");
}

#[test]
fn test_only_last_entry_read_closes_the_level() {
    let tree = TestTree::new();
    for name in ["zeta", "alpha", "mid", "Beta", "0", "k"] {
        tree.add_file(name, 1);
    }

    let (stdout, _stderr, success) = run_memspace(tree.path(), &[]);
    assert!(success);

    let order = names_in_read_order(tree.path());
    let lines = child_lines(&stdout);
    assert_eq!(lines.len(), order.len(), "{}", stdout);
    for (i, (line, name)) in lines.iter().zip(&order).enumerate() {
        let marker = if i == order.len() - 1 { "└-" } else { "│-" };
        assert_eq!(*line, format!("{}📄{} [1.00B]", marker, name));
    }
}

/// Expected recursive output for the sample tree, following read order.
fn sample_recursive_lines(tree: &TestTree) -> Vec<String> {
    let root_order = names_in_read_order(tree.path());
    let c_order = names_in_read_order(&tree.path().join("c"));

    let mut lines = Vec::new();
    for name in &root_order {
        match name.as_str() {
            "a" => lines.push(format!("{}📄a [2.00B]", branch(&root_order, "a"))),
            "b" => lines.push(format!("{}📄b [3.00B]", branch(&root_order, "b"))),
            _ => {
                lines.push(format!("{}📁c [5.00B]", branch(&root_order, "c")));
                for inner in &c_order {
                    if inner == "c.txt" {
                        lines.push(format!("│ {}📄c.txt [2.00B]", branch(&c_order, "c.txt")));
                    } else {
                        lines.push(format!("│ {}📁d [3.00B]", branch(&c_order, "d")));
                        lines.push("│ │ └-📄d.dat [3.00B]".to_string());
                    }
                }
            }
        }
    }
    lines
}

#[test]
fn test_recursive_shows_everything() {
    let tree = TestTree::sample();

    let (stdout, _stderr, success) = run_memspace(tree.path(), &["-r"]);
    assert!(success);
    assert_eq!(child_lines(&stdout).len(), 6, "{}", stdout);
    assert_eq!(child_lines(&stdout), sample_recursive_lines(&tree));
}

#[test]
fn test_path_flag() {
    let tree = TestTree::sample();
    let target = tree.path().join("c");

    let (stdout, _stderr, success) =
        run_memspace(tree.path(), &["--path", target.to_str().unwrap(), "--recursive"]);
    assert!(success);
    assert_eq!(stdout.lines().next().unwrap(), "📁c [5.00B]");
    assert_eq!(child_lines(&stdout).len(), 3, "{}", stdout);
}

#[test]
fn test_depth_zero() {
    let tree = TestTree::sample();

    let (stdout, _stderr, success) = run_memspace(tree.path(), &["-r", "-e", "0"]);
    assert!(success);
    assert_eq!(child_lines(&stdout).len(), 3, "{}", stdout);
    assert!(!stdout.contains("c.txt"));
}

#[test]
fn test_negative_depth_is_unlimited() {
    let tree = TestTree::sample();

    let (stdout, stderr, success) = run_memspace(tree.path(), &["-r", "--depth", "-1"]);
    assert!(success, "stderr: {}", stderr);
    assert_eq!(child_lines(&stdout).len(), 6, "{}", stdout);
}

#[test]
fn test_threshold() {
    let tree = TestTree::sample();

    let (stdout, _stderr, success) = run_memspace(tree.path(), &["-r", "-t", "3b"]);
    assert!(success);
    assert!(!stdout.contains("📄a "), "a is below threshold: {}", stdout);
    assert!(!stdout.contains("c.txt"), "c.txt is below threshold: {}", stdout);
    assert!(stdout.contains("📄b [3.00B]"));
    assert!(stdout.contains("📁c [5.00B]"));
    assert!(stdout.contains("📁d [3.00B]"));
    assert!(stdout.contains("📄d.dat [3.00B]"));
}

#[test]
fn test_dirs_only() {
    let tree = TestTree::sample();

    let (stdout, _stderr, success) = run_memspace(tree.path(), &["-r", "-d"]);
    assert!(success);
    let lines = child_lines(&stdout);
    assert_eq!(lines.len(), 2, "{}", stdout);
    // Branch markers depend on directory-read order, so only check the tail
    assert!(lines[0].ends_with("-📁c [5.00B]"), "{}", stdout);
    assert!(lines[1].starts_with("│ "));
    assert!(lines[1].ends_with("-📁d [3.00B]"), "{}", stdout);
}

#[test]
fn test_invalid_threshold_fails() {
    let tree = TestTree::sample();

    let (stdout, stderr, success) = run_memspace(tree.path(), &["-t", "1.5MB"]);
    assert!(!success);
    assert!(stdout.is_empty(), "nothing rendered: {}", stdout);
    assert!(stderr.contains("invalid threshold"), "stderr: {}", stderr);
}

#[test]
fn test_empty_threshold_means_none() {
    let tree = TestTree::sample();

    let (stdout, _stderr, success) = run_memspace(tree.path(), &["-r", "-t", ""]);
    assert!(success);
    assert_eq!(child_lines(&stdout), sample_recursive_lines(&tree));
}

#[test]
fn test_memory_report_precedes_tree() {
    let tree = TestTree::sample();

    let (stdout, _stderr, success) = run_memspace(tree.path(), &["-m"]);
    assert!(success);
    let lines: Vec<&str> = stdout.lines().collect();
    assert!(lines[0].starts_with("Size:"), "{}", stdout);
    assert!(lines[1].starts_with("Free:"));
    assert!(lines[2].starts_with("Available:"));
    assert!(lines[3].starts_with("Used:"));
    assert!(lines[4].starts_with("📁"));
}

#[test]
fn test_json_output() {
    let tree = TestTree::sample();

    let (stdout, _stderr, success) = run_memspace(tree.path(), &["--json", "-t", "1tb"]);
    assert!(success);
    let value: serde_json::Value = serde_json::from_str(&stdout).expect("valid JSON");
    assert_eq!(value["root"], true);
    assert_eq!(value["size"], 10);
    // Filters apply to the text view only
    assert_eq!(value["children"].as_array().unwrap().len(), 3);
}
