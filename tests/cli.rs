use std::fs;
use std::path::Path;
use std::process::{Command, Output};

fn bsp_mst(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_bsp_mst"))
        .args(args)
        .env("RUST_LOG", "warn")
        .output()
        .unwrap()
}

fn path_str(p: &Path) -> &str {
    p.to_str().unwrap()
}

#[test]
fn run_prints_weight_and_writes_components() {
    let tmp = tempfile::tempdir().unwrap();
    let input = tmp.path().join("triangle.edgelist");
    fs::write(
        &input,
        "1 2 5.0\n2 1 5.0\n2 3 1.0\n3 2 1.0\n1 3 10.0\n3 1 10.0\n",
    )
    .unwrap();
    let out_dir = tmp.path().join("out");

    let output = bsp_mst(&[
        "run",
        "--input",
        path_str(&input),
        "--output",
        path_str(&out_dir),
        "--threads",
        "2",
        "--partitions",
        "3",
    ]);
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    assert_eq!(String::from_utf8(output.stdout).unwrap(), "MST_WEIGHT=6.000000\n");
    let components = fs::read_to_string(out_dir.join("part-00000")).unwrap();
    assert_eq!(components, "1\t1\n2\t1\n3\t1\n");
}

#[test]
fn conversions_chain_into_a_run() {
    let tmp = tempfile::tempdir().unwrap();
    let gr = tmp.path().join("g.gr");
    let mtx = tmp.path().join("g.mtx");
    let edges = tmp.path().join("g.edgelist");
    fs::write(&gr, "c tiny\np sp 4 5\na 1 2 4\na 2 1 4\na 2 3 1\na 3 4 2\na 1 4 9\n").unwrap();

    let status = bsp_mst(&["gr-to-mtx", "--input", path_str(&gr), "--output", path_str(&mtx)]);
    assert!(status.status.success());
    let status = bsp_mst(&[
        "mtx-to-edge-list",
        "--input",
        path_str(&mtx),
        "--output",
        path_str(&edges),
    ]);
    assert!(status.status.success());

    let output = bsp_mst(&["run", "--input", path_str(&edges), "--compress-until-stable"]);
    assert!(output.status.success());
    assert_eq!(String::from_utf8(output.stdout).unwrap(), "MST_WEIGHT=7.000000\n");
}

#[test]
fn malformed_input_fails_with_line_number() {
    let tmp = tempfile::tempdir().unwrap();
    let input = tmp.path().join("bad.edgelist");
    fs::write(&input, "1 2 5.0\n2 1\n").unwrap();
    let output = bsp_mst(&["run", "--input", path_str(&input)]);
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("line 2"));
}

#[test]
fn conversion_read_failure_names_the_input() {
    // A directory opens fine but cannot be read line by line.
    let tmp = tempfile::tempdir().unwrap();
    let mtx = tmp.path().join("g.mtx");
    let output = bsp_mst(&[
        "gr-to-mtx",
        "--input",
        path_str(tmp.path()),
        "--output",
        path_str(&mtx),
    ]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains(path_str(tmp.path())), "{stderr}");
    assert!(stderr.contains("line 1"), "{stderr}");
}

#[test]
fn conversion_write_failure_names_the_output() {
    let full = Path::new("/dev/full");
    if !full.exists() {
        return;
    }
    let tmp = tempfile::tempdir().unwrap();
    let mtx = tmp.path().join("g.mtx");
    fs::write(&mtx, "%%MatrixMarket matrix coordinate real symmetric\n2 2 1\n2 1 3\n").unwrap();
    let output = bsp_mst(&[
        "mtx-to-edge-list",
        "--input",
        path_str(&mtx),
        "--output",
        path_str(full),
    ]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("failed to write /dev/full"), "{stderr}");
}
