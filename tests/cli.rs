use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::io::{Read, Write};
use std::path::Path;
use tempfile::{tempdir, TempDir};

fn filter_corpus() -> Command {
    Command::new(env!("CARGO_BIN_EXE_filter-corpus"))
}

fn write_gzip(path: &Path, text: &str) {
    let mut enc = flate2::write::GzEncoder::new(
        fs::File::create(path).unwrap(),
        flate2::Compression::default(),
    );
    enc.write_all(text.as_bytes()).unwrap();
    enc.finish().unwrap();
}

fn read_gzip(path: &Path) -> String {
    let mut text = String::new();
    flate2::read::GzDecoder::new(fs::File::open(path).unwrap())
        .read_to_string(&mut text)
        .unwrap();
    text
}

fn read_bzip2(path: &Path) -> String {
    let mut text = String::new();
    bzip2::read::BzDecoder::new(fs::File::open(path).unwrap())
        .read_to_string(&mut text)
        .unwrap();
    text
}

fn corpus(en: &str, de: &str) -> TempDir {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("in.en"), en).unwrap();
    fs::write(dir.path().join("in.de"), de).unwrap();
    dir
}

#[test]
fn shows_help() {
    filter_corpus()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--max-ratio"))
        .stdout(predicate::str::contains("--length"));
}

#[test]
fn filters_and_prints_summary() {
    let dir = corpus("a b c\na\n", "x y z\nx y z w w w w w w w w w w\n");

    filter_corpus()
        .current_dir(dir.path())
        .args(["in.en", "in.de", "out.en", "out.de"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "          processed:          2          4         16",
        ))
        .stdout(predicate::str::contains(
            "           retained:          1          3          3",
        ))
        .stdout(predicate::str::contains(
            "          violations  too short   too long  ratio > 9",
        ))
        .stdout(predicate::str::contains(
            "       filtered out:          1          1         13",
        ))
        .stdout(predicate::str::contains(
            "          segment 2:          0          0          1",
        ));

    assert_eq!(fs::read_to_string(dir.path().join("out.en")).unwrap(), "a b c\n");
    assert_eq!(fs::read_to_string(dir.path().join("out.de")).unwrap(), "x y z\n");
    assert!(!dir.path().join("out.en_").exists());
    assert!(!dir.path().join("out.de_").exists());
}

#[test]
fn custom_length_and_ratio() {
    let dir = corpus("a b\na b c d e f\na b c\n", "x y\nx y z\nx\n");

    filter_corpus()
        .current_dir(dir.path())
        .args(["-L", "2-5", "-r", "2", "in.en", "in.de", "out.en", "out.de"])
        .assert()
        .success()
        .stdout(predicate::str::contains("ratio > 2"))
        .stdout(predicate::str::contains(
            "          segment 1:          0          1          1",
        ))
        .stdout(predicate::str::contains(
            "          segment 2:          1          0          0",
        ));

    assert_eq!(fs::read_to_string(dir.path().join("out.en")).unwrap(), "a b\n");
    assert_eq!(fs::read_to_string(dir.path().join("out.de")).unwrap(), "x y\n");
}

#[test]
fn retained_output_passes_unchanged() {
    let dir = corpus(
        "a b c\n\na b c d e f g h i j k\nein Satz\n",
        "x y z\nx\nx\nzwei Worte\n",
    );

    filter_corpus()
        .current_dir(dir.path())
        .args(["in.en", "in.de", "out.en", "out.de"])
        .assert()
        .success();

    filter_corpus()
        .current_dir(dir.path())
        .args(["out.en", "out.de", "again.en", "again.de"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "       filtered out:          0          0          0",
        ));

    assert_eq!(
        fs::read(dir.path().join("again.en")).unwrap(),
        fs::read(dir.path().join("out.en")).unwrap()
    );
    assert_eq!(
        fs::read(dir.path().join("again.de")).unwrap(),
        fs::read(dir.path().join("out.de")).unwrap()
    );
}

#[test]
fn compressed_inputs_and_outputs() {
    let dir = tempdir().unwrap();
    write_gzip(&dir.path().join("in.en.gz"), "a b c\na\n");
    fs::write(dir.path().join("in.de"), "x y z\nx y z w w w w w w w w w w\n").unwrap();

    filter_corpus()
        .current_dir(dir.path())
        .args(["in.en.gz", "in.de", "out.en.bz2", "out.de.gz"])
        .assert()
        .success();

    assert_eq!(read_bzip2(&dir.path().join("out.en.bz2")), "a b c\n");
    assert_eq!(read_gzip(&dir.path().join("out.de.gz")), "x y z\n");
}

#[test]
fn verbose_prints_progress() {
    let lines = "w w\n".repeat(50_000);
    let dir = corpus(&lines, &lines);

    filter_corpus()
        .current_dir(dir.path())
        .args(["-v", "in.en", "in.de", "out.en", "out.de"])
        .env("RUST_LOG", "off")
        .assert()
        .success()
        .stderr(predicate::str::contains(format!("{}        50K\n", ".".repeat(49))));
}

#[test]
fn malformed_length_fails_before_io() {
    let dir = corpus("a\n", "x\n");

    filter_corpus()
        .current_dir(dir.path())
        .args(["--length", "1to120", "in.en", "in.de", "out.en", "out.de"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("1to120"));

    assert!(!dir.path().join("out.en").exists());
    assert!(!dir.path().join("out.en_").exists());
}

#[test]
fn output_whose_temporary_name_is_an_input_is_refused() {
    let dir = corpus("a b\nc d\n", "");
    fs::write(dir.path().join("corpus.de_"), "x y\nz w\n").unwrap();

    filter_corpus()
        .current_dir(dir.path())
        .args(["in.en", "corpus.de_", "out.en", "corpus.de"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("corpus.de_"));

    assert_eq!(
        fs::read_to_string(dir.path().join("corpus.de_")).unwrap(),
        "x y\nz w\n"
    );
    assert!(!dir.path().join("corpus.de").exists());
    assert!(!dir.path().join("out.en").exists());
    assert!(!dir.path().join("out.en_").exists());
}

#[test]
fn missing_input_is_reported_with_path() {
    let dir = corpus("a\n", "x\n");

    filter_corpus()
        .current_dir(dir.path())
        .args(["in.en", "nope.de", "out.en", "out.de"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("nope.de"));

    assert!(!dir.path().join("out.en").exists());
    assert!(!dir.path().join("out.de").exists());
}

#[test]
fn corrupt_compressed_input_leaves_existing_outputs() {
    let dir = corpus("a b\n", "");
    fs::write(dir.path().join("in.de.gz"), "this is not gzip\n").unwrap();
    fs::write(dir.path().join("out.en"), "keep me\n").unwrap();

    filter_corpus()
        .current_dir(dir.path())
        .args(["in.en", "in.de.gz", "out.en", "out.de"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("in.de.gz"));

    assert_eq!(fs::read_to_string(dir.path().join("out.en")).unwrap(), "keep me\n");
    assert!(!dir.path().join("out.de").exists());
    assert!(!dir.path().join("out.en_").exists());
}

#[test]
fn strict_mode_rejects_unequal_line_counts() {
    let dir = corpus("a\nb\nc\n", "x\ny\n");

    filter_corpus()
        .current_dir(dir.path())
        .args(["--strict", "in.en", "in.de", "out.en", "out.de"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("misaligned"));

    assert!(!dir.path().join("out.en").exists());

    filter_corpus()
        .current_dir(dir.path())
        .args(["in.en", "in.de", "out.en", "out.de"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "          processed:          3          3          2",
        ));
}
