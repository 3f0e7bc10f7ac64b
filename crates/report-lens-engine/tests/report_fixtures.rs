use report_lens_engine::{
    citations::extract,
    io::load_report,
    parsing::{parse_report, snapshot},
};

fn fixture_path(name: &str) -> std::path::PathBuf {
    std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

fn outline_fixture(name: &str) -> String {
    let loaded = load_report(&fixture_path(name)).unwrap();
    let parsed = parse_report(&loaded.report);
    snapshot::invariants(&loaded.report, &parsed.blocks);
    snapshot::outline(&parsed.blocks)
}

#[test]
fn fixture_generated_report() {
    insta::assert_snapshot!(outline_fixture("generated_report.txt"), @r#"
    0:1 H2 Vector Databases: Intelligence Report
    1:1 Sep
    2:1 H3! Limitations & Deficiencies
    3:1 Item(-) *Memory cost*: indexes live in RAM ([Benchmark -> https://bench.example/ann]).
    4:1 Item(-) Lock-in risk noted by [Analyst -> https://analyst.example/report].
    5:1 Sep
    6:1 H3 Strengths
    7:1 Item(1.) Fast recall ![chart -> https://img.example/c.png]
    8:1 Sep
    9:4 Table [Tool | Critical Flaw] {Alpha | [No HA -> https://alpha.example/docs] / Beta | Cost}
    13:1 Sep
    14:3 Code(mermaid) ["graph TD"]
    "#);
}

#[test]
fn fixture_malformed_report_degrades_to_text() {
    insta::assert_snapshot!(outline_fixture("malformed_report.md"), @r#"
    0:1 Para # Top level heading is not recognized
    1:1 Para ##No space after hashes
    3:1 Para **unclosed bold and [label](unclosed
    4:3 Code() ["| inside | fence |", ""]
    "#);
}

#[test]
fn scratchpad_is_kept_apart_from_report() {
    let loaded = load_report(&fixture_path("generated_report.txt")).unwrap();
    assert_eq!(
        loaded.scratchpad,
        "1. Deconstruct the query.\n2. Plan the comparison table."
    );
    assert!(!loaded.report.contains("scratchpad"));
}

#[test]
fn fixture_citations_skip_images() {
    let loaded = load_report(&fixture_path("generated_report.txt")).unwrap();
    let summary: Vec<String> = extract(&loaded.report)
        .iter()
        .map(|c| format!("{} {} {}", c.id, c.title, c.url))
        .collect();
    insta::assert_snapshot!(summary.join("\n"), @r"
    cit-0 Benchmark https://bench.example/ann
    cit-1 Analyst https://analyst.example/report
    cit-2 No HA https://alpha.example/docs
    ");
}
