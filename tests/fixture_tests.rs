//! Data-driven tests for the three transforms: every `tests/data/*/*.json`
//! file is a suite of input/output pairs.

use glob::glob;
use prose_html::{auto_paragraphs, compose_more, summarize, AnchorSpec};
use serde_derive::Deserialize;
use std::fs::File;
use std::io::BufReader;

#[derive(Deserialize)]
#[serde(bound(deserialize = "C: serde::Deserialize<'de>"))]
struct Suite<C> {
    #[serde(default)]
    tests: Vec<C>,
}

macro_rules! read_tests {
    ($case:ty, $path:expr) => {
        glob(concat!(env!("CARGO_MANIFEST_DIR"), "/tests/data/", $path))
            .unwrap()
            .flat_map(|path| {
                let file = File::open(path.unwrap()).unwrap();

                serde_json::from_reader::<_, Suite<$case>>(BufReader::new(file))
                    .unwrap()
                    .tests
            })
    };
}

#[derive(Deserialize)]
struct AutoParagraphsCase {
    description: String,
    input: String,
    output: String,
}

#[test]
fn auto_paragraphs_fixtures() {
    for case in read_tests!(AutoParagraphsCase, "auto_paragraphs/*.json") {
        assert_eq!(
            auto_paragraphs(&case.input),
            case.output,
            "{}\ninput: {:?}",
            case.description,
            case.input
        );
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct SummarizeCase {
    description: String,
    input: String,
    max_words: u32,
    max_paragraphs: u32,
    output: String,
}

#[test]
fn summarize_fixtures() {
    for case in read_tests!(SummarizeCase, "summarize/*.json") {
        assert_eq!(
            summarize(&case.input, case.max_words, case.max_paragraphs),
            case.output,
            "{}\ninput: {:?}",
            case.description,
            case.input
        );
    }
}

const fn default_true() -> bool {
    true
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct MoreCase {
    description: String,
    input: String,

    #[serde(default = "default_true")]
    marker_split_allowed: bool,

    href: String,
    text: String,

    #[serde(default)]
    title: Option<String>,

    #[serde(default)]
    class: Option<String>,

    #[serde(default)]
    max_words: Option<u32>,

    #[serde(default)]
    max_paragraphs: Option<u32>,

    output: String,
}

#[test]
fn more_fixtures() {
    for case in read_tests!(MoreCase, "more/*.json") {
        let mut link = AnchorSpec::new(case.href.clone(), case.text.clone());

        if let Some(title) = &case.title {
            link = link.title(title.clone());
        }

        if let Some(class) = &case.class {
            link = link.class(class.clone());
        }

        let actual = compose_more(
            &case.input,
            case.marker_split_allowed,
            &link,
            case.max_words,
            case.max_paragraphs,
        );

        assert_eq!(
            actual, case.output,
            "{}\ninput: {:?}",
            case.description, case.input
        );
    }
}
