use super::{for_each_test_file, get_test_file_reader};
use html_tag_validator::{Defect, DefectKind, Settings};
use serde::de::{Deserialize, Deserializer, Error as DeError};
use serde_derive::Deserialize;
use serde_json::from_reader;
use std::io::prelude::*;

fn read_data_file<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let name = String::deserialize(deserializer)?;
    let mut data = String::new();

    get_test_file_reader(&format!("fixtures/{name}"))
        .read_to_string(&mut data)
        .unwrap();

    Ok(data)
}

fn parse_defect_kind<'de, D>(deserializer: D) -> Result<DefectKind, D::Error>
where
    D: Deserializer<'de>,
{
    let kind = String::deserialize(deserializer)?;

    Ok(match kind.as_str() {
        "UnclosedTag" => DefectKind::UnclosedTag,
        "UnterminatedComment" => DefectKind::UnterminatedComment,
        "MissingSelfClosingSlash" => DefectKind::MissingSelfClosingSlash,
        "UnexpectedEndTag" => DefectKind::UnexpectedEndTag,
        _ => return Err(DeError::custom(format!("Unknown defect kind: `{kind}`"))),
    })
}

#[derive(Deserialize, Default, Clone, Copy)]
#[serde(deny_unknown_fields)]
struct TestSettings {
    #[serde(default)]
    strict_self_closing_tags: bool,
}

#[derive(Deserialize, Clone)]
#[serde(deny_unknown_fields)]
struct ExpectedDefect {
    #[serde(deserialize_with = "parse_defect_kind")]
    kind: DefectKind,
    name: String,
    line: usize,
    column: usize,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct TestCaseData {
    description: String,

    #[serde(deserialize_with = "read_data_file")]
    src: String,

    #[serde(default)]
    settings: TestSettings,

    expected: Option<ExpectedDefect>,
}

pub struct TestCase {
    pub description: String,
    pub src: String,
    pub settings: Settings,
    pub expected: Option<Defect>,
}

impl From<TestCaseData> for TestCase {
    fn from(data: TestCaseData) -> Self {
        TestCase {
            description: data.description,
            src: data.src,
            settings: Settings::new()
                .strict_self_closing_tags(data.settings.strict_self_closing_tags),
            expected: data.expected.map(|e| Defect {
                kind: e.kind,
                name: e.name,
                line: e.line,
                column: e.column,
            }),
        }
    }
}

pub fn get_test_cases() -> Vec<TestCase> {
    let mut test_cases = Vec::new();

    for_each_test_file("fixtures/*-info.json", &mut |file| {
        test_cases.push(from_reader::<_, TestCaseData>(file).unwrap().into());
    });

    test_cases
}
