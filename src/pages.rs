//! The two tutorial pages, as data.
//!
//! Each example builds its struct, exercises the wrapper once, and records
//! what it would print. The playground binary does the printing.

use chrono::NaiveDate;
use serde_json::{json, Value};

use crate::config::PlaygroundConfig;
use crate::models::{Exam, Name, Person, PlainName, Review};
use crate::policies::{AllCaps, Percent, Trimmed, UsDate};

#[derive(Debug, Clone, PartialEq)]
pub struct Example {
    pub title: &'static str,
    pub summary: &'static str,
    pub lines: Vec<String>,
    /// The example's struct, serialized as a reader sees it.
    pub data: Value,
}

impl Example {
    fn new(title: &'static str, summary: &'static str, lines: Vec<String>, data: Value) -> Self {
        Example {
            title,
            summary,
            lines,
            data,
        }
    }
}

pub fn introduction() -> Vec<&'static str> {
    vec![
        "Custom Property Wrappers",
        "A property wrapper owns a field's storage and decides what reads and writes see.",
        "In Rust that is a WrappedField<T, P>: the policy P corrects values on write or on read,",
        "and policies that implement Project also offer a derived, read-only projection.",
        "Pages: wrapped (wrappedValue) and projected (projectedValue).",
    ]
}

pub fn wrapped_value_page(config: &PlaygroundConfig) -> Vec<Example> {
    let mut examples = Vec::new();

    let mut me = PlainName::new("Stewart", "Lynch");
    me.set_first_name("Stewart");
    examples.push(Example::new(
        "Capitalize properties",
        "Always return and print out the name in all caps",
        vec![format!("{} {}", me.first_name(), me.last_name())],
        json!(me),
    ));

    let me = Name::new("Stewart", "Lynch", AllCaps);
    examples.push(Example::new(
        "Introducing Property Wrappers",
        "The same upper-casing, moved into the field",
        vec![me.full()],
        json!(me),
    ));

    let me = Name::new("   Stewart  ", "  Lynch  ", Trimmed::default());
    examples.push(Example::new(
        "Example 2",
        "Always ensure string values are trimmed of leading and trailing whitespace",
        vec![me.full()],
        json!(me),
    ));

    let physics = Exam::new("Stewart", -5, Percent);
    examples.push(Example::new(
        "Example 3",
        "Always ensure that a value is clamped within a range of 0...100",
        vec![physics.score.to_string()],
        json!(physics),
    ));

    let physics = Exam::new("Stewart", 10, config.exam);
    examples.push(Example::new(
        "Example 3.1",
        "Allow input for range of Int limits",
        vec![physics.score.to_string()],
        json!(physics),
    ));

    let physics = Exam::new("Stewart", 0.8, config.exam_ratio);
    examples.push(Example::new(
        "Example 3.2",
        "Allow any numeric type for input",
        vec![physics.score.to_string()],
        json!(physics),
    ));

    examples
}

/// `birth_date` stands in for "now" so the page renders deterministically.
pub fn projected_value_page(config: &PlaygroundConfig, birth_date: NaiveDate) -> Vec<Example> {
    let mut examples = Vec::new();

    let me = Person::new("Stewart", birth_date, UsDate);
    examples.push(Example::new(
        "Example 1",
        "When getting a date value, always print in the US date format MM-dd-yyyy",
        vec![me.birth_date.project(), me.birth_date.to_string()],
        json!({ "person": me, "projected": me.birth_date.project() }),
    ));

    let me = Person::new("Stewart", birth_date, config.birth_date.format.clone());
    examples.push(Example::new(
        "Example 1.1",
        "Allow any date format but default to \"EEEE, MMM d, yyyy\"",
        vec![me.birth_date.project(), me.birth_date.to_string()],
        json!({ "person": me, "projected": me.birth_date.project() }),
    ));

    let earls = Review::with_symbols(
        "Earls",
        5,
        4,
        config.review.ambiance.clone(),
        config.review.food.clone(),
    );
    examples.push(Example::new(
        "Example 2",
        "Display ratings as a string of emojis",
        vec![earls.ambiance.project(), earls.food.project()],
        json!({
            "review": earls,
            "projected": { "ambiance": earls.ambiance.project(), "food": earls.food.project() },
        }),
    ));

    examples
}
