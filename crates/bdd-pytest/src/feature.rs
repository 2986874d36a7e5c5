//! Conversion of Gherkin `.feature` sources into specification trees.
//!
//! Parsing is delegated to the `gherkin` crate. This module only maps the
//! parsed feature onto [`Specification`]: scenarios nested in `Rule` blocks
//! are flattened into the feature with the rule's tags merged ahead of their
//! own, and multiple `Examples` tables of an outline are concatenated under
//! the header of the first table.

use std::path::Path;

use gherkin::GherkinEnv;
use tracing::{debug, warn};

use crate::error::TranslateError;
use crate::model::{Background, Examples, Row, Scenario, Specification, Step, Tags, Text};

/// Parse Gherkin text into a specification tree.
///
/// # Errors
///
/// Returns [`TranslateError::Feature`] when the text is not valid Gherkin
/// and [`TranslateError::ExamplesHeaderMismatch`] when the examples tables
/// of one outline declare different columns.
pub fn parse_feature_text(text: &str) -> Result<Specification, TranslateError> {
    parse_with_origin(text, Path::new("<memory>"))
}

/// Read and parse a `.feature` file.
///
/// # Errors
///
/// Returns [`TranslateError::Read`] when the file cannot be read, otherwise
/// the errors of [`parse_feature_text`].
pub fn load_feature(path: &Path) -> Result<Specification, TranslateError> {
    let text = std::fs::read_to_string(path).map_err(|source| TranslateError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let mut spec = parse_with_origin(&text, path)?;
    spec.origin = Some(path.to_path_buf());
    Ok(spec)
}

fn normalise_trailing_newline(text: &mut String) {
    if !text.ends_with('\n') {
        text.push('\n');
    }
}

fn parse_with_origin(text: &str, origin: &Path) -> Result<Specification, TranslateError> {
    let mut text = text.to_owned();
    normalise_trailing_newline(&mut text);
    let feature = gherkin::Feature::parse(&text, GherkinEnv::default()).map_err(|source| {
        TranslateError::Feature {
            path: origin.to_path_buf(),
            source,
        }
    })?;
    debug!(
        feature = %feature.name,
        scenarios = feature.scenarios.len(),
        rules = feature.rules.len(),
        "parsed feature"
    );
    convert_feature(&feature)
}

fn convert_feature(feature: &gherkin::Feature) -> Result<Specification, TranslateError> {
    let mut scenarios = Vec::with_capacity(feature.scenarios.len());
    for scenario in &feature.scenarios {
        scenarios.push(convert_scenario(scenario, &[])?);
    }
    for rule in &feature.rules {
        if rule.background.is_some() {
            warn!(
                rule = %rule.name,
                "rule backgrounds have no pytest counterpart; skipping"
            );
        }
        for scenario in &rule.scenarios {
            scenarios.push(convert_scenario(scenario, &rule.tags)?);
        }
    }

    Ok(Specification {
        title: Some(Text::new(feature.name.trim())),
        description: convert_description(feature.description.as_deref()),
        tags: convert_tags(&feature.tags, &[]),
        scenarios,
        background: feature.background.as_ref().map(convert_background),
        origin: None,
    })
}

fn convert_description(description: Option<&str>) -> Option<Text> {
    description
        .map(str::trim)
        .filter(|text| !text.is_empty())
        .map(Text::new)
}

/// Merge tag sets, stripping `@` and dropping repeats while keeping order.
fn convert_tags(base: &[String], own: &[String]) -> Option<Tags> {
    let mut merged: Vec<String> = Vec::with_capacity(base.len() + own.len());
    for tag in base.iter().chain(own) {
        let name = tag.trim_start_matches('@');
        if !merged.iter().any(|existing| existing == name) {
            merged.push(name.to_string());
        }
    }
    (!merged.is_empty()).then_some(Tags { content: merged })
}

fn convert_background(background: &gherkin::Background) -> Background {
    Background {
        title: Text::new(background.name.trim()),
        steps: background.steps.iter().map(convert_step).collect(),
    }
}

fn convert_scenario(
    scenario: &gherkin::Scenario,
    inherited_tags: &[String],
) -> Result<Scenario, TranslateError> {
    Ok(Scenario {
        title: Text::new(scenario.name.trim()),
        tags: convert_tags(inherited_tags, &scenario.tags),
        examples: convert_examples(scenario)?,
        steps: scenario.steps.iter().map(convert_step).collect(),
    })
}

fn convert_examples(scenario: &gherkin::Scenario) -> Result<Option<Examples>, TranslateError> {
    let mut tables = scenario.examples.iter().filter_map(|ex| ex.table.as_ref());
    let Some(first) = tables.next() else {
        return Ok(None);
    };
    let Some((header, first_rows)) = first.rows.split_first() else {
        return Ok(None);
    };

    let mut table: Vec<Row> = Vec::with_capacity(first.rows.len());
    table.push(header.iter().cloned().collect());
    table.extend(first_rows.iter().map(|row| row.iter().cloned().collect()));
    for other in tables {
        let Some((other_header, rows)) = other.rows.split_first() else {
            continue;
        };
        if other_header != header {
            return Err(TranslateError::ExamplesHeaderMismatch {
                scenario: scenario.name.trim().to_string(),
            });
        }
        table.extend(rows.iter().map(|row| row.iter().cloned().collect()));
    }
    Ok(Some(Examples { table }))
}

fn convert_step(step: &gherkin::Step) -> Step {
    Step::new(step.keyword.trim().to_lowercase(), step.value.as_str())
}

#[cfg(test)]
mod tests;
