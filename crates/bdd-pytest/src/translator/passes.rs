//! The five rendering passes.

use tracing::debug;

use crate::model::{Background, Scenario, Specification, Step};
use crate::naming::{class_name, fixture_name, snake_case};
use crate::template::Template;

use super::Output;

/// Indentation of members declared inside the test class.
const MEMBER_DEPTH: usize = 1;

pub(super) fn header(out: &mut Output<'_>) {
    debug!(pass = "header", "rendering pass");
    let header = &out.template().header;
    out.raw(header);
}

pub(super) fn container(out: &mut Output<'_>, spec: &Specification, title: &str) {
    debug!(pass = "container", title, "rendering pass");
    let template = out.template();
    for tag in spec.tag_names() {
        out.line(0, &template.tag(tag));
    }
    out.line(0, &template.feature(title));
    out.line(0, &Template::class(&class_name(title)));
}

pub(super) fn description(out: &mut Output<'_>, spec: &Specification) {
    let Some(description) = spec.description.as_ref().filter(|d| !d.is_empty()) else {
        debug!(pass = "description", "no description, skipping pass");
        return;
    };
    debug!(pass = "description", "rendering pass");
    out.line(MEMBER_DEPTH, &Template::docstring(&description.content));
}

pub(super) fn scenarios(out: &mut Output<'_>, spec: &Specification) {
    debug!(pass = "scenarios", count = spec.scenarios.len(), "rendering pass");
    for scenario in &spec.scenarios {
        out.blank();
        self::scenario(out, scenario);
    }
}

fn scenario(out: &mut Output<'_>, scenario: &Scenario) {
    let template = out.template();
    for tag in scenario.tag_names() {
        out.line(MEMBER_DEPTH, &template.tag(tag));
    }
    out.line(MEMBER_DEPTH, &template.title(&scenario.title.content));

    let name = format!("test_{}", snake_case(&scenario.title.content));
    let params = parametrize(out, scenario);
    out.line(MEMBER_DEPTH, &Template::function(&name, &params));
    body(out, &scenario.steps);
}

/// Emit the parametrisation annotation, returning the parameter names.
fn parametrize(out: &mut Output<'_>, scenario: &Scenario) -> Vec<String> {
    let Some((examples, header)) = scenario
        .examples
        .as_ref()
        .and_then(|examples| examples.header().map(|header| (examples, header)))
    else {
        return Vec::new();
    };
    let rows: Vec<Vec<&str>> = examples
        .rows()
        .iter()
        .map(|row| row.columns.iter().map(String::as_str).collect())
        .collect();
    let template = out.template();
    out.line(MEMBER_DEPTH, &template.parametrize(header, &rows));
    header.to_vec()
}

pub(super) fn background(out: &mut Output<'_>, spec: &Specification) {
    let Some(Background { title, steps }) = spec.background.as_ref() else {
        debug!(pass = "background", "no background, skipping pass");
        return;
    };
    debug!(pass = "background", steps = steps.len(), "rendering pass");
    let template = out.template();
    out.blank();
    out.line(MEMBER_DEPTH, &template.fixture_annotation);
    out.line(
        MEMBER_DEPTH,
        &Template::function(&fixture_name(&title.content), &[]),
    );
    body(out, steps);
}

fn body(out: &mut Output<'_>, steps: &[Step]) {
    let depth = MEMBER_DEPTH + 1;
    if steps.is_empty() {
        let placeholder = &out.template().placeholder;
        out.line(depth, placeholder);
        return;
    }
    for step in steps {
        self::step(out, step, depth);
    }
}

fn step(out: &mut Output<'_>, step: &Step, depth: usize) {
    let template = out.template();
    out.line(depth, &template.step(&step.title.clause, &step.title.content));
    out.line(depth + 1, &template.placeholder);
}
