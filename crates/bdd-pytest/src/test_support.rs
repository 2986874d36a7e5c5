//! Builders for specification trees.

use crate::model::{Background, Examples, Row, Scenario, Specification, Step, Tags, Text};

/// Build a [`Step`] from a keyword and text.
#[must_use]
pub fn step(clause: &str, content: &str) -> Step {
    Step::new(clause, content)
}

/// Fluent builder for a [`Scenario`].
#[derive(Debug, Clone, Default)]
pub struct ScenarioBuilder {
    scenario: Scenario,
}

impl ScenarioBuilder {
    /// Start a scenario with the given title.
    #[must_use]
    pub fn new(title: &str) -> Self {
        Self {
            scenario: Scenario {
                title: Text::new(title),
                ..Scenario::default()
            },
        }
    }

    /// Attach tags.
    #[must_use]
    pub fn with_tags(mut self, tags: &[&str]) -> Self {
        self.scenario.tags = Some(tags.iter().copied().collect::<Tags>());
        self
    }

    /// Attach an examples table; the first row is the header.
    #[must_use]
    pub fn with_examples(mut self, rows: &[&[&str]]) -> Self {
        self.scenario.examples = Some(Examples {
            table: rows
                .iter()
                .map(|row| row.iter().copied().collect::<Row>())
                .collect(),
        });
        self
    }

    /// Append a step.
    #[must_use]
    pub fn with_step(mut self, clause: &str, content: &str) -> Self {
        self.scenario.steps.push(step(clause, content));
        self
    }

    /// Finish the scenario.
    #[must_use]
    pub fn build(self) -> Scenario {
        self.scenario
    }
}

/// Fluent builder for a [`Specification`].
#[derive(Debug, Clone, Default)]
pub struct SpecBuilder {
    spec: Specification,
}

impl SpecBuilder {
    /// Start a specification with the given title.
    #[must_use]
    pub fn new(title: &str) -> Self {
        Self {
            spec: Specification {
                title: Some(Text::new(title)),
                ..Specification::default()
            },
        }
    }

    /// Start a specification without a title.
    #[must_use]
    pub fn untitled() -> Self {
        Self::default()
    }

    /// Attach feature-level tags.
    #[must_use]
    pub fn with_tags(mut self, tags: &[&str]) -> Self {
        self.spec.tags = Some(tags.iter().copied().collect::<Tags>());
        self
    }

    /// Attach a description.
    #[must_use]
    pub fn with_description(mut self, description: &str) -> Self {
        self.spec.description = Some(Text::new(description));
        self
    }

    /// Append a scenario.
    #[must_use]
    pub fn with_scenario(mut self, scenario: ScenarioBuilder) -> Self {
        self.spec.scenarios.push(scenario.build());
        self
    }

    /// Attach a background.
    #[must_use]
    pub fn with_background(mut self, title: &str, steps: Vec<Step>) -> Self {
        self.spec.background = Some(Background {
            title: Text::new(title),
            steps,
        });
        self
    }

    /// Finish the specification.
    #[must_use]
    pub fn build(self) -> Specification {
        self.spec
    }
}
