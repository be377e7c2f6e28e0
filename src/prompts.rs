//! Output targets and their system instructions.

use serde::{Deserialize, Serialize};

/// What kind of artifact the model is asked to produce. Html is the only
/// directly renderable kind; component targets need an external dev
/// environment to preview.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputTarget {
    #[default]
    Html,
    React,
    Vue,
}

const HTML_INSTRUCTION: &str = "You are an expert front-end developer. \
    Generate a single, complete, self-contained HTML document for the user's request. \
    Inline all CSS in a <style> tag and all JavaScript in a <script> tag. \
    Use no external resources. \
    Respond with the raw HTML only: no markdown fences, no commentary.";

const REACT_INSTRUCTION: &str = "You are an expert React developer. \
    Generate a single self-contained React function component in one file for the user's request. \
    Use only React itself, with inline styles or a CSS-in-JS object. \
    Export the component as the default export. \
    Respond with the raw source code only: no markdown fences, no commentary.";

const VUE_INSTRUCTION: &str = "You are an expert Vue developer. \
    Generate a single self-contained Vue single-file component for the user's request. \
    Keep template, script and style in the one file and use no external resources. \
    Respond with the raw source code only: no markdown fences, no commentary.";

impl OutputTarget {
    pub const ALL: [OutputTarget; 3] =
        [OutputTarget::Html, OutputTarget::React, OutputTarget::Vue];

    pub fn as_str(&self) -> &'static str {
        match self {
            OutputTarget::Html => "html",
            OutputTarget::React => "react",
            OutputTarget::Vue => "vue",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            OutputTarget::Html => "HTML",
            OutputTarget::React => "React",
            OutputTarget::Vue => "Vue",
        }
    }

    /// Whether the generated artifact can be projected straight into the
    /// preview sandbox.
    pub fn is_renderable(&self) -> bool {
        matches!(self, OutputTarget::Html)
    }

    /// The fixed system instruction sent as the first outbound message.
    pub fn system_instruction(&self) -> &'static str {
        match self {
            OutputTarget::Html => HTML_INSTRUCTION,
            OutputTarget::React => REACT_INSTRUCTION,
            OutputTarget::Vue => VUE_INSTRUCTION,
        }
    }
}

impl std::fmt::Display for OutputTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for OutputTarget {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "html" => Ok(OutputTarget::Html),
            "react" => Ok(OutputTarget::React),
            "vue" => Ok(OutputTarget::Vue),
            other => Err(format!("Unknown output target: {other}")),
        }
    }
}

/// Starter prompts shown in the empty-state gallery.
pub const EXAMPLE_PROMPTS: [&str; 4] = [
    "A landing page for a coffee subscription service",
    "A pricing table with three tiers and a highlighted middle tier",
    "A personal portfolio page with a dark theme",
    "A signup form with inline validation messages",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_html_is_renderable() {
        assert!(OutputTarget::Html.is_renderable());
        assert!(!OutputTarget::React.is_renderable());
        assert!(!OutputTarget::Vue.is_renderable());
    }

    #[test]
    fn round_trips_through_str() {
        for target in OutputTarget::ALL {
            assert_eq!(target.as_str().parse::<OutputTarget>().unwrap(), target);
        }
        assert!("svelte".parse::<OutputTarget>().is_err());
    }

    #[test]
    fn every_instruction_forbids_fences() {
        for target in OutputTarget::ALL {
            assert!(target.system_instruction().contains("no markdown fences"));
        }
    }
}
