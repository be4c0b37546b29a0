//! Static dependency graph between page controls and chart outputs.

use serde::{Deserialize, Serialize};

/// An input control on the page. Serialized as the element id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ControlId {
    SiteDropdown,
    PayloadSlider,
}

/// A chart placeholder on the page. Serialized as the element id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OutputId {
    SuccessPieChart,
    SuccessPayloadScatterChart,
}

/// An output and the controls whose values it is computed from.
#[derive(Debug, Clone, Copy)]
pub struct Dependency {
    pub output: OutputId,
    pub inputs: &'static [ControlId],
}

impl Dependency {
    pub fn depends_on(&self, control: ControlId) -> bool {
        self.inputs.contains(&control)
    }
}

pub const DEPENDENCIES: &[Dependency] = &[
    Dependency {
        output: OutputId::SuccessPieChart,
        inputs: &[ControlId::SiteDropdown],
    },
    Dependency {
        output: OutputId::SuccessPayloadScatterChart,
        inputs: &[ControlId::SiteDropdown, ControlId::PayloadSlider],
    },
];

/// Outputs to recompute when `changed` emits a new value, in declaration order.
pub fn affected_outputs(changed: ControlId) -> impl Iterator<Item = OutputId> {
    DEPENDENCIES
        .iter()
        .filter(move |dep| dep.depends_on(changed))
        .map(|dep| dep.output)
}

pub fn all_outputs() -> impl Iterator<Item = OutputId> {
    DEPENDENCIES.iter().map(|dep| dep.output)
}
