//! Page layout description: the controls offered and the chart placeholders.

use serde::{Deserialize, Serialize};

use crate::bridge::graph::{self, ControlId, OutputId};
use crate::models::{PayloadRange, ALL_SITES};
use crate::table::LaunchTable;

pub const DASHBOARD_TITLE: &str = "SpaceX Launch Records Dashboard";
pub const SITE_PLACEHOLDER: &str = "Select a Launch Site here";
pub const PAYLOAD_LABEL: &str = "Payload range (Kg):";
const PAYLOAD_MARKS: [f64; 3] = [2500.0, 5000.0, 7500.0];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardLayout {
    pub title: String,
    pub site_dropdown: Dropdown,
    pub payload_label: String,
    pub payload_slider: RangeSlider,
    pub charts: Vec<OutputId>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dropdown {
    pub id: ControlId,
    pub options: Vec<DropdownOption>,
    pub value: String,
    pub placeholder: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DropdownOption {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RangeSlider {
    pub id: ControlId,
    pub min: f64,
    pub max: f64,
    pub value: PayloadRange,
    pub marks: Vec<SliderMark>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SliderMark {
    pub value: f64,
    pub label: String,
}

impl DashboardLayout {
    /// Layout for `table`: one selector option per site plus "All Sites",
    /// and a slider spanning the table's payload bounds.
    pub fn for_table(table: &LaunchTable) -> Self {
        let options = std::iter::once(ALL_SITES)
            .chain(table.sites().iter().map(String::as_str))
            .map(|site| DropdownOption {
                label: site.to_string(),
                value: site.to_string(),
            })
            .collect();

        let bounds = table.payload_bounds();
        let marks = PAYLOAD_MARKS
            .into_iter()
            .filter(|&mark| bounds.contains(mark))
            .map(|mark| SliderMark {
                value: mark,
                label: format!("{mark} (Kg)"),
            })
            .collect();

        Self {
            title: DASHBOARD_TITLE.to_string(),
            site_dropdown: Dropdown {
                id: ControlId::SiteDropdown,
                options,
                value: ALL_SITES.to_string(),
                placeholder: SITE_PLACEHOLDER.to_string(),
            },
            payload_label: PAYLOAD_LABEL.to_string(),
            payload_slider: RangeSlider {
                id: ControlId::PayloadSlider,
                min: bounds.low(),
                max: bounds.high(),
                value: bounds,
                marks,
            },
            charts: graph::all_outputs().collect(),
        }
    }
}
