use serde::{Deserialize, Serialize};

/// Everything a chart placeholder needs to draw, independent of the
/// rendering library.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ChartDescription {
    Pie(PieChart),
    Scatter(ScatterChart),
}

impl ChartDescription {
    pub fn title(&self) -> &str {
        match self {
            ChartDescription::Pie(pie) => &pie.title,
            ChartDescription::Scatter(scatter) => &scatter.title,
        }
    }

    pub fn as_pie(&self) -> Option<&PieChart> {
        match self {
            ChartDescription::Pie(pie) => Some(pie),
            ChartDescription::Scatter(_) => None,
        }
    }

    pub fn as_scatter(&self) -> Option<&ScatterChart> {
        match self {
            ChartDescription::Scatter(scatter) => Some(scatter),
            ChartDescription::Pie(_) => None,
        }
    }

    /// Number of slices or points.
    pub fn len(&self) -> usize {
        match self {
            ChartDescription::Pie(pie) => pie.slices.len(),
            ChartDescription::Scatter(scatter) => scatter.points.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A proportion chart: each slice is a share of the whole.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PieChart {
    pub title: String,
    pub slices: Vec<PieSlice>,
}

impl PieChart {
    pub fn total(&self) -> u64 {
        self.slices.iter().map(|s| s.value).sum()
    }

    /// Value of the slice labelled `label`, if present.
    pub fn value_of(&self, label: &str) -> Option<u64> {
        self.slices
            .iter()
            .find(|s| s.label == label)
            .map(|s| s.value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PieSlice {
    pub label: String,
    pub value: u64,
}

/// One point per launch, coloured by booster version category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScatterChart {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    /// Distinct `group` keys in first-appearance order.
    pub groups: Vec<String>,
    pub points: Vec<ScatterPoint>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScatterPoint {
    /// Payload mass in kg.
    pub x: f64,
    /// Outcome class.
    pub y: u8,
    /// Booster version category.
    pub group: String,
    pub launch_site: String,
}
