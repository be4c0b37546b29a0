//! Reactive update bridge between the page controls and the aggregation engine.
//!
//! The page reports a [`ControlEvent`] whenever a control changes. The bridge
//! validates the raw control values once, looks up the outputs that depend on
//! the changed control in [`graph::DEPENDENCIES`], and recomputes only those.
//! Values outside a control's domain never fail the request: the affected
//! charts are replaced by empty ones.

pub mod dispatch;
pub mod graph;
pub mod layout;

use std::collections::BTreeMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::engine;
use crate::models::*;
use crate::table::LaunchTable;
use crate::SelectionError;

pub use dispatch::{DispatchError, DispatchHandle};
pub use graph::{ControlId, OutputId};
pub use layout::DashboardLayout;

/// Control values as emitted by the page, before validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawControls {
    pub site: String,
    pub payload: [f64; 2],
}

/// A control change. `changed: None` is the initial page load, which
/// recomputes every output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ControlEvent {
    #[serde(default)]
    pub changed: Option<ControlId>,
    pub values: RawControls,
    /// Page-side request counter, echoed back so the page can drop a
    /// response that arrives after a newer one.
    #[serde(default)]
    pub seq: Option<u64>,
}

impl ControlEvent {
    pub fn new(changed: Option<ControlId>, values: RawControls) -> Self {
        Self {
            changed,
            values,
            seq: None,
        }
    }
}

/// Recomputed chart descriptions keyed by placeholder id.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ChartUpdate {
    pub outputs: BTreeMap<OutputId, ChartDescription>,
    /// The `seq` of the event this update answers.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seq: Option<u64>,
    /// Position of the event in the dispatch loop's handling order, starting
    /// at 1. Unset when the bridge is called directly.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dispatched: Option<u64>,
}

impl ChartUpdate {
    pub fn get(&self, output: OutputId) -> Option<&ChartDescription> {
        self.outputs.get(&output)
    }
}

/// Control values after boundary validation. Each control is validated
/// independently so one bad value only blanks the charts that read it.
#[derive(Debug, Clone, PartialEq)]
pub struct Controls {
    pub site: Result<SiteSelection, SelectionError>,
    pub payload: Result<PayloadRange, SelectionError>,
}

pub struct Bridge {
    table: Arc<LaunchTable>,
    layout: DashboardLayout,
}

impl Bridge {
    pub fn new(table: Arc<LaunchTable>) -> Self {
        let layout = DashboardLayout::for_table(&table);
        Self { table, layout }
    }

    pub fn layout(&self) -> &DashboardLayout {
        &self.layout
    }

    /// Control values the page starts with: every site, full payload range.
    pub fn default_controls(&self) -> RawControls {
        RawControls {
            site: ALL_SITES.to_string(),
            payload: self.table.payload_bounds().into(),
        }
    }

    /// Both charts computed once with the default control values.
    pub fn initial_update(&self) -> ChartUpdate {
        self.handle(&ControlEvent::new(None, self.default_controls()))
    }

    pub fn handle(&self, event: &ControlEvent) -> ChartUpdate {
        let controls = self.validate(&event.values);
        let outputs: Vec<OutputId> = match event.changed {
            Some(changed) => graph::affected_outputs(changed).collect(),
            None => graph::all_outputs().collect(),
        };

        tracing::debug!(
            changed = ?event.changed,
            site = %event.values.site,
            payload = ?event.values.payload,
            outputs = outputs.len(),
            "Recomputing charts"
        );

        ChartUpdate {
            outputs: outputs
                .into_iter()
                .map(|output| (output, self.render(output, &controls, &event.values)))
                .collect(),
            seq: event.seq,
            dispatched: None,
        }
    }

    /// A single output for the given control values, outside the event flow.
    pub fn chart(&self, output: OutputId, raw: &RawControls) -> ChartDescription {
        let controls = self.validate(raw);
        self.render(output, &controls, raw)
    }

    pub fn validate(&self, raw: &RawControls) -> Controls {
        let [low, high] = raw.payload;
        Controls {
            site: self.table.resolve_site(&raw.site),
            payload: PayloadRange::new(low, high),
        }
    }

    fn render(
        &self,
        output: OutputId,
        controls: &Controls,
        raw: &RawControls,
    ) -> ChartDescription {
        // Titles follow the raw selector value so a blanked chart still names
        // what was asked for.
        let requested = SiteSelection::parse(&raw.site);

        match output {
            OutputId::SuccessPieChart => match &controls.site {
                Ok(site) => engine::compute_success_breakdown(&self.table, site),
                Err(e) => {
                    tracing::warn!(output = ?output, "Rendering empty chart: {}", e);
                    empty_pie(&requested)
                }
            },
            OutputId::SuccessPayloadScatterChart => match (&controls.site, &controls.payload) {
                (Ok(site), Ok(range)) => engine::compute_payload_scatter(&self.table, site, range),
                (Err(e), _) | (_, Err(e)) => {
                    tracing::warn!(output = ?output, "Rendering empty chart: {}", e);
                    empty_scatter(&requested)
                }
            },
        }
    }
}

fn empty_pie(selection: &SiteSelection) -> ChartDescription {
    ChartDescription::Pie(PieChart {
        title: engine::success_breakdown_title(selection),
        slices: Vec::new(),
    })
}

fn empty_scatter(selection: &SiteSelection) -> ChartDescription {
    ChartDescription::Scatter(ScatterChart {
        title: engine::payload_scatter_title(selection),
        x_label: engine::PAYLOAD_AXIS_LABEL.to_string(),
        y_label: engine::OUTCOME_AXIS_LABEL.to_string(),
        groups: Vec::new(),
        points: Vec::new(),
    })
}
