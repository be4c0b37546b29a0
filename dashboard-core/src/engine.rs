//! Aggregation engine: pure functions from the launch table and the current
//! control selections to chart descriptions.
//!
//! Neither function mutates the table or fails. A selection that matches no
//! rows produces a chart with no slices or points.

use std::collections::BTreeMap;

use crate::models::*;
use crate::table::LaunchTable;

pub const SUCCESS_BY_SITE_TITLE: &str = "Total Success Launches by Site";
pub const PAYLOAD_AXIS_LABEL: &str = "Payload Mass (kg)";
pub const OUTCOME_AXIS_LABEL: &str = "class";

/// Proportion chart of successful launches.
///
/// - [`SiteSelection::All`]: one slice per site valued at its summed outcome
///   class, sites in name order.
/// - [`SiteSelection::Site`]: one slice per outcome class valued at its row
///   count at that site, largest first.
pub fn compute_success_breakdown(
    table: &LaunchTable,
    selection: &SiteSelection,
) -> ChartDescription {
    let slices = match selection {
        SiteSelection::All => {
            let mut by_site: BTreeMap<&str, u64> = BTreeMap::new();
            for record in table.records() {
                *by_site.entry(record.launch_site.as_str()).or_default() +=
                    u64::from(record.outcome_class);
            }
            by_site
                .into_iter()
                .map(|(site, successes)| PieSlice {
                    label: site.to_string(),
                    value: successes,
                })
                .collect()
        }
        SiteSelection::Site(site) => outcome_counts(table, site),
    };

    ChartDescription::Pie(PieChart {
        title: success_breakdown_title(selection),
        slices,
    })
}

/// Scatter of payload mass against outcome class for launches inside `range`,
/// restricted to the selected site. Points keep table order.
pub fn compute_payload_scatter(
    table: &LaunchTable,
    selection: &SiteSelection,
    range: &PayloadRange,
) -> ChartDescription {
    let mut groups: Vec<String> = Vec::new();
    let points: Vec<ScatterPoint> = table
        .records()
        .iter()
        .filter(|r| range.contains(r.payload_mass_kg))
        .filter(|r| selection.matches(&r.launch_site))
        .map(|r| {
            if !groups.contains(&r.booster_version_category) {
                groups.push(r.booster_version_category.clone());
            }
            ScatterPoint {
                x: r.payload_mass_kg,
                y: r.outcome_class,
                group: r.booster_version_category.clone(),
                launch_site: r.launch_site.clone(),
            }
        })
        .collect();

    ChartDescription::Scatter(ScatterChart {
        title: payload_scatter_title(selection),
        x_label: PAYLOAD_AXIS_LABEL.to_string(),
        y_label: OUTCOME_AXIS_LABEL.to_string(),
        groups,
        points,
    })
}

pub fn success_breakdown_title(selection: &SiteSelection) -> String {
    match selection {
        SiteSelection::All => SUCCESS_BY_SITE_TITLE.to_string(),
        SiteSelection::Site(site) => format!("Total Success Launches for {site}"),
    }
}

pub fn payload_scatter_title(selection: &SiteSelection) -> String {
    format!("Payload vs. Launch Outcome for {}", selection.as_str())
}

/// Row counts per outcome class at `site`, largest count first and ties in
/// first-appearance order.
fn outcome_counts(table: &LaunchTable, site: &str) -> Vec<PieSlice> {
    let mut counts: Vec<(u8, u64)> = Vec::with_capacity(2);
    for record in table.records().iter().filter(|r| r.launch_site == site) {
        match counts.iter_mut().find(|(class, _)| *class == record.outcome_class) {
            Some((_, count)) => *count += 1,
            None => counts.push((record.outcome_class, 1)),
        }
    }
    counts.sort_by(|a, b| b.1.cmp(&a.1));

    counts
        .into_iter()
        .map(|(class, count)| PieSlice {
            label: class.to_string(),
            value: count,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> LaunchTable {
        LaunchTable::from_records(vec![
            LaunchRecord::new("SiteA", 3000.0, "v1.0", 1),
            LaunchRecord::new("SiteA", 5000.0, "v1.1", 0),
            LaunchRecord::new("SiteB", 4000.0, "v1.0", 1),
        ])
        .unwrap()
    }

    fn site(name: &str) -> SiteSelection {
        SiteSelection::Site(name.to_string())
    }

    #[test]
    fn all_sites_breakdown_sums_successes_per_site() {
        let chart = compute_success_breakdown(&table(), &SiteSelection::All);
        let pie = chart.as_pie().unwrap();

        assert_eq!(pie.title, "Total Success Launches by Site");
        assert_eq!(pie.value_of("SiteA"), Some(1));
        assert_eq!(pie.value_of("SiteB"), Some(1));
        assert_eq!(pie.slices.len(), 2);
    }

    #[test]
    fn single_site_breakdown_counts_each_class() {
        let chart = compute_success_breakdown(&table(), &site("SiteA"));
        let pie = chart.as_pie().unwrap();

        assert_eq!(pie.title, "Total Success Launches for SiteA");
        assert_eq!(pie.value_of("1"), Some(1));
        assert_eq!(pie.value_of("0"), Some(1));
        assert_eq!(pie.total(), 2);
    }

    #[test]
    fn single_site_slices_are_largest_first() {
        let table = LaunchTable::from_records(vec![
            LaunchRecord::new("SiteA", 1.0, "v1.0", 1),
            LaunchRecord::new("SiteA", 2.0, "v1.0", 0),
            LaunchRecord::new("SiteA", 3.0, "v1.0", 0),
        ])
        .unwrap();

        let chart = compute_success_breakdown(&table, &site("SiteA"));
        let labels: Vec<_> = chart
            .as_pie()
            .unwrap()
            .slices
            .iter()
            .map(|s| s.label.as_str())
            .collect();
        assert_eq!(labels, ["0", "1"]);
    }

    #[test]
    fn unknown_site_yields_no_slices() {
        let chart = compute_success_breakdown(&table(), &site("Nowhere"));
        assert!(chart.is_empty());
        assert_eq!(chart.title(), "Total Success Launches for Nowhere");
    }

    #[test]
    fn scatter_keeps_rows_inside_range() {
        let range = PayloadRange::new(3500.0, 5000.0).unwrap();
        let chart = compute_payload_scatter(&table(), &SiteSelection::All, &range);
        let scatter = chart.as_scatter().unwrap();

        let xs: Vec<f64> = scatter.points.iter().map(|p| p.x).collect();
        assert_eq!(xs, [5000.0, 4000.0]);
        assert_eq!(scatter.groups, ["v1.1", "v1.0"]);
    }

    #[test]
    fn scatter_filters_by_site_and_range() {
        let range = PayloadRange::new(0.0, 4500.0).unwrap();
        let chart = compute_payload_scatter(&table(), &site("SiteA"), &range);
        let scatter = chart.as_scatter().unwrap();

        assert_eq!(scatter.points.len(), 1);
        assert_eq!(scatter.points[0].x, 3000.0);
        assert_eq!(scatter.points[0].y, 1);
        assert_eq!(scatter.points[0].group, "v1.0");
        assert_eq!(scatter.title, "Payload vs. Launch Outcome for SiteA");
    }

    #[test]
    fn scatter_with_no_rows_in_range_is_empty() {
        let range = PayloadRange::new(6000.0, 7000.0).unwrap();
        let chart = compute_payload_scatter(&table(), &SiteSelection::All, &range);
        assert!(chart.is_empty());
        assert!(chart.as_scatter().unwrap().groups.is_empty());
    }
}
