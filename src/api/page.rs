use crate::bridge::DashboardLayout;

/// Render the dashboard page with the layout embedded as JSON.
///
/// The page builds its controls from the layout, asks `/api/v1/charts` for the
/// initial charts and posts every control change to `/api/v1/callback`.
/// We avoid `format!()` because the page's CSS and JS are full of braces.
pub fn render_index(layout: &DashboardLayout) -> anyhow::Result<String> {
    // `</` inside an inline script would end it early.
    let json = serde_json::to_string(layout)?.replace("</", "<\\/");

    const TEMPLATE: &str = r#"<!doctype html>
<html>
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>__TITLE__</title>
<script src="https://cdn.plot.ly/plotly-2.35.2.min.js" charset="utf-8"></script>
<style>
  body { font-family: system-ui, -apple-system, Segoe UI, Roboto, Arial, sans-serif; margin: 0 24px; }
  h1 { text-align: center; color: #503D36; font-size: 40px; }
  select { width: 100%; padding: 6px 8px; border: 1px solid #ddd; border-radius: 6px; }
  .slider { display: flex; gap: 12px; align-items: center; }
  .slider input { flex: 1; }
  .marks { display: flex; justify-content: space-between; color: #777; font-size: 12px; }
  .num { font-variant-numeric: tabular-nums; min-width: 8em; }
</style>
</head>
<body>
<h1 id="title"></h1>
<select id="site-dropdown"></select>
<br>
<div id="success-pie-chart"></div>
<br>
<p id="payload-label"></p>
<div class="slider">
  <input type="range" id="payload-low">
  <input type="range" id="payload-high">
  <span class="num" id="payload-value"></span>
</div>
<div class="marks" id="payload-marks"></div>
<div id="success-payload-scatter-chart"></div>

<script>
const LAYOUT = __LAYOUT__;

const dropdown = document.getElementById("site-dropdown");
const low = document.getElementById("payload-low");
const high = document.getElementById("payload-high");

// Each callback carries a seq; an output only redraws from a response at
// least as new as the one it last drew.
let nextSeq = 0;
const drawn = {};

function init() {
  document.getElementById("title").textContent = LAYOUT.title;
  document.getElementById("payload-label").textContent = LAYOUT.payload_label;

  const dd = LAYOUT.site_dropdown;
  dropdown.title = dd.placeholder;
  for (const opt of dd.options) {
    const el = document.createElement("option");
    el.value = opt.value;
    el.textContent = opt.label;
    dropdown.appendChild(el);
  }
  dropdown.value = dd.value;

  const sl = LAYOUT.payload_slider;
  for (const input of [low, high]) {
    input.min = sl.min;
    input.max = sl.max;
    // Continuous, so both thumbs can sit exactly on the payload bounds.
    input.step = "any";
  }
  low.value = sl.value[0];
  high.value = sl.value[1];

  const marks = document.getElementById("payload-marks");
  for (const mark of sl.marks) {
    const el = document.createElement("span");
    el.textContent = mark.label;
    marks.appendChild(el);
  }

  dropdown.addEventListener("change", () => dispatch(dd.id));
  low.addEventListener("change", () => dispatch(sl.id));
  high.addEventListener("change", () => dispatch(sl.id));
}

function values() {
  const payload = [Number(low.value), Number(high.value)];
  document.getElementById("payload-value").textContent = payload[0] + " - " + payload[1] + " kg";
  return { site: dropdown.value, payload };
}

async function dispatch(changed) {
  const resp = await fetch("/api/v1/callback", {
    method: "POST",
    headers: { "Content-Type": "application/json" },
    body: JSON.stringify({ changed, values: values(), seq: ++nextSeq }),
  });
  if (resp.ok) apply(await resp.json());
}

function apply(update) {
  const seq = update.seq ?? 0;
  for (const [id, chart] of Object.entries(update.outputs)) {
    if (seq < (drawn[id] ?? -1)) continue;
    drawn[id] = seq;
    if (chart.kind === "pie") drawPie(id, chart);
    else drawScatter(id, chart);
  }
}

function drawPie(id, chart) {
  const trace = {
    type: "pie",
    labels: chart.slices.map(s => s.label),
    values: chart.slices.map(s => s.value),
  };
  Plotly.react(id, [trace], { title: { text: chart.title } });
}

function drawScatter(id, chart) {
  const traces = chart.groups.map(group => {
    const points = chart.points.filter(p => p.group === group);
    return {
      type: "scatter",
      mode: "markers",
      name: group,
      x: points.map(p => p.x),
      y: points.map(p => p.y),
    };
  });
  Plotly.react(id, traces, {
    title: { text: chart.title },
    xaxis: { title: { text: chart.x_label } },
    yaxis: { title: { text: chart.y_label } },
    legend: { title: { text: "Booster Version Category" } },
  });
}

init();
values();
fetch("/api/v1/charts").then(r => r.json()).then(apply);
</script>
</body>
</html>
"#;

    Ok(TEMPLATE
        .replace("__TITLE__", &layout.title)
        .replace("__LAYOUT__", &json))
}
