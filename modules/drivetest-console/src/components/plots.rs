use dioxus::prelude::*;
use drivetest_common::{TimeRange, Trace};

use super::layout::Layout;
use crate::templates::render_to_html;

/// Chart.js config for one KPI trace: the series name titles the chart and
/// labels the Y axis, the X axis is always "Time".
pub fn build_trace_chart(index: usize, trace: &Trace) -> String {
    let name = serde_json::to_string(&trace.name).unwrap_or_default();
    format!(
        r#"new Chart(document.getElementById('chart-plot-{index}'),{{type:'line',data:{{labels:{labels},datasets:[{{label:{name},data:{values},borderColor:'#1565c0',backgroundColor:'rgba(21,101,192,0.1)',pointRadius:0,borderWidth:1}}]}},options:{{responsive:true,animation:false,plugins:{{legend:{{display:false}},title:{{display:true,text:{name}}}}},scales:{{x:{{title:{{display:true,text:'Time'}}}},y:{{title:{{display:true,text:{name}}}}}}}}}}});"#,
        labels = serde_json::to_string(&trace.x).unwrap_or_default(),
        values = serde_json::to_string(&trace.y).unwrap_or_default(),
        name = name,
    )
}

#[allow(non_snake_case)]
#[component]
fn PlotPage(filename: String, traces: Vec<Trace>, time_range: Option<TimeRange>) -> Element {
    let charts: Vec<(usize, String, String)> = traces
        .iter()
        .enumerate()
        .map(|(i, trace)| (i, trace.name.clone(), build_trace_chart(i, trace)))
        .collect();

    rsx! {
        Layout { title: format!("Plots for {filename}"), active_page: "results".to_string(),
            div { class: "max-w-5xl mx-auto p-6", id: "plotContainer",
                h2 { class: "text-xl font-semibold mb-1", "Plots for {filename}" }
                if let Some(ref range) = time_range {
                    p { class: "text-sm text-gray-500 mb-4", "Time range: {range.start} — {range.end}" }
                }

                if traces.is_empty() {
                    p { class: "text-gray-400 text-center py-10", "No time-series data available." }
                }
                for (i, name, chart) in charts.iter() {
                    div { id: "plot-{i}", class: "bg-white border border-gray-200 rounded-lg p-4 mb-4",
                        h3 { class: "font-semibold mb-3 text-sm", "{name}" }
                        canvas { id: "chart-plot-{i}", height: "120" }
                        script { dangerous_inner_html: "{chart}" }
                    }
                }
            }
        }
    }
}

pub fn render_plots(filename: String, traces: Vec<Trace>, time_range: Option<TimeRange>) -> String {
    let mut dom = VirtualDom::new_with_props(
        PlotPage,
        PlotPageProps { filename, traces, time_range },
    );
    dom.rebuild_in_place();
    render_to_html(&dom)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn make_trace(name: &str) -> Trace {
        Trace {
            x: vec!["10:00:00.0".to_string(), "10:00:01.0".to_string()],
            y: vec![json!(-92.5), json!(-93.1)],
            name: name.to_string(),
        }
    }

    #[test]
    fn one_chart_container_per_series() {
        let html = render_plots(
            "report_2024.csv".to_string(),
            vec![make_trace("NR_PCell_SS-RSRP"), make_trace("NR_PCell_SS-SINR")],
            None,
        );
        assert!(html.contains(r#"id="plot-0""#));
        assert!(html.contains(r#"id="plot-1""#));
        assert!(!html.contains(r#"id="plot-2""#));
        assert!(html.contains("NR_PCell_SS-RSRP"));
        assert!(html.contains("NR_PCell_SS-SINR"));
    }

    #[test]
    fn chart_config_titles_and_axes_use_the_series_name() {
        let chart = build_trace_chart(0, &make_trace("NR_PCell_WB CQI"));
        assert!(chart.contains("chart-plot-0"));
        assert!(chart.contains(r#"title:{display:true,text:"NR_PCell_WB CQI"}"#));
        assert!(chart.contains("text:'Time'"));
        assert!(chart.contains("[-92.5,-93.1]"));
    }

    #[test]
    fn categorical_samples_survive_serialization() {
        let trace = Trace {
            x: vec!["10:00:00.0".to_string()],
            y: vec![json!("64QAM")],
            name: "NR_PCell_DL Modulation".to_string(),
        };
        let chart = build_trace_chart(3, &trace);
        assert!(chart.contains(r#"["64QAM"]"#));
    }

    #[test]
    fn empty_payload_renders_no_charts() {
        let html = render_plots("report_2024.csv".to_string(), vec![], None);
        assert!(!html.contains("plot-0"));
        assert!(html.contains("No time-series data available."));
    }

    #[test]
    fn time_range_renders_as_subtitle() {
        let html = render_plots(
            "report_2024.csv".to_string(),
            vec![make_trace("NR_PCELL_PCI")],
            Some(TimeRange { start: "10:00:00.0".to_string(), end: "10:45:12.4".to_string() }),
        );
        assert!(html.contains("Time range:"));
        assert!(html.contains("10:45:12.4"));
    }
}
