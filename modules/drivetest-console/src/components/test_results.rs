use dioxus::prelude::*;
use drivetest_common::TestResult;
use serde_json::Value;

use super::dropzone::{Dropzone, UploadStatus};
use super::layout::Layout;
use super::modal::Modal;
use crate::templates::render_to_html;

#[derive(Clone, PartialEq)]
pub struct TestResultRow {
    pub filename: String,
    pub timestamp: String,
}

pub fn test_result_to_row(result: &TestResult) -> TestResultRow {
    TestResultRow {
        filename: result.filename.clone(),
        timestamp: result.timestamp.clone(),
    }
}

/// Read-only detail view: the record's key fields plus each nested result
/// payload pretty-printed, in backend order.
#[derive(Clone, PartialEq)]
pub struct TestResultDetail {
    pub filename: String,
    pub timestamp: String,
    pub sections: Vec<(String, String)>,
}

pub fn test_result_detail(result: &TestResult) -> TestResultDetail {
    let pretty = |v: &Value| serde_json::to_string_pretty(v).unwrap_or_default();
    TestResultDetail {
        filename: result.filename.clone(),
        timestamp: result.timestamp.clone(),
        sections: vec![
            ("Summary Results".to_string(), pretty(&result.summary_results)),
            ("DL Test Results".to_string(), pretty(&result.dl_test_results)),
            ("UL Test Results".to_string(), pretty(&result.ul_test_results)),
            ("Ookla Test Results".to_string(), pretty(&result.ookla_test_results)),
            ("Evaluation Results".to_string(), pretty(&result.evaluation_results)),
        ],
    }
}

#[allow(non_snake_case)]
#[component]
fn TestResultsList(
    rows: Vec<TestResultRow>,
    status: Option<UploadStatus>,
    result_json: Option<String>,
    detail: Option<TestResultDetail>,
) -> Element {
    rsx! {
        Layout { title: "Test Results".to_string(), active_page: "results".to_string(),
            div { class: "max-w-5xl mx-auto p-6",
                h2 { class: "text-xl font-semibold mb-4", "Test Results" }

                div { class: "bg-white border border-gray-200 rounded-lg p-4 mb-6",
                    h3 { class: "font-semibold mb-3", "Upload Drive Test ZIPs" }
                    Dropzone {
                        form_id: "zipForm",
                        dropzone_id: "zipDropzone",
                        file_input_id: "zipFile",
                        input_name: "files",
                        action: "/process_zip",
                        accept: ".zip",
                        multiple: true,
                        prompt: "Drag & drop ZIP files here or click to browse",
                        status,
                    }
                    if let Some(ref json) = result_json {
                        pre {
                            id: "processingResults",
                            class: "mt-4 bg-gray-50 border border-gray-200 rounded p-3 text-xs overflow-x-auto",
                            "{json}"
                        }
                    }
                }

                div { class: "bg-white border border-gray-200 rounded-lg p-4",
                    if rows.is_empty() {
                        p { class: "text-gray-400 text-center py-10",
                            "No test results yet. Upload a drive test ZIP to get started."
                        }
                    } else {
                        table { class: "w-full text-sm", id: "testResults",
                            thead {
                                tr { class: "text-left text-xs text-gray-500 border-b",
                                    th { class: "pb-2 pr-3", "Filename" }
                                    th { class: "pb-2 pr-3", "Timestamp" }
                                    th { class: "pb-2", "Actions" }
                                }
                            }
                            tbody { id: "testResultsTableBody",
                                for row in rows.iter() {
                                    tr { class: "border-b border-gray-100",
                                        td { class: "py-2 pr-3 font-mono text-xs", "{row.filename}" }
                                        td { class: "py-2 pr-3 text-gray-500", "{row.timestamp}" }
                                        td { class: "py-2",
                                            div { class: "flex gap-2 items-center",
                                                a {
                                                    href: "/test_results/{row.filename}",
                                                    class: "px-3 py-1 bg-blue-600 text-white rounded text-xs no-underline hover:bg-blue-800",
                                                    "View Details"
                                                }
                                                a {
                                                    href: "/plot/{row.filename}",
                                                    target: "_blank",
                                                    rel: "noopener",
                                                    class: "px-3 py-1 bg-indigo-600 text-white rounded text-xs no-underline hover:bg-indigo-800",
                                                    "View Plots"
                                                }
                                                form {
                                                    method: "POST",
                                                    action: "/test_results/{row.filename}/delete",
                                                    class: "inline",
                                                    "onsubmit": "return confirm('Are you sure you want to delete this test result?')",
                                                    button {
                                                        r#type: "submit",
                                                        class: "px-3 py-1 bg-red-600 text-white rounded text-xs cursor-pointer hover:bg-red-800",
                                                        "Delete"
                                                    }
                                                }
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }

                if let Some(detail) = detail {
                    Modal {
                        id: "testResultModal",
                        title: format!("Test Result Details for {}", detail.filename),
                        close_href: "/".to_string(),
                        p { class: "text-sm text-gray-500 mb-4", "Timestamp: {detail.timestamp}" }
                        for (heading, json) in detail.sections.iter() {
                            h4 { class: "font-semibold text-sm mt-4 mb-1", "{heading}" }
                            pre { class: "bg-gray-50 border border-gray-200 rounded p-3 text-xs overflow-x-auto",
                                "{json}"
                            }
                        }
                    }
                }
            }
        }
    }
}

pub fn render_test_results(
    rows: Vec<TestResultRow>,
    status: Option<UploadStatus>,
    result_json: Option<String>,
    detail: Option<TestResultDetail>,
) -> String {
    let mut dom = VirtualDom::new_with_props(
        TestResultsList,
        TestResultsListProps { rows, status, result_json, detail },
    );
    dom.rebuild_in_place();
    render_to_html(&dom)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn make_row(filename: &str) -> TestResultRow {
        TestResultRow {
            filename: filename.to_string(),
            timestamp: "2024-06-01T12:00:00".to_string(),
        }
    }

    #[test]
    fn listing_renders_one_row_per_record() {
        let html = render_test_results(
            vec![make_row("1234-1_Summary.csv"), make_row("5678-2_Summary.csv")],
            None,
            None,
            None,
        );
        assert!(html.contains("1234-1_Summary.csv"));
        assert!(html.contains("5678-2_Summary.csv"));
        assert!(html.contains("/plot/1234-1_Summary.csv"));
        assert!(html.contains("/test_results/5678-2_Summary.csv/delete"));
    }

    #[test]
    fn listing_render_is_idempotent() {
        let rows = vec![make_row("1234-1_Summary.csv")];
        let first = render_test_results(rows.clone(), None, None, None);
        let second = render_test_results(rows, None, None, None);
        assert_eq!(first, second);
    }

    #[test]
    fn delete_action_asks_for_confirmation() {
        let html = render_test_results(vec![make_row("a.csv")], None, None, None);
        assert!(html.contains("Are you sure you want to delete this test result?"));
    }

    #[test]
    fn plots_open_in_a_new_tab() {
        let html = render_test_results(vec![make_row("a.csv")], None, None, None);
        assert!(html.contains(r#"target="_blank""#));
    }

    #[test]
    fn upload_success_shows_status_and_result_body() {
        let html = render_test_results(
            vec![],
            Some(UploadStatus::success("Upload successful")),
            Some("{\n  \"processed\": 2\n}".to_string()),
            None,
        );
        assert!(html.contains("Upload successful"));
        assert!(html.contains("status success"));
        assert!(html.contains("processingResults"));
        assert!(html.contains("processed"));
    }

    #[test]
    fn zero_file_error_shows_in_status_element() {
        let html = render_test_results(
            vec![],
            Some(UploadStatus::error("Please select files to upload.")),
            None,
            None,
        );
        assert!(html.contains("Please select files to upload."));
        assert!(html.contains("status error"));
    }

    #[test]
    fn detail_modal_renders_all_payload_sections() {
        let result = TestResult {
            id: 1,
            filename: "1234-1_Summary.csv".to_string(),
            timestamp: "2024-06-01T12:00:00".to_string(),
            summary_results: json!({"DL Tput": 812.4}),
            dl_test_results: json!({"samples": 120}),
            ul_test_results: json!({"samples": 60}),
            ookla_test_results: json!({"download": 431.0}),
            evaluation_results: json!(["PASS"]),
        };
        let html = render_test_results(vec![], None, None, Some(test_result_detail(&result)));
        assert!(html.contains("testResultModal"));
        assert!(html.contains("Test Result Details for 1234-1_Summary.csv"));
        assert!(html.contains("Summary Results"));
        assert!(html.contains("DL Test Results"));
        assert!(html.contains("UL Test Results"));
        assert!(html.contains("Ookla Test Results"));
        assert!(html.contains("Evaluation Results"));
    }

    #[test]
    fn no_modal_without_a_detail_fetch() {
        let html = render_test_results(vec![make_row("a.csv")], None, None, None);
        assert!(!html.contains("testResultModal"));
    }
}
