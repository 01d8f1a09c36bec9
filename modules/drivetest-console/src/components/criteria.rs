use dioxus::prelude::*;
use drivetest_common::Criteria;

use super::dropzone::{Dropzone, UploadStatus};
use super::layout::Layout;
use super::modal::Modal;
use crate::templates::render_to_html;

/// Edit-modal state for one criterion. A rejected update re-opens the
/// modal with the submitted values and the backend's error text.
#[derive(Clone, PartialEq)]
pub struct CriteriaEditor {
    pub criteria: Criteria,
    pub error: Option<String>,
}

#[allow(non_snake_case)]
#[component]
fn CriteriaList(
    rows: Vec<Criteria>,
    status: Option<UploadStatus>,
    result_json: Option<String>,
    editor: Option<CriteriaEditor>,
) -> Element {
    rsx! {
        Layout { title: "Criteria".to_string(), active_page: "criteria".to_string(),
            div { class: "max-w-6xl mx-auto p-6",
                h2 { class: "text-xl font-semibold mb-4", "Criteria" }

                div { class: "bg-white border border-gray-200 rounded-lg p-4 mb-6",
                    h3 { class: "font-semibold mb-3", "Upload Criteria CSV" }
                    Dropzone {
                        form_id: "criteriaForm",
                        dropzone_id: "criteriaDropzone",
                        file_input_id: "criteriaFile",
                        input_name: "file",
                        action: "/criteria/upload",
                        accept: ".csv",
                        multiple: false,
                        prompt: "Drag & drop a criteria CSV here or click to browse",
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
                            "No criteria yet. Upload a criteria CSV above to get started."
                        }
                    } else {
                        table { class: "w-full text-sm", id: "criteriaList",
                            thead {
                                tr { class: "text-left text-xs text-gray-500 border-b",
                                    th { class: "pb-2 pr-3", "Type" }
                                    th { class: "pb-2 pr-3", "Value" }
                                    th { class: "pb-2 pr-3", "KPI Name" }
                                    th { class: "pb-2 pr-3", "Pass Condition" }
                                    th { class: "pb-2 pr-3", "Pass Value" }
                                    th { class: "pb-2 pr-3", "Conditional Condition" }
                                    th { class: "pb-2 pr-3", "Conditional Value" }
                                    th { class: "pb-2 pr-3", "Unit" }
                                    th { class: "pb-2", "Actions" }
                                }
                            }
                            tbody { id: "criteriaTableBody",
                                for criteria in rows.iter() {
                                    tr { class: "border-b border-gray-100",
                                        td { class: "py-2 pr-3", "{criteria.kind}" }
                                        td { class: "py-2 pr-3", "{criteria.value}" }
                                        td { class: "py-2 pr-3 font-mono text-xs", "{criteria.kpi_name}" }
                                        td { class: "py-2 pr-3", "{criteria.pass_condition}" }
                                        td { class: "py-2 pr-3", "{criteria.pass_value}" }
                                        td { class: "py-2 pr-3", "{criteria.conditional_pass_condition}" }
                                        td { class: "py-2 pr-3", "{criteria.conditional_pass_value}" }
                                        td { class: "py-2 pr-3", "{criteria.unit}" }
                                        td { class: "py-2",
                                            div { class: "flex gap-2 items-center",
                                                a {
                                                    href: "/criteria/{criteria.id}/edit",
                                                    class: "px-3 py-1 bg-blue-600 text-white rounded text-xs no-underline hover:bg-blue-800",
                                                    "Edit"
                                                }
                                                form {
                                                    method: "POST",
                                                    action: "/criteria/{criteria.id}/delete",
                                                    class: "inline",
                                                    "onsubmit": "return confirm('Are you sure you want to delete this criteria?')",
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

                if let Some(editor) = editor {
                    Modal {
                        id: "editCriteriaModal",
                        title: "Edit Criteria".to_string(),
                        close_href: "/criteria".to_string(),
                        if let Some(ref error) = editor.error {
                            div { class: "mb-4 px-3 py-2 bg-red-50 border border-red-200 rounded text-sm text-red-700",
                                "Failed to update criteria: {error}"
                            }
                        }
                        form {
                            id: "editCriteriaForm",
                            method: "POST",
                            action: "/criteria/{editor.criteria.id}",
                            div { class: "grid grid-cols-2 gap-3 mb-3",
                                div {
                                    label { r#for: "editType", class: "block text-sm text-gray-500 mb-1", "Type" }
                                    input {
                                        r#type: "text", id: "editType", name: "type", required: true,
                                        value: "{editor.criteria.kind}",
                                        class: "w-full px-3 py-2 border border-gray-300 rounded text-sm",
                                    }
                                }
                                div {
                                    label { r#for: "editValue", class: "block text-sm text-gray-500 mb-1", "Value" }
                                    input {
                                        r#type: "text", id: "editValue", name: "value", required: true,
                                        value: "{editor.criteria.value}",
                                        class: "w-full px-3 py-2 border border-gray-300 rounded text-sm",
                                    }
                                }
                            }
                            div { class: "mb-3",
                                label { r#for: "editKpiName", class: "block text-sm text-gray-500 mb-1", "KPI Name" }
                                input {
                                    r#type: "text", id: "editKpiName", name: "kpi_name", required: true,
                                    value: "{editor.criteria.kpi_name}",
                                    class: "w-full px-3 py-2 border border-gray-300 rounded text-sm",
                                }
                            }
                            div { class: "grid grid-cols-2 gap-3 mb-3",
                                div {
                                    label { r#for: "editPassCondition", class: "block text-sm text-gray-500 mb-1", "Pass Condition" }
                                    input {
                                        r#type: "text", id: "editPassCondition", name: "pass_condition", required: true,
                                        value: "{editor.criteria.pass_condition}",
                                        class: "w-full px-3 py-2 border border-gray-300 rounded text-sm",
                                    }
                                }
                                div {
                                    label { r#for: "editPassValue", class: "block text-sm text-gray-500 mb-1", "Pass Value" }
                                    input {
                                        r#type: "number", step: "any", id: "editPassValue", name: "pass_value", required: true,
                                        value: "{editor.criteria.pass_value}",
                                        class: "w-full px-3 py-2 border border-gray-300 rounded text-sm",
                                    }
                                }
                            }
                            div { class: "grid grid-cols-2 gap-3 mb-3",
                                div {
                                    label { r#for: "editConditionalPassCondition", class: "block text-sm text-gray-500 mb-1", "Conditional Pass Condition" }
                                    input {
                                        r#type: "text", id: "editConditionalPassCondition", name: "conditional_pass_condition", required: true,
                                        value: "{editor.criteria.conditional_pass_condition}",
                                        class: "w-full px-3 py-2 border border-gray-300 rounded text-sm",
                                    }
                                }
                                div {
                                    label { r#for: "editConditionalPassValue", class: "block text-sm text-gray-500 mb-1", "Conditional Pass Value" }
                                    input {
                                        r#type: "number", step: "any", id: "editConditionalPassValue", name: "conditional_pass_value", required: true,
                                        value: "{editor.criteria.conditional_pass_value}",
                                        class: "w-full px-3 py-2 border border-gray-300 rounded text-sm",
                                    }
                                }
                            }
                            div { class: "mb-4",
                                label { r#for: "editUnit", class: "block text-sm text-gray-500 mb-1", "Unit" }
                                input {
                                    r#type: "text", id: "editUnit", name: "unit", required: true,
                                    value: "{editor.criteria.unit}",
                                    class: "w-full px-3 py-2 border border-gray-300 rounded text-sm",
                                }
                            }
                            button {
                                r#type: "submit",
                                class: "px-6 py-2 bg-blue-600 text-white rounded text-sm cursor-pointer hover:bg-blue-800",
                                "Save Changes"
                            }
                        }
                    }
                }
            }
        }
    }
}

pub fn render_criteria(
    rows: Vec<Criteria>,
    status: Option<UploadStatus>,
    result_json: Option<String>,
    editor: Option<CriteriaEditor>,
) -> String {
    let mut dom = VirtualDom::new_with_props(
        CriteriaList,
        CriteriaListProps { rows, status, result_json, editor },
    );
    dom.rebuild_in_place();
    render_to_html(&dom)
}
