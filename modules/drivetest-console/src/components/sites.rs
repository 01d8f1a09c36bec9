use dioxus::prelude::*;
use drivetest_common::Site;

use super::dropzone::{Dropzone, UploadStatus};
use super::layout::Layout;
use super::modal::Modal;
use crate::templates::render_to_html;

/// Edit-modal state for one site. No error field: a failed site update is
/// logged and the listing reloads as if it had succeeded.
#[derive(Clone, PartialEq)]
pub struct SiteEditor {
    pub site: Site,
}

#[allow(non_snake_case)]
#[component]
fn SitesList(
    rows: Vec<Site>,
    status: Option<UploadStatus>,
    result_json: Option<String>,
    editor: Option<SiteEditor>,
) -> Element {
    rsx! {
        Layout { title: "Sites".to_string(), active_page: "sites".to_string(),
            div { class: "max-w-6xl mx-auto p-6",
                h2 { class: "text-xl font-semibold mb-4", "Sites" }

                div { class: "bg-white border border-gray-200 rounded-lg p-4 mb-6",
                    h3 { class: "font-semibold mb-3", "Upload Site List CSV" }
                    Dropzone {
                        form_id: "siteForm",
                        dropzone_id: "siteDropzone",
                        file_input_id: "siteFile",
                        input_name: "file",
                        action: "/sites/upload",
                        accept: ".csv",
                        multiple: false,
                        prompt: "Drag & drop a site list CSV here or click to browse",
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
                            "No sites yet. Upload a site list above to get started."
                        }
                    } else {
                        table { class: "w-full text-sm", id: "siteList",
                            thead {
                                tr { class: "text-left text-xs text-gray-500 border-b",
                                    th { class: "pb-2 pr-3", "Site ID / Sector ID" }
                                    th { class: "pb-2 pr-3", "Market" }
                                    th { class: "pb-2 pr-3", "Site Name" }
                                    th { class: "pb-2 pr-3", "Latitude" }
                                    th { class: "pb-2 pr-3", "Longitude" }
                                    th { class: "pb-2 pr-3", "Criteria" }
                                    th { class: "pb-2 pr-3", "Criteria Value" }
                                    th { class: "pb-2", "Actions" }
                                }
                            }
                            tbody { id: "sitesTableBody",
                                for site in rows.iter() {
                                    tr { class: "border-b border-gray-100",
                                        td { class: "py-2 pr-3 font-mono text-xs", "{site.siteid_sectorid}" }
                                        td { class: "py-2 pr-3", "{site.market}" }
                                        td { class: "py-2 pr-3", "{site.site_name}" }
                                        td { class: "py-2 pr-3", "{site.latitude}" }
                                        td { class: "py-2 pr-3", "{site.longitude}" }
                                        td { class: "py-2 pr-3", "{site.criteria}" }
                                        td { class: "py-2 pr-3", "{site.criteria_value}" }
                                        td { class: "py-2",
                                            div { class: "flex gap-2 items-center",
                                                a {
                                                    href: "/sites/{site.siteid_sectorid}/edit",
                                                    class: "px-3 py-1 bg-blue-600 text-white rounded text-xs no-underline hover:bg-blue-800",
                                                    "Edit"
                                                }
                                                form {
                                                    method: "POST",
                                                    action: "/sites/{site.siteid_sectorid}/delete",
                                                    class: "inline",
                                                    "onsubmit": "return confirm('Are you sure you want to delete this site?')",
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
                        id: "editSiteModal",
                        title: "Edit Site".to_string(),
                        close_href: "/sites".to_string(),
                        form {
                            id: "editSiteForm",
                            method: "POST",
                            action: "/sites/{editor.site.siteid_sectorid}",
                            div { class: "mb-3",
                                label { class: "block text-sm text-gray-500 mb-1", "Site ID / Sector ID" }
                                input {
                                    r#type: "text",
                                    value: "{editor.site.siteid_sectorid}",
                                    disabled: true,
                                    class: "w-full px-3 py-2 border border-gray-200 rounded text-sm bg-gray-50 text-gray-500",
                                }
                            }
                            div { class: "mb-3",
                                label { r#for: "editMarket", class: "block text-sm text-gray-500 mb-1", "Market" }
                                input {
                                    r#type: "text", id: "editMarket", name: "market", required: true,
                                    value: "{editor.site.market}",
                                    class: "w-full px-3 py-2 border border-gray-300 rounded text-sm",
                                }
                            }
                            div { class: "mb-3",
                                label { r#for: "editSiteName", class: "block text-sm text-gray-500 mb-1", "Site Name" }
                                input {
                                    r#type: "text", id: "editSiteName", name: "site_name", required: true,
                                    value: "{editor.site.site_name}",
                                    class: "w-full px-3 py-2 border border-gray-300 rounded text-sm",
                                }
                            }
                            div { class: "grid grid-cols-2 gap-3 mb-3",
                                div {
                                    label { r#for: "editLatitude", class: "block text-sm text-gray-500 mb-1", "Latitude" }
                                    input {
                                        r#type: "number", step: "any", id: "editLatitude", name: "latitude", required: true,
                                        value: "{editor.site.latitude}",
                                        class: "w-full px-3 py-2 border border-gray-300 rounded text-sm",
                                    }
                                }
                                div {
                                    label { r#for: "editLongitude", class: "block text-sm text-gray-500 mb-1", "Longitude" }
                                    input {
                                        r#type: "number", step: "any", id: "editLongitude", name: "longitude", required: true,
                                        value: "{editor.site.longitude}",
                                        class: "w-full px-3 py-2 border border-gray-300 rounded text-sm",
                                    }
                                }
                            }
                            div { class: "mb-3",
                                label { r#for: "editCriteria", class: "block text-sm text-gray-500 mb-1", "Criteria" }
                                input {
                                    r#type: "text", id: "editCriteria", name: "criteria", required: true,
                                    value: "{editor.site.criteria}",
                                    class: "w-full px-3 py-2 border border-gray-300 rounded text-sm",
                                }
                            }
                            div { class: "mb-4",
                                label { r#for: "editCriteriaValue", class: "block text-sm text-gray-500 mb-1", "Criteria Value" }
                                input {
                                    r#type: "text", id: "editCriteriaValue", name: "criteria_value", required: true,
                                    value: "{editor.site.criteria_value}",
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

pub fn render_sites(
    rows: Vec<Site>,
    status: Option<UploadStatus>,
    result_json: Option<String>,
    editor: Option<SiteEditor>,
) -> String {
    let mut dom = VirtualDom::new_with_props(
        SitesList,
        SitesListProps { rows, status, result_json, editor },
    );
    dom.rebuild_in_place();
    render_to_html(&dom)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_site(key: &str) -> Site {
        Site {
            id: 1,
            siteid_sectorid: key.to_string(),
            market: "Dallas".to_string(),
            site_name: "DAL001".to_string(),
            latitude: 32.7767,
            longitude: -96.797,
            criteria: "market".to_string(),
            criteria_value: "Dallas".to_string(),
        }
    }

    #[test]
    fn listing_renders_every_column() {
        let html = render_sites(vec![make_site("DAL001_1")], None, None, None);
        assert!(html.contains("DAL001_1"));
        assert!(html.contains("Dallas"));
        assert!(html.contains("32.7767"));
        assert!(html.contains("-96.797"));
        assert!(html.contains("/sites/DAL001_1/edit"));
        assert!(html.contains("/sites/DAL001_1/delete"));
    }

    #[test]
    fn listing_render_is_idempotent() {
        let rows = vec![make_site("DAL001_1"), make_site("DAL002_3")];
        assert_eq!(
            render_sites(rows.clone(), None, None, None),
            render_sites(rows, None, None, None)
        );
    }

    #[test]
    fn editor_modal_populates_fields_from_the_record() {
        let editor = SiteEditor { site: make_site("DAL001_1") };
        let html = render_sites(vec![], None, None, Some(editor));
        assert!(html.contains("editSiteModal"));
        assert!(html.contains(r#"action="/sites/DAL001_1""#));
        assert!(html.contains(r#"value="DAL001""#));
        assert!(html.contains(r#"value="32.7767""#));
    }

    #[test]
    fn no_editor_modal_by_default() {
        let html = render_sites(vec![make_site("DAL001_1")], None, None, None);
        assert!(!html.contains("editSiteModal"));
    }

    #[test]
    fn delete_action_asks_for_confirmation() {
        let html = render_sites(vec![make_site("DAL001_1")], None, None, None);
        assert!(html.contains("Are you sure you want to delete this site?"));
    }
}
