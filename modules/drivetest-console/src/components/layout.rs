use dioxus::prelude::*;

struct NavItem {
    key: &'static str,
    label: &'static str,
    href: &'static str,
}

const NAV_ITEMS: &[NavItem] = &[
    NavItem { key: "results", label: "Test Results", href: "/" },
    NavItem { key: "sites", label: "Sites", href: "/sites" },
    NavItem { key: "criteria", label: "Criteria", href: "/criteria" },
];

/// Classes toggled by the dropzone enhancement script; everything else is
/// Tailwind utilities.
const DROPZONE_STYLE: &str = "\
.dropzone{border:2px dashed #9ca3af;border-radius:8px;padding:2rem;text-align:center;color:#6b7280;cursor:pointer;background:#fff}\
.dropzone.dragover{border-color:#2563eb;background:#eff6ff;color:#2563eb}\
.status{margin-top:.5rem;font-size:.875rem;min-height:1.25rem}\
.status.processing{color:#b45309}\
.status.success{color:#15803d}\
.status.error{color:#b91c1c}";

/// Console layout with sidebar navigation.
#[allow(non_snake_case)]
#[component]
pub fn Layout(title: String, active_page: String, children: Element) -> Element {
    let full_title = format!("{title} — Drive Test Console");
    rsx! {
        head {
            meta { charset: "utf-8" }
            meta { name: "viewport", content: "width=device-width, initial-scale=1" }
            title { "{full_title}" }
            script { src: "https://cdn.tailwindcss.com" }
            script { src: "https://cdn.jsdelivr.net/npm/chart.js@4" }
            style { dangerous_inner_html: "{DROPZONE_STYLE}" }
        }
        body { class: "flex min-h-screen bg-gray-50 font-sans text-gray-900",
            div { class: "w-56 bg-gray-900 text-white flex flex-col shrink-0 fixed inset-y-0 left-0 z-40",
                div { class: "px-5 py-4 text-lg font-semibold border-b border-gray-700",
                    "Drive Test Console"
                }
                nav { class: "flex flex-col py-3",
                    for item in NAV_ITEMS.iter() {
                        {
                            let class = if item.key == active_page {
                                "block px-5 py-2.5 text-sm text-white bg-blue-600"
                            } else {
                                "block px-5 py-2.5 text-sm text-gray-400 hover:text-white hover:bg-gray-700 transition-colors"
                            };
                            let href = item.href;
                            let label = item.label;
                            rsx! { a { href: href, class: class, "{label}" } }
                        }
                    }
                }
            }
            div { class: "ml-56 flex-1 min-w-0",
                {children}
            }
        }
    }
}
