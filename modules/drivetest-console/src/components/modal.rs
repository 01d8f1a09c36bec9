use dioxus::prelude::*;

/// Modal dialog shell.
///
/// Open/closed is route state: a page renders the modal only when its
/// opener route fetched the record, and every way out (close button,
/// backdrop click, successful submit) navigates to `close_href`. At most
/// one modal renders per page; re-opening re-populates in place.
#[allow(non_snake_case)]
#[component]
pub fn Modal(id: &'static str, title: String, close_href: String, children: Element) -> Element {
    rsx! {
        div { id: "{id}", class: "fixed inset-0 z-50",
            a {
                href: "{close_href}",
                class: "absolute inset-0 bg-black/40",
                aria_label: "Close",
            }
            div { class: "relative max-w-2xl mx-auto mt-16 bg-white rounded-lg shadow-lg p-6 max-h-[80vh] overflow-y-auto",
                div { class: "flex items-center justify-between mb-4",
                    h3 { class: "text-lg font-semibold", "{title}" }
                    a {
                        href: "{close_href}",
                        class: "text-gray-400 hover:text-gray-700 text-2xl leading-none no-underline",
                        "\u{00d7}"
                    }
                }
                {children}
            }
        }
    }
}
