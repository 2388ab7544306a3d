//! Import / export panel

use crate::app::AppState;
use dioxus::prelude::*;
use std::path::PathBuf;

pub fn TransferPanel() -> Element {
    let mut app_state_export = use_context::<AppState>();
    let mut app_state_import = app_state_export.clone();

    rsx! {
        div {
            class: "card row",
            button {
                onclick: move |_| app_state_export.export_quotes(),
                "Export Quotes"
            }
            label { class: "muted", r#for: "import-file", "Import Quotes" }
            input {
                id: "import-file",
                r#type: "file",
                accept: ".json",
                onchange: move |evt: FormEvent| {
                    // The desktop file engine reports absolute paths.
                    if let Some(files) = evt.files() {
                        for name in files.files() {
                            app_state_import.import_quotes(&PathBuf::from(name));
                        }
                    }
                },
            }
        }
    }
}
