use dioxus::prelude::*;

use crate::upload::status_element_id;

/// Terminal state of an upload action, rendered into the form's status
/// element. `Processing` exists for the in-flight paint the enhancement
/// script applies while the form submits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Processing,
    Success,
    Error,
}

impl StatusKind {
    /// CSS class on the status element: `status` plus the state name.
    pub fn css_class(self) -> &'static str {
        match self {
            StatusKind::Processing => "status processing",
            StatusKind::Success => "status success",
            StatusKind::Error => "status error",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct UploadStatus {
    pub kind: StatusKind,
    pub message: String,
}

impl UploadStatus {
    pub fn success(message: impl Into<String>) -> Self {
        Self { kind: StatusKind::Success, message: message.into() }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self { kind: StatusKind::Error, message: message.into() }
    }
}

/// Inline script wiring one dropzone instance: click-to-browse, drag
/// styling, drop-to-populate, the selected-file-names preview, and the
/// `Processing...` paint on submit. Written against ids so the markup
/// stays inert without it.
fn enhancement_script(dropzone_id: &str, file_input_id: &str, form_id: &str) -> String {
    let status_id = status_element_id(form_id);
    format!(
        r#"(function(){{
var dz=document.getElementById('{dropzone_id}');
var input=document.getElementById('{file_input_id}');
var form=document.getElementById('{form_id}');
var status=document.getElementById('{status_id}');
if(!dz||!input||!form){{console.error('Dropzone elements missing: {dropzone_id}, {file_input_id}');return;}}
var preview=function(){{if(input.files.length>0){{dz.textContent='Selected: '+Array.from(input.files).map(function(f){{return f.name;}}).join(', ');}}}};
dz.onclick=function(){{input.click();}};
input.onchange=preview;
dz.ondragover=function(e){{e.preventDefault();dz.classList.add('dragover');}};
dz.ondragleave=function(){{dz.classList.remove('dragover');}};
dz.ondrop=function(e){{e.preventDefault();dz.classList.remove('dragover');input.files=e.dataTransfer.files;preview();}};
form.addEventListener('submit',function(){{if(status&&input.files.length>0){{status.textContent='Processing...';status.className='status processing';}}}});
}})();"#
    )
}

/// Upload form with a drag-and-drop target bound to a hidden file input.
///
/// File type, size, and count are not validated here; the backend decides.
#[allow(non_snake_case)]
#[component]
pub fn Dropzone(
    form_id: &'static str,
    dropzone_id: &'static str,
    file_input_id: &'static str,
    input_name: &'static str,
    action: &'static str,
    accept: &'static str,
    multiple: bool,
    prompt: &'static str,
    status: Option<UploadStatus>,
) -> Element {
    let status_id = status_element_id(form_id);
    let script = enhancement_script(dropzone_id, file_input_id, form_id);
    rsx! {
        form {
            id: "{form_id}",
            method: "POST",
            action: "{action}",
            enctype: "multipart/form-data",
            div { id: "{dropzone_id}", class: "dropzone", "{prompt}" }
            input {
                r#type: "file",
                id: "{file_input_id}",
                name: "{input_name}",
                accept: "{accept}",
                multiple: multiple,
                class: "hidden",
            }
            button {
                r#type: "submit",
                class: "mt-3 px-6 py-2 bg-blue-600 text-white rounded text-sm cursor-pointer hover:bg-blue-800",
                "Upload"
            }
            if let Some(ref st) = status {
                p { id: "{status_id}", class: "{st.kind.css_class()}", "{st.message}" }
            } else {
                p { id: "{status_id}", class: "status" }
            }
        }
        script { dangerous_inner_html: "{script}" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn css_class_carries_state_name() {
        assert_eq!(StatusKind::Processing.css_class(), "status processing");
        assert_eq!(StatusKind::Success.css_class(), "status success");
        assert_eq!(StatusKind::Error.css_class(), "status error");
    }

    #[test]
    fn script_targets_the_instance_ids() {
        let script = enhancement_script("zipDropzone", "zipFile", "zipForm");
        assert!(script.contains("getElementById('zipDropzone')"));
        assert!(script.contains("getElementById('zipFile')"));
        assert!(script.contains("getElementById('zipStatus')"));
        assert!(script.contains("e.dataTransfer.files"));
        assert!(script.contains("'Selected: '"));
        assert!(script.contains("Processing..."));
    }
}
