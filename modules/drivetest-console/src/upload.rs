//! Upload dispatch configuration.
//!
//! Each upload route carries an explicit [`UploadSpec`] naming the multipart
//! shape and the listing that refreshes after a successful upload. The
//! refresh target is configuration wired at route registration, never
//! inferred from the endpoint URL.

/// Which listing an upload refreshes after success.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListingTarget {
    TestResults,
    Sites,
    Criteria,
}

impl ListingTarget {
    /// Route of the page that renders this listing.
    pub fn href(self) -> &'static str {
        match self {
            ListingTarget::TestResults => "/",
            ListingTarget::Sites => "/sites",
            ListingTarget::Criteria => "/criteria",
        }
    }
}

/// Multipart shape expected by the backend endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadMode {
    /// One or more files under the repeated `files` field.
    MultiFile,
    /// Exactly the first selected file, under the `file` field.
    SingleFile,
}

impl UploadMode {
    /// Validation message shown when the form is submitted with no files.
    pub fn empty_message(self) -> &'static str {
        match self {
            UploadMode::MultiFile => "Please select files to upload.",
            UploadMode::SingleFile => "Please select a file to upload.",
        }
    }
}

/// Static description of one upload form.
#[derive(Debug, Clone, Copy)]
pub struct UploadSpec {
    pub form_id: &'static str,
    pub mode: UploadMode,
    pub target: ListingTarget,
}

pub const ZIP_UPLOAD: UploadSpec = UploadSpec {
    form_id: "zipForm",
    mode: UploadMode::MultiFile,
    target: ListingTarget::TestResults,
};

pub const SITE_UPLOAD: UploadSpec = UploadSpec {
    form_id: "siteForm",
    mode: UploadMode::SingleFile,
    target: ListingTarget::Sites,
};

pub const CRITERIA_UPLOAD: UploadSpec = UploadSpec {
    form_id: "criteriaForm",
    mode: UploadMode::SingleFile,
    target: ListingTarget::Criteria,
};

/// Status element id for a form: strip the `Form` suffix, append `Status`.
pub fn status_element_id(form_id: &str) -> String {
    let stem = form_id.strip_suffix("Form").unwrap_or(form_id);
    format!("{stem}Status")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_id_derives_from_form_id() {
        assert_eq!(status_element_id("zipForm"), "zipStatus");
        assert_eq!(status_element_id("siteForm"), "siteStatus");
        assert_eq!(status_element_id("criteriaForm"), "criteriaStatus");
    }

    #[test]
    fn status_id_without_form_suffix_appends_status() {
        assert_eq!(status_element_id("upload"), "uploadStatus");
    }

    #[test]
    fn each_upload_spec_names_a_distinct_refresh_target() {
        let targets = [ZIP_UPLOAD.target, SITE_UPLOAD.target, CRITERIA_UPLOAD.target];
        assert_eq!(targets[0], ListingTarget::TestResults);
        assert_eq!(targets[1], ListingTarget::Sites);
        assert_eq!(targets[2], ListingTarget::Criteria);
    }

    #[test]
    fn zip_upload_is_the_only_multi_file_form() {
        assert_eq!(ZIP_UPLOAD.mode, UploadMode::MultiFile);
        assert_eq!(SITE_UPLOAD.mode, UploadMode::SingleFile);
        assert_eq!(CRITERIA_UPLOAD.mode, UploadMode::SingleFile);
    }

    #[test]
    fn validation_messages_match_selection_mode() {
        assert_eq!(
            UploadMode::MultiFile.empty_message(),
            "Please select files to upload."
        );
        assert_eq!(
            UploadMode::SingleFile.empty_message(),
            "Please select a file to upload."
        );
    }
}
