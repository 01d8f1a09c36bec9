pub mod criteria;
pub mod dropzone;
pub mod layout;
pub mod modal;
pub mod plots;
pub mod sites;
pub mod test_results;

pub use criteria::{render_criteria, CriteriaEditor};
pub use dropzone::UploadStatus;
pub use plots::render_plots;
pub use sites::{render_sites, SiteEditor};
pub use test_results::{
    render_test_results, test_result_detail, test_result_to_row, TestResultRow,
};
