pub mod dashboard;

pub use dashboard::{dashboard_page, record_panels, DashboardVm};
