pub mod charts;
pub mod controls;
pub mod summary;
pub mod view;

pub use view::DashboardPage;
