//! Page components.

mod configuration;
mod dashboard;
mod sam_reports;
mod welcome_wagon;

pub use configuration::ConfigurationPage;
pub use dashboard::DashboardPage;
pub use sam_reports::SamReportsPage;
pub use welcome_wagon::WelcomeWagonPage;
