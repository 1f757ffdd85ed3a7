//! Reusable UI components.

mod config_error;
mod loading;
mod member_row;
mod stat_card;

pub use config_error::ConfigError;
pub use loading::Loading;
pub use member_row::MemberRow;
pub use stat_card::StatCard;
