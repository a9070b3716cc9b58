//! Campaign domain module.
//!
//! - `model`: campaigns, dashboard statistics and weekly activity
//! - `service`: data collaborator trait

mod model;
mod service;

pub use model::{ActivityPoint, Campaign, CampaignStatus, DashboardStats};
pub use service::DataService;
