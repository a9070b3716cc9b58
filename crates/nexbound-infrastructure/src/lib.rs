pub mod config_service;
pub mod mock_backend;
pub mod paths;
pub mod secret_service;

pub use crate::config_service::ConfigService;
pub use crate::mock_backend::{MockAuthService, MockDataService};
pub use crate::paths::NexboundPaths;
pub use crate::secret_service::SecretServiceImpl;
