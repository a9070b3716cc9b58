use std::sync::Arc;

use nexbound_core::campaign::DataService;
use nexbound_core::draft::DraftingService;
use nexbound_core::user::AuthService;

use crate::dashboard_usecase::DashboardUseCase;
use crate::navigation_usecase::NavigationUseCase;
use crate::session_usecase::SessionUseCase;
use crate::store::AppStore;

/// The store and the use cases that share it.
#[derive(Clone)]
pub struct NexboundApp {
    pub store: Arc<AppStore>,
    pub session: Arc<SessionUseCase>,
    pub navigation: Arc<NavigationUseCase>,
    pub dashboard: Arc<DashboardUseCase>,
}

impl NexboundApp {
    pub fn new(
        auth_service: Arc<dyn AuthService>,
        data_service: Arc<dyn DataService>,
        drafting_service: Arc<dyn DraftingService>,
    ) -> Self {
        let store = Arc::new(AppStore::new());
        let dashboard = Arc::new(DashboardUseCase::new(
            store.clone(),
            data_service,
            drafting_service,
        ));
        let navigation = Arc::new(NavigationUseCase::new(store.clone(), dashboard.clone()));
        let session = Arc::new(SessionUseCase::new(
            store.clone(),
            auth_service,
            navigation.clone(),
        ));

        Self {
            store,
            session,
            navigation,
            dashboard,
        }
    }
}
