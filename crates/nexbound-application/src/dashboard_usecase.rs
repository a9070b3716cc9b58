//! Dashboard use case.
//!
//! Coordinates the data collaborator, the drafting collaborator and the view
//! state of a mounted dashboard. Collaborator calls run without the store
//! lock; their results are applied only if the request ticket is still the
//! latest one for its slot.

use std::sync::Arc;

use nexbound_core::campaign::DataService;
use nexbound_core::draft::{DraftField, DraftingService};
use nexbound_core::error::{NexboundError, Result};
use nexbound_core::request::{RequestSequencer, RequestSlot, RequestTicket};
use nexbound_core::view::{ActiveTab, ViewTransition};

use crate::state::{DashboardData, DashboardState};
use crate::store::{AppStore, Completion};

pub struct DashboardUseCase {
    store: Arc<AppStore>,
    data_service: Arc<dyn DataService>,
    drafting_service: Arc<dyn DraftingService>,
}

impl DashboardUseCase {
    pub fn new(
        store: Arc<AppStore>,
        data_service: Arc<dyn DataService>,
        drafting_service: Arc<dyn DraftingService>,
    ) -> Self {
        Self {
            store,
            data_service,
            drafting_service,
        }
    }

    /// Fetches stats, campaigns and weekly activity concurrently.
    ///
    /// Any failure leaves the dashboard in `Failed` until [`Self::reload`].
    pub(crate) async fn fetch_data(&self, ticket: RequestTicket) -> Completion<()> {
        tracing::debug!("[Dashboard] Fetching data (request #{})", ticket.seq());
        let result = tokio::try_join!(
            self.data_service.get_stats(),
            self.data_service.get_campaigns(),
            self.data_service.get_weekly_activity(),
        );

        self.store
            .update(|inner| {
                if !inner.requests.is_current(ticket) {
                    tracing::debug!("[Dashboard] Discarding stale data (request #{})", ticket.seq());
                    return Completion::Stale;
                }
                let Some(dashboard) = inner.state.dashboard.as_mut() else {
                    return Completion::Stale;
                };
                dashboard.data = match result {
                    Ok((stats, campaigns, activity)) => {
                        tracing::info!("[Dashboard] Loaded {} campaigns", campaigns.len());
                        DashboardData::Ready {
                            stats,
                            campaigns,
                            activity,
                        }
                    }
                    Err(err) => {
                        tracing::error!("[Dashboard] Failed to fetch dashboard data: {}", err);
                        DashboardData::Failed {
                            message: err.to_string(),
                        }
                    }
                };
                Completion::Applied(())
            })
            .await
    }

    /// Puts the dashboard back into `Loading` and fetches everything again.
    pub async fn reload(&self) -> Result<Completion<()>> {
        let ticket = self
            .with_dashboard(|dashboard, requests| {
                dashboard.data = DashboardData::Loading;
                Ok(requests.issue(RequestSlot::DashboardData))
            })
            .await?;
        Ok(self.fetch_data(ticket).await)
    }

    pub async fn select_tab(&self, tab: ActiveTab) -> Result<()> {
        self.apply(ViewTransition::SelectTab(tab)).await
    }

    /// Loads a campaign into the writer and switches to it in one step.
    ///
    /// # Errors
    ///
    /// `NotFound` when no loaded campaign has this id.
    pub async fn edit_campaign(&self, campaign_id: &str) -> Result<()> {
        self.with_dashboard(|dashboard, requests| {
            let campaign = dashboard
                .data
                .find_campaign(campaign_id)
                .cloned()
                .ok_or_else(|| NexboundError::not_found("campaign", campaign_id))?;
            dashboard.view.apply(ViewTransition::EditCampaign(campaign))?;
            requests.invalidate(RequestSlot::Draft);
            Ok(())
        })
        .await?;
        tracing::info!("[Dashboard] Editing campaign {}", campaign_id);
        Ok(())
    }

    pub async fn update_field(&self, field: DraftField, value: impl Into<String>) -> Result<()> {
        self.apply(ViewTransition::UpdateField {
            field,
            value: value.into(),
        })
        .await
    }

    /// Clears the writer and opens it. A generation still in flight is
    /// discarded when it resolves.
    pub async fn start_new_draft(&self) -> Result<()> {
        self.with_dashboard(|dashboard, requests| {
            dashboard.view.apply(ViewTransition::StartNewDraft)?;
            requests.invalidate(RequestSlot::Draft);
            Ok(())
        })
        .await
    }

    /// Sends the form to the drafting collaborator and stores whatever text
    /// it returns, including its error messages.
    ///
    /// # Errors
    ///
    /// - `Busy` while a previous submission is unresolved
    /// - `Validation` when a required field is empty; the collaborator is not
    ///   called
    pub async fn submit_draft(&self) -> Result<Completion<String>> {
        let (request, ticket) = self
            .with_dashboard(|dashboard, requests| {
                let request = dashboard.view.draft_mut().begin_submit()?;
                Ok((request, requests.issue(RequestSlot::Draft)))
            })
            .await?;

        tracing::info!("[Dashboard] Generating draft (tone: {})", request.tone);
        let text = self.drafting_service.generate_draft(&request).await;

        let completion = self
            .store
            .update(|inner| {
                if !inner.requests.is_current(ticket) {
                    return Completion::Stale;
                }
                match inner.state.dashboard.as_mut() {
                    Some(dashboard) => {
                        dashboard.view.draft_mut().finish_submit(text.clone());
                        Completion::Applied(text)
                    }
                    None => Completion::Stale,
                }
            })
            .await;

        if !completion.is_applied() {
            tracing::debug!("[Dashboard] Discarding stale draft (request #{})", ticket.seq());
        }
        Ok(completion)
    }

    async fn apply(&self, transition: ViewTransition) -> Result<()> {
        self.with_dashboard(|dashboard, _| dashboard.view.apply(transition))
            .await
    }

    async fn with_dashboard<R>(
        &self,
        f: impl FnOnce(&mut DashboardState, &mut RequestSequencer) -> Result<R>,
    ) -> Result<R> {
        self.store
            .update(|inner| match inner.state.dashboard.as_mut() {
                Some(dashboard) => f(dashboard, &mut inner.requests),
                None => Err(NexboundError::validation("The dashboard is not open")),
            })
            .await
    }
}
