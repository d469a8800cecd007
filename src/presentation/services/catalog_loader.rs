use super::AsyncExecutor;
use crate::application::UseCaseContainer;
use crate::application::dto::CatalogResult;
use crate::domain::entities::{CatalogKind, CatalogLoad, FilterOption};
use crate::presentation::components::FilterCoordinator;
use std::sync::Arc;

/// Drives remote catalog fetches into a coordinator.
pub struct CatalogLoader {
    use_cases: Arc<UseCaseContainer>,
    executor: AsyncExecutor,
}

impl CatalogLoader {
    pub fn new(use_cases: Arc<UseCaseContainer>, executor: AsyncExecutor) -> Self {
        Self {
            use_cases,
            executor,
        }
    }

    /// Fetch all four catalogs concurrently. Returns how many results were
    /// accepted by the coordinator.
    pub fn load_all(&self, coordinator: &mut FilterCoordinator) -> usize {
        let tickets: Vec<_> = CatalogKind::ALL
            .into_iter()
            .map(|kind| coordinator.begin_load(kind))
            .collect();
        let context = coordinator.context().clone();

        let load_catalogs = Arc::clone(&self.use_cases.load_catalogs);
        let batch = self
            .executor
            .execute(async move { load_catalogs.execute(&context).await });

        let mut accepted = 0;
        for ticket in tickets {
            let load = batch
                .results
                .iter()
                .find(|result| result.kind == ticket.kind())
                .cloned()
                .map_or_else(|| missing_result(ticket.kind()), CatalogResult::into_load);
            if coordinator.finish_load(ticket, load) {
                accepted += 1;
            }
        }
        tracing::debug!("Accepted {} of {} catalog results", accepted, CatalogKind::ALL.len());
        accepted
    }

    pub fn reload(&self, kind: CatalogKind, coordinator: &mut FilterCoordinator) -> bool {
        let ticket = coordinator.begin_load(kind);
        let context = coordinator.context().clone();

        let load_catalogs = Arc::clone(&self.use_cases.load_catalogs);
        let result = self
            .executor
            .execute(async move { load_catalogs.execute_one(kind, &context).await });

        coordinator.finish_load(ticket, CatalogResult::new(kind, result).into_load())
    }
}

fn missing_result(kind: CatalogKind) -> CatalogLoad<Vec<FilterOption>> {
    CatalogLoad::Failed(format!("no {:?} result in catalog batch", kind))
}
