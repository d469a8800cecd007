use crate::application::use_cases::LoadFilterCatalogs;
use crate::domain::repositories::FilterCatalogRepository;
use std::sync::Arc;

pub struct UseCaseContainer {
    pub load_catalogs: Arc<LoadFilterCatalogs>,
}

impl UseCaseContainer {
    pub fn new(catalog_repository: Arc<dyn FilterCatalogRepository>) -> Self {
        Self {
            load_catalogs: Arc::new(LoadFilterCatalogs::new(catalog_repository)),
        }
    }
}
