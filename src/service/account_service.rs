use crate::model::response::account_responses::{AccountApi, ConnectionApi, StorageApi};
use crate::repository::CatalogRepository;
use crate::util::{format_size, storage_percent};

pub fn account_summary(catalog: &impl CatalogRepository) -> AccountApi {
    let user = catalog.user();
    AccountApi {
        id: user.id.clone(),
        name: user.name.clone(),
        email: user.email.clone(),
        avatar: user.avatar.clone(),
        plan: user.plan,
        storage: StorageApi {
            used: format_size(user.storage_used),
            limit: format_size(user.storage_limit),
            percent: storage_percent(user.storage_used, user.storage_limit),
        },
    }
}

pub fn connections(catalog: &impl CatalogRepository) -> Vec<ConnectionApi> {
    catalog
        .connections()
        .iter()
        .map(ConnectionApi::from)
        .collect()
}
