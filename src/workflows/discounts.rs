//! Discount window manager.
//!
//! Validates and activates/deactivates a store's percentage discount over a
//! date window. Deactivation only clears the active flag, so the recorded
//! parameters survive for later reactivation; reactivating an expired window
//! is allowed, the server remains the judge of "is it live now".

use std::sync::Arc;

use tracing::info;

use crate::errors::OpsError;
use crate::orders::types::basic_types::StoreId;
use crate::orders::types::order_types::{DiscountParams, StoreDiscount};
use crate::services::{OverviewCache, StoreService};

/// Manager over the store service's discount operations.
pub struct DiscountWindowManager {
    stores: Arc<dyn StoreService>,
    cache: Arc<dyn OverviewCache>,
}

impl DiscountWindowManager {
    /// Creates the manager over its collaborators.
    #[must_use]
    pub fn new(stores: Arc<dyn StoreService>, cache: Arc<dyn OverviewCache>) -> Self {
        Self { stores, cache }
    }

    /// Validates and sets the store's discount; always sets it active.
    pub async fn set_discount(
        &self, store_id: StoreId, params: DiscountParams,
    ) -> Result<(), OpsError> {
        params.validate()?;

        self.stores.set_discount(store_id, &params).await?;
        self.cache.invalidate_overview();
        info!(
            store_id = store_id.0,
            percentage = %params.percentage,
            "store discount set"
        );
        Ok(())
    }

    /// Clears the active flag, keeping the recorded parameters.
    ///
    /// Idempotent: deactivating an already-inactive discount is not an error
    /// and changes nothing on record.
    pub async fn deactivate(&self, store_id: StoreId) -> Result<(), OpsError> {
        self.stores.deactivate_discount(store_id).await?;
        self.cache.invalidate_overview();
        info!(store_id = store_id.0, "store discount deactivated");
        Ok(())
    }

    /// Re-submits the store's recorded discount through the set path, which
    /// implicitly marks it active again.
    pub async fn activate(
        &self, store_id: StoreId, existing: &StoreDiscount,
    ) -> Result<(), OpsError> {
        self.set_discount(store_id, DiscountParams::from(existing)).await
    }
}
