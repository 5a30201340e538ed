//! # Asset Registry Service
//!
//! Production service wiring the three state transitions to the driven
//! ports. One invocation = one ledger transaction: the service reads,
//! validates ownership, stages its writes in a single batch, commits, and
//! queues events. It holds no state between calls and never retries.
//!
//! ## Authorization
//!
//! | Operation | Rule |
//! |-----------|------|
//! | `register_asset` | configurable [`RegistrationPolicy`] + administrator list |
//! | `list_for_sale` | caller == stored owner (exact string equality) |
//! | `transfer_ownership` | caller == stored owner (exact string equality) |
//!
//! Identity strings are compared literally; no normalization or
//! case-folding is ever applied.

use crate::adapters::{InMemoryLedger, RecordingEventSink, StaticIdentity};
use crate::domain::entities::{Asset, CONFIDENTIAL_COLLECTION};
use crate::errors::RegistryError;
use crate::events::{event_names, CarRegisteredPayload};
use crate::ports::inbound::AssetRegistry;
use crate::ports::outbound::{EventSink, IdentityOracle, LedgerStore, WriteBatch};

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{info, instrument, warn};
use uuid::Uuid;

// =============================================================================
// CONFIGURATION
// =============================================================================

/// Who may create the confidential record for a new asset.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RegistrationPolicy {
    /// Caller must equal the declared owner (administrators exempt).
    #[default]
    DeclaredOwner,
    /// Any authenticated caller may register an asset under any owner.
    /// Matches the legacy marketplace behavior; prefer `DeclaredOwner`.
    Open,
}

/// Asset Registry Service configuration.
#[derive(Clone, Debug)]
pub struct ServiceConfig {
    /// Registration authorization policy.
    pub registration_policy: RegistrationPolicy,
    /// Identities allowed to register assets for any owner.
    pub administrators: Vec<String>,
    /// Private collection holding confidential records.
    pub confidential_collection: String,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            registration_policy: RegistrationPolicy::default(),
            administrators: Vec::new(),
            confidential_collection: CONFIDENTIAL_COLLECTION.to_string(),
        }
    }
}

// =============================================================================
// STATISTICS
// =============================================================================

/// Counters maintained by the service.
#[derive(Clone, Debug, Default)]
pub struct ServiceStats {
    /// Operations that completed successfully.
    pub operations_executed: u64,
    /// Assets registered.
    pub assets_registered: u64,
    /// Public projections published (including overwrites).
    pub listings_published: u64,
    /// Ownership transfers completed.
    pub transfers_completed: u64,
    /// Operations rejected by an ownership/policy check.
    pub rejected_unauthorized: u64,
    /// Events queued on the sink.
    pub events_emitted: u64,
}

// =============================================================================
// SERVICE
// =============================================================================

/// The Asset Registry Service.
///
/// Generic over the three driven ports so the host platform can supply its
/// own adapters; tests use the in-memory ones from [`crate::adapters`].
pub struct AssetRegistryService<L, I, E>
where
    L: LedgerStore,
    I: IdentityOracle,
    E: EventSink,
{
    /// Service configuration.
    config: ServiceConfig,
    /// Partitioned ledger store.
    ledger: Arc<L>,
    /// Caller identity oracle.
    identity: Arc<I>,
    /// Post-commit event sink.
    events: Arc<E>,
    /// Service statistics.
    stats: Arc<RwLock<ServiceStats>>,
}

impl<L, I, E> AssetRegistryService<L, I, E>
where
    L: LedgerStore,
    I: IdentityOracle,
    E: EventSink,
{
    /// Creates a new service over the given adapters.
    pub fn new(ledger: L, identity: I, events: E, config: ServiceConfig) -> Self {
        Self {
            config,
            ledger: Arc::new(ledger),
            identity: Arc::new(identity),
            events: Arc::new(events),
            stats: Arc::new(RwLock::new(ServiceStats::default())),
        }
    }

    /// Current service statistics.
    pub async fn stats(&self) -> ServiceStats {
        self.stats.read().await.clone()
    }

    /// The ledger adapter (test inspection).
    #[must_use]
    pub fn ledger(&self) -> &L {
        self.ledger.as_ref()
    }

    /// The identity oracle adapter (test inspection).
    #[must_use]
    pub fn identity_oracle(&self) -> &I {
        self.identity.as_ref()
    }

    /// The event sink adapter (test inspection).
    #[must_use]
    pub fn event_sink(&self) -> &E {
        self.events.as_ref()
    }

    /// Registers a new asset in the confidential partition.
    ///
    /// Overwrites any record already stored at `id`; fresh identifiers are
    /// the caller's responsibility. Queues a `CarRegistered` event carrying
    /// the non-confidential fields only.
    #[allow(clippy::too_many_arguments)]
    #[instrument(skip_all, fields(id = %id, tx_id = %Uuid::new_v4()))]
    pub async fn register_asset(
        &self,
        id: &str,
        company: &str,
        model: &str,
        chassis_no: &str,
        color: &str,
        owner: &str,
        year: i32,
    ) -> Result<(), RegistryError> {
        self.authorize_registration(owner).await?;

        let asset = Asset::registered(id, company, model, chassis_no, color, owner, year);
        let record = asset.encode()?;

        let mut batch = WriteBatch::new();
        batch.confidential_put(self.config.confidential_collection.as_str(), id, record);
        self.ledger.commit(batch).await?;

        let payload = CarRegisteredPayload::from_asset(&asset).encode()?;
        self.events
            .emit(event_names::CAR_REGISTERED, payload)
            .await?;

        {
            let mut stats = self.stats.write().await;
            stats.operations_executed += 1;
            stats.assets_registered += 1;
            stats.events_emitted += 1;
        }

        info!(year, "asset registered");
        Ok(())
    }

    /// Publishes the public projection of an asset at the given price.
    ///
    /// The price is taken as supplied; positivity is not enforced here.
    #[instrument(skip_all, fields(id = %id, price = price, tx_id = %Uuid::new_v4()))]
    pub async fn list_for_sale(&self, id: &str, price: i64) -> Result<(), RegistryError> {
        let mut asset = self.read_asset(id).await?;
        self.ensure_owner(&asset, "list the asset for sale").await?;

        // Sale state travels on the projection only; the stored
        // confidential record keeps for_sale = false.
        asset.mark_for_sale(price);
        let listing = asset.to_listing().encode()?;

        let mut batch = WriteBatch::new();
        batch.public_put(id, listing);
        self.ledger.commit(batch).await?;

        {
            let mut stats = self.stats.write().await;
            stats.operations_executed += 1;
            stats.listings_published += 1;
        }

        info!("asset listed for sale");
        Ok(())
    }

    /// Hands the asset to a new owner and retracts its public projection.
    #[instrument(skip_all, fields(id = %id, tx_id = %Uuid::new_v4()))]
    pub async fn transfer_ownership(
        &self,
        id: &str,
        new_owner: &str,
    ) -> Result<(), RegistryError> {
        let mut asset = self.read_asset(id).await?;
        self.ensure_owner(&asset, "transfer ownership").await?;

        asset.transfer_to(new_owner);
        let record = asset.encode()?;

        // The confidential rewrite and the projection retraction land
        // together or not at all.
        let mut batch = WriteBatch::new();
        batch
            .confidential_put(self.config.confidential_collection.as_str(), id, record)
            .public_delete(id);
        self.ledger.commit(batch).await?;

        {
            let mut stats = self.stats.write().await;
            stats.operations_executed += 1;
            stats.transfers_completed += 1;
        }

        info!("ownership transferred");
        Ok(())
    }

    /// Applies the registration policy before any write.
    async fn authorize_registration(&self, owner: &str) -> Result<(), RegistryError> {
        match self.config.registration_policy {
            RegistrationPolicy::Open => Ok(()),
            RegistrationPolicy::DeclaredOwner => {
                let caller = self.identity.caller_identity().await?;
                if caller == owner || self.is_administrator(&caller) {
                    Ok(())
                } else {
                    warn!("registration rejected: caller is not the declared owner");
                    self.stats.write().await.rejected_unauthorized += 1;
                    Err(RegistryError::Unauthorized {
                        reason: "only the declared owner or an administrator can register an asset"
                            .to_string(),
                    })
                }
            }
        }
    }

    fn is_administrator(&self, caller: &str) -> bool {
        self.config.administrators.iter().any(|admin| admin == caller)
    }

    /// Reads and decodes the confidential record at `id`.
    ///
    /// A failed confidential read is indistinguishable from a missing
    /// record for this caller, so both surface as `NotFound`.
    async fn read_asset(&self, id: &str) -> Result<Asset, RegistryError> {
        let bytes = match self
            .ledger
            .get_confidential(&self.config.confidential_collection, id)
            .await
        {
            Ok(Some(bytes)) => bytes,
            Ok(None) => {
                return Err(RegistryError::NotFound { id: id.to_string() });
            }
            Err(err) => {
                warn!(error = %err, "confidential read failed");
                return Err(RegistryError::NotFound { id: id.to_string() });
            }
        };
        Ok(Asset::decode(&bytes)?)
    }

    /// Resolves the caller and checks it against the stored owner.
    async fn ensure_owner(
        &self,
        asset: &Asset,
        action: &'static str,
    ) -> Result<String, RegistryError> {
        let caller = self.identity.caller_identity().await?;
        if caller != asset.owner {
            warn!("ownership check failed");
            self.stats.write().await.rejected_unauthorized += 1;
            return Err(RegistryError::Unauthorized {
                reason: format!("only the owner can {action}"),
            });
        }
        Ok(caller)
    }
}

/// Creates a service over in-memory adapters with `caller` as the resolved
/// identity (for testing).
#[must_use]
pub fn create_test_service(
    caller: &str,
) -> AssetRegistryService<InMemoryLedger, StaticIdentity, RecordingEventSink> {
    AssetRegistryService::new(
        InMemoryLedger::new(),
        StaticIdentity::new(caller),
        RecordingEventSink::new(),
        ServiceConfig::default(),
    )
}

// =============================================================================
// AssetRegistry Implementation
// =============================================================================

#[async_trait]
impl<L, I, E> AssetRegistry for AssetRegistryService<L, I, E>
where
    L: LedgerStore,
    I: IdentityOracle,
    E: EventSink,
{
    async fn register_asset(
        &self,
        id: &str,
        company: &str,
        model: &str,
        chassis_no: &str,
        color: &str,
        owner: &str,
        year: i32,
    ) -> Result<(), RegistryError> {
        Self::register_asset(self, id, company, model, chassis_no, color, owner, year).await
    }

    async fn list_for_sale(&self, id: &str, price: i64) -> Result<(), RegistryError> {
        Self::list_for_sale(self, id, price).await
    }

    async fn transfer_ownership(&self, id: &str, new_owner: &str) -> Result<(), RegistryError> {
        Self::transfer_ownership(self, id, new_owner).await
    }
}

// =============================================================================
// TESTS
// =============================================================================
