//! # Registration Policy
//!
//! The registration authorization boundary is deployment-configurable:
//! `DeclaredOwner` (default) requires the caller to be the owner it
//! declares, `Open` accepts any authenticated registrar, and configured
//! administrators may register on anyone's behalf under either policy.

#[cfg(test)]
mod tests {
    use asset_registry::prelude::*;

    fn service_with(
        caller: &str,
        config: ServiceConfig,
    ) -> AssetRegistryService<InMemoryLedger, StaticIdentity, RecordingEventSink> {
        AssetRegistryService::new(
            InMemoryLedger::new(),
            StaticIdentity::new(caller),
            RecordingEventSink::new(),
            config,
        )
    }

    #[tokio::test]
    async fn default_policy_is_declared_owner() {
        let config = ServiceConfig::default();
        assert_eq!(config.registration_policy, RegistrationPolicy::DeclaredOwner);
    }

    #[tokio::test]
    async fn declared_owner_policy_rejects_third_party_registration() {
        let service = service_with("orgB.mallory", ServiceConfig::default());

        let err = service
            .register_asset("CAR1", "Acme", "Roadster", "CH-0001", "blue", "orgA.alice", 2021)
            .await
            .unwrap_err();
        assert!(err.is_unauthorized());

        // Nothing hit either partition, no event queued.
        assert!(service
            .ledger()
            .confidential_record(CONFIDENTIAL_COLLECTION, "CAR1")
            .is_none());
        assert!(service.event_sink().is_empty());
    }

    #[tokio::test]
    async fn declared_owner_policy_accepts_self_registration() {
        let service = service_with("orgA.alice", ServiceConfig::default());
        service
            .register_asset("CAR1", "Acme", "Roadster", "CH-0001", "blue", "orgA.alice", 2021)
            .await
            .unwrap();
        assert_eq!(service.event_sink().len(), 1);
    }

    #[tokio::test]
    async fn open_policy_preserves_legacy_behavior() {
        let service = service_with(
            "orgB.mallory",
            ServiceConfig {
                registration_policy: RegistrationPolicy::Open,
                ..ServiceConfig::default()
            },
        );

        service
            .register_asset("CAR1", "Acme", "Roadster", "CH-0001", "blue", "orgA.alice", 2021)
            .await
            .unwrap();

        let record = service
            .ledger()
            .confidential_record(CONFIDENTIAL_COLLECTION, "CAR1")
            .unwrap();
        assert_eq!(Asset::decode(&record).unwrap().owner, "orgA.alice");
    }

    #[tokio::test]
    async fn administrators_bypass_the_declared_owner_check() {
        let service = service_with(
            "registry.admin",
            ServiceConfig {
                administrators: vec!["registry.admin".to_string()],
                ..ServiceConfig::default()
            },
        );

        service
            .register_asset("CAR1", "Acme", "Roadster", "CH-0001", "blue", "orgA.alice", 2021)
            .await
            .unwrap();

        // Registering does not make the admin the owner.
        service.identity_oracle().set("orgA.alice");
        service.list_for_sale("CAR1", 5000).await.unwrap();
    }

    #[tokio::test]
    async fn admin_list_is_matched_exactly() {
        let service = service_with(
            "Registry.Admin",
            ServiceConfig {
                administrators: vec!["registry.admin".to_string()],
                ..ServiceConfig::default()
            },
        );

        // Case differs from the configured entry; no folding is applied.
        let err = service
            .register_asset("CAR1", "Acme", "Roadster", "CH-0001", "blue", "orgA.alice", 2021)
            .await
            .unwrap_err();
        assert!(err.is_unauthorized());
    }

    #[tokio::test]
    async fn declared_owner_policy_needs_a_resolvable_identity() {
        let service = AssetRegistryService::new(
            InMemoryLedger::new(),
            StaticIdentity::anonymous(),
            RecordingEventSink::new(),
            ServiceConfig::default(),
        );

        let err = service
            .register_asset("CAR1", "Acme", "Roadster", "CH-0001", "blue", "orgA.alice", 2021)
            .await
            .unwrap_err();
        assert!(matches!(err, RegistryError::Identity(_)));
    }
}
