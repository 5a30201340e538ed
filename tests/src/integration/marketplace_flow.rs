//! # Marketplace Flow
//!
//! End-to-end asset lifecycles through the full service: register in the
//! confidential partition, list into the public partition, transfer to a
//! new owner. Identities switch mid-flow the way different transaction
//! submitters would appear to the handler.

#[cfg(test)]
mod tests {
    use asset_registry::prelude::*;

    /// The two-org marketplace scenario:
    ///
    /// 1. orgA.alice registers CAR1
    /// 2. orgA.bob tries to list it -> Unauthorized
    /// 3. orgA.alice lists it at 5000 -> projection visible to all peers
    /// 4. orgA.alice transfers to orgB.carol -> projection retracted,
    ///    confidential owner is orgB.carol
    #[tokio::test]
    async fn two_org_marketplace_scenario() {
        let service = create_test_service("orgA.alice");

        service
            .register_asset(
                "CAR1",
                "Acme Motors",
                "Roadster",
                "CH-0001",
                "blue",
                "orgA.alice",
                2021,
            )
            .await
            .unwrap();

        // A colleague in the same org is still not the owner.
        service.identity_oracle().set("orgA.bob");
        let err = service.list_for_sale("CAR1", 5000).await.unwrap_err();
        assert!(err.is_unauthorized());
        assert!(service.ledger().public_record("CAR1").is_none());

        // The owner lists it.
        service.identity_oracle().set("orgA.alice");
        service.list_for_sale("CAR1", 5000).await.unwrap();
        let listing =
            AssetListing::decode(&service.ledger().public_record("CAR1").unwrap()).unwrap();
        assert!(listing.for_sale);
        assert_eq!(listing.price, 5000);

        // The owner sells across org boundaries.
        service
            .transfer_ownership("CAR1", "orgB.carol")
            .await
            .unwrap();
        assert!(service.ledger().public_record("CAR1").is_none());

        let record = service
            .ledger()
            .confidential_record(CONFIDENTIAL_COLLECTION, "CAR1")
            .unwrap();
        let asset = Asset::decode(&record).unwrap();
        assert_eq!(asset.owner, "orgB.carol");
        assert!(!asset.for_sale);
        assert!(asset.bids.is_empty());
    }

    /// owner1 -> owner2 -> owner3: each transfer re-authorizes against the
    /// owner written by the previous one.
    #[tokio::test]
    async fn chained_transfers_follow_the_rewritten_owner() {
        let service = create_test_service("orgA.owner1");

        service
            .register_asset("CAR7", "Acme", "Wagon", "CH-0007", "green", "orgA.owner1", 2018)
            .await
            .unwrap();

        service
            .transfer_ownership("CAR7", "orgB.owner2")
            .await
            .unwrap();

        // owner1 lost control the moment the batch committed.
        let err = service
            .transfer_ownership("CAR7", "orgA.owner1")
            .await
            .unwrap_err();
        assert!(err.is_unauthorized());

        service.identity_oracle().set("orgB.owner2");
        service
            .transfer_ownership("CAR7", "orgC.owner3")
            .await
            .unwrap();

        let record = service
            .ledger()
            .confidential_record(CONFIDENTIAL_COLLECTION, "CAR7")
            .unwrap();
        assert_eq!(Asset::decode(&record).unwrap().owner, "orgC.owner3");
    }

    /// A new owner can relist; the projection cycle repeats.
    #[tokio::test]
    async fn relist_after_transfer() {
        let service = create_test_service("orgA.alice");

        service
            .register_asset("CAR2", "Acme", "Coupe", "CH-0002", "black", "orgA.alice", 2020)
            .await
            .unwrap();
        service.list_for_sale("CAR2", 9000).await.unwrap();
        service
            .transfer_ownership("CAR2", "orgB.carol")
            .await
            .unwrap();

        service.identity_oracle().set("orgB.carol");
        service.list_for_sale("CAR2", 9500).await.unwrap();

        let listing =
            AssetListing::decode(&service.ledger().public_record("CAR2").unwrap()).unwrap();
        assert_eq!(listing.price, 9500);
    }

    /// The projection never leaks confidential fields, across the whole
    /// lifecycle.
    #[tokio::test]
    async fn public_partition_never_sees_identities() {
        let service = create_test_service("orgA.alice");

        service
            .register_asset("CAR3", "Acme", "Sedan", "CH-0003", "white", "orgA.alice", 2022)
            .await
            .unwrap();
        service.list_for_sale("CAR3", 7500).await.unwrap();

        let json = String::from_utf8(service.ledger().public_record("CAR3").unwrap()).unwrap();
        assert!(!json.contains("orgA.alice"));
        assert!(!json.contains("owner"));
        assert!(!json.contains("bids"));

        // Events carry no identities either.
        for event in service.event_sink().events() {
            let payload = String::from_utf8(event.payload).unwrap();
            assert!(!payload.contains("orgA.alice"));
        }
    }

    /// A rejected commit mid-transfer leaves the previous owner in charge
    /// and the projection in place: the platform sees one failed
    /// transaction, not a half-applied one.
    #[tokio::test]
    async fn failed_transfer_is_all_or_nothing() {
        let service = create_test_service("orgA.alice");

        service
            .register_asset("CAR4", "Acme", "Truck", "CH-0004", "grey", "orgA.alice", 2017)
            .await
            .unwrap();
        service.list_for_sale("CAR4", 3000).await.unwrap();

        service.ledger().fail_next_commit();
        service
            .transfer_ownership("CAR4", "orgB.carol")
            .await
            .unwrap_err();

        let record = service
            .ledger()
            .confidential_record(CONFIDENTIAL_COLLECTION, "CAR4")
            .unwrap();
        assert_eq!(Asset::decode(&record).unwrap().owner, "orgA.alice");
        assert!(service.ledger().public_record("CAR4").is_some());

        // And the very same transfer succeeds when resubmitted.
        service
            .transfer_ownership("CAR4", "orgB.carol")
            .await
            .unwrap();
        assert!(service.ledger().public_record("CAR4").is_none());
    }

    /// Several assets move independently through one service.
    #[tokio::test]
    async fn independent_assets_do_not_interfere() {
        let service = create_test_service("orgA.alice");

        for (id, chassis) in [("CAR5", "CH-0005"), ("CAR6", "CH-0006")] {
            service
                .register_asset(id, "Acme", "Roadster", chassis, "blue", "orgA.alice", 2021)
                .await
                .unwrap();
        }

        service.list_for_sale("CAR5", 5000).await.unwrap();
        service
            .transfer_ownership("CAR6", "orgB.carol")
            .await
            .unwrap();

        assert!(service.ledger().public_record("CAR5").is_some());
        assert!(service.ledger().public_record("CAR6").is_none());

        let record = service
            .ledger()
            .confidential_record(CONFIDENTIAL_COLLECTION, "CAR5")
            .unwrap();
        assert_eq!(Asset::decode(&record).unwrap().owner, "orgA.alice");
    }
}
