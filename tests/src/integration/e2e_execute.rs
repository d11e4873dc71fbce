//! # End-to-End Execute Flows
//!
//! Full authorization scenarios against a 3-owner engine with threshold 2,
//! plus the 10-owner cap boundary. Success cases verify the ledger credit
//! and the nonce advance together; failure cases verify that neither moved.

#[cfg(test)]
mod tests {
    use crate::integration::fixtures::*;
    use qv_authorization::{AuthorizationApi, EngineError, SignatureSet};
    use shared_types::{Address, U256};

    const TARGET: Address = [0x42; 20];

    #[test]
    fn every_two_of_three_pair_can_authorize() {
        init_tracing();
        let keys = wallet(3);

        for (a, b) in [(0, 1), (0, 2), (1, 2)] {
            let mut engine = engine(2, &keys);
            let value = U256::from(SMALL_TRANSFER);

            // First send at nonce 0
            let sigs = sign_action(&[&keys[a], &keys[b]], &TARGET, value, &[], 0);
            let receipt = engine.execute(sigs, TARGET, value, Vec::new()).unwrap();
            assert_eq!(receipt.nonce_used, 0);
            assert_eq!(engine.current_nonce(), 1);
            assert_eq!(engine.dispatcher().balance_of(&TARGET), value);

            // Re-signed for nonce 1, the same pair can send again
            let sigs = sign_action(&[&keys[a], &keys[b]], &TARGET, value, &[], 1);
            engine.execute(sigs, TARGET, value, Vec::new()).unwrap();
            assert_eq!(engine.current_nonce(), 2);
            assert_eq!(
                engine.dispatcher().balance_of(&TARGET),
                value * U256::from(2)
            );
        }
    }

    #[test]
    fn registry_style_dispatch_carries_payload_and_value() {
        let keys = wallet(3);
        let mut engine = engine(2, &keys);
        let value = U256::from(SMALL_TRANSFER);
        let payload = vec![0x12, 0x34, 0x56, 0x78, 0x30, 0x39];

        let sigs = sign_action(&[&keys[0], &keys[1]], &TARGET, value, &payload, 0);
        engine
            .execute(sigs, TARGET, value, payload.clone())
            .unwrap();

        let records = engine.dispatcher().records();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].target, TARGET);
        assert_eq!(records[0].value, value);
        assert_eq!(records[0].payload, payload);
    }

    #[test]
    fn ten_owners_ten_signers_at_the_cap() {
        let keys = wallet(10);
        let mut engine = engine(10, &keys);
        let value = U256::from(SMALL_TRANSFER);

        let signers: Vec<_> = keys.iter().collect();
        let sigs = sign_action(&signers, &TARGET, value, &[], 0);

        engine.execute(sigs, TARGET, value, Vec::new()).unwrap();
        assert_eq!(engine.current_nonce(), 1);
        assert_eq!(engine.dispatcher().balance_of(&TARGET), value);
    }

    #[test]
    fn non_owner_signer_rejected() {
        let keys = wallet(4);
        // Owners are keys[0..3]; keys[3] is an outsider
        let mut engine = engine(2, &keys[..3]);
        let value = U256::from(SMALL_TRANSFER);

        let sigs = sign_action(&[&keys[0], &keys[3]], &TARGET, value, &[], 0);

        assert_eq!(
            engine.execute(sigs, TARGET, value, Vec::new()),
            Err(EngineError::QuorumNotMet)
        );
        assert_eq!(engine.current_nonce(), 0);
        assert_eq!(engine.dispatcher().balance_of(&TARGET), U256::zero());
    }

    #[test]
    fn fewer_signers_than_threshold_rejected() {
        let keys = wallet(3);
        let mut engine = engine(2, &keys);
        let value = U256::from(SMALL_TRANSFER);

        let sigs = sign_action(&[&keys[0]], &TARGET, value, &[], 0);

        assert_eq!(
            engine.execute(sigs, TARGET, value, Vec::new()),
            Err(EngineError::QuorumNotMet)
        );
        assert_eq!(engine.current_nonce(), 0);
    }

    #[test]
    fn one_signer_signing_twice_rejected() {
        let keys = wallet(3);
        let mut engine = engine(2, &keys);
        let value = U256::from(SMALL_TRANSFER);

        let sigs = sign_action(&[&keys[0], &keys[0]], &TARGET, value, &[], 0);

        assert_eq!(
            engine.execute(sigs, TARGET, value, Vec::new()),
            Err(EngineError::QuorumNotMet)
        );
        assert_eq!(engine.current_nonce(), 0);
    }

    #[test]
    fn signers_in_wrong_order_rejected() {
        let keys = wallet(3);
        let mut engine = engine(2, &keys);
        let value = U256::from(SMALL_TRANSFER);

        // Descending order: valid owners, valid signatures, wrong encoding
        let sigs = sign_action(&[&keys[1], &keys[0]], &TARGET, value, &[], 0);

        assert_eq!(
            engine.execute(sigs, TARGET, value, Vec::new()),
            Err(EngineError::QuorumNotMet)
        );
        assert_eq!(engine.current_nonce(), 0);
        assert_eq!(engine.dispatcher().balance_of(&TARGET), U256::zero());
    }

    #[test]
    fn zero_signatures_rejected() {
        let keys = wallet(3);
        let mut engine = engine(2, &keys);

        assert_eq!(
            engine.execute(
                SignatureSet::default(),
                TARGET,
                U256::from(SMALL_TRANSFER),
                Vec::new()
            ),
            Err(EngineError::QuorumNotMet)
        );
        assert_eq!(engine.current_nonce(), 0);
    }

    #[test]
    fn nonce_advances_exactly_once_per_admitted_action() {
        let keys = wallet(3);
        let mut engine = engine(2, &keys);
        let value = U256::from(1);

        for expected_nonce in 0..5 {
            assert_eq!(engine.current_nonce(), expected_nonce);
            let sigs = sign_action(&[&keys[0], &keys[1]], &TARGET, value, &[], expected_nonce);
            let receipt = engine.execute(sigs, TARGET, value, Vec::new()).unwrap();
            assert_eq!(receipt.nonce_used, expected_nonce);
        }
        assert_eq!(engine.current_nonce(), 5);
    }

    #[test]
    fn failing_target_consumes_nonce_without_credit() {
        use qv_authorization::{AuthorizationEngine, LedgerDispatcher};

        let keys = wallet(3);
        let mut ledger = LedgerDispatcher::new();
        ledger.fail_target(TARGET);
        let mut engine =
            AuthorizationEngine::new(2, owners(&keys), ENGINE_ADDR, ledger).unwrap();
        let value = U256::from(SMALL_TRANSFER);

        let sigs = sign_action(&[&keys[0], &keys[1]], &TARGET, value, &[], 0);
        let result = engine.execute(sigs, TARGET, value, Vec::new());

        assert!(matches!(result, Err(EngineError::DispatchFailed { .. })));
        assert_eq!(engine.current_nonce(), 1);
        assert_eq!(engine.dispatcher().balance_of(&TARGET), U256::zero());

        // The consumed nonce is gone: the same signatures can never pass again
        let replay = sign_action(&[&keys[0], &keys[1]], &TARGET, value, &[], 0);
        assert_eq!(
            engine.execute(replay, TARGET, value, Vec::new()),
            Err(EngineError::QuorumNotMet)
        );
    }

    #[test]
    fn creation_fails_with_eleven_owners() {
        use qv_authorization::{AuthorizationEngine, LedgerDispatcher};

        let keys = wallet(11);
        let result =
            AuthorizationEngine::new(2, owners(&keys), ENGINE_ADDR, LedgerDispatcher::new());

        assert!(matches!(
            result,
            Err(EngineError::InvalidOwnerConfiguration { .. })
        ));
    }

    #[test]
    fn creation_fails_with_duplicate_owners() {
        use qv_authorization::{AuthorizationEngine, LedgerDispatcher};

        let keys = wallet(3);
        let mut list = owners(&keys);
        list[1] = list[0];

        let result = AuthorizationEngine::new(3, list, ENGINE_ADDR, LedgerDispatcher::new());

        assert!(matches!(
            result,
            Err(EngineError::InvalidOwnerConfiguration { .. })
        ));
    }
}
