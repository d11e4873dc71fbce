//! # Governance Flows
//!
//! Owner replacement travels the same quorum path as value transfers: a
//! self-targeted action whose payload encodes the administrative call.

#[cfg(test)]
mod tests {
    use crate::integration::fixtures::*;
    use qv_authorization::{AdminCall, AuthorizationApi, EngineError};
    use shared_types::{Address, U256};

    const TARGET: Address = [0x42; 20];

    #[test]
    fn quorum_replaces_owners_old_keys_lock_out_new_keys_work() {
        init_tracing();
        let keys = wallet(9);
        let old = &keys[..3];
        let new = &keys[6..9];
        let mut engine = engine(2, old);

        // 2-of-3 of the current owners authorize handing control to the
        // new set with threshold 1
        let payload = AdminCall::SetOwners {
            threshold: 1,
            owners: owners(new),
        }
        .encode();
        let sigs = sign_action(&[&old[1], &old[2]], &ENGINE_ADDR, U256::zero(), &payload, 0);
        engine
            .execute(sigs, ENGINE_ADDR, U256::zero(), payload)
            .unwrap();

        assert_eq!(engine.current_nonce(), 1);
        assert_eq!(engine.threshold(), 1);
        assert_eq!(engine.owner_count(), 3);

        // The previous owners can no longer authorize anything
        let value = U256::from(SMALL_TRANSFER);
        let stale = sign_action(&[&old[0], &old[1]], &TARGET, value, &[], 1);
        assert_eq!(
            engine.execute(stale, TARGET, value, Vec::new()),
            Err(EngineError::QuorumNotMet)
        );
        assert_eq!(engine.current_nonce(), 1);

        // A single new owner meets the new threshold at the new nonce
        let fresh = sign_action(&[&new[0]], &TARGET, value, &[], 1);
        engine.execute(fresh, TARGET, value, Vec::new()).unwrap();
        assert_eq!(engine.current_nonce(), 2);
        assert_eq!(engine.dispatcher().balance_of(&TARGET), value);
    }

    #[test]
    fn replacement_is_visible_through_accessors() {
        let keys = wallet(5);
        let mut engine = engine(2, &keys[..3]);
        let new_owners = owners(&keys[3..5]);

        let payload = AdminCall::SetOwners {
            threshold: 2,
            owners: new_owners.clone(),
        }
        .encode();
        let sigs = sign_action(&[&keys[0], &keys[1]], &ENGINE_ADDR, U256::zero(), &payload, 0);
        engine
            .execute(sigs, ENGINE_ADDR, U256::zero(), payload)
            .unwrap();

        assert_eq!(engine.owner_count(), 2);
        assert_eq!(engine.threshold(), 2);
        assert_eq!(engine.owner_at(0), Some(new_owners[0]));
        assert_eq!(engine.owner_at(1), Some(new_owners[1]));
        assert_eq!(engine.owner_at(2), None);
    }

    #[test]
    fn direct_set_owners_call_is_unauthorized() {
        let keys = wallet(3);
        let mut engine = engine(2, &keys);
        let outsider: Address = [0x99; 20];

        let result = engine.set_owners(outsider, 1, vec![keys[0].address()]);

        assert_eq!(result, Err(EngineError::Unauthorized));
        assert_eq!(engine.owner_count(), 3);
        assert_eq!(engine.threshold(), 2);
    }

    #[test]
    fn invalid_replacement_keeps_old_owners_but_consumes_nonce() {
        let keys = wallet(3);
        let mut engine = engine(2, &keys);

        // Threshold larger than the named owner list
        let payload = AdminCall::SetOwners {
            threshold: 3,
            owners: owners(&keys[..2]),
        }
        .encode();
        let sigs = sign_action(&[&keys[0], &keys[1]], &ENGINE_ADDR, U256::zero(), &payload, 0);
        let result = engine.execute(sigs, ENGINE_ADDR, U256::zero(), payload);

        assert!(matches!(
            result,
            Err(EngineError::InvalidOwnerConfiguration { .. })
        ));
        assert_eq!(engine.current_nonce(), 1);
        assert_eq!(engine.owner_count(), 3);

        // The unchanged owner set still authorizes at the next nonce
        let value = U256::from(SMALL_TRANSFER);
        let sigs = sign_action(&[&keys[0], &keys[1]], &TARGET, value, &[], 1);
        engine.execute(sigs, TARGET, value, Vec::new()).unwrap();
        assert_eq!(engine.current_nonce(), 2);
    }

    #[test]
    fn oversized_replacement_list_rejected_through_quorum_path() {
        let keys = wallet(3);
        let mut engine = engine(2, &keys);
        let too_many = owners(&wallet(11));

        let payload = AdminCall::SetOwners {
            threshold: 2,
            owners: too_many,
        }
        .encode();
        let sigs = sign_action(&[&keys[0], &keys[1]], &ENGINE_ADDR, U256::zero(), &payload, 0);
        let result = engine.execute(sigs, ENGINE_ADDR, U256::zero(), payload);

        assert!(matches!(
            result,
            Err(EngineError::InvalidOwnerConfiguration { .. })
        ));
        assert_eq!(engine.owner_count(), 3);
    }
}
