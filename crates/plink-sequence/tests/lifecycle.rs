//! End-to-end lifecycle of a pairing channel across the workspace:
//! URI → proposed sequence → persisted record → settlement → rekey →
//! expiry check → deletion, with a signed control message along the way.

use std::sync::Arc;

use plink_auth::{Ed25519Signer, MessageSigner, SignerError};
use plink_core::{Expirable, Timestamp, Topic};
use plink_sequence::{
    PairingPending, PairingPendingStatus, PairingSequence, PairingSettled, PairingUri,
    Participant, Permissions, Proposal, SettledStatus,
};
use plink_store::{KeyValueBackend, MemoryBackend, SequenceStore};

const URI: &str = "wc:8097df5f14871126866252c1b7479a14aefb980188fc35ec97d130d24bd887c8@2?controller=false&publicKey=552b2951217a387b4579d8d462274a4fa00c0cf85a7aa1b1dd3389aa3c98e7d5&relay-protocol=waku";

fn ts(s: &str) -> Timestamp {
    Timestamp::parse(s).unwrap()
}

fn pairing_store() -> SequenceStore<PairingSequence> {
    SequenceStore::new(Arc::new(MemoryBackend::new()) as Arc<dyn KeyValueBackend>)
}

#[test]
fn pairing_lifecycle_propose_settle_rekey_delete() {
    let store = pairing_store();
    let now = ts("2026-01-15T12:00:00Z");

    // Receive the proposal out-of-band and persist the pending pairing.
    let uri = PairingUri::parse(URI).unwrap();
    let pairing = PairingSequence::build_proposed_from_uri_at(&uri, now);
    let proposal_topic = pairing.topic().clone();
    store.create(&proposal_topic, &pairing).unwrap();

    let loaded = store.get(&proposal_topic).unwrap();
    assert!(!loaded.is_settled());
    assert_eq!(
        loaded.pending().unwrap().status,
        PairingPendingStatus::Proposed
    );
    assert_eq!(loaded.expiry(), now.plus(PairingSequence::ttl_proposed()));

    // Handshake completes: settle under a rotated topic with the
    // thirty-day deadline.
    let settled_topic = Topic::generate();
    let mut settled = loaded;
    settled.set_settled(PairingSettled {
        peer: Participant::new("peer-key"),
        permissions: Permissions::new(
            Participant::new("peer-key"),
            vec!["wc_sessionPropose".to_string()],
        ),
        state: None,
        status: SettledStatus::Acknowledged,
    });
    settled.set_expiry(now.plus(PairingSequence::ttl_settled()));
    settled.set_topic(settled_topic.clone());
    store
        .update(&proposal_topic, Some(&settled_topic), &settled)
        .unwrap();

    assert!(store.get(&proposal_topic).is_none());
    let loaded = store.get(&settled_topic).unwrap();
    assert!(loaded.is_settled());
    assert!(loaded.pending().is_none());
    assert!(loaded.peer_is_controller());

    // Thirty days on, the record is expired and the engine deletes it.
    let later = ts("2026-02-14T12:00:01Z");
    assert!(loaded.is_expired(later));
    store.delete(&settled_topic).unwrap();
    store.delete(&settled_topic).unwrap();
    assert!(store.get(&settled_topic).is_none());
}

#[test]
fn responding_moves_stage_deadline_explicitly() {
    let store = pairing_store();
    let now = ts("2026-01-15T12:00:00Z");

    let uri = PairingUri::parse(URI).unwrap();
    let mut pairing = PairingSequence::build_proposed_from_uri_at(&uri, now);
    let topic = pairing.topic().clone();
    store.create(&topic, &pairing).unwrap();

    let proposal = Proposal::from_uri(&uri);
    pairing.set_pending(PairingPending {
        proposal,
        status: PairingPendingStatus::Responded("settle-topic".to_string()),
    });
    pairing.set_expiry(now.plus(PairingSequence::ttl_pending()));
    store.update(&topic, None, &pairing).unwrap();

    let loaded = store.get(&topic).unwrap();
    assert!(loaded.pending().unwrap().is_responded());
    assert_eq!(loaded.expiry(), ts("2026-01-16T12:00:00Z"));
}

#[test]
fn enumeration_counts_only_wellformed_records() {
    let backend = Arc::new(MemoryBackend::new());
    let store: SequenceStore<PairingSequence> =
        SequenceStore::new(backend.clone() as Arc<dyn KeyValueBackend>);
    let now = ts("2026-01-15T12:00:00Z");

    let uri = PairingUri::parse(URI).unwrap();
    for i in 0..3 {
        let mut pairing = PairingSequence::build_proposed_from_uri_at(&uri, now);
        let topic = Topic::new(format!("topic-{i}"));
        pairing.set_topic(topic.clone());
        store.create(&topic, &pairing).unwrap();
    }
    backend.set("corrupted", b"{\"pending\":").unwrap();

    assert_eq!(store.get_all().len(), 3);
    assert_eq!(store.decode_failures(), 1);
}

#[test]
fn enumeration_filters_down_to_settled_pairings() {
    let store = pairing_store();
    let now = ts("2026-01-15T12:00:00Z");
    let uri = PairingUri::parse(URI).unwrap();

    let pending = PairingSequence::build_proposed_from_uri_at(&uri, now);
    store.create(pending.topic(), &pending).unwrap();

    let settled_topic = Topic::generate();
    let mut settled = PairingSequence::build_proposed_from_uri_at(&uri, now);
    settled.set_topic(settled_topic.clone());
    settled.set_settled(PairingSettled {
        peer: Participant::new("peer-key"),
        permissions: Permissions::new(Participant::new("peer-key"), vec![]),
        state: None,
        status: SettledStatus::Acknowledged,
    });
    store.create(&settled_topic, &settled).unwrap();

    let settled_only: Vec<_> = store
        .get_all()
        .into_iter()
        .filter_map(PairingSequence::into_settled)
        .collect();
    assert_eq!(settled_only.len(), 1);
    assert_eq!(settled_only[0].peer, Participant::new("peer-key"));
}

#[test]
fn control_message_is_signed_and_verified_during_settlement() {
    let signer = MessageSigner::new(Ed25519Signer);
    let key = Ed25519Signer::generate_private_key();
    let address = Ed25519Signer::address(&key).unwrap();

    let settle_request = format!("settle:{}", Topic::generate());
    let signature = signer.sign(&settle_request, &key).unwrap();
    signer.verify(&signature, &settle_request, &address).unwrap();

    // A tampered settle request is rejected outright.
    let tampered = format!("{settle_request}x");
    assert_eq!(
        signer.verify(&signature, &tampered, &address),
        Err(SignerError::ValidationFailed)
    );
}
