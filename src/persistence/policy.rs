//! Load, save and clear the session record.

use super::error::StorageError;
use super::expiry::is_expired;
use super::schema::{parse_record, ParsedRecord};
use super::store::KeyValueStore;
use crate::config::SessionConfig;
use crate::model::{EmergencyContact, Profile, Role, SessionRecord};
use chrono::{DateTime, Duration, Utc};
use tracing::{debug, info, warn};

/// How the initial state was arrived at.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadOutcome {
    /// Nothing stored (or the store could not be read).
    Empty,
    /// Stored payload was unusable and has been removed.
    Corrupt,
    /// Session restored as saved.
    Restored,
    /// Conductor session older than the horizon; setup required.
    Expired,
    /// Passenger record without a name; setup required.
    Incomplete,
}

/// In-memory session state produced at process start.
#[derive(Clone, Debug, PartialEq)]
pub struct InitialState {
    pub role: Role,
    pub needs_setup: bool,
    pub profile: Option<Profile>,
    pub emergency_contact: Option<EmergencyContact>,
    pub outcome: LoadOutcome,
}

impl InitialState {
    fn unauthenticated(outcome: LoadOutcome) -> Self {
        Self {
            role: Role::None,
            needs_setup: false,
            profile: None,
            emergency_contact: None,
            outcome,
        }
    }

    fn setup_required(role: Role, outcome: LoadOutcome) -> Self {
        Self {
            role,
            needs_setup: true,
            profile: None,
            emergency_contact: None,
            outcome,
        }
    }
}

/// Decide the initial state for a well-formed record. Pure.
pub fn restore(record: SessionRecord, now: DateTime<Utc>, horizon: Duration) -> InitialState {
    match record.role {
        Role::Conductor if is_expired(record.timestamp, now, horizon) => {
            InitialState::setup_required(Role::Conductor, LoadOutcome::Expired)
        }
        Role::Conductor => InitialState {
            role: Role::Conductor,
            needs_setup: false,
            profile: Some(record.profile),
            emergency_contact: None,
            outcome: LoadOutcome::Restored,
        },
        Role::Passenger if record.profile.name.is_empty() => {
            InitialState::setup_required(Role::Passenger, LoadOutcome::Incomplete)
        }
        Role::Passenger => InitialState {
            role: Role::Passenger,
            needs_setup: false,
            profile: Some(record.profile),
            emergency_contact: record.emergency_contact,
            outcome: LoadOutcome::Restored,
        },
        Role::None => InitialState::unauthenticated(LoadOutcome::Corrupt),
    }
}

/// Governs the single session record in a key-value store.
///
/// `save` and `clear` are the only writers; `load` may also remove the
/// record when it turns out to be corrupt.
pub struct PersistencePolicy<K: KeyValueStore> {
    store: K,
    key: String,
    horizon: Duration,
}

impl<K: KeyValueStore> PersistencePolicy<K> {
    pub fn new(store: K, config: &SessionConfig) -> Self {
        Self {
            store,
            key: config.storage_key.clone(),
            horizon: config.expiry_horizon(),
        }
    }

    pub fn with_defaults(store: K) -> Self {
        Self::new(store, &SessionConfig::default())
    }

    pub fn store(&self) -> &K {
        &self.store
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn load(&self) -> InitialState {
        self.load_at(Utc::now())
    }

    /// Load the stored record as of `now`.
    pub fn load_at(&self, now: DateTime<Utc>) -> InitialState {
        let raw = match self.store.get(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                debug!(key = %self.key, "no stored session");
                return InitialState::unauthenticated(LoadOutcome::Empty);
            }
            Err(e) => {
                warn!(key = %self.key, error = %e, "session store unreadable, starting fresh");
                return InitialState::unauthenticated(LoadOutcome::Empty);
            }
        };

        match parse_record(&raw) {
            ParsedRecord::Invalid(reason) => {
                warn!(key = %self.key, %reason, "discarding corrupt session record");
                if let Err(e) = self.clear() {
                    warn!(key = %self.key, error = %e, "failed to remove corrupt session record");
                }
                InitialState::unauthenticated(LoadOutcome::Corrupt)
            }
            ParsedRecord::Valid(record) => {
                let role = record.role;
                let state = restore(record, now, self.horizon);
                match state.outcome {
                    LoadOutcome::Expired => info!(%role, "conductor session expired, setup required"),
                    LoadOutcome::Incomplete => info!(%role, "stored profile incomplete, setup required"),
                    _ => debug!(%role, "session restored"),
                }
                state
            }
        }
    }

    pub fn save(&self, record: SessionRecord) -> Result<(), StorageError> {
        self.save_at(record, Utc::now())
    }

    /// Overwrite the stored record, stamped with `now`.
    pub fn save_at(&self, record: SessionRecord, now: DateTime<Utc>) -> Result<(), StorageError> {
        let record = record.stamped(now);
        let payload = serde_json::to_string(&record)
            .map_err(|e| StorageError::SerializationFailed(e.to_string()))?;
        self.store.set(&self.key, &payload)?;
        debug!(key = %self.key, role = %record.role, "session saved");
        Ok(())
    }

    pub fn clear(&self) -> Result<(), StorageError> {
        self.store.remove(&self.key)?;
        debug!(key = %self.key, "session cleared");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::expiry::SHIFT_HORIZON_MS;
    use crate::persistence::MemoryStore;
    use chrono::TimeZone;

    const KEY: &str = "trackit_user_data";

    fn at(ms: i64) -> DateTime<Utc> {
        Utc.timestamp_millis_opt(ms).unwrap()
    }

    fn conductor_profile() -> Profile {
        Profile {
            name: "A".to_string(),
            phone: "9999999999".to_string(),
            assigned_route: Some("11".to_string()),
            ..Profile::default()
        }
    }

    #[test]
    fn empty_store_loads_unauthenticated() {
        let policy = PersistencePolicy::with_defaults(MemoryStore::new());
        let state = policy.load();

        assert_eq!(state.role, Role::None);
        assert!(!state.needs_setup);
        assert_eq!(state.outcome, LoadOutcome::Empty);
    }

    #[test]
    fn corrupt_payload_is_cleared() {
        let store = MemoryStore::with_entry(KEY, "{\"role\":\"CONDUC");
        let policy = PersistencePolicy::with_defaults(store.clone());

        let state = policy.load();

        assert_eq!(state.role, Role::None);
        assert!(!state.needs_setup);
        assert_eq!(state.outcome, LoadOutcome::Corrupt);
        assert!(store.get(KEY).unwrap().is_none());
    }

    #[test]
    fn conductor_within_horizon_is_restored() {
        let policy = PersistencePolicy::with_defaults(MemoryStore::new());
        policy
            .save_at(SessionRecord::conductor(conductor_profile(), at(0)), at(0))
            .unwrap();

        let state = policy.load_at(at(SHIFT_HORIZON_MS - 1));

        assert_eq!(state.role, Role::Conductor);
        assert!(!state.needs_setup);
        assert_eq!(state.profile, Some(conductor_profile()));
    }

    #[test]
    fn conductor_past_horizon_needs_setup() {
        let store = MemoryStore::new();
        let policy = PersistencePolicy::with_defaults(store.clone());
        policy
            .save_at(SessionRecord::conductor(conductor_profile(), at(0)), at(0))
            .unwrap();

        let state = policy.load_at(at(SHIFT_HORIZON_MS + 1));

        assert_eq!(state.role, Role::Conductor);
        assert!(state.needs_setup);
        assert!(state.profile.is_none());
        assert_eq!(state.outcome, LoadOutcome::Expired);
        // expiry does not erase storage
        assert!(store.get(KEY).unwrap().is_some());
    }

    #[test]
    fn passenger_without_name_needs_setup() {
        let store = MemoryStore::with_entry(
            KEY,
            r#"{"role":"PASSENGER","profile":{"name":"","phone":"9876543210"},"timestamp":5}"#,
        );
        let policy = PersistencePolicy::with_defaults(store);

        let state = policy.load_at(at(10));

        assert_eq!(state.role, Role::Passenger);
        assert!(state.needs_setup);
        assert!(state.profile.is_none());
        assert_eq!(state.outcome, LoadOutcome::Incomplete);
    }

    #[test]
    fn passenger_is_restored_regardless_of_age() {
        let contact = EmergencyContact {
            name: "Mum".to_string(),
            phone: "9000000000".to_string(),
            email: String::new(),
        };
        let profile = Profile {
            name: "Asha".to_string(),
            phone: "9876543210".to_string(),
            ..Profile::default()
        };
        let policy = PersistencePolicy::with_defaults(MemoryStore::new());
        policy
            .save_at(
                SessionRecord::passenger(profile.clone(), Some(contact.clone()), at(0)),
                at(0),
            )
            .unwrap();

        let state = policy.load_at(at(SHIFT_HORIZON_MS * 30));

        assert_eq!(state.role, Role::Passenger);
        assert!(!state.needs_setup);
        assert_eq!(state.profile, Some(profile));
        assert_eq!(state.emergency_contact, Some(contact));
    }

    #[test]
    fn save_stamps_current_instant() {
        let store = MemoryStore::new();
        let policy = PersistencePolicy::with_defaults(store.clone());

        policy
            .save_at(SessionRecord::conductor(conductor_profile(), at(1)), at(777))
            .unwrap();

        let raw = store.get(KEY).unwrap().unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(value["timestamp"], 777);
    }

    #[test]
    fn save_failure_is_reported() {
        let store = MemoryStore::new();
        store.set_read_only(true);
        let policy = PersistencePolicy::with_defaults(store);

        let result = policy.save(SessionRecord::conductor(conductor_profile(), Utc::now()));
        assert!(matches!(result, Err(StorageError::Unavailable(_))));
    }

    #[test]
    fn corrupt_payload_on_read_only_store_still_loads() {
        let store = MemoryStore::with_entry(KEY, "not json");
        store.set_read_only(true);
        let policy = PersistencePolicy::with_defaults(store);

        let state = policy.load();
        assert_eq!(state.role, Role::None);
        assert_eq!(state.outcome, LoadOutcome::Corrupt);
    }

    #[test]
    fn clear_is_idempotent() {
        let store = MemoryStore::new();
        let policy = PersistencePolicy::with_defaults(store.clone());
        policy.save(SessionRecord::conductor(conductor_profile(), Utc::now())).unwrap();

        policy.clear().unwrap();
        policy.clear().unwrap();

        assert!(store.is_empty());
    }

    #[test]
    fn custom_key_and_horizon_are_honoured() {
        let store = MemoryStore::new();
        let config = SessionConfig {
            storage_key: "other_key".to_string(),
            expiry_horizon_secs: 60,
        };
        let policy = PersistencePolicy::new(store.clone(), &config);
        policy
            .save_at(SessionRecord::conductor(conductor_profile(), at(0)), at(0))
            .unwrap();

        assert!(store.get("other_key").unwrap().is_some());
        assert!(!policy.load_at(at(60_000)).needs_setup);
        assert!(policy.load_at(at(60_001)).needs_setup);
    }
}
