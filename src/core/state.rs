//! Core State trait for session machine states.
//!
//! Every value the routing machine reasons about (the top-level phase, the
//! resolved screen, the full session snapshot) implements this trait so that
//! guards and history can be written once and shared.

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt::Debug;

/// Trait for session machine states.
///
/// All methods are pure - no side effects. States are plain values that
/// describe where the user currently is in the session lifecycle.
///
/// # Required Traits
///
/// - `Clone`: States are copied into history records
/// - `PartialEq`: Guards and history compare states
/// - `Debug`: States show up in log fields and test failures
/// - `Serialize` + `Deserialize`: History can be exported alongside the session record
///
/// # Example
///
/// ```rust
/// use trackit_session::core::State;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// enum Onboarding {
///     Welcome,
///     Form,
///     Done,
/// }
///
/// impl State for Onboarding {
///     fn name(&self) -> &str {
///         match self {
///             Self::Welcome => "Welcome",
///             Self::Form => "Form",
///             Self::Done => "Done",
///         }
///     }
///
///     fn is_settled(&self) -> bool {
///         matches!(self, Self::Done)
///     }
/// }
///
/// assert!(Onboarding::Done.is_settled());
/// assert!(!Onboarding::Form.is_settled());
/// ```
pub trait State: Clone + PartialEq + Debug + Serialize + DeserializeOwned + Send + Sync {
    /// Get the state's name for display/logging.
    fn name(&self) -> &str;

    /// Check if this state lets the user use the app normally.
    ///
    /// Settled states sit past role selection and setup. A settled state
    /// always has a complete profile behind it.
    ///
    /// Default implementation returns `false`.
    fn is_settled(&self) -> bool {
        false
    }
}
