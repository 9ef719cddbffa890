//! Macros for declaring state enums.

/// Generate a `State` implementation for a fieldless enum.
///
/// The enum gets `Clone`, `PartialEq`, `Debug` and serde derives; extra
/// attributes are passed through after them.
///
/// # Example
///
/// ```
/// use trackit_session::state_enum;
/// use trackit_session::core::State;
///
/// state_enum! {
///     #[derive(Copy, Eq)]
///     pub enum Wizard {
///         Intro,
///         Details,
///         Finished,
///     }
///     settled: [Finished]
/// }
///
/// assert_eq!(Wizard::Details.name(), "Details");
/// assert!(Wizard::Finished.is_settled());
/// ```
#[macro_export]
macro_rules! state_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
            ),* $(,)?
        }

        $(settled: [$($settled:ident),* $(,)?])?
    ) => {
        #[derive(Clone, PartialEq, Debug, serde::Serialize, serde::Deserialize)]
        $(#[$meta])*
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $crate::core::State for $name {
            fn name(&self) -> &str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }

            fn is_settled(&self) -> bool {
                match self {
                    $($(Self::$settled => true,)*)?
                    #[allow(unreachable_patterns)]
                    _ => false,
                }
            }
        }
    };
}
