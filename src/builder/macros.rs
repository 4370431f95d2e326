//! Macros for ergonomic state machine construction.

/// Generate a unit enum together with its `State` implementation.
///
/// Extra attributes (including additional derives) are forwarded to the
/// enum. State names are the variant identifiers.
///
/// # Example
///
/// ```
/// use calcflow::state_enum;
/// use calcflow::core::State;
///
/// state_enum! {
///     #[derive(Copy, Eq)]
///     pub enum Entry {
///         Typing,
///         Showing,
///     }
///     final: [Showing]
/// }
///
/// assert_eq!(Entry::Typing.name(), "Typing");
/// assert!(Entry::Showing.is_final());
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

        $(final: [$($final:ident),* $(,)?])?
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

            fn is_final(&self) -> bool {
                match self {
                    $($(Self::$final => true,)*)?
                    #[allow(unreachable_patterns)]
                    _ => false,
                }
            }
        }
    };
}
