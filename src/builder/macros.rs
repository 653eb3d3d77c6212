//! Macros for ergonomic state and event declarations.

/// Declare a plain enum implementing [`State`](crate::core::State).
///
/// The enum derives `Clone`, `Copy`, `PartialEq`, `Eq`, `Hash`, `Debug` and
/// serde's traits, and implements `Display` with the variant name.
///
/// # Example
///
/// ```
/// use rewind::state_enum;
/// use rewind::core::State;
///
/// state_enum! {
///     pub enum WorkflowState {
///         Draft,
///         Review,
///         Published,
///     }
/// }
///
/// assert_eq!(WorkflowState::Review.name(), "Review");
/// assert_eq!(WorkflowState::Published.to_string(), "Published");
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
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, serde::Serialize, serde::Deserialize)]
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
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str($crate::core::State::name(self))
            }
        }
    };
}

/// Declare a plain enum implementing [`Event`](crate::core::Event).
///
/// Same derives as [`state_enum!`](crate::state_enum).
///
/// # Example
///
/// ```
/// use rewind::event_enum;
/// use rewind::core::Event;
///
/// event_enum! {
///     enum DoorEvent {
///         Open,
///         Close,
///     }
/// }
///
/// assert_eq!(DoorEvent::Close.name(), "Close");
/// ```
#[macro_export]
macro_rules! event_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, serde::Serialize, serde::Deserialize)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $crate::core::Event for $name {
            fn name(&self) -> &str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str($crate::core::Event::name(self))
            }
        }
    };
}
