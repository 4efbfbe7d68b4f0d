//! Status, priority, and category enums stored as TEXT columns.
//!
//! Each variant maps to the exact string stored in the database (and
//! used on the wire), plus the French display label shown by the
//! dashboard UI. Parsing via `FromStr`/`TryFrom<String>` is the
//! validation point for values coming back from the store.
//!
//! Transitions are unconditional: any state is reachable from any other,
//! so there is no transition table here. The one derived side effect of
//! a project status change lives in [`crate::lifecycle`].

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

macro_rules! define_text_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $value:literal, $label:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(rename_all = "snake_case")]
        pub enum $name {
            $( $(#[$vmeta])* $variant ),+
        }

        impl $name {
            /// Every variant, in declaration order.
            pub const ALL: &'static [$name] = &[ $( $name::$variant ),+ ];

            /// The stored value for this variant.
            pub fn as_str(self) -> &'static str {
                match self {
                    $( $name::$variant => $value ),+
                }
            }

            /// The display label shown in the dashboard UI.
            pub fn label(self) -> &'static str {
                match self {
                    $( $name::$variant => $label ),+
                }
            }
        }

        impl std::str::FromStr for $name {
            type Err = CoreError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $( $value => Ok($name::$variant), )+
                    other => Err(CoreError::Validation(format!(
                        concat!("Unknown ", stringify!($name), " value: {}"),
                        other
                    ))),
                }
            }
        }

        impl TryFrom<String> for $name {
            type Error = CoreError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                value.parse()
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

define_text_enum! {
    /// Project lifecycle status.
    ProjectStatus {
        Planned => "planned", "Planifié",
        InProgress => "in_progress", "En cours",
        Completed => "completed", "Terminé",
    }
}

define_text_enum! {
    /// Project priority facet.
    ProjectPriority {
        Low => "low", "Basse",
        Medium => "medium", "Moyenne",
        High => "high", "Haute",
    }
}

define_text_enum! {
    /// Order fulfilment status.
    OrderStatus {
        Pending => "pending", "En attente",
        Validated => "validated", "Validée",
        Delivered => "delivered", "Livrée",
    }
}

define_text_enum! {
    /// Order product category.
    OrderCategory {
        Equipment => "equipment", "Matériel",
        Phytosanitary => "phytosanitary", "Phytosanitaire",
    }
}

impl Default for ProjectStatus {
    /// New projects start out planned.
    fn default() -> Self {
        ProjectStatus::Planned
    }
}

impl Default for ProjectPriority {
    /// Priority defaults to medium when the form leaves it unset.
    fn default() -> Self {
        ProjectPriority::Medium
    }
}

impl Default for OrderStatus {
    /// New orders start out pending.
    fn default() -> Self {
        OrderStatus::Pending
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stored_values_round_trip() {
        for status in ProjectStatus::ALL {
            assert_eq!(status.as_str().parse::<ProjectStatus>().unwrap(), *status);
        }
        for status in OrderStatus::ALL {
            assert_eq!(status.as_str().parse::<OrderStatus>().unwrap(), *status);
        }
        for priority in ProjectPriority::ALL {
            assert_eq!(
                priority.as_str().parse::<ProjectPriority>().unwrap(),
                *priority
            );
        }
        for category in OrderCategory::ALL {
            assert_eq!(
                category.as_str().parse::<OrderCategory>().unwrap(),
                *category
            );
        }
    }

    #[test]
    fn unknown_value_is_rejected() {
        let err = "archived".parse::<ProjectStatus>().unwrap_err();
        assert!(err.to_string().contains("archived"));
    }

    #[test]
    fn serde_names_match_stored_values() {
        let json = serde_json::to_string(&ProjectStatus::InProgress).unwrap();
        assert_eq!(json, "\"in_progress\"");

        let parsed: OrderCategory = serde_json::from_str("\"phytosanitary\"").unwrap();
        assert_eq!(parsed, OrderCategory::Phytosanitary);
    }

    #[test]
    fn display_labels() {
        assert_eq!(ProjectStatus::Completed.label(), "Terminé");
        assert_eq!(OrderStatus::Delivered.label(), "Livrée");
        assert_eq!(ProjectPriority::High.label(), "Haute");
    }

    #[test]
    fn defaults_match_creation_rules() {
        assert_eq!(ProjectStatus::default(), ProjectStatus::Planned);
        assert_eq!(ProjectPriority::default(), ProjectPriority::Medium);
        assert_eq!(OrderStatus::default(), OrderStatus::Pending);
    }
}
