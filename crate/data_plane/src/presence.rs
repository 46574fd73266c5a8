//! All-or-nothing presence of nested request groups.
//!
//! Every nested group of a request is a struct of `Option` members. A group is
//! present when at least one member is `Some`. Builders assemble bottom-up:
//! leaf groups are pruned first, then the composite groups built from the
//! pruned children are pruned in turn, so an all-absent subtree collapses to
//! `None` at the highest level it can.

use tracing::trace;

/// A nested request group whose presence depends on its members.
pub trait Presence {
    /// Wire name of the group, used in logs and errors.
    const NAME: &'static str;

    fn is_present(&self) -> bool;
}

/// A group holding mutually exclusive variants (a service-side oneof).
pub trait OneOf: Presence {
    /// Wire names of the variants that are set.
    fn populated_variants(&self) -> Vec<&'static str>;
}

/// Keep `group` only if at least one of its members was supplied.
pub fn prune<T: Presence>(group: T) -> Option<T> {
    if group.is_present() {
        Some(group)
    } else {
        trace!("omitting empty {}", T::NAME);
        None
    }
}

/// Implement [`Presence`] for a group from the list of its `Option` members.
macro_rules! impl_presence {
    ($($group:ident => [$($member:ident),+ $(,)?]);+ $(;)?) => {
        $(
            impl $crate::presence::Presence for $group {
                const NAME: &'static str = stringify!($group);

                fn is_present(&self) -> bool {
                    false $(|| self.$member.is_some())+
                }
            }
        )+
    };
}

/// Implement [`Presence`] and [`OneOf`] for a group of exclusive variants.
///
/// Members listed after `+` count for presence but are not variants.
macro_rules! impl_one_of {
    ($group:ident => [$($member:ident : $wire:literal),+ $(,)?] $(+ [$($extra:ident),+ $(,)?])?) => {
        $crate::presence::impl_presence!($group => [$($member,)+ $($($extra),+)?]);

        impl $crate::presence::OneOf for $group {
            fn populated_variants(&self) -> Vec<&'static str> {
                let mut variants = Vec::new();
                $(
                    if self.$member.is_some() {
                        variants.push($wire);
                    }
                )+
                variants
            }
        }
    };
}

pub(crate) use impl_one_of;
pub(crate) use impl_presence;

#[cfg(test)]
mod tests {
    use super::{OneOf, Presence, prune};

    #[derive(Default, Debug, PartialEq)]
    struct Leaf {
        a: Option<String>,
        b: Option<i32>,
    }

    #[derive(Default, Debug, PartialEq)]
    struct Composite {
        left: Option<Leaf>,
        right: Option<Leaf>,
    }

    impl_presence!(Leaf => [a, b]);
    impl_one_of!(Composite => [left: "Left", right: "Right"]);

    #[test]
    fn empty_leaf_is_pruned() {
        assert_eq!(prune(Leaf::default()), None);
    }

    #[test]
    fn partially_set_leaf_is_kept_as_is() {
        let leaf = Leaf {
            b: Some(4),
            ..Default::default()
        };
        assert_eq!(
            prune(leaf),
            Some(Leaf {
                a: None,
                b: Some(4)
            })
        );
    }

    #[test]
    fn absence_bubbles_up() {
        let composite = Composite {
            left: prune(Leaf::default()),
            right: prune(Leaf::default()),
        };
        assert!(!composite.is_present());
        assert_eq!(prune(composite), None);
        assert_eq!(Composite::NAME, "Composite");
    }

    #[test]
    fn populated_variants_are_listed_in_declaration_order() {
        let composite = Composite {
            left: Some(Leaf {
                a: Some("x".to_owned()),
                b: None,
            }),
            right: Some(Leaf {
                a: None,
                b: Some(1),
            }),
        };
        assert_eq!(composite.populated_variants(), vec!["Left", "Right"]);
    }
}
