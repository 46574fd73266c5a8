//! Assemble data plane requests from flat caller fields.
//!
//! Every builder reads all of its fields before deciding, so one failed build
//! reports every missing or malformed field at once. Nested groups are
//! assembled bottom-up through [`prune`](crate::presence::prune): a group
//! with no supplied member is left out, and so is any parent left with only
//! absent children. No optional member is ever defaulted locally.

mod encrypt;
mod kek;
mod mac;
mod translate;


pub use encrypt::build_encrypt_request;
pub use kek::build_kek_validation_request;
pub use mac::{build_mac_request, build_verify_mac_request};
pub use translate::build_key_translation_request;

use crate::{
    config::{BuilderConf, VariantExclusivity},
    error::FieldIssue,
    fields::FieldReader,
    presence::OneOf,
};

/// Under strict exclusivity, record a conflict when more than one variant of
/// `group` is populated.
fn check_exclusivity<T: OneOf>(
    group: Option<&T>,
    conf: &BuilderConf,
    reader: &mut FieldReader<'_>,
) {
    if conf.variant_exclusivity != VariantExclusivity::Strict {
        return
    }
    let Some(group) = group else {
        return
    };
    let variants = group.populated_variants();
    if variants.len() > 1 {
        reader.push_issue(FieldIssue::ConflictingVariants {
            group: T::NAME.to_owned(),
            variants: variants.into_iter().map(str::to_owned).collect(),
        });
    }
}
