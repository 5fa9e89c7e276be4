use std::collections::BTreeSet;

use partial_tag::{Directive, Sign};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::annotate::annotate_fields;
use crate::config::PartialConfig;
use crate::error::Result;
use crate::record::{FieldRecord, RecordDecl};

/// How a resolved variant selects fields.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Policy {
    /// Only ever named negatively: every field except those marked `-Name`.
    ExcludeMarked,
    /// Named positively at least once: only fields claiming the name.
    IncludeMarked,
}

/// The variant names referenced by one record, split by policy.
///
/// The sets are disjoint. A name moves from `negative` to `positive` on its
/// first positive sighting and never moves back.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct VariantSet {
    pub negative: BTreeSet<String>,
    pub positive: BTreeSet<String>,
}

impl VariantSet {
    pub fn observe(&mut self, directive: &Directive) {
        match directive.sign {
            Sign::Negative => {
                if !self.positive.contains(&directive.variant) {
                    self.negative.insert(directive.variant.clone());
                }
            }
            Sign::Unsigned | Sign::Positive => {
                self.negative.remove(&directive.variant);
                self.positive.insert(directive.variant.clone());
            }
        }
    }

    /// Folds every directive of `fields`, fields and directives in declaration order.
    pub fn from_fields(fields: &[FieldRecord]) -> Self {
        fields
            .iter()
            .flat_map(|field| field.directives.iter())
            .fold(VariantSet::default(), |mut set, directive| {
                set.observe(directive);
                set
            })
    }

    pub fn policy(&self, variant: &str) -> Option<Policy> {
        if self.positive.contains(variant) {
            Some(Policy::IncludeMarked)
        } else if self.negative.contains(variant) {
            Some(Policy::ExcludeMarked)
        } else {
            None
        }
    }

    /// Negative-set names, then positive-set names, each sorted.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.negative
            .iter()
            .chain(self.positive.iter())
            .map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.negative.len() + self.positive.len()
    }

    pub fn is_empty(&self) -> bool {
        self.negative.is_empty() && self.positive.is_empty()
    }
}

/// Whether `field` belongs in the view selected by `policy` for `variant`.
pub fn includes(field: &FieldRecord, variant: &str, policy: Policy) -> bool {
    match policy {
        Policy::ExcludeMarked => !field.names_negatively(variant),
        Policy::IncludeMarked => field.names_positively(variant),
    }
}

/// The outcome of resolving one record's annotations.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Resolution<'a> {
    pub record: &'a RecordDecl,
    pub directive_key: String,
    pub variants: VariantSet,
    pub fields: Vec<FieldRecord>,
}

impl<'a> Resolution<'a> {
    /// Whether the field at `index` is kept in `variant`'s view.
    ///
    /// Always false for names that are not resolved variants.
    pub fn includes(&self, index: usize, variant: &str) -> bool {
        match (self.fields.get(index), self.variants.policy(variant)) {
            (Some(field), Some(policy)) => includes(field, variant, policy),
            _ => false,
        }
    }

    /// The variants whose views keep the field at `index`.
    pub fn variants_of(&self, index: usize) -> Vec<&str> {
        self.variants
            .names()
            .filter(|variant| self.includes(index, variant))
            .collect()
    }
}

/// Annotates `record`'s fields and folds their directives into a [`VariantSet`].
pub fn resolve<'a>(record: &'a RecordDecl, config: &PartialConfig) -> Result<Resolution<'a>> {
    let fields = annotate_fields(record, config)?;
    let variants = VariantSet::from_fields(&fields);
    debug!(
        record = %record.name,
        negative = ?variants.negative,
        positive = ?variants.positive,
        "resolved variants"
    );
    Ok(Resolution {
        record,
        directive_key: config.directive_key.clone(),
        variants,
        fields,
    })
}
