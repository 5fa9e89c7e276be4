//! Variant resolution and view emission.
//!
//! A record's fields carry directives (see `partial_tag`) naming the views
//! they belong to or are excluded from. [`resolve`] folds those directives
//! into a [`VariantSet`]; [`Resolution::emit`] then produces one
//! [`RecordView`] per variant with the directive key stripped from each
//! kept field's metadata.
//!
//! Everything here is pure: records in, views out, no I/O.

mod annotate;
mod config;
mod emit;
mod error;
mod record;
mod variants;


pub use annotate::annotate_fields;
pub use config::PartialConfig;
pub use emit::{derive_views, RecordView};
pub use error::{DeriveError, Result};
pub use record::{FieldDecl, FieldRecord, RecordDecl};
pub use variants::{includes, resolve, Policy, Resolution, VariantSet};
