//! Parcel type definitions

use haulage_types::Weight;
use serde::Serialize;

/// A parcel with a fixed weight. Immutable once created.
///
/// Only built through [`Parcel::new`]; inbound payloads are validated by the
/// transport before they become parcels.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Parcel {
    id: String,
    weight: Weight,
}

impl Parcel {
    pub fn new(id: impl Into<String>, weight: Weight) -> Self {
        Self {
            id: id.into(),
            weight,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn weight(&self) -> Weight {
        self.weight
    }
}
