use std::{io, path::PathBuf};

use thiserror::Error;

/// The errors that can occur whilst working with the registry.
#[derive(Debug, Error)]
pub enum Error {
    /// No model info is known for this brand and model, so nothing can be registered.
    #[error("Vehicle information is missing for {brand} {model}.")]
    VehicleInfoMissing { brand: String, model: String },
    /// The catalogue file could not be read. This is a wrapped [``std::io::Error``].
    #[error("Could not read the catalogue at {path}: {source}")]
    CatalogueRead { path: PathBuf, source: io::Error },
    /// The catalogue is not valid JSON or does not describe vehicle models.
    #[error("Could not parse the catalogue: {0}")]
    CatalogueParse(#[from] serde_json::Error),
}

impl Error {
    /// The brand and model that caused a [``Error::VehicleInfoMissing``].
    #[must_use]
    pub fn missing_vehicle(&self) -> Option<(&str, &str)> {
        match self {
            Error::VehicleInfoMissing { brand, model } => Some((brand.as_str(), model.as_str())),
            Error::CatalogueRead { .. } | Error::CatalogueParse(_) => None,
        }
    }
}
