use std::{fs, path::Path};

use log::info;
use shared::data::{FuelType, VehicleModelInfo};

use crate::error::Error;

/// A handful of models to play around with.
#[must_use]
pub fn sample_catalogue() -> Vec<VehicleModelInfo> {
    vec![
        VehicleModelInfo::new("Tesla", "Model 3", 50000),
        VehicleModelInfo::new("Volkswagen", "ID3", 35000),
        VehicleModelInfo::new("BMW", "520e", 60000).with_fuel_type(FuelType::Petrol),
        VehicleModelInfo::new("Tesla", "Model Y", 55000),
    ]
}

/// Reads a JSON array of model infos from a file.
///
/// # Errors
///
/// This function will return an error if the file can not be read or does not hold a valid catalogue.
pub fn load_catalogue(path: &Path) -> Result<Vec<VehicleModelInfo>, Error> {
    let data = fs::read_to_string(path).map_err(|source| Error::CatalogueRead {
        path: path.to_path_buf(),
        source,
    })?;
    let models = parse_catalogue(&data)?;
    info!("Loaded {} models from {}", models.len(), path.display());
    Ok(models)
}

/// Parses a JSON array of model infos.
///
/// # Errors
///
/// This function will return [``Error::CatalogueParse``] if the data is not a valid catalogue.
pub fn parse_catalogue(data: &str) -> Result<Vec<VehicleModelInfo>, Error> {
    Ok(serde_json::from_str(data)?)
}
