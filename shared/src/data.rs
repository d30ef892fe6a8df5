use std::{fmt, rc::Rc};

use chrono::{Datelike, Local};
use serde::{Deserialize, Serialize};

/// The kind of fuel a vehicle model runs on. Decides how much tax is owed at registration.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FuelType {
    #[default]
    Electric,
    Petrol,
}

impl FuelType {
    /// Percentage of the catalogue price owed as tax.
    #[must_use]
    pub fn tax_percentage(self) -> u32 {
        match self {
            FuelType::Electric => 2,
            FuelType::Petrol => 5,
        }
    }
}

impl fmt::Display for FuelType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FuelType::Electric => write!(f, "Electric"),
            FuelType::Petrol => write!(f, "Petrol"),
        }
    }
}

/// Reports whether the registry can currently be used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RegistryStatus {
    Online,
    ConnectionError,
    Offline,
}

impl fmt::Display for RegistryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegistryStatus::Online => write!(f, "Online"),
            RegistryStatus::ConnectionError => write!(f, "Connection error"),
            RegistryStatus::Offline => write!(f, "Offline"),
        }
    }
}

/// Reference data for a single brand and model. Never changes once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VehicleModelInfo {
    brand: String,
    model: String,
    catalogue_price: u64,
    #[serde(default)]
    fuel_type: FuelType,
    #[serde(default = "current_year")]
    production_year: i32,
}

fn current_year() -> i32 {
    Local::now().year()
}

impl VehicleModelInfo {
    /// Creates an electric model produced in the current year.
    pub fn new(brand: impl Into<String>, model: impl Into<String>, catalogue_price: u64) -> Self {
        VehicleModelInfo {
            brand: brand.into(),
            model: model.into(),
            catalogue_price,
            fuel_type: FuelType::default(),
            production_year: current_year(),
        }
    }

    #[must_use]
    pub fn with_fuel_type(self, fuel_type: FuelType) -> Self {
        VehicleModelInfo { fuel_type, ..self }
    }

    #[must_use]
    pub fn with_production_year(self, production_year: i32) -> Self {
        VehicleModelInfo {
            production_year,
            ..self
        }
    }

    #[must_use]
    pub fn brand(&self) -> &str {
        &self.brand
    }

    #[must_use]
    pub fn model(&self) -> &str {
        &self.model
    }

    #[must_use]
    pub fn catalogue_price(&self) -> u64 {
        self.catalogue_price
    }

    #[must_use]
    pub fn fuel_type(&self) -> FuelType {
        self.fuel_type
    }

    #[must_use]
    pub fn production_year(&self) -> i32 {
        self.production_year
    }

    /// Tax to be paid when registering a vehicle of this model.
    #[allow(clippy::cast_precision_loss)]
    #[must_use]
    pub fn tax(&self) -> f64 {
        // Widened so any u64 price fits. Divide last so whole results stay exact.
        let owed = u128::from(self.catalogue_price) * u128::from(self.fuel_type.tax_percentage());
        owed as f64 / 100.0
    }
}

impl fmt::Display for VehicleModelInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "brand: {} - type: {} - tax: {:?}",
            self.brand,
            self.model,
            self.tax()
        )
    }
}

/// A registered vehicle. The model info is shared with the registry it was issued from.
///
/// Vehicles only come out of a registry, so there is no `Deserialize`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Vehicle {
    vehicle_id: String,
    license_plate: String,
    info: Rc<VehicleModelInfo>,
}

impl Vehicle {
    #[must_use]
    pub fn new(vehicle_id: String, license_plate: String, info: Rc<VehicleModelInfo>) -> Self {
        Vehicle {
            vehicle_id,
            license_plate,
            info,
        }
    }

    #[must_use]
    pub fn vehicle_id(&self) -> &str {
        &self.vehicle_id
    }

    #[must_use]
    pub fn license_plate(&self) -> &str {
        &self.license_plate
    }

    #[must_use]
    pub fn info(&self) -> &VehicleModelInfo {
        &self.info
    }

    /// The shared handle to the model info, for callers that want to keep it around.
    #[must_use]
    pub fn info_rc(&self) -> &Rc<VehicleModelInfo> {
        &self.info
    }
}

impl fmt::Display for Vehicle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Id: {}. License plate: {}. Info: {}.",
            self.vehicle_id, self.license_plate, self.info
        )
    }
}
