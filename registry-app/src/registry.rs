use std::{collections::HashMap, rc::Rc};

use log::{debug, warn};
use rand::Rng;
use shared::data::{RegistryStatus, Vehicle, VehicleModelInfo};

use crate::{
    error::Error,
    generation::{generate_license_plate, generate_vehicle_id, VEHICLE_ID_LENGTH},
};

/// An in-memory catalogue of vehicle models that can issue new vehicles.
#[derive(Debug)]
pub struct VehicleRegistry {
    // brand -> model -> info
    vehicle_models: HashMap<String, HashMap<String, Rc<VehicleModelInfo>>>,
    online: bool,
}

impl Default for VehicleRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl VehicleRegistry {
    /// Creates an empty registry that is online.
    #[must_use]
    pub fn new() -> Self {
        VehicleRegistry {
            vehicle_models: HashMap::new(),
            online: true,
        }
    }

    /// Creates an online registry holding the given models. Later duplicates replace earlier ones.
    pub fn with_models(models: impl IntoIterator<Item = VehicleModelInfo>) -> Self {
        let mut registry = Self::new();
        for info in models {
            registry.add_vehicle_model_info(info);
        }
        registry
    }

    /// Adds the model info, replacing any previous info for the same brand and model.
    pub fn add_vehicle_model_info(&mut self, info: VehicleModelInfo) {
        debug!("Adding model info: {info}");
        let models = self
            .vehicle_models
            .entry(info.brand().to_string())
            .or_default();
        let model = info.model().to_string();
        if let Some(old) = models.insert(model, Rc::new(info)) {
            warn!(
                "Replaced existing model info for {} {}",
                old.brand(),
                old.model()
            );
        }
    }

    /// Finds the info for a brand and model, if any is known.
    #[must_use]
    pub fn find_model_info(&self, brand: &str, model: &str) -> Option<&VehicleModelInfo> {
        self.find_model_info_rc(brand, model).map(Rc::as_ref)
    }

    fn find_model_info_rc(&self, brand: &str, model: &str) -> Option<&Rc<VehicleModelInfo>> {
        self.vehicle_models.get(brand)?.get(model)
    }

    /// Registers a new vehicle with a random id and license plate.
    ///
    /// # Errors
    ///
    /// This function will return [``Error::VehicleInfoMissing``] if the brand and model are unknown.
    pub fn register_vehicle(&self, brand: &str, model: &str) -> Result<Vehicle, Error> {
        self.register_vehicle_with_rng(&mut rand::thread_rng(), brand, model)
    }

    /// Same as [``VehicleRegistry::register_vehicle``] but draws from the given random number generator.
    ///
    /// # Errors
    ///
    /// This function will return [``Error::VehicleInfoMissing``] if the brand and model are unknown.
    pub fn register_vehicle_with_rng<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        brand: &str,
        model: &str,
    ) -> Result<Vehicle, Error> {
        let Some(info) = self.find_model_info_rc(brand, model) else {
            warn!("No model info for {brand} {model}");
            return Err(Error::VehicleInfoMissing {
                brand: brand.to_string(),
                model: model.to_string(),
            });
        };

        let vehicle_id = generate_vehicle_id(rng, VEHICLE_ID_LENGTH);
        let license_plate = generate_license_plate(rng, &vehicle_id);
        debug!("Registered {brand} {model} as {vehicle_id} ({license_plate})");

        Ok(Vehicle::new(vehicle_id, license_plate, Rc::clone(info)))
    }

    /// Reports whether the registry is online.
    #[must_use]
    pub fn online_status(&self) -> RegistryStatus {
        if !self.online {
            RegistryStatus::Offline
        } else if self.is_empty() {
            RegistryStatus::ConnectionError
        } else {
            RegistryStatus::Online
        }
    }

    #[must_use]
    pub fn is_online(&self) -> bool {
        self.online
    }

    pub fn set_online(&mut self, online: bool) {
        self.online = online;
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.vehicle_models.values().map(HashMap::len).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterates over all known models in no particular order.
    pub fn models(&self) -> impl Iterator<Item = &VehicleModelInfo> + '_ {
        self.vehicle_models
            .values()
            .flat_map(HashMap::values)
            .map(Rc::as_ref)
    }
}
