//! Vehicle catalog shown on the vehicle selection step

use std::sync::LazyLock;

use fare_domain::model::VehicleProfile;
use fare_types::VehicleClass;

/// Catalog in the order vehicles are offered
pub static VEHICLE_CATALOG: LazyLock<Vec<VehicleProfile>> = LazyLock::new(|| {
    vec![
        VehicleProfile {
            class: VehicleClass::Business,
            name: "Business Class".to_string(),
            description: "Mercedes-Benz E-Class, BMW 5 Series, Cadillac XTS or similar".to_string(),
            passengers: 3,
            luggage: 2,
        },
        VehicleProfile {
            class: VehicleClass::First,
            name: "First Class".to_string(),
            description: "Mercedes-Benz S-Class, BMW 7 Series, Cadillac XTS or similar".to_string(),
            passengers: 4,
            luggage: 3,
        },
        VehicleProfile {
            class: VehicleClass::Van,
            name: "Van/SUV".to_string(),
            description: "Mercedes-Benz V-Class, Ford Transit or similar".to_string(),
            passengers: 6,
            luggage: 4,
        },
    ]
});

/// Get the catalog entry for a class
pub fn get_vehicle_profile(class: VehicleClass) -> &'static VehicleProfile {
    // Catalog order matches VehicleClass::ALL
    let index = match class {
        VehicleClass::Business => 0,
        VehicleClass::First => 1,
        VehicleClass::Van => 2,
    };
    &VEHICLE_CATALOG[index]
}
