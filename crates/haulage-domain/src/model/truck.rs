//! Truck state and the load/unload transition

use haulage_types::{VehicleError, Weight};

use super::Parcel;

/// A truck with a weight capacity and an ordered manifest of parcel IDs.
///
/// `current_weight` always equals the summed weight of the loaded parcels
/// and never exceeds `weight_capacity`. Both change only through
/// [`Truck::load_parcel`] and [`Truck::unload_parcel`]; a failed call
/// leaves the truck untouched.
#[derive(Debug, Clone, PartialEq)]
pub struct Truck {
    id: String,
    weight_capacity: Weight,
    current_weight: Weight,
    parcel_ids: Vec<String>,
}

impl Truck {
    pub fn new(id: impl Into<String>, weight_capacity: Weight) -> Self {
        Self {
            id: id.into(),
            weight_capacity,
            current_weight: Weight::empty(),
            parcel_ids: Vec::new(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn weight_capacity(&self) -> Weight {
        self.weight_capacity
    }

    pub fn current_weight(&self) -> Weight {
        self.current_weight
    }

    /// Loaded parcel IDs in load order
    pub fn loaded_parcel_ids(&self) -> &[String] {
        &self.parcel_ids
    }

    pub fn is_loaded(&self, parcel_id: &str) -> bool {
        self.parcel_ids.iter().any(|id| id == parcel_id)
    }

    pub fn load_parcel(&mut self, parcel: &Parcel) -> Result<(), VehicleError> {
        if self.is_loaded(parcel.id()) {
            return Err(VehicleError::AlreadyLoaded {
                parcel_id: parcel.id().to_string(),
                vehicle_id: self.id.clone(),
            });
        }

        let combined = self.current_weight.plus(parcel.weight());
        // Loading up to exactly the capacity is allowed
        if self.weight_capacity.less_than(combined) {
            return Err(VehicleError::CapacityExceeded {
                parcel_id: parcel.id().to_string(),
                vehicle_id: self.id.clone(),
            });
        }

        self.parcel_ids.push(parcel.id().to_string());
        self.current_weight = combined;
        Ok(())
    }

    pub fn unload_parcel(&mut self, parcel: &Parcel) -> Result<(), VehicleError> {
        let Some(position) = self.parcel_ids.iter().position(|id| id == parcel.id()) else {
            return Err(VehicleError::NotLoaded {
                parcel_id: parcel.id().to_string(),
                vehicle_id: self.id.clone(),
            });
        };

        self.parcel_ids.remove(position);
        self.current_weight = self.current_weight.minus(parcel.weight());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kg(value: f64) -> Weight {
        Weight::new(value).unwrap()
    }

    #[test]
    fn test_new_truck_is_empty() {
        let truck = Truck::new("t1", kg(10.0));
        assert_eq!(truck.id(), "t1");
        assert_eq!(truck.weight_capacity(), kg(10.0));
        assert!(truck.current_weight().is_empty());
        assert!(truck.loaded_parcel_ids().is_empty());
    }

    #[test]
    fn test_load_up_to_capacity_then_reject() {
        let mut truck = Truck::new("t1", kg(10.0));
        truck.load_parcel(&Parcel::new("p1", kg(10.0))).unwrap();
        assert_eq!(truck.current_weight(), kg(10.0));

        let err = truck.load_parcel(&Parcel::new("p2", kg(0.1))).unwrap_err();
        assert!(matches!(err, VehicleError::CapacityExceeded { .. }));
        assert_eq!(truck.current_weight(), kg(10.0));
        assert_eq!(truck.loaded_parcel_ids(), ["p1".to_string()]);
    }

    #[test]
    fn test_load_same_parcel_twice() {
        let mut truck = Truck::new("t1", kg(100.0));
        let parcel = Parcel::new("p1", kg(5.0));
        truck.load_parcel(&parcel).unwrap();

        let err = truck.load_parcel(&parcel).unwrap_err();
        assert!(matches!(err, VehicleError::AlreadyLoaded { .. }));
        assert_eq!(truck.current_weight(), kg(5.0));
        assert_eq!(truck.loaded_parcel_ids().len(), 1);
    }

    #[test]
    fn test_unload_preserves_order_of_remaining() {
        let mut truck = Truck::new("t1", kg(100.0));
        for (id, weight) in [("a", 1.0), ("b", 2.0), ("c", 3.0)] {
            truck.load_parcel(&Parcel::new(id, kg(weight))).unwrap();
        }

        truck.unload_parcel(&Parcel::new("b", kg(2.0))).unwrap();
        assert_eq!(truck.loaded_parcel_ids(), ["a".to_string(), "c".to_string()]);
        assert_eq!(truck.current_weight(), kg(4.0));
    }

    #[test]
    fn test_unload_not_loaded() {
        let mut truck = Truck::new("t1", kg(10.0));
        truck.load_parcel(&Parcel::new("p1", kg(3.0))).unwrap();

        let err = truck.unload_parcel(&Parcel::new("p9", kg(1.0))).unwrap_err();
        assert!(matches!(err, VehicleError::NotLoaded { .. }));
        assert_eq!(truck.current_weight(), kg(3.0));
    }

    #[test]
    fn test_load_then_unload_restores_state() {
        let mut truck = Truck::new("t1", kg(50.0));
        truck.load_parcel(&Parcel::new("p1", kg(12.5))).unwrap();
        let before = truck.clone();

        let parcel = Parcel::new("p2", kg(7.25));
        truck.load_parcel(&parcel).unwrap();
        truck.unload_parcel(&parcel).unwrap();

        assert_eq!(truck, before);
    }
}
