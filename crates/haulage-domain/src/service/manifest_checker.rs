//! Manifest consistency checking

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::model::{Parcel, Vehicle, VehicleType};

const WEIGHT_TOLERANCE_KG: f64 = 1e-9;

/// Result of checking one vehicle's manifest against the parcel store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManifestCheckResult {
    pub vehicle_id: String,
    pub vehicle_type: VehicleType,
    pub parcel_count: usize,
    pub current_weight_kg: f64,
    pub weight_capacity_kg: f64,
    /// None when the capacity is zero
    pub load_ratio_percent: Option<f64>,
    /// Manifest entries with no matching parcel
    pub missing_parcel_ids: Vec<String>,
    /// Summed weight of the manifest entries that still resolve
    pub resolved_weight_kg: f64,
    pub is_consistent: bool,
}

pub fn check_manifests(vehicles: &[Vehicle], parcels: &[Parcel]) -> Vec<ManifestCheckResult> {
    let by_id: HashMap<&str, &Parcel> = parcels.iter().map(|p| (p.id(), p)).collect();

    vehicles
        .iter()
        .map(|vehicle| {
            let mut missing_parcel_ids = Vec::new();
            let mut resolved_weight_kg = 0.0;
            for id in vehicle.loaded_parcel_ids() {
                match by_id.get(id.as_str()) {
                    Some(parcel) => resolved_weight_kg += parcel.weight().kg(),
                    None => missing_parcel_ids.push(id.clone()),
                }
            }

            let current_weight_kg = vehicle.current_weight().kg();
            let weight_capacity_kg = vehicle.weight_capacity().kg();
            let load_ratio_percent = if weight_capacity_kg > 0.0 {
                Some((current_weight_kg / weight_capacity_kg) * 100.0)
            } else {
                None
            };
            let is_consistent = missing_parcel_ids.is_empty()
                && (resolved_weight_kg - current_weight_kg).abs() <= WEIGHT_TOLERANCE_KG;

            ManifestCheckResult {
                vehicle_id: vehicle.id().to_string(),
                vehicle_type: vehicle.vehicle_type(),
                parcel_count: vehicle.loaded_parcel_ids().len(),
                current_weight_kg,
                weight_capacity_kg,
                load_ratio_percent,
                missing_parcel_ids,
                resolved_weight_kg,
                is_consistent,
            }
        })
        .collect()
}

pub fn generate_manifest_report(results: &[ManifestCheckResult]) -> String {
    let total = results.len();
    let inconsistent_count = results.iter().filter(|r| !r.is_consistent).count();
    let parcel_count: usize = results.iter().map(|r| r.parcel_count).sum();

    let mut report = String::new();
    report.push_str("==================================================\n");
    report.push_str("              Manifest Check Report               \n");
    report.push_str("==================================================\n\n");
    report.push_str("[Summary]\n");
    report.push_str(&format!("  Vehicles:              {}\n", total));
    report.push_str(&format!("  Loaded parcels:        {}\n", parcel_count));
    report.push_str(&format!("  Inconsistent:          {}\n", inconsistent_count));
    report.push('\n');

    if total > 0 {
        report.push_str("[Vehicles]\n");
        report.push_str("-".repeat(70).as_str());
        report.push('\n');
        report.push_str(&format!(
            "{:<16} {:<8} {:>8} {:>10} {:>10} {:>8}\n",
            "Vehicle", "Type", "Parcels", "Load", "Capacity", "Ratio"
        ));
        report.push_str("-".repeat(70).as_str());
        report.push('\n');
        for result in results {
            let ratio = result
                .load_ratio_percent
                .map(|r| format!("{:.1}%", r))
                .unwrap_or_else(|| "-".to_string());
            report.push_str(&format!(
                "{:<16} {:<8} {:>8} {:>8.2}kg {:>8.2}kg {:>8}\n",
                truncate_str(&result.vehicle_id, 15),
                result.vehicle_type.to_string(),
                result.parcel_count,
                result.current_weight_kg,
                result.weight_capacity_kg,
                ratio
            ));
        }
        report.push('\n');
    }

    if inconsistent_count > 0 {
        report.push_str("[Inconsistent Manifests]\n");
        for result in results.iter().filter(|r| !r.is_consistent) {
            report.push_str(&format!(
                "  {}: recorded {:.2}kg, resolved {:.2}kg",
                result.vehicle_id, result.current_weight_kg, result.resolved_weight_kg
            ));
            if !result.missing_parcel_ids.is_empty() {
                report.push_str(&format!(
                    ", missing parcels: {}",
                    result.missing_parcel_ids.join(", ")
                ));
            }
            report.push('\n');
        }
        report.push('\n');
    }

    report.push_str("==================================================\n");
    report
}

fn truncate_str(s: &str, max_len: usize) -> String {
    if s.chars().count() > max_len {
        let truncated: String = s.chars().take(max_len.saturating_sub(2)).collect();
        format!("{}..", truncated)
    } else {
        s.to_string()
    }
}
