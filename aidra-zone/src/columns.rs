//! Column names shared by the acquisition layer, the pipeline stages and the
//! CSV format. Names match the CSV headers exactly.

/// Zone identifier header.
pub const ZONE: &str = "Zone";

// Hazard inputs
pub const RAINFALL: &str = "Rainfall";
pub const RIVER_LEVEL: &str = "River_Level";
pub const SOIL_SATURATION: &str = "Soil_Saturation";
pub const FORECAST_RAINFALL: &str = "Forecast_Rainfall";

// Vulnerability inputs
pub const POPULATION_DENSITY: &str = "Population_Density";
pub const ELDERLY_PERCENTAGE: &str = "Elderly_Percentage";
pub const POVERTY_INDEX: &str = "Poverty_Index";

// Resilience inputs (higher is better)
pub const DRAINAGE_SCORE: &str = "Drainage_Score";
pub const HOSPITAL_CAPACITY: &str = "Hospital_Capacity";

// Exposure inputs
pub const CRITICAL_FACILITIES: &str = "Critical_Facilities";
pub const ROAD_ACCESS: &str = "Road_Access";

// Derived, in stage order
pub const ADSS: &str = "ADSS";
pub const ESTIMATED_INJURIES: &str = "Estimated_Injuries";
pub const AMBULANCE_NEEDED: &str = "Ambulance_Needed";
pub const RESCUE_TEAMS_NEEDED: &str = "Rescue_Teams_Needed";
pub const RELIEF_KITS_NEEDED: &str = "Relief_Kits_Needed";
pub const MEDICAL_DEFICIT: &str = "Medical_Deficit";
pub const PRIORITY_SCORE: &str = "Priority_Score";
pub const ALLOCATED_AMBULANCES: &str = "Allocated_Ambulances";
pub const ALLOCATED_RESCUE_TEAMS: &str = "Allocated_Rescue_Teams";
pub const AMBULANCE_DEFICIT: &str = "Ambulance_Deficit";
pub const RESCUE_DEFICIT: &str = "Rescue_Deficit";

/// Hour index added to escalation snapshots.
pub const HOUR: &str = "Hour";

pub const HAZARD: [&str; 4] = [RAINFALL, RIVER_LEVEL, SOIL_SATURATION, FORECAST_RAINFALL];
pub const VULNERABILITY: [&str; 3] = [POPULATION_DENSITY, ELDERLY_PERCENTAGE, POVERTY_INDEX];
pub const INVERSE_VULNERABILITY: [&str; 2] = [DRAINAGE_SCORE, HOSPITAL_CAPACITY];
pub const EXPOSURE: [&str; 1] = [CRITICAL_FACILITIES];
pub const INVERSE_EXPOSURE: [&str; 1] = [ROAD_ACCESS];

/// Every raw input column of a zone record, in CSV order.
pub const RAW: [&str; 11] = [
    RAINFALL,
    RIVER_LEVEL,
    SOIL_SATURATION,
    FORECAST_RAINFALL,
    POPULATION_DENSITY,
    ELDERLY_PERCENTAGE,
    POVERTY_INDEX,
    DRAINAGE_SCORE,
    HOSPITAL_CAPACITY,
    CRITICAL_FACILITIES,
    ROAD_ACCESS,
];
