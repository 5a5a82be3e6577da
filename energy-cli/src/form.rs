//! Input form for the household profile.
//!
//! Collects the raw user-entered fields and refuses to hand anything to the
//! calculator until the required text fields are present and the enumerated
//! fields parse. Missing name/city/area is the only failure mode the system
//! has; everything downstream of a valid [`HouseholdProfile`] is total.

use energy_core::models::{BedroomTier, HouseholdProfile, ResidenceType};

/// Form state for collecting a household profile.
#[derive(Debug, Clone)]
pub struct ProfileForm {
    pub name: String,
    pub age: String,
    pub city: String,
    pub area: String,
    pub residence_type: String,
    pub bedroom_tier: String,
    pub has_air_conditioner: bool,
    pub has_refrigerator: bool,
    pub has_washing_machine: bool,

    // Validation errors
    pub errors: Vec<String>,
}

impl Default for ProfileForm {
    fn default() -> Self {
        Self::new()
    }
}

impl ProfileForm {
    /// An empty form with the starting values: age 25, a 1BHK flat with the
    /// refrigerator box ticked.
    pub fn new() -> Self {
        Self {
            name: String::new(),
            age: "25".to_string(),
            city: String::new(),
            area: String::new(),
            residence_type: "Flat".to_string(),
            bedroom_tier: "1BHK".to_string(),
            has_air_conditioner: false,
            has_refrigerator: true,
            has_washing_machine: false,
            errors: Vec::new(),
        }
    }

    /// Parse the form into a [`HouseholdProfile`], returning errors if invalid.
    ///
    /// Text fields are trimmed before presence checks and reach the profile
    /// trimmed but otherwise verbatim.
    pub fn validate(&mut self) -> Result<HouseholdProfile, ()> {
        self.errors.clear();

        // Clone out the raw fields so the helpers can push errors while reading.
        let raw = self.clone();

        let name = self.require_text("Name", &raw.name);
        let city = self.require_text("City", &raw.city);
        let area = self.require_text("Area", &raw.area);
        let age = self.parse_age(&raw.age);
        let bedroom_tier = self.parse_bedroom_tier(&raw.bedroom_tier);
        let residence_type = self.parse_residence_type(&raw.residence_type);

        if !self.errors.is_empty() {
            return Err(());
        }

        Ok(HouseholdProfile {
            name: name.unwrap(),
            age: age.unwrap(),
            city: city.unwrap(),
            area: area.unwrap(),
            residence_type: residence_type.unwrap(),
            bedroom_tier: bedroom_tier.unwrap(),
            has_air_conditioner: self.has_air_conditioner,
            has_refrigerator: self.has_refrigerator,
            has_washing_machine: self.has_washing_machine,
        })
    }

    fn require_text(&mut self, field: &str, value: &str) -> Option<String> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            self.errors.push(format!("{field} is required"));
            return None;
        }
        Some(trimmed.to_string())
    }

    fn parse_age(&mut self, value: &str) -> Option<u8> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            self.errors.push("Age is required".to_string());
            return None;
        }
        match trimmed.parse::<u8>() {
            Ok(age) if (1..=120).contains(&age) => Some(age),
            _ => {
                self.errors
                    .push("Age must be a whole number between 1 and 120".to_string());
                None
            }
        }
    }

    fn parse_bedroom_tier(&mut self, value: &str) -> Option<BedroomTier> {
        match BedroomTier::parse(value.trim()) {
            Some(tier) => Some(tier),
            None => {
                self.errors
                    .push("Bedrooms must be one of 1BHK, 2BHK, 3BHK".to_string());
                None
            }
        }
    }

    fn parse_residence_type(&mut self, value: &str) -> Option<ResidenceType> {
        match ResidenceType::parse(value.trim()) {
            Some(residence) => Some(residence),
            None => {
                self.errors
                    .push("Residence type must be Flat or Tenement".to_string());
                None
            }
        }
    }
}
