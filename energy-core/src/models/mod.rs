mod bedroom_tier;
mod energy_estimate;
mod household_profile;
mod residence_type;

pub use bedroom_tier::BedroomTier;
pub use energy_estimate::EnergyEstimate;
pub use household_profile::HouseholdProfile;
pub use residence_type::ResidenceType;
