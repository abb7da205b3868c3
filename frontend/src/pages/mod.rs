pub mod features;
pub mod home;
pub mod visualizations;
