// Application layer - Use cases that turn listed resources into a dashboard
pub mod dashboard_service;
pub mod inventory_service;
pub mod lambda_widgets;
pub mod rds_widgets;
pub mod resource_catalog;
pub mod state_machine_widgets;

#[cfg(test)]
pub(crate) mod fake_catalog;
