// Infrastructure layer - External dependencies and adapters
pub mod config;
pub mod lambda_catalog;
pub mod output;
pub mod sfn_catalog;
