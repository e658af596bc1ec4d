// Domain layer - Resources, widgets and the rules that connect them
pub mod category;
pub mod dashboard;
pub mod deploy_stage;
pub mod error;
pub mod layout;
pub mod lookup;
pub mod naming;
pub mod resource;
pub mod tag_filter;
pub mod widget;
