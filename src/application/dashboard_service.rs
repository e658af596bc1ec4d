// Dashboard service - Use case for assembling the full dashboard body
use crate::application::inventory_service::InventoryService;
use crate::application::lambda_widgets::{custom_widgets, function_widgets};
use crate::application::rds_widgets::rds_widgets;
use crate::application::resource_catalog::ResourceCatalog;
use crate::application::state_machine_widgets::state_machine_widget;
use crate::domain::category::{partition, WidgetGroup, UNDEFINED};
use crate::domain::dashboard::Dashboard;
use crate::domain::layout::{flow, GRID_WIDTH};
use crate::domain::lookup::LookupTable;
use crate::domain::tag_filter::TagFilter;
use crate::domain::widget::{Size, Widget};
use crate::infrastructure::config::Settings;
use std::sync::Arc;

pub const HEADER_SIZE: Size = Size::new(24, 1);

pub fn section_header(markdown: &str) -> Widget {
    Widget::text(HEADER_SIZE, markdown)
}

#[derive(Clone)]
pub struct DashboardService {
    functions: InventoryService,
    state_machines: InventoryService,
    lookups: LookupTable,
    settings: Settings,
}

impl DashboardService {
    pub fn new(
        functions: Arc<dyn ResourceCatalog>,
        state_machines: Arc<dyn ResourceCatalog>,
        lookups: LookupTable,
        settings: Settings,
    ) -> Self {
        Self {
            functions: InventoryService::new(functions, settings.page_size),
            state_machines: InventoryService::new(state_machines, settings.page_size),
            lookups,
            settings,
        }
    }

    pub async fn build_dashboard(&self) -> anyhow::Result<Dashboard> {
        let filter = self.settings.tag_filter();
        let region = self.settings.region.as_str();
        let stage = self.settings.deploy_stage;

        let mut widgets = vec![section_header("# Lambda Status")];
        widgets.extend(self.function_section(&filter).await?);
        widgets.extend(custom_widgets(&self.lookups, stage, region)?);

        widgets.push(section_header("# State Machine Status"));
        widgets.extend(self.state_machine_section(&filter).await?);

        if !self.lookups.databases.is_empty() {
            widgets.push(section_header("# Database Status"));
            widgets.extend(rds_widgets(region, stage, &self.lookups.databases));
        }

        if self.settings.explicit_layout {
            widgets = flow(&widgets, GRID_WIDTH);
        }

        tracing::info!("Built dashboard with {} widgets", widgets.len());
        Ok(Dashboard::new(widgets))
    }

    async fn function_section(&self, filter: &TagFilter) -> anyhow::Result<Vec<Widget>> {
        let records = self.functions.inventory(filter).await?;
        tracing::info!("Found {} tracked functions", records.len());

        let groups = records
            .iter()
            .map(|record| {
                let resolution = self
                    .lookups
                    .resolve_function(&record.name, self.settings.deploy_stage);
                if resolution.category == UNDEFINED {
                    tracing::warn!("No lookup entry for function {}", record.name);
                }
                WidgetGroup::new(
                    resolution.category,
                    function_widgets(&record.name, &resolution.title, &self.settings.region),
                )
            })
            .collect();

        Ok(partition(groups))
    }

    async fn state_machine_section(&self, filter: &TagFilter) -> anyhow::Result<Vec<Widget>> {
        let records = self.state_machines.inventory(filter).await?;
        tracing::info!("Found {} tracked state machines", records.len());

        let groups = records
            .iter()
            .map(|record| {
                let resolution = self
                    .lookups
                    .resolve_state_machine(&record.name, self.settings.deploy_stage);
                WidgetGroup::new(
                    resolution.category,
                    vec![state_machine_widget(
                        &record.arn,
                        &resolution.title,
                        &self.settings.region,
                    )],
                )
            })
            .collect();

        Ok(partition(groups))
    }
}
