// Main entry point - Dependency injection and dashboard bootstrap
use std::sync::Arc;

use dashboard_layout::application::layout_store::LayoutStore;
use dashboard_layout::infrastructure::config::load_dashboard_config;
use dashboard_layout::infrastructure::key_value::FileKeyValueStore;
use dashboard_layout::infrastructure::persistence::LayoutPersistence;
use dashboard_layout::presentation::grid_controller::GridControllerAdapter;
use dashboard_layout::presentation::view::{widget_picker, DashboardView};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    // Load configuration
    let config = load_dashboard_config()?;

    // Storage (infrastructure layer)
    let kv = Arc::new(FileKeyValueStore::new(config.storage.directory.clone()));
    let repository = Arc::new(LayoutPersistence::new(kv, config.storage.key.clone()));

    // Store and grid adapter; the interactive grid attaches once a host surface exists
    let store = LayoutStore::new(repository);
    let adapter = GridControllerAdapter::new(store);

    let view = DashboardView::build(adapter.state(), config.viewport.width);
    tracing::info!(
        "Dashboard ready at {}px ({}): {}, {} widget types available",
        config.viewport.width,
        view.breakpoint,
        view.summary(),
        widget_picker().len()
    );

    for cell in &view.cells {
        match cell.layout {
            Some(item) => println!(
                "{:<16} {:<20} x={:<2} y={:<3} {}x{}",
                cell.widget.id, cell.widget.widget_type, item.x, item.y, item.w, item.h
            ),
            None => println!("{:<16} {:<20} (unplaced)", cell.widget.id, cell.widget.widget_type),
        }
    }

    Ok(())
}
