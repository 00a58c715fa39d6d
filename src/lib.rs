pub mod config;
pub mod models;
pub mod store; // Document store + mock vault
pub mod timeline; // Drill-down navigator + date bucketing

use serde_json::json;
use tracing_subscriber::EnvFilter;

use crate::store::{mock_documents, DocumentStore};
use crate::timeline::{group_documents_by_segments, summarize, DrillNavigator, Granularity};

/// Renders the navigator's current view: state plus groups or documents.
fn render_frame(nav: &DrillNavigator) -> serde_json::Value {
    json!({
        "state": nav.state(),
        "groups": nav.visible_groups().iter().map(|g| json!({
            "period": g.period,
            "display_name": g.display_name,
            "count": g.count,
            "types": g.type_counts(),
        })).collect::<Vec<_>>(),
        "documents": nav.visible_documents(),
    })
}

/// Walks the mock vault from the root down to the newest day and back,
/// printing each view as JSON, then prints the dense month axis.
pub fn run() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .with_writer(std::io::stderr)
        .try_init()?;

    tracing::info!("{} starting v{}", config::APP_NAME, config::APP_VERSION);

    let timeline_config = config::TimelineConfig::from_env();
    let store = DocumentStore::with_documents(mock_documents());
    if store.is_empty() {
        tracing::warn!("Vault has no documents");
    } else {
        tracing::info!(documents = store.len(), "Loaded mock vault");
    }

    let mut nav = DrillNavigator::with_config(store.documents().to_vec(), &timeline_config)?;
    let mut frames = vec![render_frame(&nav)];
    while nav.granularity() != Granularity::Document {
        let Some(newest) = nav.visible_groups().into_iter().next() else {
            break;
        };
        nav.drill_down(&newest)?;
        frames.push(render_frame(&nav));
    }
    nav.breadcrumb_click(0)?;
    frames.push(render_frame(&nav));

    let segments = group_documents_by_segments(
        store.documents(),
        Granularity::Month,
        None,
        timeline_config.segment_week_start,
    );
    let summary = summarize(
        store.documents(),
        Granularity::Month,
        timeline_config.segment_week_start,
    );

    let output = json!({
        "drill": frames,
        "axis": {
            "summary": summary,
            "segments": segments.iter().map(|s| json!({
                "period": s.period,
                "label": s.display_name,
                "count": s.count,
            })).collect::<Vec<_>>(),
        },
    });
    println!("{}", serde_json::to_string_pretty(&output)?);

    Ok(())
}
