//! Sequential multi-source catalog loading

use crate::error::Result;
use crate::parser;
use crate::source::CatalogSource;
use encore_core::SampleGroup;
use tokio::sync::oneshot;

/// The outcome of loading every configured source
#[derive(Debug, Default)]
pub struct CatalogLoad {
    /// Merged groups in first-seen order
    pub groups: Vec<SampleGroup>,

    /// At least one source failed to parse fully
    pub saw_error: bool,
}

/// Load all sources in order, merging groups by title.
///
/// Sources are processed strictly sequentially so the merge order, and with
/// it the presentation order, is deterministic. A failing source is logged
/// and skipped; groups merged from earlier sources stay intact. This never
/// fails overall: the caller always gets whatever parsed plus `saw_error`.
pub fn load_catalog(sources: &[Box<dyn CatalogSource>]) -> CatalogLoad {
    let mut load = CatalogLoad::default();
    for source in sources {
        if let Err(e) = read_source(source.as_ref(), &mut load.groups) {
            tracing::error!("Failed to load catalog source {}: {}", source.label(), e);
            load.saw_error = true;
        }
    }
    load
}

fn read_source(source: &dyn CatalogSource, groups: &mut Vec<SampleGroup>) -> Result<()> {
    tracing::debug!("Loading catalog source {}", source.label());
    let reader = source.open()?;
    parser::parse_catalog(reader, groups)
}

/// Run `load_catalog` on a background worker.
///
/// The result is sent exactly once over the returned channel. There is no
/// cancellation: once started, the load runs to completion, and a receiver
/// dropped in the meantime makes delivery a silent no-op.
pub fn spawn_load(sources: Vec<Box<dyn CatalogSource>>) -> oneshot::Receiver<CatalogLoad> {
    let (tx, rx) = oneshot::channel();
    tokio::task::spawn_blocking(move || {
        let _ = tx.send(load_catalog(&sources));
    });
    rx
}
