use metrics_exporter_prometheus::PrometheusHandle;
use std::io::Read;
use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

/// Longest narrative accepted over HTTP, in characters.
pub(crate) const MAX_NARRATIVE_CHARS: usize = 20_000;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Resolves the narrative for the `evaluate` command: inline text, then a file, then stdin.
pub(crate) fn read_narrative(
    inline: Option<String>,
    file: Option<&Path>,
    mut stdin: impl Read,
) -> std::io::Result<String> {
    if let Some(text) = inline {
        return Ok(text);
    }

    if let Some(path) = file {
        return std::fs::read_to_string(path);
    }

    let mut buffer = String::new();
    stdin.read_to_string(&mut buffer)?;
    Ok(buffer)
}
