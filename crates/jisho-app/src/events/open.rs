use anyhow::Context;

/// Open an entry page in the system browser
pub fn handle_open(url: &str) -> anyhow::Result<()> {
    let url = url.trim();
    if !is_web_url(url) {
        anyhow::bail!("Refusing to open non-web target: {url:?}");
    }

    tracing::info!("Opening {}", url);
    open::that(url).with_context(|| format!("Failed to open {url}"))
}

fn is_web_url(url: &str) -> bool {
    url.starts_with("https://") || url.starts_with("http://")
}
