use std::io::Write;

/// Fallback for hosts without a native large type view
pub fn handle_large_text(text: &str, out: &mut impl Write) -> anyhow::Result<()> {
    tracing::debug!("Large text: {}", text);
    writeln!(out, "{text}")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_detail_line() {
        let mut out = Vec::new();
        handle_large_text("ひづけ (日付)", &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "ひづけ (日付)\n");
    }
}
