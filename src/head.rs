use crate::config::Config;

/// Builds the HTML fragment injected into every page head.
///
/// Order is fixed: favicon link, analytics module script, then the extra
/// head HTML trimmed of surrounding whitespace. Absent options
/// contribute nothing.
pub fn assemble(cfg: &Config) -> String {
    let mut parts: Vec<String> = Vec::with_capacity(3);

    if let Some(favicon) = &cfg.favicon {
        parts.push(format!(
            r#"<link rel="icon" href="{favicon}" type="image/png" sizes="32x32">"#
        ));
    }
    if let Some(analytics) = &cfg.analytics {
        parts.push(format!(
            "<script type=\"module\">\nimport {{ inject }} from \"{}\";\ninject();\n</script>",
            analytics.script
        ));
    }
    if let Some(head) = &cfg.head {
        parts.push(head.trim().to_owned());
    }

    parts.join("\n")
}
