//! Code generation pipeline for handlergen

use std::path::PathBuf;

use crate::{
    config::Config,
    discovery::DiscoveryDocument,
    emitter::Emitter,
    error::Result,
    handlers::enumerate,
};

/// What to do with the formatted output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Replace the destination file
    #[default]
    Write,
    /// Leave the filesystem alone and fail if the destination is out of date
    Check,
    /// Only return the formatted source
    DryRun,
}

/// Result of a generation run
#[derive(Debug, Clone)]
pub struct Generated {
    /// Destination the output was (or would be) written to
    pub path: PathBuf,
    /// Formatted source text
    pub source: String,
    /// Number of handlers emitted
    pub handler_count: usize,
}

/// Load → enumerate → render → format → write, for an already decoded document
pub fn generate_from(
    doc: &DiscoveryDocument,
    config: &Config,
    mode: OutputMode,
) -> Result<Generated> {
    // 1. Derive handler descriptors
    let handlers = enumerate(doc)?;
    log::info!(
        "Enumerated {} handlers from {} resources",
        handlers.len(),
        doc.resources.len()
    );

    // 2. Render and format
    let emitter = Emitter::new(config)?;
    let source = emitter.emit(&handlers)?;

    // 3. Write or compare
    let path = config.resolve_output_path();
    match mode {
        OutputMode::Write => {
            Emitter::write(&path, &source)?;
            log::info!("Wrote {}", path.display());
        }
        OutputMode::Check => {
            Emitter::check(&path, &source)?;
            log::info!("{} is up to date", path.display());
        }
        OutputMode::DryRun => {}
    }

    Ok(Generated {
        path,
        source,
        handler_count: handlers.len(),
    })
}

/// Main entry point: generate handlers for the bundled discovery document
pub fn generate(config: &Config, mode: OutputMode) -> Result<Generated> {
    let doc = DiscoveryDocument::bundled()?;
    log::info!("Loaded bundled discovery document '{}' {}", doc.title, doc.version);
    generate_from(&doc, config, mode)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use tempfile::tempdir;

    const WIDGETS: &str = r#"{
        "resources": {
            "widgets": {
                "methods": {
                    "list": {"httpMethod": "GET", "path": "widgets"}
                }
            }
        }
    }"#;

    fn config_in(dir: &std::path::Path) -> Config {
        Config {
            output_path: Some(dir.join("handler_gen.rs")),
            ..Default::default()
        }
    }

    #[test]
    fn test_end_to_end() -> Result<()> {
        let dir = tempdir()?;
        let config = config_in(dir.path());
        let doc = DiscoveryDocument::from_slice(WIDGETS.as_bytes())?;

        let generated = generate_from(&doc, &config, OutputMode::Write)?;
        assert_eq!(generated.handler_count, 1);

        let written = std::fs::read_to_string(dir.path().join("handler_gen.rs"))?;
        assert_eq!(written, generated.source);
        let flat: String = written.chars().filter(|c| !c.is_whitespace()).collect();
        assert!(flat.contains(r#"path:"/widgets""#));
        assert!(flat.contains(r#"http_method:"GET""#));
        assert!(flat.contains("handler:&widgetsListHandler{}"));
        assert!(flat.contains("assert_handler::<widgetsListHandler>();"));
        assert!(flat.contains("pubstructwidgetsListHandler{}"));
        Ok(())
    }

    #[test]
    fn test_deterministic() -> Result<()> {
        let config = Config::default();
        let doc = DiscoveryDocument::bundled()?;
        let first = generate_from(&doc, &config, OutputMode::DryRun)?;
        let second = generate_from(&doc, &config, OutputMode::DryRun)?;
        assert_eq!(first.source, second.source);
        Ok(())
    }

    #[test]
    fn test_empty_document_still_writes() -> Result<()> {
        let dir = tempdir()?;
        let config = config_in(dir.path());
        let doc = DiscoveryDocument::from_slice(b"{}")?;

        let generated = generate_from(&doc, &config, OutputMode::Write)?;
        assert_eq!(generated.handler_count, 0);
        assert!(dir.path().join("handler_gen.rs").exists());
        Ok(())
    }

    #[test]
    fn test_decode_failure_writes_nothing() -> Result<()> {
        let dir = tempdir()?;
        let config = config_in(dir.path());
        let doc = DiscoveryDocument::from_slice(
            br#"{"resources": {"jobs": {"methods": {"get": {}, "Get": {}}}}}"#,
        )?;

        let err = generate_from(&doc, &config, OutputMode::Write).unwrap_err();
        assert!(matches!(err, Error::Decode(_)));
        assert!(!dir.path().join("handler_gen.rs").exists());
        Ok(())
    }

    #[test]
    fn test_format_failure_writes_nothing() -> Result<()> {
        let dir = tempdir()?;
        let config = config_in(dir.path());
        let doc = DiscoveryDocument::from_slice(
            br#"{"resources": {"bad-resource": {"methods": {"get": {}}}}}"#,
        )?;

        let err = generate_from(&doc, &config, OutputMode::Write).unwrap_err();
        assert!(matches!(err, Error::Format(_)));
        assert!(!dir.path().join("handler_gen.rs").exists());
        Ok(())
    }

    #[test]
    fn test_check_mode() -> Result<()> {
        let dir = tempdir()?;
        let config = config_in(dir.path());
        let doc = DiscoveryDocument::from_slice(WIDGETS.as_bytes())?;

        let err = generate_from(&doc, &config, OutputMode::Check).unwrap_err();
        assert!(matches!(err, Error::Stale(_)));

        generate_from(&doc, &config, OutputMode::Write)?;
        generate_from(&doc, &config, OutputMode::Check)?;
        Ok(())
    }

    #[test]
    fn test_bundled_generation() -> Result<()> {
        let generated = generate(&Config::default(), OutputMode::DryRun)?;
        assert_eq!(generated.handler_count, 39);
        assert!(generated.source.contains("jobsGetQueryResultsHandler"));
        assert!(generated.source.contains("rowAccessPoliciesTestIamPermissionsHandler"));
        Ok(())
    }
}
