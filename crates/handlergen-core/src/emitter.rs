//! Rendering and writing of the generated handler file.
//!
//! The [`Emitter`] owns a Tera instance holding the bundled
//! `handler_gen.rs.tera` template. Rendering produces Rust source with one
//! registration entry, one capability assertion and one empty struct per
//! [`HandlerDescriptor`]; the result is formatted before it is returned.

use std::collections::HashMap;
use std::io::Write;
use std::path::Path;

use serde::Serialize;
use tempfile::NamedTempFile;
use tera::{Context, Tera, Value};

use crate::config::Config;
use crate::format::format_source;
use crate::handlers::HandlerDescriptor;
use crate::Error;

const TEMPLATE_NAME: &str = "handler_gen.rs.tera";
const TEMPLATE_SOURCE: &str = include_str!("../templates/handler_gen.rs.tera");

/// Marker placed on the first line of every generated file
pub const GENERATED_MARKER: &str = "// Code generated by handlergen. DO NOT EDIT!";

#[derive(Serialize)]
struct TemplateContext<'a> {
    handler_trait: &'a str,
    trait_name: &'a str,
    handlers: &'a [HandlerDescriptor],
}

/// Tera filter printing a string as a Rust string literal
fn rust_str(value: &Value, _: &HashMap<String, Value>) -> tera::Result<Value> {
    let s = tera::try_get_value!("rust_str", "value", String, value);
    Ok(Value::String(format!("{:?}", s)))
}

/// Renders handler descriptors into formatted Rust source
#[derive(Debug)]
pub struct Emitter {
    tera: Tera,
    handler_trait: String,
    trait_name: String,
}

impl Emitter {
    /// Create an emitter importing the capability trait named in `config`
    pub fn new(config: &Config) -> crate::Result<Self> {
        config.validate()?;
        let mut tera = Tera::default();
        tera.register_filter("rust_str", rust_str);
        tera.add_raw_template(TEMPLATE_NAME, TEMPLATE_SOURCE)?;
        Ok(Self {
            tera,
            handler_trait: config.handler_trait.trim().to_string(),
            trait_name: config.trait_name().to_string(),
        })
    }

    /// Render the template without formatting it
    pub fn render(&self, handlers: &[HandlerDescriptor]) -> crate::Result<String> {
        let context = Context::from_serialize(TemplateContext {
            handler_trait: &self.handler_trait,
            trait_name: &self.trait_name,
            handlers,
        })?;

        log::debug!(
            "Rendering {} with {} handlers",
            TEMPLATE_NAME,
            handlers.len()
        );
        self.tera.render(TEMPLATE_NAME, &context).map_err(|e| {
            log::error!("Template rendering failed for '{}': {}", TEMPLATE_NAME, e);
            Error::from(e)
        })
    }

    /// Render and format the generated file
    pub fn emit(&self, handlers: &[HandlerDescriptor]) -> crate::Result<String> {
        let rendered = self.render(handlers)?;
        format_source(&rendered)
    }

    /// Replace the file at `path` with `content`.
    ///
    /// The parent directory must already exist. Content goes to a temporary
    /// file in that directory which is persisted over `path`; on any failure
    /// the temporary file is removed when it is dropped.
    pub fn write(path: &Path, content: &str) -> crate::Result<()> {
        let parent = match path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir,
            _ => Path::new("."),
        };

        let mut temp = NamedTempFile::new_in(parent).map_err(|e| Error::write(path, e))?;
        temp.write_all(content.as_bytes())
            .map_err(|e| Error::write(path, e))?;
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            std::fs::set_permissions(temp.path(), std::fs::Permissions::from_mode(0o644))
                .map_err(|e| Error::write(path, e))?;
        }
        temp.persist(path).map_err(|e| Error::write(path, e.error))?;

        log::debug!("Wrote {} bytes to {}", content.len(), path.display());
        Ok(())
    }

    /// Fail with [`Error::Stale`] unless `path` already holds exactly `content`
    pub fn check(path: &Path, content: &str) -> crate::Result<()> {
        match std::fs::read_to_string(path) {
            Ok(existing) if existing == content => Ok(()),
            Ok(_) => Err(Error::Stale(path.to_path_buf())),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(Error::Stale(path.to_path_buf()))
            }
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn descriptor(path: &str, http_method: &str, identifier: &str) -> HandlerDescriptor {
        HandlerDescriptor {
            path: path.to_string(),
            http_method: http_method.to_string(),
            identifier: identifier.to_string(),
        }
    }

    fn squash(s: &str) -> String {
        s.chars().filter(|c| !c.is_whitespace()).collect()
    }

    #[test]
    fn test_emit_single_handler() -> crate::Result<()> {
        let emitter = Emitter::new(&Config::default())?;
        let out = emitter.emit(&[descriptor("/widgets", "GET", "widgetsList")])?;
        let flat = squash(&out);

        assert!(out.starts_with(GENERATED_MARKER));
        assert!(flat.contains("usecrate::HttpHandler;"));
        assert!(flat.contains(
            r#"Handler{path:"/widgets",http_method:"GET",handler:&widgetsListHandler{}"#
        ));
        assert!(flat.contains("assert_handler::<widgetsListHandler>();"));
        assert!(flat.contains("pubstructwidgetsListHandler{}"));
        Ok(())
    }

    #[test]
    fn test_emit_empty() -> crate::Result<()> {
        let emitter = Emitter::new(&Config::default())?;
        let out = emitter.emit(&[])?;
        let flat = squash(&out);

        assert!(out.starts_with(GENERATED_MARKER));
        assert!(flat.contains("pubstaticHANDLERS:&[Handler]=&[];"));
        assert!(!flat.contains("assert_handler::<"));
        Ok(())
    }

    #[test]
    fn test_emit_keeps_descriptor_order() -> crate::Result<()> {
        let emitter = Emitter::new(&Config::default())?;
        let out = emitter.emit(&[
            descriptor("/a", "GET", "aGet"),
            descriptor("/b/{bId}", "DELETE", "bDelete"),
        ])?;
        let flat = squash(&out);
        let a = flat.find("&aGetHandler{}").expect("aGet entry");
        let b = flat.find("&bDeleteHandler{}").expect("bDelete entry");
        assert!(a < b);
        assert!(out.contains(r#""/b/{bId}""#));
        Ok(())
    }

    #[test]
    fn test_paths_are_rust_string_literals() -> crate::Result<()> {
        let emitter = Emitter::new(&Config::default())?;
        let out = emitter.emit(&[descriptor("/a\u{1}b\"c\\d", "GET", "aGet")])?;
        assert!(out.contains(r#""/a\u{1}b\"c\\d""#));
        Ok(())
    }

    #[test]
    fn test_custom_trait() -> crate::Result<()> {
        let config = Config {
            handler_trait: "crate::http::ServeHttp".to_string(),
            ..Default::default()
        };
        let out = Emitter::new(&config)?.emit(&[descriptor("/x", "GET", "xGet")])?;
        let flat = squash(&out);
        assert!(flat.contains("usecrate::http::ServeHttp;"));
        assert!(flat.contains("&'static(dynServeHttp+Sync)"));
        assert!(flat.contains("fnassert_handler<T:ServeHttp+Sync>(){}"));
        Ok(())
    }

    #[test]
    fn test_invalid_identifier_is_format_error() -> crate::Result<()> {
        let emitter = Emitter::new(&Config::default())?;
        let err = emitter
            .emit(&[descriptor("/x", "GET", "bad-name")])
            .unwrap_err();
        assert!(matches!(err, Error::Format(_)));
        Ok(())
    }

    #[test]
    fn test_write_replaces_file() -> crate::Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("handler_gen.rs");
        std::fs::write(&path, "// old content\n")?;

        Emitter::write(&path, "// new content\n")?;
        assert_eq!(std::fs::read_to_string(&path)?, "// new content\n");
        assert_eq!(std::fs::read_dir(dir.path())?.count(), 1);
        Ok(())
    }

    #[test]
    fn test_failed_write_leaves_no_temp_file() -> crate::Result<()> {
        let dir = tempdir()?;
        // a non-empty directory cannot be replaced by a file
        let path = dir.path().join("handler_gen.rs");
        std::fs::create_dir(&path)?;
        std::fs::write(path.join("keep"), "")?;

        let err = Emitter::write(&path, "fn main() {}\n").unwrap_err();
        assert!(matches!(err, Error::Write { .. }));

        let entries: Vec<_> = std::fs::read_dir(dir.path())?
            .map(|entry| entry.map(|e| e.file_name()))
            .collect::<std::io::Result<_>>()?;
        assert_eq!(entries, vec![std::ffi::OsString::from("handler_gen.rs")]);
        Ok(())
    }

    #[cfg(unix)]
    #[test]
    fn test_written_file_is_world_readable() -> crate::Result<()> {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempdir()?;
        let path = dir.path().join("handler_gen.rs");
        Emitter::write(&path, "fn main() {}\n")?;
        let mode = std::fs::metadata(&path)?.permissions().mode();
        assert_eq!(mode & 0o777, 0o644);
        Ok(())
    }

    #[test]
    fn test_write_missing_directory() -> crate::Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("missing").join("handler_gen.rs");
        let err = Emitter::write(&path, "fn main() {}\n").unwrap_err();
        match err {
            Error::Write { path: failed, .. } => assert_eq!(failed, path),
            other => panic!("unexpected error: {other}"),
        }
        Ok(())
    }

    #[test]
    fn test_check() -> crate::Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("handler_gen.rs");

        assert!(matches!(Emitter::check(&path, "x"), Err(Error::Stale(_))));
        std::fs::write(&path, "x")?;
        Emitter::check(&path, "x")?;
        assert!(matches!(Emitter::check(&path, "y"), Err(Error::Stale(_))));
        Ok(())
    }
}
