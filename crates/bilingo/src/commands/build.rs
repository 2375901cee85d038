//! Artifact build command.

use std::path::{Path, PathBuf};

use anyhow::Result;
use bilingo_static::Aggregator;

use crate::config::load_config;

/// Run the build command.
pub fn run(config_path: &Path, output: Option<PathBuf>) -> Result<()> {
    tracing::info!("Building artifact...");

    let file_config = load_config(config_path)?;

    let mut config = file_config.build_config();
    if let Some(output) = output {
        config.output = output;
    }

    let result = Aggregator::new(config).build()?;

    tracing::info!(
        "Combined {} documents ({} headings, {} bytes) in {}ms",
        result.documents,
        result.headings,
        result.bytes,
        result.duration_ms
    );

    tracing::info!("Output: {}", result.output_path.display());
    if file_config.build.version.is_some() {
        tracing::info!("Pages should request {}", file_config.artifact_location());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn builds_from_config_file() {
        let temp = tempdir().unwrap();
        let src = temp.path().join("docs");
        fs::create_dir_all(&src).unwrap();
        fs::write(src.join("intro.md"), "# Intro\n\n$Hello$$你好\n").unwrap();

        let config_path = temp.path().join("bilingo.toml");
        fs::write(
            &config_path,
            format!(
                "[docs]\ndir = {:?}\ndocuments = [\"intro\"]\n",
                src.display().to_string()
            ),
        )
        .unwrap();

        let out = temp.path().join("out").join("content.html");
        run(&config_path, Some(out.clone())).unwrap();

        let html = fs::read_to_string(out).unwrap();
        assert!(html.contains("<a name=\"Intro\""));
        assert!(html.contains("role=\"check-ori\""));
    }

    #[test]
    fn missing_document_fails() {
        let temp = tempdir().unwrap();
        let config_path = temp.path().join("bilingo.toml");
        fs::write(
            &config_path,
            format!(
                "[docs]\ndir = {:?}\ndocuments = [\"absent\"]\n",
                temp.path().display().to_string()
            ),
        )
        .unwrap();

        let out = temp.path().join("content.html");
        let err = run(&config_path, Some(out.clone())).unwrap_err();

        assert!(err.to_string().contains("absent.md"));
        assert!(!out.exists());
    }
}
