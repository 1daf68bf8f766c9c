//! Check command - validate configuration and content

use std::path::{Path, PathBuf};

use color_eyre::eyre::{Result, bail};
use folio_core::{Config, Post, PostKind, SiteContent, ThemeVar};
use walkdir::WalkDir;

/// Validation result.
#[derive(Debug, Default)]
struct ValidationResult {
    errors: Vec<String>,
    warnings: Vec<String>,
}

impl ValidationResult {
    fn add_error(&mut self, msg: impl Into<String>) {
        self.errors.push(msg.into());
    }

    fn add_warning(&mut self, msg: impl Into<String>) {
        self.warnings.push(msg.into());
    }
}

/// Run the check command.
///
/// Loads the configuration (with `FOLIO__` environment overrides) and parses
/// every post under `content_dir`.
pub fn run(config_path: &Path, content_dir: &Path, strict: bool) -> Result<()> {
    tracing::info!(?config_path, ?content_dir, strict, "Checking configuration and content");

    let mut result = ValidationResult::default();

    println!("Checking configuration...");
    match Config::load_with_env(config_path) {
        Ok(config) => {
            println!("  ✓ Configuration valid ({})", config.site.title);
        }
        Err(e) => {
            result.add_error(format!("Configuration error: {e}"));
            println!("  ✗ Configuration invalid: {e}");
        }
    }

    println!("\nChecking content files...");
    let sources = collect_sources(content_dir)?;
    let mut posts = Vec::new();
    for (path, source) in &sources {
        match Post::from_source(Path::new(path), source) {
            Ok(post) => {
                check_post(&post, &mut result);
                posts.push(post);
            }
            Err(e) => result.add_error(e.to_string()),
        }
    }

    if result.errors.is_empty() {
        let site = SiteContent::from_posts(posts);
        println!(
            "  ✓ {} work posts, {} published notes",
            site.work().len(),
            site.notes().count()
        );
    }

    println!();
    for warning in &result.warnings {
        println!("  ⚠ {warning}");
    }
    for error in &result.errors {
        println!("  ✗ {error}");
    }

    if !result.errors.is_empty() {
        bail!("Check failed with {} error(s)", result.errors.len());
    }
    if strict && !result.warnings.is_empty() {
        bail!(
            "Check failed with {} warning(s) (strict mode)",
            result.warnings.len()
        );
    }

    println!("All checks passed");
    Ok(())
}

/// Read every markdown file under `content_dir` as `(relative path, source)`.
fn collect_sources(content_dir: &Path) -> Result<Vec<(String, String)>> {
    if !content_dir.is_dir() {
        bail!("Content directory does not exist: {}", content_dir.display());
    }

    let mut sources = Vec::new();
    for entry in WalkDir::new(content_dir).sort_by_file_name() {
        let entry = entry?;
        let path = entry.path();
        if !entry.file_type().is_file() || path.extension().is_none_or(|ext| ext != "md") {
            continue;
        }

        let relative: PathBuf = path.strip_prefix(content_dir)?.to_path_buf();
        let relative = relative
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/");
        sources.push((relative, std::fs::read_to_string(path)?));
    }

    tracing::debug!(count = sources.len(), "collected content files");
    Ok(sources)
}

fn check_post(post: &Post, result: &mut ValidationResult) {
    let fm = &post.frontmatter;

    if fm.theme {
        let missing: Vec<_> = ThemeVar::ALL
            .iter()
            .filter(|var| fm.theme_value(**var).is_none_or(str::is_empty))
            .map(|var| var.frontmatter_key())
            .collect();
        if !missing.is_empty() {
            result.add_warning(format!(
                "{}: theme enabled but missing {}",
                post.slug,
                missing.join(", ")
            ));
        }
    }

    if post.kind == PostKind::Work && fm.date.is_none() {
        result.add_warning(format!("{}: work post has no date", post.slug));
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    const CONFIG: &str = r#"
[site]
title = "Jeff Wolff"
site_url = "http://jeffwolff.net"
"#;

    fn site(files: &[(&str, &str)]) -> TempDir {
        let dir = TempDir::new().expect("temp dir");
        fs::write(dir.path().join("site.toml"), CONFIG).expect("config");
        for (path, source) in files {
            let path = dir.path().join("content").join(path);
            fs::create_dir_all(path.parent().expect("parent")).expect("dirs");
            fs::write(path, source).expect("post");
        }
        dir
    }

    #[test]
    fn test_collect_sources_uses_relative_paths() {
        let dir = site(&[
            ("work/harbor.md", "---\ntitle: Harbor\n---\n"),
            ("notes/grids.md", "---\ntitle: Grids\n---\n"),
            ("notes/readme.txt", "ignored"),
        ]);
        let sources = collect_sources(&dir.path().join("content")).expect("sources");
        let paths: Vec<_> = sources.iter().map(|(p, _)| p.as_str()).collect();
        assert_eq!(paths, vec!["notes/grids.md", "work/harbor.md"]);
    }

    #[test]
    fn test_check_passes_on_valid_site() {
        let dir = site(&[("work/harbor.md", "---\ntitle: Harbor\ndate: 2018-05-04\n---\n\n<p>Hi</p>")]);
        run(&dir.path().join("site.toml"), &dir.path().join("content"), true).expect("check");
    }

    #[test]
    fn test_check_fails_on_bad_frontmatter() {
        let dir = site(&[("work/broken.md", "---\ntitle: [unclosed\n---\n")]);
        assert!(run(&dir.path().join("site.toml"), &dir.path().join("content"), false).is_err());
    }

    #[test]
    fn test_partial_theme_is_a_warning() {
        let dir = site(&[(
            "work/lumen.md",
            "---\ntitle: Lumen\ndate: 2019-09-30\ntheme: true\ntbg: \"#000\"\n---\n",
        )]);
        let config = dir.path().join("site.toml");
        let content = dir.path().join("content");
        run(&config, &content, false).expect("lenient check");
        assert!(run(&config, &content, true).is_err());
    }
}
