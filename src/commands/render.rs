//! Render post files into pages

use anyhow::{bail, Context, Result};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::content::loader;
use crate::Blog;

/// Render every post under `paths`
///
/// Files that fail to load are skipped with a warning. Without an output
/// directory the documents are written to stdout, one after another.
/// Returns the number of pages rendered.
pub fn run(blog: &Blog, paths: &[PathBuf], output: Option<&Path>) -> Result<usize> {
    let start = std::time::Instant::now();
    let posts = loader::load_posts(paths);
    if posts.is_empty() {
        bail!("No posts could be loaded from {:?}", paths);
    }

    let stdout = std::io::stdout();

    for post in &posts {
        let html = blog
            .render_post(post)
            .with_context(|| format!("Failed to render post '{}'", post.slug))?;

        match output {
            Some(dir) => {
                let target = page_path(dir, &post.slug);
                write_page(&target, &html)?;
                tracing::info!("Rendered {:?} -> {:?}", post.source, target);
            }
            None => {
                let mut out = stdout.lock();
                out.write_all(html.as_bytes())?;
                out.flush()?;
            }
        }
    }

    tracing::info!("Rendered {} post(s) in {:?}", posts.len(), start.elapsed());
    Ok(posts.len())
}

/// Where a post's page lands inside the output directory
pub fn page_path(output: &Path, slug: &str) -> PathBuf {
    output.join(slug).join("index.html")
}

fn write_page(target: &Path, html: &str) -> Result<()> {
    if let Some(parent) = target.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {:?}", parent))?;
    }
    fs::write(target, html).with_context(|| format!("Failed to write {:?}", target))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_page_path() {
        assert_eq!(
            page_path(Path::new("public"), "hello-world"),
            PathBuf::from("public/hello-world/index.html")
        );
    }

    #[test]
    fn test_render_to_directory() {
        let site = TempDir::new().unwrap();
        fs::write(
            site.path().join("_config.yml"),
            "info:\n  name: Test Blog\nsource:\n  repository: test/blog\n",
        )
        .unwrap();
        let posts = site.path().join("posts");
        fs::create_dir(&posts).unwrap();
        fs::write(
            posts.join("2023-05-04.hello-world.html"),
            "---\ntitle: Hello World\n---\n<p>Body</p>\n",
        )
        .unwrap();

        let blog = Blog::new(site.path()).unwrap();
        let public = site.path().join("public");
        let count = run(&blog, &[posts], Some(&public)).unwrap();
        assert_eq!(count, 1);

        let html = fs::read_to_string(public.join("hello-world/index.html")).unwrap();
        assert!(html.contains("<title>Hello World - Test Blog</title>"));
        assert!(html.contains("<p>Body</p>"));
        assert!(html.contains(
            "https://github.com/test/blog/blob/master/posts/2023-05-04.hello-world.md"
        ));
    }

    #[test]
    fn test_render_fails_when_nothing_loads() {
        let site = TempDir::new().unwrap();
        let post = site.path().join("2023-05-04.untitled.html");
        fs::write(&post, "<p>no title</p>").unwrap();

        let blog = Blog::new(site.path()).unwrap();
        assert!(run(&blog, &[post], Some(site.path())).is_err());
    }

    #[test]
    fn test_render_skips_invalid_posts() {
        let site = TempDir::new().unwrap();
        fs::write(
            site.path().join("2023-05-04.good.html"),
            "---\ntitle: Good\n---\n",
        )
        .unwrap();
        fs::write(site.path().join("2023-05-05.untitled.html"), "<p>x</p>").unwrap();

        let blog = Blog::new(site.path()).unwrap();
        let public = site.path().join("public");
        assert_eq!(run(&blog, &[site.path().to_path_buf()], Some(&public)).unwrap(), 1);
        assert!(public.join("good/index.html").exists());
        assert!(!public.join("untitled").exists());
    }

    #[test]
    fn test_rerender_site_root() {
        let site = TempDir::new().unwrap();
        fs::write(
            site.path().join("2023-05-04.hello-world.html"),
            "---\ntitle: Hello World\n---\n<p>Body</p>\n",
        )
        .unwrap();

        let blog = Blog::new(site.path()).unwrap();
        let public = site.path().join("public");
        let root = [site.path().to_path_buf()];
        assert_eq!(run(&blog, &root, Some(&public)).unwrap(), 1);
        // the page written by the first run is not mistaken for a post
        assert_eq!(run(&blog, &root, Some(&public)).unwrap(), 1);
        assert!(public.join("hello-world/index.html").exists());
    }

    #[test]
    fn test_unsafe_slug_never_leaves_output() {
        let site = TempDir::new().unwrap();
        let post = site.path().join("2023-05-04.post.html");
        fs::write(&post, "---\ntitle: Escape\nslug: ../escaped\n---\n").unwrap();

        let blog = Blog::new(site.path()).unwrap();
        let out = site.path().join("out");
        assert!(run(&blog, &[post], Some(&out)).is_err());
        assert!(!site.path().join("escaped").exists());
    }

    #[test]
    fn test_render_without_posts() {
        let site = TempDir::new().unwrap();
        let blog = Blog::new(site.path()).unwrap();
        assert!(run(&blog, &[site.path().to_path_buf()], None).is_err());
    }
}
