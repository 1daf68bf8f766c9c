//! Content types and the site's post index.

use std::path::{Component, Path};

use crate::{
    error::{CoreError, Result},
    frontmatter::{Frontmatter, parse_frontmatter},
    theme::ThemeRecord,
};

const WORK_EXCERPT_CHARS: usize = 140;
const NOTE_EXCERPT_CHARS: usize = 50;

/// Section a post belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PostKind {
    /// Case study under `work/`.
    Work,
    /// Short writing under `notes/`.
    Note,
}

impl PostKind {
    /// Determine the kind from the first path component.
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.components().next()? {
            Component::Normal(section) => match section.to_str()? {
                "work" => Some(Self::Work),
                "notes" => Some(Self::Note),
                _ => None,
            },
            _ => None,
        }
    }

    fn excerpt_chars(&self) -> usize {
        match self {
            Self::Work => WORK_EXCERPT_CHARS,
            Self::Note => NOTE_EXCERPT_CHARS,
        }
    }
}

/// A post ready for rendering.
#[derive(Debug, Clone)]
pub struct Post {
    /// URL path, e.g. `/work/ackbar`.
    pub slug: String,

    pub kind: PostKind,

    pub frontmatter: Frontmatter,

    /// Body HTML.
    pub html: String,

    /// Plain-text summary for listings and meta descriptions.
    pub excerpt: String,
}

impl Post {
    /// Build a post from a source file relative to the content root.
    pub fn from_source(path: &Path, source: &str) -> Result<Self> {
        let kind = PostKind::from_path(path)
            .ok_or_else(|| CoreError::frontmatter(path, "post must live under work/ or notes/"))?;

        let (frontmatter, html) = parse_frontmatter(source, path)?;
        frontmatter.validate(path)?;

        let excerpt = frontmatter.description.clone().unwrap_or_else(|| {
            truncate_at_word_boundary(strip_html(&html).trim(), kind.excerpt_chars())
        });

        Ok(Self {
            slug: slug_for(path),
            kind,
            frontmatter,
            html,
            excerpt,
        })
    }

    pub fn title(&self) -> &str {
        &self.frontmatter.title
    }

    pub fn theme_record(&self) -> ThemeRecord {
        self.frontmatter.theme_record()
    }
}

/// `work/ackbar.md` -> `/work/ackbar`, `work/ackbar/index.md` -> `/work/ackbar`.
fn slug_for(path: &Path) -> String {
    let without_ext = path.with_extension("");
    let without_index = if without_ext.file_name().is_some_and(|name| name == "index") {
        without_ext.parent().unwrap_or(Path::new("")).to_path_buf()
    } else {
        without_ext
    };

    let parts: Vec<_> = without_index
        .components()
        .filter_map(|c| match c {
            Component::Normal(part) => part.to_str(),
            _ => None,
        })
        .collect();

    format!("/{}", parts.join("/"))
}

/// Every post on the site.
#[derive(Debug, Clone, Default)]
pub struct SiteContent {
    work: Vec<Post>,
    notes: Vec<Post>,
}

impl SiteContent {
    /// Index a set of `(path, source)` pairs.
    pub fn from_sources<'a, I>(sources: I) -> Result<Self>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let posts = sources
            .into_iter()
            .map(|(path, source)| Post::from_source(Path::new(path), source))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self::from_posts(posts))
    }

    /// Index posts that are already parsed.
    pub fn from_posts(posts: impl IntoIterator<Item = Post>) -> Self {
        let mut content = Self::default();
        for post in posts {
            match post.kind {
                PostKind::Work => content.work.push(post),
                PostKind::Note => content.notes.push(post),
            }
        }

        // Newest first; undated posts sink to the end.
        content.work.sort_by(|a, b| b.frontmatter.date.cmp(&a.frontmatter.date));
        content.notes.sort_by(|a, b| b.frontmatter.date.cmp(&a.frontmatter.date));

        tracing::debug!(
            work = content.work.len(),
            notes = content.notes.len(),
            "indexed site content"
        );
        content
    }

    /// Work posts, newest first.
    pub fn work(&self) -> &[Post] {
        &self.work
    }

    /// Published notes, newest first.
    pub fn notes(&self) -> impl Iterator<Item = &Post> {
        self.notes.iter().filter(|post| post.frontmatter.publish)
    }

    /// Find a post by slug, with or without surrounding slashes.
    pub fn find(&self, slug: &str) -> Option<&Post> {
        let wanted = slug.trim_matches('/');
        self.work
            .iter()
            .chain(&self.notes)
            .find(|post| post.slug.trim_matches('/') == wanted)
    }

    /// The older and newer work posts around `slug`.
    pub fn neighbors(&self, slug: &str) -> (Option<&Post>, Option<&Post>) {
        let wanted = slug.trim_matches('/');
        let Some(index) = self
            .work
            .iter()
            .position(|post| post.slug.trim_matches('/') == wanted)
        else {
            return (None, None);
        };

        let previous = self.work.get(index + 1);
        let next = index.checked_sub(1).and_then(|i| self.work.get(i));
        (previous, next)
    }
}

/// Strip HTML tags from content.
fn strip_html(html: &str) -> String {
    let mut result = String::new();
    let mut in_tag = false;

    for c in html.chars() {
        match c {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => result.push(c),
            _ => {}
        }
    }

    result
}

/// Truncate text at word boundary, respecting UTF-8 character boundaries.
fn truncate_at_word_boundary(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }

    let truncate_byte_idx = text
        .char_indices()
        .nth(max_chars)
        .map(|(idx, _)| idx)
        .unwrap_or(text.len());

    let truncated = &text[..truncate_byte_idx];

    if let Some(last_space_byte) = truncated.rfind(' ') {
        format!("{}...", &truncated[..last_space_byte])
    } else {
        format!("{truncated}...")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn work(title: &str, date: &str) -> String {
        format!("---\ntitle: \"{title}\"\ndate: {date}\n---\n\n<p>About {title}.</p>")
    }

    fn sample_site() -> SiteContent {
        let ackbar = work("Ackbar", "2018-05-04");
        let tarkin = work("Tarkin", "2017-02-11");
        let mothma = work("Mothma", "2019-09-30");
        let note = "---\ntitle: \"Grids\"\ndate: 2018-01-01\npublish: true\n---\n\n<p>Grid notes.</p>";
        let draft = "---\ntitle: \"Draft\"\ndate: 2019-01-01\n---\n\n<p>Unfinished.</p>";

        SiteContent::from_sources([
            ("work/ackbar.md", ackbar.as_str()),
            ("work/tarkin/index.md", tarkin.as_str()),
            ("work/mothma.md", mothma.as_str()),
            ("notes/grids.md", note),
            ("notes/draft.md", draft),
        ])
        .expect("index content")
    }

    #[test]
    fn test_post_kind_from_path() {
        assert_eq!(PostKind::from_path(Path::new("work/a.md")), Some(PostKind::Work));
        assert_eq!(PostKind::from_path(Path::new("notes/a.md")), Some(PostKind::Note));
        assert_eq!(PostKind::from_path(Path::new("pages/a.md")), None);
    }

    #[test]
    fn test_slug_for() {
        assert_eq!(slug_for(Path::new("work/ackbar.md")), "/work/ackbar");
        assert_eq!(slug_for(Path::new("work/tarkin/index.md")), "/work/tarkin");
    }

    #[test]
    fn test_post_outside_sections_is_rejected() {
        let err = Post::from_source(Path::new("misc/a.md"), "---\ntitle: a\n---\n").unwrap_err();
        assert!(err.to_string().contains("misc/a.md"));
    }

    #[test]
    fn test_work_sorted_newest_first() {
        let site = sample_site();
        let titles: Vec<_> = site.work().iter().map(Post::title).collect();
        assert_eq!(titles, vec!["Mothma", "Ackbar", "Tarkin"]);
    }

    #[test]
    fn test_only_published_notes_listed() {
        let site = sample_site();
        let titles: Vec<_> = site.notes().map(Post::title).collect();
        assert_eq!(titles, vec!["Grids"]);
    }

    #[test]
    fn test_from_posts_sorts_and_splits() {
        let posts = [
            ("work/tarkin.md", work("Tarkin", "2017-02-11")),
            ("notes/draft.md", "---\ntitle: \"Draft\"\n---\n".to_string()),
            ("work/mothma.md", work("Mothma", "2019-09-30")),
        ]
        .iter()
        .map(|(path, source)| Post::from_source(Path::new(path), source).expect("post"))
        .collect::<Vec<_>>();

        let site = SiteContent::from_posts(posts);

        let titles: Vec<_> = site.work().iter().map(Post::title).collect();
        assert_eq!(titles, vec!["Mothma", "Tarkin"]);
        assert_eq!(site.notes().count(), 0);
        assert!(site.find("/notes/draft").is_some());
    }

    #[test]
    fn test_find_ignores_slashes() {
        let site = sample_site();
        assert_eq!(site.find("work/ackbar").map(Post::title), Some("Ackbar"));
        assert_eq!(site.find("/work/tarkin/").map(Post::title), Some("Tarkin"));
        assert!(site.find("/work/nope/").is_none());
    }

    #[test]
    fn test_neighbors() {
        let site = sample_site();

        let (previous, next) = site.neighbors("/work/ackbar/");
        assert_eq!(previous.map(Post::title), Some("Tarkin"));
        assert_eq!(next.map(Post::title), Some("Mothma"));

        let (previous, next) = site.neighbors("/work/mothma/");
        assert_eq!(previous.map(Post::title), Some("Ackbar"));
        assert!(next.is_none());

        assert!(matches!(site.neighbors("/work/nope/"), (None, None)));
    }

    #[test]
    fn test_excerpt_from_body() {
        let site = sample_site();
        let post = site.find("/work/ackbar/").expect("post");
        assert_eq!(post.excerpt, "About Ackbar.");
    }

    #[test]
    fn test_note_excerpt_is_pruned() {
        let long = format!(
            "---\ntitle: \"Long\"\npublish: true\n---\n\n<p>{}</p>",
            "word ".repeat(40)
        );
        let post = Post::from_source(Path::new("notes/long.md"), &long).expect("post");
        assert!(post.excerpt.ends_with("..."));
        assert!(post.excerpt.chars().count() <= NOTE_EXCERPT_CHARS + 3);
    }

    #[test]
    fn test_strip_html() {
        assert_eq!(
            strip_html("<p>Hello <strong>World</strong></p>"),
            "Hello World"
        );
        assert_eq!(strip_html("No tags here"), "No tags here");
    }

    #[test]
    fn test_truncate_at_word_boundary() {
        let text = "Hello world this is a test";
        assert_eq!(truncate_at_word_boundary(text, 100), text);
        assert_eq!(truncate_at_word_boundary(text, 11), "Hello...");
        assert_eq!(truncate_at_word_boundary(text, 12), "Hello world...");
    }
}
