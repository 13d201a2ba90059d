//! Integration tests for the content store over a temporary posts directory

use std::fs;
use std::path::Path;

use postpress::config::ContentConfig;
use postpress::content::ContentStore;
use postpress::Error;
use tempfile::TempDir;

fn write_post(dir: &Path, name: &str, content: &str) {
    fs::write(dir.join(name), content).unwrap();
}

fn store_for(dir: &TempDir) -> ContentStore {
    let config = ContentConfig {
        content_dir: dir.path().to_path_buf(),
        base_url: "https://blog.example.com".to_string(),
        ..Default::default()
    };
    ContentStore::new(config).unwrap()
}

fn fixture() -> TempDir {
    let dir = TempDir::new().unwrap();
    write_post(
        dir.path(),
        "hello.md",
        "---\ntitle: \"Hello\"\ndate: \"2024-01-01\"\n---\n# Hi\n\nSome *text*.\n",
    );
    write_post(
        dir.path(),
        "second.md",
        "---\ntitle: \"Second\"\ndate: \"2024-02-01\"\nexcerpt: \"teaser\"\n---\nBody two.\n",
    );
    write_post(
        dir.path(),
        "third.md",
        "---\ntitle: \"Third\"\ndate: \"2023-12-01\"\n---\nBody three.\n",
    );
    dir
}

#[test]
fn list_all_returns_one_post_per_file() {
    let dir = fixture();
    let store = store_for(&dir);

    let posts = store.list_all().unwrap();
    assert_eq!(posts.len(), 3);

    let mut slugs: Vec<&str> = posts.iter().map(|p| p.slug.as_str()).collect();
    slugs.sort();
    assert_eq!(slugs, vec!["hello", "second", "third"]);
}

#[test]
fn list_all_skips_non_markdown_files() {
    let dir = fixture();
    write_post(dir.path(), "notes.txt", "not a post");
    let store = store_for(&dir);

    let posts = store.list_all().unwrap();
    assert_eq!(posts.len(), 3);
    assert!(posts.iter().all(|p| p.slug != "notes"));
}

#[test]
fn get_by_slug_matches_listing_metadata() {
    let dir = fixture();
    let store = store_for(&dir);

    for post in store.list_all().unwrap() {
        let rendered = store.get_by_slug(&post.slug).unwrap();
        assert_eq!(rendered.post.slug, post.slug);
        assert_eq!(rendered.post.title, post.title);
        assert_eq!(rendered.post.date, post.date);
        assert_eq!(rendered.post.permalink, post.permalink);
    }
}

#[test]
fn get_by_slug_missing_is_not_found() {
    let dir = fixture();
    let store = store_for(&dir);

    let err = store.get_by_slug("nonexistent").unwrap_err();
    assert!(matches!(err, Error::NotFound { ref slug } if slug == "nonexistent"));
}

#[test]
fn round_trip_renders_metadata_and_html() {
    let dir = fixture();
    let store = store_for(&dir);

    let rendered = store.get_by_slug("hello").unwrap();
    assert_eq!(rendered.post.title, "Hello");
    assert_eq!(rendered.post.date, "2024-01-01");
    assert!(rendered.content_html.contains("<h1>Hi</h1>"));
    assert!(rendered.content_html.contains("<em>text</em>"));
}

#[test]
fn fenced_code_block_is_syntax_highlighted() {
    let dir = fixture();
    write_post(
        dir.path(),
        "code.md",
        "---\ntitle: \"Code\"\ndate: \"2024-03-01\"\n---\n```rust\nfn main() {\n    println!(\"hi\");\n}\n```\n",
    );
    let store = store_for(&dir);

    let rendered = store.get_by_slug("code").unwrap();
    assert!(rendered.content_html.contains("highlight"));
    assert!(rendered.content_html.contains("<span"));
    assert!(!rendered.content_html.contains("<pre><code>fn main()"));
}

#[test]
fn rendering_is_idempotent() {
    let dir = fixture();
    let store = store_for(&dir);

    let first = store.get_by_slug("hello").unwrap();
    let second = store.get_by_slug("hello").unwrap();
    assert_eq!(first.content_html, second.content_html);
}

#[test]
fn listing_order_is_stable() {
    let dir = fixture();
    let store = store_for(&dir);

    let first: Vec<String> = store
        .list_all()
        .unwrap()
        .into_iter()
        .map(|p| p.slug)
        .collect();
    let second: Vec<String> = store
        .list_all()
        .unwrap()
        .into_iter()
        .map(|p| p.slug)
        .collect();
    assert_eq!(first, second);
}

#[test]
fn list_recent_sorts_newest_first() {
    let dir = fixture();
    let store = store_for(&dir);

    let recent = store.list_recent(2).unwrap();
    assert_eq!(recent.len(), 2);
    assert_eq!(recent[0].slug, "second");
    assert_eq!(recent[1].slug, "hello");
}

#[test]
fn malformed_front_matter_degrades_to_partial_metadata() {
    let dir = fixture();
    write_post(dir.path(), "broken.md", "---\ntitle: [unclosed\n---\nStill readable body.\n");
    let store = store_for(&dir);

    let posts = store.list_all().unwrap();
    assert_eq!(posts.len(), 4);

    let broken = posts.iter().find(|p| p.slug == "broken").unwrap();
    // Lenient fallback: slug stands in for the title, date is empty
    assert_eq!(broken.title, "broken");
    assert_eq!(broken.date, "");

    let rendered = store.get_by_slug("broken").unwrap();
    assert!(rendered.content_html.contains("Still readable body."));
}

#[test]
fn extra_front_matter_fields_pass_through() {
    let dir = fixture();
    write_post(
        dir.path(),
        "tagged.md",
        "---\ntitle: \"Tagged\"\ndate: \"2024-04-01\"\nauthor: jane\n---\nBody.\n",
    );
    let store = store_for(&dir);

    let rendered = store.get_by_slug("tagged").unwrap();
    assert_eq!(
        rendered.post.extra.get("author"),
        Some(&serde_yaml::Value::String("jane".to_string()))
    );
}

#[test]
fn raw_html_in_body_is_escaped() {
    let dir = fixture();
    write_post(
        dir.path(),
        "sneaky.md",
        "---\ntitle: \"Sneaky\"\ndate: \"2024-05-01\"\n---\nBefore <script>alert(1)</script> after.\n",
    );
    let store = store_for(&dir);

    let rendered = store.get_by_slug("sneaky").unwrap();
    assert!(!rendered.content_html.contains("<script>"));
    assert!(rendered.content_html.contains("&lt;script&gt;"));
}

#[test]
fn store_rejects_missing_content_dir() {
    let config = ContentConfig {
        content_dir: "/nonexistent/posts".into(),
        ..Default::default()
    };
    assert!(matches!(
        ContentStore::new(config),
        Err(Error::Config(_))
    ));
}
