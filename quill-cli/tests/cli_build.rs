use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

fn quill(dir: &Path) -> Command {
    #[allow(deprecated)]
    let mut cmd = Command::cargo_bin("quill").unwrap();
    cmd.current_dir(dir);
    cmd
}

fn init_site(dir: &Path) {
    quill(dir).arg("init").assert().success();
}

fn build_site(dir: &Path) {
    quill(dir).arg("build").assert().success();
}

fn read(dir: &Path, rel: &str) -> String {
    fs::read_to_string(dir.join(rel)).unwrap_or_else(|_| panic!("missing output {rel}"))
}

#[test]
fn init_then_build_publishes_the_sample_site() {
    let dir = tempdir().unwrap();
    init_site(dir.path());
    build_site(dir.path());

    let index = read(dir.path(), "destination/index.html");
    assert!(index.contains("Welcome to quill"));

    // The sample post is dated 2024-01-15, so it publishes under a
    // dated path.
    let page = read(dir.path(), "destination/2024/01/welcome.html");
    assert!(page.contains("Welcome to quill"));

    // Feeds always exist; the sample post is a Post, so only the main
    // feed carries an entry.
    let feed = read(dir.path(), "destination/index.xml");
    assert!(feed.contains("<entry>"));
    let snippets = read(dir.path(), "destination/snippets.xml");
    assert!(!snippets.contains("<entry>"));

    // One tag index per tag of the sample post.
    assert!(dir.path().join("destination/tag-quill.html").exists());
    assert!(dir.path().join("destination/tag-intro.html").exists());
}

#[test]
fn hidden_tags_get_disguised_index_pages() {
    let dir = tempdir().unwrap();
    init_site(dir.path());

    fs::write(
        dir.path().join("posts/hello.md"),
        "---\n\
         title: Hello World\n\
         author: Jane\n\
         date: 2024-01-15T10:00:00Z\n\
         tags: golang, -secret\n\
         ---\n\
         # Hi\n\
         Some markdown.\n",
    )
    .unwrap();

    build_site(dir.path());

    let page = read(dir.path(), "destination/2024/01/hello.html");
    assert!(page.contains("Hello World"));

    // The visible tag gets a normal index page and an on-page link; the
    // hidden one gets a disguised file and no link.
    assert!(dir.path().join("destination/tag-golang.html").exists());
    assert!(dir.path().join("destination/_tag-secret.html").exists());
    assert!(page.contains("tag-golang"));
    assert!(!page.contains("tag-secret"));

    let tag_index = read(dir.path(), "destination/tag-golang.html");
    assert!(tag_index.contains("Hello World"));
}

#[test]
fn bad_files_are_skipped_without_aborting_the_run() {
    let dir = tempdir().unwrap();
    init_site(dir.path());

    fs::write(dir.path().join("posts/broken.md"), "no front matter\n").unwrap();
    fs::write(
        dir.path().join("posts/baddate.md"),
        "---\ntitle: Bad\ndate: next Tuesday\n---\nbody\n",
    )
    .unwrap();

    build_site(dir.path());

    // The well-formed sample article still published.
    assert!(dir.path().join("destination/2024/01/welcome.html").exists());
    let index = read(dir.path(), "destination/index.html");
    assert!(!index.contains("Bad"));
}

#[test]
fn drafts_publish_under_drafts_and_stay_out_of_views() {
    let dir = tempdir().unwrap();
    init_site(dir.path());

    fs::write(
        dir.path().join("posts/wip.md"),
        "---\ntitle: Unfinished Thing\ndate: 2024-03-01T00:00:00Z\ndraft: true\n---\nsoon\n",
    )
    .unwrap();
    // Draft by filename convention, header says nothing.
    fs::write(
        dir.path().join("posts/ideadraft.md"),
        "---\ntitle: Idea\ndate: 2024-03-02T00:00:00Z\n---\nmaybe\n",
    )
    .unwrap();

    build_site(dir.path());

    assert!(dir.path().join("destination/drafts/wip.html").exists());
    assert!(dir.path().join("destination/drafts/ideadraft.html").exists());

    let index = read(dir.path(), "destination/index.html");
    assert!(!index.contains("Unfinished Thing"));
    assert!(!index.contains("Idea"));

    let feed = read(dir.path(), "destination/index.xml");
    assert!(!feed.contains("Unfinished Thing"));
}

#[test]
fn pages_land_at_the_site_root() {
    let dir = tempdir().unwrap();
    init_site(dir.path());

    fs::write(
        dir.path().join("posts/about.md"),
        "---\ntitle: About\ntype: Page\ndate: 2024-01-01T00:00:00Z\n---\nAbout me.\n",
    )
    .unwrap();

    build_site(dir.path());

    assert!(dir.path().join("destination/about.html").exists());
    let index = read(dir.path(), "destination/index.html");
    assert!(!index.contains("About me."));
}

#[test]
fn snippets_feed_separately_from_posts() {
    let dir = tempdir().unwrap();
    init_site(dir.path());

    fs::write(
        dir.path().join("posts/note.md"),
        "---\ntype: Snippet\ndate: 2024-04-01T08:00:00Z\n---\nShort thought.\n",
    )
    .unwrap();

    build_site(dir.path());

    let snippets = read(dir.path(), "destination/snippets.xml");
    assert!(snippets.contains("Short thought."));

    let feed = read(dir.path(), "destination/index.xml");
    assert!(!feed.contains("Short thought."));

    // Snippets still appear on the home index.
    let index = read(dir.path(), "destination/index.html");
    assert!(index.contains("Short thought."));
}

#[test]
fn article_pages_are_identical_across_reruns() {
    let dir = tempdir().unwrap();
    init_site(dir.path());
    build_site(dir.path());

    let first = read(dir.path(), "destination/2024/01/welcome.html");
    build_site(dir.path());
    let second = read(dir.path(), "destination/2024/01/welcome.html");

    assert_eq!(first, second);
}

#[test]
fn missing_destination_is_fatal() {
    let dir = tempdir().unwrap();
    init_site(dir.path());
    fs::remove_dir(dir.path().join("destination")).unwrap();

    quill(dir.path())
        .arg("build")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Destination directory"));
}

#[test]
fn missing_required_template_is_fatal() {
    let dir = tempdir().unwrap();
    init_site(dir.path());
    fs::remove_file(dir.path().join("templates/rsstemplate.html")).unwrap();

    quill(dir.path())
        .arg("build")
        .assert()
        .failure()
        .stderr(predicate::str::contains("templates"));
}

#[test]
fn template_command_prints_a_draft_skeleton() {
    let dir = tempdir().unwrap();

    quill(dir.path())
        .args(["template", "post", "--author", "Jane"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("---\n"))
        .stdout(predicate::str::contains("type: Post"))
        .stdout(predicate::str::contains("author: Jane"))
        .stdout(predicate::str::contains("draft: true"));
}

#[test]
fn snippet_template_has_no_title() {
    let dir = tempdir().unwrap();

    quill(dir.path())
        .args(["template", "snippet"])
        .assert()
        .success()
        .stdout(predicate::str::contains("type: Snippet"))
        .stdout(predicate::str::contains("title:").not());
}
