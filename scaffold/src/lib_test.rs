use super::*;
use time::macros::datetime;

fn stamp() -> Stamp {
    Stamp { year: 2026, timestamp: "2026-10-16T08:30:00Z".to_owned() }
}

#[test]
fn stamp_formats_rfc3339() {
    let stamp = Stamp::at(datetime!(2026-10-16 08:30:00 UTC)).unwrap();
    assert_eq!(stamp.year, 2026);
    assert_eq!(stamp.timestamp, "2026-10-16T08:30:00Z");
}

#[test]
fn patterns_pick_generators_in_order() {
    let stamp = stamp();
    assert!(content_for("contact.html", &stamp).starts_with("<!doctype html>"));
    assert!(content_for("assets/css/styles.css", &stamp).contains("--color-accent"));
    assert!(content_for("assets/js/main.js", &stamp).contains("DOMContentLoaded"));
    assert!(content_for("vercel.json", &stamp).contains("@vercel/static"));
    assert!(content_for("assets/icons/favicon.svg", &stamp).contains("<svg"));
    assert!(content_for("assets/images/hero.jpg", &stamp).starts_with("PLACEHOLDER"));
    assert_eq!(content_for(".gitignore", &stamp).lines().next(), Some("node_modules/"));
}

#[test]
fn unknown_paths_fall_back() {
    assert_eq!(
        content_for("assets/fonts/inter.woff2", &stamp()),
        "<!-- assets/fonts/inter.woff2: placeholder file. Paste real content here. -->\n"
    );
}

#[test]
fn generate_writes_every_file() {
    let dir = tempfile::tempdir().unwrap();
    let report = generate(dir.path(), false, &stamp()).unwrap();

    assert!(report.root_created);
    assert_eq!(report.count(Outcome::Created), FILES.len());
    for rel in FILES {
        assert!(dir.path().join(SITE_DIR).join(rel).is_file(), "{rel} missing");
    }
    let robots = std::fs::read_to_string(dir.path().join(SITE_DIR).join("robots.txt")).unwrap();
    assert!(robots.contains("Sitemap: /wulkan-kibo/sitemap.xml"));
}

#[test]
fn existing_files_are_skipped_without_force() {
    let dir = tempfile::tempdir().unwrap();
    let about = dir.path().join(SITE_DIR).join("about.html");
    std::fs::create_dir_all(about.parent().unwrap()).unwrap();
    std::fs::write(&about, "mine").unwrap();

    let report = generate(dir.path(), false, &stamp()).unwrap();

    assert!(!report.root_created);
    assert!(report.files.contains(&("about.html", Outcome::Skipped)));
    assert_eq!(report.count(Outcome::Created), FILES.len() - 1);
    assert_eq!(std::fs::read_to_string(&about).unwrap(), "mine");
}

#[test]
fn force_overwrites() {
    let dir = tempfile::tempdir().unwrap();
    generate(dir.path(), false, &stamp()).unwrap();

    let report = generate(dir.path(), true, &stamp()).unwrap();

    assert_eq!(report.count(Outcome::Overwritten), FILES.len());
    assert_eq!(report.count(Outcome::Skipped), 0);
}

#[test]
fn outcome_labels() {
    assert_eq!(Outcome::Created.to_string(), "CREATED");
    assert_eq!(Outcome::Overwritten.to_string(), "OVERWRITTEN");
    assert_eq!(Outcome::Skipped.to_string(), "SKIP (exists)");
}
