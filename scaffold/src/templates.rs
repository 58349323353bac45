//! Placeholder file bodies. Every generator has the same signature so the
//! pattern table in the crate root can hold them side by side.

#[cfg(test)]
#[path = "templates_test.rs"]
mod templates_test;

use crate::{SITE_DIR, Stamp};

/// Page title from a file name: `recipes/peanut-stew.html` -> `peanut stew`.
fn page_title(rel: &str) -> String {
    let name = rel.rsplit('/').next().unwrap_or(rel);
    let stem = name.rsplit_once('.').map_or(name, |(stem, _)| stem);
    stem.replace(['-', '_'], " ")
}

fn file_name(rel: &str) -> &str {
    rel.rsplit('/').next().unwrap_or(rel)
}

pub(crate) fn html_page(rel: &str, stamp: &Stamp) -> String {
    let title = page_title(rel);
    let year = stamp.year;
    format!(
        r##"<!doctype html>
<!-- {rel}: placeholder, replace with real content. -->
<html lang="en">
<head>
  <meta charset="utf-8" />
  <meta name="viewport" content="width=device-width,initial-scale=1" />
  <title>Wulkan Kibo | {title}</title>
  <meta name="description" content="Wulkan Kibo: African recipes and cooking videos (placeholder)" />
  <link rel="stylesheet" href="/{SITE_DIR}/assets/css/styles.css">
  <link rel="icon" href="/{SITE_DIR}/assets/icons/favicon.svg" type="image/svg+xml">
</head>
<body>
  <a class="skip-link" href="#main">Skip to main</a>
  <header>
    <nav>
      <a href="/{SITE_DIR}/index.html">Home</a> |
      <a href="/{SITE_DIR}/recipes/index.html">Recipes</a> |
      <a href="/{SITE_DIR}/about.html">About</a> |
      <a href="/{SITE_DIR}/contact.html">Contact</a>
    </nav>
  </header>

  <main id="main">
    <h1>{title}</h1>
    <p>Generated placeholder for <code>{rel}</code>. Paste your HTML here.</p>
  </main>

  <footer>
    <p>&copy; {year} Wulkan Kibo (placeholder)</p>
  </footer>

  <script src="/{SITE_DIR}/assets/js/main.js" defer></script>
</body>
</html>
"##
    )
}

pub(crate) fn stylesheet(_rel: &str, _stamp: &Stamp) -> String {
    r#"/* assets/css/styles.css: base variables and layout (placeholder) */
:root {
  --color-bg: #fff;
  --color-text: #111827;
  --color-accent: #c2410c;
  --space: 1rem;
  --container: 1100px;
  --radius: 8px;
}

* { box-sizing: border-box }
html, body { height: 100% }
body {
  margin: 0;
  font-family: Inter, system-ui, -apple-system, "Segoe UI", Roboto, "Helvetica Neue", Arial;
  color: var(--color-text);
  background: var(--color-bg);
  line-height: 1.45;
  padding: var(--space);
}
.container { max-width: var(--container); margin: 0 auto; padding: 0 1rem }
header { padding: 0.5rem 0 }
nav a { color: var(--color-text); text-decoration: none; margin-right: 0.75rem }
.skip-link { position: absolute; left: -999px; width: 1px; height: 1px; overflow: hidden }
.skip-link:focus { left: 0; top: 0; width: auto; height: auto; background: #000; color: #fff; padding: 0.5rem; border-radius: 4px }

.recipe-grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(220px, 1fr)); gap: 1rem }

.btn { display: inline-block; padding: 0.5rem 0.75rem; border-radius: 6px; background: var(--color-accent); color: #fff; text-decoration: none }

@media print {
  nav, .btn { display: none !important; }
}
"#
    .to_owned()
}

pub(crate) fn main_script(_rel: &str, _stamp: &Stamp) -> String {
    r"// assets/js/main.js: placeholder. The site runtime ships as WebAssembly;
// load it from here once built.
document.addEventListener('DOMContentLoaded', function () {
  const skip = document.querySelector('.skip-link');
  const main = document.getElementById('main');
  if (skip && main) {
    skip.addEventListener('click', function () {
      main.setAttribute('tabindex', '-1');
      main.focus();
    });
  }
  console.log('Wulkan Kibo main.js loaded; replace with the real runtime');
});
"
    .to_owned()
}

pub(crate) fn vercel_config(_rel: &str, _stamp: &Stamp) -> String {
    r#"{
  "version": 2,
  "builds": [
    { "src": "**/*", "use": "@vercel/static" }
  ],
  "routes": [
    { "src": "/", "dest": "/index.html" }
  ]
}
"#
    .to_owned()
}

pub(crate) fn robots(_rel: &str, _stamp: &Stamp) -> String {
    format!("User-agent: *\nAllow: /\nSitemap: /{SITE_DIR}/sitemap.xml\n")
}

pub(crate) fn sitemap(_rel: &str, stamp: &Stamp) -> String {
    let lastmod = &stamp.timestamp;
    let urls: String = ["index.html", "recipes/index.html"]
        .iter()
        .map(|page| {
            format!(
                "  <url>\n    <loc>https://your-domain.example/{SITE_DIR}/{page}</loc>\n    <lastmod>{lastmod}</lastmod>\n  </url>\n"
            )
        })
        .collect();
    format!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<!-- sitemap.xml: generated placeholder -->\n<urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n{urls}</urlset>\n"
    )
}

pub(crate) fn readme(_rel: &str, _stamp: &Stamp) -> String {
    format!(
        r"# Wulkan Kibo (static scaffold)

This folder was generated by `scaffold`.
Replace the placeholder files with your real HTML/CSS/JS and assets.

## Quick local test

Serve the parent directory with the bundled preview server:

```bash
SITE_DIR=. PORT=3000 wulkan-kibo
```

Then open http://localhost:3000/{SITE_DIR}/index.html

## Deploy to Vercel

1. Create a GitHub repository and push this folder.
2. In Vercel, import the repository.
3. No build command is necessary. Set the output directory to `/` (root).
4. Deploy.

## Notes

- Replace image placeholders in assets/images with actual .jpg/.png files.
- Edit `assets/css/styles.css` and `assets/js/main.js` for styling and behavior.
- Add recipe content under `recipes/*.html`.
"
    )
}

pub(crate) fn license(_rel: &str, stamp: &Stamp) -> String {
    format!(
        "MIT License\n\nCopyright (c) {} Wulkan Kibo\n\nPermission is hereby granted, free of charge, to any person obtaining a copy\nof this software...\n",
        stamp.year
    )
}

pub(crate) fn gitignore(_rel: &str, _stamp: &Stamp) -> String {
    "node_modules/\n.DS_Store\n.env\n.idea\n.vscode/*.code-workspace\n".to_owned()
}

pub(crate) fn favicon(_rel: &str, _stamp: &Stamp) -> String {
    r##"<?xml version="1.0" encoding="UTF-8"?>
<svg xmlns="http://www.w3.org/2000/svg" width="64" height="64" viewBox="0 0 24 24" fill="none" stroke="#c2410c" stroke-width="1.5" stroke-linecap="round" stroke-linejoin="round">
  <rect x="3" y="3" width="18" height="18" rx="3" ry="3" fill="#fff"/>
  <path d="M7 14c1.5-3 4.5-3 6 0" />
  <circle cx="12" cy="9" r="1.2" />
</svg>
"##
    .to_owned()
}

/// Images get a text note instead of a fake binary.
pub(crate) fn image_note(rel: &str, _stamp: &Stamp) -> String {
    let name = file_name(rel);
    format!(
        "PLACEHOLDER: add the real image file here with filename \"{name}\".\nRecommended: JPG/PNG under 300kb for hero images, thumbnails ~80-150kb.\nPath: /{SITE_DIR}/assets/images/{name}\n"
    )
}

pub(crate) fn fallback(rel: &str, _stamp: &Stamp) -> String {
    format!("<!-- {rel}: placeholder file. Paste real content here. -->\n")
}
