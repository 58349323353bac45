//! Sitemap XML and recipe structured data.
//!
//! Development helpers kept alongside the runtime: the browser build exposes
//! `generateSitemap()` on `window` for console use, and recipe pages can embed
//! the JSON-LD from [`RecipeData::structured_data`].

#[cfg(test)]
#[path = "sitemap_test.rs"]
mod sitemap_test;

use std::fmt::Write as _;

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

/// Pages listed in the generated sitemap, relative to the origin.
pub const SITE_PAGES: &[&str] = &[
    "/",
    "/recipes/",
    "/recipes/african-jollof.html",
    "/recipes/peanut-stew.html",
    "/recipes/plantain-fritters.html",
    "/about.html",
    "/contact.html",
];

/// Render a sitemap for `pages` under `base_url`, each stamped with `lastmod`
/// (`YYYY-MM-DD`).
#[must_use]
pub fn generate_sitemap(base_url: &str, pages: &[&str], lastmod: &str) -> String {
    let base = base_url.trim_end_matches('/');
    let mut xml = String::from("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    xml.push_str("<urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n");
    for page in pages {
        xml.push_str("  <url>\n");
        let _ = writeln!(xml, "    <loc>{}{}</loc>", escape_xml(base), escape_xml(page));
        let _ = writeln!(xml, "    <lastmod>{lastmod}</lastmod>");
        xml.push_str("    <changefreq>weekly</changefreq>\n");
        xml.push_str("    <priority>0.8</priority>\n");
        xml.push_str("  </url>\n");
    }
    xml.push_str("</urlset>");
    xml
}

fn escape_xml(raw: &str) -> String {
    raw.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

/// Input for a schema.org `Recipe` document.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeData {
    pub name: String,
    pub image: String,
    pub date_published: String,
    pub description: String,
    pub prep_time: String,
    pub cook_time: String,
    pub total_time: String,
    pub servings: String,
    pub category: String,
    pub cuisine: String,
    pub keywords: String,
    pub ingredients: Vec<String>,
    pub instructions: Vec<String>,
}

impl RecipeData {
    /// JSON-LD for a `<script type="application/ld+json">` block.
    #[must_use]
    pub fn structured_data(&self) -> Value {
        let steps: Vec<Value> = self
            .instructions
            .iter()
            .map(|step| json!({ "@type": "HowToStep", "text": step }))
            .collect();
        json!({
            "@context": "https://schema.org/",
            "@type": "Recipe",
            "name": self.name,
            "image": self.image,
            "author": { "@type": "Organization", "name": "Wulkan Kibo" },
            "datePublished": self.date_published,
            "description": self.description,
            "prepTime": self.prep_time,
            "cookTime": self.cook_time,
            "totalTime": self.total_time,
            "recipeYield": self.servings,
            "recipeCategory": self.category,
            "recipeCuisine": self.cuisine,
            "keywords": self.keywords,
            "recipeIngredient": self.ingredients,
            "recipeInstructions": steps,
        })
    }
}
