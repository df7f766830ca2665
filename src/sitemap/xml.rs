// src/sitemap/xml.rs
// =============================================================================
// Renders entries as a sitemap protocol document:
//
//   <?xml version="1.0" encoding="UTF-8"?>
//   <urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">
//     <url>
//       <loc>https://www.example.com/</loc>
//       <lastmod>2024-03-01T10:00:00+00:00</lastmod>
//       <changefreq>weekly</changefreq>
//       <priority>0.5</priority>
//     </url>
//   </urlset>
// =============================================================================

use super::entry::SitemapEntry;
use super::lastmod::format_lastmod;
use quick_xml::escape::escape;

pub const SITEMAP_NAMESPACE: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

pub fn render(entries: &[SitemapEntry]) -> String {
    let mut lines = vec![
        r#"<?xml version="1.0" encoding="UTF-8"?>"#.to_string(),
        format!(r#"<urlset xmlns="{}">"#, SITEMAP_NAMESPACE),
    ];

    for entry in entries {
        lines.push("  <url>".to_string());
        lines.push(format!("    <loc>{}</loc>", escape(entry.loc.as_str())));
        lines.push(format!("    <lastmod>{}</lastmod>", format_lastmod(&entry.lastmod)));
        lines.push(format!("    <changefreq>{}</changefreq>", entry.changefreq.as_str()));
        lines.push(format!("    <priority>{}</priority>", escape(entry.priority.as_str())));
        lines.push("  </url>".to_string());
    }

    lines.push("</urlset>".to_string());
    let mut xml = lines.join("\n");
    xml.push('\n');
    xml
}
