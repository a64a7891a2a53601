//! Shared fixtures for CLI integration tests.

use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// A small registry file with three templates across two categories.
///
/// Taxonomy entries carry no counts, so the loader derives them.
pub const SMALL_REGISTRY: &str = r#"{
  "version": "1",
  "taxonomy": {
    "categories": [
      { "id": "blog", "name": "Blog" },
      { "id": "landing-page", "name": "Landing Page" }
    ],
    "technologies": [
      { "id": "tailwind-css", "name": "Tailwind CSS" }
    ]
  },
  "templates": [
    {
      "id": "plain-blog",
      "title": "Plain Blog",
      "description": "A markdown blog with zero chrome",
      "categories": ["Blog"],
      "technologies": ["Tailwind CSS"],
      "demo_url": "https://plain-blog.example.com",
      "source_url": "https://example.com/plain-blog"
    },
    {
      "id": "splash-page",
      "title": "Splash Page",
      "description": "Single-screen landing page",
      "categories": ["Landing Page"],
      "technologies": ["Tailwind CSS"],
      "demo_url": "https://splash.example.com",
      "source_url": "https://example.com/splash-page"
    },
    {
      "id": "hybrid-kit",
      "title": "Hybrid Kit",
      "description": "Landing page with an attached blog",
      "categories": ["Landing Page", "Blog"],
      "demo_url": "https://hybrid.example.com",
      "source_url": "https://example.com/hybrid-kit"
    }
  ]
}"#;

/// Writes the small registry into a temp dir, returning the dir guard
/// and the file path. Keep the guard alive for the test's duration.
pub fn small_registry_file() -> (TempDir, PathBuf) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("registry.json");
    fs::write(&path, SMALL_REGISTRY).expect("Failed to write fixture registry");
    (dir, path)
}
