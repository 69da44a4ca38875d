//! File kind detection for icons and syntax modes

use serde::{Deserialize, Serialize};

/// Icon shown next to a file in the tree and the tab strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FileIcon {
    GitIgnore,
    Vite,
    Markdown,
    #[serde(rename = "tsconfig")]
    TsConfig,
    Html,
    Css,
    #[serde(rename = "javascript")]
    JavaScript,
    #[serde(rename = "typescript")]
    TypeScript,
    React,
    Json,
    Text,
}

const VITE_CONFIGS: &[&str] = &[
    "vite.config.js",
    "vite.config.mjs",
    "vite.config.cjs",
    "vite.config.ts",
    "vite.config.mts",
    "vite.config.cts",
];

impl FileIcon {
    /// Pick the icon for a file name. More specific names win over
    /// extensions, so `tsconfig.json` is not a plain JSON file.
    pub fn for_name(name: &str) -> Self {
        let ends_with_any = |suffixes: &[&str]| suffixes.iter().any(|s| name.ends_with(s));

        if name == ".gitignore" {
            FileIcon::GitIgnore
        } else if ends_with_any(VITE_CONFIGS) {
            FileIcon::Vite
        } else if name.ends_with(".md") {
            FileIcon::Markdown
        } else if name.ends_with("tsconfig.json") {
            FileIcon::TsConfig
        } else if name.ends_with(".html") {
            FileIcon::Html
        } else if name.ends_with(".css") {
            FileIcon::Css
        } else if ends_with_any(&[".js", ".mjs", ".cjs"]) {
            FileIcon::JavaScript
        } else if ends_with_any(&[".ts", ".mts", ".cts"]) {
            FileIcon::TypeScript
        } else if ends_with_any(&[".jsx", ".mjsx", ".cjsx", ".tsx", ".mtsx", ".ctsx"]) {
            FileIcon::React
        } else if name.ends_with(".json") {
            FileIcon::Json
        } else {
            FileIcon::Text
        }
    }
}

/// Syntax mode for the editing surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Lang {
    Js,
    Ts,
    Mjs,
    Cjs,
    Mts,
    Cts,
    Jsx,
    Tsx,
    Mjsx,
    Cjsx,
    Mtsx,
    Ctsx,
    Json,
    Jsonc,
}

impl Lang {
    /// Language from the extension of the last path segment, if it is one
    /// the editor highlights.
    pub fn for_path(path: &str) -> Option<Self> {
        let name = path.rsplit('/').next().unwrap_or(path);
        let (_, extension) = name.rsplit_once('.')?;

        let lang = match extension {
            "js" => Lang::Js,
            "ts" => Lang::Ts,
            "mjs" => Lang::Mjs,
            "cjs" => Lang::Cjs,
            "mts" => Lang::Mts,
            "cts" => Lang::Cts,
            "jsx" => Lang::Jsx,
            "tsx" => Lang::Tsx,
            "mjsx" => Lang::Mjsx,
            "cjsx" => Lang::Cjsx,
            "mtsx" => Lang::Mtsx,
            "ctsx" => Lang::Ctsx,
            "json" => Lang::Json,
            "jsonc" => Lang::Jsonc,
            _ => return None,
        };

        Some(lang)
    }
}
