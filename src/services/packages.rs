//! Package source reading: plain text lines or JSON documents.

use crate::domain::Package;
use crate::error::{PackageError, PackageResult};
use regex::Regex;
use serde::Deserialize;
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

/// Encoding of a package source
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PackageFormat {
    /// One package per line: `CODE r1 r2 ...`
    Text,
    /// Array of `{"code", "readings"}` objects or `["CODE", [..]]` pairs
    Json,
}

impl PackageFormat {
    /// Guess the format from a file extension, defaulting to text
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Self::Json,
            _ => Self::Text,
        }
    }
}

/// Reader for sensor packages
pub struct PackageReader {
    format: PackageFormat,
}

impl PackageReader {
    /// Create a reader for the given format
    pub fn new(format: PackageFormat) -> Self {
        Self { format }
    }

    /// Read packages from a file, or from stdin when the path is `-`
    pub fn read_path(&self, path: &Path) -> PackageResult<Vec<Package>> {
        let content = if path == Path::new("-") {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .map_err(|source| PackageError::Read {
                    path: PathBuf::from("<stdin>"),
                    source,
                })?;
            buf
        } else {
            fs::read_to_string(path).map_err(|source| PackageError::Read {
                path: path.to_path_buf(),
                source,
            })?
        };

        let packages = self.parse(&content)?;
        tracing::debug!("Read {} packages from {:?}", packages.len(), path);
        Ok(packages)
    }

    /// Parse packages from an in-memory document
    pub fn parse(&self, content: &str) -> PackageResult<Vec<Package>> {
        match self.format {
            PackageFormat::Text => parse_text(content),
            PackageFormat::Json => parse_json(content),
        }
    }
}

fn line_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^(?P<code>[A-Za-z]+)(?:\s*:\s*|\s+|$)(?P<readings>.*)$")
            .expect("valid package regex")
    })
}

/// Parse the text format.
///
/// Blank lines and `#` comments are skipped. Readings may be separated by
/// whitespace or commas. The code is not validated here.
pub fn parse_text(content: &str) -> PackageResult<Vec<Package>> {
    let mut packages = Vec::new();

    for (index, raw) in content.lines().enumerate() {
        let line = index + 1;
        let body = raw.split('#').next().unwrap_or_default().trim();
        if body.is_empty() {
            continue;
        }

        let caps = match line_pattern().captures(body) {
            Some(caps) => caps,
            None if body.starts_with(|c: char| c.is_ascii_digit() || c == '-' || c == '.') => {
                return Err(PackageError::MissingCode { line })
            }
            None => {
                return Err(PackageError::Malformed {
                    line,
                    content: body.to_string(),
                })
            }
        };

        let readings = caps["readings"]
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|token| !token.is_empty())
            .map(|token| {
                token.parse::<f64>().map_err(|_| PackageError::InvalidReading {
                    line,
                    token: token.to_string(),
                })
            })
            .collect::<PackageResult<Vec<_>>>()?;

        packages.push(Package::new(&caps["code"], readings));
    }

    Ok(packages)
}

#[derive(Deserialize)]
#[serde(untagged)]
enum JsonPackage {
    Object(Package),
    Pair(String, Vec<f64>),
}

/// Parse the JSON format
pub fn parse_json(content: &str) -> PackageResult<Vec<Package>> {
    let entries: Vec<JsonPackage> = serde_json::from_str(content)?;
    Ok(entries
        .into_iter()
        .map(|entry| match entry {
            JsonPackage::Object(package) => package,
            JsonPackage::Pair(code, readings) => Package::new(code, readings),
        })
        .collect())
}
