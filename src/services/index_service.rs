use crate::api::error::AppError;
use crate::models::{IndexRequest, IndexResponse};
use crate::services::storage::PackageStore;
use crate::utils::html;
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;
use std::sync::Arc;

/// Extensions a distribution file may carry. Anything else is invisible
/// to both listing and download.
const FILE_TYPES: [&str; 3] = ["egg", "whl", "gz"];

pub struct IndexService {
    store: Arc<dyn PackageStore>,
}

impl IndexService {
    pub fn new(store: Arc<dyn PackageStore>) -> Self {
        Self { store }
    }

    /// Route a request path to one of the three index operations.
    ///
    /// A single leading `/` is stripped, then the path splits at the
    /// first `/` into package and filename. A path without a separator
    /// is a package listing, never an error.
    pub async fn handle(&self, request: &IndexRequest) -> Result<IndexResponse, AppError> {
        let path = request.path.strip_prefix('/').unwrap_or(&request.path);
        let (package, filename) = match path.split_once('/') {
            Some((package, filename)) => (package, filename),
            None => (path, ""),
        };

        if !filename.is_empty() {
            self.get_file(path, filename).await
        } else if !package.is_empty() {
            self.list_package_files(package).await
        } else {
            self.list_all_packages().await
        }
    }

    /// All top-level packages in the bucket, one link per package.
    pub async fn list_all_packages(&self) -> Result<IndexResponse, AppError> {
        let mut packages = BTreeSet::new();
        for prefix in self.store.list_common_prefixes().await? {
            packages.insert(prefix.trim_matches('/').to_string());
        }

        let items: Vec<String> = packages
            .iter()
            .map(|package| html::list_item(&format!("{package}/"), package))
            .collect();

        Ok(IndexResponse::html(html::page(&items)))
    }

    /// Files of one package: every key under `<package>/<package>` whose
    /// extension is served. Hrefs are bare filenames, resolved by the
    /// consumer against the package's own listing URL.
    pub async fn list_package_files(&self, package_name: &str) -> Result<IndexResponse, AppError> {
        let prefix = format!("{package_name}/{package_name}");

        let mut files = BTreeSet::new();
        for key in self.store.list_keys(&prefix).await? {
            let Some((_, filename)) = key.split_once('/') else {
                continue;
            };
            if has_recognized_extension(filename) {
                files.insert(filename.to_string());
            }
        }

        let items: Vec<String> = files
            .iter()
            .map(|filename| html::list_item(filename, filename))
            .collect();

        Ok(IndexResponse::html(html::page(&items)))
    }

    /// Download one distribution file as a base64 attachment.
    ///
    /// The extension gate runs against the storage key, not the display
    /// filename.
    pub async fn get_file(&self, path: &str, filename: &str) -> Result<IndexResponse, AppError> {
        if !has_recognized_extension(path) {
            return Err(AppError::InvalidFile(path.to_string()));
        }

        let data = self.store.download(path).await?;

        let mut headers = BTreeMap::new();
        headers.insert(
            "Content-Disposition".to_string(),
            format!("attachment; filename={filename}"),
        );
        headers.insert(
            "Content-Type".to_string(),
            "application/zip, application/octet-stream".to_string(),
        );

        Ok(IndexResponse {
            is_base64_encoded: true,
            headers,
            body: BASE64.encode(data),
        })
    }
}

/// Last-extension check: `foo.tar.gz` passes on `gz`, `foo.whl` on
/// `whl`, a bare `foo` or dotfile `.gz` has no extension and fails.
fn has_recognized_extension(name: &str) -> bool {
    Path::new(name)
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| FILE_TYPES.contains(&ext))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recognized_extensions() {
        assert!(has_recognized_extension("pkg-1.0.whl"));
        assert!(has_recognized_extension("pkg-1.0.egg"));
        assert!(has_recognized_extension("pkg-1.0.tar.gz"));
        assert!(has_recognized_extension("pkg/pkg-1.0.whl"));
    }

    #[test]
    fn test_unrecognized_extensions() {
        assert!(!has_recognized_extension("pkg-1.0.txt"));
        assert!(!has_recognized_extension("pkg-1.0.tar"));
        assert!(!has_recognized_extension("pkg"));
        assert!(!has_recognized_extension(".gz"));
        assert!(!has_recognized_extension(""));
    }
}
