//! Headless `export` command.

use std::path::PathBuf;

use crate::adapters::{DirectoryDownload, ReqwestHttpClient};
use crate::config::DeckConfig;
use crate::error::{DeckError, DeckResult};
use crate::export::ExportRequest;
use crate::source::UserSource;
use crate::state::FavoritesStore;
use crate::traits::{FileDownload, HttpClient};

use super::args::{ExportOptions, ExportTarget};

/// Fetch the record set and render it per `options`.
pub async fn render_export<C: HttpClient>(
    source: &UserSource<C>,
    options: &ExportOptions,
) -> DeckResult<String> {
    let records = source.fetch().await?;
    let favorites: FavoritesStore = options.favorites.iter().copied().collect();

    let request = ExportRequest::new(options.format, options.favorites_only);
    Ok(request.render(&records, &favorites)?)
}

/// Write rendered output to its target. Returns the file written, if any.
pub fn write_export(
    content: &str,
    options: &ExportOptions,
    config: &DeckConfig,
) -> DeckResult<Option<PathBuf>> {
    match &options.target {
        ExportTarget::Stdout => {
            println!("{}", content);
            Ok(None)
        }
        ExportTarget::File(path) => {
            std::fs::write(path, content)?;
            Ok(Some(path.clone()))
        }
        ExportTarget::DownloadDir => {
            let mut download = DirectoryDownload::resolve(config.download_dir.as_deref());
            let path = download.save(
                content,
                options.format.file_name(),
                options.format.mime_type(),
            )?;
            Ok(Some(path))
        }
    }
}

/// Handle `userdeck export`.
pub async fn handle_export_command(options: ExportOptions, config: &DeckConfig) -> DeckResult<()> {
    let mut config = config.clone();
    if let Some(endpoint) = &options.endpoint {
        config = config.with_endpoint(endpoint.clone());
        config.validate()?;
    }

    let client = ReqwestHttpClient::with_timeout(config.timeout)
        .map_err(|e| DeckError::config("http client", e.to_string()))?;
    let source = UserSource::new(client, config.endpoint.clone());

    let content = render_export(&source, &options).await?;
    if let Some(path) = write_export(&content, &options, &config)? {
        eprintln!("Saved {}", path.display());
    }
    tracing::info!("Headless export as {} finished", options.format);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::mock::{MockHttpClient, MockResponse};
    use crate::export::ExportFormat;
    use tempfile::TempDir;

    const URL: &str = "https://users.test/users";
    const BODY: &str = r#"[
        {"id":1,"name":"Leanne Graham","username":"Bret"},
        {"id":2,"name":"Ervin Howell","username":"Antonette"},
        {"id":3,"name":"Clementine Bauch","username":"Samantha"}
    ]"#;

    fn source() -> UserSource<MockHttpClient> {
        let client = MockHttpClient::new();
        client.set_response(URL, MockResponse::json(BODY));
        UserSource::new(client, URL)
    }

    #[tokio::test]
    async fn test_render_csv_with_favorites_only() {
        let options = ExportOptions {
            format: ExportFormat::Csv,
            favorites: vec![3, 1],
            favorites_only: true,
            ..Default::default()
        };

        let csv = render_export(&source(), &options).await.unwrap();
        let lines: Vec<&str> = csv.lines().collect();

        assert_eq!(lines.len(), 3);
        assert!(lines[1].starts_with("\"Leanne Graham\""));
        assert!(lines[2].starts_with("\"Clementine Bauch\""));
    }

    #[tokio::test]
    async fn test_render_propagates_fetch_failure() {
        let client = MockHttpClient::new();
        client.set_response(URL, MockResponse::status(500, "boom"));
        let source = UserSource::new(client, URL);

        let err = render_export(&source, &ExportOptions::default())
            .await
            .unwrap_err();

        assert!(matches!(err, DeckError::Network(_)));
    }

    #[test]
    fn test_write_to_file_and_download_dir() {
        let tmp = TempDir::new().unwrap();
        let config = DeckConfig::default().with_download_dir(tmp.path());

        let file = tmp.path().join("picked.json");
        let options = ExportOptions {
            target: ExportTarget::File(file.clone()),
            ..Default::default()
        };
        assert_eq!(write_export("[]", &options, &config).unwrap(), Some(file));

        let options = ExportOptions {
            format: ExportFormat::Text,
            target: ExportTarget::DownloadDir,
            ..Default::default()
        };
        let saved = write_export("x", &options, &config).unwrap().unwrap();
        assert_eq!(saved, tmp.path().join("users.txt"));
    }
}
