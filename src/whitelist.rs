//! Whitelist loading from a CSV file with a `domain` column

use std::path::Path;

use thiserror::Error;
use tracing::info;

use crate::types::Domain;

#[derive(Debug, Error)]
pub enum WhitelistError {
    #[error("failed to read whitelist '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse whitelist: {0}")]
    Csv(#[from] csv::Error),
    #[error("whitelist has no 'domain' column")]
    MissingDomainColumn,
}

/// Load the ordered parent-domain whitelist.
///
/// Rows are kept in file order; blank domain cells are skipped. An empty file
/// (headers only) yields an empty whitelist, which is valid and produces an
/// empty result mapping downstream.
pub fn load(path: &Path) -> Result<Vec<Domain>, WhitelistError> {
    let file = std::fs::File::open(path).map_err(|source| WhitelistError::Io {
        path: path.display().to_string(),
        source,
    })?;

    let mut reader = csv::Reader::from_reader(file);

    let domain_index = reader
        .headers()?
        .iter()
        .position(|h| h.trim() == "domain")
        .ok_or(WhitelistError::MissingDomainColumn)?;

    let mut domains = Vec::new();
    for record in reader.records() {
        let record = record?;
        if let Some(value) = record.get(domain_index) {
            let domain = value.trim();
            if !domain.is_empty() {
                domains.push(domain.to_string());
            }
        }
    }

    info!("loaded {} whitelisted domains from {}", domains.len(), path.display());
    Ok(domains)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_csv(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{content}").unwrap();
        file
    }

    #[test]
    fn loads_domains_in_file_order() {
        let file = write_csv("domain\nexample.com\npaypal.com\ngithub.com\n");
        let domains = load(file.path()).unwrap();
        assert_eq!(domains, vec!["example.com", "paypal.com", "github.com"]);
    }

    #[test]
    fn finds_domain_column_among_others() {
        let file = write_csv("rank,domain,category\n1,example.com,tech\n2,bank.com,finance\n");
        let domains = load(file.path()).unwrap();
        assert_eq!(domains, vec!["example.com", "bank.com"]);
    }

    #[test]
    fn rejects_missing_domain_column() {
        let file = write_csv("hostname\nexample.com\n");
        let err = load(file.path()).unwrap_err();
        assert!(matches!(err, WhitelistError::MissingDomainColumn));
    }

    #[test]
    fn headers_only_yields_empty_whitelist() {
        let file = write_csv("domain\n");
        assert!(load(file.path()).unwrap().is_empty());
    }

    #[test]
    fn blank_cells_are_skipped() {
        let file = write_csv("domain\nexample.com\n\" \"\nbank.com\n");
        let domains = load(file.path()).unwrap();
        assert_eq!(domains, vec!["example.com", "bank.com"]);
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = load(Path::new("/nonexistent/whitelist.csv")).unwrap_err();
        assert!(matches!(err, WhitelistError::Io { .. }));
    }
}
