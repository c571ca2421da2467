//! # Capacidad de Fetch HTTP
//! src/fetch.rs
//!
//! Descarga del contenido de una URL con timeout. El trait `Fetcher` es la
//! costura que permite sustituir la red por un stub en los tests; el
//! servidor nunca distingue subtipos de fallo, solo éxito o fallo.

use std::time::Duration;

/// Timeout del fetch externo (única operación con timeout en el núcleo)
pub const FETCH_TIMEOUT: Duration = Duration::from_secs(5);

/// Capacidad externa de descarga de contenido
///
/// Cualquier fallo (timeout, DNS, conexión rechazada, status no-2xx) debe
/// colapsar en el único resultado de error; quien llama solo ramifica
/// sobre éxito/fallo.
pub trait Fetcher: Send + Sync {
    fn fetch(&self, url: &str) -> Result<String, String>;
}

/// Implementación real sobre un cliente HTTP bloqueante
pub struct HttpFetcher {
    client: reqwest::blocking::Client,
}

impl HttpFetcher {
    /// Crea un fetcher con el timeout por defecto (5 segundos)
    pub fn new() -> Result<Self, String> {
        Self::with_timeout(FETCH_TIMEOUT)
    }

    /// Crea un fetcher con un timeout explícito
    pub fn with_timeout(timeout: Duration) -> Result<Self, String> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| e.to_string())?;
        Ok(Self { client })
    }
}

impl Fetcher for HttpFetcher {
    fn fetch(&self, url: &str) -> Result<String, String> {
        self.client
            .get(url)
            .send()
            .and_then(|response| response.error_for_status())
            .and_then(|response| response.text())
            .map_err(|e| e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_fetcher_builds() {
        assert!(HttpFetcher::new().is_ok());
        assert!(HttpFetcher::with_timeout(Duration::from_millis(100)).is_ok());
    }

    #[test]
    fn test_invalid_url_is_single_failure() {
        // URL sin esquema: el fallo llega como un único Err(String),
        // sin necesidad de tocar la red
        let fetcher = HttpFetcher::new().unwrap();
        let result = fetcher.fetch("no-es-una-url");
        assert!(result.is_err());
    }
}
