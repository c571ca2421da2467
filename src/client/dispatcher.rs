//! # Dispatcher del Cliente
//! src/client/dispatcher.rs
//!
//! Carga la lista de URLs, la reparte round-robin entre C threads emisores
//! y espera a que todos terminen. Cada URL cae en el bucket `i % C`, con el
//! orden relativo preservado dentro de cada bucket; los buckets vacíos no
//! lanzan thread.

use crate::client::sender::run_sender;
use crate::config::ClientConfig;
use std::fs;
use std::io;
use std::thread;

/// Carga una lista de URLs desde un archivo (una por línea)
///
/// Las líneas se recortan y las vacías se descartan; el orden se preserva.
pub fn load_urls(path: &str) -> io::Result<Vec<String>> {
    let content = fs::read_to_string(path)?;
    Ok(content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect())
}

/// Reparte las URLs en `buckets` listas por índice módulo `buckets`
///
/// Retorna exactamente `buckets` listas; si hay menos URLs que buckets,
/// las listas sobrantes quedan vacías. Cada URL aparece exactamente una
/// vez, en su orden relativo original dentro de su bucket.
pub fn distribute(urls: &[String], buckets: usize) -> Vec<Vec<String>> {
    if buckets == 0 {
        return Vec::new();
    }

    let mut chunks = vec![Vec::new(); buckets];
    for (i, url) in urls.iter().enumerate() {
        chunks[i % buckets].push(url.clone());
    }
    chunks
}

/// Dispatcher que coordina los threads emisores
pub struct Dispatcher {
    config: ClientConfig,
    urls: Vec<String>,
}

impl Dispatcher {
    pub fn new(config: ClientConfig, urls: Vec<String>) -> Self {
        Self { config, urls }
    }

    /// Cantidad de URLs cargadas
    pub fn url_count(&self) -> usize {
        self.urls.len()
    }

    /// Lanza un thread emisor por bucket no vacío y espera a todos
    ///
    /// Cada thread procesa sus URLs secuencialmente; un fallo en una URL se
    /// reporta dentro del emisor y no interrumpe a los demás threads.
    pub fn run(&self) {
        let chunks = distribute(&self.urls, self.config.threads);
        let address = self.config.address();

        let mut handles = Vec::new();
        for (i, chunk) in chunks.into_iter().enumerate() {
            if chunk.is_empty() {
                continue;
            }

            let address = address.clone();
            handles.push(thread::spawn(move || run_sender(i, &address, &chunk)));
        }

        // Esperar a todos los emisores antes de retornar
        for handle in handles {
            if let Err(e) = handle.join() {
                eprintln!("   ❌ Thread emisor terminó con pánico: {:?}", e);
            }
        }
    }
}
