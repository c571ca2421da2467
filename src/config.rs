//! # Configuración del Servicio
//! src/config.rs
//!
//! Define la configuración del servidor y del cliente con soporte completo
//! para argumentos CLI y variables de entorno.
//!
//! ## Ejemplos de uso
//!
//! ### Servidor
//! ```bash
//! ./url_server --workers 8 -k 10 --host 0.0.0.0 --port 8888
//! ```
//!
//! ### Cliente
//! ```bash
//! ./url_client 4 urls.txt --host 127.0.0.1 --port 8888
//! ```
//!
//! ### Variables de entorno
//! ```bash
//! URL_PORT=9999 URL_WORKERS=8 ./url_server
//! ```

use clap::Parser;

/// Configuración del servidor de procesamiento de URLs
#[derive(Debug, Clone, Parser)]
#[command(name = "url_server")]
#[command(about = "Servidor concurrente de procesamiento de URLs (pool de workers + cola de tareas)")]
#[command(version = "0.1.0")]
pub struct ServerConfig {
    /// Número de worker threads que consumen la cola de tareas
    #[arg(short = 'w', long = "workers", default_value = "4", env = "URL_WORKERS")]
    pub workers: usize,

    /// Cantidad de palabras top-K a devolver por URL
    #[arg(short = 'k', default_value = "5", env = "URL_TOP_K")]
    pub top_k: usize,

    /// Host/IP en el que escucha el servidor
    #[arg(long, default_value = "127.0.0.1", env = "URL_HOST")]
    pub host: String,

    /// Puerto en el que escucha el servidor
    #[arg(short = 'p', long, default_value = "8888", env = "URL_PORT")]
    pub port: u16,
}

impl ServerConfig {
    /// Crea una nueva configuración parseando argumentos CLI
    pub fn new() -> Self {
        ServerConfig::parse()
    }

    /// Obtiene la dirección completa para bind (host:port)
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Valida la configuración
    ///
    /// Retorna errores si hay valores inválidos
    pub fn validate(&self) -> Result<(), String> {
        if self.workers == 0 {
            return Err("Workers must be >= 1".to_string());
        }
        Ok(())
    }

    /// Imprime un resumen de la configuración
    pub fn print_summary(&self) {
        println!("⚙️  Configuración del servidor:");
        println!("   Address:   {}", self.address());
        println!("   Workers:   {}", self.workers);
        println!("   Top-K:     {}", self.top_k);
        println!();
    }
}

impl Default for ServerConfig {
    /// Configuración por defecto
    fn default() -> Self {
        Self {
            workers: 4,
            top_k: 5,
            host: "127.0.0.1".to_string(),
            port: 8888,
        }
    }
}

/// Configuración del cliente de procesamiento de URLs
#[derive(Debug, Clone, Parser)]
#[command(name = "url_client")]
#[command(about = "Cliente multi-hilo que reparte una lista de URLs entre threads emisores")]
#[command(version = "0.1.0")]
pub struct ClientConfig {
    /// Número de threads emisores
    pub threads: usize,

    /// Archivo con la lista de URLs (una por línea)
    pub urls_file: String,

    /// Host del servidor
    #[arg(long, default_value = "127.0.0.1", env = "URL_HOST")]
    pub host: String,

    /// Puerto del servidor
    #[arg(short = 'p', long, default_value = "8888", env = "URL_PORT")]
    pub port: u16,
}

impl ClientConfig {
    /// Crea una nueva configuración parseando argumentos CLI
    pub fn new() -> Self {
        ClientConfig::parse()
    }

    /// Obtiene la dirección del servidor (host:port)
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Valida la configuración
    pub fn validate(&self) -> Result<(), String> {
        if self.threads == 0 {
            return Err("Client threads must be >= 1".to_string());
        }
        Ok(())
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            threads: 4,
            urls_file: "urls.txt".to_string(),
            host: "127.0.0.1".to_string(),
            port: 8888,
        }
    }
}
