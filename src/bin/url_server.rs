//! # URL Server - Entry Point
//! src/bin/url_server.rs
//!
//! Punto de entrada del servidor de procesamiento de URLs.
//! Corre hasta ser interrumpido desde afuera (Ctrl+C).

use std::sync::Arc;
use url_processor::config::ServerConfig;
use url_processor::fetch::HttpFetcher;
use url_processor::server::Server;

fn main() {
    println!("=================================");
    println!("  URL Processing Server");
    println!("=================================\n");

    // Configuración desde CLI / variables de entorno
    let config = ServerConfig::new();

    if let Err(e) = config.validate() {
        eprintln!("💥 Configuración inválida: {}", e);
        std::process::exit(1);
    }

    config.print_summary();

    // Capacidad de fetch con timeout de 5 segundos
    let fetcher = match HttpFetcher::new() {
        Ok(fetcher) => Arc::new(fetcher),
        Err(e) => {
            eprintln!("💥 No se pudo crear el cliente HTTP: {}", e);
            std::process::exit(1);
        }
    };

    // Iniciar el servidor (esto bloqueará el thread)
    let server = Server::new(config, fetcher);
    if let Err(e) = server.run() {
        eprintln!("💥 Error fatal: {}", e);
        std::process::exit(1);
    }
}
