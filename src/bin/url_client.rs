//! # URL Client - Entry Point
//! src/bin/url_client.rs
//!
//! Punto de entrada del cliente: carga la lista de URLs, la reparte entre
//! los threads emisores y espera a que todos terminen.

use url_processor::client::{load_urls, Dispatcher};
use url_processor::config::ClientConfig;

fn main() {
    println!("=================================");
    println!("  URL Processing Client");
    println!("=================================\n");

    let config = ClientConfig::new();

    if let Err(e) = config.validate() {
        eprintln!("💥 Configuración inválida: {}", e);
        std::process::exit(1);
    }

    let urls = match load_urls(&config.urls_file) {
        Ok(urls) => urls,
        Err(e) => {
            eprintln!("💥 No se pudo leer {}: {}", config.urls_file, e);
            std::process::exit(1);
        }
    };

    if urls.is_empty() {
        println!("⚠️  {} no contiene URLs; nada que hacer", config.urls_file);
        return;
    }

    println!("⚙️  {} URLs repartidas entre {} threads hacia {}\n",
        urls.len(), config.threads, config.address());

    let dispatcher = Dispatcher::new(config, urls);
    dispatcher.run();

    println!("\n✅ Procesamiento completado ({} URLs)", dispatcher.url_count());
}
