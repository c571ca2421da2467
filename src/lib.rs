//! # URL Processor
//! src/lib.rs
//!
//! Servicio distribuido de procesamiento de URLs implementado con threads
//! del sistema operativo: un servidor TCP que desacopla la aceptación de
//! conexiones del procesamiento mediante una cola de tareas y un pool fijo
//! de workers, y un cliente que reparte una lista de URLs entre varios
//! threads emisores.
//!
//! ## Arquitectura
//!
//! El proyecto está dividido en módulos especializados:
//! - `config`: Configuración CLI del servidor y del cliente
//! - `server`: Listener TCP, cola de tareas y pool de workers
//! - `client`: Dispatcher que reparte URLs entre threads emisores
//! - `fetch`: Capacidad externa de descarga HTTP (con timeout)
//! - `words`: Cálculo de las top-K palabras más frecuentes
//! - `stats`: Contador compartido de tareas completadas
//!
//! ## Ejemplo de uso
//!
//! ```ignore
//! use url_processor::config::ServerConfig;
//! use url_processor::fetch::HttpFetcher;
//! use url_processor::server::Server;
//! use std::sync::Arc;
//!
//! let config = ServerConfig::default();
//! let fetcher = Arc::new(HttpFetcher::new().expect("cliente HTTP"));
//! let server = Server::new(config, fetcher);
//! server.run().expect("Error al iniciar servidor");
//! ```

pub mod client;
pub mod config;
pub mod fetch;
pub mod server;
pub mod stats;
pub mod words;
