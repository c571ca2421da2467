//! # Módulo del Cliente
//! src/client/mod.rs
//!
//! Lado cliente del servicio:
//! 1. `dispatcher`: carga la lista de URLs, la reparte round-robin entre
//!    threads emisores y espera a que todos terminen
//! 2. `sender`: envía una URL por conexión y lee la respuesta JSON
//!
//! Un fallo sobre una URL se reporta y el thread sigue con la siguiente;
//! nunca aborta a sus hermanos.

pub mod dispatcher;
pub mod sender;

// Re-exportar para facilitar el uso
pub use dispatcher::{distribute, load_urls, Dispatcher};
pub use sender::send_url;
