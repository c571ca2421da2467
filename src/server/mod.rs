//! # Módulo del Servidor
//! src/server/mod.rs
//!
//! Este módulo implementa el lado servidor del servicio:
//! 1. `listener`: acepta conexiones y lee una URL por conexión
//! 2. `queue`: cola FIFO thread-safe que desacopla aceptación de procesamiento
//! 3. `worker`: pool fijo de workers que drena la cola
//!
//! El listener nunca hace fetch ni cómputo; solo encola. Así las conexiones
//! nuevas no quedan bloqueadas detrás de I/O de red lento.

pub mod listener;
pub mod queue;
pub mod worker;

// Re-exportar para facilitar el uso
pub use listener::Server;
pub use queue::{Task, TaskQueue};
pub use worker::{spawn_workers, WorkerContext};
