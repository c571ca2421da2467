//! # Listener TCP
//! src/server/listener.rs
//!
//! Acepta conexiones y lee una única request (la URL) por conexión nueva.
//! Si la request queda vacía tras el trim, la conexión se descarta en
//! silencio: sin respuesta, sin encolar y sin tocar el contador. Es una
//! limitación documentada del protocolo, no un bug a corregir.
//!
//! El listener nunca hace fetch ni cómputo; encola y vuelve a aceptar.

use crate::config::ServerConfig;
use crate::fetch::Fetcher;
use crate::server::queue::{Task, TaskQueue};
use crate::server::worker::{spawn_workers, WorkerContext};
use crate::stats::StatsCounter;
use std::io::Read;
use std::net::{TcpListener, TcpStream};
use std::sync::Arc;

/// Tamaño del buffer de lectura de requests
///
/// Una request más larga queda truncada: no hay framing en el protocolo.
pub const REQUEST_BUFFER_SIZE: usize = 1024;

/// Servidor de procesamiento de URLs
pub struct Server {
    config: ServerConfig,
    queue: TaskQueue,
    stats: StatsCounter,
    fetcher: Arc<dyn Fetcher>,
}

impl Server {
    pub fn new(config: ServerConfig, fetcher: Arc<dyn Fetcher>) -> Self {
        Self {
            config,
            queue: TaskQueue::new(),
            stats: StatsCounter::new(),
            fetcher,
        }
    }

    /// Acceso al contador compartido (para observación externa)
    pub fn stats(&self) -> StatsCounter {
        self.stats.clone()
    }

    /// Hace bind en la dirección configurada y atiende indefinidamente
    ///
    /// Corre hasta que el proceso sea interrumpido desde afuera; no hay
    /// drenado gradual: lo encolado o en vuelo se abandona.
    pub fn run(&self) -> std::io::Result<()> {
        let address = self.config.address();
        println!("[*] Iniciando servidor en {}", address);

        let listener = TcpListener::bind(&address)?;
        println!("[+] Servidor escuchando en {}", address);

        self.run_on(listener)
    }

    /// Atiende sobre un listener ya creado
    ///
    /// Separado de `run()` para que los tests puedan usar un puerto efímero.
    pub fn run_on(&self, listener: TcpListener) -> std::io::Result<()> {
        // Pool fijo de workers, iniciado una sola vez
        let ctx = WorkerContext {
            queue: self.queue.clone(),
            stats: self.stats.clone(),
            fetcher: Arc::clone(&self.fetcher),
            top_k: self.config.top_k,
        };
        spawn_workers(self.config.workers, &ctx);
        println!("[*] Pool de {} workers iniciado\n", self.config.workers);

        for stream in listener.incoming() {
            match stream {
                Ok(stream) => self.handle_connection(stream),
                Err(e) => {
                    eprintln!("   ❌ Error al aceptar conexión: {}", e);
                }
            }
        }

        Ok(())
    }

    /// Lee la request de una conexión nueva y la encola
    fn handle_connection(&self, mut stream: TcpStream) {
        let mut buffer = [0u8; REQUEST_BUFFER_SIZE];

        // Una única lectura acotada; sin terminador más allá del buffer
        let bytes_read = match stream.read(&mut buffer) {
            Ok(n) => n,
            Err(e) => {
                eprintln!("   ❌ Error leyendo request: {}", e);
                return;
            }
        };

        let url = String::from_utf8_lossy(&buffer[..bytes_read])
            .trim()
            .to_string();

        if url.is_empty() {
            // Violación de protocolo: descarte silencioso, sin respuesta
            return;
        }

        self.queue.enqueue(Task::new(stream, url));
    }
}
