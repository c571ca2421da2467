//! # Emisor de URLs
//! src/client/sender.rs
//!
//! Envío de una URL por conexión: conectar, mandar los bytes de la URL,
//! leer una única respuesta acotada y parsearla como JSON. El protocolo no
//! tiene framing: una respuesta más grande que el buffer llega truncada y
//! se reporta como fallo de decodificación de esa URL.

use serde::Deserialize;
use serde_json::Value;
use std::io::{Read, Write};
use std::net::TcpStream;

/// Tamaño del buffer de lectura de respuestas
pub const RESPONSE_BUFFER_SIZE: usize = 4096;

/// Payload de error que puede devolver el servidor
#[derive(Debug, Deserialize)]
struct ErrorResponse {
    error: String,
}

/// Envía una URL al servidor y retorna la respuesta parseada
///
/// Cada llamada abre una conexión nueva; el servidor cierra tras una única
/// respuesta, así que la conexión no se reutiliza. Cualquier fallo
/// (conexión, envío, lectura o decodificación) se colapsa en un único
/// Err(String) para esa URL.
pub fn send_url(address: &str, url: &str) -> Result<Value, String> {
    let mut stream =
        TcpStream::connect(address).map_err(|e| format!("conexión fallida: {}", e))?;

    stream
        .write_all(url.trim().as_bytes())
        .map_err(|e| format!("envío fallido: {}", e))?;
    stream.flush().map_err(|e| format!("envío fallido: {}", e))?;

    // Una única lectura acotada; sin length-prefix
    let mut buffer = [0u8; RESPONSE_BUFFER_SIZE];
    let bytes_read = stream
        .read(&mut buffer)
        .map_err(|e| format!("lectura fallida: {}", e))?;

    let body = String::from_utf8_lossy(&buffer[..bytes_read]);
    serde_json::from_str(&body).map_err(|e| format!("respuesta inválida: {}", e))
}

/// Loop de un thread emisor: procesa sus URLs en orden, una conexión por URL
///
/// Un fallo sobre una URL se reporta y el thread continúa con la siguiente.
pub fn run_sender(id: usize, address: &str, urls: &[String]) {
    for url in urls {
        match send_url(address, url) {
            Ok(value) => match serde_json::from_value::<ErrorResponse>(value.clone()) {
                Ok(err) => println!("[emisor-{}] {} -> error del servidor: {}", id, url, err.error),
                Err(_) => println!("[emisor-{}] {}: {}", id, url, value),
            },
            Err(e) => eprintln!("[emisor-{}] Error procesando {}: {}", id, url, e),
        }
    }
}
