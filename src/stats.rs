//! # Contador de Estadísticas
//! src/stats.rs
//!
//! Contador compartido de tareas completadas. Lo incrementan los workers
//! al terminar cada tarea (con éxito o con error de procesamiento); es
//! puramente informativo y ninguna decisión de control depende de él.

use std::sync::{Arc, Mutex};

/// Contador monotónico thread-safe de tareas completadas
///
/// `Clone` comparte el mismo contador interno, por lo que todos los
/// workers ven el mismo total.
#[derive(Clone)]
pub struct StatsCounter {
    inner: Arc<Mutex<u64>>,
}

impl StatsCounter {
    /// Crea un nuevo contador en cero
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(0)),
        }
    }

    /// Incrementa el contador en 1 y retorna el nuevo total
    ///
    /// El read-modify-write completo ocurre bajo el lock, así que no se
    /// pierden incrementos aunque haya varios workers compitiendo.
    pub fn increment(&self) -> u64 {
        let mut count = self.inner.lock().unwrap();
        *count += 1;
        *count
    }

    /// Lee el total actual
    pub fn read(&self) -> u64 {
        *self.inner.lock().unwrap()
    }
}

impl Default for StatsCounter {
    fn default() -> Self {
        Self::new()
    }
}
