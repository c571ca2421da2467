//! # Cola de Tareas
//! src/server/queue.rs
//!
//! Cola FIFO thread-safe, sin límite de capacidad, multi-productor y
//! multi-consumidor. El listener encola; los workers desencolan bloqueando
//! cuando está vacía. Sin control de admisión: bajo sobrecarga sostenida el
//! backlog puede crecer sin límite (limitación conocida y preservada).

use std::collections::VecDeque;
use std::net::TcpStream;
use std::sync::{Arc, Condvar, Mutex};

/// Una tarea pendiente: la conexión del cliente y la URL solicitada
///
/// La tarea es propiedad exclusiva del worker que la desencola; la conexión
/// se cierra cuando el worker la suelta.
pub struct Task {
    /// Conexión del cliente que pidió la URL
    pub stream: TcpStream,

    /// URL a procesar (ya sin espacios circundantes)
    pub url: String,
}

impl Task {
    pub fn new(stream: TcpStream, url: String) -> Self {
        Self { stream, url }
    }
}

/// Cola FIFO thread-safe de tareas pendientes
pub struct TaskQueue {
    /// Cola interna
    deque: Arc<Mutex<VecDeque<Task>>>,

    /// Condvar para notificar cuando hay nuevas tareas
    condvar: Arc<Condvar>,
}

impl TaskQueue {
    /// Crea una nueva cola vacía
    pub fn new() -> Self {
        Self {
            deque: Arc::new(Mutex::new(VecDeque::new())),
            condvar: Arc::new(Condvar::new()),
        }
    }

    /// Encola una tarea
    ///
    /// Nunca falla: la cola no tiene capacidad máxima.
    pub fn enqueue(&self, task: Task) {
        let mut deque = self.deque.lock().unwrap();
        deque.push_back(task);

        // Notificar a workers esperando
        self.condvar.notify_one();
    }

    /// Desencola la tarea más antigua
    ///
    /// Bloquea hasta que haya una tarea disponible
    pub fn dequeue(&self) -> Task {
        let mut deque = self.deque.lock().unwrap();

        loop {
            if let Some(task) = deque.pop_front() {
                return task;
            }

            // Esperar a que haya tareas
            deque = self.condvar.wait(deque).unwrap();
        }
    }

    /// Intenta desencolar sin bloquear
    ///
    /// Retorna Some(task) si hay una tarea, None si la cola está vacía
    pub fn try_dequeue(&self) -> Option<Task> {
        let mut deque = self.deque.lock().unwrap();
        deque.pop_front()
    }

    /// Retorna el tamaño actual de la cola
    pub fn len(&self) -> usize {
        let deque = self.deque.lock().unwrap();
        deque.len()
    }

    /// Verifica si la cola está vacía
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Clone for TaskQueue {
    fn clone(&self) -> Self {
        Self {
            deque: Arc::clone(&self.deque),
            condvar: Arc::clone(&self.condvar),
        }
    }
}

impl Default for TaskQueue {
    fn default() -> Self {
        Self::new()
    }
}
