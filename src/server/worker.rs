//! # Pool de Workers
//! src/server/worker.rs
//!
//! Workers que drenan la cola de tareas. Cada worker es una función plana
//! ejecutada en un thread propio, con su contexto explícito (cola, contador,
//! fetcher, K); no hay subclases de thread ni estado ambiente.
//!
//! Ciclo de cada tarea: fetch → cómputo → respuesta → cierre. Un fallo de
//! fetch colapsa a contenido vacío y la tarea sigue su curso normal; un
//! fallo posterior al fetch responde `{"error": ...}`. En ambos casos la
//! conexión se cierra exactamente una vez y el contador se incrementa
//! exactamente una vez.

use crate::fetch::Fetcher;
use crate::server::queue::{Task, TaskQueue};
use crate::stats::StatsCounter;
use crate::words;
use std::io::Write;
use std::sync::Arc;
use std::thread;

/// Contexto explícito que comparten los workers
///
/// `Clone` comparte la cola, el contador y el fetcher.
#[derive(Clone)]
pub struct WorkerContext {
    /// Cola de tareas pendientes
    pub queue: TaskQueue,

    /// Contador de tareas completadas
    pub stats: StatsCounter,

    /// Capacidad de descarga (con timeout propio)
    pub fetcher: Arc<dyn Fetcher>,

    /// Cantidad de palabras top-K por respuesta
    pub top_k: usize,
}

/// Inicia `count` workers que corren indefinidamente
///
/// Los handles no se retienen (estilo daemon): en el shutdown del proceso
/// las tareas encoladas o en vuelo quedan abandonadas, igual que el accept
/// loop. Comportamiento preservado deliberadamente.
pub fn spawn_workers(count: usize, ctx: &WorkerContext) {
    for i in 0..count {
        let ctx = ctx.clone();
        thread::spawn(move || worker_loop(&format!("worker-{}", i), ctx));
    }
}

/// Loop principal del worker
fn worker_loop(name: &str, ctx: WorkerContext) {
    println!("🔧 Worker {} iniciado", name);

    loop {
        // Bloquea mientras la cola esté vacía
        let task = ctx.queue.dequeue();
        process_task(task, &ctx);
    }
}

/// Procesa una tarea completa: fetch, cómputo, respuesta y cierre
///
/// Público para poder ejercitarlo directamente en tests con un fetcher stub.
pub fn process_task(task: Task, ctx: &WorkerContext) {
    let Task { mut stream, url } = task;

    // Cualquier fallo de fetch (timeout, DNS, rechazo, no-2xx) colapsa a
    // contenido vacío; nunca se responde un error por un fallo de fetch
    let content = ctx.fetcher.fetch(&url).unwrap_or_default();

    let payload = match render_payload(&content, ctx.top_k) {
        Ok(json) => json,
        Err(message) => serde_json::json!({ "error": message }).to_string(),
    };

    // La respuesta se escribe una sola vez; si falla, la tarea igual cuenta
    // como completada
    if let Err(e) = stream.write_all(payload.as_bytes()) {
        eprintln!("   ❌ Error escribiendo respuesta para {}: {}", url, e);
    }
    let _ = stream.flush();

    // Incremento tras completar (o fallar) la escritura; el drop de
    // `stream` al salir cierra la conexión exactamente una vez
    let total = ctx.stats.increment();
    println!("Total de URLs procesadas: {}", total);
}

/// Calcula el top-K y lo serializa como objeto JSON ordenado
fn render_payload(content: &str, k: usize) -> Result<String, String> {
    let top = words::top_k_words(content, k);
    serde_json::to_string(&words::to_json(&top)).map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Read;
    use std::net::{TcpListener, TcpStream};
    use std::time::Duration;

    /// Fetcher stub con contenido fijo
    struct FixedFetcher(String);

    impl Fetcher for FixedFetcher {
        fn fetch(&self, _url: &str) -> Result<String, String> {
            Ok(self.0.clone())
        }
    }

    /// Fetcher stub que falla en toda llamada
    struct FailingFetcher;

    impl Fetcher for FailingFetcher {
        fn fetch(&self, _url: &str) -> Result<String, String> {
            Err("fallo simulado".to_string())
        }
    }

    fn test_context(fetcher: Arc<dyn Fetcher>, top_k: usize) -> WorkerContext {
        WorkerContext {
            queue: TaskQueue::new(),
            stats: StatsCounter::new(),
            fetcher,
            top_k,
        }
    }

    /// Helper: par (lado servidor, lado cliente) conectado por loopback
    fn stream_pair() -> (TcpStream, TcpStream) {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
        let addr = listener.local_addr().unwrap();
        let client = TcpStream::connect(addr).expect("connect");
        let (server, _) = listener.accept().expect("accept");
        (server, client)
    }

    fn read_response(client: &mut TcpStream) -> String {
        let mut body = String::new();
        client.read_to_string(&mut body).expect("read response");
        body
    }

    #[test]
    fn test_process_task_success() {
        let ctx = test_context(
            Arc::new(FixedFetcher("test content test".to_string())),
            1,
        );
        let (server, mut client) = stream_pair();

        process_task(Task::new(server, "http://example.com".to_string()), &ctx);

        let body = read_response(&mut client);
        assert_eq!(body, r#"{"test":2}"#);
        assert_eq!(ctx.stats.read(), 1);
    }

    #[test]
    fn test_process_task_orders_by_count_then_first_occurrence() {
        let ctx = test_context(
            Arc::new(FixedFetcher(
                "hello world hello test world test test".to_string(),
            )),
            2,
        );
        let (server, mut client) = stream_pair();

        process_task(Task::new(server, "http://example.com".to_string()), &ctx);

        let body = read_response(&mut client);
        assert_eq!(body, r#"{"test":3,"hello":2}"#);
    }

    #[test]
    fn test_fetch_failure_yields_empty_object_not_error() {
        let ctx = test_context(Arc::new(FailingFetcher), 5);
        let (server, mut client) = stream_pair();

        process_task(Task::new(server, "http://down.example".to_string()), &ctx);

        let body = read_response(&mut client);
        assert_eq!(body, "{}");
        // El fallo de fetch igual cuenta como tarea completada
        assert_eq!(ctx.stats.read(), 1);
    }

    #[test]
    fn test_counter_increments_even_if_client_already_closed() {
        let ctx = test_context(Arc::new(FixedFetcher("hola".to_string())), 5);
        let (server, client) = stream_pair();

        // El cliente se va antes de recibir la respuesta
        drop(client);

        process_task(Task::new(server, "http://example.com".to_string()), &ctx);
        assert_eq!(ctx.stats.read(), 1);
    }

    #[test]
    fn test_pool_processes_all_tasks_without_lost_counts() {
        const TASKS: usize = 32;

        let ctx = test_context(Arc::new(FixedFetcher("uno dos dos".to_string())), 2);
        spawn_workers(4, &ctx);

        let mut clients = Vec::new();
        for i in 0..TASKS {
            let (server, client) = stream_pair();
            ctx.queue
                .enqueue(Task::new(server, format!("http://example.com/{}", i)));
            clients.push(client);
        }

        // Esperar a que el pool drene la cola
        for _ in 0..200 {
            if ctx.stats.read() as usize == TASKS {
                break;
            }
            thread::sleep(Duration::from_millis(10));
        }
        assert_eq!(ctx.stats.read() as usize, TASKS);

        // Cada cliente recibió exactamente una respuesta válida
        for mut client in clients {
            let body = read_response(&mut client);
            assert_eq!(body, r#"{"dos":2,"uno":1}"#);
        }
    }
}
