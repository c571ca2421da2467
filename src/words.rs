//! # Top-K Palabras
//! src/words.rs
//!
//! Cálculo de las K palabras más frecuentes de un texto. Una palabra es un
//! run maximal de letras ASCII, normalizado a minúsculas. Los empates de
//! frecuencia se resuelven por orden de primera aparición en el texto.

use regex::Regex;
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::sync::OnceLock;

/// Patrón de palabra: run maximal de letras ASCII
fn word_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"[a-zA-Z]+").expect("patrón de palabra inválido"))
}

/// Calcula las top-K palabras de un texto
///
/// Retorna a lo sumo `k` pares `(palabra, conteo)` ordenados por conteo
/// descendente; los empates conservan el orden de primera aparición.
pub fn top_k_words(text: &str, k: usize) -> Vec<(String, u64)> {
    // Conteo en orden de aparición: el índice del Vec es el orden de
    // primera aparición de cada palabra
    let mut first_seen: HashMap<String, usize> = HashMap::new();
    let mut counts: Vec<(String, u64)> = Vec::new();

    for m in word_pattern().find_iter(text) {
        let word = m.as_str().to_ascii_lowercase();
        match first_seen.get(&word) {
            Some(&idx) => counts[idx].1 += 1,
            None => {
                first_seen.insert(word.clone(), counts.len());
                counts.push((word, 1));
            }
        }
    }

    // sort estable: los empates conservan el orden de primera aparición
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts.truncate(k);
    counts
}

/// Convierte un resultado top-K en un objeto JSON ordenado
///
/// El objeto conserva el orden de las entradas (serde_json con
/// `preserve_order`): conteo descendente, empates por primera aparición.
pub fn to_json(words: &[(String, u64)]) -> Value {
    let mut map = Map::new();
    for (word, count) in words {
        map.insert(word.clone(), Value::from(*count));
    }
    Value::Object(map)
}
