//! Asynchrones Laden von Hintergrundbildern.
//!
//! Jede Anfrage bekommt eine fortlaufende Sequenznummer und wird in einem
//! eigenen Worker-Thread dekodiert. Das Ergebnis kommt als
//! `DecodeCompletion` über einen Channel zurück zum Control-Thread.
//! Nur die Completion der zuletzt gestellten Anfrage darf angewendet werden.

use crate::core::{BackgroundError, BackgroundImage};
use crossbeam_channel::{Receiver, Sender};
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

/// Ergebnis einer abgeschlossenen Dekodierung.
#[derive(Debug, Clone)]
pub struct DecodeCompletion {
    /// Sequenznummer der auslösenden Anfrage
    pub request_id: u64,
    /// Angefragter Dateipfad (für Logs und Statusmeldungen)
    pub path: String,
    /// Dekodiertes Bild oder Fehler
    pub result: Result<Arc<BackgroundImage>, BackgroundError>,
}

/// Verwaltet laufende Dekodierungen und deren Sequenznummern.
pub struct BackgroundLoader {
    next_request_id: u64,
    latest_request_id: Option<u64>,
    in_flight: usize,
    sender: Sender<DecodeCompletion>,
    receiver: Receiver<DecodeCompletion>,
}

impl Default for BackgroundLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl BackgroundLoader {
    /// Erstellt einen Loader ohne laufende Anfragen.
    pub fn new() -> Self {
        let (sender, receiver) = crossbeam_channel::unbounded();
        Self {
            next_request_id: 1,
            latest_request_id: None,
            in_flight: 0,
            sender,
            receiver,
        }
    }

    /// Startet die Dekodierung von `path` im Hintergrund.
    ///
    /// Nicht-Bilddateien werden vor dem Dekodieren abgelehnt; dann wird
    /// keine Sequenznummer vergeben.
    pub fn request(&mut self, path: &Path) -> Result<u64, BackgroundError> {
        BackgroundImage::ensure_image_kind(path)?;

        let request_id = self.next_request_id;
        let label = path.display().to_string();
        let path_buf = path.to_path_buf();
        let sender = self.sender.clone();

        std::thread::Builder::new()
            .name(format!("background-decode-{request_id}"))
            .spawn(move || {
                let result = BackgroundImage::load_from_file(&path_buf).map(Arc::new);
                let completion = DecodeCompletion {
                    request_id,
                    path: path_buf.display().to_string(),
                    result,
                };
                // Empfänger existiert nach Programmende evtl. nicht mehr
                if sender.send(completion).is_err() {
                    log::debug!("Dekodierung #{} verworfen: Empfänger geschlossen", request_id);
                }
            })
            .map_err(|e| BackgroundError::DecodeFailure {
                path: label.clone(),
                message: format!("worker thread could not be started: {e}"),
            })?;

        self.next_request_id += 1;
        self.latest_request_id = Some(request_id);
        self.in_flight += 1;
        log::info!("Hintergrundbild angefordert: {} (Anfrage #{})", label, request_id);
        Ok(request_id)
    }

    /// Holt alle bereits eingetroffenen Completions, ohne zu blockieren.
    pub fn drain_completions(&self) -> Vec<DecodeCompletion> {
        self.receiver.try_iter().collect()
    }

    /// Wartet höchstens `timeout` auf die nächste Completion.
    pub fn wait_for_completion(&self, timeout: Duration) -> Option<DecodeCompletion> {
        self.receiver.recv_timeout(timeout).ok()
    }

    /// Prüft, ob die Completion zur zuletzt gestellten Anfrage gehört.
    pub fn is_current(&self, request_id: u64) -> bool {
        self.latest_request_id == Some(request_id)
    }

    /// Vermerkt, dass eine Completion verarbeitet wurde.
    pub fn mark_finished(&mut self) {
        self.in_flight = self.in_flight.saturating_sub(1);
    }

    /// Anzahl gestarteter, noch nicht verarbeiteter Dekodierungen.
    pub fn in_flight(&self) -> usize {
        self.in_flight
    }
}
