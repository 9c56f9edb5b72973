//! Begrenztes Command-Log für Diagnose und Tests.
//!
//! Dekodierte Bilder werden nicht mitgeloggt: ein Eintrag für eine
//! Decode-Completion hält nur Sequenznummer, Pfad und Ergebnis-Art, damit
//! ersetzte Hintergrundbilder sofort freigegeben werden können.

use super::AppCommand;

/// Ein geloggter Command.
#[derive(Debug, Clone)]
pub enum LogEntry {
    /// Command ohne große Nutzdaten, unverändert übernommen
    Command(AppCommand),
    /// Zusammenfassung von `AppCommand::ApplyDecodedBackground`
    DecodedBackground {
        request_id: u64,
        path: String,
        succeeded: bool,
    },
}

impl LogEntry {
    fn from_command(command: &AppCommand) -> Self {
        match command {
            AppCommand::ApplyDecodedBackground { completion } => LogEntry::DecodedBackground {
                request_id: completion.request_id,
                path: completion.path.clone(),
                succeeded: completion.result.is_ok(),
            },
            other => LogEntry::Command(other.clone()),
        }
    }

    /// Der geloggte Command, falls er vollständig gespeichert wurde.
    pub fn command(&self) -> Option<&AppCommand> {
        match self {
            LogEntry::Command(command) => Some(command),
            LogEntry::DecodedBackground { .. } => None,
        }
    }
}

/// Speichert ausgeführte Commands in Reihenfolge.
#[derive(Default)]
pub struct CommandLog {
    entries: Vec<LogEntry>,
}

impl CommandLog {
    const MAX_ENTRIES: usize = 1000;

    /// Erstellt ein leeres Command-Log.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Fügt einen ausgeführten Command hinzu.
    /// Begrenzt auf MAX_ENTRIES, ältere Einträge werden verworfen
    /// (Pointer-Moves während eines Drags erzeugen viele Einträge).
    pub fn record(&mut self, command: &AppCommand) {
        if self.entries.len() >= Self::MAX_ENTRIES {
            self.entries.drain(..Self::MAX_ENTRIES / 2);
        }
        self.entries.push(LogEntry::from_command(command));
    }

    /// Gibt die Anzahl der geloggten Commands zurück.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Gibt `true` zurück, wenn keine Commands vorhanden sind.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Liefert eine read-only Sicht auf alle Einträge.
    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    /// Letzter vollständig gespeicherter Command.
    pub fn last_command(&self) -> Option<&AppCommand> {
        self.entries.last().and_then(LogEntry::command)
    }
}
