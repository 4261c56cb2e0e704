/// Zustand des Punkt-Drags.
///
/// Der aktive Punkt wird über seinen logischen Index referenziert, nie über
/// eine Kopie oder Referenz. Höchstens ein Punkt ist gleichzeitig aktiv.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DragState {
    active: Option<usize>,
}

impl DragState {
    /// Erstellt einen Zustand ohne aktiven Punkt.
    pub fn new() -> Self {
        Self { active: None }
    }

    /// Logischer Index des aktiven Punkts.
    pub fn active_index(&self) -> Option<usize> {
        self.active
    }

    /// Gibt `true` zurück, wenn gerade ein Punkt gezogen wird.
    pub fn is_dragging(&self) -> bool {
        self.active.is_some()
    }

    /// Gibt `true` zurück, wenn `index` der aktive Punkt ist.
    pub fn is_active(&self, index: usize) -> bool {
        self.active == Some(index)
    }

    /// Macht `index` zum aktiven Punkt.
    pub fn acquire(&mut self, index: usize) {
        self.active = Some(index);
    }

    /// Beendet den Drag.
    pub fn release(&mut self) {
        self.active = None;
    }
}
